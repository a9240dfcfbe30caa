//! Terminal color representations.
//!
//! This module offers [`AnsiColor`] for the 16 extended ANSI colors and
//! [`Colorant`], which wraps ANSI colors, 8-bit indexed colors, 24-bit RGB
//! colors, and the terminal's default color. A colorant does not know whether
//! it colors text or background; that is decided by the
//! [`Layer`](crate::style::Layer) it is written for.

use crate::error::OutOfBoundsError;
use crate::style::{Fidelity, Layer};

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// The 16 extended ANSI colors.
///
/// Rust code converts between 8-bit color codes and enumeration variants with
/// [`AnsiColor as
/// TryFrom<u8>`](enum.AnsiColor.html#impl-TryFrom%3Cu8%3E-for-AnsiColor) and
/// [`u8 as
/// From<AnsiColor>`](enum.AnsiColor.html#impl-From%3CAnsiColor%3E-for-u8).
///
/// [`AnsiColor::BrightBlack`] doubles as the gray of most terminal themes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    const ALL: [AnsiColor; 16] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::BrightBlack,
        AnsiColor::BrightRed,
        AnsiColor::BrightGreen,
        AnsiColor::BrightYellow,
        AnsiColor::BrightBlue,
        AnsiColor::BrightMagenta,
        AnsiColor::BrightCyan,
        AnsiColor::BrightWhite,
    ];

    /// Get an iterator over all ANSI colors in order.
    pub fn all() -> impl ExactSizeIterator<Item = AnsiColor> {
        Self::ALL.into_iter()
    }

    /// Determine whether this ANSI color is bright.
    pub const fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Get the base version of this ANSI color.
    ///
    /// If this color is bright, this method returns its non-bright version.
    /// Otherwise, it returns the same color.
    pub const fn to_base(&self) -> AnsiColor {
        Self::ALL[(*self as usize) % 8]
    }

    /// Get the bright version of this ANSI color.
    ///
    /// If the color is not bright, this method returns its bright version.
    /// Otherwise, it returns the same color.
    pub const fn to_bright(&self) -> AnsiColor {
        Self::ALL[(*self as usize) % 8 + 8]
    }

    /// Get this ANSI color's name.
    ///
    /// This method returns the human-readable name, e.g., `"bright green"` for
    /// [`AnsiColor::BrightGreen`].
    pub fn name(&self) -> &'static str {
        use AnsiColor::*;

        match self {
            Black => "black",
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            Magenta => "magenta",
            Cyan => "cyan",
            White => "white",
            BrightBlack => "bright black",
            BrightRed => "bright red",
            BrightGreen => "bright green",
            BrightYellow => "bright yellow",
            BrightBlue => "bright blue",
            BrightMagenta => "bright magenta",
            BrightCyan => "bright cyan",
            BrightWhite => "bright white",
        }
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| OutOfBoundsError::new(value, 0..=15))
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value as u8
    }
}

// ====================================================================================================================
// Colorant
// ====================================================================================================================

/// A terminal color.
///
/// This enumeration unifies the color representations that can be written as
/// SGR parameters, i.e., the default color, ANSI colors, 8-bit indexed colors,
/// and 24-bit RGB colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Colorant {
    /// The terminal's default foreground or background color.
    Default,
    /// One of the 16 extended ANSI colors.
    Ansi(AnsiColor),
    /// An 8-bit indexed color.
    EightBit(u8),
    /// A 24-bit RGB color.
    Rgb(u8, u8, u8),
}

impl Colorant {
    /// Get the minimum fidelity for rendering this colorant without conversion.
    pub const fn fidelity(&self) -> Fidelity {
        match self {
            Self::Default | Self::Ansi(_) => Fidelity::Ansi,
            Self::EightBit(_) => Fidelity::EightBit,
            Self::Rgb(..) => Fidelity::TwentyFourBit,
        }
    }

    /// Write the colorant's SGR parameters for the given layer with the given
    /// formatter.
    pub fn write_sgr_params(
        &self,
        layer: Layer,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "{}", 39 + layer.offset()),
            Self::Ansi(c) => {
                let base = if c.is_bright() { 90 } else { 30 } + layer.offset();
                write!(f, "{}", base + c.to_base() as u8)
            }
            Self::EightBit(c) => write!(f, "{};5;{}", 38 + layer.offset(), c),
            Self::Rgb(r, g, b) => write!(f, "{};2;{};{};{}", 38 + layer.offset(), r, g, b),
        }
    }
}

impl From<AnsiColor> for Colorant {
    fn from(value: AnsiColor) -> Self {
        Self::Ansi(value)
    }
}

impl From<u8> for Colorant {
    fn from(value: u8) -> Self {
        Self::EightBit(value)
    }
}

impl From<[u8; 3]> for Colorant {
    fn from(value: [u8; 3]) -> Self {
        Self::Rgb(value[0], value[1], value[2])
    }
}
