use std::borrow::Cow;

use super::{Fidelity, Format, Layer};
use crate::termco::{AnsiColor, Colorant};
use crate::Console;

/// The ANSI escape sequence restoring the terminal's default appearance.
///
/// This is the full SGR reset. It does not merely undo the attributes of some
/// style but clears all attributes and colors.
pub const RESET: &str = "\x1b[0m";

/// A style attribute, i.e., a text format, foreground color, or background
/// color.
///
/// Attributes are a closed set. Each attribute writes one or more SGR
/// parameters and needs no validation at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// A text format such as bold or italic.
    Format(Format),
    /// A text color.
    Foreground(Colorant),
    /// A background color.
    Background(Colorant),
}

impl Attribute {
    /// Get the minimum fidelity for rendering this attribute.
    pub const fn fidelity(&self) -> Fidelity {
        match self {
            Self::Format(_) => Fidelity::NoColor,
            Self::Foreground(colorant) | Self::Background(colorant) => colorant.fidelity(),
        }
    }

    /// Write this attribute's SGR parameters with the given formatter.
    pub fn write_sgr_params(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(format) => write!(f, "{}", format.enable_sgr()),
            Self::Foreground(colorant) => colorant.write_sgr_params(Layer::Foreground, f),
            Self::Background(colorant) => colorant.write_sgr_params(Layer::Background, f),
        }
    }
}

impl From<Format> for Attribute {
    fn from(value: Format) -> Self {
        Self::Format(value)
    }
}

/// A bare colorant is a foreground color.
impl From<Colorant> for Attribute {
    fn from(value: Colorant) -> Self {
        Self::Foreground(value)
    }
}

/// A bare ANSI color is a foreground color.
impl From<AnsiColor> for Attribute {
    fn from(value: AnsiColor) -> Self {
        Self::Foreground(value.into())
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A terminal style.
///
/// A terminal style is an ordered sequence of zero or more [`Attribute`]s. The
/// order is preserved when writing the style as an ANSI escape sequence.
/// Attributes are not deduplicated; if a style has two foreground colors, both
/// are written and the terminal applies the later one. A style without
/// attributes is the identity style and leaves text unchanged.
///
/// Since instances are immutable, terminal styles can be arbitrarily reused
/// and shared between threads. Styles over `'static` attribute slices can be
/// created in const context with [`Style::new`].
///
/// # Example
///
/// ```
/// # use prettyprint::Console;
/// # use prettyprint::style::Style;
/// # use prettyprint::termco::AnsiColor;
/// let style = Style::default()
///     .bold()
///     .with_foreground(AnsiColor::Red);
///
/// let console = Console::new();
/// assert_eq!(style.render_for(&console, "Wow!"), "\x1b[1;31mWow!\x1b[0m");
///
/// console.disable_styling();
/// assert_eq!(style.render_for(&console, "Wow!"), "Wow!");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    attributes: Cow<'static, [Attribute]>,
}

impl Style {
    /// Create a new style from the given attributes in const context.
    pub const fn new(attributes: &'static [Attribute]) -> Self {
        Self {
            attributes: Cow::Borrowed(attributes),
        }
    }

    /// Create a new style with the given attribute appended.
    pub fn with(&self, attribute: impl Into<Attribute>) -> Self {
        let mut attributes = self.attributes.clone();
        attributes.to_mut().push(attribute.into());
        Self { attributes }
    }

    /// Create a new style with added bold formatting.
    pub fn bold(&self) -> Self {
        self.with(Format::Bold)
    }

    /// Create a new style with added thin formatting.
    pub fn thin(&self) -> Self {
        self.with(Format::Thin)
    }

    /// Create a new style with added italic formatting.
    pub fn italic(&self) -> Self {
        self.with(Format::Italic)
    }

    /// Create a new style with added underlined formatting.
    pub fn underlined(&self) -> Self {
        self.with(Format::Underlined)
    }

    /// Create a new style with added blinking formatting.
    pub fn blinking(&self) -> Self {
        self.with(Format::Blinking)
    }

    /// Create a new style with added reversed formatting.
    pub fn reversed(&self) -> Self {
        self.with(Format::Reversed)
    }

    /// Create a new style with added hidden formatting.
    pub fn hidden(&self) -> Self {
        self.with(Format::Hidden)
    }

    /// Create a new style with added stricken formatting.
    pub fn stricken(&self) -> Self {
        self.with(Format::Stricken)
    }

    /// Create a new style with the given foreground color appended.
    pub fn with_foreground(&self, color: impl Into<Colorant>) -> Self {
        self.with(Attribute::Foreground(color.into()))
    }

    /// Create a new style with the given background color appended.
    pub fn with_background(&self, color: impl Into<Colorant>) -> Self {
        self.with(Attribute::Background(color.into()))
    }

    /// Get this style's attributes in order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Determine whether this style is the identity style.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Determine this style's fidelity.
    ///
    /// This method computes the maximum fidelity of this style's attributes.
    pub fn fidelity(&self) -> Fidelity {
        self.attributes
            .iter()
            .map(Attribute::fidelity)
            .max()
            .unwrap_or(Fidelity::Plain)
    }

    /// Cap this style to the given fidelity.
    ///
    /// The capped style retains only those attributes the fidelity covers, in
    /// their original order.
    pub fn cap(&self, fidelity: Fidelity) -> Self {
        if self.fidelity() <= fidelity {
            return self.clone();
        }

        self.attributes
            .iter()
            .filter(|attribute| attribute.fidelity() <= fidelity)
            .copied()
            .collect()
    }

    /// Render the text with this style, consulting the global console.
    ///
    /// See [`Style::render_for`].
    pub fn render(&self, text: &str) -> String {
        self.render_for(Console::global(), text)
    }

    /// Render the text with this style, consulting the given console.
    ///
    /// If the console has styling disabled or this style has no attributes,
    /// this method returns the text unchanged. Otherwise, it returns the text
    /// prefixed by this style's escape sequence and suffixed by [`RESET`].
    pub fn render_for(&self, console: &Console, text: &str) -> String {
        if self.is_empty() || !console.is_styling_enabled() {
            return text.to_string();
        }

        format!("{}{}{}", self, text, RESET)
    }
}

impl From<Vec<Attribute>> for Style {
    fn from(value: Vec<Attribute>) -> Self {
        Self {
            attributes: Cow::Owned(value),
        }
    }
}

impl FromIterator<Attribute> for Style {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Displaying a style writes its escape sequence, without text and reset.
impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        f.write_str("\x1b[")?;
        for (index, attribute) in self.attributes.iter().enumerate() {
            if 0 < index {
                f.write_str(";")?;
            }
            attribute.write_sgr_params(f)?;
        }
        f.write_str("m")
    }
}

// ----------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    const FORMATS: [Format; 9] = [
        Format::Bold,
        Format::Thin,
        Format::Italic,
        Format::Underlined,
        Format::Blinking,
        Format::RapidBlinking,
        Format::Reversed,
        Format::Hidden,
        Format::Stricken,
    ];

    fn arb_attribute() -> impl Strategy<Value = Attribute> {
        prop_oneof![
            prop::sample::select(FORMATS.to_vec()).prop_map(Attribute::Format),
            prop::sample::select(AnsiColor::all().collect::<Vec<_>>())
                .prop_map(|c| Attribute::Foreground(c.into())),
            prop::sample::select(AnsiColor::all().collect::<Vec<_>>())
                .prop_map(|c| Attribute::Background(c.into())),
            any::<u8>().prop_map(|c| Attribute::Background(Colorant::EightBit(c))),
            any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Attribute::Foreground(Colorant::Rgb(r, g, b))),
        ]
    }

    #[test]
    fn test_style() {
        let style = Style::default();
        assert!(style.is_empty());
        assert!(style.attributes().is_empty());
        assert_eq!(format!("{}", style), "");
        assert_eq!(style.fidelity(), Fidelity::Plain);

        let style = style.bold().underlined();
        assert_eq!(
            style.attributes(),
            &[Attribute::Format(Format::Bold), Attribute::Format(Format::Underlined)]
        );
        assert_eq!(format!("{}", style), "\x1b[1;4m");
        assert_eq!(style.fidelity(), Fidelity::NoColor);

        let style = style.with_foreground(Colorant::EightBit(215));
        assert_eq!(format!("{}", style), "\x1b[1;4;38;5;215m");
        assert_eq!(style.fidelity(), Fidelity::EightBit);

        let style = style.with_background(AnsiColor::BrightBlack);
        assert_eq!(format!("{}", style), "\x1b[1;4;38;5;215;100m");
    }

    #[test]
    fn test_order_and_duplicates() {
        let style = Style::default()
            .with_foreground(AnsiColor::Red)
            .bold()
            .with_foreground(AnsiColor::Blue);
        assert_eq!(style.attributes().len(), 3);
        assert_eq!(format!("{}", style), "\x1b[31;1;34m");

        let reordered = Style::default()
            .bold()
            .with_foreground(AnsiColor::Red)
            .with_foreground(AnsiColor::Blue);
        assert_ne!(style, reordered);
    }

    #[test]
    fn test_const_style() {
        const ATTRIBUTES: &[Attribute] = &[
            Attribute::Foreground(Colorant::Ansi(AnsiColor::BrightWhite)),
            Attribute::Format(Format::Bold),
        ];
        const TITLE: Style = Style::new(ATTRIBUTES);

        assert_eq!(format!("{}", TITLE), "\x1b[97;1m");
        assert_eq!(TITLE.italic().attributes().len(), 3);
        assert_eq!(TITLE.attributes().len(), 2);
    }

    #[test]
    fn test_cap() {
        let style = Style::default()
            .with_foreground(Colorant::Rgb(215, 40, 39))
            .bold()
            .with_background(AnsiColor::Blue)
            .with_background(Colorant::EightBit(17));

        assert_eq!(style.cap(Fidelity::TwentyFourBit), style);
        assert_eq!(
            style.cap(Fidelity::Ansi),
            Style::default().bold().with_background(AnsiColor::Blue)
        );
        assert_eq!(style.cap(Fidelity::NoColor), Style::default().bold());
        assert!(style.cap(Fidelity::Plain).is_empty());
    }

    #[test]
    fn test_render() {
        let console = Console::new();
        let style = Style::default().bold();
        assert_eq!(style.render_for(&console, "Title"), "\x1b[1mTitle\x1b[0m");
        assert_eq!(style.render_for(&console, ""), "\x1b[1m\x1b[0m");
        assert_eq!(Style::default().render_for(&console, "Title"), "Title");

        console.disable_styling();
        assert_eq!(style.render_for(&console, "Title"), "Title");
        console.enable_styling();
        assert_eq!(style.render_for(&console, "Title"), "\x1b[1mTitle\x1b[0m");
    }

    proptest! {
        #[test]
        fn disabled_styling_is_identity(
            attributes in prop::collection::vec(arb_attribute(), 0..6),
            text in ".*",
        ) {
            let console = Console::new();
            console.disable_styling();
            let style = Style::from(attributes);
            prop_assert_eq!(style.render_for(&console, &text), text);
        }

        #[test]
        fn enabled_styling_wraps(
            attributes in prop::collection::vec(arb_attribute(), 1..6),
            text in ".*",
        ) {
            let console = Console::new();
            let style = Style::from(attributes);
            let rendered = style.render_for(&console, &text);
            prop_assert!(rendered.contains(&text));
            prop_assert!(rendered.len() > text.len());
            prop_assert!(rendered.ends_with(RESET));
        }

        #[test]
        fn empty_style_is_identity(text in ".*", enabled in any::<bool>()) {
            let console = Console::new();
            if !enabled {
                console.disable_styling();
            }
            prop_assert_eq!(Style::default().render_for(&console, &text), text);
        }
    }
}
