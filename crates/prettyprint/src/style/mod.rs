//! Terminal-specific text formats and styles.
//!
//! This module supports styling terminal appearance with ANSI SGR escape
//! sequences through [`Style`]s, which are ordered sequences of
//! [`Attribute`]s. An attribute is a text [`Format`], a foreground
//! [`Colorant`](crate::termco::Colorant), or a background
//! [`Colorant`](crate::termco::Colorant).
//!
//! It also defines [`Layer`] to distinguish between foreground and background
//! colors as well as [`Fidelity`] to capture a terminal's level of styling
//! support.
//!
//!
//! # Rendering Styles
//!
//! A style renders text by prefixing the style's escape sequence and
//! suffixing the [`RESET`] escape sequence. Whether it does so is up to the
//! [`Console`](crate::Console): If styling is disabled, rendering returns the
//! text unchanged.
//!
//! ```
//! # use prettyprint::Console;
//! # use prettyprint::style::{Attribute, Format, Style};
//! # use prettyprint::termco::{AnsiColor, Colorant};
//! const GRAY: &[Attribute] = &[Attribute::Background(Colorant::Ansi(AnsiColor::BrightBlack))];
//! const BACKDROP: Style = Style::new(GRAY);
//!
//! let console = Console::new();
//! let text = Style::default().bold().render_for(&console, "Wow!");
//! let s = BACKDROP.render_for(&console, &text);
//!
//! assert_eq!(s, "\x1b[100m\x1b[1mWow!\x1b[0m\x1b[0m");
//! ```
//!
//! Nesting, as above, treats the inner rendering as an opaque string.

mod context;
mod format;
mod styling;

pub use context::{Fidelity, Layer};
pub(crate) use context::fidelity_from_environment;
pub use format::Format;
pub use styling::{Attribute, Style, RESET};
