//! # Pretty 🌸 Print
//!
//! Prettyprint decorates terminal text with ANSI escape sequences and lays it
//! out as header banners.
//!
//!
//! ## 1. Overview
//!
//! Prettyprint's main abstractions are:
//!
//!   * The [`style`] module defines **terminal [`Style`](style::Style)s** as
//!     ordered sequences of [`Attribute`](style::Attribute)s, i.e., text
//!     [`Format`](style::Format)s as well as foreground and background
//!     [`Colorant`](termco::Colorant)s. It also defines
//!     [`Fidelity`](style::Fidelity) to represent a terminal's styling
//!     capabilities.
//!   * The [`termco`] module offers the **terminal-specific color formats**
//!     [`AnsiColor`](termco::AnsiColor) and [`Colorant`](termco::Colorant).
//!   * The [`fmt`] module formats **[`Operand`]s** into text.
//!   * The [`Printer`] trait is the contract for **decorating operands**. It
//!     is implemented by [`HeaderPrinter`], which renders bordered banners, and
//!     [`TextPrinter`], which renders styled text.
//!   * [`Console`] holds the **styling toggle** and the **output
//!     destination**. Printers consult the [global console](Console::global)
//!     unless they are given another one.
//!
//!
//! ## 2. One-Two-Three: Headers!
//!
//! First, configure a header. [`Header::builder`] starts out with the default
//! header's bold, bright white text on gray.
//!
//! ```
//! # use prettyprint::{Header, HeaderPrinter};
//! # use prettyprint::style::Style;
//! # use prettyprint::termco::AnsiColor;
//! let header = Header::builder()
//!     .background_style(Style::default().with_background(AnsiColor::Blue))
//!     .margin(3)
//!     .build();
//! let printer = HeaderPrinter::new(header);
//! ```
//!
//! Second, decide whether to style at all. [`Console::apply_environment`]
//! disables styling if the environment calls for plain text and returns the
//! terminal's fidelity, which can cap styles to what the terminal supports.
//!
//! ```
//! # use prettyprint::Console;
//! # use prettyprint::style::Style;
//! # use prettyprint::termco::Colorant;
//! let fidelity = Console::global().apply_environment();
//! let chic = Style::default().bold().with_foreground(Colorant::Rgb(215, 40, 39));
//! let effective_chic = chic.cap(fidelity);
//! ```
//!
//! Third, print. Emitting writes the entire header to the console's output in
//! one go and returns the printer for further calls.
//!
//! ```no_run
//! # use prettyprint::{HeaderPrinter, Printer};
//! let printer = HeaderPrinter::default();
//! printer
//!     .emit_line(&[&"Chapter", &1])?
//!     .emit_template("%s of %d", &[&"Part", &2])?;
//! # Ok::<(), prettyprint::Error>(())
//! ```
//!
//! Or simply use [`print_header`] with the [`DEFAULT_HEADER_PRINTER`].
//!
//!
//! ## 3. Diagnostics
//!
//! Prettyprint reports changes to the styling toggle and output destination
//! as well as every emit through [tracing](https://docs.rs/tracing). It never
//! installs a subscriber.

mod console;
pub mod error;
pub mod fmt;
mod header;
mod printer;
pub mod style;
pub mod termco;
mod text;
mod util;

pub use console::{
    disable_styling, enable_styling, is_styling_enabled, set_default_output, Console, Output,
};
pub use error::Error;
pub use fmt::Operand;
pub use header::{Header, HeaderBuilder, HeaderPrinter};
pub use printer::Printer;
pub use text::TextPrinter;

/// The default header printer.
///
/// It renders bold, bright white text on a gray box with a margin of five
/// spaces.
pub const DEFAULT_HEADER_PRINTER: HeaderPrinter = HeaderPrinter::new(Header::DEFAULT);

/// The default text printer, which applies no style.
pub const DEFAULT_TEXT_PRINTER: TextPrinter = TextPrinter::new(style::Style::new(&[]));

/// Print a header with the default header printer.
///
/// This function writes the header followed by a newline to the global
/// console's output.
pub fn print_header(operands: &[&dyn Operand]) -> Result<(), Error> {
    DEFAULT_HEADER_PRINTER.emit_line(operands).map(|_| ())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::{lock_global_console, Capture};

    #[test]
    fn test_print_header() -> Result<(), Error> {
        let _guard = lock_global_console();

        let capture = Capture::new();
        let previous = set_default_output(Box::new(capture.clone()));
        disable_styling();
        let result = print_header(&[&"Title"]);
        enable_styling();
        let _capture = set_default_output(previous);

        result?;
        assert_eq!(
            capture.contents(),
            format!("{0}\n     Title     \n{0}\n\n\n", " ".repeat(15))
        );
        Ok(())
    }

    #[test]
    fn test_global_render() {
        let _guard = lock_global_console();

        disable_styling();
        let text = DEFAULT_TEXT_PRINTER.render(&[&"a", &1, &2]);
        let header = DEFAULT_HEADER_PRINTER.render(&[]);
        enable_styling();

        assert_eq!(text, "a1 2");
        assert_eq!(header, format!("{0}\n{0}\n{0}\n\n", " ".repeat(10)));
        assert!(DEFAULT_HEADER_PRINTER.render(&[&"x"]).contains('\x1b'));
    }
}
