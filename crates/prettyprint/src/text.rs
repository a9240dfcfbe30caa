use crate::fmt::{format, format_template, Operand};
use crate::style::Style;
use crate::{Console, Error, Printer};

/// A printer of styled text.
///
/// A text printer formats its operands with [`format`] and renders the result
/// with its style. Unlike [`HeaderPrinter`](crate::HeaderPrinter), it also
/// renders templates.
///
/// ```
/// # use prettyprint::{Console, Printer, TextPrinter};
/// # use prettyprint::style::Style;
/// let printer = TextPrinter::new(Style::default().italic());
/// let text = printer.render_template_for(&Console::new(), "%v%%", &[&99])?;
/// assert_eq!(text, "\x1b[3m99%\x1b[0m");
/// # Ok::<(), prettyprint::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextPrinter {
    /// The style applied to all text.
    pub style: Style,
}

impl TextPrinter {
    /// Create a new text printer.
    pub const fn new(style: Style) -> Self {
        Self { style }
    }
}

impl Printer for TextPrinter {
    fn render_for(&self, console: &Console, operands: &[&dyn Operand]) -> String {
        self.style.render_for(console, &format(operands))
    }

    fn render_template_for(
        &self,
        console: &Console,
        template: &str,
        operands: &[&dyn Operand],
    ) -> Result<String, Error> {
        Ok(self
            .style
            .render_for(console, &format_template(template, operands)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::termco::AnsiColor;
    use crate::util::Capture;

    #[test]
    fn test_render() -> Result<(), Error> {
        let console = Console::new();
        let printer = TextPrinter::new(Style::default().with_foreground(AnsiColor::Red));

        assert_eq!(printer.render_for(&console, &[&1, &2]), "\x1b[31m1 2\x1b[0m");
        assert_eq!(
            printer.render_template_for(&console, "%d items", &[&3])?,
            "\x1b[31m3 items\x1b[0m"
        );

        console.disable_styling();
        assert_eq!(printer.render_line_for(&console, &[&"a", &"b"]), "ab\n");

        let plain = TextPrinter::default();
        console.enable_styling();
        assert_eq!(plain.render_for(&console, &[&"as is"]), "as is");
        Ok(())
    }

    #[test]
    fn test_emit() -> Result<(), Error> {
        let capture = Capture::new();
        let console = Console::with_output(Box::new(capture.clone()));
        let printer = TextPrinter::new(Style::default().bold());

        printer
            .emit_template_for(&console, "%s:", &[&"key"])?
            .emit_line_for(&console, &[&42])?;
        assert_eq!(capture.contents(), "\x1b[1mkey:\x1b[0m\x1b[1m42\x1b[0m\n");
        Ok(())
    }
}
