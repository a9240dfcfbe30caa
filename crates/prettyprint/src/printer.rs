use crate::fmt::{format_template, Operand};
use crate::{Console, Error};

/// A printer of decorated text.
///
/// A printer turns operands into decorated text. Each printer decides on its
/// own layout and styles; callers that only rely on this trait must not assume
/// any particular layout. The trait's methods come in two flavors:
///
///   * The `render` methods return the decorated text. They are object safe,
///     so a `&dyn Printer` can render, too.
///   * The `emit` methods write the decorated text to a console's output and
///     return the printer again, so that calls can be chained. A printer writes
///     each block of text with a single [`Console::write`].
///
/// Methods without `_for` suffix use the [global console](Console::global).
/// Only [`Printer::render_for`] is required; all other methods have default
/// implementations in terms of it. Printers that do not support templates
/// simply keep the default [`Printer::render_template_for`], which returns
/// [`Error::Unsupported`].
///
///
/// # Example
///
/// ```
/// # use prettyprint::{Console, Printer, TextPrinter};
/// # use prettyprint::style::Style;
/// # use prettyprint::termco::AnsiColor;
/// let printer = TextPrinter::new(Style::default().with_foreground(AnsiColor::Green));
/// let console = Console::new();
///
/// assert_eq!(printer.render_for(&console, &[&"Ok", &200]), "\x1b[32mOk200\x1b[0m");
///
/// console.disable_styling();
/// assert_eq!(printer.render_line_for(&console, &[&1, &2]), "1 2\n");
/// ```
pub trait Printer {
    /// Render the operands with the given console.
    fn render_for(&self, console: &Console, operands: &[&dyn Operand]) -> String;

    /// Render the operands with the global console.
    fn render(&self, operands: &[&dyn Operand]) -> String {
        self.render_for(Console::global(), operands)
    }

    /// Render the operands followed by a newline with the given console.
    fn render_line_for(&self, console: &Console, operands: &[&dyn Operand]) -> String {
        let mut text = self.render_for(console, operands);
        text.push('\n');
        text
    }

    /// Render the operands followed by a newline with the global console.
    fn render_line(&self, operands: &[&dyn Operand]) -> String {
        self.render_line_for(Console::global(), operands)
    }

    /// Render the template filled in with the operands with the given console.
    ///
    /// The default implementation does not support templates and returns
    /// [`Error::Unsupported`].
    fn render_template_for(
        &self,
        console: &Console,
        template: &str,
        operands: &[&dyn Operand],
    ) -> Result<String, Error> {
        let _ = (console, template, operands);
        Err(Error::unsupported(
            std::any::type_name::<Self>(),
            "render_template",
        ))
    }

    /// Render the template filled in with the operands with the global
    /// console.
    fn render_template(&self, template: &str, operands: &[&dyn Operand]) -> Result<String, Error> {
        self.render_template_for(Console::global(), template, operands)
    }

    /// Render the operands and write them to the given console's output.
    fn emit_for(&self, console: &Console, operands: &[&dyn Operand]) -> Result<&Self, Error>
    where
        Self: Sized,
    {
        write_block(console, &self.render_for(console, operands))?;
        Ok(self)
    }

    /// Render the operands and write them to the global console's output.
    fn emit(&self, operands: &[&dyn Operand]) -> Result<&Self, Error>
    where
        Self: Sized,
    {
        self.emit_for(Console::global(), operands)
    }

    /// Render the operands followed by a newline and write them to the given
    /// console's output.
    fn emit_line_for(&self, console: &Console, operands: &[&dyn Operand]) -> Result<&Self, Error>
    where
        Self: Sized,
    {
        write_block(console, &self.render_line_for(console, operands))?;
        Ok(self)
    }

    /// Render the operands followed by a newline and write them to the global
    /// console's output.
    fn emit_line(&self, operands: &[&dyn Operand]) -> Result<&Self, Error>
    where
        Self: Sized,
    {
        self.emit_line_for(Console::global(), operands)
    }

    /// Fill in the template with the operands, then render the result as the
    /// only operand and write it to the given console's output.
    ///
    /// Unlike [`Printer::render_template_for`], this method works for all
    /// printers, since it only relies on [`Printer::render_for`].
    fn emit_template_for(
        &self,
        console: &Console,
        template: &str,
        operands: &[&dyn Operand],
    ) -> Result<&Self, Error>
    where
        Self: Sized,
    {
        let text = format_template(template, operands);
        self.emit_for(console, &[&text])
    }

    /// Fill in the template with the operands, then render the result as the
    /// only operand and write it to the global console's output.
    fn emit_template(&self, template: &str, operands: &[&dyn Operand]) -> Result<&Self, Error>
    where
        Self: Sized,
    {
        self.emit_template_for(Console::global(), template, operands)
    }
}

fn write_block(console: &Console, text: &str) -> Result<usize, Error> {
    match console.write(text) {
        Ok(size) => {
            tracing::trace!(size, "emitted text");
            Ok(size)
        }
        Err(error) => {
            tracing::warn!(%error, "could not emit text");
            Err(error.into())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::{Broken, Capture};

    #[derive(Debug)]
    struct Brackets;

    impl Printer for Brackets {
        fn render_for(&self, _console: &Console, operands: &[&dyn Operand]) -> String {
            format!("[{}]", crate::fmt::format(operands))
        }
    }

    #[test]
    fn test_defaults() {
        let console = Console::new();
        let printer = Brackets;

        assert_eq!(printer.render_for(&console, &[&"a", &1, &2]), "[a1 2]");
        assert_eq!(printer.render_line_for(&console, &[]), "[]\n");

        let error = printer
            .render_template_for(&console, "%v", &[&1])
            .unwrap_err();
        assert!(error.is_unsupported());

        let dynamic: &dyn Printer = &printer;
        assert_eq!(dynamic.render_for(&console, &[&true]), "[true]");
        assert!(dynamic.render_template_for(&console, "", &[]).is_err());
    }

    #[test]
    fn test_emit() -> Result<(), Error> {
        let capture = Capture::new();
        let console = Console::with_output(Box::new(capture.clone()));

        Brackets
            .emit_for(&console, &[&"x"])?
            .emit_line_for(&console, &[&1, &"y"])?
            .emit_template_for(&console, "%d%%", &[&50])?;
        assert_eq!(capture.contents(), "[x][1 y]\n[50%]");
        Ok(())
    }

    #[test]
    fn test_emit_failure() {
        let console = Console::with_output(Box::new(Broken));
        let result = Brackets.emit_line_for(&console, &[&"lost"]);
        assert!(matches!(result, Err(Error::Write(_))));
    }
}
