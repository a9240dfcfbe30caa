use crate::fmt::{format, Operand};
use crate::style::{Attribute, Format, Style};
use crate::termco::{AnsiColor, Colorant};
use crate::{Console, Error, Printer};

const TITLE_ATTRIBUTES: &[Attribute] = &[
    Attribute::Foreground(Colorant::Ansi(AnsiColor::BrightWhite)),
    Attribute::Format(Format::Bold),
];

const GRAY_ATTRIBUTES: &[Attribute] = &[Attribute::Background(Colorant::Ansi(
    AnsiColor::BrightBlack,
))];

/// The configuration of a header banner.
///
/// A header is a box of three rows: A blank row, a row with the text, and
/// another blank row. The background style colors all three rows, while the
/// text style additionally applies to the text row. The margin is the number
/// of spaces on either side of the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Header {
    /// The style of the text.
    pub text_style: Style,
    /// The style of the box.
    pub background_style: Style,
    /// The number of spaces on either side of the text.
    pub margin: usize,
}

impl Header {
    /// The default header: Bold, bright white text on a gray box with a margin
    /// of five spaces.
    pub const DEFAULT: Header = Header {
        text_style: Style::new(TITLE_ATTRIBUTES),
        background_style: Style::new(GRAY_ATTRIBUTES),
        margin: 5,
    };

    /// Create a new builder with the default header's values.
    pub fn builder() -> HeaderBuilder {
        HeaderBuilder(Header::DEFAULT)
    }
}

impl Default for Header {
    fn default() -> Self {
        Header::DEFAULT
    }
}

/// A builder of headers.
///
/// ```
/// # use prettyprint::{Console, Header, HeaderPrinter, Printer};
/// # use prettyprint::style::Style;
/// let header = Header::builder()
///     .text_style(Style::default())
///     .background_style(Style::default())
///     .margin(1)
///     .build();
///
/// let printer = HeaderPrinter::new(header);
/// assert_eq!(printer.render_for(&Console::new(), &[&"Hi"]), "    \n Hi \n    \n\n");
/// ```
#[derive(Debug)]
pub struct HeaderBuilder(Header);

impl HeaderBuilder {
    /// Set the text style.
    pub fn text_style(&mut self, style: Style) -> &mut Self {
        self.0.text_style = style;
        self
    }

    /// Set the background style.
    pub fn background_style(&mut self, style: Style) -> &mut Self {
        self.0.background_style = style;
        self
    }

    /// Set the margin.
    pub fn margin(&mut self, margin: usize) -> &mut Self {
        self.0.margin = margin;
        self
    }

    /// Instantiate the header.
    pub fn build(&self) -> Header {
        self.0.clone()
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A printer of header banners.
///
/// The printer formats its operands with [`format`], measures the text in
/// characters, and lays it out as a box with the geometry determined by its
/// [`Header`]. Given a text with `L` characters and a margin `M`, the rendered
/// header has four lines:
///
///  1. `L + 2M` spaces in the background style;
///  2. `M` spaces, the text, and `M` spaces in the text style, nested inside
///     the background style;
///  3. a repeat of the first line;
///  4. an empty line.
///
/// Characters are not display columns. Text with wide or combining characters
/// yields a box whose rows differ in visible width.
///
/// Header printers have no template form for rendering to a string, so
/// [`Printer::render_template_for`] returns [`Error::Unsupported`]. Templates
/// can still be emitted, since [`Printer::emit_template_for`] fills in the
/// template before rendering the header.
///
///
/// # Example
///
/// ```
/// # use prettyprint::{Console, HeaderPrinter, Printer};
/// let console = Console::new();
/// console.disable_styling();
///
/// let printer = HeaderPrinter::default();
/// let header = printer.render_for(&console, &[&"Title"]);
/// let lines: Vec<_> = header.split('\n').collect();
///
/// assert_eq!(lines[0], " ".repeat(15));
/// assert_eq!(lines[1], "     Title     ");
/// assert_eq!(lines[2], " ".repeat(15));
/// assert_eq!(lines[3], "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HeaderPrinter {
    /// The header configuration, consulted anew on every render.
    pub header: Header,
}

impl HeaderPrinter {
    /// Create a new header printer.
    pub const fn new(header: Header) -> Self {
        Self { header }
    }
}

impl Printer for HeaderPrinter {
    fn render_for(&self, console: &Console, operands: &[&dyn Operand]) -> String {
        let Header {
            text_style,
            background_style,
            margin,
        } = &self.header;

        let text = format(operands);
        let width = text.chars().count() + 2 * margin;
        let margin = " ".repeat(*margin);
        let blank = background_style.render_for(console, &" ".repeat(width));
        let content = format!("{}{}{}", margin, text, margin);
        let content = text_style.render_for(console, &content);
        let content = background_style.render_for(console, &content);

        format!("{}\n{}\n{}\n\n", blank, content, blank)
    }

    fn render_template_for(
        &self,
        _console: &Console,
        _template: &str,
        _operands: &[&dyn Operand],
    ) -> Result<String, Error> {
        Err(Error::unsupported("HeaderPrinter", "render_template"))
    }
}
