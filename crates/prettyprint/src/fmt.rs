//! Formatting operands into text.
//!
//! Printers accept their operands as a slice of [`Operand`] trait objects and
//! turn them into text with one of three functions:
//!
//!   * [`format`] concatenates operands, separating two adjacent operands with
//!     a space only if neither of them is a string.
//!   * [`format_line`] always separates operands with a space and appends a
//!     newline.
//!   * [`format_template`] substitutes operands for the verbs in a template.
//!
//! ```
//! # use prettyprint::fmt::{format, format_line, format_template};
//! assert_eq!(format(&[&"Hello, World!", &1337, &true]), "Hello, World!1337 true");
//! assert_eq!(format_line(&[&"Hello,", &"World!"]), "Hello, World!\n");
//! assert_eq!(format_template("Hello, %v!", &[&42]), "Hello, 42!");
//! ```

use std::borrow::Cow;
use std::fmt::Display;

/// A value that can be formatted by printers.
///
/// Beyond being displayable, an operand knows whether it is a string, which
/// determines spacing in [`format`].
pub trait Operand: Display {
    /// Determine whether this operand is a string.
    fn is_string(&self) -> bool {
        false
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    fn is_string(&self) -> bool {
        (**self).is_string()
    }
}

impl Operand for str {
    fn is_string(&self) -> bool {
        true
    }
}

impl Operand for String {
    fn is_string(&self) -> bool {
        true
    }
}

impl Operand for Cow<'_, str> {
    fn is_string(&self) -> bool {
        true
    }
}

macro_rules! non_string_operand {
    ($($typ:ty),* $(,)?) => {
        $(impl Operand for $typ {})*
    };
}

non_string_operand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

// ----------------------------------------------------------------------------------------------------------

/// Format the operands.
///
/// A space separates two adjacent operands if neither is a string. Adjacent
/// strings, and strings next to other values, are concatenated as is.
pub fn format(operands: &[&dyn Operand]) -> String {
    let mut text = String::new();
    let mut previous_is_string = true;

    for operand in operands {
        let is_string = operand.is_string();
        if !is_string && !previous_is_string {
            text.push(' ');
        }
        text.push_str(&operand.to_string());
        previous_is_string = is_string;
    }

    text
}

/// Format the operands, separated by spaces, and append a newline.
pub fn format_line(operands: &[&dyn Operand]) -> String {
    let mut text = operands
        .iter()
        .map(|operand| operand.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    text.push('\n');
    text
}

/// Format the operands according to the template.
///
/// The template is copied verbatim except for verbs, which start with `%`:
///
///   * `%v`, `%s`, and `%d` are replaced by the next operand's display;
///   * `%q` is replaced by the next operand's display, quoted and escaped;
///   * `%%` is replaced by a literal percent sign.
///
/// Flags, widths, and precisions are not supported. Errors are reported
/// inline instead of aborting: An unknown verb `%x` becomes `%!x(operand)`, a
/// verb without operand becomes `%!v(MISSING)`, a trailing `%` becomes
/// `%!(NOVERB)`, and unused operands are appended as `%!(EXTRA operand, ...)`.
pub fn format_template(template: &str, operands: &[&dyn Operand]) -> String {
    let mut text = String::with_capacity(template.len());
    let mut operands = operands.iter();
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            text.push(c);
            continue;
        }

        let Some(verb) = chars.next() else {
            text.push_str("%!(NOVERB)");
            break;
        };

        if verb == '%' {
            text.push('%');
            continue;
        }

        let Some(operand) = operands.next() else {
            text.push_str("%!");
            text.push(verb);
            text.push_str("(MISSING)");
            continue;
        };

        match verb {
            'v' | 's' | 'd' => text.push_str(&operand.to_string()),
            'q' => text.push_str(&std::format!("{:?}", operand.to_string())),
            _ => text.push_str(&std::format!("%!{}({})", verb, operand)),
        }
    }

    let extra = operands
        .map(|operand| operand.to_string())
        .collect::<Vec<_>>();
    if !extra.is_empty() {
        text.push_str("%!(EXTRA ");
        text.push_str(&extra.join(", "));
        text.push(')');
    }

    text
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format(&[]), "");
        assert_eq!(format(&[&"Title"]), "Title");
        assert_eq!(format(&[&"Hello, World!", &1337, &true]), "Hello, World!1337 true");
        assert_eq!(format(&[&1, &2, &"three", &4, &5.5]), "1 2three4 5.5");
        assert_eq!(format(&[&"a", &"b"]), "ab");
        assert_eq!(format(&[&String::from("a"), &'c', &false]), "ac false");
        assert_eq!(format(&[&Cow::Borrowed("x"), &-1337]), "x-1337");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(&[]), "\n");
        assert_eq!(format_line(&[&"a", &"b", &1, &2]), "a b 1 2\n");
    }

    #[test]
    fn test_format_template() {
        assert_eq!(format_template("Hello, %v!", &[&"World"]), "Hello, World!");
        assert_eq!(format_template("%s=%d", &[&"x", &42]), "x=42");
        assert_eq!(format_template("%q", &[&"a\"b"]), "\"a\\\"b\"");
        assert_eq!(format_template("100%%", &[]), "100%");
        assert_eq!(format_template("%v and %v", &[&1]), "1 and %!v(MISSING)");
        assert_eq!(format_template("%z", &[&1]), "%!z(1)");
        assert_eq!(format_template("oops %", &[]), "oops %!(NOVERB)");
        assert_eq!(format_template("%v", &[&1, &2, &"three"]), "1%!(EXTRA 2, three)");
        assert_eq!(format_template("%s", &[&"%s"]), "%s");
        assert_eq!(format_template("ünïcödé %v", &[&'✓']), "ünïcödé ✓");
    }
}
