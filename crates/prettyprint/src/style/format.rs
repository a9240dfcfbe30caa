/// A text format other than regular.
///
/// Each variant corresponds to exactly one SGR parameter. Unlike colors,
/// formats are rendered by terminals that lack color support, so they only
/// require [`Fidelity::NoColor`](crate::style::Fidelity::NoColor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Format {
    Bold,
    Thin,
    Italic,
    Underlined,
    Blinking,
    RapidBlinking,
    Reversed,
    Hidden,
    Stricken,
}

impl Format {
    /// Get the SGR parameter for enabling this format.
    pub const fn enable_sgr(&self) -> u8 {
        use self::Format::*;

        match self {
            Bold => 1,
            Thin => 2,
            Italic => 3,
            Underlined => 4,
            Blinking => 5,
            RapidBlinking => 6,
            Reversed => 7,
            Hidden => 8,
            Stricken => 9,
        }
    }

    /// Get the SGR parameter for disabling this format.
    ///
    /// Bold and thin share the same parameter, as do both kinds of blinking.
    pub const fn disable_sgr(&self) -> u8 {
        use self::Format::*;

        match self {
            Bold | Thin => 22,
            Italic => 23,
            Underlined => 24,
            Blinking | RapidBlinking => 25,
            Reversed => 27,
            Hidden => 28,
            Stricken => 29,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Format;

    #[test]
    fn test_sgr() {
        use super::Format::*;

        let all = [
            Bold,
            Thin,
            Italic,
            Underlined,
            Blinking,
            RapidBlinking,
            Reversed,
            Hidden,
            Stricken,
        ];
        for (index, format) in all.iter().enumerate() {
            assert_eq!(format.enable_sgr() as usize, index + 1);
            assert_eq!(format.disable_sgr() / 10, 2);
        }

        assert_eq!(Format::Thin.disable_sgr(), Format::Bold.disable_sgr());
    }
}
