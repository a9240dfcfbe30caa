//! Utility module with prettyprint's errors.

use thiserror::Error as ThisError;

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The only range used by this crate is `0..=15` for index values of
/// [`AnsiColor`](crate::termco::AnsiColor).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{value} does not fit into range {}..={}", .expected.start(), .expected.end())]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

// ====================================================================================================================

/// An error while printing.
///
/// Rendering itself never fails. Errors arise only when a printer is asked for
/// a capability it does not have or when writing to the output fails.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The printer does not support the operation.
    ///
    /// This signals incorrect usage rather than a runtime condition. For
    /// example, [`HeaderPrinter`](crate::HeaderPrinter) has no template form
    /// for rendering to a string.
    #[error("{printer} does not support {operation}")]
    Unsupported {
        printer: &'static str,
        operation: &'static str,
    },

    /// Writing to the output destination failed.
    #[error("could not write to output")]
    Write(#[from] std::io::Error),
}

impl Error {
    /// Create a new unsupported operation error.
    pub const fn unsupported(printer: &'static str, operation: &'static str) -> Self {
        Self::Unsupported { printer, operation }
    }

    /// Determine whether this error signals an unsupported operation.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::Write(error) => error,
            other => std::io::Error::new(std::io::ErrorKind::Unsupported, other),
        }
    }
}
