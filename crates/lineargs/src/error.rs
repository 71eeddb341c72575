use std::io;

use thiserror::Error;

/// Errors produced while scanning a line.
///
/// Reaching the end of the input is not an error: [`Scanner::next_token`]
/// reports it as `Ok(None)`.
///
/// [`Scanner::next_token`]: crate::Scanner::next_token
#[derive(Error, Debug)]
pub enum ScanError {
    /// The underlying reader failed.
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    /// The input ended inside a quoted section.
    ///
    /// Only reported when [`ScannerOptions::reject_unterminated`] is set.
    ///
    /// [`ScannerOptions::reject_unterminated`]: crate::ScannerOptions::reject_unterminated
    #[error("unterminated quote {quote:?} in {text:?}")]
    UnterminatedQuote {
        /// The quote character that was never closed.
        quote: char,
        /// Text buffered when the input ended.
        text: String,
    },

    /// The input ended inside a bracketed region.
    ///
    /// Only reported when [`ScannerOptions::reject_unterminated`] is set.
    ///
    /// [`ScannerOptions::reject_unterminated`]: crate::ScannerOptions::reject_unterminated
    #[error("unterminated bracket, expected {expected:?} in {text:?}")]
    UnterminatedBracket {
        /// The closing bracket the innermost open region was waiting for.
        expected: char,
        /// Text buffered when the input ended.
        text: String,
    },
}

impl ScanError {
    /// Returns `true` if the error came from the underlying reader.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, ScanError::Io(_))
    }
}
