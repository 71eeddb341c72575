/// Configuration options for the [`Scanner`](crate::Scanner).
///
/// Options are fixed when the scanner is built and never change while it
/// runs.
///
/// # Examples
///
/// ```rust
/// use lineargs::{Scanner, ScannerOptions};
///
/// let options = ScannerOptions {
///     infield_brackets: true,
///     ..Default::default()
/// };
/// let mut scanner = Scanner::from_str_with(r#"x={"a": 1} y"#, options);
/// let token = scanner.next_token().unwrap().unwrap();
/// assert_eq!(token.text, r#"x={"a": 1}"#);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerOptions {
    /// Whether an opening bracket in the middle of a token starts a bracketed
    /// region.
    ///
    /// A bracket at the start of a token always opens a region. With this
    /// option a token such as `name={"values": [1, 2]}` is kept whole,
    /// including spaces inside the brackets.
    ///
    /// # Default
    ///
    /// `false`
    pub infield_brackets: bool,

    /// Whether a quote or bracket still open at the end of the input is an
    /// error.
    ///
    /// By default the scanner returns whatever it buffered as the final
    /// token. When `true`, [`ScanError::UnterminatedQuote`] or
    /// [`ScanError::UnterminatedBracket`] is returned instead.
    ///
    /// [`ScanError::UnterminatedQuote`]: crate::ScanError::UnterminatedQuote
    /// [`ScanError::UnterminatedBracket`]: crate::ScanError::UnterminatedBracket
    ///
    /// # Default
    ///
    /// `false`
    pub reject_unterminated: bool,
}
