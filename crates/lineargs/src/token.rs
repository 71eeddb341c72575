use core::fmt;

/// One word produced by [`Scanner::next_token`](crate::Scanner::next_token).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The token text with top-level quotes and escape characters removed.
    pub text: String,
    /// The character that ended the token.
    ///
    /// - a whitespace character for an ordinary word,
    /// - the quote character for a quoted word,
    /// - the opening bracket for a token that started with a bracket,
    /// - `None` at end of input, after a symbol character, or when an in-field
    ///   bracket region closes.
    pub delim: Option<char>,
}

impl Token {
    /// Returns `true` if the token was closed by a quote character.
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        self.delim.is_some_and(crate::scanner::is_quote)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.text
    }
}
