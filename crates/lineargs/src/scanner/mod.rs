//! Scanner: splits a line of text into shell-like word tokens.
//!
//! What it does
//! - Reads characters from any [`Read`] source and returns one [`Token`] per
//!   [`Scanner::next_token`] call.
//! - Words are separated by whitespace. Backslash escapes the next character.
//!   Quotes (`` ` ``, `'`, `"`) group words and are stripped.
//! - A token starting with `{`, `[` or `(` runs to its matching closer and is
//!   returned verbatim, inner quotes and nested brackets included.
//! - A token starting with one of `|><#` swallows the rest of the input.
//!
//! Termination edges
//! - unquoted whitespace (delimiter is the whitespace character),
//! - the closing quote (delimiter is the quote),
//! - the bracket stack emptying (delimiter is the opening bracket, if the
//!   token started with one),
//! - a symbol character at token start (no delimiter),
//! - end of input (no delimiter).
//!
//! Invariants
//! - The bracket stack depth equals the nesting depth of open brackets.
//! - Once the input is exhausted every further call returns `Ok(None)`; an
//!   empty token is only ever produced by an empty quoted section (`""`).
//!
//! Example
//! ```rust
//! use lineargs::Scanner;
//!
//! let mut scanner = Scanner::from_str(r#"say "hello world" {"k": [1, 2]}"#);
//! let words: Vec<String> = scanner.by_ref().map(|t| t.unwrap().text).collect();
//! assert_eq!(words, ["say", "hello world", r#"{"k": [1, 2]}"#]);
//! assert!(scanner.next_token().unwrap().is_none());
//! ```

mod source;
mod state;

use std::io::Read;

use source::CharSource;
use state::{ScanState, Step};

use crate::{ScanError, ScannerOptions, Token};

/// Escapes the character that follows it.
pub const ESCAPE_CHAR: char = '\\';
/// Prefix of option tokens.
pub const OPTION_CHAR: char = '-';
/// Characters that open (and close) a quoted section.
pub const QUOTE_CHARS: &str = "`'\"";
/// Characters that, at the start of a token, make it swallow the rest of the
/// input. The brackets among them are claimed by bracket handling first.
pub const SYMBOL_CHARS: &str = "|><#{([";

/// Returns the closer matching an opening bracket.
#[must_use]
pub fn closing_bracket(c: char) -> Option<char> {
    match c {
        '{' => Some('}'),
        '[' => Some(']'),
        '(' => Some(')'),
        _ => None,
    }
}

pub(crate) fn is_quote(c: char) -> bool {
    QUOTE_CHARS.contains(c)
}

/// A quote-, escape- and bracket-aware tokenizer over a character stream.
///
/// The scanner reads ahead in chunks, so the reader position after scanning
/// is unspecified. Wrap a borrowed reader (`&mut R`) to keep ownership of it.
pub struct Scanner<R> {
    source: CharSource<R>,
    options: ScannerOptions,
}

impl<R: Read> Scanner<R> {
    /// Creates a scanner with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ScannerOptions::default())
    }

    /// Creates a scanner with the given options.
    pub fn with_options(reader: R, options: ScannerOptions) -> Self {
        Self {
            source: CharSource::new(reader),
            options,
        }
    }

    /// Options this scanner was built with.
    #[must_use]
    pub fn options(&self) -> ScannerOptions {
        self.options
    }

    /// Returns the next token, or `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if the reader fails, and the unterminated
    /// variants when [`ScannerOptions::reject_unterminated`] is set and the
    /// input ends inside a quote or bracket.
    pub fn next_token(&mut self) -> Result<Option<Token>, ScanError> {
        let mut state = ScanState::default();

        loop {
            let Some(c) = self.source.next_char()? else {
                let token = state.finish(self.options)?;
                tracing::trace!(token = ?token, "end of input");
                return Ok(token);
            };

            match state.step(c, self.options) {
                Step::Continue => {}
                Step::Token => {
                    let token = state.into_token();
                    tracing::trace!(text = %token.text, delim = ?token.delim, "token");
                    return Ok(Some(token));
                }
                Step::Remainder => {
                    self.source.read_rest(state.buf_mut())?;
                    let token = state.into_token();
                    tracing::trace!(text = %token.text, "symbol token takes rest of input");
                    return Ok(Some(token));
                }
            }
        }
    }

    /// Collects tokens until the end of the input (`max == 0`) or until `max`
    /// tokens have been read.
    ///
    /// Returns the tokens and the remainder: whatever input is left after
    /// `max` tokens, trimmed of surrounding whitespace. The remainder is empty
    /// when `max == 0` or when the input ran out first.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`next_token`](Self::next_token) and from
    /// reading the remainder.
    pub fn collect_tokens(&mut self, max: usize) -> Result<(Vec<String>, String), ScanError> {
        let mut tokens = Vec::new();
        let limit = (max > 0).then_some(max);
        let rest = self.collect_tokens_into(limit, &mut tokens)?;
        Ok((tokens, rest))
    }

    /// Like [`collect_tokens`](Self::collect_tokens), pushing into `tokens` so
    /// the caller keeps what was read before an error. `None` means no limit.
    pub(crate) fn collect_tokens_into(
        &mut self,
        limit: Option<usize>,
        tokens: &mut Vec<String>,
    ) -> Result<String, ScanError> {
        let start = tokens.len();
        while limit.is_none_or(|max| tokens.len() - start < max) {
            match self.next_token()? {
                Some(token) => tokens.push(token.text),
                None => return Ok(String::new()),
            }
        }

        let mut rest = String::new();
        self.source.read_rest(&mut rest)?;
        let rest = rest.trim();
        tracing::debug!(count = tokens.len(), rest = %rest, "token limit reached");
        Ok(rest.to_owned())
    }

    /// Collects leading option tokens (tokens starting with `-`).
    ///
    /// Stops at the first token that does not start with `-` and returns the
    /// input from that point on, verbatim, as the remainder.
    ///
    /// # Errors
    ///
    /// Propagates reader errors and errors from
    /// [`next_token`](Self::next_token).
    pub fn collect_option_tokens(&mut self) -> Result<(Vec<String>, String), ScanError> {
        let mut tokens = Vec::new();
        let rest = self.collect_option_tokens_into(&mut tokens)?;
        Ok((tokens, rest))
    }

    pub(crate) fn collect_option_tokens_into(
        &mut self,
        tokens: &mut Vec<String>,
    ) -> Result<String, ScanError> {
        loop {
            // Skip whitespace up to the next token and peek at its first char.
            loop {
                let Some(c) = self.source.next_char()? else {
                    return Ok(String::new());
                };
                if c == OPTION_CHAR {
                    self.source.unread(c);
                    break;
                }
                if !c.is_whitespace() {
                    self.source.unread(c);
                    let mut rest = String::new();
                    self.source.read_rest(&mut rest)?;
                    tracing::debug!(options = tokens.len(), rest = %rest, "end of options");
                    return Ok(rest);
                }
            }

            match self.next_token()? {
                Some(token) => tokens.push(token.text),
                None => return Ok(String::new()),
            }
        }
    }
}

impl<'a> Scanner<&'a [u8]> {
    /// Creates a scanner over a string with default options.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn from_str(line: &'a str) -> Self {
        Self::new(line.as_bytes())
    }

    /// Creates a scanner over a string with the given options.
    #[must_use]
    pub fn from_str_with(line: &'a str, options: ScannerOptions) -> Self {
        Self::with_options(line.as_bytes(), options)
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl<R> core::fmt::Debug for Scanner<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scanner")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
