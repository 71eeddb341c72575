use super::{ESCAPE_CHAR, SYMBOL_CHARS, closing_bracket, is_quote};
use crate::{ScanError, ScannerOptions, Token};

/// What the scanner should do after feeding one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// Keep reading.
    Continue,
    /// The token is complete.
    Token,
    /// A symbol character started the token: the rest of the input belongs
    /// to it verbatim.
    Remainder,
}

/// Scan state for one token. Created fresh by every `next_token` call.
#[derive(Debug, Default)]
pub(crate) struct ScanState {
    buf: String,
    delim: Option<char>,
    /// Set once the token has started: leading whitespace is behind us.
    started: bool,
    escape: bool,
    quote: Option<char>,
    /// Expected closers of the open brackets, innermost last.
    brackets: Vec<char>,
}

impl ScanState {
    pub(crate) fn step(&mut self, c: char, options: ScannerOptions) -> Step {
        if c == ESCAPE_CHAR && !self.escape {
            self.escape = true;
            self.started = true;
            return Step::Continue;
        }

        if self.escape {
            self.escape = false;
            self.buf.push(c);
            return Step::Continue;
        }

        if !self.started {
            if c.is_whitespace() {
                return Step::Continue;
            }
            self.started = true;

            if is_quote(c) {
                self.quote = Some(c);
                return Step::Continue;
            }

            if let Some(closer) = closing_bracket(c) {
                self.delim = Some(c);
                self.brackets.push(closer);
                self.buf.push(c);
                return Step::Continue;
            }

            if SYMBOL_CHARS.contains(c) {
                self.buf.push(c);
                return Step::Remainder;
            }
        }

        if self.brackets.is_empty() {
            self.step_field(c, options)
        } else {
            self.step_bracketed(c)
        }
    }

    fn step_field(&mut self, c: char, options: ScannerOptions) -> Step {
        if c.is_whitespace() && self.quote.is_none() {
            self.delim = Some(c);
            return Step::Token;
        }

        if self.quote == Some(c) {
            self.quote = None;
            self.delim = Some(c);
            return Step::Token;
        }

        // Mid-field brackets open a region even inside a quoted field.
        if options.infield_brackets {
            if let Some(closer) = closing_bracket(c) {
                self.brackets.push(closer);
            }
        }

        self.buf.push(c);
        Step::Continue
    }

    fn step_bracketed(&mut self, c: char) -> Step {
        self.buf.push(c);

        match self.quote {
            None => {
                if self.brackets.last() == Some(&c) {
                    self.brackets.pop();
                    if self.brackets.is_empty() {
                        return Step::Token;
                    }
                } else if is_quote(c) {
                    self.quote = Some(c);
                } else if let Some(closer) = closing_bracket(c) {
                    self.brackets.push(closer);
                }
            }
            Some(q) if q == c => self.quote = None,
            Some(_) => {}
        }

        Step::Continue
    }

    /// Token text so far; the symbol branch copies the rest of the input here.
    pub(crate) fn buf_mut(&mut self) -> &mut String {
        &mut self.buf
    }

    pub(crate) fn into_token(self) -> Token {
        Token {
            text: self.buf,
            delim: self.delim,
        }
    }

    /// Resolves the state when the input ends.
    pub(crate) fn finish(self, options: ScannerOptions) -> Result<Option<Token>, ScanError> {
        if options.reject_unterminated {
            if let Some(quote) = self.quote {
                return Err(ScanError::UnterminatedQuote {
                    quote,
                    text: self.buf,
                });
            }
            if let Some(&expected) = self.brackets.last() {
                return Err(ScanError::UnterminatedBracket {
                    expected,
                    text: self.buf,
                });
            }
        }

        if self.buf.is_empty() {
            return Ok(None);
        }

        Ok(Some(Token {
            text: self.buf,
            delim: None,
        }))
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.brackets.len()
    }
}
