//! One-call helpers over a single line of text.
//!
//! These never fail: reading from a string cannot error. With
//! [`ScannerOptions::reject_unterminated`] set, scanning stops at the
//! unterminated token and the helpers return what was read before it; use a
//! [`Scanner`] directly to observe the error.

use crate::{Scanner, ScannerOptions};

/// Splits `line` into all of its tokens.
///
/// ```rust
/// use lineargs::{ScannerOptions, tokenize};
///
/// let words = tokenize(r#"the "quick  brown" fox\ jumps"#, ScannerOptions::default());
/// assert_eq!(words, ["the", "quick  brown", "fox jumps"]);
/// ```
#[must_use]
pub fn tokenize(line: &str, options: ScannerOptions) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut scanner = Scanner::from_str_with(line, options);
    if let Err(err) = scanner.collect_tokens_into(None, &mut tokens) {
        tracing::debug!(%err, "tokenize stopped early");
    }
    tokens
}

/// Splits `line` into at most `n - 1` tokens plus the trimmed, unparsed
/// remainder of the line. `n == 0` means no limit.
///
/// ```rust
/// use lineargs::{ScannerOptions, tokenize_n};
///
/// let (words, rest) = tokenize_n("cp  a   'b c'  ", 2, ScannerOptions::default());
/// assert_eq!(words, ["cp"]);
/// assert_eq!(rest, "a   'b c'");
/// ```
#[must_use]
pub fn tokenize_n(line: &str, n: usize, options: ScannerOptions) -> (Vec<String>, String) {
    if n == 0 {
        return (tokenize(line, options), String::new());
    }

    let mut tokens = Vec::new();
    let mut scanner = Scanner::from_str_with(line, options);
    let rest = scanner
        .collect_tokens_into(Some(n - 1), &mut tokens)
        .unwrap_or_else(|err| {
            tracing::debug!(%err, "tokenize_n stopped early");
            String::new()
        });
    (tokens, rest)
}

/// Splits `line` into at most `n` strings: up to `n - 1` tokens followed by
/// the unparsed remainder, if any. `n == 0` means no limit.
///
/// ```rust
/// use lineargs::{ScannerOptions, args_n};
///
/// let parts = args_n("set title to 'a b'", 3, ScannerOptions::default());
/// assert_eq!(parts, ["set", "title", "to 'a b'"]);
/// ```
#[must_use]
pub fn args_n(line: &str, n: usize, options: ScannerOptions) -> Vec<String> {
    let (mut tokens, rest) = tokenize_n(line, n, options);
    if !rest.is_empty() {
        tokens.push(rest);
    }
    tokens
}

/// Splits `line` into its leading option tokens and the unparsed rest of the
/// line, starting at the first token that is not an option.
///
/// ```rust
/// use lineargs::{ScannerOptions, split_options};
///
/// let (options, rest) = split_options("-v --out=x  run 'a b'", ScannerOptions::default());
/// assert_eq!(options, ["-v", "--out=x"]);
/// assert_eq!(rest, "run 'a b'");
/// ```
#[must_use]
pub fn split_options(line: &str, options: ScannerOptions) -> (Vec<String>, String) {
    let mut tokens = Vec::new();
    let mut scanner = Scanner::from_str_with(line, options);
    let rest = scanner
        .collect_option_tokens_into(&mut tokens)
        .unwrap_or_else(|err| {
            tracing::debug!(%err, "split_options stopped early");
            String::new()
        });
    (tokens, rest)
}
