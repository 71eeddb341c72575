//! Minimal `-name` / `--name=value` option classifier.

use std::collections::BTreeMap;

use crate::{ScannerOptions, line::tokenize, scanner::OPTION_CHAR};

/// A command line split into options and positional arguments.
///
/// # Examples
///
/// ```rust
/// let args = lineargs::parse_args("-v --depth=3 build -x");
/// assert!(args.flag("v"));
/// assert_eq!(args.int_option("depth", 1), 3);
/// assert_eq!(args.arguments, ["build", "-x"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Args {
    /// Option names (leading dashes removed) mapped to their values. A flag
    /// given without `=value` maps to an empty string.
    pub options: BTreeMap<String, String>,
    /// Everything after the options, in order.
    pub arguments: Vec<String>,
}

impl Args {
    /// Classifies a token list.
    ///
    /// Leading tokens that start with `-` are options; `--` ends the options
    /// and is dropped. The first other token and everything after it are
    /// arguments. A repeated option keeps its last value.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = BTreeMap::new();
        let mut tokens = tokens.into_iter().peekable();

        while let Some(token) = tokens.next_if(|t| t.starts_with(OPTION_CHAR)) {
            if token == "--" {
                break;
            }

            let option = token.trim_start_matches(OPTION_CHAR);
            let (key, value) = option.split_once('=').unwrap_or((option, ""));
            options.insert(key.to_owned(), value.to_owned());
        }

        let arguments: Vec<String> = tokens.collect();
        tracing::debug!(?options, ?arguments, "parsed args");
        Self { options, arguments }
    }

    /// Returns the value of option `name`, or `default` if it was not given.
    #[must_use]
    pub fn option<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.options.get(name).map_or(default, String::as_str)
    }

    /// Returns option `name` parsed as an integer, or `default` if it was not
    /// given or is not a valid integer.
    #[must_use]
    pub fn int_option(&self, name: &str, default: i64) -> i64 {
        self.options
            .get(name)
            .and_then(|value| value.parse().ok())
            .unwrap_or(default)
    }

    /// Returns `true` if option `name` was given, with or without a value.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }
}

/// Tokenizes `line` and classifies the tokens with [`Args::from_tokens`].
#[must_use]
pub fn parse_args(line: &str) -> Args {
    Args::from_tokens(tokenize(line, ScannerOptions::default()))
}
