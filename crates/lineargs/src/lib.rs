//! Shell-like tokenizing of a single command line.
//!
//! Words are split on whitespace, respecting single, double and backtick
//! quotes and the backslash escape character. Brackets (`{}`, `[]`, `()`)
//! keep structured values such as JSON fragments together, and a token that
//! starts with one of `|><#` takes the rest of the line.
//!
//! ```rust
//! use lineargs::{ScannerOptions, parse_args, tokenize};
//!
//! let words = tokenize(r#"echo 'hi there' {"a": [1, 2]} # done"#, ScannerOptions::default());
//! assert_eq!(words, ["echo", "hi there", r#"{"a": [1, 2]}"#, "# done"]);
//!
//! let args = parse_args("-l --number=42 -- -x file");
//! assert_eq!(args.option("number", "0"), "42");
//! assert_eq!(args.arguments, ["-x", "file"]);
//! ```

mod args;
mod error;
mod line;
mod options;
mod scanner;
mod token;

#[cfg(feature = "clap")]
pub mod flags;


pub use args::{Args, parse_args};
pub use error::ScanError;
pub use line::{args_n, split_options, tokenize, tokenize_n};
pub use options::ScannerOptions;
pub use scanner::{
    ESCAPE_CHAR, OPTION_CHAR, QUOTE_CHARS, SYMBOL_CHARS, Scanner, closing_bracket,
};
pub use token::Token;
