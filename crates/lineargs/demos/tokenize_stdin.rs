//! Tokenizes each line read from standard input and prints the tokens, their
//! delimiters, and the classified options and arguments.
//!
//! ```text
//! printf '%s\n' '-v --n=2 copy "a b" {"k": [1]}' | cargo run --example tokenize_stdin -- --infield
//! ```
//!
//! Set `RUST_LOG=lineargs=trace` to watch every termination edge.
#![allow(missing_docs)]

use std::io::{self, BufRead};

use lineargs::{Args, Scanner, ScanError, ScannerOptions};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<(), ScanError> {
    init_tracing();

    let options = ScannerOptions {
        infield_brackets: std::env::args().any(|a| a == "--infield"),
        reject_unterminated: std::env::args().any(|a| a == "--strict"),
    };

    for (n, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let mut words = Vec::new();
        for token in Scanner::from_str_with(&line, options) {
            match token {
                Ok(token) => {
                    println!("{n:>4}: {:<12} {:?}", format!("{:?}", token.delim), token.text);
                    words.push(token.text);
                }
                Err(err) => {
                    eprintln!("{n:>4}: {err}");
                    break;
                }
            }
        }
        let args = Args::from_tokens(words);
        println!("      options={:?} arguments={:?}", args.options, args.arguments);
    }

    Ok(())
}
