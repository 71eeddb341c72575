#![no_main]
use std::io::{self, Read};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lineargs::{Args, Scanner, ScannerOptions, Token};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Arbitrary)]
struct Input {
    infield_brackets: bool,
    reject_unterminated: bool,
    split_seed: u64,
    data: Vec<u8>,
}

/// Reader that hands out the input in randomly sized pieces, so multi-byte
/// characters land across read boundaries.
struct RandomChunks<'a> {
    data: &'a [u8],
    rng: SmallRng,
}

impl Read for RandomChunks<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() || buf.is_empty() {
            return Ok(0);
        }
        let max = buf.len().min(self.data.len());
        let n = self.rng.random_range(1..=max);
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Drains the scanner, checking the end-of-input contract on the way.
fn drain<R: Read>(mut scanner: Scanner<R>) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    loop {
        match scanner.next_token() {
            Ok(Some(token)) => {
                assert!(
                    !token.text.is_empty() || token.is_quoted(),
                    "empty token without quotes"
                );
                tokens.push(token);
            }
            Ok(None) => {
                assert!(matches!(scanner.next_token(), Ok(None)));
                return Ok(tokens);
            }
            Err(err) => return Err(err.to_string()),
        }
    }
}

fn scanner(input: Input) {
    let options = ScannerOptions {
        infield_brackets: input.infield_brackets,
        reject_unterminated: input.reject_unterminated,
    };

    let whole = drain(Scanner::with_options(input.data.as_slice(), options));
    let chunked = drain(Scanner::with_options(
        RandomChunks {
            data: &input.data,
            rng: SmallRng::seed_from_u64(input.split_seed),
        },
        options,
    ));
    assert_eq!(whole, chunked, "chunking changed the token stream");

    if let Ok(tokens) = whole {
        let _ = Args::from_tokens(tokens.into_iter().map(String::from));
    }
}

fuzz_target!(|input: Input| scanner(input));
