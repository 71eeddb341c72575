//! Adapter feeding a tokenized line to a [`clap::Command`].

use clap::{ArgMatches, Command};

use crate::{ScannerOptions, line::tokenize};

/// Creates a command that parses tokenized lines.
///
/// The command does not expect a binary name as its first argument.
#[must_use]
pub fn new_flags(name: &'static str) -> Command {
    Command::new(name).no_binary_name(true)
}

/// Tokenizes `line` and parses the tokens with `flags`.
///
/// # Errors
///
/// Returns the [`clap::Error`] for unknown or malformed arguments, and for
/// `--help` / `--version` requests.
pub fn parse_flags(flags: &mut Command, line: &str) -> Result<ArgMatches, clap::Error> {
    let tokens = tokenize(line, ScannerOptions::default());
    tracing::debug!(command = flags.get_name(), ?tokens, "parse flags");
    flags.try_get_matches_from_mut(tokens)
}
