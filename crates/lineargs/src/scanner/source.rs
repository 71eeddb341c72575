//! Character source: decodes UTF‑8 characters from a byte reader.
//!
//! Bytes are pulled from the reader in chunks into an unread ring and decoded
//! one scalar at a time with `bstr::decode_utf8`. A character whose bytes are
//! split across two reads stays in the ring until the rest arrives. Invalid
//! sequences decode to U+FFFD, one replacement per maximal invalid prefix.
//!
//! A single character of pushback is supported, which is all the option
//! splitter needs to stop in front of the first non-option token.

use std::{
    collections::VecDeque,
    io::{self, ErrorKind, Read},
};

const CHUNK_SIZE: usize = 4096;

pub(crate) struct CharSource<R> {
    reader: R,
    // Unread input
    pending: VecDeque<u8>,
    pushback: Option<char>,
    eof: bool,
}

impl<R: Read> CharSource<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            pushback: None,
            eof: false,
        }
    }

    /// Reads the next chunk into the ring. Returns the number of bytes added;
    /// zero means the reader is exhausted.
    fn fill(&mut self) -> io::Result<usize> {
        if self.eof {
            return Ok(0);
        }
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            match self.reader.read(&mut chunk) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(0);
                }
                Ok(n) => {
                    self.pending.extend(&chunk[..n]);
                    return Ok(n);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Returns the next character, or `None` at end of input.
    pub(crate) fn next_char(&mut self) -> io::Result<Option<char>> {
        if let Some(ch) = self.pushback.take() {
            return Ok(Some(ch));
        }
        loop {
            if self.pending.is_empty() && self.fill()? == 0 {
                return Ok(None);
            }
            let (ch, len) = decode_from_ring(&mut self.pending);
            // An invalid prefix spanning the whole ring may be a character
            // cut in half by the read boundary.
            if ch.is_none() && len == self.pending.len() && self.fill()? > 0 {
                continue;
            }
            self.pending.drain(..len);
            return Ok(Some(ch.unwrap_or(char::REPLACEMENT_CHARACTER)));
        }
    }

    /// Pushes one character back so the next read returns it again.
    pub(crate) fn unread(&mut self, ch: char) {
        debug_assert!(self.pushback.is_none(), "only one character of pushback");
        self.pushback = Some(ch);
    }

    /// Appends everything left in the input to `dst`.
    pub(crate) fn read_rest(&mut self, dst: &mut String) -> io::Result<()> {
        while let Some(ch) = self.next_char()? {
            dst.push(ch);
        }
        Ok(())
    }
}

// Decode first UTF-8 scalar from the ring without consuming. The ring must be
// non-empty.
fn decode_from_ring(ring: &mut VecDeque<u8>) -> (Option<char>, usize) {
    let (ch, len) = bstr::decode_utf8(ring.make_contiguous());
    (ch, len.max(1))
}
