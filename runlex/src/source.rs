// runlex - a run-classifying lexical scanner.
// Copyright (C) 2025 Free Software Foundation, Inc.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <http://www.gnu.org/licenses/>.

//! Character sources.
//!
//! The scan engine reads decoded characters, one at a time, from a [Source].
//! Decoding is the source's business: [DecodingSource] turns a byte reader in
//! any encoding known to `encoding_rs` into a stream of characters, so that
//! the engine and its transition tables only ever see code points.

use std::{collections::VecDeque, io::Read, str::Chars};

use chardetng::EncodingDetector;
use encoding_rs::{Decoder, Encoding};
use thiserror::Error as ThisError;

/// Read failure on the underlying input.
///
/// This is fatal to the scan in progress.  Running out of input is not an
/// error; sources report end of stream as `Ok(None)`.
#[derive(ThisError, Debug)]
#[error("failure reading input: {0}")]
pub struct StreamError(#[from] pub std::io::Error);

/// A read-once, forward-only stream of characters.
pub trait Source {
    /// Returns the next character, or `None` at end of stream.
    fn read(&mut self) -> Result<Option<char>, StreamError>;
}

/// A [Source] over a string already in memory.  Never fails.
pub struct StrSource<'a>(Chars<'a>);

impl<'a> StrSource<'a> {
    pub fn new(s: &'a str) -> Self {
        Self(s.chars())
    }
}

impl Source for StrSource<'_> {
    fn read(&mut self) -> Result<Option<char>, StreamError> {
        Ok(self.0.next())
    }
}

const CHUNK: usize = 4096;

/// A [Source] that decodes bytes from a reader.
///
/// If no encoding is given, the encoding is taken from a byte-order mark if
/// one is present, and otherwise guessed from the first 4 kB of input.  A
/// leading byte-order mark is not reported as a character.
pub struct DecodingSource<R> {
    reader: R,
    decoder: Decoder,
    chars: VecDeque<char>,
    done: bool,
}

impl<R> DecodingSource<R>
where
    R: Read,
{
    pub fn new(mut reader: R, encoding: Option<&'static Encoding>) -> Result<Self, StreamError> {
        let mut head = Vec::with_capacity(CHUNK);
        let mut done = false;
        while head.len() < CHUNK {
            let mut chunk = [0u8; CHUNK];
            let n = reader.read(&mut chunk)?;
            if n == 0 {
                done = true;
                break;
            }
            head.extend_from_slice(&chunk[..n]);
        }

        let encoding = encoding.unwrap_or_else(|| detect_encoding(&head, done));
        let mut decoder = encoding.new_decoder();
        let mut chars = VecDeque::new();
        decode_append(&mut decoder, &head, done, &mut chars);
        Ok(Self {
            reader,
            decoder,
            chars,
            done,
        })
    }

    fn refill(&mut self) -> Result<(), StreamError> {
        while self.chars.is_empty() && !self.done {
            let mut chunk = [0u8; CHUNK];
            let n = self.reader.read(&mut chunk)?;
            if n == 0 {
                self.done = true;
            }
            decode_append(&mut self.decoder, &chunk[..n], self.done, &mut self.chars);
        }
        Ok(())
    }
}

fn detect_encoding(head: &[u8], complete: bool) -> &'static Encoding {
    if let Some((encoding, _bom_length)) = Encoding::for_bom(head) {
        return encoding;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(head, complete);
    detector.guess(None, true)
}

fn decode_append(decoder: &mut Decoder, src: &[u8], last: bool, dst: &mut VecDeque<char>) {
    let mut decoded =
        String::with_capacity(decoder.max_utf8_buffer_length(src.len()).unwrap_or(CHUNK));
    let (_result, read, _replacements) = decoder.decode_to_string(src, &mut decoded, last);
    debug_assert_eq!(read, src.len());
    dst.extend(decoded.chars());
}

impl<R> Source for DecodingSource<R>
where
    R: Read,
{
    fn read(&mut self) -> Result<Option<char>, StreamError> {
        if self.chars.is_empty() {
            self.refill()?;
        }
        Ok(self.chars.pop_front())
    }
}
