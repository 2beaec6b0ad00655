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

//! Stock classifiers.
//!
//! Three ready-made transition tables cover the common text-splitting jobs:
//! [word_runs] matches maximal runs of word characters, [space_runs] matches
//! maximal runs of whitespace, and [tokens] labels an entire stream as word
//! runs ([WORD]) with one span per intervening character ([FILLER]).  Each
//! table numbers its own accepting rules from 1, the way compiled pattern
//! tables number their alternatives, so the single rule of [word_runs] and
//! the single rule of [space_runs] both report token id 1.
//!
//! [Spans] drives the [tokens] table over a string and yields every labeled
//! span in order; concatenating the spans gives back the input.

use crate::{
    automaton::{Automaton, TokenId},
    scan::Scanner,
    source::StrSource,
};

/// Token id for a run of word characters.
pub const WORD: TokenId = 1;

/// Token id reported by [tokens] for a single character that belongs to no
/// word.
pub const FILLER: TokenId = 2;

/// Token id reported by [space_runs] for a run of whitespace.  Rule
/// numbering is per-table, so this coincides with [WORD].
pub const SPACE: TokenId = 1;

/// Returns true for an ASCII letter, an ASCII digit, or an underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true for horizontal tab through carriage return, space, and the
/// U+0085 next-line control.
pub fn is_space_char(c: char) -> bool {
    matches!(c, '\t'..='\r' | ' ' | '\u{85}')
}

/// A classifier for maximal runs of word characters.
///
/// The entry state moves to the accepting state on any word character; the
/// accepting state loops on the same class; anything else halts.
pub fn word_runs() -> Automaton {
    let mut builder = Automaton::builder();
    let entry = builder.state();
    let run = builder.accepting(WORD);
    builder.rule(entry, is_word_char, run);
    builder.rule(run, is_word_char, run);
    builder.build()
}

/// A classifier for maximal runs of whitespace, with the same two-state
/// shape as [word_runs].
pub fn space_runs() -> Automaton {
    let mut builder = Automaton::builder();
    let entry = builder.state();
    let run = builder.accepting(SPACE);
    builder.rule(entry, is_space_char, run);
    builder.rule(run, is_space_char, run);
    builder.build()
}

/// A tokenizer that classifies every character of its input: a word
/// character enters a [WORD] run, and any other character is taken singly as
/// [FILLER].
///
/// Because the filler state has no outgoing rules, a run that lands there
/// halts after one character, leaving the next character as lookahead for
/// the following run.
pub fn tokens() -> Automaton {
    let mut builder = Automaton::builder();
    let entry = builder.state();
    let word = builder.accepting(WORD);
    let filler = builder.accepting(FILLER);
    builder.rule(entry, is_word_char, word);
    builder.rule(entry, |_| true, filler);
    builder.rule(word, is_word_char, word);
    builder.build()
}

/// Iterator over the labeled spans of a string, as classified by [tokens].
pub struct Spans<'a> {
    input: &'a str,
    scanner: Scanner<StrSource<'a>>,
    automaton: Automaton,
}

impl<'a> Spans<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            scanner: Scanner::new(StrSource::new(input)).unwrap(),
            automaton: tokens(),
        }
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = (TokenId, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let halt = self
            .scanner
            .run(&self.automaton, self.automaton.start())
            .unwrap();
        let take = halt.takes.into_iter().last()?;
        Some((take.token, &self.input[take.span]))
    }
}

#[cfg(test)]
mod tests;
