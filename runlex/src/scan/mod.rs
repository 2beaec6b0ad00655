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

//! The scan engine.
//!
//! A [Scanner] drives an [Automaton] over a [Source], classifying runs of
//! characters into token spans.  Scanning is greedy: an accepting state
//! records a match every time it is entered, and the engine keeps going as
//! long as some transition rule matches the next character, so the effective
//! match of a run is the longest one.  When no rule matches (or the stream
//! ends), the run halts; halting is the normal way a run ends, not an error.
//!
//! The engine holds exactly one character of lookahead.  The character that
//! causes a halt is never consumed: it remains the first lookahead of the
//! next [`Scanner::run`] call, so consecutive runs, possibly with different
//! automata, classify the stream without dropping or duplicating characters
//! at the boundaries.  The engine never rewinds the stream, and it never
//! buffers text; it reports byte spans into the decoded input, and capturing
//! the matched text is the caller's business.

use std::ops::Range;

use smallvec::SmallVec;

use crate::{
    automaton::{Automaton, StateId, TokenId},
    source::{Source, StreamError},
};

/// A match recorded by an accepting state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Take {
    /// Token id of the accepting state's action.
    pub token: TokenId,

    /// Byte offsets of the matched span in the decoded input, from the start
    /// of the run to the last character consumed so far.
    pub span: Range<usize>,
}

/// The normal outcome of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Halt {
    /// The character that failed every transition rule of the final state,
    /// or `None` if the stream ended.  This character has not been consumed.
    pub ending: Option<char>,

    /// The matches recorded during the run, in order.  Re-entering an
    /// accepting state with the same token id widens the recorded span
    /// instead of adding an entry, so a run that never leaves one accepting
    /// loop records exactly one take.
    pub takes: SmallVec<[Take; 1]>,
}

impl Halt {
    /// Returns the effective match of the run under the longest-match
    /// policy, that is, the last take recorded.
    pub fn matched(&self) -> Option<&Take> {
        self.takes.last()
    }
}

/// Receives a notification each time an accepting state is entered.
///
/// The span reported with each notification covers the run's characters
/// consumed so far, so later notifications in the same run supersede earlier
/// ones.
pub trait Sink {
    fn take(&mut self, token: TokenId, span: Range<usize>);
}

/// Collects every notification, without folding.
impl Sink for Vec<Take> {
    fn take(&mut self, token: TokenId, span: Range<usize>) {
        self.push(Take { token, span });
    }
}

struct Discard;

impl Sink for Discard {
    fn take(&mut self, _token: TokenId, _span: Range<usize>) {}
}

/// Drives automata over a character source.
///
/// A scanner is a cursor: the source, the one-character lookahead, and the
/// byte position of the lookahead in the decoded input.  It carries no
/// transition table of its own; each [`Scanner::run`] call borrows one, and
/// alternating tables across calls is the intended way to classify a stream
/// with more than one token class.
pub struct Scanner<S> {
    source: S,
    lookahead: Option<char>,
    position: usize,
}

impl<S> Scanner<S>
where
    S: Source,
{
    /// Primes the lookahead by reading the first character of `source`.
    pub fn new(mut source: S) -> Result<Self, StreamError> {
        let lookahead = source.read()?;
        Ok(Self {
            source,
            lookahead,
            position: 0,
        })
    }

    /// Returns the character the next run will see first, or `None` if the
    /// stream has ended.
    pub fn lookahead(&self) -> Option<char> {
        self.lookahead
    }

    /// Returns the byte offset of the lookahead character in the decoded
    /// input.
    pub fn position(&self) -> usize {
        self.position
    }

    fn advance(&mut self) -> Result<(), StreamError> {
        if let Some(c) = self.lookahead {
            self.position += c.len_utf8();
        }
        self.lookahead = self.source.read()?;
        Ok(())
    }

    /// Runs `automaton` from `start` until it halts.  Equivalent to
    /// [`Scanner::run_with`] with a sink that discards notifications.
    pub fn run(&mut self, automaton: &Automaton, start: StateId) -> Result<Halt, StreamError> {
        self.run_with(automaton, start, &mut Discard)
    }

    /// Runs `automaton` from `start` until it halts, notifying `sink` each
    /// time an accepting state is entered.
    ///
    /// From the current state, the engine first fires the state's accepting
    /// action, if any; then it evaluates the state's transition rules, in
    /// declared order, against the lookahead character.  If one matches, the
    /// engine consumes the lookahead and moves to the rule's target;
    /// otherwise the run returns [Halt] with the lookahead as its ending
    /// character.  An `Err` return happens only when the source itself fails.
    pub fn run_with(
        &mut self,
        automaton: &Automaton,
        start: StateId,
        sink: &mut dyn Sink,
    ) -> Result<Halt, StreamError> {
        let origin = self.position;
        let mut state = start;
        let mut takes = SmallVec::<[Take; 1]>::new();
        loop {
            if let Some(token) = automaton.accept(state) {
                sink.take(token, origin..self.position);
                match takes.last_mut() {
                    Some(last) if last.token == token => last.span.end = self.position,
                    _ => takes.push(Take {
                        token,
                        span: origin..self.position,
                    }),
                }
            }
            let Some(c) = self.lookahead else {
                return Ok(Halt {
                    ending: None,
                    takes,
                });
            };
            let Some(target) = automaton.step(state, c) else {
                return Ok(Halt {
                    ending: Some(c),
                    takes,
                });
            };
            state = target;
            self.advance()?;
        }
    }
}
