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

//! Transition tables.
//!
//! An [Automaton] is an immutable table of states.  Each state carries an
//! ordered list of transition rules, each a predicate over the next input
//! character plus a target state, and optionally an accepting token id.  The
//! table is built once with [AutomatonBuilder] and then driven by
//! [`Scanner::run`](crate::scan::Scanner::run); nothing about it changes at
//! scan time, so one table may be shared by any number of scanning sessions.

/// Identifies a rule that matched, in [`Take`](crate::scan::Take) events.
///
/// Token ids are small integers chosen by whoever builds the table.  The
/// engine attaches no meaning to them.
pub type TokenId = usize;

/// Names a state in an [Automaton].
///
/// State ids are only meaningful to the [AutomatonBuilder] that issued them
/// and the [Automaton] it built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateId(usize);

type Predicate = Box<dyn Fn(char) -> bool + Send + Sync>;

struct Rule {
    on: Predicate,
    target: StateId,
}

struct State {
    accept: Option<TokenId>,
    rules: Vec<Rule>,
}

/// An immutable state-transition table.
pub struct Automaton {
    states: Vec<State>,
}

impl Automaton {
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder { states: Vec::new() }
    }

    /// Returns the designated entry state, which is the first state created
    /// by the builder.
    pub fn start(&self) -> StateId {
        StateId(0)
    }

    /// Returns the token id of `state`'s accepting action, if it has one.
    pub fn accept(&self, state: StateId) -> Option<TokenId> {
        self.states[state.0].accept
    }

    /// Evaluates `state`'s transition rules against `c`, in declared order,
    /// and returns the target of the first rule that matches.
    pub fn step(&self, state: StateId, c: char) -> Option<StateId> {
        self.states[state.0]
            .rules
            .iter()
            .find(|rule| (rule.on)(c))
            .map(|rule| rule.target)
    }
}

/// Builds an [Automaton].
///
/// The builder does not validate the table: states that cannot be reached, or
/// that dead-end without accepting, are a defect in the table's author, not
/// something detected here or at scan time.
pub struct AutomatonBuilder {
    states: Vec<State>,
}

impl AutomatonBuilder {
    /// Adds a state with no accepting action.  The first state added becomes
    /// the automaton's entry state.
    pub fn state(&mut self) -> StateId {
        self.push(None)
    }

    /// Adds a state that takes `token` every time it is entered.
    pub fn accepting(&mut self, token: TokenId) -> StateId {
        self.push(Some(token))
    }

    fn push(&mut self, accept: Option<TokenId>) -> StateId {
        self.states.push(State {
            accept,
            rules: Vec::new(),
        });
        StateId(self.states.len() - 1)
    }

    /// Appends to `from` a transition to `to` on characters satisfying `on`.
    /// Rules are evaluated in the order they were added; the first match
    /// wins.
    pub fn rule<F>(&mut self, from: StateId, on: F, to: StateId)
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        self.states[from.0].rules.push(Rule {
            on: Box::new(on),
            target: to,
        });
    }

    pub fn build(self) -> Automaton {
        Automaton {
            states: self.states,
        }
    }
}
