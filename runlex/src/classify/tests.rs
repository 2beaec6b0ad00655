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

use crate::{automaton::TokenId, scan::Scanner, source::StrSource};

use super::{is_space_char, is_word_char, space_runs, Spans, FILLER, WORD};

fn check_spans(input: &str, expect: &[(TokenId, &str)]) {
    let spans = Spans::new(input).collect::<Vec<_>>();
    if spans != expect {
        eprintln!("spans differ from expected:");
        let difference = diff::slice(expect, &spans);
        for result in difference {
            match result {
                diff::Result::Left(left) => eprintln!("-{left:?}"),
                diff::Result::Both(left, _right) => eprintln!(" {left:?}"),
                diff::Result::Right(right) => eprintln!("+{right:?}"),
            }
        }
        panic!();
    }

    // Every character of the input lands in exactly one span.
    assert_eq!(
        spans.iter().map(|(_token, s)| *s).collect::<String>(),
        input
    );
}

#[test]
fn words_and_fillers() {
    check_spans(
        "Lorem ipsum, dolor_sit.",
        &[
            (WORD, "Lorem"),
            (FILLER, " "),
            (WORD, "ipsum"),
            (FILLER, ","),
            (FILLER, " "),
            (WORD, "dolor_sit"),
            (FILLER, "."),
        ],
    );
}

#[test]
fn empty_input_has_no_spans() {
    check_spans("", &[]);
}

#[test]
fn fillers_are_taken_one_character_at_a_time() {
    check_spans("   ", &[(FILLER, " "), (FILLER, " "), (FILLER, " ")]);
}

#[test]
fn non_ascii_characters_are_fillers() {
    check_spans(
        "déjà vu",
        &[
            (WORD, "d"),
            (FILLER, "é"),
            (WORD, "j"),
            (FILLER, "à"),
            (FILLER, " "),
            (WORD, "vu"),
        ],
    );
}

#[test]
fn filter_words_from_lorem() {
    let words = Spans::new("Lorem ipsum dolor sit amet, consectetur adipiscing elit.")
        .filter(|(token, _s)| *token == WORD)
        .map(|(_token, s)| s)
        .collect::<Vec<_>>();
    assert_eq!(
        words,
        vec![
            "Lorem",
            "ipsum",
            "dolor",
            "sit",
            "amet",
            "consectetur",
            "adipiscing",
            "elit"
        ]
    );
}

#[test]
fn word_class_boundaries() {
    for c in ['a', 'z', 'A', 'Z', '0', '9', '_'] {
        assert!(is_word_char(c), "{c:?}");
    }
    for c in ['`', '{', '@', '[', '/', ':', ' ', 'é'] {
        assert!(!is_word_char(c), "{c:?}");
    }
}

#[test]
fn space_class_boundaries() {
    for c in ['\t', '\n', '\u{b}', '\u{c}', '\r', ' ', '\u{85}'] {
        assert!(is_space_char(c), "{c:?}");
    }
    for c in ['\u{8}', '\u{e}', 'x', '\u{a0}'] {
        assert!(!is_space_char(c), "{c:?}");
    }
}

#[test]
fn whitespace_run_includes_next_line_control() {
    let spaces = space_runs();
    let input = "\t\r\n \u{85}x";
    let mut scanner = Scanner::new(StrSource::new(input)).unwrap();
    let halt = scanner.run(&spaces, spaces.start()).unwrap();
    assert_eq!(halt.ending, Some('x'));
    assert_eq!(&input[halt.matched().unwrap().span.clone()], "\t\r\n \u{85}");
}
