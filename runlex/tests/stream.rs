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

use runlex::{
    classify::{space_runs, word_runs},
    scan::Scanner,
    source::{DecodingSource, Source},
};

#[test]
fn alternating_runs_over_a_chunked_stream() {
    let input = "lorem ipsum ".repeat(1000);
    let source = DecodingSource::new(input.as_bytes(), Some(encoding_rs::UTF_8)).unwrap();
    let mut scanner = Scanner::new(source).unwrap();
    let words = word_runs();
    let spaces = space_runs();
    let mut automata = [&words, &spaces].into_iter().cycle();
    let mut takes = 0;
    let mut consumed = 0;
    loop {
        let automaton = automata.next().unwrap();
        let halt = scanner.run(automaton, automaton.start()).unwrap();
        if let Some(take) = halt.matched() {
            takes += 1;
            assert_eq!(take.span.start, consumed);
            consumed = take.span.end;
        }
        if halt.ending.is_none() {
            break;
        }
    }
    assert_eq!(takes, 4000);
    assert_eq!(consumed, input.len());
}

#[test]
fn utf16_stream_larger_than_one_chunk() {
    let text = "déjà vu ".repeat(1024);
    let mut bytes = vec![0xff, 0xfe];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }

    let mut source = DecodingSource::new(&bytes[..], None).unwrap();
    let mut decoded = String::new();
    while let Some(c) = source.read().unwrap() {
        decoded.push(c);
    }
    assert_eq!(decoded, text);
}
