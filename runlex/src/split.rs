/* runlex - a run-classifying lexical scanner.
 * Copyright (C) 2025 Free Software Foundation, Inc.
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <http://www.gnu.org/licenses/>. */

use anyhow::Result;
use clap::Args;
use encoding_rs::Encoding;
use runlex::{
    automaton::Automaton,
    classify::{is_space_char, space_runs},
    scan::Scanner,
    source::StrSource,
};
use std::path::PathBuf;

use crate::{decode_file, parse_encoding};

/// Print the fields of a file, one per line, splitting at runs of
/// whitespace.
#[derive(Args, Clone, Debug)]
pub struct Split {
    /// File to read.
    input: PathBuf,

    /// The encoding to use.  If omitted, the encoding is detected.
    #[arg(long, value_parser = parse_encoding)]
    encoding: Option<&'static Encoding>,
}

/// The complement of [space_runs]: maximal runs of non-whitespace.
fn field_runs() -> Automaton {
    let mut builder = Automaton::builder();
    let entry = builder.state();
    let run = builder.accepting(1);
    let not_space = |c: char| !is_space_char(c);
    builder.rule(entry, not_space, run);
    builder.rule(run, not_space, run);
    builder.build()
}

impl Split {
    pub fn run(self) -> Result<()> {
        let text = decode_file(&self.input, self.encoding)?;
        let fields = field_runs();
        let spaces = space_runs();
        let mut scanner = Scanner::new(StrSource::new(&text))?;
        loop {
            let field = scanner.run(&fields, fields.start())?;
            if let Some(take) = field.matched() {
                println!("{}", &text[take.span.clone()]);
            }
            if field.ending.is_none() {
                break;
            }
            if scanner.run(&spaces, spaces.start())?.ending.is_none() {
                break;
            }
        }
        Ok(())
    }
}
