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
use runlex::classify::{Spans, WORD};
use std::path::PathBuf;

use crate::{decode_file, parse_encoding};

/// Label each word run and filler character in a file.
#[derive(Args, Clone, Debug)]
pub struct Tokenize {
    /// File to read.
    input: PathBuf,

    /// The encoding to use.  If omitted, the encoding is detected.
    #[arg(long, value_parser = parse_encoding)]
    encoding: Option<&'static Encoding>,
}

impl Tokenize {
    pub fn run(self) -> Result<()> {
        let text = decode_file(&self.input, self.encoding)?;
        for (token, span) in Spans::new(&text) {
            let label = if token == WORD { "word" } else { "fill" };
            println!("{label}\t{span:?}");
        }
        Ok(())
    }
}
