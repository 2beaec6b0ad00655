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
use clap::{Parser, Subcommand};
use encoding_rs::Encoding;
use runlex::source::{DecodingSource, Source};
use std::{fs::File, io::BufReader, path::Path};
use thiserror::Error as ThisError;

use crate::{filter::Filter, split::Split, tokenize::Tokenize};

mod filter;
mod split;
mod tokenize;

/// runlex, a scanner that classifies text into labeled character runs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Clone, Debug)]
enum Command {
    Tokenize(Tokenize),
    Filter(Filter),
    Split(Split),
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Command::Tokenize(tokenize) => tokenize.run(),
            Command::Filter(filter) => filter.run(),
            Command::Split(split) => split.run(),
        }
    }
}

#[derive(ThisError, Debug)]
#[error("{0}: unknown encoding")]
struct UnknownEncodingError(String);

fn parse_encoding(arg: &str) -> Result<&'static Encoding, UnknownEncodingError> {
    match Encoding::for_label_no_replacement(arg.as_bytes()) {
        Some(encoding) => Ok(encoding),
        None => Err(UnknownEncodingError(arg.to_string())),
    }
}

/// Reads `path`, decoded into memory so that the spans reported by the
/// scanner can be sliced back out of the text.
fn decode_file(path: &Path, encoding: Option<&'static Encoding>) -> Result<String> {
    let file = BufReader::new(File::open(path)?);
    let mut source = DecodingSource::new(file, encoding)?;
    let mut text = String::new();
    while let Some(c) = source.read()? {
        text.push(c);
    }
    Ok(text)
}

fn main() -> Result<()> {
    Cli::parse().command.run()
}
