// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading lists from, and writing them to, streams: one list per
//! line, as in a configuration file. Blank lines are skipped.

use crate::context::{Context, FileContext};
use crate::parse::{parse_list, MalformedInput};
use crate::value::List;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    Malformed(#[from] MalformedInput),
    #[error("{0}")]
    IO(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub struct ReadErrorWithLocation {
    pub err: ReadError,
    pub container: Box<dyn Context>
}

impl Display for ReadErrorWithLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match &self.err {
            ReadError::Malformed(e) => {
                f.write_fmt(format_args!("malformed input: {}", e.reason))?;
                self.container.format_with_pos(e.pos, f)
            }
            ReadError::IO(e) => {
                f.write_fmt(format_args!("{}: {}", self.container.name(), e))
            }
        }
    }
}

trait AddContext<T> {
    fn context(self, container: &dyn Fn() -> Box<dyn Context>)
               -> Result<T, ReadErrorWithLocation>;
}

impl<T, E: Into<ReadError>> AddContext<T> for Result<T, E> {
    fn context(self, container: &dyn Fn() -> Box<dyn Context>)
               -> Result<T, ReadErrorWithLocation> {
        self.map_err(|e| ReadErrorWithLocation {
            err: e.into(),
            container: container()
        })
    }
}

/// Parse every non-blank line of `fh`. The returned lists own their
/// text. Error positions count lines from the start of the stream.
pub fn read_all(fh: impl Read) -> Result<Vec<List<'static>>, ReadError> {
    let mut lists = Vec::new();
    for (i, line) in BufReader::new(fh).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let l = parse_list(&line).map_err(
            |e| MalformedInput { pos: e.pos.below(i as u32), ..e })?;
        debug!(line = i + 1, atoms = l.len(), "read list");
        lists.push(l.into_owned());
    }
    Ok(lists)
}

/// `read_all`, with errors saying where the stream came from.
pub fn read_with_context(
    fh: impl Read,
    container: impl Fn() -> Box<dyn Context>,
) -> Result<Vec<List<'static>>, ReadErrorWithLocation> {
    read_all(fh).context(&container)
}

pub fn read_file(path: &Path) -> Result<Vec<List<'static>>, ReadErrorWithLocation> {
    let container = || -> Box<dyn Context> {
        Box::new(FileContext { path: path.to_path_buf() })
    };
    let fh = File::open(path).context(&container)?;
    read_with_context(fh, container)
}

/// The canonical text of `list`, with a trailing newline.
pub fn format(list: &List<'_>) -> String {
    format!("{}\n", list)
}

pub fn write_list(out: &mut impl Write, list: &List<'_>) -> Result<(), std::io::Error> {
    out.write_all(format(list).as_bytes())
}

pub fn write_all<'t, 's: 't>(
    out: impl Write,
    lists: impl IntoIterator<Item = &'t List<'s>>
) -> Result<(), std::io::Error> {
    let mut out = out; // for `File`
    for l in lists.into_iter() {
        write_list(&mut out, l)?;
    }
    out.flush()
}

pub fn write_file<'t, 's: 't>(
    path: &Path,
    lists: impl IntoIterator<Item = &'t List<'s>>
) -> Result<(), std::io::Error> {
    write_all(BufWriter::new(File::create(path)?), lists)
}
