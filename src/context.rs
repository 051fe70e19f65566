// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Where a stream of lines comes from, for error messages. Positions
//! are kept separately (see [Pos](../pos/struct.Pos.html)).

use crate::pos::Pos;
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

pub trait Context : Debug + Send + Sync {
    /// The source as it appears in messages, e.g. a quoted path.
    fn name(&self) -> String;

    /// Word linking an error reason to the source: "in" a file,
    /// "from" a stream.
    fn preposition(&self) -> &'static str {
        "in"
    }

    /// Write " in <name>@line.col", for appending to a reason.
    fn format_with_pos(&self, pos: Pos, f: &mut Formatter<'_>)
                       -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!(" {} {}{}", self.preposition(), self.name(), pos))
    }
}

#[derive(Debug)]
pub struct FileContext {
    pub path: PathBuf
}

impl Context for FileContext {
    fn name(&self) -> String {
        format!("{:?}", self.path)
    }
}

/// A source without a path, like stdin.
#[derive(Debug)]
pub struct StreamContext {
    name: String
}

impl StreamContext {
    pub fn new(name: impl Into<String>) -> StreamContext {
        StreamContext { name: name.into() }
    }
}

impl Context for StreamContext {
    fn name(&self) -> String {
        format!("({})", self.name)
    }
    fn preposition(&self) -> &'static str {
        "from"
    }
}
