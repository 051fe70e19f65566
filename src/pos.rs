// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::cmp::Eq;

/// Both line and col are zero based; Emacs uses 1-based line
/// numbering, so line is incremented by 1 in Display. col counts
/// characters, not bytes.

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Pos {
    pub line: u32,
    pub col: u32,
}

impl Pos {
    /// The position of byte `offset` in `s`. `offset` must lie on a
    /// char boundary (or at the end of `s`).
    pub fn of(s: &str, offset: usize) -> Pos {
        let before = &s[..offset];
        let (line, linestart) = match before.rfind('\n') {
            Some(i) => (before.matches('\n').count(), i + 1),
            None => (0, 0)
        };
        Pos {
            line: line as u32,
            col: before[linestart..].chars().count() as u32,
        }
    }

    /// The position just after `s`, when `s` starts at self.
    pub fn advance(self, s: &str) -> Pos {
        s.chars().fold(self, |p, c| {
            if c == '\n' {
                Pos { line: p.line + 1, col: 0 }
            } else {
                Pos { line: p.line, col: p.col + 1 }
            }
        })
    }

    /// Shift down by `lines`, for positions computed relative to a
    /// single line within a larger stream.
    pub fn below(self, lines: u32) -> Pos {
        Pos { line: self.line + lines, col: self.col }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        // This, when prefixed with a Debug style path string, is
        // following the Emacs convention for location information.
        f.write_fmt(format_args!("@{}.{}", self.line + 1, self.col))
    }
}
