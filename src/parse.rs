// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Translating one line of text into atoms. The line must be wrapped
//! in `(` … `)` (surrounding whitespace is ignored); in between, atoms
//! are separated by whitespace:
//!
//! * `:name` is a keyword, the name running up to the next whitespace;
//!   an empty name is an error.
//! * `"text"` is a string. `\` protects the following character from
//!   ending the string, but is otherwise kept as is: the string's text
//!   is exactly what's between the quotes.
//! * A token starting with a digit must be an integer literal (see
//!   [number](../number/index.html)), or the line is rejected.
//! * Anything else up to the next whitespace is a symbol, taken
//!   verbatim (inner parentheses included; the format isn't nested).
//!
//! Failure anywhere rejects the whole line.

use crate::number::read_integer;
use crate::pos::Pos;
use crate::value::{Atom, List};
use genawaiter::rc::Gen;
use kstring::{KString, KStringCow};
use thiserror::Error;
use tracing::{debug, trace};

fn take_while_and_rest<'s>(
    s: &'s str, pred: impl Fn(char) -> bool
) -> (&'s str, &'s str) {
    if let Some(i) = s.find(|c| ! pred(c)) {
        (&s[0..i], &s[i..])
    } else {
        (s, "")
    }
}

fn is_token_char(c: char) -> bool {
    ! c.is_whitespace()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    #[error("expecting '(' at the start of the line")]
    MissingOpenParen,
    #[error("expecting ')' at the end of the line")]
    MissingCloseParen,
    #[error("unterminated string starting")]
    UnterminatedString,
    #[error("expecting whitespace or ')' after string, got '{0}'")]
    TextAfterString(char),
    #[error("keyword without a name")]
    EmptyKeyword,
    #[error("invalid number '{0}'")]
    InvalidNumber(KString),
    #[error("number '{0}' does not fit 64 bits")]
    NumberOverflow(KString),
}

/// The only error `parse_list` returns: the line could not be
/// parsed. The reason and position are for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed input: {reason} {pos}")]
pub struct MalformedInput {
    pub reason: Malformation,
    pub pos: Pos
}

impl Malformation {
    fn at(self, line: &str, offset: usize) -> MalformedInput {
        MalformedInput {
            reason: self,
            pos: Pos::of(line, offset)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtomWithPos<'s>(pub Atom<'s>, pub Pos);

// Returns the interior and its byte offset in line.
fn strip_delimiters(line: &str) -> Result<(&str, usize), MalformedInput> {
    let trimmed = line.trim_start();
    let start = line.len() - trimmed.len();
    let trimmed = trimmed.trim_end();
    let interior = trimmed.strip_prefix('(').ok_or_else(
        || Malformation::MissingOpenParen.at(line, start))?;
    let interior = interior.strip_suffix(')').ok_or_else(
        || Malformation::MissingCloseParen.at(line, start + trimmed.len()))?;
    Ok((interior, start + 1))
}

// s starts with the opening quote. Returns the text and the number of
// bytes consumed including both quotes.
fn read_string(s: &str) -> Result<(&str, usize), Malformation> {
    let body = &s[1..];
    let mut escaped = false;
    for (i, c) in body.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            let consumed = i + 2;
            if let Some(c) = s[consumed..].chars().next() {
                if ! c.is_whitespace() {
                    return Err(Malformation::TextAfterString(c))
                }
            }
            return Ok((&body[..i], consumed))
        }
    }
    Err(Malformation::UnterminatedString)
}

// s is non-empty and starts with the first character of a token.
// Returns the atom and the number of bytes it took up.
fn read_atom(s: &str) -> Result<(Atom<'_>, usize), Malformation> {
    match s.chars().next() {
        Some(':') => {
            let (name, _) = take_while_and_rest(&s[1..], is_token_char);
            if name.is_empty() {
                return Err(Malformation::EmptyKeyword)
            }
            Ok((Atom::Keyword(KStringCow::from_ref(name)), name.len() + 1))
        }
        Some('"') => {
            let (text, len) = read_string(s)?;
            Ok((Atom::String(KStringCow::from_ref(text)), len))
        }
        Some(c) if c.is_ascii_digit() => {
            let (tok, _) = take_while_and_rest(s, is_token_char);
            Ok((Atom::Number(read_integer(tok)?), tok.len()))
        }
        _ => {
            let (tok, _) = take_while_and_rest(s, is_token_char);
            Ok((Atom::Symbol(KStringCow::from_ref(tok)), tok.len()))
        }
    }
}

/// Lazily tokenize `line`. Stops after yielding the first error.
pub fn tokens<'s>(
    line: &'s str
) -> impl Iterator<Item = Result<AtomWithPos<'s>, MalformedInput>> + 's
{
    Gen::new(|co| async move {
        let (interior, base) = match strip_delimiters(line) {
            Ok(v) => v,
            Err(e) => {
                co.yield_(Err(e)).await;
                return;
            }
        };
        let mut rest = interior;
        let mut last = base;
        let mut pos = Pos::of(line, base);
        loop {
            let (_, r) = take_while_and_rest(rest, char::is_whitespace);
            if r.is_empty() {
                return;
            }
            let offset = base + (interior.len() - r.len());
            pos = pos.advance(&line[last..offset]);
            last = offset;
            match read_atom(r) {
                Err(reason) => {
                    co.yield_(Err(MalformedInput { reason, pos })).await;
                    return;
                }
                Ok((atom, len)) => {
                    trace!(?atom, offset, "atom");
                    rest = &r[len..];
                    co.yield_(Ok(AtomWithPos(atom, pos))).await;
                }
            }
        }
    }).into_iter()
}

/// Parse a whole line into a list. Either all of it parses, or
/// nothing is returned.
pub fn parse_list(line: &str) -> Result<List<'_>, MalformedInput> {
    let r: Result<List<'_>, MalformedInput> =
        tokens(line).map(|r| r.map(|AtomWithPos(a, _)| a)).collect();
    if let Err(e) = &r {
        debug!(%e, line, "rejecting line");
    }
    r
}
