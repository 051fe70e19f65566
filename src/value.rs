// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runtime data types representing a parsed line.

//! An [Atom](Atom) is one typed value; a [List](List) is the flat,
//! ordered sequence of atoms between the parentheses of one line.
//! Text payloads are `KStringCow<'s>`: as produced by the parser they
//! borrow from the input line, thus a `List<'s>` can't outlive it.

use kstring::{KString, KStringCow};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum Atom<'s> {
    /// `"text"`; the text is kept verbatim, including any `\`
    String(KStringCow<'s>),
    /// bare `text`
    Symbol(KStringCow<'s>),
    /// `:text`, the marker is not part of the name
    Keyword(KStringCow<'s>),
    Number(i64),
}

impl<'s> Atom<'s> {
    /// The text payload, or None for numbers.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Atom::String(s) | Atom::Symbol(s) | Atom::Keyword(s) =>
                Some(s.as_str()),
            Atom::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Atom::Number(n) => Some(*n),
            _ => None
        }
    }

    /// Whether this is the keyword `:name`.
    pub fn is_keyword(&self, name: &str) -> bool {
        match self {
            Atom::Keyword(s) => s.as_str() == name,
            _ => false
        }
    }

    /// Copy the text out of the input, giving an atom that lives on
    /// its own.
    pub fn into_owned(self) -> Atom<'static> {
        fn own(s: KStringCow<'_>) -> KStringCow<'static> {
            let s: KString = s.into_owned();
            KStringCow::from(s)
        }
        match self {
            Atom::String(s) => Atom::String(own(s)),
            Atom::Symbol(s) => Atom::Symbol(own(s)),
            Atom::Keyword(s) => Atom::Keyword(own(s)),
            Atom::Number(n) => Atom::Number(n),
        }
    }
}

impl<'s> std::fmt::Display for Atom<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        // No escaping: strings carry their escape markers from the
        // input already.
        match self {
            Atom::String(s) => {
                f.write_char('"')?;
                f.write_str(s.as_str())?;
                f.write_char('"')
            }
            Atom::Symbol(s) => f.write_str(s.as_str()),
            Atom::Keyword(s) => {
                f.write_char(':')?;
                f.write_str(s.as_str())
            }
            Atom::Number(n) => f.write_fmt(format_args!("{}", n)),
        }
    }
}

/// Easily create a string atom
pub fn string(s: &str) -> Atom<'_> {
    Atom::String(KStringCow::from_ref(s))
}

/// Easily create a symbol
pub fn symbol(s: &str) -> Atom<'_> {
    Atom::Symbol(KStringCow::from_ref(s))
}

/// Easily create a keyword; `s` is the name without the `:`
pub fn keyword(s: &str) -> Atom<'_> {
    Atom::Keyword(KStringCow::from_ref(s))
}


/// The atoms of one line, in input order. Lists are only ever built
/// up by appending; use `FromIterator` or `push`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List<'s> {
    atoms: Vec<Atom<'s>>,
}

impl<'s> List<'s> {
    pub fn new() -> List<'s> {
        List { atoms: Vec::new() }
    }

    pub fn push(&mut self, a: Atom<'s>) {
        self.atoms.push(a)
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Atom<'s>> {
        self.atoms.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Atom<'s>> {
        self.atoms.iter()
    }

    pub fn as_slice(&self) -> &[Atom<'s>] {
        &self.atoms
    }

    pub fn into_owned(self) -> List<'static> {
        self.atoms.into_iter().map(Atom::into_owned).collect()
    }
}

impl<'s> FromIterator<Atom<'s>> for List<'s> {
    fn from_iter<I: IntoIterator<Item = Atom<'s>>>(iter: I) -> Self {
        List { atoms: iter.into_iter().collect() }
    }
}

impl<'s> IntoIterator for List<'s> {
    type Item = Atom<'s>;
    type IntoIter = std::vec::IntoIter<Atom<'s>>;
    fn into_iter(self) -> Self::IntoIter {
        self.atoms.into_iter()
    }
}

impl<'l, 's> IntoIterator for &'l List<'s> {
    type Item = &'l Atom<'s>;
    type IntoIter = std::slice::Iter<'l, Atom<'s>>;
    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

impl<'s> std::fmt::Display for List<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_char('(')?;
        for (i, a) in self.atoms.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{}", a)?;
        }
        f.write_char(')')
    }
}
