// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading a list as a property list: each keyword names the atom
//! right after it.

use crate::value::{Atom, List};

/// The atom following the first `:name` in `list`. None if there's
/// no such keyword, or if it is the last atom. The following atom is
/// returned whatever it is, even another keyword.
pub fn lookup<'l, 's>(list: &'l List<'s>, name: &str) -> Option<&'l Atom<'s>> {
    let atoms = list.as_slice();
    let i = atoms.iter().position(|a| a.is_keyword(name))?;
    atoms.get(i + 1)
}

/// Iterator over (keyword name, following atom) associations, in
/// list order, duplicates included. Atoms that don't follow a keyword
/// are skipped, and a value is never taken as a key, even if it is a
/// keyword. A trailing keyword pairs with None.
pub struct Pairs<'l, 's> {
    atoms: &'l [Atom<'s>],
}

impl<'l, 's> Iterator for Pairs<'l, 's> {
    type Item = (&'l str, Option<&'l Atom<'s>>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (first, rest) = self.atoms.split_first()?;
            if let Atom::Keyword(name) = first {
                let value = rest.first();
                self.atoms = if value.is_some() { &rest[1..] } else { rest };
                return Some((name.as_str(), value))
            }
            self.atoms = rest;
        }
    }
}

impl<'s> List<'s> {
    /// See [lookup](lookup).
    pub fn lookup(&self, name: &str) -> Option<&Atom<'s>> {
        lookup(self, name)
    }

    /// The text of the value for `:name`, if it's a string or symbol.
    pub fn lookup_str(&self, name: &str) -> Option<&str> {
        match self.lookup(name)? {
            Atom::String(s) | Atom::Symbol(s) => Some(s.as_str()),
            _ => None
        }
    }

    /// The value for `:name`, if it's a number.
    pub fn lookup_number(&self, name: &str) -> Option<i64> {
        self.lookup(name)?.as_number()
    }

    pub fn pairs(&self) -> Pairs<'_, 's> {
        Pairs { atoms: self.as_slice() }
    }
}
