// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A parser and printer for flat property lists written on a single
//! line, like
//!
//! ```text
//! (:host "example.org" :port 5222 :user alice)
//! ```
//!
//! * `plistline::parse` turns one line into a [List](value::List) of
//!   [Atom](value::Atom)s: strings, symbols, keywords and 64-bit
//!   integers. The atoms borrow their text from the input line; use
//!   `List::into_owned` to detach them.
//!
//! * `plistline::plist` treats a list as an association of keyword to
//!   the value that follows it.
//!
//! * `plistline::read` reads one list per line from any `Read` (e.g. a
//!   configuration file) and writes lists back in canonical form.
//!
//! The format is deliberately not nested: parentheses only delimit the
//! whole line. See [parse](parse/index.html) for the exact grammar.

pub mod context;
pub mod number;
pub mod parse;
pub mod plist;
pub mod pos;
pub mod read;
pub mod value;
