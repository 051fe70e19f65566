// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Integer literals: decimal, C style octal (leading `0`) and hex
//! (leading `0x` or `0X`). There's no sign; a token starting with `-`
//! is a symbol.

use crate::parse::Malformation;
use kstring::KString;

fn radix_and_digits(s: &str) -> (u32, &str) {
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, rest)
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    }
}

/// Read the whole of `s` as an integer literal. `s` must be the
/// complete token, i.e. anything that's not a digit in the detected
/// radix makes it invalid (`123abc`, `09`, `0x`).
pub fn read_integer(s: &str) -> Result<i64, Malformation> {
    let (radix, digits) = radix_and_digits(s);
    if digits.is_empty() {
        return Err(Malformation::InvalidNumber(KString::from_ref(s)))
    }
    let mut n: i64 = 0;
    for c in digits.chars() {
        let d = c.to_digit(radix).ok_or_else(
            || Malformation::InvalidNumber(KString::from_ref(s)))?;
        n = n.checked_mul(radix as i64)
            .and_then(|n| n.checked_add(d as i64))
            .ok_or_else(|| Malformation::NumberOverflow(KString::from_ref(s)))?;
    }
    Ok(n)
}
