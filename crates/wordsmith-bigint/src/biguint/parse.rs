// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use super::BigUint;
use crate::error::ParseBigUintError;
use crate::word::Word;
use std::str::FromStr;

/// Parses decimal input, or hexadecimal/binary input behind a `0x`/`0b`
/// prefix. Underscores between digits are ignored. Values that do not fit in
/// `BITS` bits are rejected rather than truncated.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_bigint::biguint;
///
/// type U1280 = biguint!(1280);
///
/// let x: U1280 = "0x1_0000_0000_0000_0000".parse().unwrap();
/// assert_eq!(x, U1280::ONE << 64);
/// assert_eq!("18446744073709551616".parse::<U1280>(), Ok(x));
/// assert!("0x1zz".parse::<U1280>().is_err());
/// ```
impl<const BITS: usize, const WORDS: usize> FromStr for BigUint<BITS, WORDS> {
    type Err = ParseBigUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (radix, prefix_len) = match s.get(..2) {
            Some("0x" | "0X") => (16, 2),
            Some("0b" | "0B") => (2, 2),
            _ => (10, 0),
        };

        let mut value = Self::ZERO;
        let mut seen_digit = false;
        for (i, ch) in s[prefix_len..].char_indices() {
            if ch == '_' {
                continue;
            }
            let Some(digit) = ch.to_digit(radix) else {
                let position = prefix_len + i;
                tracing::debug!(position, %ch, "invalid digit in BigUint literal");
                return Err(ParseBigUintError::InvalidDigit {
                    position,
                    digit: ch,
                });
            };
            let (next, overflow) = value.overflowing_mul_add_word(radix as Word, digit as Word);
            if overflow {
                tracing::debug!(bits = BITS, "BigUint literal overflows target width");
                return Err(ParseBigUintError::Overflow { bits: BITS });
            }
            value = next;
            seen_digit = true;
        }

        if seen_digit {
            Ok(value)
        } else {
            Err(ParseBigUintError::Empty)
        }
    }
}
