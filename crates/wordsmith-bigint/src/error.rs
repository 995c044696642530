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

//! Errors reported by `BigUint` operations.
//!
//! Bit access, construction and shifting reuse the kinds defined in
//! `wordsmith_core::error`; parsing adds `ParseBigUintError`.

use std::fmt::Display;

pub use wordsmith_core::error::{Error, NarrowingError, OutOfRangeBitIndex, ShiftOverflow};

/// The error type for parsing a `BigUint` from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseBigUintError {
    /// The input contained no digits.
    Empty,
    /// A character is not a digit of the detected radix.
    InvalidDigit {
        /// Byte offset of the character in the input.
        position: usize,
        /// The offending character.
        digit: char,
    },
    /// The value does not fit in the target width.
    Overflow {
        /// Width of the target type in bits.
        bits: usize,
    },
}

impl Display for ParseBigUintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse integer from empty string"),
            Self::InvalidDigit { position, digit } => {
                write!(f, "invalid digit '{digit}' at position {position}")
            }
            Self::Overflow { bits } => {
                write!(f, "number too large to fit in {bits} bits")
            }
        }
    }
}

impl std::error::Error for ParseBigUintError {}
