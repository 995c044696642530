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

//! Error taxonomy for contract violations.
//!
//! Each failure condition has its own type so callers can match on exactly
//! the misuse they care about, and an umbrella `Error` collects them for code
//! that forwards any of them. None of these is ever replaced by a fallback
//! value such as zero.

use crate::num::int::WideInt;
use std::fmt::Display;

/// A bit index outside `[0, width)` was passed to a bit accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfRangeBitIndex {
    /// The offending bit index.
    pub index: usize,
    /// The number of addressable bits.
    pub width: usize,
}

impl OutOfRangeBitIndex {
    /// Creates the error and reports it as a debug event.
    #[inline]
    pub fn new(index: usize, width: usize) -> Self {
        tracing::debug!(index, width, "bit index out of range");
        Self { index, width }
    }
}

impl Display for OutOfRangeBitIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bit index {} is out of range for a {}-bit value",
            self.index, self.width
        )
    }
}

impl std::error::Error for OutOfRangeBitIndex {}

/// Failure of a rounding integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivisionError {
    /// The denominator was zero.
    DivisionByZero,
    /// The exact quotient is not representable (`MIN / -1` for signed types).
    Overflow,
}

impl Display for DivisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "attempt to divide by zero"),
            Self::Overflow => write!(f, "attempt to divide with overflow"),
        }
    }
}

impl std::error::Error for DivisionError {}

/// A value could not be represented exactly in the requested integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NarrowingError {
    /// The value that was rejected.
    pub value: WideInt,
    /// Width of the target type in bits.
    pub bits: usize,
    /// Whether the target type is signed.
    pub signed: bool,
}

impl NarrowingError {
    /// Creates the error and reports it as a debug event.
    #[inline]
    pub fn new(value: WideInt, bits: usize, signed: bool) -> Self {
        tracing::debug!(%value, bits, signed, "narrowing conversion rejected");
        Self {
            value,
            bits,
            signed,
        }
    }
}

impl Display for NarrowingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "value {} does not fit in a {}-bit {} integer",
            self.value,
            self.bits,
            if self.signed { "signed" } else { "unsigned" }
        )
    }
}

impl std::error::Error for NarrowingError {}

/// A shift amount was not smaller than the width of the shifted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftOverflow {
    /// The requested shift amount.
    pub shift: usize,
    /// The width of the shifted value in bits.
    pub width: usize,
}

impl ShiftOverflow {
    /// Creates the error and reports it as a debug event.
    #[inline]
    pub fn new(shift: usize, width: usize) -> Self {
        tracing::debug!(shift, width, "shift amount overflows value width");
        Self { shift, width }
    }
}

impl Display for ShiftOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "shift by {} overflows a {}-bit value",
            self.shift, self.width
        )
    }
}

impl std::error::Error for ShiftOverflow {}

/// Any error produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    OutOfRangeBitIndex(OutOfRangeBitIndex),
    Division(DivisionError),
    Narrowing(NarrowingError),
    ShiftOverflow(ShiftOverflow),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRangeBitIndex(e) => write!(f, "Bit access error: {e}"),
            Self::Division(e) => write!(f, "Division error: {e}"),
            Self::Narrowing(e) => write!(f, "Narrowing error: {e}"),
            Self::ShiftOverflow(e) => write!(f, "Shift error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutOfRangeBitIndex(e) => Some(e),
            Self::Division(e) => Some(e),
            Self::Narrowing(e) => Some(e),
            Self::ShiftOverflow(e) => Some(e),
        }
    }
}

impl From<OutOfRangeBitIndex> for Error {
    fn from(e: OutOfRangeBitIndex) -> Self {
        Self::OutOfRangeBitIndex(e)
    }
}

impl From<DivisionError> for Error {
    fn from(e: DivisionError) -> Self {
        Self::Division(e)
    }
}

impl From<NarrowingError> for Error {
    fn from(e: NarrowingError) -> Self {
        Self::Narrowing(e)
    }
}

impl From<ShiftOverflow> for Error {
    fn from(e: ShiftOverflow) -> Self {
        Self::ShiftOverflow(e)
    }
}
