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

//! # Wordsmith Core
//!
//! Bit- and integer-math primitives for code that has to be exact about word
//! boundaries, overflow and signedness. The crate is the leaf layer of the
//! workspace: multi-word integers in `wordsmith-bigint` are composed from the
//! single-word operations found here.
//!
//! ## Modules
//!
//! - `bits`: Single-word bit access (`get_bit`, `set_bit`), significant bit
//!   count (`bit_width`) and circular rotation (`rotl`, `rotr`) with shift
//!   amounts taken modulo the word width.
//! - `num`: Rounding division, overflow predicates, saturating arithmetic,
//!   cross-type comparison, checked narrowing and reverse indexing, generic
//!   over every primitive integer type.
//! - `error`: The error taxonomy (`OutOfRangeBitIndex`, `DivisionError`,
//!   `NarrowingError`, `ShiftOverflow`) and the umbrella `Error` enum.
//!
//! ## Failure model
//!
//! Contract violations are never corrected to a best-guess value. Fallible
//! operations come in a `try_*` form returning `Result` and a plain form
//! that panics with the error's message at the call site. Rejections are
//! reported as `tracing` debug events; the crate never installs a subscriber.
//!
//! ```rust
//! use wordsmith_core::num::{cast::narrow_cast, cmp::cmp_less};
//!
//! assert!(cmp_less(-1i32, 0u32));
//! assert_eq!(narrow_cast::<u8, _>(200u32), Ok(200u8));
//! assert!(narrow_cast::<u8, _>(300u32).is_err());
//! ```

pub mod bits;
pub mod error;
pub mod num;
