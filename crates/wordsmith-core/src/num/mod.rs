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

//! # Numeric Foundations
//!
//! Integer-centric building blocks shared by the bit primitives and by
//! multi-word integers. Every function here is total over its documented
//! domain and works uniformly across all primitive integer widths.
//!
//! ## Submodules
//!
//! - `int`: Sealed `Int`/`Word` traits implemented for every primitive
//!   integer, plus `WideInt`, a sign-magnitude value wide enough to hold any
//!   of them exactly.
//! - `division`: Integer division rounding toward positive or negative
//!   infinity (`int_divide_ceil`, `int_divide_floor`).
//! - `clamped`: Overflow/underflow predicates and saturating addition and
//!   subtraction that never perform the overflowing operation.
//! - `cmp`: Mathematically exact comparison between integers of different
//!   types and signedness (`cmp_less(-1i32, 0u32)` is `true`).
//! - `cast`: Range checks and checked narrowing conversions.
//! - `index`: Reverse indexing without signed arithmetic.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod cast;
pub mod clamped;
pub mod cmp;
pub mod division;
pub mod index;
pub mod int;
