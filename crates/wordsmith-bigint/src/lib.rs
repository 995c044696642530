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

//! # Wordsmith BigUint
//!
//! Fixed-width arbitrary-precision unsigned integers. `BigUint<BITS, WORDS>`
//! stores exactly `BITS` bits in an inline array of 64-bit words, so values
//! are `Copy`, never allocate and can be shared across threads freely.
//!
//! ## Modules
//!
//! - `biguint`: The `BigUint` value type with bitwise operators, shifts and
//!   rotations across word boundaries, ordering, carry/borrow addition and
//!   subtraction, formatting and parsing.
//! - `word`: The storage word type and the `words_for`/`excess_mask`
//!   helpers that size and mask the word array.
//! - `error`: `ParseBigUintError` plus re-exports of the bit-access,
//!   narrowing and shift errors from `wordsmith-core`.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` as `0x`-prefixed hex strings.
//!
//! ```rust
//! use wordsmith_bigint::biguint;
//!
//! type U1280 = biguint!(1280);
//!
//! let x = U1280::ONE << 640;
//! assert_eq!(x.trailing_zeros(), 640);
//! assert_eq!(x.count_ones(), 1);
//! assert!(x > U1280::new(u64::MAX));
//! assert_eq!(U1280::ONE << 1280, U1280::ZERO);
//! ```

/// Names the `BigUint` type with the given bit width, deriving the word count.
///
/// # Examples
///
/// ```rust
/// use wordsmith_bigint::{BigUint, biguint};
///
/// type U100 = biguint!(100);
/// let _: BigUint<100, 2> = U100::ZERO;
/// ```
#[macro_export]
macro_rules! biguint {
    ($bits:expr) => {
        $crate::BigUint<{ $bits }, { $crate::word::words_for($bits) }>
    };
}

pub mod biguint;
pub mod error;
pub mod word;

pub use biguint::BigUint;

/// 128-bit unsigned integer.
pub type U128 = biguint!(128);
/// 256-bit unsigned integer.
pub type U256 = biguint!(256);
/// 512-bit unsigned integer.
pub type U512 = biguint!(512);
/// 1024-bit unsigned integer.
pub type U1024 = biguint!(1024);
