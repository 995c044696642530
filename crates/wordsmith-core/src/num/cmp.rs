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

//! # Cross-Type Integer Comparison
//!
//! Compares two integers of possibly different types by their mathematical
//! value. Both operands are widened into `WideInt` first, so no operand is
//! ever reinterpreted through the other's type: `-1i32` compares below
//! `0u32` and `u64::MAX` compares above `i64::MAX`.
//!
//! ```rust
//! use wordsmith_core::num::cmp::{cmp_equal, cmp_less};
//!
//! assert!(cmp_less(-1i32, 0u32));
//! assert!(!cmp_equal(-1i8, u8::MAX));
//! ```

use crate::num::int::Int;
use std::cmp::Ordering;

/// Three-way comparison of `lhs` and `rhs` by mathematical value.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::cmp::cmp_three_way;
/// # use std::cmp::Ordering;
///
/// assert_eq!(cmp_three_way(-1i64, 0u8), Ordering::Less);
/// assert_eq!(cmp_three_way(255u8, 255i32), Ordering::Equal);
/// ```
#[inline]
pub fn cmp_three_way<L: Int, R: Int>(lhs: L, rhs: R) -> Ordering {
    lhs.widen().cmp(&rhs.widen())
}

/// Returns `true` if `lhs == rhs` mathematically.
#[inline]
pub fn cmp_equal<L: Int, R: Int>(lhs: L, rhs: R) -> bool {
    cmp_three_way(lhs, rhs) == Ordering::Equal
}

/// Returns `true` if `lhs != rhs` mathematically.
#[inline]
pub fn cmp_not_equal<L: Int, R: Int>(lhs: L, rhs: R) -> bool {
    !cmp_equal(lhs, rhs)
}

/// Returns `true` if `lhs < rhs` mathematically.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::cmp::cmp_less;
///
/// assert!(cmp_less(-1i32, 0u32));
/// assert!(!cmp_less(u32::MAX, -1i64));
/// ```
#[inline]
pub fn cmp_less<L: Int, R: Int>(lhs: L, rhs: R) -> bool {
    cmp_three_way(lhs, rhs) == Ordering::Less
}

/// Returns `true` if `lhs > rhs` mathematically.
#[inline]
pub fn cmp_greater<L: Int, R: Int>(lhs: L, rhs: R) -> bool {
    cmp_three_way(lhs, rhs) == Ordering::Greater
}

/// Returns `true` if `lhs <= rhs` mathematically.
#[inline]
pub fn cmp_less_equal<L: Int, R: Int>(lhs: L, rhs: R) -> bool {
    !cmp_greater(lhs, rhs)
}

/// Returns `true` if `lhs >= rhs` mathematically.
#[inline]
pub fn cmp_greater_equal<L: Int, R: Int>(lhs: L, rhs: R) -> bool {
    !cmp_less(lhs, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_negative_signed_below_unsigned_zero() {
        assert!(cmp_less(-1i32, 0u32));
        assert!(cmp_greater(0u32, -1i32));
        assert!(cmp_not_equal(-1i32, u32::MAX));
        // The naive promotion gets this wrong.
        assert!((-1i32) as u32 > 0u32);
    }

    #[test]
    fn test_equal_across_widths() {
        assert!(cmp_equal(200u8, 200i64));
        assert!(cmp_equal(0i128, 0usize));
        assert!(cmp_equal(i64::MAX, i64::MAX as u64));
        assert!(!cmp_equal(i8::MIN, 128u8));
    }

    #[test]
    fn test_extreme_values() {
        assert!(cmp_less(i128::MIN, 0u8));
        assert!(cmp_greater(u128::MAX, i128::MAX));
        assert!(cmp_less_equal(i128::MAX, u128::MAX));
        assert!(cmp_greater_equal(u128::MAX, u128::MAX));
        assert!(cmp_less(isize::MIN, usize::MIN));
    }

    #[test]
    fn test_agrees_with_i128_when_representable() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..2000 {
            let a: i64 = rng.random();
            let b: u32 = rng.random();
            let expected = (a as i128).cmp(&(b as i128));
            assert_eq!(cmp_three_way(a, b), expected);
            assert_eq!(cmp_less(a, b), expected == Ordering::Less);
            assert_eq!(cmp_greater_equal(a, b), expected != Ordering::Less);
            assert_eq!(cmp_less_equal(b, a), expected != Ordering::Less);
        }
    }
}
