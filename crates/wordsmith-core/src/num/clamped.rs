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

//! # Overflow Predicates and Clamped Arithmetic
//!
//! `addition_overflows` and `subtraction_underflows` decide whether an
//! operation leaves the operand type's range by comparing against the bounds,
//! so the overflowing operation itself is never evaluated. The clamped
//! operations build on them and saturate at `T::MIN`/`T::MAX`.

use crate::num::int::Int;

/// Returns `true` if `lhs + rhs` is not representable in `T`, in either
/// direction (above `T::MAX`, or below `T::MIN` for signed types).
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::clamped::addition_overflows;
///
/// assert!(addition_overflows(250u8, 10));
/// assert!(!addition_overflows(250u8, 5));
/// assert!(addition_overflows(-100i8, -29));
/// ```
#[inline]
pub fn addition_overflows<T: Int>(lhs: T, rhs: T) -> bool {
    if rhs >= T::zero() {
        lhs > T::max_value() - rhs
    } else {
        lhs < T::min_value() - rhs
    }
}

/// Returns `true` if `lhs - rhs` is not representable in `T`.
///
/// For unsigned types this is exactly `lhs < rhs`. For signed types it also
/// covers results above `T::MAX` when a negative value is subtracted.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::clamped::subtraction_underflows;
///
/// assert!(subtraction_underflows(0u32, 1));
/// assert!(!subtraction_underflows(1u32, 1));
/// assert!(subtraction_underflows(i8::MIN, 1));
/// assert!(subtraction_underflows(i8::MAX, -1));
/// ```
#[inline]
pub fn subtraction_underflows<T: Int>(lhs: T, rhs: T) -> bool {
    if rhs >= T::zero() {
        lhs < T::min_value() + rhs
    } else {
        lhs > T::max_value() + rhs
    }
}

/// Adds `rhs` to `lhs`, clamping the result to `[T::MIN, T::MAX]`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::clamped::clamped_add;
///
/// assert_eq!(clamped_add(u8::MAX, 1), u8::MAX);
/// assert_eq!(clamped_add(-120i8, -20), i8::MIN);
/// assert_eq!(clamped_add(2i64, 3), 5);
/// ```
#[inline]
pub fn clamped_add<T: Int>(lhs: T, rhs: T) -> T {
    if !addition_overflows(lhs, rhs) {
        lhs + rhs
    } else if rhs >= T::zero() {
        T::max_value()
    } else {
        T::min_value()
    }
}

/// Subtracts `rhs` from `lhs`, clamping the result to `[T::MIN, T::MAX]`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::clamped::clamped_subtract;
///
/// assert_eq!(clamped_subtract(0u8, 1), 0);
/// assert_eq!(clamped_subtract(100i8, -100), i8::MAX);
/// assert_eq!(clamped_subtract(10u16, 4), 6);
/// ```
#[inline]
pub fn clamped_subtract<T: Int>(lhs: T, rhs: T) -> T {
    if !subtraction_underflows(lhs, rhs) {
        lhs - rhs
    } else if rhs >= T::zero() {
        T::min_value()
    } else {
        T::max_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_agree_with_checked_ops_exhaustive_i8() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                assert_eq!(addition_overflows(a, b), a.checked_add(b).is_none());
                assert_eq!(subtraction_underflows(a, b), a.checked_sub(b).is_none());
            }
        }
    }

    #[test]
    fn test_predicates_agree_with_checked_ops_exhaustive_u8() {
        for a in u8::MIN..=u8::MAX {
            for b in u8::MIN..=u8::MAX {
                assert_eq!(addition_overflows(a, b), a.checked_add(b).is_none());
                assert_eq!(subtraction_underflows(a, b), a.checked_sub(b).is_none());
            }
        }
    }

    #[test]
    fn test_clamped_matches_saturating_exhaustive_i8() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                assert_eq!(clamped_add(a, b), a.saturating_add(b));
                assert_eq!(clamped_subtract(a, b), a.saturating_sub(b));
            }
        }
    }

    #[test]
    fn test_clamped_wide_types() {
        assert_eq!(clamped_add(u64::MAX, 1), u64::MAX);
        assert_eq!(clamped_subtract(0u64, 1), 0);
        assert_eq!(clamped_add(i128::MAX, i128::MAX), i128::MAX);
        assert_eq!(clamped_subtract(i128::MIN, i128::MAX), i128::MIN);
        assert_eq!(clamped_subtract(0isize, isize::MIN), isize::MAX);
        assert_eq!(clamped_add(usize::MAX - 1, 1), usize::MAX);
    }
}
