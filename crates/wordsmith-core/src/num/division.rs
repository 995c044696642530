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

//! Integer division with directed rounding.
//!
//! Native `/` truncates toward zero. `int_divide_ceil` rounds toward positive
//! infinity and `int_divide_floor` toward negative infinity, for signed and
//! unsigned operands alike.

use crate::error::DivisionError;
use crate::num::int::Int;

#[inline(always)]
fn quotient_and_remainder<T: Int>(numerator: T, denominator: T) -> Result<(T, T), DivisionError> {
    if denominator == T::zero() {
        tracing::debug!(%numerator, "rounding division by zero");
        return Err(DivisionError::DivisionByZero);
    }
    match numerator.checked_div(&denominator) {
        // `checked_div` passing rules out `MIN % -1`, so the remainder is safe.
        Some(q) => Ok((q, numerator % denominator)),
        None => {
            tracing::debug!(%numerator, %denominator, "rounding division overflows");
            Err(DivisionError::Overflow)
        }
    }
}

/// Divides `numerator` by `denominator`, rounding toward positive infinity.
///
/// # Errors
///
/// Returns `DivisionError::DivisionByZero` if `denominator` is zero and
/// `DivisionError::Overflow` for `T::MIN / -1` on signed types.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::division::try_int_divide_ceil;
/// # use wordsmith_core::error::DivisionError;
///
/// assert_eq!(try_int_divide_ceil(7u32, 2), Ok(4));
/// assert_eq!(try_int_divide_ceil(-7i32, 2), Ok(-3));
/// assert_eq!(try_int_divide_ceil(1u8, 0), Err(DivisionError::DivisionByZero));
/// ```
#[inline]
pub fn try_int_divide_ceil<T: Int>(numerator: T, denominator: T) -> Result<T, DivisionError> {
    let (q, r) = quotient_and_remainder(numerator, denominator)?;
    let zero = T::zero();
    if r != zero && ((r > zero) == (denominator > zero)) {
        Ok(q + T::one())
    } else {
        Ok(q)
    }
}

/// Divides `numerator` by `denominator`, rounding toward negative infinity.
///
/// # Errors
///
/// Same conditions as [`try_int_divide_ceil`].
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::division::try_int_divide_floor;
///
/// assert_eq!(try_int_divide_floor(7u32, 2), Ok(3));
/// assert_eq!(try_int_divide_floor(-7i32, 2), Ok(-4));
/// assert_eq!(try_int_divide_floor(7i32, -2), Ok(-4));
/// ```
#[inline]
pub fn try_int_divide_floor<T: Int>(numerator: T, denominator: T) -> Result<T, DivisionError> {
    let (q, r) = quotient_and_remainder(numerator, denominator)?;
    let zero = T::zero();
    if r != zero && ((r < zero) != (denominator < zero)) {
        Ok(q - T::one())
    } else {
        Ok(q)
    }
}

/// Divides `numerator` by `denominator`, rounding toward positive infinity.
///
/// # Panics
///
/// Panics if `denominator` is zero or on signed `T::MIN / -1`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::division::int_divide_ceil;
///
/// assert_eq!(int_divide_ceil(7, 2), 4);
/// assert_eq!(int_divide_ceil(8, 2), 4);
/// assert_eq!(int_divide_ceil(-7, 2), -3);
/// ```
#[inline]
pub fn int_divide_ceil<T: Int>(numerator: T, denominator: T) -> T {
    match try_int_divide_ceil(numerator, denominator) {
        Ok(q) => q,
        Err(e) => panic!("{e}"),
    }
}

/// Divides `numerator` by `denominator`, rounding toward negative infinity.
///
/// # Panics
///
/// Panics if `denominator` is zero or on signed `T::MIN / -1`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::division::int_divide_floor;
///
/// assert_eq!(int_divide_floor(7, 2), 3);
/// assert_eq!(int_divide_floor(-7, 2), -4);
/// ```
#[inline]
pub fn int_divide_floor<T: Int>(numerator: T, denominator: T) -> T {
    match try_int_divide_floor(numerator, denominator) {
        Ok(q) => q,
        Err(e) => panic!("{e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_floor(n: i64, d: i64) -> i64 {
        (n as f64 / d as f64).floor() as i64
    }

    fn reference_ceil(n: i64, d: i64) -> i64 {
        (n as f64 / d as f64).ceil() as i64
    }

    #[test]
    fn test_ceil_and_floor_small_signed_grid() {
        for n in -50i64..=50 {
            for d in (-7i64..=7).filter(|&d| d != 0) {
                assert_eq!(int_divide_ceil(n, d), reference_ceil(n, d), "ceil({n}, {d})");
                assert_eq!(int_divide_floor(n, d), reference_floor(n, d), "floor({n}, {d})");
            }
        }
    }

    #[test]
    fn test_unsigned_rounding() {
        assert_eq!(int_divide_ceil(7u8, 2), 4);
        assert_eq!(int_divide_floor(7u8, 2), 3);
        assert_eq!(int_divide_ceil(0u8, 5), 0);
        assert_eq!(int_divide_ceil(u64::MAX, 2), (u64::MAX / 2) + 1);
        assert_eq!(int_divide_ceil(u64::MAX, u64::MAX), 1);
        assert_eq!(int_divide_floor(u128::MAX, 3), u128::MAX / 3);
    }

    #[test]
    fn test_exact_division_is_not_adjusted() {
        assert_eq!(int_divide_ceil(-8i32, 2), -4);
        assert_eq!(int_divide_floor(-8i32, 2), -4);
        assert_eq!(int_divide_ceil(8i32, -2), -4);
        assert_eq!(int_divide_floor(8i32, -2), -4);
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        assert_eq!(int_divide_ceil(i32::MIN, 2), i32::MIN / 2);
        assert_eq!(int_divide_floor(i32::MIN + 1, 2), i32::MIN / 2);
        assert_eq!(int_divide_ceil(i32::MAX, -2), -(i32::MAX / 2));
        assert_eq!(int_divide_floor(i32::MAX, -2), -(i32::MAX / 2) - 1);
        assert_eq!(int_divide_floor(i8::MIN, 1), i8::MIN);
    }

    #[test]
    fn test_division_errors_are_distinct() {
        assert_eq!(
            try_int_divide_floor(5i16, 0),
            Err(DivisionError::DivisionByZero)
        );
        assert_eq!(
            try_int_divide_ceil(i16::MIN, -1),
            Err(DivisionError::Overflow)
        );
        assert_eq!(
            try_int_divide_floor(i64::MIN, -1),
            Err(DivisionError::Overflow)
        );
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_ceil_panics_on_zero_denominator() {
        int_divide_ceil(1u32, 0);
    }

    #[test]
    #[should_panic(expected = "attempt to divide with overflow")]
    fn test_floor_panics_on_min_by_minus_one() {
        int_divide_floor(i8::MIN, -1);
    }
}
