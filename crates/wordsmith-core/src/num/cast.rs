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

//! Range checks and checked narrowing conversions between primitive integers.
//!
//! A conversion is accepted only when the value survives it exactly: no
//! truncation of high bits and no change of sign.

use crate::error::NarrowingError;
use crate::num::cmp::{cmp_greater_equal, cmp_less_equal};
use crate::num::int::Int;

/// Returns `true` if `value` is exactly representable in `To`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::cast::in_range;
///
/// assert!(in_range::<u8, _>(255u32));
/// assert!(!in_range::<u8, _>(256u32));
/// assert!(!in_range::<u64, _>(-1i8));
/// assert!(in_range::<i8, _>(-128i64));
/// ```
#[inline]
pub fn in_range<To: Int, Src: Int>(value: Src) -> bool {
    cmp_greater_equal(value, To::min_value()) && cmp_less_equal(value, To::max_value())
}

/// Converts `value` to `To`, rejecting any value that `To` cannot represent.
///
/// # Errors
///
/// Returns a `NarrowingError` carrying the rejected value when
/// [`in_range::<To, _>(value)`](in_range) is `false`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::cast::narrow_cast;
///
/// assert_eq!(narrow_cast::<u8, _>(200u16), Ok(200u8));
/// assert!(narrow_cast::<u8, _>(300u16).is_err());
/// assert!(narrow_cast::<u32, _>(-5i32).is_err());
/// ```
#[inline]
pub fn narrow_cast<To: Int, Src: Int>(value: Src) -> Result<To, NarrowingError> {
    if in_range::<To, Src>(value) {
        Ok(To::from_wide_wrapping(value.widen()))
    } else {
        Err(NarrowingError::new(
            value.widen(),
            <To as Int>::BITS as usize,
            To::SIGNED,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_cast_rejects_truncation() {
        let err = narrow_cast::<u8, _>(300u32).unwrap_err();
        assert_eq!(err.value, 300u32.widen());
        assert_eq!(err.bits, 8);
        assert!(!err.signed);
        assert_eq!(narrow_cast::<u8, _>(200u32), Ok(200));
    }

    #[test]
    fn test_narrow_cast_rejects_sign_change() {
        assert!(narrow_cast::<u8, _>(-1i8).is_err());
        assert!(narrow_cast::<i8, _>(128u8).is_err());
        assert!(narrow_cast::<i64, _>(u64::MAX).is_err());
        assert_eq!(narrow_cast::<u64, _>(i64::MAX), Ok(i64::MAX as u64));
    }

    #[test]
    fn test_in_range_matches_try_from_exhaustive_i16_to_u8_and_i8() {
        for v in i16::MIN..=i16::MAX {
            assert_eq!(in_range::<u8, _>(v), u8::try_from(v).is_ok());
            assert_eq!(in_range::<i8, _>(v), i8::try_from(v).is_ok());
            assert_eq!(narrow_cast::<i8, _>(v).ok(), i8::try_from(v).ok());
        }
    }

    #[test]
    fn test_widening_always_succeeds() {
        assert_eq!(narrow_cast::<i128, _>(i64::MIN), Ok(i64::MIN as i128));
        assert_eq!(narrow_cast::<u128, _>(u64::MAX), Ok(u64::MAX as u128));
        assert_eq!(narrow_cast::<i128, _>(u64::MAX), Ok(u64::MAX as i128));
    }

    #[test]
    fn test_extremes() {
        assert!(narrow_cast::<i128, _>(u128::MAX).is_err());
        assert_eq!(narrow_cast::<i128, _>(i128::MIN), Ok(i128::MIN));
        assert_eq!(narrow_cast::<u128, _>(0i128), Ok(0u128));
    }
}
