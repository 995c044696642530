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

//! # Single-Word Bit Primitives
//!
//! Stateless bit access and rotation on one unsigned machine word. Bit `0`
//! is the least significant bit. These are the building blocks multi-word
//! integers dispatch to once they have located the word holding a bit.
//!
//! Bit indices must lie in `[0, W::BITS)`. The plain accessors panic on a
//! violation and the `try_*` variants return `OutOfRangeBitIndex`; no
//! accessor silently masks the index.

use crate::error::OutOfRangeBitIndex;
use crate::num::int::{Int, Word};

#[inline(always)]
fn check_index<W: Word>(bit: u32) -> Result<(), OutOfRangeBitIndex> {
    if bit < <W as Int>::BITS {
        Ok(())
    } else {
        Err(OutOfRangeBitIndex::new(
            bit as usize,
            <W as Int>::BITS as usize,
        ))
    }
}

/// Returns the state of bit `bit` of `value`.
///
/// # Panics
///
/// Panics if `bit >= W::BITS`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::bits::get_bit;
///
/// assert!(get_bit(0b0100u8, 2));
/// assert!(!get_bit(0b0100u8, 1));
/// ```
#[inline]
pub fn get_bit<W: Word>(value: W, bit: u32) -> bool {
    match try_get_bit(value, bit) {
        Ok(state) => state,
        Err(e) => panic!("called `get_bit` with an invalid index: {e}"),
    }
}

/// Returns the state of bit `bit` of `value`, or an error if the index is
/// not smaller than the word width.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::bits::try_get_bit;
///
/// assert_eq!(try_get_bit(u64::MAX, 63), Ok(true));
/// assert!(try_get_bit(u64::MAX, 64).is_err());
/// ```
#[inline]
pub fn try_get_bit<W: Word>(value: W, bit: u32) -> Result<bool, OutOfRangeBitIndex> {
    check_index::<W>(bit)?;
    Ok((value >> bit as usize) & W::one() != W::zero())
}

/// Sets bit `bit` of `value` to `state` in place.
///
/// # Panics
///
/// Panics if `bit >= W::BITS`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::bits::set_bit;
///
/// let mut v = 0u16;
/// set_bit(&mut v, 15, true);
/// assert_eq!(v, 0x8000);
/// set_bit(&mut v, 15, false);
/// assert_eq!(v, 0);
/// ```
#[inline]
pub fn set_bit<W: Word>(value: &mut W, bit: u32, state: bool) {
    if let Err(e) = try_set_bit(value, bit, state) {
        panic!("called `set_bit` with an invalid index: {e}");
    }
}

/// Sets bit `bit` of `value` to `state` in place, or returns an error (and
/// leaves `value` untouched) if the index is not smaller than the word width.
#[inline]
pub fn try_set_bit<W: Word>(value: &mut W, bit: u32, state: bool) -> Result<(), OutOfRangeBitIndex> {
    check_index::<W>(bit)?;
    let mask = W::one() << bit as usize;
    *value = if state { *value | mask } else { *value & !mask };
    Ok(())
}

/// Returns the number of bits required to represent `value`: `0` for zero,
/// otherwise `floor(log2(value)) + 1`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::bits::bit_width;
///
/// assert_eq!(bit_width(0u32), 0);
/// assert_eq!(bit_width(1u32), 1);
/// assert_eq!(bit_width(255u8), 8);
/// assert_eq!(bit_width(256u64), 9);
/// ```
#[inline(always)]
pub fn bit_width<W: Word>(value: W) -> u32 {
    <W as Int>::BITS - value.leading_zeros()
}

/// Rotates `value` left by `shift` positions within the full word width.
///
/// `shift` is reduced modulo the word width using Euclidean remainder, so
/// negative amounts rotate right and every amount is well defined.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::bits::rotl;
///
/// assert_eq!(rotl(0b1000_0001u8, 1), 0b0000_0011);
/// assert_eq!(rotl(0b1000_0001u8, 9), 0b0000_0011);
/// assert_eq!(rotl(0b1000_0001u8, -1), 0b1100_0000);
/// ```
#[inline]
pub fn rotl<W: Word>(value: W, shift: i32) -> W {
    value.rotate_left(reduce_shift::<W>(shift))
}

/// Rotates `value` right by `shift` positions within the full word width.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::bits::rotr;
///
/// assert_eq!(rotr(0b0000_0011u8, 1), 0b1000_0001);
/// assert_eq!(rotr(0b0000_0011u8, -1), 0b0000_0110);
/// ```
#[inline]
pub fn rotr<W: Word>(value: W, shift: i32) -> W {
    value.rotate_right(reduce_shift::<W>(shift))
}

#[inline(always)]
fn reduce_shift<W: Word>(shift: i32) -> u32 {
    // Word widths are at most 128, so the cast cannot truncate.
    shift.rem_euclid(<W as Int>::BITS as i32) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_get_bit_every_position() {
        for bit in 0..64 {
            let v = 1u64 << bit;
            for probe in 0..64 {
                assert_eq!(get_bit(v, probe), probe == bit);
            }
        }
    }

    #[test]
    #[should_panic(expected = "bit index 8 is out of range for a 8-bit value")]
    fn test_get_bit_panics_past_width() {
        get_bit(0u8, 8);
    }

    #[test]
    fn test_try_get_bit_reports_index_and_width() {
        let err = try_get_bit(0u32, 40).unwrap_err();
        assert_eq!(err.index, 40);
        assert_eq!(err.width, 32);
    }

    #[test]
    fn test_set_bit_toggles_only_target() {
        let mut v = 0xF0F0u16;
        set_bit(&mut v, 0, true);
        assert_eq!(v, 0xF0F1);
        set_bit(&mut v, 4, false);
        assert_eq!(v, 0xF0E1);
        set_bit(&mut v, 4, false);
        assert_eq!(v, 0xF0E1);
    }

    #[test]
    fn test_try_set_bit_leaves_value_on_error() {
        let mut v = 0xABu8;
        assert!(try_set_bit(&mut v, 9, true).is_err());
        assert_eq!(v, 0xAB);
    }

    #[test]
    #[should_panic(expected = "called `set_bit` with an invalid index")]
    fn test_set_bit_panics_past_width() {
        let mut v = 0u128;
        set_bit(&mut v, 128, true);
    }

    #[test]
    fn test_bit_width_matches_log2() {
        assert_eq!(bit_width(0u8), 0);
        assert_eq!(bit_width(u128::MAX), 128);
        assert_eq!(bit_width(usize::MAX), usize::BITS);
        for shift in 0..64 {
            let v = 1u64 << shift;
            assert_eq!(bit_width(v), v.ilog2() + 1);
            assert_eq!(bit_width(v | (v >> 1)), shift + 1);
        }
    }

    #[test]
    fn test_rotl_shift_is_taken_modulo_width() {
        let v = 0x1234_5678u32;
        assert_eq!(rotl(v, 0), v);
        assert_eq!(rotl(v, 32), v);
        assert_eq!(rotl(v, 36), rotl(v, 4));
        assert_eq!(rotl(v, -4), rotr(v, 4));
        assert_eq!(rotl(v, i32::MIN), v); // i32::MIN is a multiple of 32
        assert_eq!(rotr(v, i32::MAX), rotr(v, 31));
    }

    #[test]
    fn test_rotate_involution() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let x: u64 = rng.random();
            let k = rng.random_range(0..64);
            assert_eq!(rotl(rotr(x, k), k), x);
            assert_eq!(rotr(rotl(x, k), k), x);
        }
    }

    #[test]
    fn test_rotate_moves_wrapped_bits() {
        assert_eq!(rotl(0x80u8, 1), 0x01);
        assert_eq!(rotr(0x01u8, 1), 0x80);
        assert_eq!(rotl(1u128, 127), 1u128 << 127);
    }
}
