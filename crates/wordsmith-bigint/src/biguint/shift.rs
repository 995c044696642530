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

//! Shifts and rotations across word boundaries.
//!
//! A shift by `k` bits is split into a whole-word move by `k / WORD_SIZE`
//! and a sub-word shift by `k % WORD_SIZE`; the bits that cross a word
//! boundary are stitched in from the adjacent word. Vacated positions are
//! filled with zeros and the result is re-masked.

use super::BigUint;
use crate::error::ShiftOverflow;
use crate::word::{WORD_SIZE, Word};
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

impl<const BITS: usize, const WORDS: usize> BigUint<BITS, WORDS> {
    /// Shifts left by `shift` bits. Shifting by `BITS` or more yields zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// type U100 = biguint!(100);
    ///
    /// // Bits pushed past the 100-bit width are discarded.
    /// assert_eq!(U100::new(6).shift_left(98), U100::ONE.shift_left(99));
    /// assert_eq!(U100::ONE.shift_left(100), U100::ZERO);
    /// ```
    #[inline]
    pub fn shift_left(self, shift: usize) -> Self {
        if shift >= BITS {
            return Self::ZERO;
        }
        let word_shift = shift / WORD_SIZE;
        let bit_shift = (shift % WORD_SIZE) as u32;
        let mut words: [Word; WORDS] = [0; WORDS];
        for (dst, out) in words.iter_mut().enumerate().skip(word_shift) {
            let src = dst - word_shift;
            let mut w = self.words[src] << bit_shift;
            if bit_shift != 0 && src > 0 {
                w |= self.words[src - 1] >> (WORD_SIZE as u32 - bit_shift);
            }
            *out = w;
        }
        Self::from_words_masked(words)
    }

    /// Shifts right by `shift` bits. Shifting by `BITS` or more yields zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// type U256 = biguint!(256);
    ///
    /// assert_eq!(U256::MAX.shift_right(255), U256::ONE);
    /// assert_eq!(U256::MAX.shift_right(256), U256::ZERO);
    /// ```
    #[inline]
    pub fn shift_right(self, shift: usize) -> Self {
        if shift >= BITS {
            return Self::ZERO;
        }
        let word_shift = shift / WORD_SIZE;
        let bit_shift = (shift % WORD_SIZE) as u32;
        let mut words: [Word; WORDS] = [0; WORDS];
        for (dst, out) in words.iter_mut().enumerate().take(WORDS - word_shift) {
            let src = dst + word_shift;
            let mut w = self.words[src] >> bit_shift;
            if bit_shift != 0 && src + 1 < WORDS {
                w |= self.words[src + 1] << (WORD_SIZE as u32 - bit_shift);
            }
            *out = w;
        }
        Self { words }
    }

    /// Shifts left by `shift` bits, or returns `ShiftOverflow` if
    /// `shift >= BITS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// type U8 = biguint!(8);
    ///
    /// assert_eq!(U8::ONE.checked_shl(7), Ok(U8::new(128)));
    /// assert!(U8::ONE.checked_shl(8).is_err());
    /// ```
    #[inline]
    pub fn checked_shl(self, shift: usize) -> Result<Self, ShiftOverflow> {
        if shift >= BITS {
            Err(ShiftOverflow::new(shift, BITS))
        } else {
            Ok(self.shift_left(shift))
        }
    }

    /// Shifts right by `shift` bits, or returns `ShiftOverflow` if
    /// `shift >= BITS`.
    #[inline]
    pub fn checked_shr(self, shift: usize) -> Result<Self, ShiftOverflow> {
        if shift >= BITS {
            Err(ShiftOverflow::new(shift, BITS))
        } else {
            Ok(self.shift_right(shift))
        }
    }

    /// Returns `2^exponent`, or `ShiftOverflow` if `exponent >= BITS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// type U1280 = biguint!(1280);
    ///
    /// let x = U1280::power_of_two(640).unwrap();
    /// assert_eq!(x.trailing_zeros(), 640);
    /// assert_eq!(x.count_ones(), 1);
    /// assert!(U1280::power_of_two(1280).is_err());
    /// ```
    #[inline]
    pub fn power_of_two(exponent: usize) -> Result<Self, ShiftOverflow> {
        Self::ONE.checked_shl(exponent)
    }

    /// Rotates left by `shift` bits within the `BITS`-bit width. `shift` is
    /// taken modulo `BITS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// type U100 = biguint!(100);
    ///
    /// let top = U100::ONE << 99;
    /// assert_eq!(top.rotate_left(1), U100::ONE);
    /// assert_eq!(top.rotate_left(101), U100::ONE);
    /// ```
    #[inline]
    pub fn rotate_left(self, shift: usize) -> Self {
        match shift % BITS {
            0 => self,
            k => self.shift_left(k) | self.shift_right(BITS - k),
        }
    }

    /// Rotates right by `shift` bits within the `BITS`-bit width. `shift` is
    /// taken modulo `BITS`.
    #[inline]
    pub fn rotate_right(self, shift: usize) -> Self {
        match shift % BITS {
            0 => self,
            k => self.shift_right(k) | self.shift_left(BITS - k),
        }
    }
}

impl<const BITS: usize, const WORDS: usize> Shl<usize> for BigUint<BITS, WORDS> {
    type Output = Self;

    #[inline]
    fn shl(self, shift: usize) -> Self {
        self.shift_left(shift)
    }
}

impl<const BITS: usize, const WORDS: usize> Shr<usize> for BigUint<BITS, WORDS> {
    type Output = Self;

    #[inline]
    fn shr(self, shift: usize) -> Self {
        self.shift_right(shift)
    }
}

impl<const BITS: usize, const WORDS: usize> ShlAssign<usize> for BigUint<BITS, WORDS> {
    #[inline]
    fn shl_assign(&mut self, shift: usize) {
        *self = self.shift_left(shift);
    }
}

impl<const BITS: usize, const WORDS: usize> ShrAssign<usize> for BigUint<BITS, WORDS> {
    #[inline]
    fn shr_assign(&mut self, shift: usize) {
        *self = self.shift_right(shift);
    }
}

#[cfg(test)]
mod tests {
    type U1 = biguint!(1);
    type U64 = biguint!(64);
    type U200 = biguint!(200);
    type U1280 = biguint!(1280);

    #[test]
    fn test_one_shifted_to_640_in_1280_bits() {
        let x = U1280::ONE << 640;
        for i in 0..1280 {
            assert_eq!(x.get_bit(i), i == 640, "bit {i}");
        }
        assert_eq!(x.word(10), 1);
        assert_eq!(x.count_ones(), 1);
        assert_eq!(x >> 640, U1280::ONE);
    }

    #[test]
    fn test_shift_by_zero_is_identity() {
        let x = U200::from_words_masked([1, 2, 3, 0xFF]);
        assert_eq!(x << 0, x);
        assert_eq!(x >> 0, x);
    }

    #[test]
    fn test_shift_at_or_beyond_bits_is_zero() {
        assert_eq!(U200::MAX << 200, U200::ZERO);
        assert_eq!(U200::MAX >> 200, U200::ZERO);
        assert_eq!(U200::MAX << usize::MAX, U200::ZERO);
        assert_eq!(U200::MAX << 199, U200::ONE << 199);
    }

    #[test]
    fn test_shift_stitches_across_words() {
        let x = U200::new(u64::MAX);
        assert_eq!((x << 4).as_words(), &[u64::MAX << 4, 0xF, 0, 0]);
        assert_eq!((x << 68).as_words(), &[0, u64::MAX << 4, 0xF, 0]);
        let top = U200::ONE << 130;
        assert_eq!((top >> 67).as_words(), &[1u64 << 63, 0, 0, 0]);
    }

    #[test]
    fn test_shift_left_drops_bits_past_width() {
        let x = U200::MAX << 8;
        assert_eq!(x.as_words()[3], 0xFF);
        assert_eq!(x.count_ones(), 192);
        assert_eq!(x.trailing_zeros(), 8);
    }

    #[test]
    fn test_checked_shift_policy() {
        assert_eq!(U200::ONE.checked_shl(199), Ok(U200::ONE << 199));
        let err = U200::ONE.checked_shl(200).unwrap_err();
        assert_eq!((err.shift, err.width), (200, 200));
        assert!(U200::MAX.checked_shr(200).is_err());
        assert_eq!(U200::MAX.checked_shr(199), Ok(U200::ONE));
    }

    #[test]
    fn test_single_bit_and_single_word_widths() {
        assert_eq!(U1::ONE << 1, U1::ZERO);
        assert_eq!(U1::ONE.rotate_left(5), U1::ONE);
        assert_eq!(U64::new(1).rotate_right(1), U64::new(1u64 << 63));
        assert_eq!(U64::MAX >> 63, U64::ONE);
    }

    #[test]
    fn test_rotation_wraps_within_nominal_width() {
        let x = U200::ONE << 199;
        assert_eq!(x.rotate_left(1), U200::ONE);
        assert_eq!(U200::ONE.rotate_right(1), x);
        assert_eq!(x.rotate_left(200), x);
        let y = U200::from_words_masked([0xABCD, 0, 7, 0x80]);
        for k in [1, 63, 64, 65, 128, 199, 457] {
            assert_eq!(y.rotate_left(k).rotate_right(k), y);
            assert_eq!(y.rotate_left(k).count_ones(), y.count_ones());
        }
    }

    #[test]
    fn test_assign_forms() {
        let mut x = U1280::ONE;
        x <<= 1000;
        assert_eq!(x.bit_width(), 1001);
        x >>= 999;
        assert_eq!(x, U1280::new(2));
    }
}
