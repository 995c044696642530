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

//! Addition and subtraction with carry and borrow propagation.
//!
//! Results are computed modulo `2^BITS`; the overflow flag is raised when the
//! exact result leaves `[0, 2^BITS)`, whether the carry escaped the top word
//! or landed in its excess bits.

use super::BigUint;
use crate::word::Word;

impl<const BITS: usize, const WORDS: usize> BigUint<BITS, WORDS> {
    /// Returns `(self + rhs) mod 2^BITS` and whether the addition overflowed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// type U72 = biguint!(72);
    ///
    /// assert_eq!(U72::MAX.overflowing_add(U72::ONE), (U72::ZERO, true));
    /// assert_eq!(U72::new(u64::MAX).overflowing_add(U72::ONE), (U72::ONE << 64, false));
    /// ```
    #[inline]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut words: [Word; WORDS] = [0; WORDS];
        let mut carry = false;
        for (i, out) in words.iter_mut().enumerate() {
            let (sum, c1) = self.words[i].overflowing_add(rhs.words[i]);
            let (sum, c2) = sum.overflowing_add(Word::from(carry));
            *out = sum;
            carry = c1 || c2;
        }
        let spilled = words[WORDS - 1] & !Self::EXCESS_MASK != 0;
        (Self::from_words_masked(words), carry || spilled)
    }

    /// Returns `(self - rhs) mod 2^BITS` and whether the subtraction
    /// underflowed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// type U72 = biguint!(72);
    ///
    /// assert_eq!(U72::ZERO.overflowing_sub(U72::ONE), (U72::MAX, true));
    /// assert_eq!((U72::ONE << 64).overflowing_sub(U72::ONE), (U72::new(u64::MAX), false));
    /// ```
    #[inline]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut words: [Word; WORDS] = [0; WORDS];
        let mut borrow = false;
        for (i, out) in words.iter_mut().enumerate() {
            let (diff, b1) = self.words[i].overflowing_sub(rhs.words[i]);
            let (diff, b2) = diff.overflowing_sub(Word::from(borrow));
            *out = diff;
            borrow = b1 || b2;
        }
        (Self::from_words_masked(words), borrow)
    }

    /// Returns `(self + rhs) mod 2^BITS`.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Returns `(self - rhs) mod 2^BITS`.
    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Returns `self + rhs`, or `None` if the sum does not fit in `BITS` bits.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Returns `self - rhs`, or `None` if `rhs > self`.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Returns `self + rhs` clamped to `MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// type U300 = biguint!(300);
    ///
    /// assert_eq!(U300::MAX.saturating_add(U300::ONE), U300::MAX);
    /// assert_eq!(U300::ZERO.saturating_sub(U300::ONE), U300::ZERO);
    /// ```
    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        self.checked_add(rhs).unwrap_or(Self::MAX)
    }

    /// Returns `self - rhs` clamped to `ZERO`.
    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs).unwrap_or(Self::ZERO)
    }

    /// Computes `self * factor + addend` for single-word operands, returning
    /// the result modulo `2^BITS` and whether it overflowed.
    pub(super) fn overflowing_mul_add_word(self, factor: Word, addend: Word) -> (Self, bool) {
        let mut words: [Word; WORDS] = [0; WORDS];
        let mut carry = addend as u128;
        for (w, out) in self.words.iter().zip(words.iter_mut()) {
            let acc = (*w as u128) * (factor as u128) + carry;
            *out = acc as Word;
            carry = acc >> Word::BITS;
        }
        let spilled = words[WORDS - 1] & !Self::EXCESS_MASK != 0;
        (Self::from_words_masked(words), carry != 0 || spilled)
    }

    /// Divides by a single non-zero word, returning quotient and remainder.
    pub(super) fn div_rem_word(self, divisor: Word) -> (Self, Word) {
        debug_assert!(divisor != 0, "called `div_rem_word` with a zero divisor");
        let mut words = self.words;
        let mut rem: u128 = 0;
        for w in words.iter_mut().rev() {
            let acc = (rem << Word::BITS) | *w as u128;
            *w = (acc / divisor as u128) as Word;
            rem = acc % divisor as u128;
        }
        (Self { words }, rem as Word)
    }
}
