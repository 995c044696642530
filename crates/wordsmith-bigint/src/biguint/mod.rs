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

//! # Fixed-Width Unsigned Integers
//!
//! `BigUint<BITS, WORDS>` holds an unsigned integer of exactly `BITS` bits in
//! `WORDS` little-endian 64-bit words (least significant word first). `WORDS`
//! is always `words_for(BITS)`; the `biguint!` type macro derives it so
//! callers only name the bit width.
//!
//! ## Invariant
//!
//! The bits of the most significant word at positions `>= BITS` (the excess
//! bits) are zero after every public operation. Equality and ordering compare
//! words directly and shifts never leak garbage into the nominal range
//! because of it. Every constructor and every operation that can set those
//! bits masks them with `EXCESS_MASK`.
//!
//! ## Policies
//!
//! - Shifting by `k >= BITS` with `<<`/`>>` yields zero; `checked_shl`,
//!   `checked_shr` and `power_of_two` report `ShiftOverflow` instead.
//! - Bit indices are validated against `BITS`, not against the storage
//!   width `WORDS * 64`.
//!
//! ## Submodules
//!
//! - `bitwise`: `&`, `|`, `^`, `!` and their assigning forms.
//! - `shift`: Shifts and rotations across word boundaries.
//! - `cmp`: Total ordering, most significant word first.
//! - `arith`: Addition and subtraction with carry/borrow propagation.
//! - `fmt`: Decimal, hexadecimal and binary formatting.
//! - `parse`: `FromStr` for decimal, `0x` and `0b` input.

use crate::error::{NarrowingError, OutOfRangeBitIndex};
use crate::word::{WORD_SIZE, Word, excess_mask, words_for};
use wordsmith_core::bits;
use wordsmith_core::num::int::Int;

mod arith;
mod bitwise;
mod cmp;
mod fmt;
mod parse;
#[cfg(feature = "serde")]
mod serde_impl;
mod shift;

/// An unsigned integer of exactly `BITS` bits stored in `WORDS` words.
///
/// Prefer naming the type through [`biguint!`](macro@crate::biguint), which fills
/// in `WORDS`. A mismatched `WORDS` is rejected at compile time as soon as
/// any value of the type is constructed.
///
/// # Examples
///
/// ```rust
/// use wordsmith_bigint::biguint;
///
/// type U1280 = biguint!(1280);
///
/// let x = U1280::ONE << 640;
/// assert_eq!(x.bit_width(), 641);
/// assert_eq!(x.count_ones(), 1);
/// assert!(x.get_bit(640));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BigUint<const BITS: usize, const WORDS: usize> {
    words: [Word; WORDS],
}

impl<const BITS: usize, const WORDS: usize> BigUint<BITS, WORDS> {
    /// Nominal width in bits.
    pub const BITS: usize = BITS;
    /// Number of storage words.
    pub const WORDS: usize = WORDS;
    /// Width of one storage word in bits.
    pub const WORD_SIZE: usize = WORD_SIZE;
    /// Bits of the most significant word that belong to the value.
    pub const EXCESS_MASK: Word = excess_mask(BITS);

    const LAYOUT: () = assert!(
        BITS > 0 && WORDS == words_for(BITS),
        "BigUint requires BITS > 0 and WORDS == words_for(BITS)"
    );

    /// The value `0`.
    pub const ZERO: Self = {
        let () = Self::LAYOUT;
        Self { words: [0; WORDS] }
    };

    /// The value `1`.
    pub const ONE: Self = Self::from_word_masked(1);

    /// The value `2^BITS - 1`.
    pub const MAX: Self = Self::from_words_masked([Word::MAX; WORDS]);

    /// Creates a value from a single word, zero-extended.
    ///
    /// # Panics
    ///
    /// Panics if `value` does not fit in `BITS` bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// let x = <biguint!(200)>::new(42);
    /// assert_eq!(x.as_words(), &[42, 0, 0, 0]);
    /// ```
    #[inline]
    pub fn new(value: Word) -> Self {
        match Self::try_new(value) {
            Ok(v) => v,
            Err(e) => panic!("called `BigUint::new` with an unrepresentable value: {e}"),
        }
    }

    /// Creates a value from a single word, zero-extended, or returns a
    /// `NarrowingError` if `value` does not fit in `BITS` bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// assert!(<biguint!(8)>::try_new(255).is_ok());
    /// assert!(<biguint!(8)>::try_new(256).is_err());
    /// ```
    #[inline]
    pub fn try_new(value: Word) -> Result<Self, NarrowingError> {
        let masked = Self::from_word_masked(value);
        if masked.words[0] == value {
            Ok(masked)
        } else {
            Err(NarrowingError::new(value.widen(), BITS, false))
        }
    }

    /// Creates a value from a single word, discarding the bits at
    /// positions `>= BITS`.
    #[inline]
    pub const fn from_word_masked(value: Word) -> Self {
        let mut words = [0; WORDS];
        words[0] = value;
        Self::from_words_masked(words)
    }

    /// Creates a value from little-endian words, discarding the excess bits
    /// of the most significant word.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// let x = <biguint!(72)>::from_words_masked([u64::MAX, u64::MAX]);
    /// assert_eq!(x, <biguint!(72)>::MAX);
    /// assert_eq!(x.as_words(), &[u64::MAX, 0xFF]);
    /// ```
    #[inline]
    pub const fn from_words_masked(mut words: [Word; WORDS]) -> Self {
        let () = Self::LAYOUT;
        words[WORDS - 1] &= Self::EXCESS_MASK;
        Self { words }
    }

    /// Returns the little-endian words.
    #[inline]
    pub const fn as_words(&self) -> &[Word; WORDS] {
        &self.words
    }

    /// Consumes the value and returns its little-endian words.
    #[inline]
    pub const fn into_words(self) -> [Word; WORDS] {
        self.words
    }

    /// Returns word `index`, counted from the least significant word.
    ///
    /// # Panics
    ///
    /// Panics if `index >= WORDS`.
    #[inline]
    pub const fn word(&self, index: usize) -> Word {
        self.words[index]
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    #[inline(always)]
    fn locate(index: usize) -> Result<(usize, u32), OutOfRangeBitIndex> {
        if index < BITS {
            Ok((index / WORD_SIZE, (index % WORD_SIZE) as u32))
        } else {
            Err(OutOfRangeBitIndex::new(index, BITS))
        }
    }

    /// Returns the state of bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= BITS`.
    #[inline]
    pub fn get_bit(&self, index: usize) -> bool {
        match self.try_get_bit(index) {
            Ok(state) => state,
            Err(e) => panic!("called `BigUint::get_bit` with an invalid index: {e}"),
        }
    }

    /// Returns the state of bit `index`, or an error if `index >= BITS`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// // 100 bits occupy two words, but only indices below 100 are valid.
    /// let x = <biguint!(100)>::MAX;
    /// assert_eq!(x.try_get_bit(99), Ok(true));
    /// assert!(x.try_get_bit(100).is_err());
    /// ```
    #[inline]
    pub fn try_get_bit(&self, index: usize) -> Result<bool, OutOfRangeBitIndex> {
        let (word, bit) = Self::locate(index)?;
        Ok(bits::get_bit(self.words[word], bit))
    }

    /// Sets bit `index` to `state`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= BITS`.
    #[inline]
    pub fn set_bit(&mut self, index: usize, state: bool) {
        if let Err(e) = self.try_set_bit(index, state) {
            panic!("called `BigUint::set_bit` with an invalid index: {e}");
        }
    }

    /// Sets bit `index` to `state`, or returns an error (leaving the value
    /// untouched) if `index >= BITS`.
    #[inline]
    pub fn try_set_bit(&mut self, index: usize, state: bool) -> Result<(), OutOfRangeBitIndex> {
        let (word, bit) = Self::locate(index)?;
        bits::set_bit(&mut self.words[word], bit, state);
        Ok(())
    }

    /// Returns a copy of the value with bit `index` set to `state`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= BITS`.
    #[inline]
    pub fn with_bit(mut self, index: usize, state: bool) -> Self {
        self.set_bit(index, state);
        self
    }

    /// Number of bits required to represent the value; `0` for zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use wordsmith_bigint::biguint;
    ///
    /// assert_eq!(<biguint!(256)>::ZERO.bit_width(), 0);
    /// assert_eq!(<biguint!(256)>::new(5).bit_width(), 3);
    /// assert_eq!(<biguint!(256)>::MAX.bit_width(), 256);
    /// ```
    #[inline]
    pub fn bit_width(&self) -> usize {
        self.words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| i * WORD_SIZE + bits::bit_width(self.words[i]) as usize)
    }

    /// Number of set bits.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of zero bits above the most significant set bit, within `BITS`.
    #[inline]
    pub fn leading_zeros(&self) -> usize {
        BITS - self.bit_width()
    }

    /// Number of zero bits below the least significant set bit; `BITS` for zero.
    #[inline]
    pub fn trailing_zeros(&self) -> usize {
        self.words
            .iter()
            .position(|&w| w != 0)
            .map_or(BITS, |i| {
                i * WORD_SIZE + self.words[i].trailing_zeros() as usize
            })
    }
}

impl<const BITS: usize, const WORDS: usize> Default for BigUint<BITS, WORDS> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const BITS: usize, const WORDS: usize> num_traits::Bounded for BigUint<BITS, WORDS> {
    #[inline]
    fn min_value() -> Self {
        Self::ZERO
    }

    #[inline]
    fn max_value() -> Self {
        Self::MAX
    }
}

macro_rules! impl_try_from_word {
    ($t:ty) => {
        impl<const BITS: usize, const WORDS: usize> TryFrom<$t> for BigUint<BITS, WORDS> {
            type Error = NarrowingError;

            #[inline]
            fn try_from(value: $t) -> Result<Self, Self::Error> {
                Self::try_new(Word::from(value))
            }
        }
    };
}

impl_try_from_word!(u8);
impl_try_from_word!(u16);
impl_try_from_word!(u32);
impl_try_from_word!(u64);
