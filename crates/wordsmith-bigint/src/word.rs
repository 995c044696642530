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

//! Storage granule of multi-word integers.

/// The native unsigned integer every `BigUint` is stored in.
pub type Word = u64;

/// Width of a [`Word`] in bits.
pub const WORD_SIZE: usize = Word::BITS as usize;

/// Number of words needed to hold `bits` bits, `ceil(bits / WORD_SIZE)`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_bigint::word::words_for;
///
/// assert_eq!(words_for(1), 1);
/// assert_eq!(words_for(64), 1);
/// assert_eq!(words_for(65), 2);
/// assert_eq!(words_for(1280), 20);
/// ```
#[inline]
pub const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_SIZE)
}

/// Mask of the bits of the most significant word that lie inside a
/// `bits`-wide value. All other bits of that word are excess bits.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_bigint::word::excess_mask;
///
/// assert_eq!(excess_mask(8), 0xFF);
/// assert_eq!(excess_mask(64), u64::MAX);
/// assert_eq!(excess_mask(200), 0xFF);
/// ```
#[inline]
pub const fn excess_mask(bits: usize) -> Word {
    match bits % WORD_SIZE {
        0 => Word::MAX,
        r => ((1 as Word) << r) - 1,
    }
}
