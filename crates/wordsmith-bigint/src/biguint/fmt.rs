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

use super::BigUint;
use crate::word::Word;
use std::fmt::Write;

/// Largest power of ten that fits in a word, `10^19`.
const DECIMAL_CHUNK: Word = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

impl<const BITS: usize, const WORDS: usize> std::fmt::Display for BigUint<BITS, WORDS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut chunks = Vec::new();
        let mut rest = *self;
        while !rest.is_zero() {
            let (q, r) = rest.div_rem_word(DECIMAL_CHUNK);
            chunks.push(r);
            rest = q;
        }
        let mut s = String::new();
        let mut iter = chunks.iter().rev();
        match iter.next() {
            Some(head) => write!(s, "{head}")?,
            None => s.push('0'),
        }
        for chunk in iter {
            write!(s, "{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS)?;
        }
        f.pad_integral(true, "", &s)
    }
}

macro_rules! impl_power_of_two_radix {
    ($trait_name:ident, $prefix:literal, $head:literal, $tail:literal) => {
        impl<const BITS: usize, const WORDS: usize> std::fmt::$trait_name for BigUint<BITS, WORDS> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut s = String::new();
                let mut iter = self.words.iter().rev().skip_while(|&&w| w == 0);
                match iter.next() {
                    Some(head) => write!(s, $head, head)?,
                    None => s.push('0'),
                }
                for w in iter {
                    write!(s, $tail, w)?;
                }
                f.pad_integral(true, $prefix, &s)
            }
        }
    };
}

impl_power_of_two_radix!(LowerHex, "0x", "{:x}", "{:016x}");
impl_power_of_two_radix!(UpperHex, "0x", "{:X}", "{:016X}");
impl_power_of_two_radix!(Binary, "0b", "{:b}", "{:064b}");

impl<const BITS: usize, const WORDS: usize> std::fmt::Debug for BigUint<BITS, WORDS> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigUint<{}>({:#x})", BITS, self)
    }
}

#[cfg(test)]
mod tests {
    type U8 = biguint!(8);
    type U128 = biguint!(128);
    type U1280 = biguint!(1280);

    #[test]
    fn test_display_matches_u128() {
        for v in [0u128, 1, 9, 10, 10_000_000_000_000_000_000, u64::MAX as u128 + 1, u128::MAX] {
            let x = U128::from_words_masked([v as u64, (v >> 64) as u64]);
            assert_eq!(x.to_string(), v.to_string());
            assert_eq!(format!("{x:x}"), format!("{v:x}"));
            assert_eq!(format!("{x:#X}"), format!("{v:#X}"));
            assert_eq!(format!("{x:b}"), format!("{v:b}"));
        }
    }

    #[test]
    fn test_display_power_of_two() {
        // 2^640
        let expected = "4562440617622195218641171605700291324893228507248559930579192517899275167208677386505912811317371399778642309573594407310688704721375437998252661319722214188251994674360264950082874192246603776";
        assert_eq!((U1280::ONE << 640).to_string(), expected);
    }

    #[test]
    fn test_hex_pads_inner_words() {
        let x = U128::from_words_masked([0xA, 0x1]);
        assert_eq!(format!("{x:x}"), "1000000000000000a");
        assert_eq!(format!("{:#x}", U128::ZERO), "0x0");
    }

    #[test]
    fn test_width_and_fill_flags() {
        let x = U8::new(0xAB);
        assert_eq!(format!("{x:>6}"), "   171");
        assert_eq!(format!("{x:#010b}"), "0b10101011");
        assert_eq!(format!("{x:06x}"), "0000ab");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", U8::new(16)), "BigUint<8>(0x10)");
    }
}
