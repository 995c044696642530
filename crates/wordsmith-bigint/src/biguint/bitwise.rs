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
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

macro_rules! impl_bitwise_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<const BITS: usize, const WORDS: usize> $assign_trait for BigUint<BITS, WORDS> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                for (l, r) in self.words.iter_mut().zip(rhs.words) {
                    *l = *l $op r;
                }
            }
        }

        impl<const BITS: usize, const WORDS: usize> $trait_name for BigUint<BITS, WORDS> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: Self) -> Self {
                self.$assign_method(rhs);
                self
            }
        }
    };
}

// Both operands have clear excess bits, so these results do too.
impl_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<const BITS: usize, const WORDS: usize> Not for BigUint<BITS, WORDS> {
    type Output = Self;

    #[inline]
    fn not(mut self) -> Self {
        for w in self.words.iter_mut() {
            *w = !*w;
        }
        Self::from_words_masked(self.words)
    }
}
