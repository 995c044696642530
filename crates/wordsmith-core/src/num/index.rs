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

use crate::num::int::Word;

/// Returns `size - 1 - idx`, the position of `idx` counted from the back.
///
/// # Panics
///
/// Panics if `idx >= size`.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::index::reverse_idx;
///
/// let v = [10, 20, 30];
/// let reversed: Vec<_> = (0..v.len()).map(|i| v[reverse_idx(i, v.len())]).collect();
/// assert_eq!(reversed, vec![30, 20, 10]);
/// ```
#[inline]
pub fn reverse_idx<T: Word>(idx: T, size: T) -> T {
    assert!(
        idx < size,
        "called `reverse_idx` with index {idx} for size {size}"
    );
    size - T::one() - idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_idx_bounds() {
        assert_eq!(reverse_idx(0usize, 1), 0);
        assert_eq!(reverse_idx(0u8, 255), 254);
        assert_eq!(reverse_idx(254u8, 255), 0);
        assert_eq!(reverse_idx(u64::MAX - 1, u64::MAX), 0);
    }

    #[test]
    fn test_reverse_idx_is_involution() {
        for i in 0..20u32 {
            assert_eq!(reverse_idx(reverse_idx(i, 20), 20), i);
        }
    }

    #[test]
    #[should_panic(expected = "called `reverse_idx` with index 3 for size 3")]
    fn test_reverse_idx_panics_at_size() {
        reverse_idx(3usize, 3);
    }
}
