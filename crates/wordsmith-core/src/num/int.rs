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

//! # Primitive Integer Abstraction
//!
//! `Int` is implemented for every primitive integer type and exposes the
//! facts the rest of the crate needs to reason about a value independently of
//! its type: signedness, width, and an exact widening into `WideInt`.
//! `Word` narrows `Int` to unsigned types usable as bit storage.
//!
//! Both traits are sealed; the set of primitive integers is closed.

use num_traits::{PrimInt, Unsigned};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
}

/// An integer value of any primitive type, held exactly in sign-magnitude form.
///
/// Every `i8..=i128`, `u8..=u128`, `isize` and `usize` value fits, so two
/// values of unrelated types can be compared in this domain without the
/// promotion pitfalls of same-type casts. Zero is always non-negative.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::int::{Int, WideInt};
///
/// assert!((-1i8).widen() < 0u128.widen());
/// assert!(u128::MAX.widen() > i128::MAX.widen());
/// assert_eq!(format!("{}", i64::MIN.widen()), "-9223372036854775808");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WideInt {
    negative: bool,
    magnitude: u128,
}

impl WideInt {
    /// Creates a non-negative value.
    #[inline]
    pub const fn from_magnitude(magnitude: u128) -> Self {
        Self {
            negative: false,
            magnitude,
        }
    }

    /// Creates a negative value `-magnitude`; a zero magnitude yields zero.
    #[inline]
    pub const fn negative(magnitude: u128) -> Self {
        Self {
            negative: magnitude != 0,
            magnitude,
        }
    }

    /// Returns `true` if the value is strictly below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn magnitude(&self) -> u128 {
        self.magnitude
    }
}

impl Ord for WideInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for WideInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for WideInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

/// A primitive integer type.
///
/// # Examples
///
/// ```rust
/// # use wordsmith_core::num::int::Int;
///
/// assert!(i16::SIGNED);
/// assert_eq!(<u32 as Int>::BITS, 32);
/// assert_eq!(i8::from_wide_wrapping((-5i64).widen()), -5i8);
/// ```
pub trait Int: PrimInt + Debug + Display + Send + Sync + 'static + sealed::Sealed {
    /// Whether the type can hold negative values.
    const SIGNED: bool;
    /// Width of the type in bits.
    const BITS: u32;

    /// Converts the value into the unbounded comparison domain, exactly.
    fn widen(self) -> WideInt;

    /// Converts a `WideInt` back, keeping only the low `BITS` bits of its
    /// two's complement representation (the semantics of an `as` cast).
    fn from_wide_wrapping(value: WideInt) -> Self;
}

/// An unsigned primitive integer usable as a unit of bit storage.
pub trait Word: Int + Unsigned {}

macro_rules! impl_int_unsigned {
    ($t:ty) => {
        impl sealed::Sealed for $t {}

        impl Int for $t {
            const SIGNED: bool = false;
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn widen(self) -> WideInt {
                WideInt::from_magnitude(self as u128)
            }

            #[inline(always)]
            fn from_wide_wrapping(value: WideInt) -> Self {
                let low = value.magnitude() as $t;
                if value.is_negative() {
                    low.wrapping_neg()
                } else {
                    low
                }
            }
        }

        impl Word for $t {}
    };
}

macro_rules! impl_int_signed {
    ($t:ty) => {
        impl sealed::Sealed for $t {}

        impl Int for $t {
            const SIGNED: bool = true;
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn widen(self) -> WideInt {
                if self < 0 {
                    WideInt::negative((self as i128).unsigned_abs())
                } else {
                    WideInt::from_magnitude(self as u128)
                }
            }

            #[inline(always)]
            fn from_wide_wrapping(value: WideInt) -> Self {
                let low = value.magnitude() as $t;
                if value.is_negative() {
                    low.wrapping_neg()
                } else {
                    low
                }
            }
        }
    };
}

impl_int_unsigned!(u8);
impl_int_unsigned!(u16);
impl_int_unsigned!(u32);
impl_int_unsigned!(u64);
impl_int_unsigned!(u128);
impl_int_unsigned!(usize);

impl_int_signed!(i8);
impl_int_signed!(i16);
impl_int_signed!(i32);
impl_int_signed!(i64);
impl_int_signed!(i128);
impl_int_signed!(isize);
