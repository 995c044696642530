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

//! Differential tests against `num-bigint`, reducing every oracle result
//! modulo `2^BITS`.

use num_bigint::BigUint as Oracle;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordsmith_bigint::BigUint;

const ITERATIONS: usize = 200;

fn to_oracle<const BITS: usize, const WORDS: usize>(x: &BigUint<BITS, WORDS>) -> Oracle {
    let bytes: Vec<u8> = x.as_words().iter().flat_map(|w| w.to_le_bytes()).collect();
    Oracle::from_bytes_le(&bytes)
}

fn from_oracle<const BITS: usize, const WORDS: usize>(x: &Oracle) -> BigUint<BITS, WORDS> {
    let digits = x.to_u64_digits();
    assert!(digits.len() <= WORDS, "oracle value wider than {WORDS} words");
    let mut words = [0u64; WORDS];
    words[..digits.len()].copy_from_slice(&digits);
    BigUint::from_words_masked(words)
}

fn modulus(bits: usize) -> Oracle {
    Oracle::from(1u8) << bits
}

/// Random value with a random bit width so short and full-width values are
/// both well represented.
fn random<const BITS: usize, const WORDS: usize>(rng: &mut ChaCha8Rng) -> BigUint<BITS, WORDS> {
    let mut words = [0u64; WORDS];
    for w in words.iter_mut() {
        *w = rng.random();
    }
    let x = BigUint::<BITS, WORDS>::from_words_masked(words);
    x >> rng.random_range(0..BITS)
}

fn check_width<const BITS: usize, const WORDS: usize>(seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let m = modulus(BITS);
    let all_ones = &m - 1u8;

    for _ in 0..ITERATIONS {
        let a = random::<BITS, WORDS>(&mut rng);
        let b = random::<BITS, WORDS>(&mut rng);
        let (oa, ob) = (to_oracle(&a), to_oracle(&b));
        let k = rng.random_range(0..BITS + 8);

        assert_eq!(to_oracle(&(a & b)), &oa & &ob);
        assert_eq!(to_oracle(&(a | b)), &oa | &ob);
        assert_eq!(to_oracle(&(a ^ b)), &oa ^ &ob);
        assert_eq!(to_oracle(&!a), &all_ones ^ &oa);

        assert_eq!(to_oracle(&(a << k)), (&oa << k) % &m);
        assert_eq!(to_oracle(&(a >> k)), &oa >> k);

        let r = k % BITS;
        let rotated = ((&oa << r) | (&oa >> (BITS - r))) % &m;
        assert_eq!(to_oracle(&a.rotate_left(k)), rotated);
        assert_eq!(a.rotate_left(k).rotate_right(k), a);

        let sum = &oa + &ob;
        let (s, overflow) = a.overflowing_add(b);
        assert_eq!(to_oracle(&s), &sum % &m);
        assert_eq!(overflow, sum >= m);

        let (d, underflow) = a.overflowing_sub(b);
        assert_eq!(underflow, oa < ob);
        let expected = if oa >= ob { &oa - &ob } else { &m + &oa - &ob };
        assert_eq!(to_oracle(&d), expected);

        assert_eq!(a.cmp(&b), oa.cmp(&ob));
        assert_eq!(a.bit_width() as u64, oa.bits());
        assert_eq!(a.count_ones() as u64, oa.count_ones());

        assert_eq!(a.to_string(), oa.to_string());
        assert_eq!(format!("{a:x}"), format!("{oa:x}"));
        assert_eq!(format!("{a:b}"), format!("{oa:b}"));
        assert_eq!(from_oracle::<BITS, WORDS>(&oa), a);
    }
}

#[test]
fn test_oracle_1_bit() {
    check_width::<1, 1>(1);
}

#[test]
fn test_oracle_63_bits() {
    check_width::<63, 1>(2);
}

#[test]
fn test_oracle_64_bits() {
    check_width::<64, 1>(3);
}

#[test]
fn test_oracle_65_bits() {
    check_width::<65, 2>(4);
}

#[test]
fn test_oracle_200_bits() {
    check_width::<200, 4>(5);
}

#[test]
fn test_oracle_256_bits() {
    check_width::<256, 4>(6);
}

#[test]
fn test_oracle_1280_bits() {
    check_width::<1280, 20>(7);
}

#[test]
fn test_parse_matches_oracle() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for _ in 0..ITERATIONS {
        let x = random::<1280, 20>(&mut rng);
        let decimal = to_oracle(&x).to_str_radix(10);
        assert_eq!(decimal.parse::<BigUint<1280, 20>>(), Ok(x));
    }
}
