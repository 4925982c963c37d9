// This file is part of talus.
//
// talus is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published
// by the Free Software Foundation, either version 3 of the License,
// or (at your option) any later version.
//
// talus is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with talus. If not, see <https://www.gnu.org/licenses/>.

//! Multi-modulus CRT multiplication: the top tier of the multiplication
//! ladder for polynomials whose coefficients and degree are both large
//! enough that a single Kronecker packing would be wasteful. Each operand
//! is reduced mod a handful of word-size primes via [`talus_zn`], the
//! convolution is computed mod each prime, and the results are recombined
//! with the [`talus_zn`] CRT step.

use malachite::Integer;
use talus_base::SmallOrBig;
use talus_zn::NmodCtx;

/// Primes large enough, and few enough, to cover the coefficient ranges
/// this tier is reached for; chosen from well-known word-size primes
/// (two Mersenne primes and the largest primes below 2^32 and 2^64).
const CRT_PRIMES: [u64; 4] = [2_147_483_647, 4_294_967_291, 2_305_843_009_213_693_951, 18_446_744_073_709_551_557];

#[inline]
fn mulmod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}

fn convolve_mod(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u64; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            let idx = i + j;
            out[idx] = (out[idx] + mulmod(ai, bj, p)) % p;
        }
    }
    out
}

pub(crate) fn modular_mul(poly1: &[SmallOrBig], poly2: &[SmallOrBig]) -> Vec<SmallOrBig> {
    if poly1.is_empty() || poly2.is_empty() {
        return Vec::new();
    }
    let (len1, len2) = (poly1.len(), poly2.len());
    let bits1 = poly1.iter().map(|c| c.bit_length()).max().unwrap_or(1).max(1);
    let bits2 = poly2.iter().map(|c| c.bit_length()).max().unwrap_or(1).max(1);
    let min_len = len1.min(len2) as u64;
    let carry_bits = 64 - min_len.max(1).leading_zeros() as u64;
    let needed_bits = bits1 + bits2 + carry_bits + 2;

    let mut chosen = Vec::new();
    let mut acc_bits = 0u64;
    for &p in CRT_PRIMES.iter() {
        chosen.push(p);
        acc_bits += 63 - p.leading_zeros() as u64;
        if acc_bits > needed_bits + 1 {
            break;
        }
    }

    let out_len = len1 + len2 - 1;
    let mut acc: Vec<Option<(SmallOrBig, SmallOrBig)>> = vec![None; out_len];
    for &p in &chosen {
        let ctx = NmodCtx::init(p).expect("CRT_PRIMES entries are nonzero");
        let a: Vec<u64> = poly1.iter().map(|c| ctx.reduce(c).value()).collect();
        let b: Vec<u64> = poly2.iter().map(|c| ctx.reduce(c).value()).collect();
        let prod = convolve_mod(&a, &b, p);
        let p_small = SmallOrBig::from_integer(Integer::from(p));
        for i in 0..out_len {
            let r2 = SmallOrBig::from_integer(Integer::from(prod[i]));
            acc[i] = Some(match acc[i].take() {
                None => (r2, p_small.clone()),
                Some((r1, m1)) => {
                    let combined = SmallOrBig::crt(&r1, &m1, &r2, &p_small);
                    (combined, m1.mul(&p_small))
                }
            });
        }
    }

    acc.into_iter().map(|o| o.expect("every coefficient reduced at least once").0).collect()
}

#[cfg(test)]
mod tests {
    use super::super::mul_classical::classical_mul;
    use super::*;
    use malachite::base::num::arithmetic::traits::Pow;

    #[test]
    fn matches_classical_multiplication() {
        let a: Vec<SmallOrBig> = vec![1i64, -2, 3, 7, 5].into_iter().map(SmallOrBig::from).collect();
        let b: Vec<SmallOrBig> = vec![-5i64, 0, 2, 9].into_iter().map(SmallOrBig::from).collect();
        assert_eq!(modular_mul(&a, &b), classical_mul(&a, &b));
    }

    #[test]
    fn handles_coefficients_wider_than_one_word() {
        let big = SmallOrBig::from(Integer::from(10).pow(25));
        let a = vec![big.clone(), SmallOrBig::from(-3i64)];
        let b = vec![SmallOrBig::from(2i64), big];
        assert_eq!(modular_mul(&a, &b), classical_mul(&a, &b));
    }
}
