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

//! Kronecker substitution: pack each operand into a single big integer by
//! evaluating at `2^slot_bits`, multiply the two integers, then unpack the
//! product's balanced base-`2^slot_bits` digits back into coefficients.

use malachite::Integer;
use talus_base::SmallOrBig;

fn pack(poly: &[SmallOrBig], slot_bits: u64) -> Integer {
    let mut acc = Integer::from(0);
    for c in poly.iter().rev() {
        acc = (acc << slot_bits) + c.to_integer();
    }
    acc
}

fn unpack(mut value: Integer, slot_bits: u64, n: usize) -> Vec<SmallOrBig> {
    let modulus = Integer::from(1) << slot_bits;
    let half = Integer::from(1) << (slot_bits - 1);
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut r = &value % &modulus;
        if r < 0 {
            r += &modulus;
        }
        let digit = if r >= half { &r - &modulus } else { r };
        value = (&value - &digit) / &modulus;
        out.push(SmallOrBig::from_integer(digit));
    }
    out
}

pub(crate) fn ks_mul(poly1: &[SmallOrBig], poly2: &[SmallOrBig]) -> Vec<SmallOrBig> {
    if poly1.is_empty() || poly2.is_empty() {
        return Vec::new();
    }
    let (len1, len2) = (poly1.len(), poly2.len());
    let bits1 = poly1.iter().map(|c| c.bit_length()).max().unwrap_or(1).max(1);
    let bits2 = poly2.iter().map(|c| c.bit_length()).max().unwrap_or(1).max(1);
    let min_len = len1.min(len2) as u64;
    let carry_bits = 64 - min_len.max(1).leading_zeros() as u64;
    let slot_bits = bits1 + bits2 + carry_bits + 2;

    let a = pack(poly1, slot_bits);
    let b = pack(poly2, slot_bits);
    let product = a * b;
    unpack(product, slot_bits, len1 + len2 - 1)
}

#[cfg(test)]
mod tests {
    use super::super::mul_classical::classical_mul;
    use super::*;
    use malachite::base::num::arithmetic::traits::Pow;

    #[test]
    fn matches_classical_multiplication() {
        let a: Vec<SmallOrBig> = vec![1i64, -2, 3, 7].into_iter().map(SmallOrBig::from).collect();
        let b: Vec<SmallOrBig> = vec![-5i64, 0, 2].into_iter().map(SmallOrBig::from).collect();
        assert_eq!(ks_mul(&a, &b), classical_mul(&a, &b));
    }

    #[test]
    fn handles_large_coefficients() {
        let big = SmallOrBig::from(Integer::from(10).pow(40));
        let a = vec![big.clone(), SmallOrBig::from(1i64)];
        let b = vec![big.clone(), SmallOrBig::from(-1i64)];
        assert_eq!(ks_mul(&a, &b), classical_mul(&a, &b));
    }
}
