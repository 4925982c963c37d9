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

//! Karatsuba multiplication, for moderate-length polynomials with
//! large coefficients.

use super::mul_classical::classical_mul;
use talus_base::SmallOrBig;

pub(crate) const KARATSUBA_THRESHOLD: usize = 8;

fn add_vecs(a: &[SmallOrBig], b: &[SmallOrBig]) -> Vec<SmallOrBig> {
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| {
            let x = a.get(i).cloned().unwrap_or_else(SmallOrBig::zero);
            let y = b.get(i).cloned().unwrap_or_else(SmallOrBig::zero);
            x.add(&y)
        })
        .collect()
}

fn sub_vecs(a: &[SmallOrBig], b: &[SmallOrBig]) -> Vec<SmallOrBig> {
    let n = a.len().max(b.len());
    (0..n)
        .map(|i| {
            let x = a.get(i).cloned().unwrap_or_else(SmallOrBig::zero);
            let y = b.get(i).cloned().unwrap_or_else(SmallOrBig::zero);
            x.sub(&y)
        })
        .collect()
}

fn add_at_offset(dst: &mut Vec<SmallOrBig>, offset: usize, src: &[SmallOrBig]) {
    if dst.len() < offset + src.len() {
        dst.resize(offset + src.len(), SmallOrBig::zero());
    }
    for (i, v) in src.iter().enumerate() {
        dst[offset + i] = dst[offset + i].add(v);
    }
}

pub(crate) fn karatsuba_mul(poly1: &[SmallOrBig], poly2: &[SmallOrBig]) -> Vec<SmallOrBig> {
    let (len1, len2) = (poly1.len(), poly2.len());
    if len1 == 0 || len2 == 0 {
        return Vec::new();
    }
    if len1 < KARATSUBA_THRESHOLD
        || len2 < KARATSUBA_THRESHOLD
        || len1 < len2 / 2
        || len2 < len1 / 2
    {
        return classical_mul(poly1, poly2);
    }

    let split = len1.max(len2) / 2;
    let (a_lo, a_hi) = split_at(poly1, split);
    let (b_lo, b_hi) = split_at(poly2, split);

    let z0 = karatsuba_mul(&a_lo, &b_lo);
    let z2 = karatsuba_mul(&a_hi, &b_hi);
    let a_sum = add_vecs(&a_lo, &a_hi);
    let b_sum = add_vecs(&b_lo, &b_hi);
    let z1_full = karatsuba_mul(&a_sum, &b_sum);
    let mut z1 = sub_vecs(&z1_full, &z0);
    z1 = sub_vecs(&z1, &z2);

    let mut result = z0;
    add_at_offset(&mut result, split, &z1);
    add_at_offset(&mut result, 2 * split, &z2);
    result
}

fn split_at(poly: &[SmallOrBig], split: usize) -> (Vec<SmallOrBig>, Vec<SmallOrBig>) {
    if poly.len() <= split {
        (poly.to_vec(), Vec::new())
    } else {
        (poly[..split].to_vec(), poly[split..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_classical_on_larger_inputs() {
        let a: Vec<SmallOrBig> = (1..=20).map(SmallOrBig::from).collect();
        let b: Vec<SmallOrBig> = (1..=20).map(|x: i64| SmallOrBig::from(-x)).collect();
        assert_eq!(karatsuba_mul(&a, &b), classical_mul(&a, &b));
    }

    #[test]
    fn matches_classical_on_unequal_lengths() {
        let a: Vec<SmallOrBig> = (1..=30).map(SmallOrBig::from).collect();
        let b: Vec<SmallOrBig> = vec![SmallOrBig::from(3i64), SmallOrBig::from(-2i64)];
        assert_eq!(karatsuba_mul(&a, &b), classical_mul(&a, &b));
    }
}
