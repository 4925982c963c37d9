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

use super::mul_classical::classical_mul;
use super::mul_karatsuba::{KARATSUBA_THRESHOLD, karatsuba_mul};
use super::mul_ks::ks_mul;
use super::mul_modular::modular_mul;
use crate::ZPoly;
use std::ops::Mul;
use talus_base::SmallOrBig;

/// Below this combined bit-budget, Kronecker substitution beats spinning
/// up multi-modulus CRT.
const KS_BIT_BUDGET: u64 = 4000;
/// Below this degree, Kronecker substitution still wins even for wide
/// coefficients.
const KS_LENGTH_CEILING: usize = 50;

fn auto_mul(poly1: &[SmallOrBig], poly2: &[SmallOrBig]) -> Vec<SmallOrBig> {
    let (len1, len2) = (poly1.len(), poly2.len());
    if len1 == 0 || len2 == 0 {
        return Vec::new();
    }
    if len2 == 1 {
        return poly1.iter().map(|c| c.mul(&poly2[0])).collect();
    }
    if len1 == 1 {
        return poly2.iter().map(|c| c.mul(&poly1[0])).collect();
    }
    if len1 == len2 && poly1 == poly2 {
        return super::sqr::auto_sqr(poly1);
    }

    let bits1 = poly1.iter().map(|c| c.bit_length()).max().unwrap_or(0);
    let bits2 = poly2.iter().map(|c| c.bit_length()).max().unwrap_or(0);
    let total_bits = bits1 + bits2;
    let max_len = len1.max(len2);
    let min_len = len1.min(len2);

    if max_len < 7 {
        classical_mul(poly1, poly2)
    } else if min_len < KARATSUBA_THRESHOLD && (bits1 > 1000 || bits2 > 1000) {
        karatsuba_mul(poly1, poly2)
    } else if total_bits <= KS_BIT_BUDGET || max_len < KS_LENGTH_CEILING {
        ks_mul(poly1, poly2)
    } else {
        modular_mul(poly1, poly2)
    }
}

impl ZPoly {
    pub fn mul(&self, other: &ZPoly) -> ZPoly {
        if self.is_zero() || other.is_zero() {
            return ZPoly::zero();
        }
        ZPoly::from_raw(auto_mul(self.as_slice(), other.as_slice()))
    }

    /// Produce only the coefficients of degree `< n`, used heavily by
    /// series operations.
    pub fn mul_low(&self, other: &ZPoly, n: usize) -> ZPoly {
        let full = self.mul(other);
        if full.length() <= n {
            return full;
        }
        ZPoly::from_raw(full.as_slice()[..n].to_vec())
    }

    pub fn scalar_mul(&self, c: &SmallOrBig) -> ZPoly {
        if c.is_zero() {
            return ZPoly::zero();
        }
        ZPoly::from_raw(self.as_slice().iter().map(|x| x.mul(c)).collect())
    }
}

/// # Examples
///
/// ```
/// use talus_poly::ZPoly;
///
/// let a = ZPoly::from(vec![1i64, 1, 1]); // 1 + x + x^2
/// let b = ZPoly::from(vec![1i64, -1]); // 1 - x
/// assert_eq!(a.mul(&b), ZPoly::from(vec![1i64, 0, 0, -1]));
/// ```
impl Mul<&ZPoly> for &ZPoly {
    type Output = ZPoly;
    fn mul(self, rhs: &ZPoly) -> ZPoly {
        ZPoly::mul(self, rhs)
    }
}

impl Mul for ZPoly {
    type Output = ZPoly;
    fn mul(self, rhs: ZPoly) -> ZPoly {
        ZPoly::mul(&self, &rhs)
    }
}

impl Mul<&ZPoly> for ZPoly {
    type Output = ZPoly;
    fn mul(self, rhs: &ZPoly) -> ZPoly {
        ZPoly::mul(&self, rhs)
    }
}

impl Mul<ZPoly> for &ZPoly {
    type Output = ZPoly;
    fn mul(self, rhs: ZPoly) -> ZPoly {
        ZPoly::mul(self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_one_minus_x_cubed() {
        let a = ZPoly::from(vec![1i64, 1, 1]);
        let b = ZPoly::from(vec![1i64, -1]);
        assert_eq!(a.mul(&b), ZPoly::from(vec![1i64, 0, 0, -1]));
    }

    #[test]
    fn mul_by_zero_is_zero() {
        let a = ZPoly::from(vec![1i64, 2, 3]);
        assert!(a.mul(&ZPoly::zero()).is_zero());
    }

    #[test]
    fn mul_low_truncates_high_terms() {
        let a = ZPoly::from(vec![1i64, 1]); // 1 + x
        let b = ZPoly::from(vec![1i64, 1, 1]); // 1 + x + x^2
        let full = a.clone().mul(&b); // 1 + 2x + 2x^2 + x^3
        let low = a.mul_low(&b, 2);
        assert_eq!(low, ZPoly::from(vec![1i64, 2]));
        assert_eq!(full.length(), 4);
    }

    #[test]
    fn large_multiplication_matches_classical() {
        let a = ZPoly::from((1..=80).map(|i| i as i64).collect::<Vec<_>>());
        let b = ZPoly::from((1..=80).rev().map(|i| i as i64).collect::<Vec<_>>());
        let via_auto = a.clone().mul(&b);
        let via_classical = ZPoly::from_raw(classical_mul(a.as_slice(), b.as_slice()));
        assert_eq!(via_auto, via_classical);
    }
}
