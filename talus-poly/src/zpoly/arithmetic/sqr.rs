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
use super::mul_karatsuba::karatsuba_mul;
use super::mul_ks::ks_mul;
use crate::ZPoly;
use talus_base::SmallOrBig;

pub(crate) const TINY_SQR_THRESHOLD: usize = 8;

pub(crate) fn tiny_sqr(poly: &[SmallOrBig]) -> Vec<SmallOrBig> {
    let n = poly.len();
    if n == 0 {
        return Vec::new();
    }
    let mut out = vec![SmallOrBig::zero(); 2 * n - 1];
    for i in 0..n {
        out[2 * i] = out[2 * i].addmul(&poly[i], &poly[i]);
        for j in (i + 1)..n {
            let cross = poly[i].mul(&poly[j]).mul_2exp(1);
            out[i + j] = out[i + j].add(&cross);
        }
    }
    out
}

pub(crate) fn auto_sqr(poly: &[SmallOrBig]) -> Vec<SmallOrBig> {
    let n = poly.len();
    if n == 0 {
        return Vec::new();
    }
    if n <= TINY_SQR_THRESHOLD {
        tiny_sqr(poly)
    } else if n < 16 {
        classical_mul(poly, poly)
    } else {
        let bits = poly.iter().map(|c| c.bit_length()).max().unwrap_or(0);
        if bits > 1000 && n < 64 {
            karatsuba_mul(poly, poly)
        } else {
            ks_mul(poly, poly)
        }
    }
}

impl ZPoly {
    /// # Examples
    ///
    /// ```
    /// use talus_poly::ZPoly;
    ///
    /// let a = ZPoly::from(vec![1i64, 1]); // 1 + x
    /// assert_eq!(a.sqr(), ZPoly::from(vec![1i64, 2, 1]));
    /// ```
    pub fn sqr(&self) -> ZPoly {
        if self.is_zero() {
            return ZPoly::zero();
        }
        ZPoly::from_raw(auto_sqr(self.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_self_multiplication() {
        let a = ZPoly::from(vec![3i64, -1, 2, 5, 7, 11, -4]);
        assert_eq!(a.sqr(), a.mul(&a));
    }

    #[test]
    fn zero_squared_is_zero() {
        assert!(ZPoly::zero().sqr().is_zero());
    }

    #[test]
    fn larger_input_matches_generic_mul() {
        let a = ZPoly::from((1..=40).map(|i| i as i64 - 20).collect::<Vec<_>>());
        assert_eq!(a.sqr(), a.mul(&a));
    }
}
