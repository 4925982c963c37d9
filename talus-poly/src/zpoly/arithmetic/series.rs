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

//! Power series operations truncated modulo `x^n`: a basecase reciprocal
//! switching to Newton iteration above a cutoff, and series division
//! built on top of it.

use crate::ZPoly;
use talus_base::{SmallOrBig, TalusError, TalusResult};

/// Below this truncation length, `inv_series` computes coefficients one
/// at a time rather than doubling via Newton's method.
const INV_SERIES_NEWTON_CUTOFF: usize = 24;

fn basecase_inv_series(f: &[SmallOrBig], n: usize) -> TalusResult<Vec<SmallOrBig>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let f0 = f.first().cloned().unwrap_or_else(SmallOrBig::zero);
    if !f0.is_one() && !(f0.clone().neg()).is_one() {
        return Err(TalusError::ConstantTermNotInvertible);
    }
    let mut g = vec![SmallOrBig::zero(); n];
    g[0] = f0.clone(); // +-1 is its own inverse
    for k in 1..n {
        // g_k = -f0^{-1} * sum_{i=1}^{k} f_i * g_{k-i}
        let mut acc = SmallOrBig::zero();
        for i in 1..=k {
            let fi = f.get(i).cloned().unwrap_or_else(SmallOrBig::zero);
            if fi.is_zero() {
                continue;
            }
            acc = acc.addmul(&fi, &g[k - i]);
        }
        g[k] = acc.neg().div_exact(&f0)?;
    }
    Ok(g)
}

fn newton_inv_series(f: &[SmallOrBig], n: usize) -> TalusResult<Vec<SmallOrBig>> {
    if n <= INV_SERIES_NEWTON_CUTOFF {
        return basecase_inv_series(f, n);
    }
    let half = n.div_ceil(2);
    let g_half = newton_inv_series(f, half)?;
    // g <- g - g*(f*g - 1) mod x^n
    let g_poly = ZPoly::from_raw(g_half);
    let f_poly = ZPoly::from_raw(f[..f.len().min(n)].to_vec());
    let mut fg_minus_one = f_poly.mul_low(&g_poly, n);
    fg_minus_one.set_coeff(0, fg_minus_one.coeff(0).sub(&SmallOrBig::one()));
    let correction = g_poly.mul_low(&fg_minus_one, n);
    let result = g_poly.sub(&correction);
    let mut coeffs = result.as_slice().to_vec();
    coeffs.resize(n, SmallOrBig::zero());
    Ok(coeffs)
}

impl ZPoly {
    /// Power series reciprocal truncated mod `x^n`; requires the
    /// constant term to be `+-1` since this ring has no other units.
    pub fn inv_series_newton(&self, n: usize) -> TalusResult<ZPoly> {
        if n == 0 {
            return Ok(ZPoly::zero());
        }
        if self.is_zero() {
            return Err(TalusError::ConstantTermNotInvertible);
        }
        let coeffs = newton_inv_series(self.as_slice(), n)?;
        Ok(ZPoly::from_raw(coeffs))
    }

    /// `self / other` truncated mod `x^n`, via `self * inv_series(other, n)`.
    pub fn div_series(&self, other: &ZPoly, n: usize) -> TalusResult<ZPoly> {
        if n == 0 {
            return Ok(ZPoly::zero());
        }
        let inv = other.inv_series_newton(n)?;
        Ok(self.mul_low(&inv, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inv_series_matches_scenario_four() {
        // inv_series(1 - x, 5) = 1 + x + x^2 + x^3 + x^4
        let f = ZPoly::from(vec![1i64, -1]);
        let inv = f.inv_series_newton(5).unwrap();
        assert_eq!(inv, ZPoly::from(vec![1i64, 1, 1, 1, 1]));
    }

    #[test]
    fn inv_series_round_trips() {
        let f = ZPoly::from(vec![1i64, 3, 5, 7]);
        let n = 12;
        let inv = f.inv_series_newton(n).unwrap();
        let prod = f.mul_low(&inv, n);
        let mut expected = vec![SmallOrBig::zero(); n];
        expected[0] = SmallOrBig::one();
        assert_eq!(prod, ZPoly::from_raw(expected));
    }

    #[test]
    fn inv_series_rejects_non_unit_constant() {
        let f = ZPoly::from(vec![2i64, 1]);
        assert_eq!(f.inv_series_newton(3), Err(TalusError::ConstantTermNotInvertible));
    }

    #[test]
    fn div_series_matches_mul_by_inverse() {
        let a = ZPoly::from(vec![1i64, 2, 3]);
        let b = ZPoly::from(vec![1i64, -1]);
        let n = 8;
        let direct = a.div_series(&b, n).unwrap();
        let via_inv = a.mul_low(&b.inv_series_newton(n).unwrap(), n);
        assert_eq!(direct, via_inv);
    }
}
