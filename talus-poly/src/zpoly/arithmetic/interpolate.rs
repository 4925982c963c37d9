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

//! Integer-point Lagrange/Newton interpolation. Requires the divided
//! differences to come out as exact integers, which holds whenever the
//! interpolated values themselves arise from evaluating an integer
//! polynomial at the given points (per scenario 7).

use crate::ZPoly;
use talus_base::{SmallOrBig, TalusError, TalusResult};

impl ZPoly {
    /// Newton divided-difference interpolation through `(xs[i], ys[i])`.
    /// Fails with `InexactDivision` if the data does not correspond to an
    /// integer-coefficient polynomial of degree `< xs.len()`.
    pub fn interpolate(xs: &[SmallOrBig], ys: &[SmallOrBig]) -> TalusResult<ZPoly> {
        if xs.len() != ys.len() {
            return Err(TalusError::InvalidArgument("xs and ys must have equal length".to_string()));
        }
        let n = xs.len();
        if n == 0 {
            return Ok(ZPoly::zero());
        }

        // Divided-difference table, kept as a single row updated in place:
        // coeffs[i] becomes f[x0..xi] after column i.
        let mut table: Vec<SmallOrBig> = ys.to_vec();
        let mut newton_coeffs = vec![table[0].clone()];
        for j in 1..n {
            for i in (j..n).rev() {
                let diff = table[i].sub(&table[i - 1]);
                let denom = xs[i].sub(&xs[i - j]);
                table[i] = diff.div_exact(&denom)?;
            }
            newton_coeffs.push(table[n - 1].clone());
        }

        // Expand sum_j newton_coeffs[j] * prod_{k<j} (x - xs[k]) in Horner
        // form: p = c_{n-1}; p = p*(x - x_{n-2}) + c_{n-2}; ...
        let mut poly = ZPoly::from_raw(vec![newton_coeffs[n - 1].clone()]);
        for j in (0..n - 1).rev() {
            let linear = ZPoly::from_raw(vec![xs[j].clone().neg(), SmallOrBig::one()]);
            poly = poly.mul(&linear);
            poly.set_coeff(0, poly.coeff(0).add(&newton_coeffs[j]));
        }
        Ok(poly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_scenario_seven() {
        let xs: Vec<SmallOrBig> = vec![0i64, 1, 2].into_iter().map(SmallOrBig::from).collect();
        let ys: Vec<SmallOrBig> = vec![1i64, 2, 5].into_iter().map(SmallOrBig::from).collect();
        let p = ZPoly::interpolate(&xs, &ys).unwrap();
        assert_eq!(p, ZPoly::from(vec![1i64, 0, 1])); // x^2 + 1
    }

    #[test]
    fn interpolate_round_trips_through_evaluation() {
        let f = ZPoly::from(vec![3i64, -2, 0, 5]);
        let xs: Vec<SmallOrBig> = (0..4).map(|i| SmallOrBig::from(i as i64)).collect();
        let ys: Vec<SmallOrBig> = xs.iter().map(|x| f.evaluate(x)).collect();
        let recovered = ZPoly::interpolate(&xs, &ys).unwrap();
        assert_eq!(recovered, f);
    }

    #[test]
    fn mismatched_lengths_reject() {
        let xs = vec![SmallOrBig::from(0i64)];
        let ys = vec![SmallOrBig::from(0i64), SmallOrBig::from(1i64)];
        assert!(ZPoly::interpolate(&xs, &ys).is_err());
    }
}
