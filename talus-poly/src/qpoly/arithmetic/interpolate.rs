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

//! Barycentric Lagrange interpolation: `P(x) = prod(x - x_i)`, weights
//! `w_i = P'(x_i) = prod_{j != i} (x_i - x_j)`, result `sum_i (y_i/w_i) *
//! (P(x)/(x - x_i))` accumulated over a common denominator.

use crate::{QPoly, ZPoly};
use talus_base::{SmallOrBig, TalusError, TalusResult};

impl QPoly {
    pub fn interpolate(xs: &[SmallOrBig], ys: &[SmallOrBig]) -> TalusResult<QPoly> {
        if xs.len() != ys.len() {
            return Err(TalusError::InvalidArgument("xs and ys must have equal length".to_string()));
        }
        let n = xs.len();
        if n == 0 {
            return Ok(QPoly::zero());
        }

        let big_p = {
            let mut acc = ZPoly::one();
            for x in xs {
                acc = acc.mul(&ZPoly::from_raw(vec![x.clone().neg(), SmallOrBig::one()]));
            }
            acc
        };
        let derivative = big_p.derivative();

        let mut result = QPoly::zero();
        for i in 0..n {
            if ys[i].is_zero() {
                continue;
            }
            let linear = ZPoly::from_raw(vec![xs[i].clone().neg(), SmallOrBig::one()]);
            let cofactor = big_p.div_exact(&linear).expect("x_i is a simple root of P by construction");
            let weight = derivative.evaluate(&xs[i]);
            let term = QPoly::from_parts(cofactor.scalar_mul(&ys[i]), weight);
            result = result.add(&term);
        }
        Ok(result)
    }
}
