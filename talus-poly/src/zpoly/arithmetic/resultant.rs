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

//! Resultant via the signed subresultant pseudo-remainder sequence
//! (Euclidean resultant algorithm): accumulates a running sign/scale
//! correction at each pseudo-division step instead of building the full
//! Sylvester matrix.

use super::divrem::pseudo_divrem;
use crate::ZPoly;
use talus_base::SmallOrBig;

fn trim(v: &mut Vec<SmallOrBig>) {
    while let Some(last) = v.last() {
        if last.is_zero() {
            v.pop();
        } else {
            break;
        }
    }
}

impl ZPoly {
    /// `Res(self, other)`, zero if either polynomial is zero or if the
    /// two share a nonconstant common factor.
    ///
    /// The exact identity for the *true* remainder `R0 = A mod B` is
    /// `Res(A,B) = lc(B)^(deg(A)-deg(R0)) * (-1)^(deg(A)*deg(B)) *
    /// Res(B,R0)`. `pseudo_divrem` gives the pseudo-remainder `R =
    /// lc(B)^d * R0` instead (`d = deg(A)-deg(B)+1`), and scaling the
    /// second argument of a resultant by a constant `c` scales the whole
    /// resultant by `c^deg(first argument)`, i.e. `Res(B,R) =
    /// lc(B)^(d*deg(B)) * Res(B,R0)`. Substituting: `Res(A,B) =
    /// lc(B)^(deg(A)-deg(R)-d*deg(B)) * (-1)^(deg(A)*deg(B)) *
    /// Res(B,R)`. The `deg(A)-deg(R)-d*deg(B)` exponent can go negative
    /// partway through the recursion (the correction doesn't
    /// telescope to an integer until every level is combined), so the
    /// two powers of `lc(B)` are tracked as separate running products —
    /// `result` for `lc(B)^(deg(A)-deg(R))` and `correction` for
    /// `lc(B)^(d*deg(B))` — and only a single, guaranteed-exact division
    /// is performed at the end.
    pub fn resultant(&self, other: &ZPoly) -> SmallOrBig {
        if self.is_zero() || other.is_zero() {
            return SmallOrBig::zero();
        }

        let (mut a, mut b, mut negate) = if self.length() >= other.length() {
            (self.as_slice().to_vec(), other.as_slice().to_vec(), false)
        } else {
            let flip = ((self.degree().unwrap_or(0) * other.degree().unwrap_or(0)) % 2) == 1;
            (other.as_slice().to_vec(), self.as_slice().to_vec(), flip)
        };

        let mut result = SmallOrBig::one();
        let mut correction = SmallOrBig::one();
        loop {
            let deg_a = a.len() - 1;
            let deg_b = b.len() - 1;
            if deg_b == 0 {
                // Res(A, c) = c^deg(A) for a nonzero constant c.
                result = result.mul(&b[0].pow_unsigned(deg_a as u64));
                break;
            }

            let (_, mut r, d) = pseudo_divrem(&a, &b);
            trim(&mut r);
            if r.is_empty() {
                result = SmallOrBig::zero();
                break;
            }

            if (deg_a * deg_b) % 2 == 1 {
                negate = !negate;
            }
            let deg_r = r.len() - 1;
            let lead_b = &b[deg_b];
            result = result.mul(&lead_b.pow_unsigned((deg_a - deg_r) as u64));
            correction = correction.mul(&lead_b.pow_unsigned(d * deg_b as u64));

            a = b;
            b = r;
        }

        let result = if result.is_zero() {
            result
        } else {
            result.div_exact(&correction).expect("subresultant PRS correction divides the accumulated result exactly")
        };
        if negate { result.neg() } else { result }
    }
}
