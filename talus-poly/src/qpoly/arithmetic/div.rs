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

//! Polynomial division over the rationals. `ℚ[x]` is Euclidean, so
//! division always succeeds for a nonzero divisor; this reduces to the
//! integer pseudo-division of the numerators plus leading-coefficient
//! bookkeeping to fold the scaling factor back into the denominators.

use crate::QPoly;
use talus_base::{TalusError, TalusResult};

impl QPoly {
    /// `self = Q*other + R` with `deg(R) < deg(other)`.
    pub fn divrem(&self, other: &QPoly) -> TalusResult<(QPoly, QPoly)> {
        if other.is_zero() {
            return Err(TalusError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((QPoly::zero(), QPoly::zero()));
        }
        let (q0, r0, d) = self.numerator().pseudo_divrem(other.numerator())?;
        let lead_pow = other.numerator().leading_coeff().pow_unsigned(d);
        let scale = self.denominator().mul(&lead_pow);

        let q = QPoly::from_parts(q0.scalar_mul(other.denominator()), scale.clone());
        let r = QPoly::from_parts(r0, scale);
        Ok((q, r))
    }

    /// Quotient only.
    pub fn div(&self, other: &QPoly) -> TalusResult<QPoly> {
        Ok(self.divrem(other)?.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZPoly;
    use talus_base::SmallOrBig;

    #[test]
    fn divrem_identity_holds() {
        let a = QPoly::from_parts(ZPoly::from(vec![1i64, 1, 1]), SmallOrBig::from(2i64));
        let b = QPoly::from_parts(ZPoly::from(vec![1i64, 1]), SmallOrBig::from(3i64));
        let (q, r) = a.divrem(&b).unwrap();
        assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn exact_division_has_zero_remainder() {
        let a = QPoly::from_parts(ZPoly::from(vec![-1i64, 0, 1]), SmallOrBig::one()); // x^2-1
        let b = QPoly::from_parts(ZPoly::from(vec![-1i64, 1]), SmallOrBig::one()); // x-1
        let (q, r) = a.divrem(&b).unwrap();
        assert!(r.is_zero());
        assert_eq!(q, QPoly::from_parts(ZPoly::from(vec![1i64, 1]), SmallOrBig::one()));
    }

    #[test]
    fn division_by_zero_errors() {
        let a = QPoly::from_parts(ZPoly::from(vec![1i64]), SmallOrBig::one());
        assert_eq!(a.div(&QPoly::zero()), Err(TalusError::DivisionByZero));
    }
}
