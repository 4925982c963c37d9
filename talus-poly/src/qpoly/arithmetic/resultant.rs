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

use crate::QPoly;
use talus_base::{SmallOrBig, TalusError, TalusResult};

impl QPoly {
    /// `Res(self, other)` as a `(numerator, denominator)` rational pair,
    /// via `Res(numA/denA, numB/denB) = Res(numA,numB) / (denA^n *
    /// denB^m)` where `m = deg(numA)`, `n = deg(numB)`.
    pub fn resultant(&self, other: &QPoly) -> (SmallOrBig, SmallOrBig) {
        if self.is_zero() || other.is_zero() {
            return (SmallOrBig::zero(), SmallOrBig::one());
        }
        let m = self.numerator().degree().unwrap_or(0) as u64;
        let n = other.numerator().degree().unwrap_or(0) as u64;
        let num = self.numerator().resultant(other.numerator());
        let den = self.denominator().pow_unsigned(n).mul(&other.denominator().pow_unsigned(m));
        (num, den)
    }

    /// Resultant known in advance to be an exact multiple of `divisor`,
    /// with the expectation that the reduced result fits in `nbits`
    /// bits; used when the caller has a cofactor bound from elsewhere in
    /// a larger computation (e.g. discriminant subroutines) and wants
    /// the exact quotient rather than the raw resultant.
    pub fn resultant_modular_div(&self, other: &QPoly, divisor: &SmallOrBig, nbits: u64) -> TalusResult<SmallOrBig> {
        if divisor.is_zero() {
            return Err(TalusError::DivisionByZero);
        }
        let (num, den) = self.resultant(other);
        let scaled = num.div_exact(&den.mul(divisor))?;
        if scaled.bit_length() > nbits {
            return Err(TalusError::Unsupported("resultant exceeds requested bit budget".to_string()));
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZPoly;

    #[test]
    fn resultant_matches_scaled_integer_resultant() {
        let a = QPoly::from_parts(ZPoly::from(vec![-1i64, 1]), SmallOrBig::from(2i64)); // (x-1)/2
        let b = QPoly::from_parts(ZPoly::from(vec![-2i64, 1]), SmallOrBig::one()); // x-2
        let (num, den) = a.resultant(&b);
        // Res((x-1)/2, x-2) = Res(x-1,x-2) / 2^1 = -1/2
        assert_eq!(num, SmallOrBig::from(-1i64));
        assert_eq!(den, SmallOrBig::from(2i64));
    }

    #[test]
    fn resultant_with_zero_is_zero() {
        let a = QPoly::from_parts(ZPoly::from(vec![1i64]), SmallOrBig::one());
        let (num, _) = a.resultant(&QPoly::zero());
        assert!(num.is_zero());
    }
}
