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

impl QPoly {
    /// `gcd` reduced to `ZPoly::gcd` on the primitive-scaled numerators;
    /// the result is returned monic (denominator equal to the primitive
    /// gcd's own leading coefficient, which `QPoly::from_parts`'s
    /// canonicalisation turns into a unit leading coefficient).
    pub fn gcd(&self, other: &QPoly) -> QPoly {
        if self.is_zero() {
            return other.clone().make_monic();
        }
        if other.is_zero() {
            return self.clone().make_monic();
        }
        let g = self.numerator().gcd(other.numerator());
        if g.is_zero() {
            return QPoly::zero();
        }
        let lead = g.leading_coeff();
        QPoly::from_parts(g, lead)
    }

    fn make_monic(self) -> QPoly {
        if self.is_zero() {
            return self;
        }
        let lead = self.numerator().leading_coeff();
        QPoly::from_parts(self.numerator().clone(), lead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZPoly;
    use talus_base::SmallOrBig;

    #[test]
    fn gcd_scenario_three_is_monic() {
        let a = QPoly::from_parts(ZPoly::from(vec![6i64, -7, 0, 1]), SmallOrBig::one());
        let b = QPoly::from_parts(ZPoly::from(vec![-30i64, 7, 6, 1]), SmallOrBig::one());
        let g = a.gcd(&b);
        assert_eq!(g, QPoly::from_parts(ZPoly::from(vec![-6i64, 1, 1]), SmallOrBig::one()));
    }

    #[test]
    fn gcd_with_zero_is_other_monic() {
        let a = QPoly::from_parts(ZPoly::from(vec![4i64, 2]), SmallOrBig::from(3i64));
        assert_eq!(a.gcd(&QPoly::zero()), QPoly::from_parts(ZPoly::from(vec![2i64, 1]), SmallOrBig::one()));
    }
}
