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
    /// Multiply by an integer scalar, cancelling against the denominator
    /// first rather than multiplying the numerator out and
    /// re-canonicalising from scratch.
    pub fn scalar_mul(&self, c: &SmallOrBig) -> QPoly {
        if c.is_zero() || self.is_zero() {
            return QPoly::zero();
        }
        let g = c.gcd(self.denominator());
        if g.is_one() {
            return QPoly::from_parts(self.numerator().scalar_mul(c), self.denominator().clone());
        }
        let c_reduced = c.div_exact(&g).expect("g divides c exactly");
        let den_reduced = self.denominator().div_exact(&g).expect("g divides den exactly");
        QPoly::from_parts(self.numerator().scalar_mul(&c_reduced), den_reduced)
    }

    /// Divide by an integer scalar.
    pub fn scalar_div(&self, c: &SmallOrBig) -> TalusResult<QPoly> {
        if c.is_zero() {
            return Err(TalusError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(QPoly::zero());
        }
        let g = self.numerator().content().gcd(c);
        let num = if g.is_one() {
            self.numerator().clone()
        } else {
            crate::ZPoly::from_raw(self.numerator().as_slice().iter().map(|x| x.div_exact(&g).unwrap()).collect())
        };
        let c_reduced = if g.is_one() { c.clone() } else { c.div_exact(&g)? };
        let den = self.denominator().mul(&c_reduced);
        Ok(QPoly::from_parts(num, den))
    }

    pub fn scalar_add(&self, c: &SmallOrBig) -> QPoly {
        self.add(&QPoly::from_parts(crate::ZPoly::from_raw(vec![c.clone()]), SmallOrBig::one()))
    }
}
