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
use std::ops::Mul;

impl QPoly {
    /// Cross-cancels common factors between each numerator and the
    /// other's denominator before multiplying, keeping the intermediate
    /// numerator and denominator smaller than a naive cross product.
    pub fn mul(&self, other: &QPoly) -> QPoly {
        if self.is_zero() || other.is_zero() {
            return QPoly::zero();
        }
        let gcd1 = self.numerator().content().gcd(other.denominator());
        let gcd2 = other.numerator().content().gcd(self.denominator());

        let num1 = if gcd1.is_one() {
            self.numerator().clone()
        } else {
            crate::ZPoly::from_raw(self.numerator().as_slice().iter().map(|c| c.div_exact(&gcd1).unwrap()).collect())
        };
        let den2 = if gcd1.is_one() { other.denominator().clone() } else { other.denominator().div_exact(&gcd1).unwrap() };

        let num2 = if gcd2.is_one() {
            other.numerator().clone()
        } else {
            crate::ZPoly::from_raw(other.numerator().as_slice().iter().map(|c| c.div_exact(&gcd2).unwrap()).collect())
        };
        let den1 = if gcd2.is_one() { self.denominator().clone() } else { self.denominator().div_exact(&gcd2).unwrap() };

        let num = num1.mul(&num2);
        let den = den1.mul(&den2);
        QPoly::from_parts(num, den)
    }

    pub fn sqr(&self) -> QPoly {
        self.mul(self)
    }
}

impl Mul<&QPoly> for &QPoly {
    type Output = QPoly;
    fn mul(self, rhs: &QPoly) -> QPoly {
        QPoly::mul(self, rhs)
    }
}
impl Mul for QPoly {
    type Output = QPoly;
    fn mul(self, rhs: QPoly) -> QPoly {
        QPoly::mul(&self, &rhs)
    }
}
impl Mul<&QPoly> for QPoly {
    type Output = QPoly;
    fn mul(self, rhs: &QPoly) -> QPoly {
        QPoly::mul(&self, rhs)
    }
}
impl Mul<QPoly> for &QPoly {
    type Output = QPoly;
    fn mul(self, rhs: QPoly) -> QPoly {
        QPoly::mul(self, &rhs)
    }
}
