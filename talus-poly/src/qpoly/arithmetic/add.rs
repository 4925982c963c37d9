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
use std::ops::Add;

impl QPoly {
    pub fn add(&self, other: &QPoly) -> QPoly {
        if self.denominator() == other.denominator() {
            let num = self.numerator().add(other.numerator());
            return QPoly::from_parts(num, self.denominator().clone());
        }
        let num = self
            .numerator()
            .scalar_mul(other.denominator())
            .add(&other.numerator().scalar_mul(self.denominator()));
        let den = self.denominator().mul(other.denominator());
        QPoly::from_parts(num, den)
    }
}

impl Add<&QPoly> for &QPoly {
    type Output = QPoly;
    fn add(self, rhs: &QPoly) -> QPoly {
        QPoly::add(self, rhs)
    }
}
impl Add for QPoly {
    type Output = QPoly;
    fn add(self, rhs: QPoly) -> QPoly {
        QPoly::add(&self, &rhs)
    }
}
impl Add<&QPoly> for QPoly {
    type Output = QPoly;
    fn add(self, rhs: &QPoly) -> QPoly {
        QPoly::add(&self, rhs)
    }
}
impl Add<QPoly> for &QPoly {
    type Output = QPoly;
    fn add(self, rhs: QPoly) -> QPoly {
        QPoly::add(self, &rhs)
    }
}
