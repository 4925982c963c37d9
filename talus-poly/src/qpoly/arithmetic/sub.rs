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
use std::ops::Sub;

impl QPoly {
    pub fn sub(&self, other: &QPoly) -> QPoly {
        self.add(&other.neg())
    }
}

impl Sub<&QPoly> for &QPoly {
    type Output = QPoly;
    fn sub(self, rhs: &QPoly) -> QPoly {
        QPoly::sub(self, rhs)
    }
}
impl Sub for QPoly {
    type Output = QPoly;
    fn sub(self, rhs: QPoly) -> QPoly {
        QPoly::sub(&self, &rhs)
    }
}
impl Sub<&QPoly> for QPoly {
    type Output = QPoly;
    fn sub(self, rhs: &QPoly) -> QPoly {
        QPoly::sub(&self, rhs)
    }
}
impl Sub<QPoly> for &QPoly {
    type Output = QPoly;
    fn sub(self, rhs: QPoly) -> QPoly {
        QPoly::sub(self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZPoly;
    use talus_base::SmallOrBig;

    #[test]
    fn sub_self_is_zero() {
        let a = QPoly::from_parts(ZPoly::from(vec![1i64, 2]), SmallOrBig::from(3i64));
        assert!(a.clone().sub(&a).is_zero());
    }

    #[test]
    fn matches_add_of_negation() {
        let a = QPoly::from_parts(ZPoly::from(vec![1i64]), SmallOrBig::from(2i64));
        let b = QPoly::from_parts(ZPoly::from(vec![1i64]), SmallOrBig::from(3i64));
        assert_eq!(a.clone().sub(&b), a.add(&b.neg()));
    }
}
