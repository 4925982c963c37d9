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

use crate::ZPoly;
use std::ops::Sub;

/// # Examples
///
/// ```
/// use talus_poly::ZPoly;
///
/// let a = ZPoly::from(vec![1i64, 2, 3]);
/// let b = ZPoly::from(vec![1i64, 2, 3]);
/// assert!(a.sub(&b).is_zero());
/// ```
impl ZPoly {
    pub fn sub(&self, other: &ZPoly) -> ZPoly {
        self.add(&other.neg())
    }
}

impl Sub<&ZPoly> for &ZPoly {
    type Output = ZPoly;
    fn sub(self, rhs: &ZPoly) -> ZPoly {
        ZPoly::sub(self, rhs)
    }
}

impl Sub for ZPoly {
    type Output = ZPoly;
    fn sub(self, rhs: ZPoly) -> ZPoly {
        ZPoly::sub(&self, &rhs)
    }
}

impl Sub<&ZPoly> for ZPoly {
    type Output = ZPoly;
    fn sub(self, rhs: &ZPoly) -> ZPoly {
        ZPoly::sub(&self, rhs)
    }
}

impl Sub<ZPoly> for &ZPoly {
    type Output = ZPoly;
    fn sub(self, rhs: ZPoly) -> ZPoly {
        ZPoly::sub(self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_self_is_zero() {
        let a = ZPoly::from(vec![5i64, -3, 2]);
        assert!(a.clone().sub(&a).is_zero());
    }

    #[test]
    fn matches_add_of_negation() {
        let a = ZPoly::from(vec![1i64, 2]);
        let b = ZPoly::from(vec![3i64, -1, 4]);
        assert_eq!(a.clone().sub(&b), a.add(&b.neg()));
    }
}
