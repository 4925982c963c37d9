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
use std::ops::Neg;

impl ZPoly {
    /// # Examples
    ///
    /// ```
    /// use talus_poly::ZPoly;
    ///
    /// let a = ZPoly::from(vec![1i64, -2, 3]);
    /// assert_eq!(a.neg(), ZPoly::from(vec![-1i64, 2, -3]));
    /// ```
    pub fn neg(&self) -> ZPoly {
        if self.is_zero() {
            return ZPoly::zero();
        }
        ZPoly::from_raw(self.as_slice().iter().map(|c| c.neg()).collect())
    }
}

impl Neg for ZPoly {
    type Output = ZPoly;
    fn neg(self) -> ZPoly {
        ZPoly::neg(&self)
    }
}

impl Neg for &ZPoly {
    type Output = ZPoly;
    fn neg(self) -> ZPoly {
        ZPoly::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_negation_is_identity() {
        let a = ZPoly::from(vec![7i64, -1, 0, 3]);
        assert_eq!(a.clone().neg().neg(), a);
    }

    #[test]
    fn negating_zero_is_zero() {
        assert_eq!(ZPoly::zero().neg(), ZPoly::zero());
    }
}
