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
use std::ops::Add;

/// Pointwise sum over the common prefix, copying the tail of the longer
/// operand, renormalised.
///
/// # Examples
///
/// ```
/// use talus_poly::ZPoly;
///
/// let a = ZPoly::from(vec![1i64, 2, 3]);
/// let b = ZPoly::from(vec![1i64, -2]);
/// assert_eq!(a.add(&b), ZPoly::from(vec![2i64, 0, 3]));
/// ```
impl ZPoly {
    pub fn add(&self, other: &ZPoly) -> ZPoly {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.clone();
        }
        let n = self.length.max(other.length);
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            out.push(self.coeff(i).add(&other.coeff(i)));
        }
        ZPoly::from_raw(out)
    }
}

impl Add<&ZPoly> for &ZPoly {
    type Output = ZPoly;
    fn add(self, rhs: &ZPoly) -> ZPoly {
        ZPoly::add(self, rhs)
    }
}

impl Add for ZPoly {
    type Output = ZPoly;
    fn add(self, rhs: ZPoly) -> ZPoly {
        ZPoly::add(&self, &rhs)
    }
}

impl Add<&ZPoly> for ZPoly {
    type Output = ZPoly;
    fn add(self, rhs: &ZPoly) -> ZPoly {
        ZPoly::add(&self, rhs)
    }
}

impl Add<ZPoly> for &ZPoly {
    type Output = ZPoly;
    fn add(self, rhs: ZPoly) -> ZPoly {
        ZPoly::add(self, &rhs)
    }
}
