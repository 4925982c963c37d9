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

use crate::{NmodElem, check_ctx};
use std::ops::{Sub, SubAssign};

#[inline]
fn sub_mod(a: u64, b: u64, p: u64) -> u64 {
    if a >= b { a - b } else { p - (b - a) }
}

/// Subtract two residues modulo `p`.
///
/// # Examples
///
/// ```
/// use talus_zn::NmodCtx;
///
/// let zp = NmodCtx::init(7).unwrap();
/// let a = zp.new(2);
/// let b = zp.new(5);
/// let result = a - b; // (2 - 5) mod 7 = 4
/// assert_eq!(result.value(), 4);
/// ```
impl Sub for NmodElem {
    type Output = NmodElem;

    fn sub(self, rhs: NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let diff = sub_mod(self.value, rhs.value, self.ctx.p);
        NmodElem::from_ctx(diff, self.ctx)
    }
}

impl Sub<&NmodElem> for NmodElem {
    type Output = NmodElem;

    fn sub(self, rhs: &NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let diff = sub_mod(self.value, rhs.value, self.ctx.p);
        NmodElem::from_ctx(diff, self.ctx)
    }
}

impl Sub<NmodElem> for &NmodElem {
    type Output = NmodElem;

    fn sub(self, rhs: NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let diff = sub_mod(self.value, rhs.value, self.ctx.p);
        NmodElem::from_ctx(diff, rhs.ctx)
    }
}

impl Sub<&NmodElem> for &NmodElem {
    type Output = NmodElem;

    fn sub(self, rhs: &NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let diff = sub_mod(self.value, rhs.value, self.ctx.p);
        NmodElem::from_ctx(diff, self.ctx.clone())
    }
}

impl SubAssign for NmodElem {
    fn sub_assign(&mut self, rhs: NmodElem) {
        check_ctx!(self, rhs);
        self.value = sub_mod(self.value, rhs.value, self.ctx.p);
    }
}

impl SubAssign<&NmodElem> for NmodElem {
    fn sub_assign(&mut self, rhs: &NmodElem) {
        check_ctx!(self, rhs);
        self.value = sub_mod(self.value, rhs.value, self.ctx.p);
    }
}
