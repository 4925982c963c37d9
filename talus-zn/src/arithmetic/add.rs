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
use std::ops::{Add, AddAssign};

/// Add two residues modulo `p`.
///
/// # Examples
///
/// ```
/// use talus_zn::NmodCtx;
///
/// let zp = NmodCtx::init(7).unwrap();
/// let a = zp.new(5);
/// let b = zp.new(4);
/// let result = a + b; // (5 + 4) mod 7 = 2
/// assert_eq!(result.value(), 2);
/// ```
impl Add for NmodElem {
    type Output = NmodElem;

    fn add(self, rhs: NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let sum = (self.value + rhs.value) % self.ctx.p;
        NmodElem::from_ctx(sum, self.ctx)
    }
}

impl Add<&NmodElem> for NmodElem {
    type Output = NmodElem;

    fn add(self, rhs: &NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let sum = (self.value + rhs.value) % self.ctx.p;
        NmodElem::from_ctx(sum, self.ctx)
    }
}

impl Add<NmodElem> for &NmodElem {
    type Output = NmodElem;

    fn add(self, rhs: NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let sum = (self.value + rhs.value) % self.ctx.p;
        NmodElem::from_ctx(sum, rhs.ctx)
    }
}

impl Add<&NmodElem> for &NmodElem {
    type Output = NmodElem;

    fn add(self, rhs: &NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let sum = (self.value + rhs.value) % self.ctx.p;
        NmodElem::from_ctx(sum, self.ctx.clone())
    }
}

impl AddAssign for NmodElem {
    fn add_assign(&mut self, rhs: NmodElem) {
        check_ctx!(self, rhs);
        self.value = (self.value + rhs.value) % self.ctx.p;
    }
}

impl AddAssign<&NmodElem> for NmodElem {
    fn add_assign(&mut self, rhs: &NmodElem) {
        check_ctx!(self, rhs);
        self.value = (self.value + rhs.value) % self.ctx.p;
    }
}

#[cfg(test)]
mod tests {
    use crate::NmodCtx;

    #[test]
    fn wraps_around_modulus() {
        let zp = NmodCtx::init(7).unwrap();
        let a = zp.new(5);
        let b = zp.new(4);
        assert_eq!((a + b).value(), 2);
    }

    #[test]
    #[should_panic]
    fn mismatched_moduli_panics() {
        let zp7 = NmodCtx::init(7).unwrap();
        let zp11 = NmodCtx::init(11).unwrap();
        let _ = zp7.new(1) + zp11.new(1);
    }
}
