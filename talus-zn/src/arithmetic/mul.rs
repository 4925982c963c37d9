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

use crate::{NmodElem, check_ctx, mulmod};
use std::ops::{Mul, MulAssign};

/// Multiply two residues modulo `p`, via a 128-bit widening product.
///
/// # Examples
///
/// ```
/// use talus_zn::NmodCtx;
///
/// let zp = NmodCtx::init(7).unwrap();
/// let a = zp.new(5);
/// let b = zp.new(4);
/// let result = a * b; // (5 * 4) mod 7 = 6
/// assert_eq!(result.value(), 6);
/// ```
impl Mul for NmodElem {
    type Output = NmodElem;

    fn mul(self, rhs: NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let prod = mulmod(self.value, rhs.value, self.ctx.p);
        NmodElem::from_ctx(prod, self.ctx)
    }
}

impl Mul<&NmodElem> for NmodElem {
    type Output = NmodElem;

    fn mul(self, rhs: &NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let prod = mulmod(self.value, rhs.value, self.ctx.p);
        NmodElem::from_ctx(prod, self.ctx)
    }
}

impl Mul<NmodElem> for &NmodElem {
    type Output = NmodElem;

    fn mul(self, rhs: NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let prod = mulmod(self.value, rhs.value, self.ctx.p);
        NmodElem::from_ctx(prod, rhs.ctx)
    }
}

impl Mul<&NmodElem> for &NmodElem {
    type Output = NmodElem;

    fn mul(self, rhs: &NmodElem) -> NmodElem {
        check_ctx!(self, rhs);
        let prod = mulmod(self.value, rhs.value, self.ctx.p);
        NmodElem::from_ctx(prod, self.ctx.clone())
    }
}

impl MulAssign for NmodElem {
    fn mul_assign(&mut self, rhs: NmodElem) {
        check_ctx!(self, rhs);
        self.value = mulmod(self.value, rhs.value, self.ctx.p);
    }
}

impl MulAssign<&NmodElem> for NmodElem {
    fn mul_assign(&mut self, rhs: &NmodElem) {
        check_ctx!(self, rhs);
        self.value = mulmod(self.value, rhs.value, self.ctx.p);
    }
}

#[cfg(test)]
mod tests {
    use crate::NmodCtx;

    #[test]
    fn reduces_modulo_p() {
        let zp = NmodCtx::init(7).unwrap();
        let a = zp.new(5);
        let b = zp.new(4);
        assert_eq!((a * b).value(), 6);
    }

    #[test]
    fn large_word_sized_prime_does_not_overflow() {
        let p = (1u64 << 61) - 1;
        let zp = NmodCtx::init(p).unwrap();
        let a = zp.new(p - 1);
        let b = zp.new(p - 1);
        assert_eq!((a * b).value(), 1);
    }
}
