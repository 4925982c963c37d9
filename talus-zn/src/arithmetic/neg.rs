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

use crate::NmodElem;
use std::ops::Neg;

/// Negate a residue modulo `p`.
///
/// # Examples
///
/// ```
/// use talus_zn::NmodCtx;
///
/// let zp = NmodCtx::init(7).unwrap();
/// let a = zp.new(3);
/// assert_eq!((-a).value(), 4);
/// ```
impl Neg for NmodElem {
    type Output = NmodElem;

    fn neg(self) -> NmodElem {
        let p = self.ctx.p;
        let value = if self.value == 0 { 0 } else { p - self.value };
        NmodElem::from_ctx(value, self.ctx)
    }
}

impl Neg for &NmodElem {
    type Output = NmodElem;

    fn neg(self) -> NmodElem {
        let p = self.ctx.p;
        let value = if self.value == 0 { 0 } else { p - self.value };
        NmodElem::from_ctx(value, self.ctx.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::NmodCtx;

    #[test]
    fn negating_zero_is_zero() {
        let zp = NmodCtx::init(7).unwrap();
        assert_eq!((-zp.new(0)).value(), 0);
    }
}
