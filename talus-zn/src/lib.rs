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

//! The modular bridge: reduction of an integer or integer vector mod a
//! word-size prime, Chinese-remainder reconstruction, and a tree-based
//! multi-modulus reducer.

pub mod arithmetic;
pub mod comb;

use std::rc::Rc;
use talus_base::{SmallOrBig, TalusError, TalusResult};
use talus_vec::IntVec;

#[macro_export]
macro_rules! check_ctx {
    ($a:expr, $b:expr) => {
        if $a.modulus() != $b.modulus() {
            panic!(
                "cannot combine elements from different moduli: Zp({}) and Zp({})",
                $a.modulus(),
                $b.modulus()
            );
        }
    };
}

/// Cached data for reduction modulo a word-size prime `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NmodContext {
    pub(crate) p: u64,
    p_bits: u32,
}

impl NmodContext {
    fn new(p: u64) -> TalusResult<Self> {
        if p == 0 {
            return Err(TalusError::InvalidArgument("modulus must be nonzero".to_string()));
        }
        let p_bits = 64 - p.leading_zeros();
        Ok(NmodContext { p, p_bits })
    }
}

/// A word-size prime modulus, cheaply shared across elements built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NmodCtx {
    ctx: Rc<NmodContext>,
}

/// An element of `ℤ/pℤ` for a word-size prime `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NmodElem {
    pub(crate) value: u64,
    pub(crate) ctx: Rc<NmodContext>,
}

impl NmodCtx {
    #[inline]
    pub fn init(p: u64) -> TalusResult<Self> {
        Ok(NmodCtx { ctx: Rc::new(NmodContext::new(p)?) })
    }

    #[inline]
    pub fn new(&self, value: u64) -> NmodElem {
        NmodElem::from_ctx(value % self.ctx.p, self.ctx.clone())
    }

    /// Reduce a (possibly negative) [`SmallOrBig`] into this modulus.
    pub fn reduce(&self, value: &SmallOrBig) -> NmodElem {
        let r = value.ui_mod_small(self.ctx.p);
        NmodElem::from_ctx(r, self.ctx.clone())
    }

    #[inline]
    pub fn modulus(&self) -> u64 {
        self.ctx.p
    }

    #[inline]
    pub fn bit_length(&self) -> u32 {
        self.ctx.p_bits
    }
}

impl NmodElem {
    #[inline]
    pub(crate) fn from_ctx(value: u64, ctx: Rc<NmodContext>) -> Self {
        NmodElem { value, ctx }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn modulus(&self) -> u64 {
        self.ctx.p
    }

    pub fn ctx(&self) -> NmodCtx {
        NmodCtx { ctx: self.ctx.clone() }
    }

    /// Multiplicative inverse via the extended Euclidean algorithm; `None`
    /// if `self` is `0`.
    pub fn inv(&self) -> Option<NmodElem> {
        if self.value == 0 {
            return None;
        }
        let (g, x, _) = ext_gcd_i128(self.value as i128, self.ctx.p as i128);
        if g != 1 {
            return None;
        }
        let p = self.ctx.p as i128;
        let inv = ((x % p) + p) % p;
        Some(NmodElem::from_ctx(inv as u64, self.ctx.clone()))
    }

    pub fn pow(&self, mut exp: u64) -> NmodElem {
        let p = self.ctx.p;
        let mut base = self.value;
        let mut acc: u64 = 1 % p;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = mulmod(acc, base, p);
            }
            base = mulmod(base, base, p);
            exp >>= 1;
        }
        NmodElem::from_ctx(acc, self.ctx.clone())
    }
}

#[inline]
pub(crate) fn mulmod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}

fn ext_gcd_i128(a: i128, b: i128) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        let new_r = old_r - q * r;
        old_r = r;
        r = new_r;
        let new_s = old_s - q * s;
        old_s = s;
        s = new_s;
    }
    (old_r, old_s, 0)
}

/// `zvec_to_nmod`: reduce every entry of an [`IntVec`] modulo `ctx.p`.
pub fn zvec_to_nmod(vec: &IntVec, ctx: &NmodCtx) -> Vec<u64> {
    vec.iter().map(|e| ctx.reduce(e).value()).collect()
}

/// Single CRT update step: given `(r1, m1)` and a residue `r2` modulo a
/// word-size prime `p` coprime to `m1`, return the unique representative in
/// `(-m1*p/2, m1*p/2]` congruent to both, and the new modulus `m1*p`.
pub fn crt_step(r1: &SmallOrBig, m1: &SmallOrBig, r2: &NmodElem) -> (SmallOrBig, SmallOrBig) {
    let p = SmallOrBig::from(r2.modulus() as i64);
    let r2v = SmallOrBig::from(r2.value() as i64);
    let combined = SmallOrBig::crt(r1, m1, &r2v, &p);
    (combined, m1.mul(&p))
}

pub use comb::ModulusComb;
