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

//! The tagged integer element: a word that either inlines a small signed
//! integer or owns an arbitrary-precision [`Integer`].
//!
//! The small range is the full range of `i64`. Any value that would not fit
//! in an `i64` is kept in [`SmallOrBig::Big`]. Every public operation
//! restores the normal-form rule: a value representable as small is always
//! stored as small.

use crate::error::{TalusError, TalusResult};
use malachite::Integer;
use malachite::base::num::arithmetic::traits::{
    CeilingDivAssignMod, DivAssignMod, DivAssignRem, DivRound, Gcd, Lcm, Pow, UnsignedAbs,
};
use malachite::base::num::conversion::traits::{ConvertibleFrom, ExactFrom};
use malachite::base::num::logic::traits::{BitConvertible, SignificantBits};
use malachite::base::rounding_modes::RoundingMode;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone)]
pub enum SmallOrBig {
    Small(i64),
    Big(Integer),
}

impl SmallOrBig {
    #[inline]
    pub fn init() -> Self {
        SmallOrBig::Small(0)
    }

    #[inline]
    pub fn zero() -> Self {
        SmallOrBig::Small(0)
    }

    #[inline]
    pub fn one() -> Self {
        SmallOrBig::Small(1)
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = SmallOrBig::Small(0);
    }

    #[inline]
    pub fn set_small(i: i64) -> Self {
        SmallOrBig::Small(i)
    }

    pub fn set(&mut self, other: &SmallOrBig) {
        *self = other.clone();
    }

    /// Convert to the arbitrary-precision representation, regardless of the
    /// current variant.
    pub fn to_integer(&self) -> Integer {
        match self {
            SmallOrBig::Small(v) => Integer::from(*v),
            SmallOrBig::Big(v) => v.clone(),
        }
    }

    /// Restore the normal-form rule: demote to `Small` if the value fits in
    /// an `i64`, otherwise keep it in `Big`.
    pub fn from_integer(value: Integer) -> Self {
        if i64::convertible_from(&value) {
            SmallOrBig::Small(i64::exact_from(&value))
        } else {
            SmallOrBig::Big(value)
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            SmallOrBig::Small(v) => *v == 0,
            SmallOrBig::Big(_) => false,
        }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        matches!(self, SmallOrBig::Small(1))
    }

    pub fn sign(&self) -> i32 {
        match self {
            SmallOrBig::Small(v) => v.signum() as i32,
            SmallOrBig::Big(v) => {
                if *v > 0 {
                    1
                } else if *v < 0 {
                    -1
                } else {
                    0
                }
            }
        }
    }

    pub fn abs(&self) -> SmallOrBig {
        match self {
            SmallOrBig::Small(v) => match v.checked_abs() {
                Some(a) => SmallOrBig::Small(a),
                None => SmallOrBig::from_integer(Integer::from(*v).unsigned_abs().into()),
            },
            SmallOrBig::Big(v) => SmallOrBig::from_integer(v.clone().unsigned_abs().into()),
        }
    }

    pub fn neg(&self) -> SmallOrBig {
        match self {
            SmallOrBig::Small(v) => match v.checked_neg() {
                Some(n) => SmallOrBig::Small(n),
                None => SmallOrBig::from_integer(-Integer::from(*v)),
            },
            SmallOrBig::Big(v) => SmallOrBig::from_integer(-v.clone()),
        }
    }

    pub fn bit_length(&self) -> u64 {
        match self {
            SmallOrBig::Small(v) => {
                let mag = v.unsigned_abs();
                64 - mag.leading_zeros() as u64
            }
            SmallOrBig::Big(v) => v.unsigned_abs_ref().significant_bits(),
        }
    }

    /// Value of the `k`th bit of the two's-complement-independent magnitude
    /// representation; matches a nonnegative integer's binary digits.
    pub fn bit(&self, k: u64) -> bool {
        self.to_integer().unsigned_abs().to_bits_asc()[..]
            .get(k as usize)
            .copied()
            .unwrap_or(false)
    }

    pub fn cmp_abs(&self, other: &SmallOrBig) -> Ordering {
        match (self, other) {
            (SmallOrBig::Small(a), SmallOrBig::Small(b)) => a.unsigned_abs().cmp(&b.unsigned_abs()),
            _ => self.to_integer().unsigned_abs().cmp(&other.to_integer().unsigned_abs()),
        }
    }

    pub fn add(&self, other: &SmallOrBig) -> SmallOrBig {
        if let (SmallOrBig::Small(a), SmallOrBig::Small(b)) = (self, other) {
            if let Some(s) = a.checked_add(*b) {
                return SmallOrBig::Small(s);
            }
        }
        SmallOrBig::from_integer(self.to_integer() + other.to_integer())
    }

    pub fn sub(&self, other: &SmallOrBig) -> SmallOrBig {
        if let (SmallOrBig::Small(a), SmallOrBig::Small(b)) = (self, other) {
            if let Some(s) = a.checked_sub(*b) {
                return SmallOrBig::Small(s);
            }
        }
        SmallOrBig::from_integer(self.to_integer() - other.to_integer())
    }

    pub fn mul(&self, other: &SmallOrBig) -> SmallOrBig {
        if let (SmallOrBig::Small(a), SmallOrBig::Small(b)) = (self, other) {
            if let Some(p) = a.checked_mul(*b) {
                return SmallOrBig::Small(p);
            }
        }
        SmallOrBig::from_integer(self.to_integer() * other.to_integer())
    }

    /// `self + a*b`.
    pub fn addmul(&self, a: &SmallOrBig, b: &SmallOrBig) -> SmallOrBig {
        self.add(&a.mul(b))
    }

    /// `self - a*b`.
    pub fn submul(&self, a: &SmallOrBig, b: &SmallOrBig) -> SmallOrBig {
        self.sub(&a.mul(b))
    }

    /// Exact division; fails with `InexactDivision` if `other` does not
    /// divide `self`, and `DivisionByZero` if `other` is zero.
    pub fn div_exact(&self, other: &SmallOrBig) -> TalusResult<SmallOrBig> {
        if other.is_zero() {
            return Err(TalusError::DivisionByZero);
        }
        let (q, r) = self.divmod_floor(other)?;
        if !r.is_zero() {
            return Err(TalusError::InexactDivision);
        }
        Ok(q)
    }

    /// Euclidean floor division: `0 <= r < |d|` for positive `d`,
    /// `d < r <= 0` for negative `d`.
    pub fn divmod_floor(&self, other: &SmallOrBig) -> TalusResult<(SmallOrBig, SmallOrBig)> {
        if other.is_zero() {
            return Err(TalusError::DivisionByZero);
        }
        let mut n = self.to_integer();
        let d = other.to_integer();
        let r = if d > 0 {
            n.div_assign_mod(d.clone())
        } else {
            n.ceiling_div_assign_mod(d.clone())
        };
        Ok((SmallOrBig::from_integer(n), SmallOrBig::from_integer(r)))
    }

    pub fn div_floor(&self, other: &SmallOrBig) -> TalusResult<SmallOrBig> {
        self.divmod_floor(other).map(|(q, _)| q)
    }

    pub fn div_ceil(&self, other: &SmallOrBig) -> TalusResult<SmallOrBig> {
        if other.is_zero() {
            return Err(TalusError::DivisionByZero);
        }
        let q = self
            .to_integer()
            .div_round(other.to_integer(), RoundingMode::Ceiling)
            .0;
        Ok(SmallOrBig::from_integer(q))
    }

    pub fn rem(&self, other: &SmallOrBig) -> TalusResult<SmallOrBig> {
        self.divmod_floor(other).map(|(_, r)| r)
    }

    pub fn gcd(&self, other: &SmallOrBig) -> SmallOrBig {
        let g = self.to_integer().unsigned_abs().gcd(other.to_integer().unsigned_abs());
        SmallOrBig::from_integer(g.into())
    }

    pub fn lcm(&self, other: &SmallOrBig) -> SmallOrBig {
        if self.is_zero() || other.is_zero() {
            return SmallOrBig::zero();
        }
        let l = self.to_integer().unsigned_abs().lcm(other.to_integer().unsigned_abs());
        SmallOrBig::from_integer(l.into())
    }

    pub fn pow_unsigned(&self, exp: u64) -> SmallOrBig {
        SmallOrBig::from_integer(self.to_integer().pow(exp))
    }

    pub fn mul_2exp(&self, k: u64) -> SmallOrBig {
        SmallOrBig::from_integer(self.to_integer() << k)
    }

    pub fn div_2exp_floor(&self, k: u64) -> SmallOrBig {
        SmallOrBig::from_integer(self.to_integer() >> k)
    }

    /// Reduce to `[0, p)` for an unsigned small prime/modulus `p`.
    pub fn ui_mod_small(&self, p: u64) -> u64 {
        let mut n = self.to_integer();
        let r = n.div_assign_rem(Integer::from(p));
        let mut r = i64::exact_from(&r);
        if r < 0 {
            r += p as i64;
        }
        r as u64
    }

    /// Single CRT update step: given `(r1, m1)` and `(r2, m2)` with `m1`,
    /// `m2` coprime, return the unique representative in
    /// `(-m1*m2/2, m1*m2/2]` congruent to `r1` mod `m1` and `r2` mod `m2`.
    pub fn crt(r1: &SmallOrBig, m1: &SmallOrBig, r2: &SmallOrBig, m2: &SmallOrBig) -> SmallOrBig {
        let m1i = m1.to_integer();
        let m2i = m2.to_integer();
        let modulus = &m1i * &m2i;
        // m1 * inv(m1 mod m2)^{-1} ... solved directly via extended Euclid on m1, m2.
        let (g, u, _v) = ext_gcd(&m1i, &m2i);
        debug_assert_eq!(g, Integer::from(1));
        let diff = r2.to_integer() - r1.to_integer();
        let mut r = r1.to_integer() + &m1i * u * diff;
        r = ((r % &modulus) + &modulus) % &modulus;
        let half = &modulus >> 1;
        if r > half {
            r -= &modulus;
        }
        SmallOrBig::from_integer(r)
    }
}

/// Extended Euclidean algorithm: returns `(g, x, y)` with `a*x + b*y = g`.
fn ext_gcd(a: &Integer, b: &Integer) -> (Integer, Integer, Integer) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (Integer::from(1), Integer::from(0));
    let (mut old_t, mut t) = (Integer::from(0), Integer::from(1));
    while r != 0 {
        let q = (&old_r) / (&r);
        let new_r = &old_r - &q * &r;
        old_r = r;
        r = new_r;
        let new_s = &old_s - &q * &s;
        old_s = s;
        s = new_s;
        let new_t = &old_t - &q * &t;
        old_t = t;
        t = new_t;
    }
    (old_r, old_s, old_t)
}

impl Default for SmallOrBig {
    #[inline]
    fn default() -> Self {
        SmallOrBig::zero()
    }
}

impl PartialEq for SmallOrBig {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SmallOrBig::Small(a), SmallOrBig::Small(b)) => a == b,
            _ => self.to_integer() == other.to_integer(),
        }
    }
}
impl Eq for SmallOrBig {}

impl PartialOrd for SmallOrBig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for SmallOrBig {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SmallOrBig::Small(a), SmallOrBig::Small(b)) => a.cmp(b),
            _ => self.to_integer().cmp(&other.to_integer()),
        }
    }
}

impl fmt::Display for SmallOrBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmallOrBig::Small(v) => write!(f, "{}", v),
            SmallOrBig::Big(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for SmallOrBig {
    #[inline]
    fn from(v: i64) -> Self {
        SmallOrBig::Small(v)
    }
}

impl From<i32> for SmallOrBig {
    #[inline]
    fn from(v: i32) -> Self {
        SmallOrBig::Small(v as i64)
    }
}

impl From<Integer> for SmallOrBig {
    #[inline]
    fn from(v: Integer) -> Self {
        SmallOrBig::from_integer(v)
    }
}

impl std::str::FromStr for SmallOrBig {
    type Err = TalusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Integer>()
            .map(SmallOrBig::from_integer)
            .map_err(|_| TalusError::ParseError(format!("invalid integer literal: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_stays_small() {
        let a = SmallOrBig::from(3i64);
        let b = SmallOrBig::from(4i64);
        assert_eq!(a.add(&b), SmallOrBig::Small(7));
    }

    #[test]
    fn overflow_promotes_to_big() {
        let a = SmallOrBig::Small(i64::MAX);
        let b = SmallOrBig::Small(1);
        let sum = a.add(&b);
        assert!(matches!(sum, SmallOrBig::Big(_)));
        assert_eq!(sum.to_integer(), Integer::from(i64::MAX) + Integer::from(1));
    }

    #[test]
    fn big_demotes_to_small() {
        let big = SmallOrBig::from_integer(Integer::from(i64::MAX) + Integer::from(1));
        let demoted = big.sub(&SmallOrBig::Small(1));
        assert_eq!(demoted, SmallOrBig::Small(i64::MAX));
    }

    #[test]
    fn div_exact_detects_inexact() {
        let a = SmallOrBig::from(7i64);
        let b = SmallOrBig::from(2i64);
        assert_eq!(a.div_exact(&b), Err(TalusError::InexactDivision));
        assert_eq!(SmallOrBig::from(6i64).div_exact(&b), Ok(SmallOrBig::from(3i64)));
    }

    #[test]
    fn divmod_floor_signs() {
        let (q, r) = SmallOrBig::from(-7i64).divmod_floor(&SmallOrBig::from(2i64)).unwrap();
        assert_eq!(q, SmallOrBig::from(-4i64));
        assert_eq!(r, SmallOrBig::from(1i64));

        let (q, r) = SmallOrBig::from(7i64).divmod_floor(&SmallOrBig::from(-2i64)).unwrap();
        assert_eq!(q, SmallOrBig::from(-4i64));
        assert_eq!(r, SmallOrBig::from(-1i64));
    }

    #[test]
    fn gcd_lcm_empty_like_cases() {
        assert_eq!(SmallOrBig::from(0i64).gcd(&SmallOrBig::from(0i64)), SmallOrBig::zero());
        assert_eq!(SmallOrBig::from(6i64).gcd(&SmallOrBig::from(4i64)), SmallOrBig::from(2i64));
        assert_eq!(SmallOrBig::from(0i64).lcm(&SmallOrBig::from(5i64)), SmallOrBig::zero());
    }

    #[test]
    fn crt_single_step() {
        // r = 2 mod 3, r = 3 mod 5  =>  r = 8 mod 15, canonical rep is -7.
        let r = SmallOrBig::crt(
            &SmallOrBig::from(2i64),
            &SmallOrBig::from(3i64),
            &SmallOrBig::from(3i64),
            &SmallOrBig::from(5i64),
        );
        assert_eq!(r.to_integer() % Integer::from(15), Integer::from(8) % Integer::from(15));
    }
}
