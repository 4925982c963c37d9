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

//! Dense univariate polynomials over the integers.

pub mod arithmetic;

use std::fmt;
use std::str::FromStr;
use talus_base::{SmallOrBig, TalusError};
use talus_vec::IntVec;

/// `{coeffs: IntVec, length, alloc}`. `alloc` is `coeffs.len()`; `length`
/// is the logical degree-plus-one. Invariant: `length == 0` or
/// `coeffs[length-1] != 0`.
#[derive(Debug, Clone)]
pub struct ZPoly {
    coeffs: IntVec,
    length: usize,
}

impl PartialEq for ZPoly {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for ZPoly {}

impl ZPoly {
    #[inline]
    pub fn zero() -> Self {
        ZPoly { coeffs: IntVec::init(0), length: 0 }
    }

    #[inline]
    pub fn one() -> Self {
        ZPoly::from_raw(vec![SmallOrBig::one()])
    }

    /// Build from coefficients lowest-degree first, trimming trailing
    /// zeros to restore the length invariant.
    pub fn from_raw(coeffs: Vec<SmallOrBig>) -> Self {
        let mut length = coeffs.len();
        while length > 0 && coeffs[length - 1].is_zero() {
            length -= 1;
        }
        ZPoly { coeffs: IntVec::from_raw(coeffs), length }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ZPoly { coeffs: IntVec::init(capacity), length: 0 }
    }

    /// Grow the backing buffer to at least `n` slots, power-of-two growth.
    pub fn fit_length(&mut self, n: usize) {
        if self.coeffs.len() >= n {
            return;
        }
        let mut new_alloc = self.coeffs.len().max(1);
        while new_alloc < n {
            new_alloc *= 2;
        }
        let mut grown = IntVec::init(new_alloc);
        grown.set_range(0, &self.coeffs[..self.length]);
        self.coeffs = grown;
    }

    fn normalize(&mut self) {
        while self.length > 0 && self.coeffs[self.length - 1].is_zero() {
            self.length -= 1;
        }
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn alloc(&self) -> usize {
        self.coeffs.len()
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        if self.length == 0 { None } else { Some(self.length - 1) }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.length == 0
    }

    pub fn is_one(&self) -> bool {
        self.length == 1 && self.coeffs[0].is_one()
    }

    pub fn as_slice(&self) -> &[SmallOrBig] {
        &self.coeffs[..self.length]
    }

    pub fn coeff(&self, i: usize) -> SmallOrBig {
        if i < self.length { self.coeffs[i].clone() } else { SmallOrBig::zero() }
    }

    pub fn set_coeff(&mut self, i: usize, value: SmallOrBig) {
        if i >= self.alloc() {
            self.fit_length(i + 1);
        }
        if i >= self.length {
            for j in self.length..i {
                self.coeffs.set_range(j, &[SmallOrBig::zero()]);
            }
            self.length = i + 1;
            self.coeffs.set_range(i, std::slice::from_ref(&value));
        } else {
            self.coeffs.set_range(i, std::slice::from_ref(&value));
        }
        self.normalize();
    }

    pub fn leading_coeff(&self) -> SmallOrBig {
        if self.length == 0 { SmallOrBig::zero() } else { self.coeffs[self.length - 1].clone() }
    }

    /// Evaluate at `x` by Horner's rule.
    pub fn evaluate(&self, x: &SmallOrBig) -> SmallOrBig {
        let mut acc = SmallOrBig::zero();
        for c in self.as_slice().iter().rev() {
            acc = acc.mul(x).add(c);
        }
        acc
    }
}

impl fmt::Display for ZPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.length)?;
        for c in self.as_slice() {
            write!(f, "  {}", c)?;
        }
        Ok(())
    }
}

impl FromStr for ZPoly {
    type Err = TalusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let len: usize = parts
            .next()
            .ok_or_else(|| TalusError::ParseError("empty input".to_string()))?
            .parse()
            .map_err(|_| TalusError::ParseError("invalid length".to_string()))?;
        let mut coeffs = Vec::with_capacity(len);
        for _ in 0..len {
            let tok = parts
                .next()
                .ok_or_else(|| TalusError::ParseError("truncated polynomial".to_string()))?;
            coeffs.push(tok.parse::<SmallOrBig>()?);
        }
        if parts.next().is_some() {
            return Err(TalusError::ParseError("trailing tokens".to_string()));
        }
        Ok(ZPoly::from_raw(coeffs))
    }
}

impl<T> From<Vec<T>> for ZPoly
where
    T: Into<SmallOrBig>,
{
    fn from(coeffs: Vec<T>) -> Self {
        ZPoly::from_raw(coeffs.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        let p = ZPoly::from_raw(vec![SmallOrBig::from(1i64), SmallOrBig::from(0i64), SmallOrBig::from(0i64)]);
        assert_eq!(p.length(), 1);
    }

    #[test]
    fn evaluate_matches_horner_by_hand() {
        let p = ZPoly::from(vec![1i64, 2, 3]); // 1 + 2x + 3x^2
        assert_eq!(p.evaluate(&SmallOrBig::from(2i64)), SmallOrBig::from(17i64));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let p = ZPoly::from(vec![1i64, -2, 3]);
        let text = p.to_string();
        let parsed: ZPoly = text.parse().unwrap();
        assert_eq!(p, parsed);
    }
}
