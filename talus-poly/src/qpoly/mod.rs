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

//! Dense univariate polynomials over the rationals, represented as an
//! integer numerator polynomial over a single shared integer
//! denominator: `coeffs(x) / den`.

pub mod arithmetic;

use std::fmt;
use std::str::FromStr;
use talus_base::{SmallOrBig, TalusError, TalusResult};

use crate::ZPoly;

/// Canonical form: `den > 0`; `num` obeys `ZPoly`'s own trailing-zero
/// invariant; `gcd(content(num), den) == 1`; `num` zero implies `den ==
/// 1`.
#[derive(Debug, Clone)]
pub struct QPoly {
    num: ZPoly,
    den: SmallOrBig,
}

impl PartialEq for QPoly {
    fn eq(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den
    }
}
impl Eq for QPoly {}

impl QPoly {
    pub fn zero() -> Self {
        QPoly { num: ZPoly::zero(), den: SmallOrBig::one() }
    }

    pub fn one() -> Self {
        QPoly { num: ZPoly::one(), den: SmallOrBig::one() }
    }

    /// Build from a raw numerator and denominator, restoring canonical
    /// form. `den == 0` is a programming error (use `QPoly::div` for
    /// fallible division instead).
    pub fn from_parts(num: ZPoly, den: SmallOrBig) -> Self {
        assert!(!den.is_zero(), "QPoly denominator must be nonzero");
        let mut q = QPoly { num, den };
        q.canonicalise();
        q
    }

    /// Restore the canonical-form invariants after a raw mutation:
    /// `den > 0`, `gcd(content(num), den) == 1`, `num == 0 => den == 1`.
    fn canonicalise(&mut self) {
        if self.num.is_zero() {
            self.den = SmallOrBig::one();
            return;
        }
        let content = self.num.content();
        let mut g = content.gcd(&self.den);
        if self.den.sign() < 0 {
            g = g.neg();
        }
        if !g.is_one() {
            let coeffs: Vec<SmallOrBig> =
                self.num.as_slice().iter().map(|c| c.div_exact(&g).expect("g divides content exactly")).collect();
            self.num = ZPoly::from_raw(coeffs);
            self.den = self.den.div_exact(&g).expect("g divides den exactly");
        }
    }

    pub fn numerator(&self) -> &ZPoly {
        &self.num
    }

    pub fn denominator(&self) -> &SmallOrBig {
        &self.den
    }

    pub fn length(&self) -> usize {
        self.num.length()
    }

    pub fn degree(&self) -> Option<usize> {
        self.num.degree()
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }

    pub fn coeff(&self, i: usize) -> SmallOrBig {
        self.num.coeff(i)
    }

    /// `self(x)`, a rational value represented here as a length-matching
    /// `(numerator value, denominator)` pair since this crate has no
    /// standalone rational scalar type.
    pub fn evaluate(&self, x: &SmallOrBig) -> (SmallOrBig, SmallOrBig) {
        (self.num.evaluate(x), self.den.clone())
    }
}

impl fmt::Display for QPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.num)?;
        write!(f, " / {}", self.den)
    }
}

impl FromStr for QPoly {
    type Err = TalusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num_part, den_part) = s
            .split_once('/')
            .ok_or_else(|| TalusError::ParseError("missing '/' separator".to_string()))?;
        let num: ZPoly = num_part.trim().parse()?;
        let den: SmallOrBig = den_part.trim().parse()?;
        if den.is_zero() {
            return Err(TalusError::ParseError("zero denominator".to_string()));
        }
        Ok(QPoly::from_parts(num, den))
    }
}

impl From<ZPoly> for QPoly {
    fn from(num: ZPoly) -> Self {
        QPoly::from_parts(num, SmallOrBig::one())
    }
}
