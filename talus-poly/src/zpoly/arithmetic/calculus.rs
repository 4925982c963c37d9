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
use talus_base::SmallOrBig;

impl ZPoly {
    /// Formal derivative `d/dx`.
    pub fn derivative(&self) -> ZPoly {
        if self.length() <= 1 {
            return ZPoly::zero();
        }
        let coeffs: Vec<SmallOrBig> = self.as_slice()[1..]
            .iter()
            .enumerate()
            .map(|(i, c)| c.mul(&SmallOrBig::from((i + 1) as i64)))
            .collect();
        ZPoly::from_raw(coeffs)
    }

    /// Formal antiderivative with zero constant term. Note this stays in
    /// `ZPoly` only when every division is exact; non-exact coefficients
    /// belong to `QPoly::integral` instead.
    pub fn integral_exact(&self) -> talus_base::TalusResult<ZPoly> {
        if self.is_zero() {
            return Ok(ZPoly::zero());
        }
        let mut coeffs = vec![SmallOrBig::zero()];
        for (i, c) in self.as_slice().iter().enumerate() {
            coeffs.push(c.div_exact(&SmallOrBig::from((i + 1) as i64))?);
        }
        Ok(ZPoly::from_raw(coeffs))
    }

    /// Multiply by `x^k`.
    pub fn shift_left(&self, k: usize) -> ZPoly {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut coeffs = vec![SmallOrBig::zero(); k];
        coeffs.extend_from_slice(self.as_slice());
        ZPoly::from_raw(coeffs)
    }

    /// Floor-divide by `x^k`, discarding the bottom `k` coefficients.
    pub fn shift_right(&self, k: usize) -> ZPoly {
        if k >= self.length() {
            return ZPoly::zero();
        }
        ZPoly::from_raw(self.as_slice()[k..].to_vec())
    }

    /// Reverse the coefficient list up to length `n` (used for series
    /// reversion and palindromic-factor tests); pads with zeros if
    /// `n > length()`.
    pub fn reverse(&self, n: usize) -> ZPoly {
        let mut coeffs = vec![SmallOrBig::zero(); n];
        for (i, c) in self.as_slice().iter().enumerate() {
            if i >= n {
                break;
            }
            coeffs[n - 1 - i] = c.clone();
        }
        ZPoly::from_raw(coeffs)
    }

    /// `gcd` of the coefficients; `0` for the zero polynomial.
    pub fn content(&self) -> SmallOrBig {
        talus_vec::IntVec::from(self.as_slice().to_vec()).content()
    }

    /// `self` divided by its content; the zero polynomial is its own
    /// primitive part.
    pub fn primitive_part(&self) -> ZPoly {
        if self.is_zero() {
            return ZPoly::zero();
        }
        let c = self.content();
        if c.is_one() {
            return self.clone();
        }
        let coeffs: talus_base::TalusResult<Vec<SmallOrBig>> =
            self.as_slice().iter().map(|x| x.div_exact(&c)).collect();
        ZPoly::from_raw(coeffs.expect("content divides every coefficient exactly"))
    }
}
