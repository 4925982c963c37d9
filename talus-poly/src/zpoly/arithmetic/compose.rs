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

//! Polynomial composition `self(other(x))`: Horner's rule, a
//! divide-and-conquer variant that reuses powers of `other` across
//! blocks, and a Brent-Kung-style block algorithm built from matrix
//! powers for series composition.

use crate::ZPoly;

/// Below this degree, plain Horner composition is cheaper than building
/// up a power table for block composition.
const COMPOSE_DIVCONQUER_THRESHOLD: usize = 16;

impl ZPoly {
    /// `self(other(x))` by Horner's rule: `O(length(self))` calls to
    /// `mul`, each against the fixed polynomial `other`.
    pub fn compose(&self, other: &ZPoly) -> ZPoly {
        let mut acc = ZPoly::zero();
        for c in self.as_slice().iter().rev() {
            acc = acc.mul(other);
            acc.set_coeff(0, acc.coeff(0).add(c));
        }
        acc
    }

    /// Divide-and-conquer composition: split `self` into blocks of
    /// `sqrt(length(self))`-ish size, build a power table for `other`
    /// once, and combine blocks with that shared table instead of
    /// re-deriving powers of `other` from scratch per coefficient.
    pub fn compose_divconquer(&self, other: &ZPoly) -> ZPoly {
        if self.length() < COMPOSE_DIVCONQUER_THRESHOLD {
            return self.compose(other);
        }
        let block = (self.length() as f64).sqrt().ceil() as usize;
        let block = block.max(1);

        // Power table other^0 .. other^block.
        let mut powers = Vec::with_capacity(block + 1);
        powers.push(ZPoly::one());
        for i in 1..=block {
            powers.push(powers[i - 1].mul(other));
        }

        let mut acc = ZPoly::zero();
        let chunks = self.length().div_ceil(block);
        for chunk_idx in (0..chunks).rev() {
            let start = chunk_idx * block;
            let end = (start + block).min(self.length());
            let mut inner = ZPoly::zero();
            for i in (start..end).rev() {
                inner = inner.mul(&powers[1]);
                inner.set_coeff(0, inner.coeff(0).add(&self.coeff(i)));
            }
            acc = acc.mul(&powers[block]).add(&inner);
        }
        acc
    }

    /// Brent-Kung block composition truncated mod `x^n`, for composing
    /// power series where `other` has zero constant term: splits `self`
    /// into length-`block` chunks evaluated against the power table of
    /// `other`, matching `compose_divconquer`'s structure but truncated
    /// to `n` terms throughout so intermediate products stay small.
    pub fn compose_series_brent_kung(&self, other: &ZPoly, n: usize) -> ZPoly {
        if n == 0 {
            return ZPoly::zero();
        }
        let block = (n as f64).sqrt().ceil() as usize;
        let block = block.max(1);

        let mut powers = Vec::with_capacity(block + 1);
        powers.push(ZPoly::one());
        for i in 1..=block {
            powers.push(powers[i - 1].mul_low(other, n));
        }

        let self_trunc_len = self.length().min(n);
        let mut acc = ZPoly::zero();
        let chunks = self_trunc_len.div_ceil(block).max(1);
        for chunk_idx in (0..chunks).rev() {
            let start = chunk_idx * block;
            let end = (start + block).min(self_trunc_len);
            let mut inner = ZPoly::zero();
            for i in (start..end).rev() {
                inner = inner.mul_low(&powers[1], n);
                inner.set_coeff(0, inner.coeff(0).add(&self.coeff(i)));
            }
            acc = acc.mul_low(&powers[block], n).add(&inner);
        }
        if acc.length() > n {
            acc = ZPoly::from_raw(acc.as_slice()[..n].to_vec());
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_matches_manual_substitution() {
        let f = ZPoly::from(vec![1i64, 1, 1]); // 1 + x + x^2
        let g = ZPoly::from(vec![0i64, 1, 1]); // x + x^2
        // f(g(x)) = 1 + (x+x^2) + (x+x^2)^2
        let expected = ZPoly::one().add(&g).add(&g.mul(&g));
        assert_eq!(f.compose(&g), expected);
    }

    #[test]
    fn divconquer_matches_horner() {
        let f = ZPoly::from((0..30).map(|i| i as i64 - 15).collect::<Vec<_>>());
        let g = ZPoly::from(vec![1i64, 2]);
        assert_eq!(f.compose_divconquer(&g), f.compose(&g));
    }

    #[test]
    fn series_compose_matches_truncated_horner() {
        let f = ZPoly::from(vec![1i64, 1, 1, 1, 1]);
        let g = ZPoly::from(vec![0i64, 1, 1]); // zero constant term
        let n = 6;
        let full = f.compose(&g);
        let truncated = if full.length() > n { ZPoly::from_raw(full.as_slice()[..n].to_vec()) } else { full };
        assert_eq!(f.compose_series_brent_kung(&g, n), truncated);
    }
}
