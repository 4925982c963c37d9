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

//! Division of integer polynomials: basecase long division (with an
//! optional exactness check), a chunked divide-and-conquer variant,
//! leading-coefficient pseudo-division, and the `divides` exact-division
//! test as a small state machine.

use crate::ZPoly;
use talus_base::{SmallOrBig, TalusError, TalusResult};

/// Below this quotient length, divide-and-conquer division degrades to a
/// single basecase pass over the whole dividend.
const DIVCONQUER_THRESHOLD: usize = 16;

fn trim(v: &mut Vec<SmallOrBig>) {
    while let Some(last) = v.last() {
        if last.is_zero() {
            v.pop();
        } else {
            break;
        }
    }
}

fn is_zero_vec(v: &[SmallOrBig]) -> bool {
    v.iter().all(|c| c.is_zero())
}

/// Schoolbook long division. `exact = true` requires every leading-term
/// division to be exact, failing with `InexactDivision` otherwise; `exact
/// = false` floors each quotient coefficient.
pub(crate) fn divrem_basecase(
    a: &[SmallOrBig],
    b: &[SmallOrBig],
    exact: bool,
) -> TalusResult<(Vec<SmallOrBig>, Vec<SmallOrBig>)> {
    if b.is_empty() {
        return Err(TalusError::DivisionByZero);
    }
    let len_b = b.len();
    let lead_b = b[len_b - 1].clone();
    let mut r = a.to_vec();
    trim(&mut r);
    if r.len() < len_b {
        return Ok((Vec::new(), r));
    }
    let qlen = r.len() - len_b + 1;
    let mut q = vec![SmallOrBig::zero(); qlen];
    while r.len() >= len_b && !is_zero_vec(&r) {
        let deg_r = r.len() - 1;
        let shift = deg_r - (len_b - 1);
        let lead_r = r[deg_r].clone();
        let qc = if exact { lead_r.div_exact(&lead_b)? } else { lead_r.div_floor(&lead_b)? };
        if qc.is_zero() && !exact {
            // Floor division rounded the leading term to zero: the
            // remaining dividend already has degree < deg(B).
            break;
        }
        q[shift] = qc.clone();
        for i in 0..len_b {
            r[shift + i] = r[shift + i].sub(&qc.mul(&b[i]));
        }
        trim(&mut r);
    }
    if exact && !r.is_empty() {
        return Err(TalusError::InexactDivision);
    }
    Ok((q, r))
}

/// Chunked divide-and-conquer division: repeatedly run basecase division
/// over a sliding window of at most `2*len(B)-1` dividend coefficients,
/// bounding the cost of each schoolbook pass instead of running one over
/// the whole dividend.
pub(crate) fn divrem_divconquer(a: &[SmallOrBig], b: &[SmallOrBig]) -> TalusResult<(Vec<SmallOrBig>, Vec<SmallOrBig>)> {
    if b.is_empty() {
        return Err(TalusError::DivisionByZero);
    }
    let len_b = b.len();
    if a.len() < len_b {
        return Ok((Vec::new(), a.to_vec()));
    }
    let qlen = a.len() - len_b + 1;
    if qlen < DIVCONQUER_THRESHOLD {
        return divrem_basecase(a, b, false);
    }

    let mut quotient = vec![SmallOrBig::zero(); qlen];
    let mut remaining = a.to_vec();
    while remaining.len() >= len_b {
        let window = remaining.len().min(2 * len_b - 1);
        let start = remaining.len() - window;
        let (qc, rc) = divrem_basecase(&remaining[start..], b, false)?;
        for (i, c) in qc.iter().enumerate() {
            quotient[start + i] = quotient[start + i].add(c);
        }
        let mut next = remaining[..start].to_vec();
        next.extend(rc);
        trim(&mut next);
        remaining = next;
    }
    trim(&mut quotient);
    Ok((quotient, remaining))
}

/// Cohen's pseudo-division: returns `(Q, R, d)` with
/// `lead(B)^d * A = Q*B + R`, `d = max(0, len(A) - len(B) + 1)`.
pub(crate) fn pseudo_divrem(a: &[SmallOrBig], b: &[SmallOrBig]) -> (Vec<SmallOrBig>, Vec<SmallOrBig>, u64) {
    let len_b = b.len();
    let lead_b = b[len_b - 1].clone();
    let mut r = a.to_vec();
    trim(&mut r);
    let d_total: u64 = if r.len() >= len_b { (r.len() - len_b + 1) as u64 } else { 0 };
    let mut q: Vec<SmallOrBig> = Vec::new();
    let mut e: i64 = d_total as i64;

    while r.len() >= len_b && !is_zero_vec(&r) {
        let deg_r = r.len() - 1;
        let shift = deg_r - (len_b - 1);
        let lead_r = r[deg_r].clone();

        for c in q.iter_mut() {
            *c = c.mul(&lead_b);
        }
        if q.len() <= shift {
            q.resize(shift + 1, SmallOrBig::zero());
        }
        q[shift] = q[shift].add(&lead_r);

        for c in r.iter_mut() {
            *c = c.mul(&lead_b);
        }
        for i in 0..len_b {
            r[shift + i] = r[shift + i].sub(&lead_r.mul(&b[i]));
        }
        trim(&mut r);
        e -= 1;
    }

    if e > 0 {
        let scale = lead_b.pow_unsigned(e as u64);
        for c in q.iter_mut() {
            *c = c.mul(&scale);
        }
        for c in r.iter_mut() {
            *c = c.mul(&scale);
        }
    }
    trim(&mut q);
    (q, r, d_total)
}

impl ZPoly {
    /// Exact or floor division with remainder, dispatching to the
    /// divide-and-conquer variant above a length threshold.
    pub fn divrem(&self, other: &ZPoly) -> TalusResult<(ZPoly, ZPoly)> {
        if other.is_zero() {
            return Err(TalusError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((ZPoly::zero(), ZPoly::zero()));
        }
        let (q, r) = if self.length() >= 64 {
            divrem_divconquer(self.as_slice(), other.as_slice())?
        } else {
            divrem_basecase(self.as_slice(), other.as_slice(), false)?
        };
        Ok((ZPoly::from_raw(q), ZPoly::from_raw(r)))
    }

    /// Exact division; fails with `InexactDivision` if `other` does not
    /// divide `self` exactly.
    pub fn div_exact(&self, other: &ZPoly) -> TalusResult<ZPoly> {
        if other.is_zero() {
            return Err(TalusError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(ZPoly::zero());
        }
        let (q, r) = divrem_basecase(self.as_slice(), other.as_slice(), true)?;
        debug_assert!(r.is_empty());
        Ok(ZPoly::from_raw(q))
    }

    /// `lead(B)^d * self = Q*other + R`.
    pub fn pseudo_divrem(&self, other: &ZPoly) -> TalusResult<(ZPoly, ZPoly, u64)> {
        if other.is_zero() {
            return Err(TalusError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((ZPoly::zero(), ZPoly::zero(), 0));
        }
        let (q, r, d) = pseudo_divrem(self.as_slice(), other.as_slice());
        Ok((ZPoly::from_raw(q), ZPoly::from_raw(r), d))
    }

    /// Exact-division test as a small state machine:
    /// `start -> check-constant -> check-value-at-1 -> long-divide-exact`.
    pub fn divides(&self, other: &ZPoly) -> TalusResult<Option<ZPoly>> {
        let a = self;
        let b = other;
        if b.is_zero() {
            return Err(TalusError::DivisionByZero);
        }
        if a.is_zero() {
            return Ok(Some(ZPoly::zero()));
        }
        if a.length() < b.length() {
            return Ok(None);
        }
        // check-constant
        if a.coeff(0).div_exact(&b.coeff(0)).is_err() && !(a.coeff(0).is_zero() && b.coeff(0).is_zero()) {
            return Ok(None);
        }
        // check-value-at-1
        let one = SmallOrBig::one();
        let a1 = a.evaluate(&one);
        let b1 = b.evaluate(&one);
        if !b1.is_zero() && a1.div_exact(&b1).is_err() {
            return Ok(None);
        }
        // long-divide-exact
        match divrem_basecase(a.as_slice(), b.as_slice(), true) {
            Ok((q, _)) => Ok(Some(ZPoly::from_raw(q))),
            Err(TalusError::InexactDivision) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_division_recovers_factor() {
        let a = ZPoly::from(vec![-1i64, 0, 0, 1]); // x^3 - 1
        let b = ZPoly::from(vec![-1i64, 1]); // x - 1
        let q = a.div_exact(&b).unwrap();
        assert_eq!(q, ZPoly::from(vec![1i64, 1, 1])); // 1 + x + x^2
    }

    #[test]
    fn divides_true_case() {
        let a = ZPoly::from(vec![-1i64, 0, 1]); // x^2 - 1
        let b = ZPoly::from(vec![-1i64, 1]); // x - 1
        let q = a.divides(&b);
        // divides(A=x^2-1, B=x-1): B | A, quotient x+1
        assert_eq!(q.unwrap(), Some(ZPoly::from(vec![1i64, 1])));
    }

    #[test]
    fn divides_false_case() {
        let a = ZPoly::from(vec![1i64, 0, 1]); // x^2 + 1
        let b = ZPoly::from(vec![-1i64, 1]); // x - 1
        assert_eq!(a.divides(&b).unwrap(), None);
    }

    #[test]
    fn pseudo_divrem_identity_holds() {
        let a = ZPoly::from(vec![1i64, 1, 1]);
        let b = ZPoly::from(vec![1i64, 2]);
        let (q, r, d) = a.pseudo_divrem(&b).unwrap();
        let lead_b_pow = b.leading_coeff().pow_unsigned(d);
        let lhs = a.scalar_mul(&lead_b_pow);
        let rhs = q.mul(&b).add(&r);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn divrem_zero_divisor_errors() {
        let a = ZPoly::from(vec![1i64, 1]);
        assert_eq!(a.divrem(&ZPoly::zero()), Err(TalusError::DivisionByZero));
    }

    #[test]
    fn divconquer_matches_basecase_on_large_input() {
        let a = ZPoly::from((0..100).map(|i| i as i64 + 1).collect::<Vec<_>>());
        let b = ZPoly::from(vec![1i64, 3, 1]);
        let (q1, r1) = a.divrem(&b).unwrap();
        let (q2, r2) = divrem_basecase(a.as_slice(), b.as_slice(), false).unwrap();
        assert_eq!(q1.as_slice(), q2.as_slice());
        assert_eq!(r1.as_slice(), r2.as_slice());
    }
}
