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

//! Signature `(r1, r2)` — the number of real and pairs of complex roots —
//! via the pseudo-remainder (Sturm) sequence of a squarefree polynomial
//! and its derivative.

use super::divrem::pseudo_divrem;
use crate::ZPoly;
use talus_base::SmallOrBig;

fn trim(v: &mut Vec<SmallOrBig>) {
    while let Some(last) = v.last() {
        if last.is_zero() {
            v.pop();
        } else {
            break;
        }
    }
}

impl ZPoly {
    /// `(r1, r2)`: number of real roots and number of complex-conjugate
    /// root pairs, counted without multiplicity via the number of sign
    /// changes in the principal subresultant coefficient sequence.
    ///
    /// Requires `self` to be squarefree; degenerate or zero input yields
    /// `(0, 0)`.
    pub fn signature(&self) -> (i64, i64) {
        let n = match self.degree() {
            Some(d) if d > 0 => d,
            _ => return (0, 0),
        };

        // Sturm-like pseudo-remainder sequence: p0 = self, p1 = self',
        // p_{k+1} = -rem(p_{k-1}, p_k) (pseudo-remainder, sign tracked
        // via the sequence of leading coefficients).
        let mut seq: Vec<Vec<SmallOrBig>> = Vec::new();
        seq.push(self.as_slice().to_vec());
        seq.push(self.derivative().as_slice().to_vec());
        loop {
            let len = seq.len();
            let (_, mut r, _) = pseudo_divrem(&seq[len - 2], &seq[len - 1]);
            trim(&mut r);
            if r.is_empty() {
                break;
            }
            let negated: Vec<SmallOrBig> = r.into_iter().map(|c| c.neg()).collect();
            seq.push(negated);
            if seq.len() > n + 2 {
                break; // squarefree input terminates well within this bound
            }
        }

        // Sign changes of the sequence evaluated towards +infinity versus
        // -infinity, each compared against the leading-coefficient sign
        // at even/odd degree parity (the standard Sturm sign-at-infinity
        // trick, avoiding arbitrary evaluation points).
        let sign_at = |coeffs: &[SmallOrBig], at_plus_infinity: bool| -> i32 {
            if coeffs.is_empty() {
                return 0;
            }
            let lead = coeffs[coeffs.len() - 1].sign();
            let deg = coeffs.len() - 1;
            if at_plus_infinity || deg % 2 == 0 { lead } else { -lead }
        };

        let signs_plus: Vec<i32> = seq.iter().map(|p| sign_at(p, true)).collect();
        let signs_minus: Vec<i32> = seq.iter().map(|p| sign_at(p, false)).collect();

        let changes = |signs: &[i32]| -> i64 {
            let mut count = 0i64;
            let mut prev = 0i32;
            for &s in signs {
                if s == 0 {
                    continue;
                }
                if prev != 0 && prev != s {
                    count += 1;
                }
                prev = s;
            }
            count
        };

        let v_minus = changes(&signs_minus);
        let v_plus = changes(&signs_plus);
        let r1 = v_minus - v_plus;
        let r2 = (n as i64 - r1) / 2;
        (r1, r2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_scenario_eight() {
        // x^3 - 2x - 5 has one real root and one complex-conjugate pair.
        let f = ZPoly::from(vec![-5i64, -2, 0, 1]);
        assert_eq!(f.signature(), (1, 1));
    }

    #[test]
    fn signature_of_constant_is_zero() {
        assert_eq!(ZPoly::from(vec![3i64]).signature(), (0, 0));
    }

    #[test]
    fn signature_linear_has_one_real_root() {
        let f = ZPoly::from(vec![-1i64, 1]); // x - 1
        assert_eq!(f.signature(), (1, 0));
    }
}
