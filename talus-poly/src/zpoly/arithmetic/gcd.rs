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

//! Three gcd strategies (classical primitive Euclidean, evaluation-point
//! heuristic, and multi-modulus CRT) behind a size-based dispatcher, per
//! the algorithm-selection style used throughout this crate's
//! multiplication ladder.

use super::divrem::pseudo_divrem;
use crate::ZPoly;
use talus_base::SmallOrBig;
use talus_zn::NmodCtx;

/// Below this length, go straight to the classical subresultant-style
/// Euclidean algorithm rather than trying the heuristic first.
const HEURISTIC_MIN_LENGTH: usize = 4;
/// Above this combined coefficient bit budget, the heuristic's evaluation
/// point would need to be too large to pay off; fall back to modular gcd.
const HEURISTIC_BIT_BUDGET: u64 = 256;

fn content_of(v: &[SmallOrBig]) -> SmallOrBig {
    talus_vec::IntVec::from(v.to_vec()).content()
}

fn primitive(v: &[SmallOrBig]) -> Vec<SmallOrBig> {
    let c = content_of(v);
    if c.is_zero() || c.is_one() {
        return v.to_vec();
    }
    v.iter().map(|x| x.div_exact(&c).expect("content divides exactly")).collect()
}

fn trim(v: &mut Vec<SmallOrBig>) {
    while let Some(last) = v.last() {
        if last.is_zero() {
            v.pop();
        } else {
            break;
        }
    }
}

fn make_monic_sign(v: Vec<SmallOrBig>) -> Vec<SmallOrBig> {
    if v.is_empty() {
        return v;
    }
    if v.last().unwrap().sign() < 0 {
        v.into_iter().map(|c| c.neg()).collect()
    } else {
        v
    }
}

/// Classical Euclidean algorithm over `ZPoly`, taking primitive parts at
/// each remainder step (a primitive-PRS gcd, simpler than full
/// subresultant bookkeeping but producing the same primitive gcd).
pub(crate) fn gcd_subresultant(a: &[SmallOrBig], b: &[SmallOrBig]) -> Vec<SmallOrBig> {
    let mut r0 = primitive(a);
    let mut r1 = primitive(b);
    trim(&mut r0);
    trim(&mut r1);
    if r1.is_empty() {
        return make_monic_sign(r0);
    }
    loop {
        if r1.is_empty() {
            return make_monic_sign(r0);
        }
        let (_, mut r2, _) = pseudo_divrem(&r0, &r1);
        trim(&mut r2);
        r2 = primitive(&r2);
        r0 = r1;
        r1 = r2;
    }
}

/// Evaluate both operands at `x = 2^k` for `k` calibrated to the
/// coefficients' bit size, take the integer gcd, then unpack balanced
/// base-`2^k` digits; verify by trial division since an unlucky
/// evaluation point can produce spurious cancellation.
pub(crate) fn gcd_heuristic(a: &[SmallOrBig], b: &[SmallOrBig]) -> Option<Vec<SmallOrBig>> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let bits_a = a.iter().map(|c| c.bit_length()).max().unwrap_or(0);
    let bits_b = b.iter().map(|c| c.bit_length()).max().unwrap_or(0);
    let len_a = a.len() as u64;
    let len_b = b.len() as u64;
    let carry = 64 - len_a.max(len_b).max(1).leading_zeros() as u64;
    let k = bits_a.max(bits_b) + carry + 2;

    let x = SmallOrBig::one().mul_2exp(k);
    let eval_a = ZPoly::from_raw(a.to_vec()).evaluate(&x);
    let eval_b = ZPoly::from_raw(b.to_vec()).evaluate(&x);
    let g = eval_a.gcd(&eval_b);
    if g.is_zero() {
        return None;
    }

    let max_len = a.len().max(b.len());
    let mut digits = Vec::with_capacity(max_len);
    let modulus = SmallOrBig::one().mul_2exp(k);
    let half = modulus.div_2exp_floor(1);
    let mut value = g;
    for _ in 0..max_len {
        let mut r = value.rem(&modulus).ok()?;
        if r.sign() < 0 {
            r = r.add(&modulus);
        }
        let digit = if r.cmp(&half) != std::cmp::Ordering::Less { r.sub(&modulus) } else { r };
        value = value.sub(&digit).div_exact(&modulus).ok()?;
        digits.push(digit);
    }
    trim(&mut digits);
    let candidate = make_monic_sign(primitive(&digits));
    if candidate.is_empty() {
        return None;
    }
    // Verify by trial division against both operands.
    let cand_poly = ZPoly::from_raw(candidate.clone());
    if ZPoly::from_raw(a.to_vec()).divides(&cand_poly).ok()?.is_some()
        && ZPoly::from_raw(b.to_vec()).divides(&cand_poly).ok()?.is_some()
    {
        Some(candidate)
    } else {
        None
    }
}

/// Reduce both operands modulo a growing set of word-size primes,
/// computing the modular gcd mod each and reconstructing via CRT until
/// the result stabilises.
pub(crate) fn gcd_modular(a: &[SmallOrBig], b: &[SmallOrBig]) -> Vec<SmallOrBig> {
    const PRIMES: [u64; 6] = [1_000_000_007, 1_000_000_009, 1_000_000_021, 1_000_000_033, 1_000_000_087, 1_000_000_093];

    let lc_gcd = content_of(&[a.last().cloned().unwrap_or_else(SmallOrBig::zero), b.last().cloned().unwrap_or_else(SmallOrBig::zero)]);
    let target_len = a.len().min(b.len());

    let mut best: Option<(Vec<SmallOrBig>, SmallOrBig)> = None;
    for &p in PRIMES.iter() {
        let ctx = NmodCtx::init(p).expect("PRIMES entries are nonzero");
        let ra: Vec<u64> = a.iter().map(|c| ctx.reduce(c).value()).collect();
        let rb: Vec<u64> = b.iter().map(|c| ctx.reduce(c).value()).collect();
        let g_mod = nmod_poly_gcd(&ra, &rb, p);
        if g_mod.len() > target_len + 1 {
            continue; // unlucky prime dividing a leading coefficient
        }

        match &mut best {
            None => {
                best = Some((g_mod.iter().map(|&v| SmallOrBig::from(v as i64)).collect(), SmallOrBig::from(p as i64)));
            }
            Some((acc, modulus)) => {
                if g_mod.len() > acc.len() {
                    // This prime was unlucky for earlier primes (spurious
                    // degree drop); restart accumulation from here.
                    *acc = g_mod.iter().map(|&v| SmallOrBig::from(v as i64)).collect();
                    *modulus = SmallOrBig::from(p as i64);
                    continue;
                }
                if g_mod.len() < acc.len() {
                    continue; // this prime is unlucky, skip it
                }
                let p_small = SmallOrBig::from(p as i64);
                for (i, c) in acc.iter_mut().enumerate() {
                    let r2 = SmallOrBig::from(g_mod[i] as i64);
                    *c = SmallOrBig::crt(c, modulus, &r2, &p_small);
                }
                *modulus = modulus.mul(&p_small);
            }
        }
    }

    let (residues, _) = best.unwrap_or((Vec::new(), SmallOrBig::one()));
    if residues.is_empty() {
        return Vec::new();
    }
    // Scale by the gcd of the leading coefficients to recover the exact
    // integer gcd (modular gcd is only determined up to a unit/content).
    let mut scaled = residues;
    if !lc_gcd.is_zero() && !lc_gcd.is_one() {
        for c in scaled.iter_mut() {
            *c = c.mul(&lc_gcd);
        }
    }
    make_monic_sign(primitive(&scaled))
}

fn nmod_poly_gcd(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    let mut r0 = a.to_vec();
    let mut r1 = b.to_vec();
    trim_u64(&mut r0);
    trim_u64(&mut r1);
    while !r1.is_empty() {
        let r2 = nmod_poly_rem(&r0, &r1, p);
        r0 = r1;
        r1 = r2;
    }
    // make monic
    if let Some(&lead) = r0.last() {
        if lead != 0 && lead != 1 {
            let ctx = NmodCtx::init(p).unwrap();
            let inv = ctx.new(lead).inv().expect("prime modulus, nonzero element").value();
            for c in r0.iter_mut() {
                *c = ((*c as u128 * inv as u128) % p as u128) as u64;
            }
        }
    }
    r0
}

fn nmod_poly_rem(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    if b.is_empty() {
        return a.to_vec();
    }
    let ctx = NmodCtx::init(p).expect("nonzero modulus");
    let lead_b_inv = ctx.new(*b.last().unwrap()).inv().expect("prime modulus").value();
    let mut r = a.to_vec();
    trim_u64(&mut r);
    while r.len() >= b.len() && !r.is_empty() {
        let shift = r.len() - b.len();
        let lead_r = *r.last().unwrap();
        let q = ((lead_r as u128 * lead_b_inv as u128) % p as u128) as u64;
        for (i, &bi) in b.iter().enumerate() {
            let sub = ((q as u128 * bi as u128) % p as u128) as u64;
            let idx = shift + i;
            r[idx] = (r[idx] + p - sub) % p;
        }
        trim_u64(&mut r);
    }
    r
}

fn trim_u64(v: &mut Vec<u64>) {
    while matches!(v.last(), Some(0)) {
        v.pop();
    }
}

impl ZPoly {
    /// Dispatches to the classical, heuristic, or modular gcd algorithm
    /// depending on operand size and coefficient magnitude.
    pub fn gcd(&self, other: &ZPoly) -> ZPoly {
        if self.is_zero() {
            return other.primitive_part();
        }
        if other.is_zero() {
            return self.primitive_part();
        }
        let a = self.as_slice();
        let b = other.as_slice();
        if a.len().max(b.len()) < HEURISTIC_MIN_LENGTH {
            return ZPoly::from_raw(gcd_subresultant(a, b));
        }
        let bits = a.iter().chain(b.iter()).map(|c| c.bit_length()).max().unwrap_or(0);
        if bits <= HEURISTIC_BIT_BUDGET {
            if let Some(g) = gcd_heuristic(a, b) {
                return ZPoly::from_raw(g);
            }
        }
        ZPoly::from_raw(gcd_modular(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_scenario_three() {
        // A = (x-1)(x-2)(x+3) = x^3 - 7x + 6
        let a = ZPoly::from(vec![6i64, -7, 0, 1]);
        // B = (x-2)(x+3)(x+5) = x^3 + 6x^2 + 7x - 30
        let b = ZPoly::from(vec![-30i64, 7, 6, 1]);
        let g = a.gcd(&b);
        // (x-2)(x+3) = x^2 + x - 6
        assert_eq!(g, ZPoly::from(vec![-6i64, 1, 1]));
    }

    #[test]
    fn gcd_with_zero_is_primitive_part() {
        let a = ZPoly::from(vec![4i64, 6, 10]);
        assert_eq!(a.gcd(&ZPoly::zero()), a.primitive_part());
    }

    #[test]
    fn gcd_subresultant_matches_modular_dispatch() {
        let a = ZPoly::from(vec![-1i64, 0, 1]); // x^2 - 1
        let b = ZPoly::from(vec![-1i64, 1]); // x - 1
        assert_eq!(a.gcd(&b), b.clone());
    }

    #[test]
    fn gcd_heuristic_matches_classical_on_small_input() {
        let a = ZPoly::from(vec![6i64, -7, 0, 1]);
        let b = ZPoly::from(vec![-30i64, 7, 6, 1]);
        let via_classical = ZPoly::from_raw(gcd_subresultant(a.as_slice(), b.as_slice()));
        let via_heuristic = ZPoly::from_raw(gcd_heuristic(a.as_slice(), b.as_slice()).unwrap());
        assert_eq!(via_classical, via_heuristic);
    }
}
