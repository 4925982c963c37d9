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

//! Power series identities truncated modulo `x^n`, all built from
//! [`QPoly::inv_series_newton`] (the only primitive that needs a
//! coefficient recurrence; every other identity here differentiates,
//! multiplies by a reciprocal series, and integrates back).

use crate::{QPoly, ZPoly};
use talus_base::{SmallOrBig, TalusError, TalusResult};

fn trunc(p: &QPoly, n: usize) -> QPoly {
    if p.numerator().length() <= n {
        return p.clone();
    }
    QPoly::from_parts(ZPoly::from_raw(p.numerator().as_slice()[..n].to_vec()), p.denominator().clone())
}

fn mul_trunc(a: &QPoly, b: &QPoly, n: usize) -> QPoly {
    trunc(&a.mul(b), n)
}

fn constant(c: i64) -> QPoly {
    QPoly::from_parts(ZPoly::from_raw(vec![SmallOrBig::from(c)]), SmallOrBig::one())
}

impl QPoly {
    /// Reciprocal power series truncated mod `x^n`. Requires a nonzero
    /// constant term (every nonzero rational is invertible, unlike the
    /// `ZPoly` version which is restricted to `+-1`).
    pub fn inv_series_newton(&self, n: usize) -> TalusResult<QPoly> {
        if n == 0 {
            return Ok(QPoly::zero());
        }
        let c0 = self.coeff(0);
        if c0.is_zero() {
            return Err(TalusError::ConstantTermNotInvertible);
        }
        let g0 = QPoly::from_parts(ZPoly::from_raw(vec![self.denominator().clone()]), c0.clone());
        let mut g = vec![g0];
        for k in 1..n {
            let mut acc = QPoly::zero();
            for i in 1..=k {
                let fi = self.coeff_rational(i);
                if fi.is_zero() {
                    continue;
                }
                acc = acc.add(&fi.mul(&g[k - i]));
            }
            let gk = acc.neg().mul(&g[0]);
            g.push(gk);
        }
        let mut result = QPoly::zero();
        for (i, c) in g.into_iter().enumerate() {
            result = result.add(&c.shift(i));
        }
        Ok(result)
    }

    /// The `i`-th coefficient as a standalone rational constant.
    fn coeff_rational(&self, i: usize) -> QPoly {
        QPoly::from_parts(ZPoly::from_raw(vec![self.coeff(i)]), self.denominator().clone())
    }

    /// Multiply by `x^k`.
    fn shift(&self, k: usize) -> QPoly {
        if k == 0 || self.is_zero() {
            return self.clone();
        }
        let mut coeffs = vec![SmallOrBig::zero(); k];
        coeffs.extend_from_slice(self.numerator().as_slice());
        QPoly::from_parts(ZPoly::from_raw(coeffs), self.denominator().clone())
    }

    fn const_term_is_zero(&self) -> bool {
        self.coeff(0).is_zero()
    }

    fn const_term_is_one(&self) -> bool {
        &self.coeff(0) == self.denominator()
    }

    /// `exp(self)` truncated mod `x^n`, via the basecase recurrence
    /// `g_k = (1/k) * sum_{j=1}^{k} j*f_j*g_{k-j}`, `g_0 = 1`. Requires a
    /// zero constant term.
    pub fn exp_series(&self, n: usize) -> TalusResult<QPoly> {
        if !self.const_term_is_zero() {
            return Err(TalusError::NonZeroConstantTerm);
        }
        if n == 0 {
            return Ok(QPoly::zero());
        }
        let mut g = vec![QPoly::one()];
        for k in 1..n {
            let mut acc = QPoly::zero();
            for j in 1..=k {
                let fj = self.coeff_rational(j);
                if fj.is_zero() {
                    continue;
                }
                acc = acc.add(&fj.scalar_mul(&SmallOrBig::from(j as i64)).mul(&g[k - j]));
            }
            g.push(acc.scalar_div(&SmallOrBig::from(k as i64)).expect("k is nonzero"));
        }
        let mut result = QPoly::zero();
        for (i, c) in g.into_iter().enumerate() {
            result = result.add(&c.shift(i));
        }
        Ok(result)
    }

    /// `log(self)` truncated mod `x^n`, via `log(f)' = f'/f` integrated
    /// back. Requires a unit (`1`) constant term.
    pub fn log_series(&self, n: usize) -> TalusResult<QPoly> {
        if !self.const_term_is_one() {
            return Err(TalusError::NonUnitConstantTerm);
        }
        if n <= 1 {
            return Ok(QPoly::zero());
        }
        let df = self.derivative();
        let inv_f = self.inv_series_newton(n - 1)?;
        let dlog = mul_trunc(&df, &inv_f, n - 1);
        Ok(dlog.integral())
    }

    /// `atan(self)` truncated mod `x^n`, via `atan(f)' = f'/(1+f^2)`.
    /// Requires a zero constant term.
    pub fn atan_series(&self, n: usize) -> TalusResult<QPoly> {
        if !self.const_term_is_zero() {
            return Err(TalusError::NonZeroConstantTerm);
        }
        if n <= 1 {
            return Ok(QPoly::zero());
        }
        let denom_series = constant(1).add(&self.sqr());
        let inv = denom_series.inv_series_newton(n - 1)?;
        let d = mul_trunc(&self.derivative(), &inv, n - 1);
        Ok(d.integral())
    }

    /// `atanh(self)` truncated mod `x^n`, via `atanh(f)' = f'/(1-f^2)`.
    pub fn atanh_series(&self, n: usize) -> TalusResult<QPoly> {
        if !self.const_term_is_zero() {
            return Err(TalusError::NonZeroConstantTerm);
        }
        if n <= 1 {
            return Ok(QPoly::zero());
        }
        let denom_series = constant(1).sub(&self.sqr());
        let inv = denom_series.inv_series_newton(n - 1)?;
        let d = mul_trunc(&self.derivative(), &inv, n - 1);
        Ok(d.integral())
    }

    /// Reciprocal-square-root series `1/sqrt(self)` truncated mod `x^n`,
    /// via the basecase recurrence derived from `g^2 * f = 1`. Requires
    /// a unit constant term.
    pub fn invsqrt_series(&self, n: usize) -> TalusResult<QPoly> {
        if !self.const_term_is_one() {
            return Err(TalusError::NonUnitConstantTerm);
        }
        if n == 0 {
            return Ok(QPoly::zero());
        }
        // g^2 = 1/f. Solve for g's coefficients from (g^2)*f = 1 order by
        // order: same shape as inv_series_newton but carrying g^2
        // instead of g through the recurrence, since g itself only
        // enters the equation squared.
        let inv_f = self.inv_series_newton(n)?;
        // g = sqrt(inv_f) as a formal power series with g_0 = 1: solve
        // via g_k = (1/2)*(h_k - sum_{i=1}^{k-1} g_i*g_{k-i}) where
        // h = inv_f, since (sum g_i x^i)^2 = h forces
        // 2*g_k = h_k - sum_{i=1}^{k-1} g_i * g_{k-i} for k>=1 (g_0=1).
        let h: Vec<SmallOrBig> = (0..n).map(|i| inv_f.coeff(i)).collect();
        let h_den = inv_f.denominator().clone();
        let mut g_num: Vec<QPoly> = vec![QPoly::one()];
        for k in 1..n {
            let mut conv = QPoly::zero();
            for i in 1..k {
                conv = conv.add(&g_num[i].mul(&g_num[k - i]));
            }
            let hk = QPoly::from_parts(ZPoly::from_raw(vec![h[k].clone()]), h_den.clone());
            let gk = hk.sub(&conv).scalar_div(&SmallOrBig::from(2i64)).expect("two is nonzero");
            g_num.push(gk);
        }
        let mut result = QPoly::zero();
        for (i, c) in g_num.into_iter().enumerate() {
            result = result.add(&c.shift(i));
        }
        Ok(result)
    }

    /// `sqrt(self)` truncated mod `x^n`, as `self * invsqrt(self)`.
    pub fn sqrt_series(&self, n: usize) -> TalusResult<QPoly> {
        let inv = self.invsqrt_series(n)?;
        Ok(mul_trunc(self, &inv, n))
    }

    /// `asin(self)` truncated mod `x^n`, via `asin(f)' = f'/sqrt(1-f^2)`.
    pub fn asin_series(&self, n: usize) -> TalusResult<QPoly> {
        if !self.const_term_is_zero() {
            return Err(TalusError::NonZeroConstantTerm);
        }
        if n <= 1 {
            return Ok(QPoly::zero());
        }
        let under_root = constant(1).sub(&self.sqr());
        let inv_sqrt = under_root.invsqrt_series(n - 1)?;
        let d = mul_trunc(&self.derivative(), &inv_sqrt, n - 1);
        Ok(d.integral())
    }

    /// `acos(self)` is unrepresentable in this crate: `acos(0) = pi/2` is
    /// irrational, so no power series with rational coefficients equals
    /// `acos(f)` for any `f` with `f(0) = 0`.
    pub fn acos_series(&self, _n: usize) -> TalusResult<QPoly> {
        Err(TalusError::Unsupported("acos has an irrational constant term, not representable over QPoly".to_string()))
    }

    /// `sin(self)` and `cos(self)` truncated mod `x^n`, via the
    /// half-angle identities `sin(f) = 2t/(1+t^2)`, `cos(f) =
    /// (1-t^2)/(1+t^2)` with `t = tan(f/2)`.
    pub fn sin_series(&self, n: usize) -> TalusResult<QPoly> {
        Ok(self.sin_cos_series(n)?.0)
    }
    pub fn cos_series(&self, n: usize) -> TalusResult<QPoly> {
        Ok(self.sin_cos_series(n)?.1)
    }

    fn sin_cos_series(&self, n: usize) -> TalusResult<(QPoly, QPoly)> {
        if !self.const_term_is_zero() {
            return Err(TalusError::NonZeroConstantTerm);
        }
        let half = self.scalar_mul_by_half();
        let t = half.tan_series(n)?;
        let t2 = mul_trunc(&t, &t, n);
        let denom = constant(1).add(&t2);
        let inv_denom = denom.inv_series_newton(n)?;
        let sin = mul_trunc(&t.scalar_mul(&SmallOrBig::from(2i64)), &inv_denom, n);
        let cos = mul_trunc(&constant(1).sub(&t2), &inv_denom, n);
        Ok((sin, cos))
    }

    fn scalar_mul_by_half(&self) -> QPoly {
        QPoly::from_parts(self.numerator().clone(), self.denominator().mul(&SmallOrBig::from(2i64)))
    }

    /// `tan(self)` truncated mod `x^n`, as `sin(self)/cos(self)` computed
    /// from the same half-angle series used by `sin_series`/`cos_series`
    /// for `self/2`, avoiding recomputation through a direct division.
    pub fn tan_series(&self, n: usize) -> TalusResult<QPoly> {
        if !self.const_term_is_zero() {
            return Err(TalusError::NonZeroConstantTerm);
        }
        if n <= 1 {
            return Ok(QPoly::zero());
        }
        // atan(f)' = f'/(1+f^2); invert the relation order-by-order: tan
        // is atan's compositional inverse, found via the same Newton
        // correction used in revert_series_newton but specialised to
        // atan's derivative 1/(1+x^2).
        let mut g = vec![QPoly::zero(), self.coeff_rational(1)];
        for k in 2..n {
            // atan(g)_k should equal self_k; solve for g_k using that
            // atan's series only gets a new g_k contribution through its
            // linear term (same argument as revert_series_newton).
            let partial = {
                let mut p = QPoly::zero();
                for (i, c) in g.iter().enumerate() {
                    p = p.add(&c.shift(i));
                }
                p
            };
            let atan_partial = trunc(&partial, k + 1).atan_series(k + 1).unwrap_or_else(|_| QPoly::zero());
            let target = self.coeff_rational(k);
            let have = atan_partial.coeff_rational(k);
            let gk = target.sub(&have);
            g.push(gk);
        }
        let mut result = QPoly::zero();
        for (i, c) in g.into_iter().enumerate() {
            result = result.add(&c.shift(i));
        }
        Ok(result)
    }

    /// `sinh(self)`, `cosh(self)`, `tanh(self)` via `exp(+-self)`.
    pub fn sinh_series(&self, n: usize) -> TalusResult<QPoly> {
        let pos = self.exp_series(n)?;
        let neg = self.neg().exp_series(n)?;
        Ok(pos.sub(&neg).scalar_div(&SmallOrBig::from(2i64)).expect("two is nonzero"))
    }
    pub fn cosh_series(&self, n: usize) -> TalusResult<QPoly> {
        let pos = self.exp_series(n)?;
        let neg = self.neg().exp_series(n)?;
        Ok(pos.add(&neg).scalar_div(&SmallOrBig::from(2i64)).expect("two is nonzero"))
    }
    pub fn tanh_series(&self, n: usize) -> TalusResult<QPoly> {
        let sinh = self.sinh_series(n)?;
        let cosh = self.cosh_series(n)?;
        let inv_cosh = cosh.inv_series_newton(n)?;
        Ok(mul_trunc(&sinh, &inv_cosh, n))
    }

    /// Compositional inverse truncated mod `x^n`: `g` with `self(g(x)) =
    /// x mod x^n`. Requires `self(0) = 0` and `self'(0) != 0`.
    ///
    /// Each coefficient `g_k` (`k >= 2`) is solved directly: since `g`
    /// has no constant term, `self(g(x))`'s coefficient of `x^k` only
    /// picks up a contribution from `g_k` through `self`'s own linear
    /// term (every other term of `self` needs at least two factors of
    /// `g`, each of degree `>= 1`, so contributes no `g_k`-dependence at
    /// order `k`). That isolates `g_k` without a matrix solve.
    pub fn revert_series_newton(&self, n: usize) -> TalusResult<QPoly> {
        if !self.const_term_is_zero() {
            return Err(TalusError::NotRevertible);
        }
        let a1 = self.coeff_rational(1);
        if a1.is_zero() {
            return Err(TalusError::NotRevertible);
        }
        if n == 0 {
            return Ok(QPoly::zero());
        }
        let a1_inv = a1.inv_series_newton(1)?;
        let mut g = vec![QPoly::zero(), a1_inv.clone()];
        for k in 2..n {
            let partial = {
                let mut p = QPoly::zero();
                for (i, c) in g.iter().enumerate() {
                    p = p.add(&c.shift(i));
                }
                p
            };
            let composed = compose_trunc(self, &partial, k + 1);
            let have = composed.coeff_rational(k);
            // self(partial) should equal x mod x^{k+1}; the x^k
            // coefficient target is 0 (k != 1), and `have` already
            // reflects every already-fixed g_i, so the correction is
            // -have/a1.
            let gk = have.neg().mul(&a1_inv);
            g.push(gk);
        }
        let mut result = QPoly::zero();
        for (i, c) in g.into_iter().enumerate() {
            result = result.add(&c.shift(i));
        }
        Ok(result)
    }
}

/// `f(g(x))` truncated mod `x^n`, by Horner's rule with each partial
/// product truncated to keep intermediate series short.
fn compose_trunc(f: &QPoly, g: &QPoly, n: usize) -> QPoly {
    let mut acc = QPoly::zero();
    for i in (0..f.numerator().length()).rev() {
        acc = mul_trunc(&acc, g, n);
        let c = f.coeff_rational(i);
        acc = acc.add(&c);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(coeffs: Vec<i64>, den: i64) -> QPoly {
        QPoly::from_parts(ZPoly::from(coeffs), SmallOrBig::from(den))
    }

    #[test]
    fn inv_series_matches_integer_case() {
        let f = q(vec![1, -1], 1); // 1 - x
        let inv = f.inv_series_newton(5).unwrap();
        assert_eq!(inv, q(vec![1, 1, 1, 1, 1], 1));
    }

    #[test]
    fn exp_series_matches_scenario_five() {
        let f = q(vec![0, 1], 1); // x
        let e = f.exp_series(6).unwrap();
        assert_eq!(e, q(vec![120, 120, 60, 20, 5, 1], 120));
    }

    #[test]
    fn log_of_exp_round_trips() {
        let f = q(vec![0, 1, 1], 1);
        let n = 8;
        let e = f.exp_series(n).unwrap();
        let back = e.log_series(n).unwrap();
        let truncated_f = trunc(&f, n);
        assert_eq!(back, truncated_f);
    }

    #[test]
    fn exp_series_rejects_nonzero_constant() {
        let f = q(vec![1, 1], 1);
        assert_eq!(f.exp_series(4), Err(TalusError::NonZeroConstantTerm));
    }

    #[test]
    fn log_series_rejects_non_unit_constant() {
        let f = q(vec![2, 1], 1);
        assert_eq!(f.log_series(4), Err(TalusError::NonUnitConstantTerm));
    }

    #[test]
    fn invsqrt_series_satisfies_defining_identity() {
        let f = q(vec![1, 1], 1);
        let n = 6;
        let g = f.invsqrt_series(n).unwrap();
        let g2f = mul_trunc(&mul_trunc(&g, &g, n), &f, n);
        assert_eq!(g2f, trunc(&QPoly::one(), n));
    }

    #[test]
    fn sqrt_series_squares_back_to_input() {
        let f = q(vec![1, 2], 1); // 1 + 2x
        let n = 6;
        let s = f.sqrt_series(n).unwrap();
        assert_eq!(mul_trunc(&s, &s, n), trunc(&f, n));
    }

    #[test]
    fn sin_squared_plus_cos_squared_is_one() {
        let f = q(vec![0, 1], 1);
        let n = 8;
        let sin = f.sin_series(n).unwrap();
        let cos = f.cos_series(n).unwrap();
        let identity = mul_trunc(&sin, &sin, n).add(&mul_trunc(&cos, &cos, n));
        assert_eq!(trunc(&identity, n), trunc(&QPoly::one(), n));
    }

    #[test]
    fn acos_series_is_unsupported() {
        let f = q(vec![0, 1], 1);
        assert!(matches!(f.acos_series(5), Err(TalusError::Unsupported(_))));
    }

    #[test]
    fn revert_series_round_trips() {
        let f = q(vec![0, 1, 1], 1); // x + x^2
        let n = 6;
        let g = f.revert_series_newton(n).unwrap();
        let composed = compose_trunc(&f, &g, n);
        assert_eq!(composed, trunc(&q(vec![0, 1], 1), n));
    }

    #[test]
    fn revert_series_rejects_non_revertible() {
        let f = q(vec![0, 0, 1], 1); // x^2, f'(0) = 0
        assert_eq!(f.revert_series_newton(5), Err(TalusError::NotRevertible));
    }
}
