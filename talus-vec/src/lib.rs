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

//! A contiguous buffer of [`SmallOrBig`] with pointwise and scalar
//! arithmetic, content/gcd/lcm, and bit-width queries.

use malachite::Natural;
use malachite::base::num::arithmetic::traits::PowerOf2;
use malachite::base::num::basic::traits::Zero as _;
use malachite::base::num::random::RandomPrimitiveInts;
use malachite::natural::random::get_random_natural_less_than;
use std::fmt;
use std::str::FromStr;
use talus_base::{SmallOrBig, TalusError, TalusResult};

/// An ordered sequence of [`SmallOrBig`]. The vector owns every element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntVec {
    entries: Vec<SmallOrBig>,
}

// Impl Deref but NOT DerefMut: mutation goes through the methods below so
// that callers cannot silently violate the pointwise-operation contracts.
impl std::ops::Deref for IntVec {
    type Target = Vec<SmallOrBig>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl fmt::Display for IntVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.len())?;
        for e in &self.entries {
            write!(f, "  {}", e)?;
        }
        Ok(())
    }
}

impl FromStr for IntVec {
    type Err = TalusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let len: usize = parts
            .next()
            .ok_or_else(|| TalusError::ParseError("empty input".to_string()))?
            .parse()
            .map_err(|_| TalusError::ParseError("invalid length".to_string()))?;
        let mut entries = Vec::with_capacity(len);
        for _ in 0..len {
            let tok = parts
                .next()
                .ok_or_else(|| TalusError::ParseError("truncated vector".to_string()))?;
            entries.push(tok.parse::<SmallOrBig>()?);
        }
        if parts.next().is_some() {
            return Err(TalusError::ParseError("trailing tokens".to_string()));
        }
        Ok(IntVec::from_raw(entries))
    }
}

impl IntVec {
    #[inline]
    pub fn from_raw(entries: Vec<SmallOrBig>) -> Self {
        IntVec { entries }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        IntVec::from_raw(Vec::with_capacity(capacity))
    }

    /// `init(n)`: an all-zero vector of length `n`.
    #[inline]
    pub fn init(n: usize) -> Self {
        IntVec::from_raw(vec![SmallOrBig::zero(); n])
    }

    /// `clear(n)`: reset `self` to an all-zero vector of length `n`,
    /// releasing any previously held big buffers.
    pub fn clear(&mut self, n: usize) {
        self.entries = vec![SmallOrBig::zero(); n];
    }

    pub fn zeros(len: usize) -> Self {
        IntVec::init(len)
    }

    pub fn ones(len: usize) -> Self {
        IntVec::from_raw(vec![SmallOrBig::one(); len])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn set(&mut self, other: &IntVec) {
        self.entries = other.entries.clone();
    }

    /// `set_range`: overwrite `self[start..start+values.len()]`.
    pub fn set_range(&mut self, start: usize, values: &[SmallOrBig]) {
        for (i, v) in values.iter().enumerate() {
            self.entries[start + i] = v.clone();
        }
    }

    /// `zero_range`: zero out `self[start..end]`.
    pub fn zero_range(&mut self, start: usize, end: usize) {
        for e in &mut self.entries[start..end] {
            *e = SmallOrBig::zero();
        }
    }

    pub fn swap(&mut self, other: &mut IntVec) {
        std::mem::swap(&mut self.entries, &mut other.entries);
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|x| x.is_zero())
    }

    /// `equal`: entrywise equality, zero-padding the shorter operand.
    pub fn equal(&self, other: &IntVec) -> bool {
        let n = self.len().max(other.len());
        (0..n).all(|i| self.get_or_zero(i) == other.get_or_zero(i))
    }

    fn get_or_zero(&self, i: usize) -> SmallOrBig {
        self.entries.get(i).cloned().unwrap_or_else(SmallOrBig::zero)
    }

    pub fn neg(&self) -> IntVec {
        IntVec::from_raw(self.entries.iter().map(|x| x.neg()).collect())
    }

    fn zip_pointwise(&self, other: &IntVec, f: impl Fn(&SmallOrBig, &SmallOrBig) -> SmallOrBig) -> IntVec {
        let n = self.len().max(other.len());
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            out.push(f(&self.get_or_zero(i), &other.get_or_zero(i)));
        }
        IntVec::from_raw(out)
    }

    pub fn add(&self, other: &IntVec) -> IntVec {
        self.zip_pointwise(other, SmallOrBig::add)
    }

    pub fn sub(&self, other: &IntVec) -> IntVec {
        self.zip_pointwise(other, SmallOrBig::sub)
    }

    /// Signed bit-length of the widest entry; negative iff any entry is
    /// negative.
    pub fn max_bits(&self) -> i64 {
        let mut max_bits: u64 = 0;
        let mut has_negative = false;
        for e in &self.entries {
            max_bits = max_bits.max(e.bit_length());
            if e.sign() < 0 {
                has_negative = true;
            }
        }
        if has_negative {
            -(max_bits as i64)
        } else {
            max_bits as i64
        }
    }

    /// Upper bound on machine-word limbs needed by the widest entry.
    pub fn max_limbs(&self) -> u64 {
        let bits = self.max_bits().unsigned_abs();
        bits.div_ceil(64).max(1)
    }

    /// Index of the entry of largest absolute value; `None` if empty.
    pub fn height_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.cmp_abs(b))
            .map(|(i, _)| i)
    }

    /// Gcd of absolute values; `content(∅) = 0`.
    pub fn content(&self) -> SmallOrBig {
        self.content_chained(SmallOrBig::zero())
    }

    /// Fold-gcd including a seed, terminating early once the running gcd
    /// reaches `1`.
    pub fn content_chained(&self, seed: SmallOrBig) -> SmallOrBig {
        let mut g = seed;
        for e in &self.entries {
            if g.is_one() {
                break;
            }
            g = g.gcd(e);
        }
        g
    }

    /// Lcm of absolute values; `lcm(∅) = 1`.
    pub fn lcm(&self) -> SmallOrBig {
        let mut l = SmallOrBig::one();
        for e in &self.entries {
            l = l.lcm(e);
        }
        l
    }

    pub fn sum(&self) -> SmallOrBig {
        self.entries.iter().fold(SmallOrBig::zero(), |acc, e| acc.add(e))
    }

    pub fn prod(&self) -> SmallOrBig {
        self.entries.iter().fold(SmallOrBig::one(), |acc, e| acc.mul(e))
    }

    pub fn dot(&self, other: &IntVec) -> SmallOrBig {
        let n = self.len().min(other.len());
        (0..n).fold(SmallOrBig::zero(), |acc, i| acc.add(&self.entries[i].mul(&other.entries[i])))
    }

    /// Signed weighted dot product: `Σ weights[i] · self[i] · other[i]`.
    pub fn dot_general(&self, other: &IntVec, weights: &IntVec) -> SmallOrBig {
        let n = self.len().min(other.len()).min(weights.len());
        (0..n).fold(SmallOrBig::zero(), |acc, i| {
            acc.add(&weights.entries[i].mul(&self.entries[i].mul(&other.entries[i])))
        })
    }

    pub fn scalar_mul(&self, c: &SmallOrBig) -> IntVec {
        IntVec::from_raw(self.entries.iter().map(|x| x.mul(c)).collect())
    }

    pub fn scalar_addmul(&mut self, other: &IntVec, c: &SmallOrBig) {
        let n = self.len().max(other.len());
        if self.len() < n {
            self.entries.resize(n, SmallOrBig::zero());
        }
        for i in 0..n {
            let term = other.get_or_zero(i).mul(c);
            self.entries[i] = self.entries[i].add(&term);
        }
    }

    pub fn scalar_submul(&mut self, other: &IntVec, c: &SmallOrBig) {
        let n = self.len().max(other.len());
        if self.len() < n {
            self.entries.resize(n, SmallOrBig::zero());
        }
        for i in 0..n {
            let term = other.get_or_zero(i).mul(c);
            self.entries[i] = self.entries[i].sub(&term);
        }
    }

    pub fn scalar_div_exact(&self, c: &SmallOrBig) -> TalusResult<IntVec> {
        let mut out = Vec::with_capacity(self.len());
        for e in &self.entries {
            out.push(e.div_exact(c)?);
        }
        Ok(IntVec::from_raw(out))
    }

    pub fn scalar_mul_2exp(&self, k: u64) -> IntVec {
        IntVec::from_raw(self.entries.iter().map(|x| x.mul_2exp(k)).collect())
    }

    pub fn scalar_div_2exp_floor(&self, k: u64) -> IntVec {
        IntVec::from_raw(self.entries.iter().map(|x| x.div_2exp_floor(k)).collect())
    }

    /// Euclidean reduction of every entry into `[0, p)`.
    pub fn scalar_mod(&self, p: &SmallOrBig) -> TalusResult<IntVec> {
        let mut out = Vec::with_capacity(self.len());
        for e in &self.entries {
            let (_, r) = e.divmod_floor(p)?;
            out.push(r);
        }
        Ok(IntVec::from_raw(out))
    }

    /// Symmetric residues in `[-⌊p/2⌋, ⌊(p-1)/2⌋]`.
    pub fn scalar_smod(&self, p: &SmallOrBig) -> TalusResult<IntVec> {
        let reduced = self.scalar_mod(p)?;
        let half = p.div_2exp_floor(1);
        let out = reduced
            .entries
            .iter()
            .map(|r| if r.cmp(&half) == std::cmp::Ordering::Greater { r.sub(p) } else { r.clone() })
            .collect();
        Ok(IntVec::from_raw(out))
    }

    /// A length-`n` vector of uniformly random integers with magnitude
    /// bounded by `2^bits`, caller-owned randomness, for test tooling.
    pub fn randtest(n: usize, bits: u64, rng: &mut RandomPrimitiveInts<u64>) -> IntVec {
        let bound = Natural::power_of_2(bits.max(1));
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            let magnitude = get_random_natural_less_than(rng, &bound);
            let sign_bit = rng.next().unwrap_or(0);
            let value = malachite::Integer::from(magnitude);
            let value = if sign_bit & 1 == 1 { -value } else { value };
            out.push(SmallOrBig::from_integer(value));
        }
        IntVec::from_raw(out)
    }
}

impl<T> From<Vec<T>> for IntVec
where
    T: Into<SmallOrBig>,
{
    fn from(entries: Vec<T>) -> Self {
        IntVec::from_raw(entries.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_zero_pads_shorter_operand() {
        let a = IntVec::from(vec![1i64, 2, 3]);
        let b = IntVec::from(vec![10i64]);
        let sum = a.add(&b);
        assert_eq!(sum, IntVec::from(vec![11i64, 2, 3]));
    }

    #[test]
    fn content_of_empty_is_zero() {
        let v = IntVec::init(0);
        assert!(v.content().is_zero());
    }

    #[test]
    fn content_scales_with_scalar() {
        let v = IntVec::from(vec![6i64, 9, 15]);
        assert_eq!(v.content(), SmallOrBig::from(3i64));
        let scaled = v.scalar_mul(&SmallOrBig::from(-4i64));
        assert_eq!(scaled.content(), SmallOrBig::from(12i64));
    }

    #[test]
    fn lcm_of_empty_is_one() {
        let v = IntVec::init(0);
        assert_eq!(v.lcm(), SmallOrBig::one());
    }

    #[test]
    fn scalar_smod_is_symmetric() {
        let v = IntVec::from(vec![0i64, 1, 2, 3, 4, 5, 6]);
        let p = SmallOrBig::from(7i64);
        let reduced = v.scalar_smod(&p).unwrap();
        assert_eq!(
            reduced,
            IntVec::from(vec![0i64, 1, 2, 3, -3, -2, -1])
        );
    }

    #[test]
    fn dot_product_matches_manual_sum() {
        let a = IntVec::from(vec![1i64, 2, 3]);
        let b = IntVec::from(vec![4i64, 5, 6]);
        assert_eq!(a.dot(&b), SmallOrBig::from(32i64));
    }

    #[test]
    fn height_index_picks_largest_magnitude() {
        let v = IntVec::from(vec![1i64, -100, 7]);
        assert_eq!(v.height_index(), Some(1));
    }
}
