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

//! Multi-modulus precompute: a product tree over a list of pairwise-coprime
//! word-size moduli, used to reduce a single big integer to its residue
//! mod each modulus in `O(log^2 r)` big-integer operations instead of
//! `O(r)` independent divisions.

use malachite::Integer;
use malachite::base::num::conversion::traits::ExactFrom;
use talus_base::{SmallOrBig, TalusError, TalusResult};

/// A binary product tree over `r` moduli. Level 0 holds the moduli
/// themselves; each subsequent level holds the pairwise products of the
/// previous one. The top level holds the product of all moduli.
#[derive(Debug, Clone)]
pub struct ModulusComb {
    primes: Vec<u64>,
    levels: Vec<Vec<Integer>>,
}

impl ModulusComb {
    /// Build the product tree for `primes`. Fails with
    /// `NonCoprimeOrZeroModuli` if any modulus is zero or any pair shares a
    /// common factor.
    pub fn build(primes: &[u64]) -> TalusResult<Self> {
        if primes.iter().any(|&p| p == 0) {
            return Err(TalusError::NonCoprimeOrZeroModuli);
        }
        for i in 0..primes.len() {
            for j in (i + 1)..primes.len() {
                if gcd_u64(primes[i], primes[j]) != 1 {
                    return Err(TalusError::NonCoprimeOrZeroModuli);
                }
            }
        }

        let mut levels = Vec::new();
        let mut current: Vec<Integer> = primes.iter().map(|&p| Integer::from(p)).collect();
        levels.push(current.clone());
        while current.len() > 1 {
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for chunk in current.chunks(2) {
                if chunk.len() == 2 {
                    next.push(&chunk[0] * &chunk[1]);
                } else {
                    next.push(chunk[0].clone());
                }
            }
            levels.push(next.clone());
            current = next;
        }

        Ok(ModulusComb { primes: primes.to_vec(), levels })
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Product of all moduli (the root of the tree).
    pub fn modulus_product(&self) -> Integer {
        self.levels.last().map(|l| l[0].clone()).unwrap_or_else(|| Integer::from(1))
    }

    /// Emit the residue of `value` modulo each prime, descending the tree
    /// top-down and reducing at each level.
    pub fn reduce(&self, value: &SmallOrBig) -> Vec<u64> {
        if self.primes.is_empty() {
            return Vec::new();
        }
        let n = self.levels.len();
        let mut residues_at_level: Vec<Integer> = vec![value.to_integer() % self.levels[n - 1][0].clone()];
        for level in (0..n - 1).rev() {
            let nodes = &self.levels[level];
            let mut next_residues = Vec::with_capacity(nodes.len());
            for (parent_idx, parent_residue) in residues_at_level.into_iter().enumerate() {
                let left_idx = parent_idx * 2;
                let right_idx = left_idx + 1;
                if right_idx < nodes.len() {
                    next_residues.push(parent_residue.clone() % nodes[left_idx].clone());
                    next_residues.push(parent_residue % nodes[right_idx].clone());
                } else {
                    next_residues.push(parent_residue);
                }
            }
            residues_at_level = next_residues;
        }
        residues_at_level
            .into_iter()
            .zip(self.primes.iter())
            .map(|(r, &p)| {
                let r = r % Integer::from(p);
                let r = if r < 0 { r + Integer::from(p) } else { r };
                u64::exact_from(&r)
            })
            .collect()
    }
}

fn gcd_u64(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_matches_direct_mod() {
        let primes = [1_000_000_007u64, 1_000_000_009u64, 998_244_353u64];
        let comb = ModulusComb::build(&primes).unwrap();
        let value = SmallOrBig::from(Integer::from(123456789012345678i64) * Integer::from(17));
        let residues = comb.reduce(&value);
        let expected: Vec<u64> = primes
            .iter()
            .map(|&p| u64::exact_from(&(value.to_integer() % Integer::from(p))))
            .collect();
        assert_eq!(residues, expected);
    }

    #[test]
    fn zero_modulus_rejected() {
        assert!(ModulusComb::build(&[3, 0, 5]).is_err());
    }

    #[test]
    fn non_coprime_rejected() {
        assert!(ModulusComb::build(&[6, 10]).is_err());
    }

    #[test]
    fn single_modulus() {
        let comb = ModulusComb::build(&[97]).unwrap();
        let residues = comb.reduce(&SmallOrBig::from(250i64));
        assert_eq!(residues, vec![250 % 97]);
    }
}
