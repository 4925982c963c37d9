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

//! Subproduct tree over `n` points `a_0, ..., a_{n-1}`: a balanced binary
//! tree whose leaves are the linear factors `x - a_i` and whose internal
//! nodes are the product of their children, read-only once built. Used
//! for fast multipoint evaluation via remainder-tree descent, in
//! `O(M(n) log n)` instead of `O(n^2)` repeated Horner evaluation.

use crate::ZPoly;
use talus_base::SmallOrBig;

pub struct SubproductTree {
    /// `levels[0]` holds the leaves (`x - a_i`); each subsequent level
    /// holds the pairwise products of the level below, up to a single
    /// root polynomial at `levels.last()`. Empty when `n == 0`.
    levels: Vec<Vec<ZPoly>>,
    n: usize,
}

impl SubproductTree {
    /// Build the tree over `points`. `n = 0` yields an empty tree whose
    /// product is the constant `1`.
    pub fn build(points: &[SmallOrBig]) -> Self {
        if points.is_empty() {
            return SubproductTree { levels: vec![vec![ZPoly::one()]], n: 0 };
        }
        let leaves: Vec<ZPoly> =
            points.iter().map(|a| ZPoly::from_raw(vec![a.clone().neg(), SmallOrBig::one()])).collect();
        let mut levels = vec![leaves];
        while levels.last().unwrap().len() > 1 {
            let prev = levels.last().unwrap();
            let mut next = Vec::with_capacity(prev.len().div_ceil(2));
            let mut i = 0;
            while i < prev.len() {
                if i + 1 < prev.len() {
                    next.push(prev[i].mul(&prev[i + 1]));
                } else {
                    next.push(prev[i].clone());
                }
                i += 2;
            }
            levels.push(next);
        }
        SubproductTree { levels, n: points.len() }
    }

    /// Number of leaves (points the tree was built over).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The height `ceil(log2(n))`.
    pub fn height(&self) -> usize {
        self.levels.len() - 1
    }

    /// `prod_i (x - a_i)`, the polynomial at the root of the tree.
    pub fn product(&self) -> &ZPoly {
        self.levels.last().unwrap().last().unwrap()
    }

    /// Evaluate `f` at every point the tree was built over, in
    /// `O(M(n) log n)` via remainder-tree descent: reduce `f` modulo the
    /// root, then modulo each half recursively until each leaf's
    /// remainder is the constant evaluation.
    pub fn multipoint_evaluate(&self, f: &ZPoly) -> Vec<SmallOrBig> {
        if self.is_empty() {
            return Vec::new();
        }
        let n = self.levels[0].len();
        if n == 1 {
            return vec![f.evaluate(&self.levels[0][0].coeff(0).neg())];
        }
        let top = self.levels.len() - 1;
        let mut remainders: Vec<ZPoly> = vec![reduce(f, &self.levels[top][0])];
        for level in (0..top).rev() {
            let nodes = &self.levels[level];
            let mut next = Vec::with_capacity(nodes.len());
            for (parent_idx, parent_rem) in remainders.into_iter().enumerate() {
                let left = 2 * parent_idx;
                let right = left + 1;
                if right < nodes.len() {
                    next.push(reduce(&parent_rem, &nodes[left]));
                    next.push(reduce(&parent_rem, &nodes[right]));
                } else {
                    next.push(parent_rem);
                }
            }
            remainders = next;
        }
        remainders.into_iter().map(|r| r.coeff(0)).collect()
    }
}

/// Reduce `f` modulo the monic-ish node `g` (degree >= 1): the
/// polynomial remainder of `f` divided by `g`. Nodes in this tree are
/// not necessarily monic (their leaves are, but products of non-monic
/// factors stay monic too since each leaf has leading coefficient 1), so
/// ordinary integer `divrem` suffices without pseudo-division.
fn reduce(f: &ZPoly, g: &ZPoly) -> ZPoly {
    if f.length() < g.length() {
        return f.clone();
    }
    match f.divrem(g) {
        Ok((_, r)) => r,
        Err(_) => f.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_over_three_points_has_height_two() {
        let pts: Vec<SmallOrBig> = vec![0i64, 1, 2].into_iter().map(SmallOrBig::from).collect();
        let tree = SubproductTree::build(&pts);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.product().degree(), Some(3));
    }

    #[test]
    fn empty_tree_has_unit_product() {
        let tree = SubproductTree::build(&[]);
        assert!(tree.product().is_one());
    }

    #[test]
    fn multipoint_evaluate_matches_horner() {
        let pts: Vec<SmallOrBig> = vec![0i64, 1, 2, 3, 5].into_iter().map(SmallOrBig::from).collect();
        let f = ZPoly::from(vec![1i64, -2, 3, 4]);
        let tree = SubproductTree::build(&pts);
        let fast = tree.multipoint_evaluate(&f);
        let slow: Vec<SmallOrBig> = pts.iter().map(|a| f.evaluate(a)).collect();
        assert_eq!(fast, slow);
    }

    #[test]
    fn single_point_uses_horner_directly() {
        let pts = vec![SmallOrBig::from(7i64)];
        let f = ZPoly::from(vec![1i64, 1, 1]);
        let tree = SubproductTree::build(&pts);
        assert_eq!(tree.multipoint_evaluate(&f), vec![f.evaluate(&SmallOrBig::from(7i64))]);
    }
}
