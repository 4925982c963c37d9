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

//! Schoolbook `O(len1 * len2)` multiplication.

use talus_base::SmallOrBig;

pub(crate) fn classical_mul(poly1: &[SmallOrBig], poly2: &[SmallOrBig]) -> Vec<SmallOrBig> {
    let (len1, len2) = (poly1.len(), poly2.len());
    if len1 == 0 || len2 == 0 {
        return Vec::new();
    }
    let mut result = vec![SmallOrBig::zero(); len1 + len2 - 1];
    for (i, a) in poly1.iter().enumerate() {
        if a.is_zero() {
            continue;
        }
        for (j, b) in poly2.iter().enumerate() {
            result[i + j] = result[i + j].addmul(a, b);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_small_polynomials() {
        let a = vec![SmallOrBig::from(1i64), SmallOrBig::from(1i64)]; // 1 + x
        let b = vec![SmallOrBig::from(1i64), SmallOrBig::from(-1i64)]; // 1 - x
        let c = classical_mul(&a, &b);
        assert_eq!(c, vec![SmallOrBig::from(1i64), SmallOrBig::from(0i64), SmallOrBig::from(-1i64)]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(classical_mul(&[], &[SmallOrBig::from(1i64)]).is_empty());
    }
}
