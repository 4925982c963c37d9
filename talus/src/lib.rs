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

//! Facade crate: re-exports the public API of `talus-base`, `talus-vec`,
//! `talus-zn` and `talus-poly` under a single dependency.

pub use talus_base::{SmallOrBig, TalusError, TalusResult};
pub use talus_poly::{QPoly, SubproductTree, ZPoly};
pub use talus_vec::IntVec;
pub use talus_zn::{ModulusComb, NmodCtx, NmodElem};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_reexports_are_usable_together() {
        let a = ZPoly::from(vec![1i64, 2, 3]);
        let b = ZPoly::from(vec![1i64, 1]);
        assert_eq!(a.add(&b), ZPoly::from(vec![2i64, 3, 3]));

        let q = QPoly::from(a.clone());
        assert!(!q.is_zero());

        let v = IntVec::from_raw(vec![SmallOrBig::from(1i64), SmallOrBig::from(-2i64)]);
        assert_eq!(v.len(), 2);
    }
}
