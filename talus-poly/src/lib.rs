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

pub mod qpoly;
pub mod subproduct;
pub mod zpoly;

pub use qpoly::QPoly;
pub use subproduct::SubproductTree;
pub use zpoly::ZPoly;

#[cfg(test)]
mod tests {
    use crate::ZPoly;

    #[test]
    fn smoke_add() {
        let a = ZPoly::from(vec![1i64, 2, 3]);
        let b = ZPoly::from(vec![1i64, 1]);
        assert_eq!(a.add(&b), ZPoly::from(vec![2i64, 3, 3]));
    }
}
