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

use crate::{QPoly, ZPoly};
use talus_base::SmallOrBig;

impl QPoly {
    /// `d/dx`; the denominator is shared with `self` since differentiating
    /// does not introduce new fractions.
    pub fn derivative(&self) -> QPoly {
        QPoly::from_parts(self.numerator().derivative(), self.denominator().clone())
    }

    /// Antiderivative with zero constant term. Batches the per-term
    /// denominators `den*(i+1)` into a single `den * lcm(1..=n)` so the
    /// result is canonicalised only once.
    pub fn integral(&self) -> QPoly {
        if self.is_zero() {
            return QPoly::zero();
        }
        let n = self.numerator().length();
        let mut t = SmallOrBig::one();
        for i in 1..=n {
            t = t.lcm(&SmallOrBig::from(i as i64));
        }
        let mut coeffs = vec![SmallOrBig::zero(); n + 1];
        for (i, c) in self.numerator().as_slice().iter().enumerate() {
            let scale = t.div_exact(&SmallOrBig::from((i + 1) as i64)).expect("t is a multiple of i+1");
            coeffs[i + 1] = c.mul(&scale);
        }
        let den = self.denominator().mul(&t);
        QPoly::from_parts(ZPoly::from_raw(coeffs), den)
    }
}
