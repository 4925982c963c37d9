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

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const BENCH_SEED: u64 = 0x1234567890ABCDEF;

/// Fixed-seed random coefficients so benchmark runs are reproducible.
pub fn generate_random_coeffs(size: usize, min_coeff: i64, max_coeff: i64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(BENCH_SEED);
    (0..size).map(|_| rng.random_range(min_coeff..=max_coeff)).collect()
}
