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

use criterion::*;
use talus_bench::generate_random_coeffs;
use talus_poly::ZPoly;

/// `(x - r)` times a random cofactor, so the gcd is known to be nontrivial.
fn poly_with_common_factor(size: usize, root: i64) -> ZPoly {
    let cofactor = ZPoly::from(generate_random_coeffs(size, 1, 1000));
    let linear = ZPoly::from(vec![-root, 1]);
    cofactor.mul(&linear)
}

fn bench_gcd_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("ZPoly Gcd - dispatch across heuristic/subresultant/modular");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    group.sample_size(20);

    for &size in [4usize, 8, 16, 32, 64, 128].iter() {
        let a = poly_with_common_factor(size, 7);
        let b = poly_with_common_factor(size, 7);

        group.bench_function(BenchmarkId::new("size", size), |bencher| {
            bencher.iter(|| black_box(a.gcd(&b)))
        });
    }
    group.finish();
}

criterion_group! {
    name = zpoly_gcd_benches;
    config = Criterion::default().significance_level(0.1).sample_size(30);
    targets = bench_gcd_dispatch
}

criterion_main!(zpoly_gcd_benches);
