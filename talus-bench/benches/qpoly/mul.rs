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
use talus_base::SmallOrBig;
use talus_poly::{QPoly, ZPoly};

fn random_qpoly(size: usize, den: i64) -> QPoly {
    QPoly::from_parts(ZPoly::from(generate_random_coeffs(size, 1, 1000)), SmallOrBig::from(den))
}

fn bench_mul_same_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("QPoly Mul - same size (gcd-aware cancellation)");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);

    for &size in [5usize, 25, 100, 500].iter() {
        let a = random_qpoly(size, 6);
        let b = random_qpoly(size, 35);

        group.bench_function(BenchmarkId::new("ref_ref", size), |bencher| {
            bencher.iter(|| black_box(a.mul(&b)))
        });

        group.bench_function(BenchmarkId::new("self_squaring", size), |bencher| {
            bencher.iter(|| black_box(a.sqr()))
        });
    }
    group.finish();
}

criterion_group! {
    name = qpoly_mul_benches;
    config = Criterion::default().significance_level(0.1).sample_size(30);
    targets = bench_mul_same_size
}

criterion_main!(qpoly_mul_benches);
