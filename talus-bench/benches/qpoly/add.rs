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
    QPoly::from_parts(ZPoly::from(generate_random_coeffs(size, -1000, 1000)), SmallOrBig::from(den))
}

fn bench_add_same_denominator(c: &mut Criterion) {
    let mut group = c.benchmark_group("QPoly Add - same denominator (fast path)");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);

    for &size in [5usize, 25, 100, 500].iter() {
        let a = random_qpoly(size, 6);
        let b = random_qpoly(size, 6);

        group.bench_function(BenchmarkId::new("size", size), |bencher| {
            bencher.iter(|| black_box(a.add(&b)))
        });
    }
    group.finish();
}

fn bench_add_cross_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("QPoly Add - different denominators (cross-multiply)");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);

    for &size in [5usize, 25, 100, 500].iter() {
        let a = random_qpoly(size, 6);
        let b = random_qpoly(size, 35);

        group.bench_function(BenchmarkId::new("size", size), |bencher| {
            bencher.iter(|| black_box(a.add(&b)))
        });
    }
    group.finish();
}

criterion_group! {
    name = qpoly_add_benches;
    config = Criterion::default().significance_level(0.1).sample_size(30);
    targets = bench_add_same_denominator, bench_add_cross_multiply
}

criterion_main!(qpoly_add_benches);
