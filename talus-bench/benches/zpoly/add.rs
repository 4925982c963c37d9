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

fn bench_add_same_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("ZPoly Add - same size");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);

    for &size in [1usize, 5, 10, 50, 100, 500, 2000].iter() {
        let a = ZPoly::from(generate_random_coeffs(size, -1000, 1000));
        let b = ZPoly::from(generate_random_coeffs(size, -1000, 1000));

        group.bench_function(BenchmarkId::new("ref_ref", size), |bencher| {
            bencher.iter(|| black_box(&a + &b))
        });
    }
    group.finish();
}

fn bench_add_different_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("ZPoly Add - different sizes");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);

    for &(size_a, size_b) in [(1usize, 10usize), (5, 50), (10, 500), (1, 2000)].iter() {
        let a = ZPoly::from(generate_random_coeffs(size_a, -1000, 1000));
        let b = ZPoly::from(generate_random_coeffs(size_b, -1000, 1000));
        let label = format!("{}x{}", size_a, size_b);

        group.bench_function(BenchmarkId::new("ref_ref", &label), |bencher| {
            bencher.iter(|| black_box(&a + &b))
        });
    }
    group.finish();
}

criterion_group! {
    name = zpoly_add_benches;
    config = Criterion::default().significance_level(0.1).sample_size(30);
    targets = bench_add_same_size, bench_add_different_sizes
}

criterion_main!(zpoly_add_benches);
