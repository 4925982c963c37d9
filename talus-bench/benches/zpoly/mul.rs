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

fn bench_mul_same_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("ZPoly Mul - same size (auto algorithm)");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);

    for &size in [1usize, 3, 5, 8, 12, 16, 25, 50, 100, 200].iter() {
        let a = ZPoly::from(generate_random_coeffs(size, 1, 1000));
        let b = ZPoly::from(generate_random_coeffs(size, 1, 1000));

        group.bench_function(BenchmarkId::new("ref_ref", size), |bencher| {
            bencher.iter(|| black_box(&a * &b))
        });

        group.bench_function(BenchmarkId::new("self_squaring", size), |bencher| {
            bencher.iter(|| black_box(&a * &a))
        });
    }
    group.finish();
}

fn bench_mul_around_karatsuba_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("ZPoly Mul - Karatsuba threshold");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    group.sample_size(20);

    for &size in [5usize, 6, 7, 8, 9, 12, 16].iter() {
        let a = ZPoly::from(generate_random_coeffs(size, 1, 100));
        let b = ZPoly::from(generate_random_coeffs(size, 1, 100));

        group.bench_function(BenchmarkId::new("size", size), |bencher| {
            bencher.iter(|| black_box(&a * &b))
        });
    }
    group.finish();
}

fn bench_mul_large_coefficients(c: &mut Criterion) {
    let mut group = c.benchmark_group("ZPoly Mul - large coefficients (KS crossover)");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    group.sample_size(20);

    let size = 16;
    for &max in [100i64, 10_000, 1_000_000, i64::MAX / 4].iter() {
        let a = ZPoly::from(generate_random_coeffs(size, 1, max));
        let b = ZPoly::from(generate_random_coeffs(size, 1, max));

        group.bench_function(BenchmarkId::new("max_coeff", max), |bencher| {
            bencher.iter(|| black_box(&a * &b))
        });
    }
    group.finish();
}

criterion_group! {
    name = zpoly_mul_benches;
    config = Criterion::default().significance_level(0.1).sample_size(30);
    targets = bench_mul_same_size, bench_mul_around_karatsuba_threshold, bench_mul_large_coefficients
}

criterion_main!(zpoly_mul_benches);
