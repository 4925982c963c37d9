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

fn bench_divrem_around_divconquer_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("ZPoly Divrem - div-and-conquer threshold");
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);
    group.sample_size(20);

    for &size in [8usize, 12, 15, 16, 17, 24, 32, 64].iter() {
        let mut a_coeffs = generate_random_coeffs(size * 2, 1, 1000);
        *a_coeffs.last_mut().unwrap() = 1; // keep the leading coefficient nonzero
        let mut b_coeffs = generate_random_coeffs(size, 1, 1000);
        *b_coeffs.last_mut().unwrap() = 1;

        let a = ZPoly::from(a_coeffs);
        let b = ZPoly::from(b_coeffs);

        group.bench_function(BenchmarkId::new("divisor_len", size), |bencher| {
            bencher.iter(|| black_box(a.divrem(&b).unwrap()))
        });
    }
    group.finish();
}

criterion_group! {
    name = zpoly_divrem_benches;
    config = Criterion::default().significance_level(0.1).sample_size(30);
    targets = bench_divrem_around_divconquer_threshold
}

criterion_main!(zpoly_divrem_benches);
