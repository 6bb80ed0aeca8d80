//! Environment projection performance benchmarks

use camino::Utf8Path;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use qtup_benchmarks::criterion_config;
use qtup_core::types::HostOs;
use qtup_env::compute_mutations;

/// Benchmark mutation computation per host and major series
fn bench_compute_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_mutations");

    let cases = [
        ("linux_qt5", HostOs::Linux, "5.15.2"),
        ("linux_qt6", HostOs::Linux, "6.5.3"),
        ("windows_qt6", HostOs::Windows, "6.5.3"),
        ("mac_qt6", HostOs::Mac, "6.5.3"),
    ];

    for (label, host, version) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(label), &(host, version), |b, &(host, version)| {
            b.iter(|| {
                black_box(compute_mutations(
                    Utf8Path::new("/opt/qt"),
                    Utf8Path::new("/opt/qt/6.5.3/gcc_64"),
                    version,
                    host,
                    true,
                ))
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_compute_mutations
}
criterion_main!(benches);
