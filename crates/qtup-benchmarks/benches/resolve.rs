//! Resolution-path performance benchmarks
//!
//! Benchmarks the pure decision logic on the install path: default
//! architecture selection, list query formatting, and installer argument
//! assembly.

use camino::Utf8Path;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use qtup_benchmarks::{criterion_config, sample_modules, sample_versions};
use qtup_core::types::{HostOs, InstallRequest, PlatformTriple};
use qtup_resolver::{build_install_args, default_arch, ListQuery};

/// Benchmark default architecture selection across many versions
fn bench_default_arch(c: &mut Criterion) {
    let mut group = c.benchmark_group("default_arch");
    let versions = sample_versions(256);
    group.throughput(Throughput::Elements(versions.len() as u64));

    group.bench_function("windows", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(default_arch(HostOs::Windows, version).unwrap());
            }
        });
    });

    group.bench_function("android", |b| {
        b.iter(|| {
            for version in &versions {
                black_box(default_arch(HostOs::Android, version).unwrap());
            }
        });
    });

    group.finish();
}

/// Benchmark list query argument formatting
fn bench_list_query(c: &mut Criterion) {
    c.bench_function("list_query_args", |b| {
        let query = ListQuery::new(HostOs::Linux, "desktop", "6.5.*");
        b.iter(|| black_box(query.to_args()));
    });
}

/// Benchmark installer argument assembly for different module counts
fn bench_install_args(c: &mut Criterion) {
    let mut group = c.benchmark_group("install_args");

    for module_count in [0, 4, 16, 64] {
        group.throughput(Throughput::Elements(module_count as u64));

        group.bench_with_input(
            BenchmarkId::new("modules", module_count),
            &module_count,
            |b, &module_count| {
                let mut request = InstallRequest::new(
                    PlatformTriple::new(HostOs::Windows, "desktop").with_arch("win64_msvc2019_64"),
                    "5.15.2",
                );
                request.modules = sample_modules(module_count);

                b.iter(|| black_box(build_install_args(&request, Utf8Path::new("/opt/qt"))));
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_default_arch, bench_list_query, bench_install_args
}
criterion_main!(benches);
