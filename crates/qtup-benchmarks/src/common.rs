//! Shared helpers for qtup benchmarks.

use criterion::Criterion;

/// Criterion configuration shared by all benchmark binaries
pub fn criterion_config() -> Criterion {
    Criterion::default().sample_size(50).configure_from_args()
}

/// A spread of release versions across both major series
pub fn sample_versions(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let major = if i % 2 == 0 { 5 } else { 6 };
            format!("{}.{}.{}", major, i % 16, i % 4)
        })
        .collect()
}

/// A module list of the given size
pub fn sample_modules(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("qtmodule{}", i)).collect()
}
