//! qtup benchmarking suite
//!
//! This crate contains benchmarks for the decision logic on the install
//! hot path: architecture selection, argument assembly, and environment
//! projection.

pub mod common;

pub use common::*;
