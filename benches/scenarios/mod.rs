//! Benchmarks for whole stages.

mod stage;

pub use stage::bench_stage;
