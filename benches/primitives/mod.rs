//! Benchmarks for collectors and strikers.

mod collect;
mod striker;

pub use collect::bench_collect;
pub use striker::bench_striker;

use stagebeat::timeline::Hit;

/// `count` hits on `note`, an eighth note apart at 120 bpm
pub fn eighths(count: usize, note: u8) -> Vec<Hit> {
    (0..count)
        .map(|i| Hit {
            tick: i as u64 * 240,
            time: i as f64 * 0.25,
            note,
            velocity: 100,
        })
        .collect()
}
