//! Benchmarks for the stick striker.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stagebeat::{instruments::Setup, StageConfig};

use super::eighths;
use crate::{FRAME, HIT_COUNTS};

pub fn bench_striker(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives/striker");
    let config = StageConfig::default();
    let setup = Setup::new(&config, 480);

    for &count in HIT_COUNTS {
        let hits = eighths(count, 38);
        let end = hits.last().map_or(0.0, |h| h.time);

        // Steady playback: one tick per frame
        let mut striker = setup.striker(hits.clone());
        let mut time = 0.0;
        group.bench_with_input(BenchmarkId::new("tick", count), &count, |b, _| {
            b.iter(|| {
                time += FRAME as f64;
                if time > end {
                    time = 0.0;
                    striker.seek(0.0);
                }
                black_box(striker.tick(black_box(time)))
            })
        });

        let mut striker = setup.striker(hits);
        group.bench_with_input(BenchmarkId::new("seek_then_tick", count), &count, |b, _| {
            let mut t = 0.0;
            b.iter(|| {
                t = (t + 3.7) % end.max(1.0);
                striker.seek(black_box(t));
                black_box(striker.tick(t))
            })
        });
    }

    group.finish();
}
