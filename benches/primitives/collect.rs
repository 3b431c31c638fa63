//! Benchmarks for the event and arc collectors.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use stagebeat::{
    collect::{ArcCollector, EventCollector},
    timeline::{contiguous_groups, TimedArc},
};

use super::eighths;
use crate::{FRAME, HIT_COUNTS};

fn arcs(count: usize) -> Vec<TimedArc> {
    (0..count)
        .map(|i| {
            let start = i as f64 * 0.25;
            TimedArc {
                note: 60 + (i % 12) as u8,
                velocity: 100,
                start,
                end: start + 0.6,
                start_tick: i as u64 * 240,
                end_tick: i as u64 * 240 + 576,
            }
        })
        .collect()
}

pub fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives/collect");

    for &count in HIT_COUNTS {
        let hits = eighths(count, 38);
        let end = hits.last().map_or(0.0, |h| h.time) + 1.0;
        let frames = (end / FRAME as f64) as usize;

        // Whole song, one frame at a time
        group.bench_with_input(BenchmarkId::new("events_playthrough", count), &count, |b, _| {
            b.iter(|| {
                let mut collector = EventCollector::new(hits.clone());
                let mut seen = 0;
                for frame in 0..frames {
                    seen += collector.advance_collect_all(frame as f64 * FRAME as f64).len();
                }
                black_box(seen)
            })
        });

        let mut collector = EventCollector::new(hits.clone());
        group.bench_with_input(BenchmarkId::new("events_seek", count), &count, |b, _| {
            let mut t = 0.0;
            b.iter(|| {
                t = (t + 7.3) % end;
                collector.seek(black_box(t));
            })
        });

        let spans = arcs(count);
        group.bench_with_input(BenchmarkId::new("arcs_playthrough", count), &count, |b, _| {
            b.iter(|| {
                let mut collector = ArcCollector::new(spans.clone());
                let mut opened = 0;
                for frame in 0..frames {
                    opened += collector.advance(frame as f64 * FRAME as f64).count();
                }
                black_box(opened)
            })
        });

        group.bench_with_input(BenchmarkId::new("group_arcs", count), &count, |b, _| {
            b.iter(|| black_box(contiguous_groups(black_box(&spans))))
        });
    }

    group.finish();
}
