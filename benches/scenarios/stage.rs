//! Benchmarks for a full percussion stage.
//!
//! These render every instrument of a busy kit the way a host does, frame
//! after frame, with and without scrubbing.

use std::{collections::VecDeque, hint::black_box};

use criterion::{BenchmarkId, Criterion};
use stagebeat::{
    instruments::notes::*,
    timeline::{Timeline, PERCUSSION_CHANNEL},
    Stage, StageConfig, TransportCommand,
};

use crate::FRAME;

/// A bar-based groove touching most of the kit
fn groove(bars: u64) -> Timeline {
    let bar = 1920;
    let mut builder = Timeline::builder(480).tempo(0, 128.0);
    for i in 0..bars {
        let start = i * bar;
        for step in 0..8 {
            builder = builder.hit(start + step * 240, CLOSED_HI_HAT, 90);
        }
        builder = builder
            .hit(start, ACOUSTIC_BASS_DRUM, 110)
            .hit(start + 960, ACOUSTIC_BASS_DRUM, 110)
            .hit(start + 480, ACOUSTIC_SNARE, 100)
            .hit(start + 1440, ACOUSTIC_SNARE, 100)
            .hit(start, CRASH_CYMBAL_1, 120)
            .hit(start + 240, OPEN_HIGH_CONGA, 80)
            .hit(start + 720, LOW_CONGA, 80)
            .hit(start + 1200, COWBELL, 80)
            .hit(start + 1680, OPEN_TRIANGLE, 70)
            .hit(start + 480, METRONOME_CLICK, 60)
            .hit(start + 960, SHORT_GUIRO, 60)
            .hit(start + 1440, LONG_GUIRO, 60)
            .hit(start + 1200, OPEN_CUICA, 60)
            .hit(start + 1680, CLAVES, 60);
    }
    builder
        .program_change(0, PERCUSSION_CHANNEL, 0)
        .build()
        .unwrap()
}

pub fn bench_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/stage");

    for &bars in &[8u64, 64] {
        let timeline = groove(bars);

        let mut stage = Stage::new(&timeline, StageConfig::default());
        group.bench_with_input(BenchmarkId::new("frame", bars), &bars, |b, _| {
            b.iter(|| black_box(stage.frame(FRAME, &mut ())))
        });

        let mut stage = Stage::new(&timeline, StageConfig::default());
        let duration = timeline.duration();
        group.bench_with_input(BenchmarkId::new("scrub_frame", bars), &bars, |b, _| {
            let mut t = 0.0;
            let mut commands = VecDeque::new();
            b.iter(|| {
                t = (t + 5.1) % duration;
                commands.push_back(TransportCommand::Seek(t));
                black_box(stage.frame(FRAME, &mut commands))
            })
        });
    }

    group.finish();
}
