//! Built-in groove: eight bars of kit with a little hand percussion and a
//! reverse cymbal swelling into the second half.

use stagebeat::{
    instruments::notes::*,
    timeline::{Timeline, TimelineBuilder, TimelineError, PERCUSSION_CHANNEL},
};

const PPQ: u32 = 480;
const BAR: u64 = PPQ as u64 * 4;
const EIGHTH: u64 = PPQ as u64 / 2;
const BARS: u64 = 8;

/// Melodic channel carrying the reverse cymbal
const PAD_CHANNEL: u8 = 1;

pub fn groove() -> Result<Timeline, TimelineError> {
    let mut builder = Timeline::builder(PPQ)
        .tempo(0, 104.0)
        .program_change(0, PERCUSSION_CHANNEL, 0)
        .program_change(BAR * 4, PERCUSSION_CHANNEL, 40)
        .program_change(0, PAD_CHANNEL, REVERSE_CYMBAL_PROGRAM)
        .note(BAR * 2, BAR * 2, PAD_CHANNEL, 60, 90)
        .note(BAR * 3, BAR, PAD_CHANNEL, 67, 90);

    for bar in 0..BARS {
        builder = bar_of_kit(builder, bar * BAR, bar);
    }
    builder.build()
}

fn bar_of_kit(mut builder: TimelineBuilder, start: u64, bar: u64) -> TimelineBuilder {
    let beat = PPQ as u64;
    let fill = bar % 4 == 3;

    builder = builder.hit(start, ACOUSTIC_BASS_DRUM, 110).hit(start + beat * 2, ACOUSTIC_BASS_DRUM, 100);
    if bar % 4 == 0 {
        builder = builder.hit(start, CRASH_CYMBAL_1, 120);
    }

    for step in 0..8 {
        let tick = start + step * EIGHTH;
        if fill && step >= 4 {
            break;
        }
        builder = if bar >= 4 {
            builder.hit(tick, RIDE_CYMBAL_1, if step % 2 == 0 { 100 } else { 70 })
        } else if step == 7 {
            builder.hit(tick, OPEN_HI_HAT, 90)
        } else {
            builder.hit(tick, CLOSED_HI_HAT, if step % 2 == 0 { 95 } else { 60 })
        };
    }
    if bar < 4 {
        builder = builder.hit(start + beat, PEDAL_HI_HAT, 70).hit(start + beat * 3, PEDAL_HI_HAT, 70);
    }

    builder = builder.hit(start + beat, ACOUSTIC_SNARE, 105);
    if fill {
        let toms = [HIGH_TOM, HIGH_MID_TOM, LOW_MID_TOM, LOW_FLOOR_TOM];
        for (i, tom) in toms.into_iter().enumerate() {
            builder = builder.hit(start + beat * 2 + i as u64 * EIGHTH, tom, 100);
        }
    } else {
        builder = builder.hit(start + beat * 3, ACOUSTIC_SNARE, 105).hit(start + beat * 3 + EIGHTH, SIDE_STICK, 60);
    }

    builder = builder
        .hit(start + EIGHTH, OPEN_HIGH_CONGA, 80)
        .hit(start + beat + EIGHTH, MUTE_HIGH_CONGA, 70)
        .hit(start + beat * 2 + EIGHTH, LOW_CONGA, 85)
        .hit(start, COWBELL, 90)
        .hit(start + beat * 2, COWBELL, 75);

    let triangle = if bar % 2 == 0 { OPEN_TRIANGLE } else { MUTE_TRIANGLE };
    builder.hit(start + beat * 3, triangle, 80)
}
