//! Kit-level behaviors, driven through the stage the way a host drives it.

use stagebeat::{
    animation::recoil::recoil,
    instruments::notes::*,
    timeline::{Timeline, TimelineBuilder},
    RenderState, Stage, StageConfig, TransportCommand,
};

const FPS: f64 = 60.0;
const DELTA: f32 = 1.0 / 60.0;

/// 120 bpm at 480 ticks per quarter: 960 ticks per second
fn at(seconds: f64) -> u64 {
    (seconds * 960.0).round() as u64
}

fn stage(build: impl FnOnce(TimelineBuilder) -> TimelineBuilder) -> Stage {
    let timeline = build(Timeline::builder(480).tempo(0, 120.0)).build().unwrap();
    Stage::new(&timeline, StageConfig::default())
}

fn instrument<'a>(states: &'a [RenderState], name: &str) -> &'a RenderState {
    states
        .iter()
        .find(|s| s.instrument == name)
        .unwrap_or_else(|| panic!("no {name} on stage"))
}

/// Tick every frame from 0 to `until`, handing each frame to `f`
fn play(stage: &mut Stage, until: f64, mut f: impl FnMut(f64, &[RenderState])) {
    let frames = (until * FPS).round() as u64;
    for k in 0..=frames {
        let time = k as f64 / FPS;
        let states = stage.tick(time, DELTA);
        f(time, &states);
    }
}

#[test]
fn simultaneous_conga_hits_recoil_with_the_louder() {
    let mut stage = stage(|b| {
        b.hit(at(1.0), MUTE_HIGH_CONGA, 40)
            .hit(at(1.0), OPEN_HIGH_CONGA, 100)
    });

    let mut body = f32::NAN;
    play(&mut stage, 1.0, |_, states| {
        body = instrument(states, "congas").part("high_conga").map_or(f32::NAN, |p| p.offset.y);
    });

    let expected = recoil(0.0, 100, DELTA, 2.0, 22.0);
    assert!((body - expected).abs() < 1e-5, "recoil {body}, expected {expected}");
}

#[test]
fn pendulum_flips_once_per_click() {
    let mut stage = stage(|b| {
        b.hit(at(1.0), METRONOME_CLICK, 100)
            .hit(at(1.5), METRONOME_CLICK, 100)
            .hit(at(2.0), METRONOME_CLICK, 100)
    });

    let mut at_impact = Vec::new();
    play(&mut stage, 2.5, |time, states| {
        if [1.0, 1.5, 2.0].contains(&time) {
            let z = instrument(states, "metronome").part("click_pendulum").map_or(f32::NAN, |p| p.rotation.z);
            at_impact.push(z.to_degrees().round());
        }
    });

    assert_eq!(at_impact, vec![-30.0, 30.0, -30.0]);
}

#[test]
fn mirrored_halves_stay_symmetric() {
    let mut stage = stage(|b| {
        b.hit(at(0.5), CLAVES, 60)
            .hit(at(0.75), CLAVES, 127)
            .hit(at(1.5), HAND_CLAP, 100)
    });

    play(&mut stage, 2.0, |_, states| {
        for name in ["claves", "hand_clap"] {
            let state = instrument(states, name);
            let (hand, mirror) = (state.part("hand"), state.part("hand_mirror"));
            assert_eq!(hand.map(|p| -p.rotation), mirror.map(|p| p.rotation));
            assert_eq!(hand.map(|p| p.visible), mirror.map(|p| p.visible));
        }
    });
}

#[test]
fn triangle_hand_is_placed_for_the_next_hit() {
    let mut stage = stage(|b| {
        b.hit(at(1.0), OPEN_TRIANGLE, 100)
            .hit(at(3.0), MUTE_TRIANGLE, 100)
            .hit(at(5.0), OPEN_TRIANGLE, 100)
    });
    let muting = |states: &[RenderState]| {
        instrument(states, "triangle").part("muting_hand").is_some_and(|p| p.visible)
    };

    assert!(!muting(&stage.tick(0.0, DELTA)));

    // Entering mid-song, the hand waits in the pose of the coming hit
    stage.seek(2.0);
    assert!(muting(&stage.tick(2.0, DELTA)));
    stage.seek(3.5);
    assert!(!muting(&stage.tick(3.5, DELTA)));

    // Played through, it keeps the pose of the hit that fired last
    stage.seek(2.5);
    stage.tick(2.5, DELTA);
    stage.tick(3.0, DELTA);
    assert!(muting(&stage.tick(3.5, DELTA)));
}

#[test]
fn laser_shows_for_a_tenth_of_a_second() {
    let mut stage = stage(|b| b.hit(at(1.0), HIGH_Q, 100));

    let mut shown = 0;
    play(&mut stage, 2.0, |_, states| {
        if instrument(states, "high_q").part("laser").is_some_and(|p| p.visible) {
            shown += 1;
        }
    });
    let seconds = shown as f64 / FPS;
    assert!((seconds - 0.1).abs() <= 1.0 / FPS + 1e-9, "shown for {seconds}s");
}

#[test]
fn snare_returns_to_rest_without_overshoot() {
    let mut stage = stage(|b| b.hit(at(0.5), ACOUSTIC_SNARE, 127));

    let mut last = f32::NEG_INFINITY;
    let mut lowest = 0.0f32;
    play(&mut stage, 1.5, |time, states| {
        let y = instrument(states, "snare").part("drum").map_or(f32::NAN, |p| p.offset.y);
        assert!(y <= 0.0);
        if time > 0.5 {
            assert!(y >= last, "drum moved back down at {time}");
        }
        lowest = lowest.min(y);
        last = y;
    });
    assert!((lowest + 2.0).abs() < 1e-4);
    assert_eq!(last, 0.0);
}

#[test]
fn unplayed_instruments_stay_off_stage() {
    let stage = stage(|b| b.hit(at(1.0), ACOUSTIC_BASS_DRUM, 100).note(0, 480, 0, 60, 100));
    assert_eq!(stage.instrument_names(), vec!["bass_drum"]);
}

#[test]
fn empty_song_renders_nothing() {
    let mut stage = stage(|b| b);
    assert!(stage.tick(1.0, DELTA).is_empty());
    assert!(stage.frame(DELTA, &mut ()).is_empty());
}

#[test]
fn loop_restart_rewinds_every_instrument() {
    let mut stage = stage(|b| b.hit(at(0.5), CRASH_CYMBAL_1, 127).hit(at(1.0), ACOUSTIC_SNARE, 100));
    let loop_at = stage.transport().loop_at();
    assert!((loop_at - (1.0 + 1.0 / 960.0 + 2.0)).abs() < 1e-9);

    let mut commands = std::collections::VecDeque::from([TransportCommand::Seek(loop_at - 0.01)]);
    stage.frame(DELTA, &mut commands);
    assert_eq!(stage.transport().time(), 0.0);

    let states = stage.frame(DELTA, &mut ());
    let crash = instrument(&states, "crash_1");
    assert_eq!(crash.part("cymbal").map(|p| p.rotation.x), Some(0.0));
    assert!(!instrument(&states, "snare").part("stick").is_some_and(|p| p.visible));
}
