//! Percussion held in one hand and shaken or tapped, with nothing to recoil.

use crate::{
    animation::{Striker, StrikerVisibility},
    scene::Axis,
    timeline::Hit,
};

use super::{notes::*, Setup, StruckInstrument};

/// Held instruments stay in hand between hits and never swing forward
fn held(striker: Striker) -> Striker {
    striker.visibility(StrikerVisibility::Always).fixed(true)
}

fn shaken(name: &'static str, note: u8, hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder(name, hits, setup)
        .voice_with("hand", &[note], held)
        .build()
}

pub fn tambourine(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    shaken("tambourine", TAMBOURINE, hits, setup)
}

pub fn shaker(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    shaken("shaker", SHAKER, hits, setup)
}

pub fn jingle_bells(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    shaken("jingle_bells", JINGLE_BELL, hits, setup)
}

/// Twisted rather than shaken
pub fn cabasa(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder("cabasa", hits, setup)
        .voice_with("hand", &[CABASA], |s| held(s).axis(Axis::Y).max_angle_degrees(30.0))
        .build()
}

pub fn sticks(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder("sticks", hits, setup)
        .voice_with("stick", &[STICKS], |s| s.max_angle_degrees(30.0))
        .build()
}

pub fn square_click(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder("square_click", hits, setup)
        .voice("stick", &[SQUARE_CLICK])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::StageConfig,
        instruments::{test_support::*, Instrument},
    };

    #[test]
    fn held_instrument_stays_in_hand() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut tambourine = tambourine(&[hit(1.0, TAMBOURINE, 100)], &setup);

        play(3.0, |time, delta| {
            let state = tambourine.tick(time, delta);
            let hand = state.part("hand").cloned();
            assert!(hand.as_ref().is_some_and(|h| h.visible));
            assert!(hand.is_some_and(|h| h.offset.y == 0.0));
        });
    }

    #[test]
    fn cabasa_twists_about_y() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut cabasa = cabasa(&[hit(1.0, CABASA, 100)], &setup);
        let state = cabasa.tick(0.9, 1.0 / 60.0);
        let rotation = state.part("hand").map(|p| p.rotation).unwrap_or_default();
        assert_eq!(rotation.x, 0.0);
        assert!(rotation.y > 0.0);
    }
}
