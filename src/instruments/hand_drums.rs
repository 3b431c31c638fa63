//! Paired drums and bells of the Latin section.
//!
//! Where two notes land on one physical body (the muted and open high conga,
//! both agogo bells on one frame) the body recoils with the louder hit.

use crate::{
    animation::{Striker, StrikerVisibility},
    timeline::Hit,
};

use super::{notes::*, Setup, StruckInstrument};

fn hand(striker: Striker) -> Striker {
    striker.visibility(StrikerVisibility::Always)
}

pub fn congas(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder("congas", hits, setup)
        .voice_with("muted_hand", &[MUTE_HIGH_CONGA], hand)
        .voice_with("high_hand", &[OPEN_HIGH_CONGA], hand)
        .voice_with("low_hand", &[LOW_CONGA], hand)
        .body("high_conga", &["muted_hand", "high_hand"])
        .body("low_conga", &["low_hand"])
        .build()
}

pub fn bongos(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder("bongos", hits, setup)
        .voice_with("high_hand", &[HIGH_BONGO], hand)
        .voice_with("low_hand", &[LOW_BONGO], hand)
        .body("high_bongo", &["high_hand"])
        .body("low_bongo", &["low_hand"])
        .build()
}

pub fn timbales(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder("timbales", hits, setup)
        .voice("high_stick", &[HIGH_TIMBALE])
        .voice("low_stick", &[LOW_TIMBALE])
        .body("high_timbale", &["high_stick"])
        .body("low_timbale", &["low_stick"])
        .build()
}

pub fn woodblocks(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder("woodblocks", hits, setup)
        .voice("high_stick", &[HIGH_WOODBLOCK])
        .voice("low_stick", &[LOW_WOODBLOCK])
        .body("high_block", &["high_stick"])
        .body("low_block", &["low_stick"])
        .build()
}

/// Both bells hang from one handle, so they move as one body
pub fn agogo(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder("agogo", hits, setup)
        .voice("high_stick", &[HIGH_AGOGO])
        .voice("low_stick", &[LOW_AGOGO])
        .body_with("bells", &["high_stick", "low_stick"], |recoil| recoil.distance(0.5))
        .build()
}

pub fn cowbell(hits: &[Hit], setup: &Setup) -> StruckInstrument {
    StruckInstrument::builder("cowbell", hits, setup)
        .voice("stick", &[COWBELL])
        .body_with("bell", &["stick"], |recoil| recoil.distance(0.5))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        animation::recoil::recoil,
        config::StageConfig,
        instruments::{test_support::*, Instrument},
    };

    fn offset(state: &crate::scene::RenderState, part: &str) -> f32 {
        state.part(part).map_or(f32::NAN, |p| p.offset.y)
    }

    #[test]
    fn shared_conga_recoils_with_louder_hit() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let hits = [hit(1.0, MUTE_HIGH_CONGA, 40), hit(1.0, OPEN_HIGH_CONGA, 100)];
        let mut congas = congas(&hits, &setup);

        let state = congas.tick(1.0, 1.0 / 60.0);
        let expected = recoil(0.0, 100, 1.0 / 60.0, config.recoil.distance, config.recoil.comeback);
        assert!((offset(&state, "high_conga") - expected).abs() < 1e-6);
        assert_eq!(offset(&state, "low_conga"), 0.0);
    }

    #[test]
    fn separate_bongos_recoil_independently() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut bongos = bongos(&[hit(1.0, LOW_BONGO, 127)], &setup);

        let state = bongos.tick(1.0, 1.0 / 60.0);
        assert!(offset(&state, "low_bongo") < 0.0);
        assert_eq!(offset(&state, "high_bongo"), 0.0);
    }

    #[test]
    fn hands_never_hide() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut congas = congas(&[hit(30.0, LOW_CONGA, 90)], &setup);
        let state = congas.tick(1.0, 1.0 / 60.0);
        assert!(state.parts.iter().filter(|p| p.name.ends_with("hand")).all(|p| p.visible));
        assert!(!state.visible);
    }

    #[test]
    fn seek_restores_recoil_from_last_hit() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let hits = [hit(1.0, HIGH_TIMBALE, 100), hit(1.5, LOW_TIMBALE, 127)];

        let mut timbales = timbales(&hits, &setup);
        timbales.tick(4.0, 1.0 / 60.0);
        timbales.seek(1.53);
        let state = timbales.tick(1.53, 0.0);

        let expected = -config.recoil.distance + config.recoil.comeback * 0.03;
        assert!((offset(&state, "low_timbale") - expected).abs() < 1e-4);
        assert_eq!(offset(&state, "high_timbale"), 0.0);
    }
}
