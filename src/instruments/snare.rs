use crate::{
    animation::{DrumRecoil, Presence, Striker},
    scene::{PartState, RenderState},
    timeline::{hits_for, Hit},
};

use super::{last_hit, notes::*, timed, Instrument, Setup};

/// A rim click moves the drum half as much as a hit on the head
const SIDE_STICK_FACTOR: f32 = 0.5;

/// Snare drum with a stick for the head and one laid across the rim
pub struct SnareDrum {
    stick: Striker,
    side_stick: Striker,
    recoil: DrumRecoil,
    presence: Presence<Hit>,
}

impl SnareDrum {
    pub fn new(hits: &[Hit], setup: &Setup) -> Self {
        let regular = hits_for(hits, &[ACOUSTIC_SNARE, ELECTRIC_SNARE]);
        let side = hits_for(hits, &[SIDE_STICK]);
        let all = hits_for(hits, &[ACOUSTIC_SNARE, ELECTRIC_SNARE, SIDE_STICK]);
        Self {
            stick: setup.striker(regular),
            side_stick: setup.striker(side).fixed(true),
            recoil: setup.recoil(),
            presence: setup.presence(all),
        }
    }

    fn side_velocity(velocity: u8) -> u8 {
        (velocity as f32 * SIDE_STICK_FACTOR) as u8
    }
}

impl Instrument for SnareDrum {
    fn name(&self) -> &'static str {
        "snare"
    }

    fn tick(&mut self, time: f64, delta: f32) -> RenderState {
        let stick = self.stick.tick(time);
        let side = self.side_stick.tick(time);

        let velocity = stick.velocity().max(Self::side_velocity(side.velocity()));
        let offset = self.recoil.tick(velocity, delta);

        RenderState::new(self.name(), self.presence.tick(time))
            .with(self.stick.part(&stick, "stick"))
            .with(self.side_stick.part(&side, "side_stick"))
            .with(PartState::new("drum").offset(offset))
    }

    fn seek(&mut self, time: f64) {
        self.stick.seek(time);
        self.side_stick.seek(time);
        let side = timed(self.side_stick.prev()).map(|(at, v)| (at, Self::side_velocity(v)));
        self.recoil
            .resume(last_hit(time, [timed(self.stick.prev()), side]));
        self.presence.seek(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{animation::recoil::recoil, config::StageConfig, instruments::test_support::*};

    fn drum_offset(state: &RenderState) -> f32 {
        state.part("drum").map_or(f32::NAN, |p| p.offset.y)
    }

    #[test]
    fn side_stick_recoils_at_half_velocity() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut snare = SnareDrum::new(&[hit(1.0, SIDE_STICK, 100)], &setup);

        let state = snare.tick(1.0, 1.0 / 60.0);
        let expected = recoil(0.0, 50, 0.0, config.recoil.distance, 0.0);
        assert!((drum_offset(&state) - expected).abs() < 1e-6);
    }

    #[test]
    fn head_hit_beats_simultaneous_rim_click() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let hits = [hit(1.0, SIDE_STICK, 127), hit(1.0, ACOUSTIC_SNARE, 80)];
        let mut snare = SnareDrum::new(&hits, &setup);

        let state = snare.tick(1.0, 1.0 / 60.0);
        let expected = recoil(0.0, 80, 0.0, config.recoil.distance, 0.0);
        assert!((drum_offset(&state) - expected).abs() < 1e-6);
    }

    #[test]
    fn each_stick_plays_its_own_notes() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut snare = SnareDrum::new(&[hit(1.0, ELECTRIC_SNARE, 90)], &setup);

        let state = snare.tick(0.9, 1.0 / 60.0);
        assert_eq!(state.part("stick").map(|p| p.visible), Some(true));
        assert_eq!(state.part("side_stick").map(|p| p.visible), Some(false));
    }
}
