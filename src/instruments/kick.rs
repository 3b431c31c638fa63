use crate::{
    animation::{DrumRecoil, Presence},
    collect::EventCollector,
    scene::{Axis, PartState, RenderState, Vec3},
    timeline::{hits_for, Hit},
};

use super::{notes::*, timed, Instrument, Setup};

/// How fast the beater falls back after a kick, in full swings per second
const BEATER_RETURN: f64 = 8.0;
const BEATER_REST: f32 = 0.87;
const PEDAL_REST: f32 = 0.2;
const KICK_RECOIL_DISTANCE: f32 = 3.0;

/// Bass drum: the beater and pedal snap forward on each kick while the shell
/// is pushed back towards the audience.
pub struct BassDrum {
    hits: EventCollector<Hit>,
    recoil: DrumRecoil,
    presence: Presence<Hit>,
}

impl BassDrum {
    pub fn new(hits: &[Hit], setup: &Setup) -> Self {
        let kicks = hits_for(hits, &[ACOUSTIC_BASS_DRUM, ELECTRIC_BASS_DRUM]);
        Self {
            presence: setup.presence(kicks.clone()),
            hits: EventCollector::new(kicks),
            recoil: setup.recoil().axis(Axis::Z).distance(KICK_RECOIL_DISTANCE),
        }
    }

    /// 1.0 on a kick, falling linearly to 0 within 1/8 s
    fn swing(&self, time: f64) -> f32 {
        self.hits
            .prev()
            .map_or(0.0, |kick| (1.0 - (time - kick.time) * BEATER_RETURN).clamp(0.0, 1.0) as f32)
    }
}

impl Instrument for BassDrum {
    fn name(&self) -> &'static str {
        "bass_drum"
    }

    fn tick(&mut self, time: f64, delta: f32) -> RenderState {
        let velocity = self.hits.advance_collect_one(time).map_or(0, |h| h.velocity);
        let offset = self.recoil.tick(velocity, delta);
        let swing = self.swing(time);

        RenderState::new(self.name(), self.presence.tick(time))
            .with(PartState::new("beater").rotated(Vec3::new(BEATER_REST - swing, 0.0, 0.0)))
            .with(PartState::new("pedal").rotated(Vec3::new(PEDAL_REST - swing * 0.5, 0.0, 0.0)))
            .with(PartState::new("drum").offset(offset))
    }

    fn seek(&mut self, time: f64) {
        self.hits.seek(time);
        self.recoil
            .resume(timed(self.hits.prev()).map(|(at, velocity)| (time - at, velocity)));
        self.presence.seek(time);
    }
}
