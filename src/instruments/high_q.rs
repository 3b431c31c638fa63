use crate::{
    animation::{OneShot, Presence, Striker},
    scene::{PartState, RenderState},
    timeline::{hits_for, Hit},
};

use super::{notes::*, Instrument, Setup};

const LASER_FLASH: f32 = 0.1;

/// A pad that fires a laser beam for a tenth of a second on every hit
pub struct HighQ {
    stick: Striker,
    laser: OneShot,
    presence: Presence<Hit>,
}

impl HighQ {
    pub fn new(hits: &[Hit], setup: &Setup) -> Self {
        let hits = hits_for(hits, &[HIGH_Q]);
        Self {
            presence: setup.presence(hits.clone()),
            stick: setup.striker(hits),
            laser: OneShot::new(LASER_FLASH),
        }
    }
}

impl Instrument for HighQ {
    fn name(&self) -> &'static str {
        "high_q"
    }

    fn tick(&mut self, time: f64, delta: f32) -> RenderState {
        let stick = self.stick.tick(time);
        let firing = if stick.strike.is_some() {
            self.laser.trigger();
            true
        } else {
            self.laser.tick(delta).is_some()
        };

        RenderState::new(self.name(), self.presence.tick(time))
            .with(self.stick.part(&stick, "stick"))
            .with(PartState::new("laser").visible(firing))
    }

    fn seek(&mut self, time: f64) {
        self.stick.seek(time);
        self.laser
            .resume(self.stick.prev().map(|hit| time - hit.time));
        self.presence.seek(time);
    }
}
