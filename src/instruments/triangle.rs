use crate::{
    animation::{Pose, PoseToggle, Presence, Striker, Wobble},
    scene::{PartState, RenderState, Vec3},
    timeline::{hits_for, Hit},
};

use super::{notes::*, Instrument, Setup};

/// Triangle: an open hit rings and swings the triangle; a muted one is
/// played with the other hand gripping it.
pub struct Triangle {
    beater: Striker,
    hand: PoseToggle,
    wobble: Wobble,
    presence: Presence<Hit>,
}

impl Triangle {
    pub fn new(hits: &[Hit], setup: &Setup) -> Self {
        let all = hits_for(hits, &[MUTE_TRIANGLE, OPEN_TRIANGLE]);
        Self {
            presence: setup.presence(all.clone()),
            beater: setup.striker(all),
            hand: PoseToggle::new(hits_for(hits, &[MUTE_TRIANGLE]), hits_for(hits, &[OPEN_TRIANGLE])),
            wobble: setup.wobble().amplitude(0.5).speed(2.0),
        }
    }
}

impl Instrument for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    fn tick(&mut self, time: f64, delta: f32) -> RenderState {
        let beater = self.beater.tick(time);
        let (pose, fired) = self.hand.tick(time);
        if fired.is_some() {
            match pose {
                Pose::Open => self.wobble.strike(),
                Pose::Closed => self.wobble.cancel(),
            }
        }
        let angle = self.wobble.tick(delta);

        RenderState::new(self.name(), self.presence.tick(time))
            .with(self.beater.part(&beater, "beater"))
            .with(PartState::new("triangle").rotated(Vec3::new(angle, 0.0, 0.0)))
            .with(PartState::new("muting_hand").visible(pose == Pose::Closed))
    }

    fn seek(&mut self, time: f64) {
        self.beater.seek(time);
        self.hand.seek(time);
        let ringing = self
            .beater
            .prev()
            .filter(|hit| hit.note == OPEN_TRIANGLE)
            .map(|hit| (time - hit.time) as f32);
        self.wobble.resume(ringing);
        self.presence.seek(time);
    }
}
