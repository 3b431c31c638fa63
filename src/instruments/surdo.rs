use crate::{
    animation::{DrumRecoil, Pose, PoseToggle, Presence, Striker},
    scene::{PartState, RenderState, Vec3},
    timeline::{hits_for, Hit},
};

use super::{last_hit, notes::*, timed, Instrument, Setup};

/// Surdo: one stick plays both notes while the free hand rests on the head
/// to mute it, or lifts off for an open hit.
pub struct Surdo {
    stick: Striker,
    hand: PoseToggle,
    recoil: DrumRecoil,
    presence: Presence<Hit>,
}

impl Surdo {
    pub fn new(hits: &[Hit], setup: &Setup) -> Self {
        let all = hits_for(hits, &[MUTE_SURDO, OPEN_SURDO]);
        Self {
            stick: setup.striker(all.clone()),
            hand: PoseToggle::new(hits_for(hits, &[MUTE_SURDO]), hits_for(hits, &[OPEN_SURDO])),
            recoil: setup.recoil(),
            presence: setup.presence(all),
        }
    }

    fn hand(pose: Pose) -> PartState {
        match pose {
            Pose::Closed => PartState::new("hand"),
            Pose::Open => PartState::new("hand")
                .offset(Vec3::new(0.0, 2.0, 0.0))
                .rotated(Vec3::degrees(30.0, 0.0, 0.0)),
        }
    }
}

impl Instrument for Surdo {
    fn name(&self) -> &'static str {
        "surdo"
    }

    fn tick(&mut self, time: f64, delta: f32) -> RenderState {
        let stick = self.stick.tick(time);
        let (pose, _) = self.hand.tick(time);
        let offset = self.recoil.tick(stick.velocity(), delta);

        RenderState::new(self.name(), self.presence.tick(time))
            .with(self.stick.part(&stick, "stick"))
            .with(Self::hand(pose))
            .with(PartState::new("drum").offset(offset))
    }

    fn seek(&mut self, time: f64) {
        self.stick.seek(time);
        self.hand.seek(time);
        self.recoil.resume(last_hit(time, [timed(self.stick.prev())]));
        self.presence.seek(time);
    }
}
