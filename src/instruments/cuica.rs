use crate::{
    animation::{Pose, PoseToggle, Presence, Smoother, VecSmoother},
    collect::EventCollector,
    scene::{PartState, RenderState, Vec3},
    timeline::{hits_for, Hit},
};

use super::{notes::*, played, Instrument, Setup};

const STROKE_RATE: f32 = 10.0;
const RESTING_HAND_RATE: f32 = 30.0;

/// Cuica: one hand rubs the stick inside the drum, in and out on alternate
/// hits, while the other presses the head for a muted note and lifts for an
/// open one.
pub struct Cuica {
    hits: EventCollector<Hit>,
    resting: PoseToggle,
    stroke: Smoother,
    resting_offset: VecSmoother,
    resting_rotation: VecSmoother,
    presence: Presence<Hit>,
}

impl Cuica {
    pub fn new(hits: &[Hit], setup: &Setup) -> Self {
        let all = hits_for(hits, &[MUTE_CUICA, OPEN_CUICA]);
        let resting = PoseToggle::new(hits_for(hits, &[MUTE_CUICA]), hits_for(hits, &[OPEN_CUICA]));
        let (offset, rotation) = Self::resting_hand(resting.pose());
        Self {
            presence: setup.presence(all.clone()),
            hits: EventCollector::new(all),
            resting,
            stroke: Smoother::new(-1.0, STROKE_RATE),
            resting_offset: VecSmoother::new(offset, RESTING_HAND_RATE),
            resting_rotation: VecSmoother::new(rotation, RESTING_HAND_RATE),
        }
    }

    /// Resting hand offset and rotation for a pose
    fn resting_hand(pose: Pose) -> (Vec3, Vec3) {
        match pose {
            Pose::Closed => (Vec3::new(3.0, 0.0, 0.0), Vec3::degrees(0.0, 90.0, 0.0)),
            Pose::Open => (Vec3::new(3.0, 1.0, 0.0), Vec3::degrees(15.0, 90.0, 0.0)),
        }
    }

    /// Every hit moves the stroking hand the other way, starting inwards
    fn stroke_target(&self) -> f32 {
        if played(&self.hits) % 2 == 1 {
            1.0
        } else {
            -1.0
        }
    }
}

impl Instrument for Cuica {
    fn name(&self) -> &'static str {
        "cuica"
    }

    fn tick(&mut self, time: f64, delta: f32) -> RenderState {
        self.hits.advance_collect_all(time);
        let (pose, _) = self.resting.tick(time);
        let (offset, rotation) = Self::resting_hand(pose);

        let stroke = self.stroke.tick(self.stroke_target(), delta);
        let offset = self.resting_offset.tick(offset, delta);
        let rotation = self.resting_rotation.tick(rotation, delta);

        RenderState::new(self.name(), self.presence.tick(time))
            .with(PartState::new("stroke_hand").offset(Vec3::new(0.0, stroke, 0.0)))
            .with(PartState::new("resting_hand").offset(offset).rotated(rotation))
    }

    fn seek(&mut self, time: f64) {
        self.hits.seek(time);
        self.resting.seek(time);
        let (offset, rotation) = Self::resting_hand(self.resting.pose());
        self.stroke.snap(self.stroke_target());
        self.resting_offset.snap(offset);
        self.resting_rotation.snap(rotation);
        self.presence.seek(time);
    }
}
