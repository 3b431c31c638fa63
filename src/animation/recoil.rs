use crate::{
    config::RecoilConfig,
    scene::{Axis, Vec3},
};

/// `sqrt(127)`: full velocity maps to the full recoil distance
const FULL_VELOCITY_ROOT: f32 = 11.269427;

/// Next recoil position of a drum.
///
/// The drum eases back towards rest (0) at `comeback` units per second and
/// never passes it. A hit this frame (`velocity > 0`) snaps it to
/// `-distance * sqrt(velocity / 127)` instead.
pub fn recoil(position: f32, velocity: u8, delta: f32, distance: f32, comeback: f32) -> f32 {
    if velocity > 0 {
        (velocity as f32).sqrt() / FULL_VELOCITY_ROOT * -distance.abs()
    } else {
        (position + comeback * delta).min(0.0)
    }
}

/// A drum body pushed down by hits and springing back up
#[derive(Debug, Clone)]
pub struct DrumRecoil {
    position: f32,
    distance: f32,
    comeback: f32,
    axis: Axis,
}

impl DrumRecoil {
    pub fn new(config: &RecoilConfig) -> Self {
        Self {
            position: 0.0,
            distance: config.distance,
            comeback: config.comeback,
            axis: config.axis,
        }
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn comeback(mut self, comeback: f32) -> Self {
        self.comeback = comeback;
        self
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Apply this frame's strongest hit (0 for none) and return the offset
    pub fn tick(&mut self, velocity: u8, delta: f32) -> Vec3 {
        self.position = recoil(self.position, velocity, delta, self.distance, self.comeback);
        self.offset()
    }

    pub fn offset(&self) -> Vec3 {
        Vec3::along(self.axis, self.position)
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Put the drum back at rest
    pub fn reset(&mut self) {
        self.position = 0.0;
    }

    /// Recompute the position after a jump in time, given the last hit on
    /// this body as `(seconds ago, velocity)`
    pub fn resume(&mut self, last_hit: Option<(f64, u8)>) {
        self.position = match last_hit {
            Some((ago, velocity)) if velocity > 0 && ago >= 0.0 => {
                let struck = recoil(0.0, velocity, 0.0, self.distance, self.comeback);
                recoil(struck, 0, ago as f32, self.distance, self.comeback)
            }
            _ => 0.0,
        };
    }
}

/// The strongest of several simultaneous hits on one drum body
pub fn max_velocity(velocities: impl IntoIterator<Item = u8>) -> u8 {
    velocities.into_iter().max().unwrap_or(0)
}
