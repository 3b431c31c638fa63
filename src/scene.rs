//! What instruments report to the host every frame.
//!
//! The engine never touches a scene graph. Each instrument returns a
//! [`RenderState`] listing its named parts with a rotation (radians), an
//! offset and a visibility flag; the host binds the names to its own nodes.

use std::ops::{Add, Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// A vector with `value` on one axis and zero elsewhere
    pub fn along(axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => Self::new(value, 0.0, 0.0),
            Axis::Y => Self::new(0.0, value, 0.0),
            Axis::Z => Self::new(0.0, 0.0, value),
        }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        self + (other + -self) * t
    }

    /// Euler angles given in degrees, converted to radians
    pub fn degrees(x: f32, y: f32, z: f32) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians())
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// One named, independently moving piece of an instrument
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PartState {
    pub name: &'static str,
    /// Euler rotation in radians
    pub rotation: Vec3,
    pub offset: Vec3,
    pub visible: bool,
}

impl PartState {
    /// A visible part at rest
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rotation: Vec3::ZERO,
            offset: Vec3::ZERO,
            visible: true,
        }
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Everything an instrument reports for one frame
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub instrument: &'static str,
    /// Whether the instrument as a whole is on stage
    pub visible: bool,
    pub parts: Vec<PartState>,
}

impl RenderState {
    pub fn new(instrument: &'static str, visible: bool) -> Self {
        Self {
            instrument,
            visible,
            parts: Vec::new(),
        }
    }

    pub fn with(mut self, part: PartState) -> Self {
        self.parts.push(part);
        self
    }

    pub fn part(&self, name: &str) -> Option<&PartState> {
        self.parts.iter().find(|p| p.name == name)
    }
}
