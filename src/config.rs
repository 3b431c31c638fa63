//! Tunables for every animator, passed down by constructor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scene::Axis;

/// Timing and amplitude of stick strikes
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct StrikerConfig {
    /// Seconds before a hit that the stick starts moving
    pub anticipation: f64,
    /// Seconds after a hit that the stick takes to settle
    pub recoil: f64,
    /// Lift of the stick at rest, in degrees
    pub max_angle_degrees: f32,
    /// Sticky visibility bridges gaps shorter than this many seconds
    pub sticky_gap_seconds: f64,
    /// ... or spanning at most this many quarter notes
    pub sticky_gap_quarters: f64,
    /// Offset per radian of rotation when the stick is free to lift
    pub lift_per_radian: f32,
}

impl Default for StrikerConfig {
    fn default() -> Self {
        Self {
            anticipation: 0.2,
            recoil: 0.4,
            max_angle_degrees: 50.0,
            sticky_gap_seconds: 2.0,
            sticky_gap_quarters: 2.1,
            lift_per_radian: 2.0,
        }
    }
}

/// Drum head recoil after a hit
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct RecoilConfig {
    /// Displacement at full velocity
    pub distance: f32,
    /// Units per second the drum travels back to rest
    pub comeback: f32,
    pub axis: Axis,
}

impl Default for RecoilConfig {
    fn default() -> Self {
        Self {
            distance: 2.0,
            comeback: 22.0,
            axis: Axis::Y,
        }
    }
}

/// When a whole instrument is on stage
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceConfig {
    /// Appear this long before the next hit
    pub before: f64,
    /// Stay through silences up to this long
    pub between: f64,
    /// Linger this long after the last hit
    pub after: f64,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            before: 1.0,
            between: 7.0,
            after: 2.0,
        }
    }
}

/// Cymbal wobble shape
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct WobbleConfig {
    pub amplitude: f32,
    pub speed: f32,
    pub dampening: f32,
    /// Seconds after a strike when the wobble stops outright
    pub cutoff: f32,
}

impl Default for WobbleConfig {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            speed: 4.5,
            dampening: 1.5,
            cutoff: 4.5,
        }
    }
}

/// Everything the stage needs to build its instruments
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StageConfig {
    pub striker: StrikerConfig,
    pub recoil: RecoilConfig,
    pub presence: PresenceConfig,
    pub wobble: WobbleConfig,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: StageConfig =
            ron::from_str("(striker: (anticipation: 0.3), presence: (after: 4.0))").unwrap();

        assert_eq!(config.striker.anticipation, 0.3);
        assert_eq!(config.striker.recoil, 0.4);
        assert_eq!(config.presence.after, 4.0);
        assert_eq!(config.recoil, RecoilConfig::default());
    }
}
