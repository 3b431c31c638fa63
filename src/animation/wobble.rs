use std::f32::consts::PI;

use crate::config::WobbleConfig;

/// Damped cosine wobble `t` seconds after a strike.
///
/// Zero before the strike and from `cutoff` onwards.
pub fn wobble_angle(t: f32, amplitude: f32, speed: f32, dampening: f32, cutoff: f32) -> f32 {
    if (0.0..cutoff).contains(&t) {
        amplitude * (t * speed * PI).cos() / (3.0 + t.powi(3) * speed * dampening * PI)
    } else {
        0.0
    }
}

/// A cymbal-like body that rocks after being struck and settles
#[derive(Debug, Clone)]
pub struct Wobble {
    amplitude: f32,
    speed: f32,
    dampening: f32,
    cutoff: f32,
    /// Seconds since the last strike, `None` when at rest
    since_strike: Option<f32>,
    /// Struck since the last tick: that tick reports the strike instant
    fresh: bool,
}

impl Wobble {
    pub fn new(config: &WobbleConfig) -> Self {
        Self {
            amplitude: config.amplitude,
            speed: config.speed,
            dampening: config.dampening,
            cutoff: config.cutoff,
            since_strike: None,
            fresh: false,
        }
    }

    pub fn amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn dampening(mut self, dampening: f32) -> Self {
        self.dampening = dampening;
        self
    }

    /// Restart the wobble from the top
    pub fn strike(&mut self) {
        self.since_strike = Some(0.0);
        self.fresh = true;
    }

    /// Stop dead, e.g. when a hi-hat closes
    pub fn cancel(&mut self) {
        self.since_strike = None;
        self.fresh = false;
    }

    /// Resume as if the last strike was `seconds` ago
    pub fn resume(&mut self, seconds: Option<f32>) {
        self.since_strike = seconds.filter(|s| *s < self.cutoff);
        self.fresh = false;
    }

    /// Advance the clock and return the angle in radians
    pub fn tick(&mut self, delta: f32) -> f32 {
        let fresh = std::mem::take(&mut self.fresh);
        if let Some(t) = self.since_strike.as_mut().filter(|_| !fresh) {
            *t += delta;
        }
        self.angle()
    }

    pub fn angle(&self) -> f32 {
        self.since_strike.map_or(0.0, |t| {
            wobble_angle(t, self.amplitude, self.speed, self.dampening, self.cutoff)
        })
    }

    /// Wobble `remaining` seconds before a strike, as if time ran backwards
    pub fn reversed(&self, remaining: f64) -> f32 {
        wobble_angle(
            remaining as f32,
            self.amplitude,
            self.speed,
            self.dampening,
            self.cutoff,
        )
    }
}
