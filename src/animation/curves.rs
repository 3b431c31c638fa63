//! Shaping functions shared by the animators.
//!
//! All take and return `f64` so they can be fed straight from timeline
//! seconds; callers narrow to `f32` once at the end.

use std::f64::consts::PI;

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Map `value` from `[in_min, in_max]` onto `[out_min, out_max]`, clamping to
/// the output range. A degenerate input range maps to `out_max`.
pub fn map_range_clamped(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_max <= in_min {
        return out_max;
    }
    let t = ((value - in_min) / (in_max - in_min)).clamp(0.0, 1.0);
    lerp(out_min, out_max, t)
}

/// Soft strike: hold at rest, then fall along a parabola onto the hit.
pub fn dampened_strike(index: f64) -> f64 {
    if index < 0.4 {
        1.0
    } else if index < 1.0 {
        1.0 - 2.7777 * (index - 0.4).powi(2)
    } else {
        0.0
    }
}

/// Hard strike: wind up past rest on a half sine, then slam down on a
/// parabola. Meets the dampened curve's rest value at both ends.
pub fn forceful_strike(index: f64) -> f64 {
    const A: f64 = 0.5;
    const B: f64 = 5.55;
    const C: f64 = 1.0;

    if index < 0.0 {
        1.0
    } else if index < 0.4 {
        A + A * (PI * (index - 0.2) / 0.4).sin() + C
    } else if index < 1.0 {
        -B * (index - 0.4).powi(2) + C + 2.0 * A
    } else {
        0.0
    }
}

/// Velocity-weighted blend of the two strike shapes
pub fn strike_curve(index: f64, velocity: u8) -> f64 {
    lerp(
        dampened_strike(index),
        forceful_strike(index),
        velocity.min(127) as f64 / 127.0,
    )
}

/// Sigmoid rise from 0 back towards rest after a hit
pub fn recoil_curve(index: f64) -> f64 {
    2.0 / (1.0 + (-10.0 * index).exp()) - 1.0
}

/// Cubic ease-in-out on `[0, 1]`
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-3;

    #[test]
    fn dampened_curve_breakpoints() {
        assert_eq!(dampened_strike(0.0), 1.0);
        assert_eq!(dampened_strike(0.39), 1.0);
        assert!((dampened_strike(0.7) - (1.0 - 2.7777 * 0.09)).abs() < 1e-12);
        assert!(dampened_strike(0.9999).abs() < EPS);
        assert_eq!(dampened_strike(1.0), 0.0);
    }

    #[test]
    fn forceful_curve_is_continuous_at_breakpoint() {
        let below = forceful_strike(0.4 - 1e-9);
        let at = forceful_strike(0.4);
        assert!((below - 2.0).abs() < EPS);
        assert!((at - 2.0).abs() < EPS);
        assert!((forceful_strike(0.0) - 1.0).abs() < EPS);
        assert_eq!(forceful_strike(-0.5), 1.0);
        assert_eq!(forceful_strike(1.5), 0.0);
    }

    #[test]
    fn forceful_curve_lands_near_zero() {
        // -5.55 * 0.36 + 2 leaves a tiny residual before the cut to 0
        assert!(forceful_strike(0.999).abs() < 0.01);
    }

    #[test]
    fn strike_curve_blends_by_velocity() {
        let index = 0.3;
        assert_eq!(strike_curve(index, 0), dampened_strike(index));
        assert!((strike_curve(index, 127) - forceful_strike(index)).abs() < 1e-12);
        let mid = strike_curve(index, 64);
        assert!(mid > dampened_strike(index) && mid < forceful_strike(index));
    }

    #[test]
    fn recoil_curve_rises_from_zero() {
        assert_eq!(recoil_curve(0.0), 0.0);
        assert!(recoil_curve(0.5) > 0.98);
        assert!(recoil_curve(1.0) < 1.0);
        assert!(recoil_curve(0.2) > recoil_curve(0.1));
    }

    #[test]
    fn map_range_clamps() {
        assert_eq!(map_range_clamped(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        assert_eq!(map_range_clamped(-5.0, 0.0, 10.0, 0.0, 1.0), 0.0);
        assert_eq!(map_range_clamped(50.0, 0.0, 10.0, 0.0, 1.0), 1.0);
        assert_eq!(map_range_clamped(1.0, 1.0, 1.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-12);
    }
}
