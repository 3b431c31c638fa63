use crate::{
    animation::{Presence, StrikeStatus, Striker, StrikerVisibility, SwingAlternator},
    scene::{PartState, RenderState, Vec3},
    timeline::{hits_for, Hit},
};

use super::{notes::*, Instrument, Setup};

const SWING_DEGREES: f32 = 30.0;
/// Pendulums swing about a fifth slower than a stick
const PENDULUM_SLOWDOWN: f64 = 1.25;

/// One pendulum and the direction it is currently swinging
struct Pendulum {
    striker: Striker,
    alternator: SwingAlternator,
}

impl Pendulum {
    fn new(hits: Vec<Hit>, setup: &Setup) -> Self {
        Self {
            striker: setup
                .striker(hits)
                .slower(PENDULUM_SLOWDOWN)
                .max_angle_degrees(SWING_DEGREES)
                .wind_up(false)
                .visibility(StrikerVisibility::Always),
            alternator: SwingAlternator::new(),
        }
    }

    /// Rotation about Z. A swing to the right ends at `-30°`, to the left at
    /// `+30°`; each new target hit reverses the direction.
    fn tick(&mut self, time: f64) -> f32 {
        let status: StrikeStatus = self.striker.tick(time);
        let swings_right = !self.alternator.update(status.striking_for);
        let swing = SWING_DEGREES.to_radians();
        if swings_right {
            status.angle - swing
        } else {
            -status.angle + swing
        }
    }

    fn seek(&mut self, time: f64) {
        self.striker.seek(time);
        self.alternator.seek(self.striker.last_target(time));
    }
}

/// A metronome with two pendulums, one for the click and one for the bell
pub struct Metronome {
    click: Pendulum,
    bell: Pendulum,
    presence: Presence<Hit>,
}

impl Metronome {
    pub fn new(hits: &[Hit], setup: &Setup) -> Self {
        Self {
            click: Pendulum::new(hits_for(hits, &[METRONOME_CLICK]), setup),
            bell: Pendulum::new(hits_for(hits, &[METRONOME_BELL]), setup),
            presence: setup.presence(hits_for(hits, &[METRONOME_CLICK, METRONOME_BELL])),
        }
    }
}

impl Instrument for Metronome {
    fn name(&self) -> &'static str {
        "metronome"
    }

    fn tick(&mut self, time: f64, _delta: f32) -> RenderState {
        let click = self.click.tick(time);
        let bell = self.bell.tick(time);
        RenderState::new(self.name(), self.presence.tick(time))
            .with(PartState::new("click_pendulum").rotated(Vec3::new(0.0, 0.0, click)))
            .with(PartState::new("bell_pendulum").rotated(Vec3::new(0.0, 0.0, bell)))
    }

    fn seek(&mut self, time: f64) {
        self.click.seek(time);
        self.bell.seek(time);
        self.presence.seek(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::StageConfig, instruments::test_support::*};

    fn click(state: &RenderState) -> f32 {
        state.part("click_pendulum").map_or(f32::NAN, |p| p.rotation.z)
    }

    fn clicks() -> Vec<Hit> {
        vec![
            hit(1.0, METRONOME_CLICK, 100),
            hit(2.0, METRONOME_CLICK, 100),
            hit(3.0, METRONOME_CLICK, 100),
        ]
    }

    #[test]
    fn three_clicks_flip_twice() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut metronome = Metronome::new(&clicks(), &setup);

        // Only the frames around an impact come near the edge of the swing
        let mut impacts = Vec::new();
        play(4.0, |time, delta| {
            let angle = click(&metronome.tick(time, delta));
            let side = angle > 0.0;
            if angle.abs() > 20f32.to_radians() && impacts.last() != Some(&side) {
                impacts.push(side);
            }
        });
        assert_eq!(impacts, vec![false, true, false]);
    }

    #[test]
    fn pendulum_stays_on_its_side_while_swinging() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut metronome = Metronome::new(&clicks(), &setup);
        // Anticipating the first click swings right, the second left
        for (from, to, right) in [(0.80, 1.0, true), (1.80, 2.0, false)] {
            let mut time = from;
            while time <= to {
                let angle = click(&metronome.tick(time, 0.01));
                assert!(if right { angle <= 1e-6 } else { angle >= -1e-6 }, "{} at {}", angle, time);
                time += 0.01;
            }
        }
    }

    #[test]
    fn doubled_click_seeks_like_playback() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut doubled = clicks();
        doubled.insert(0, hit(1.0, METRONOME_CLICK, 100));

        for &t in &[1.05, 1.9, 2.05, 2.5, 3.05] {
            let mut played = Metronome::new(&doubled, &setup);
            let mut expected = 0.0;
            play(t, |time, delta| expected = click(&played.tick(time, delta)));

            let mut seeked = Metronome::new(&doubled, &setup);
            seeked.tick(3.9, 0.016);
            seeked.seek(t);
            let actual = click(&seeked.tick(t, 0.016));
            assert!((actual - expected).abs() < 1e-4, "at {}: played {}, seeked {}", t, expected, actual);
        }
    }

    #[test]
    fn impact_at_the_swing_edge() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut metronome = Metronome::new(&clicks(), &setup);
        let angle = click(&metronome.tick(1.0, 0.016));
        assert!((angle.abs() - SWING_DEGREES.to_radians()).abs() < 1e-4);
    }

    #[test]
    fn seek_matches_playback_direction() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        for &t in &[0.5, 1.5, 2.2, 2.9, 3.8] {
            let mut played = Metronome::new(&clicks(), &setup);
            let mut expected = 0.0;
            play(t, |time, delta| expected = click(&played.tick(time, delta)));

            let mut seeked = Metronome::new(&clicks(), &setup);
            seeked.tick(3.9, 0.016);
            seeked.seek(t);
            let actual = click(&seeked.tick(t, 0.016));
            assert_eq!(actual.signum(), expected.signum(), "direction at {}", t);
        }
    }
}
