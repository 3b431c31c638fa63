use crate::{
    collect::EventCollector,
    config::StrikerConfig,
    scene::{Axis, PartState, Vec3},
    timeline::Hit,
};

use super::curves::{dampened_strike, lerp, map_range_clamped, recoil_curve, strike_curve};

/*
Striker
=======

A striker turns a list of hits into the continuous motion of a stick, mallet
or hand that swings down onto each hit and bounces back up afterwards.

Vocabulary
----------

  rest          The raised pose, `max_angle` above the impact pose. A value
                of 1.0 on every curve below.

  impact        The pose at the instant of a hit. A value of 0.0.

  anticipation  The window before a hit in which the stick travels from rest
                down to impact (default 0.2 s).

  recoil        The window after a hit in which the stick travels back up to
                rest (default 0.4 s).

  index         Progress through a window, 0.0 at its start and 1.0 at its
                end. For anticipation:

                    index = 1 - min(next - now, anticipation) / anticipation

                For recoil:

                    index = (now - last) / recoil


The Shape
---------

  value
    2.0 ┤        ╭─╮                 forceful (velocity 127)
        │      ╭╯   ╲
    1.0 ┼─────╯──────╲──╮            dampened (velocity 0)
        │              ╲ ╲
    0.0 ┤               ╲_╲ ← hit     ╭──────────  recoil
        └───────────────────┴───────╯────────────→ time
              anticipation      recoil

A quiet hit barely moves until 40% of the way in, then drops. A loud hit
winds up past rest first, then slams down. The two shapes are blended by the
velocity of the hit being anticipated. Strikers built without wind-up
(pendulums, anything that must stay on its own side of rest) always take the
quiet shape.

The recoil is a sigmoid that snaps most of the way back within the first
quarter of the window, whatever the velocity.


Back-to-back Hits
-----------------

When a hit is both behind and ahead of us, the recoil from the last one and
the anticipation of the next one are cross-faded by how far we are between
them:

    value = lerp(recoil(last), strike(next), (now - last) / (next - last))

Without this the stick would jump from a half-recoiled pose into the
anticipation pose as soon as the next window opens.


Visibility
----------

A stick only appears while it has something to do: inside the anticipation
window of the next hit or the recoil window of the last one. In between hits
it would flicker in and out, so the `BetweenHits` mode also keeps it up when
the gap between the surrounding hits is short, either in seconds or in
quarter notes. A hidden stick reports the impact pose (angle 0).
*/

/// When a striker's stick is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrikerVisibility {
    /// Only inside the anticipation or recoil window
    OnlyNecessary,
    /// Also across short gaps between hits
    #[default]
    BetweenHits,
    /// Never hidden (hands, heads and other non-stick geometry)
    Always,
}

/// What a striker did this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeStatus {
    /// The hit that landed this frame, if any
    pub strike: Option<Hit>,
    /// Rotation above the impact pose, in radians
    pub angle: f32,
    /// The hit currently being anticipated or recoiled from
    pub striking_for: Option<Hit>,
    pub visible: bool,
    /// Upward offset when the stick is free to lift
    pub lift: f32,
}

impl StrikeStatus {
    /// Velocity of the hit that landed this frame, or 0
    pub fn velocity(&self) -> u8 {
        self.strike.map_or(0, |hit| hit.velocity)
    }
}

/// Animates one stick from a list of hits
pub struct Striker {
    collector: EventCollector<Hit>,
    anticipation: f64,
    recoil: f64,
    /// Rotation at rest, in radians
    max_angle: f32,
    sticky_gap_seconds: f64,
    sticky_gap_ticks: f64,
    lift_per_unit: f32,
    axis: Axis,
    visibility: StrikerVisibility,
    fixed: bool,
    wind_up: bool,
}

impl Striker {
    /// A striker over `hits`, timed by `config`. `division` is the timeline's
    /// ticks per quarter note, used by sticky visibility.
    pub fn new(hits: Vec<Hit>, config: &StrikerConfig, division: u32) -> Self {
        Self {
            collector: EventCollector::new(hits),
            anticipation: config.anticipation,
            recoil: config.recoil,
            max_angle: config.max_angle_degrees.to_radians(),
            sticky_gap_seconds: config.sticky_gap_seconds,
            sticky_gap_ticks: division as f64 * config.sticky_gap_quarters,
            lift_per_unit: config.lift_per_radian,
            axis: Axis::X,
            visibility: StrikerVisibility::default(),
            fixed: false,
            wind_up: true,
        }
    }

    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn visibility(mut self, visibility: StrikerVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// A fixed striker rotates in place without lifting
    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Without wind-up every hit follows the dampened curve, so the stick
    /// never rises past rest whatever the velocity
    pub fn wind_up(mut self, wind_up: bool) -> Self {
        self.wind_up = wind_up;
        self
    }

    /// Scale both windows, e.g. `1.5` for a slower, heavier swing
    pub fn slower(mut self, factor: f64) -> Self {
        self.anticipation *= factor;
        self.recoil *= factor;
        self
    }

    pub fn max_angle_degrees(mut self, degrees: f32) -> Self {
        self.max_angle = degrees.to_radians();
        self
    }

    /// Advance to `time` and report the stick's pose
    pub fn tick(&mut self, time: f64) -> StrikeStatus {
        let strike = self.collector.advance_collect_one(time).copied();
        StrikeStatus {
            strike,
            ..self.status_at(time)
        }
    }

    /// Pose at `time` given the current cursor, without advancing
    fn status_at(&self, time: f64) -> StrikeStatus {
        let next = self.collector.peek();
        let last = self.collector.prev();
        let visible = self.is_visible(time, next, last);

        let value = if visible {
            self.evaluate(time, next, last)
        } else {
            0.0
        };

        StrikeStatus {
            strike: None,
            angle: value as f32 * self.max_angle,
            striking_for: if visible {
                self.target(time, next, last)
            } else {
                None
            },
            visible,
            lift: if self.fixed {
                0.0
            } else {
                value as f32 * self.lift_per_unit
            },
        }
    }

    fn evaluate(&self, time: f64, next: Option<&Hit>, last: Option<&Hit>) -> f64 {
        let strike = next.map(|next| {
            let index = 1.0 - (next.time - time).min(self.anticipation) / self.anticipation;
            if self.wind_up {
                strike_curve(index, next.velocity)
            } else {
                dampened_strike(index)
            }
        });
        let recoil = last.map(|last| recoil_curve((time - last.time) / self.recoil));

        match (next, last, strike, recoil) {
            (Some(next), Some(last), Some(strike), Some(recoil)) => lerp(
                recoil,
                strike,
                map_range_clamped(time, last.time, next.time, 0.0, 1.0),
            ),
            (_, _, Some(strike), None) => strike,
            (_, _, None, Some(recoil)) => recoil,
            _ => 1.0,
        }
    }

    fn anticipating(&self, time: f64, next: Option<&Hit>) -> bool {
        next.is_some_and(|next| next.time - time < self.anticipation)
    }

    fn recoiling(&self, time: f64, last: Option<&Hit>) -> bool {
        last.is_some_and(|last| time - last.time < self.recoil)
    }

    fn is_visible(&self, time: f64, next: Option<&Hit>, last: Option<&Hit>) -> bool {
        let necessary = self.anticipating(time, next) || self.recoiling(time, last);
        match self.visibility {
            StrikerVisibility::OnlyNecessary => necessary,
            StrikerVisibility::BetweenHits => {
                necessary
                    || match (next, last) {
                        (Some(next), Some(last)) => {
                            (next.tick - last.tick) as f64 <= self.sticky_gap_ticks
                                || next.time - last.time < self.sticky_gap_seconds
                        }
                        _ => false,
                    }
            }
            StrikerVisibility::Always => true,
        }
    }

    fn target(&self, time: f64, next: Option<&Hit>, last: Option<&Hit>) -> Option<Hit> {
        if self.anticipating(time, next) {
            next.copied()
        } else if self.recoiling(time, last) {
            last.copied()
        } else {
            None
        }
    }

    /// The hit a swing was last aimed at as of `time`, with the number of
    /// times the target changed before reaching it.
    ///
    /// This is the current target if there is one, otherwise the last hit.
    /// Identical hits in a row are one target, as they are during playback.
    pub fn last_target(&self, time: f64) -> Option<(usize, Hit)> {
        let next = self.collector.peek();
        let last = self.collector.prev();
        let target = if self.is_visible(time, next, last) {
            self.target(time, next, last)
        } else {
            None
        };
        let target = target.or_else(|| last.copied())?;
        let hits = self.collector.events();
        let position = hits.iter().position(|h| *h == target)?;
        let changes = hits[..=position]
            .windows(2)
            .filter(|pair| pair[0] != pair[1])
            .count();
        Some((changes, target))
    }

    /// Jump to `time` without reporting any strike
    pub fn seek(&mut self, time: f64) {
        self.collector.seek(time);
    }

    /// A part posed by `status`, rotated on this striker's axis
    pub fn part(&self, status: &StrikeStatus, name: &'static str) -> PartState {
        PartState::new(name)
            .rotated(Vec3::along(self.axis, status.angle))
            .offset(Vec3::new(0.0, status.lift, 0.0))
            .visible(status.visible)
    }

    pub fn peek(&self) -> Option<&Hit> {
        self.collector.peek()
    }

    pub fn prev(&self) -> Option<&Hit> {
        self.collector.prev()
    }

    pub fn hits(&self) -> &[Hit] {
        self.collector.events()
    }

    pub fn axis_of(&self) -> Axis {
        self.axis
    }
}

impl std::fmt::Debug for Striker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Striker")
            .field("collector", &self.collector)
            .field("axis", &self.axis)
            .field("visibility", &self.visibility)
            .finish()
    }
}
