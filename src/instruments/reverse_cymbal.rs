use crate::{
    animation::{presence::around_spans, Striker, StrikerVisibility, Wobble},
    collect::ArcCollector,
    config::PresenceConfig,
    scene::{PartState, RenderState, Vec3},
    timeline::{contiguous_groups, ArcGroup, Hit, Span, TimedArc},
};

use super::{Instrument, Setup};

/// A cymbal recording played backwards: the wobble swells towards the end of
/// each sustained group of notes, where the stick lands to "start" it.
pub struct ReverseCymbal {
    groups: ArcCollector<ArcGroup>,
    stick: Striker,
    wobble: Wobble,
    /// Position of the stick around the rim, in radians
    yaw: f32,
    presence: PresenceConfig,
}

impl ReverseCymbal {
    pub fn new(arcs: &[TimedArc], setup: &Setup) -> Self {
        let groups = contiguous_groups(arcs);
        let strikes = groups.iter().filter_map(group_end).collect();
        Self {
            groups: ArcCollector::new(groups),
            stick: setup
                .striker(strikes)
                .visibility(StrikerVisibility::OnlyNecessary),
            wobble: setup.wobble().amplitude(2.5).speed(4.5).dampening(1.5),
            yaw: 0.0,
            presence: setup.config.presence.clone(),
        }
    }

    /// The stick circles the cymbal, one twelfth of a turn per semitone
    fn yaw_for(hit: &Hit) -> f32 {
        ((hit.note % 12) as f32 * 30.0).to_radians()
    }
}

/// A full-velocity hit on the last note to end in a group
fn group_end(group: &ArcGroup) -> Option<Hit> {
    let last = group.arcs.iter().max_by(|a, b| a.end.total_cmp(&b.end))?;
    Some(Hit {
        tick: last.end_tick,
        time: last.end,
        note: last.note,
        velocity: 127,
    })
}

impl Instrument for ReverseCymbal {
    fn name(&self) -> &'static str {
        "reverse_cymbal"
    }

    fn tick(&mut self, time: f64, _delta: f32) -> RenderState {
        self.groups.advance(time).for_each(drop);
        let stick = self.stick.tick(time);
        if let (Some(target), None) = (stick.striking_for, stick.strike) {
            self.yaw = Self::yaw_for(&target);
        }

        let angle = self
            .groups
            .soonest_ending()
            .map_or(0.0, |group| self.wobble.reversed(group.end() - time));

        let mut stick_part = self.stick.part(&stick, "stick");
        stick_part.rotation.y = self.yaw;

        RenderState::new(self.name(), around_spans(&self.groups, time, &self.presence))
            .with(stick_part)
            .with(PartState::new("cymbal").rotated(Vec3::new(angle, 0.0, 0.0)))
    }

    fn seek(&mut self, time: f64) {
        self.groups.seek(time);
        self.stick.seek(time);
        if let Some((_, target)) = self.stick.last_target(time) {
            self.yaw = Self::yaw_for(&target);
        }
    }
}
