use crate::{
    animation::{DrumRecoil, Presence, Striker, Wobble},
    collect::EventCollector,
    scene::{PartState, RenderState, Vec3},
    timeline::{hits_for, Hit},
};

use super::{last_hit, notes::*, timed, Instrument, Setup};

const CLOSED: Vec3 = Vec3::new(0.0, 1.2, 0.0);
const OPEN: Vec3 = Vec3::new(0.0, 2.0, 0.0);

/// Hi-hat: the top cymbal rises on an open hit and wobbles until the next
/// closed hit or pedal shuts it.
pub struct HiHat {
    stick: Striker,
    pedal: EventCollector<Hit>,
    wobble: Wobble,
    recoil: DrumRecoil,
    presence: Presence<Hit>,
    open: bool,
}

impl HiHat {
    pub fn new(hits: &[Hit], setup: &Setup) -> Self {
        let all = hits_for(hits, &[CLOSED_HI_HAT, OPEN_HI_HAT, PEDAL_HI_HAT]);
        Self {
            stick: setup.striker(hits_for(hits, &[CLOSED_HI_HAT, OPEN_HI_HAT])),
            pedal: EventCollector::new(hits_for(hits, &[PEDAL_HI_HAT])),
            wobble: setup.wobble().amplitude(0.25).speed(10.0).dampening(2.0),
            recoil: setup.recoil().distance(0.7).comeback(12.0),
            presence: setup.presence(all),
            open: false,
        }
    }

    /// Open or shut the hi-hat for a hit that just landed
    fn apply(&mut self, hit: &Hit) {
        self.open = hit.note == OPEN_HI_HAT;
        if self.open {
            self.wobble.strike();
        } else {
            self.wobble.cancel();
        }
    }
}

impl Instrument for HiHat {
    fn name(&self) -> &'static str {
        "hi_hat"
    }

    fn tick(&mut self, time: f64, delta: f32) -> RenderState {
        let stick = self.stick.tick(time);
        if let Some(hit) = stick.strike {
            self.apply(&hit);
        }
        let pedal = self.pedal.advance_collect_one(time).copied();
        if let Some(hit) = pedal {
            self.apply(&hit);
        }

        let velocity = stick.velocity().max(pedal.map_or(0, |h| h.velocity));
        let offset = self.recoil.tick(velocity, delta);
        let angle = self.wobble.tick(delta);
        let position = if self.open { OPEN } else { CLOSED };

        RenderState::new(self.name(), self.presence.tick(time))
            .with(self.stick.part(&stick, "stick"))
            .with(
                PartState::new("top_cymbal")
                    .offset(position)
                    .rotated(Vec3::new(angle, 0.0, 0.0)),
            )
            .with(PartState::new("hi_hat").offset(offset))
    }

    fn seek(&mut self, time: f64) {
        self.stick.seek(time);
        self.pedal.seek(time);

        // Within a frame the pedal is applied after the stick
        let latest = match (self.stick.prev(), self.pedal.prev()) {
            (Some(s), Some(p)) if s.time > p.time => Some(*s),
            (_, Some(p)) => Some(*p),
            (Some(s), None) => Some(*s),
            (None, None) => None,
        };
        self.open = latest.is_some_and(|hit| hit.note == OPEN_HI_HAT);
        self.wobble.resume(
            latest
                .filter(|_| self.open)
                .map(|hit| (time - hit.time) as f32),
        );
        self.recoil.resume(last_hit(
            time,
            [timed(self.stick.prev()), timed(self.pedal.prev())],
        ));
        self.presence.seek(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::StageConfig, instruments::test_support::*};

    fn top(state: &RenderState) -> PartState {
        state.part("top_cymbal").cloned().unwrap_or_else(|| PartState::new("missing"))
    }

    #[test]
    fn opens_wobbles_and_closes() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let hits = [hit(1.0, OPEN_HI_HAT, 100), hit(2.0, PEDAL_HI_HAT, 80)];
        let mut hat = HiHat::new(&hits, &setup);

        assert_eq!(top(&hat.tick(0.5, 0.016)).offset, CLOSED);

        let open = top(&hat.tick(1.0, 0.0));
        assert_eq!(open.offset, OPEN);
        assert!(open.rotation.x > 0.0);

        let closed = top(&hat.tick(2.0, 0.016));
        assert_eq!(closed.offset, CLOSED);
        assert_eq!(closed.rotation.x, 0.0);
    }

    #[test]
    fn closed_hit_cancels_wobble() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let hits = [hit(1.0, OPEN_HI_HAT, 100), hit(1.2, CLOSED_HI_HAT, 100)];
        let mut hat = HiHat::new(&hits, &setup);
        hat.tick(1.0, 0.0);
        let state = hat.tick(1.2, 0.2);
        assert_eq!(top(&state).rotation.x, 0.0);
        assert_eq!(top(&state).offset, CLOSED);
    }

    #[test]
    fn pedal_recoils_the_stand() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut hat = HiHat::new(&[hit(1.0, PEDAL_HI_HAT, 127)], &setup);
        let offset = hat.tick(1.0, 0.016).part("hi_hat").map_or(0.0, |p| p.offset.y);
        assert!((offset + 0.7).abs() < 1e-4);
    }

    #[test]
    fn seek_into_open_section() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let hits = [
            hit(1.0, CLOSED_HI_HAT, 100),
            hit(2.0, OPEN_HI_HAT, 100),
            hit(3.0, PEDAL_HI_HAT, 100),
        ];
        let mut hat = HiHat::new(&hits, &setup);

        hat.seek(2.1);
        let open = top(&hat.tick(2.1, 0.0));
        assert_eq!(open.offset, OPEN);
        assert!(open.rotation.x != 0.0);

        hat.seek(1.5);
        assert_eq!(top(&hat.tick(1.5, 0.0)).offset, CLOSED);
    }
}
