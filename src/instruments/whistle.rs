use crate::{
    animation::{OneShot, Presence},
    collect::EventCollector,
    scene::{PartState, RenderState, Vec3},
    timeline::{hits_for, Hit},
};

use super::{notes::*, Instrument, Setup};

const SHORT_BLAST: f32 = 0.2;
const LONG_BLAST: f32 = 0.4;

/// One whistle: pushed up to the lips and slid back down while it sounds
struct Blower {
    hits: EventCollector<Hit>,
    blast: OneShot,
    whistle: &'static str,
    steam: &'static str,
}

impl Blower {
    fn new(hits: Vec<Hit>, duration: f32, whistle: &'static str, steam: &'static str) -> Self {
        Self {
            hits: EventCollector::new(hits),
            blast: OneShot::new(duration),
            whistle,
            steam,
        }
    }

    fn tick(&mut self, time: f64, delta: f32, state: &mut RenderState) {
        let progress = if self.hits.advance_collect_one(time).is_some() {
            self.blast.trigger();
            self.blast.progress()
        } else {
            self.blast.tick(delta)
        };
        let height = progress.map_or(0.0, |p| 2.0 - 2.0 * p);

        state.parts.push(PartState::new(self.whistle).offset(Vec3::new(0.0, height, 0.0)));
        state.parts.push(PartState::new(self.steam).visible(progress.is_some()));
    }

    fn seek(&mut self, time: f64) {
        self.hits.seek(time);
        self.blast.resume(self.hits.prev().map(|hit| time - hit.time));
    }
}

/// A short and a long whistle side by side
pub struct Whistle {
    short: Blower,
    long: Blower,
    presence: Presence<Hit>,
}

impl Whistle {
    pub fn new(hits: &[Hit], setup: &Setup) -> Self {
        Self {
            short: Blower::new(hits_for(hits, &[SHORT_WHISTLE]), SHORT_BLAST, "short_whistle", "short_steam"),
            long: Blower::new(hits_for(hits, &[LONG_WHISTLE]), LONG_BLAST, "long_whistle", "long_steam"),
            presence: setup.presence(hits_for(hits, &[SHORT_WHISTLE, LONG_WHISTLE])),
        }
    }
}

impl Instrument for Whistle {
    fn name(&self) -> &'static str {
        "whistle"
    }

    fn tick(&mut self, time: f64, delta: f32) -> RenderState {
        let mut state = RenderState::new(self.name(), self.presence.tick(time));
        self.short.tick(time, delta, &mut state);
        self.long.tick(time, delta, &mut state);
        state
    }

    fn seek(&mut self, time: f64) {
        self.short.seek(time);
        self.long.seek(time);
        self.presence.seek(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::StageConfig, instruments::test_support::*};

    fn steam(state: &RenderState, part: &str) -> bool {
        state.part(part).is_some_and(|p| p.visible)
    }

    #[test]
    fn blasts_last_their_length() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let hits = [hit(1.0, SHORT_WHISTLE, 100), hit(1.0, LONG_WHISTLE, 100)];
        let mut whistle = Whistle::new(&hits, &setup);

        let mut short = 0.0;
        let mut long = 0.0;
        play(2.0, |time, delta| {
            let state = whistle.tick(time, delta);
            if steam(&state, "short_steam") {
                short += delta;
            }
            if steam(&state, "long_steam") {
                long += delta;
            }
        });
        assert!((short - SHORT_BLAST).abs() < 0.02, "short blast {}", short);
        assert!((long - LONG_BLAST).abs() < 0.02, "long blast {}", long);
    }

    #[test]
    fn retrigger_restarts_the_blast() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let hits = [hit(1.0, LONG_WHISTLE, 100), hit(1.3, LONG_WHISTLE, 100)];
        let mut whistle = Whistle::new(&hits, &setup);

        whistle.tick(1.0, 0.0);
        let restarted = whistle.tick(1.3, 0.3);
        let height = restarted.part("long_whistle").map_or(0.0, |p| p.offset.y);
        assert_eq!(height, 2.0);
        assert!(steam(&whistle.tick(1.6, 0.3), "long_steam"));
    }

    #[test]
    fn seek_into_a_blast() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut whistle = Whistle::new(&[hit(1.0, LONG_WHISTLE, 100)], &setup);

        whistle.seek(1.2);
        let state = whistle.tick(1.2, 0.0);
        assert!(steam(&state, "long_steam"));
        let height = state.part("long_whistle").map_or(0.0, |p| p.offset.y);
        assert!((height - 1.0).abs() < 1e-5);

        whistle.seek(1.5);
        assert!(!steam(&whistle.tick(1.5, 0.0), "long_steam"));
    }
}
