use crate::{
    animation::{Presence, Striker, Wobble},
    scene::{PartState, RenderState, Vec3},
    timeline::{hits_for, Hit},
};

use super::{notes::*, Instrument, Setup};

/// A cymbal on a stand, rocked by every stick hit
pub struct Cymbal {
    name: &'static str,
    stick: Striker,
    wobble: Wobble,
    presence: Presence<Hit>,
}

impl Cymbal {
    /// A cymbal struck by `hits`, wobbling with the given amplitude (radians
    /// at the first instant, divided by 3) and speed
    pub fn new(name: &'static str, hits: Vec<Hit>, setup: &Setup, amplitude: f32, speed: f32) -> Self {
        Self {
            name,
            presence: setup.presence(hits.clone()),
            stick: setup.striker(hits),
            wobble: setup.wobble().amplitude(amplitude).speed(speed),
        }
    }
}

impl Instrument for Cymbal {
    fn name(&self) -> &'static str {
        self.name
    }

    fn tick(&mut self, time: f64, delta: f32) -> RenderState {
        let stick = self.stick.tick(time);
        if stick.strike.is_some() {
            self.wobble.strike();
        }
        let angle = self.wobble.tick(delta);

        RenderState::new(self.name, self.presence.tick(time))
            .with(self.stick.part(&stick, "stick"))
            .with(PartState::new("cymbal").rotated(Vec3::new(angle, 0.0, 0.0)))
    }

    fn seek(&mut self, time: f64) {
        self.stick.seek(time);
        self.wobble
            .resume(self.stick.prev().map(|hit| (time - hit.time) as f32));
        self.presence.seek(time);
    }
}

pub fn crash_1(hits: &[Hit], setup: &Setup) -> Cymbal {
    Cymbal::new("crash_1", hits_for(hits, &[CRASH_CYMBAL_1]), setup, 1.5, 4.5)
}

pub fn crash_2(hits: &[Hit], setup: &Setup) -> Cymbal {
    Cymbal::new("crash_2", hits_for(hits, &[CRASH_CYMBAL_2]), setup, 1.5, 4.5)
}

pub fn splash(hits: &[Hit], setup: &Setup) -> Cymbal {
    Cymbal::new("splash", hits_for(hits, &[SPLASH_CYMBAL]), setup, 2.0, 5.0)
}

pub fn china(hits: &[Hit], setup: &Setup) -> Cymbal {
    Cymbal::new("china", hits_for(hits, &[CHINESE_CYMBAL]), setup, 1.5, 4.5)
}

pub fn ride_1(hits: &[Hit], setup: &Setup) -> Cymbal {
    Cymbal::new("ride_1", split_rides(hits).0, setup, 0.5, 3.5)
}

pub fn ride_2(hits: &[Hit], setup: &Setup) -> Cymbal {
    Cymbal::new("ride_2", split_rides(hits).1, setup, 0.5, 3.5)
}

/// Split ride hits between the two rides. The bell has no ride of its own
/// and goes to whichever ride played last, ride 1 before either has.
pub fn split_rides(hits: &[Hit]) -> (Vec<Hit>, Vec<Hit>) {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let mut on_second = false;

    for hit in hits_for(hits, &[RIDE_CYMBAL_1, RIDE_CYMBAL_2, RIDE_BELL]) {
        match hit.note {
            RIDE_CYMBAL_1 => on_second = false,
            RIDE_CYMBAL_2 => on_second = true,
            _ => {}
        }
        if on_second {
            second.push(hit);
        } else {
            first.push(hit);
        }
    }
    (first, second)
}
