use crate::{
    animation::Presence,
    collect::EventCollector,
    scene::{PartState, RenderState, Vec3},
    timeline::{hits_for, Hit},
};

use super::{notes::*, played, Instrument, Setup};

/// Scraper strokes per second across the full length of the gourd
const LONG_STROKE_SPEED: f64 = 3.6;
const SHORT_STROKE_SPEED: f64 = 9.0;
const STROKE_LENGTH: f32 = 5.0;
const STICK_BASE: Vec3 = Vec3::new(-2.5, 1.94, 2.0);

/// Guiro: a stick scraped along the ridges, alternating direction on every
/// stroke. Long strokes ease out, short ones ease in.
pub struct Guiro {
    hits: EventCollector<Hit>,
    presence: Presence<Hit>,
}

/// Where the scraper is along the gourd, 0 at the left end and 1 at the right
#[derive(Debug, Clone, Copy, PartialEq)]
struct Stroke {
    position: f32,
    moving_left: bool,
    long: bool,
}

impl Stroke {
    const IDLE: Stroke = Stroke {
        position: 0.0,
        moving_left: true,
        long: true,
    };

    /// The stroke `index` (0-based), `elapsed` seconds after it began. Even
    /// strokes scrape to the right from 0, odd strokes to the left from 1.
    fn at(index: usize, hit: &Hit, elapsed: f64) -> Self {
        let long = hit.note == LONG_GUIRO;
        let speed = if long { LONG_STROKE_SPEED } else { SHORT_STROKE_SPEED };
        let travelled = (elapsed.max(0.0) * speed).min(1.0) as f32;
        let moving_left = index % 2 == 1;
        Self {
            position: if moving_left { 1.0 - travelled } else { travelled },
            moving_left,
            long,
        }
    }

    fn eased(&self) -> f32 {
        let p = self.position;
        let ease_in = p * p;
        let ease_out = 1.0 - (1.0 - p) * (1.0 - p);
        match (self.long, self.moving_left) {
            (true, true) | (false, false) => ease_out,
            (true, false) | (false, true) => ease_in,
        }
    }

    /// Lift over the ends of the gourd: 0 in the middle, 1 at either end
    fn lift(&self) -> f32 {
        (2.0 * self.position - 1.0).powi(5).abs()
    }
}

impl Guiro {
    pub fn new(hits: &[Hit], setup: &Setup) -> Self {
        let strokes = hits_for(hits, &[SHORT_GUIRO, LONG_GUIRO]);
        Self {
            presence: setup.presence(strokes.clone()),
            hits: EventCollector::new(strokes),
        }
    }

    fn stroke(&self, time: f64) -> Stroke {
        match self.hits.prev() {
            Some(hit) => Stroke::at(played(&self.hits) - 1, hit, time - hit.time),
            None => Stroke::IDLE,
        }
    }
}

impl Instrument for Guiro {
    fn name(&self) -> &'static str {
        "guiro"
    }

    fn tick(&mut self, time: f64, _delta: f32) -> RenderState {
        self.hits.advance_collect_all(time);
        let stroke = self.stroke(time);
        let lift = stroke.lift();

        RenderState::new(self.name(), self.presence.tick(time))
            .with(
                PartState::new("stick")
                    .offset(STICK_BASE + Vec3::new(stroke.eased() * STROKE_LENGTH, lift, 0.0))
                    .rotated(Vec3::new(lift / 4.0, 0.0, 0.0)),
            )
            .with(PartState::new("gourd").offset(Vec3::new(0.0, lift / 4.0, 0.0)))
    }

    fn seek(&mut self, time: f64) {
        self.hits.seek(time);
        self.presence.seek(time);
    }
}
