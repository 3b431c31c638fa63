//! Percussion instruments built from strikers, collectors and drum bodies.
//!
//! Every instrument implements [`Instrument`]: one `tick` per frame returning a
//! [`RenderState`], and a `seek` that puts it where continuous playback would
//! have. Instruments own their animators outright and never share state.
//!
//! # Example
//!
//! ```ignore
//! use stagebeat::instruments::{self, Setup};
//!
//! let setup = Setup::new(&config, timeline.division());
//! let mut congas = instruments::congas(&hits, &setup);
//! let state = congas.tick(1.25, 1.0 / 60.0);
//! ```

mod cuica;
mod cymbal;
mod guiro;
mod hand_drums;
mod handheld;
mod hi_hat;
mod high_q;
mod kick;
mod kit;
mod metronome;
mod mirrored;
mod reverse_cymbal;
mod snare;
mod struck;
mod surdo;
mod tom;
mod triangle;
mod whistle;

pub mod notes;

pub use cuica::Cuica;
pub use cymbal::{china, crash_1, crash_2, ride_1, ride_2, split_rides, splash, Cymbal};
pub use guiro::Guiro;
pub use hand_drums::{agogo, bongos, congas, cowbell, timbales, woodblocks};
pub use handheld::{cabasa, jingle_bells, shaker, square_click, sticks, tambourine};
pub use hi_hat::HiHat;
pub use high_q::HighQ;
pub use kick::BassDrum;
pub use kit::{DrumKit, PercussionKit};
pub use metronome::Metronome;
pub use mirrored::{castanets, claves, hand_clap, maracas, slap, MirroredPair};
pub use reverse_cymbal::ReverseCymbal;
pub use snare::SnareDrum;
pub use struck::StruckInstrument;
pub use surdo::Surdo;
pub use tom::tom;
pub use triangle::Triangle;
pub use whistle::Whistle;

use crate::{
    animation::{DrumRecoil, Presence, Striker, Wobble},
    collect::EventCollector,
    config::StageConfig,
    scene::RenderState,
    timeline::Hit,
};

/// The contract every instrument on stage fulfils
pub trait Instrument: Send {
    fn name(&self) -> &'static str;

    /// Advance to `time` (`delta` seconds after the previous frame)
    fn tick(&mut self, time: f64, delta: f32) -> RenderState;

    /// Jump to `time`, forwards or backwards
    fn seek(&mut self, time: f64);
}

/// What every instrument needs at construction
#[derive(Debug, Clone, Copy)]
pub struct Setup<'a> {
    pub config: &'a StageConfig,
    /// Ticks per quarter note of the timeline
    pub division: u32,
}

impl<'a> Setup<'a> {
    pub fn new(config: &'a StageConfig, division: u32) -> Self {
        Self { config, division }
    }

    pub fn striker(&self, hits: Vec<Hit>) -> Striker {
        Striker::new(hits, &self.config.striker, self.division)
    }

    pub fn presence(&self, hits: Vec<Hit>) -> Presence<Hit> {
        Presence::new(hits, &self.config.presence)
    }

    pub fn recoil(&self) -> DrumRecoil {
        DrumRecoil::new(&self.config.recoil)
    }

    pub fn wobble(&self) -> Wobble {
        Wobble::new(&self.config.wobble)
    }
}

/// The latest of several last hits as `(seconds ago, velocity)`, loudest on
/// a tie. Feeds [`DrumRecoil::resume`] after a seek.
pub(crate) fn last_hit(time: f64, hits: impl IntoIterator<Item = Option<(f64, u8)>>) -> Option<(f64, u8)> {
    hits.into_iter()
        .flatten()
        .max_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(at, velocity)| (time - at, velocity))
}

/// A hit as `(time, velocity)`
pub(crate) fn timed(hit: Option<&Hit>) -> Option<(f64, u8)> {
    hit.map(|h| (h.time, h.velocity))
}

/// How many hits the collector has handed out so far
pub(crate) fn played(collector: &EventCollector<Hit>) -> usize {
    collector.prev().map_or(0, |prev| {
        collector.events().partition_point(|h| h.time <= prev.time)
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_hit_prefers_latest_then_loudest() {
        let latest = last_hit(5.0, [Some((1.0, 100)), Some((2.0, 40)), None]);
        assert_eq!(latest, Some((3.0, 40)));

        let tie = last_hit(5.0, [Some((2.0, 40)), Some((2.0, 100))]);
        assert_eq!(tie, Some((3.0, 100)));

        assert_eq!(last_hit(5.0, [None, None]), None);
    }
}
