use crate::{
    animation::{Presence, Striker, StrikerVisibility},
    scene::{Axis, RenderState},
    timeline::{hits_for, Hit},
};

use super::{notes::*, Instrument, Setup};

/// Two halves that meet in the middle: claves, clapping hands, castanets.
///
/// Only one half is animated. The twin copies its rotation, negated, every
/// frame, so the pair can never drift apart.
pub struct MirroredPair {
    name: &'static str,
    striker: Striker,
    presence: Presence<Hit>,
}

impl MirroredPair {
    pub fn new(name: &'static str, striker: Striker, setup: &Setup) -> Self {
        let presence = setup.presence(striker.hits().to_vec());
        Self {
            name,
            striker,
            presence,
        }
    }
}

impl Instrument for MirroredPair {
    fn name(&self) -> &'static str {
        self.name
    }

    fn tick(&mut self, time: f64, _delta: f32) -> RenderState {
        let status = self.striker.tick(time);
        let part = self.striker.part(&status, "hand");
        let mut mirror = part.clone();
        mirror.name = "hand_mirror";
        mirror.rotation = -part.rotation;

        RenderState::new(self.name, self.presence.tick(time))
            .with(part)
            .with(mirror)
    }

    fn seek(&mut self, time: f64) {
        self.striker.seek(time);
        self.presence.seek(time);
    }
}

fn pair(name: &'static str, note: u8, hits: &[Hit], setup: &Setup, axis: Axis) -> MirroredPair {
    let striker = setup
        .striker(hits_for(hits, &[note]))
        .visibility(StrikerVisibility::Always)
        .fixed(true)
        .axis(axis);
    MirroredPair::new(name, striker, setup)
}

pub fn claves(hits: &[Hit], setup: &Setup) -> MirroredPair {
    pair("claves", CLAVES, hits, setup, Axis::Y)
}

pub fn hand_clap(hits: &[Hit], setup: &Setup) -> MirroredPair {
    pair("hand_clap", HAND_CLAP, hits, setup, Axis::Y)
}

pub fn castanets(hits: &[Hit], setup: &Setup) -> MirroredPair {
    pair("castanets", CASTANETS, hits, setup, Axis::X)
}

pub fn maracas(hits: &[Hit], setup: &Setup) -> MirroredPair {
    pair("maracas", MARACAS, hits, setup, Axis::X)
}

pub fn slap(hits: &[Hit], setup: &Setup) -> MirroredPair {
    pair("slap", SLAP, hits, setup, Axis::Y)
}
