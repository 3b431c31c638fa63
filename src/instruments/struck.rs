use crate::{
    animation::{max_velocity, DrumRecoil, Presence, StrikeStatus, Striker},
    scene::{PartState, RenderState},
    timeline::{hits_for, Hit},
};

use super::{last_hit, timed, Instrument, Setup};

struct Voice {
    part: &'static str,
    striker: Striker,
}

struct Body {
    part: &'static str,
    recoil: DrumRecoil,
    /// Indices of the voices that strike this body
    voices: Vec<usize>,
}

/// Sticks or hands striking one or more recoiling bodies.
///
/// A body struck by several voices in the same frame recoils with the
/// loudest of them.
pub struct StruckInstrument {
    name: &'static str,
    voices: Vec<Voice>,
    bodies: Vec<Body>,
    presence: Presence<Hit>,
    statuses: Vec<StrikeStatus>,
}

impl StruckInstrument {
    pub fn builder<'a>(name: &'static str, hits: &[Hit], setup: &Setup<'a>) -> StruckBuilder<'a> {
        StruckBuilder {
            name,
            setup: *setup,
            hits: hits.to_vec(),
            voices: Vec::new(),
            bodies: Vec::new(),
        }
    }
}

impl Instrument for StruckInstrument {
    fn name(&self) -> &'static str {
        self.name
    }

    fn tick(&mut self, time: f64, delta: f32) -> RenderState {
        self.statuses.clear();
        self.statuses
            .extend(self.voices.iter_mut().map(|v| v.striker.tick(time)));

        let mut state = RenderState::new(self.name, self.presence.tick(time));
        for (voice, status) in self.voices.iter().zip(&self.statuses) {
            state.parts.push(voice.striker.part(status, voice.part));
        }
        for body in &mut self.bodies {
            let velocity = max_velocity(body.voices.iter().map(|&i| self.statuses[i].velocity()));
            let offset = body.recoil.tick(velocity, delta);
            state.parts.push(PartState::new(body.part).offset(offset));
        }
        state
    }

    fn seek(&mut self, time: f64) {
        for voice in &mut self.voices {
            voice.striker.seek(time);
        }
        for body in &mut self.bodies {
            let last = last_hit(
                time,
                body.voices.iter().map(|&i| timed(self.voices[i].striker.prev())),
            );
            body.recoil.resume(last);
        }
        self.presence.seek(time);
    }
}

/// Assembles a [`StruckInstrument`] voice by voice
pub struct StruckBuilder<'a> {
    name: &'static str,
    setup: Setup<'a>,
    hits: Vec<Hit>,
    voices: Vec<Voice>,
    bodies: Vec<Body>,
}

impl<'a> StruckBuilder<'a> {
    /// A striker named `part` playing the hits on `notes`
    pub fn voice(self, part: &'static str, notes: &[u8]) -> Self {
        self.voice_with(part, notes, |striker| striker)
    }

    /// Like [`voice`](Self::voice), with a chance to adjust the striker
    pub fn voice_with<F>(mut self, part: &'static str, notes: &[u8], configure: F) -> Self
    where
        F: FnOnce(Striker) -> Striker,
    {
        let striker = configure(self.setup.striker(hits_for(&self.hits, notes)));
        self.voices.push(Voice { part, striker });
        self
    }

    /// A recoiling body struck by the named voices
    pub fn body(self, part: &'static str, voices: &[&str]) -> Self {
        self.body_with(part, voices, |recoil| recoil)
    }

    pub fn body_with<F>(mut self, part: &'static str, voices: &[&str], configure: F) -> Self
    where
        F: FnOnce(DrumRecoil) -> DrumRecoil,
    {
        let indices = voices
            .iter()
            .filter_map(|name| self.voices.iter().position(|v| v.part == *name))
            .collect();
        self.bodies.push(Body {
            part,
            recoil: configure(self.setup.recoil()),
            voices: indices,
        });
        self
    }

    pub fn build(self) -> StruckInstrument {
        let played = self
            .voices
            .iter()
            .flat_map(|v| v.striker.hits().iter().copied())
            .collect();
        StruckInstrument {
            name: self.name,
            presence: self.setup.presence(played),
            statuses: Vec::with_capacity(self.voices.len()),
            voices: self.voices,
            bodies: self.bodies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::StageConfig, instruments::test_support::*};

    #[test]
    fn voices_only_play_their_notes() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let hits = vec![hit(1.0, 60, 100), hit(3.0, 61, 100)];
        let mut drums = StruckInstrument::builder("pair", &hits, &setup)
            .voice("left", &[60])
            .voice("right", &[61])
            .build();

        let state = drums.tick(0.9, 0.016);
        assert_eq!(state.part("left").map(|p| p.visible), Some(true));
        assert_eq!(state.part("right").map(|p| p.visible), Some(false));
    }

    #[test]
    fn unknown_voice_names_are_ignored() {
        let config = StageConfig::default();
        let setup = Setup::new(&config, PPQ);
        let mut drum = StruckInstrument::builder("drum", &[hit(1.0, 60, 127)], &setup)
            .voice("stick", &[60])
            .body("drum", &["stick", "nobody"])
            .build();

        let state = drum.tick(1.0, 0.016);
        let offset = state.part("drum").map(|p| p.offset.y).unwrap_or_default();
        assert!((offset + 2.0).abs() < 1e-4);
    }
}
