//! Everything on stage for one song, driven frame by frame.
//!
//! ```text
//!   host UI ──TransportCommand──▶ CommandReceiver
//!                                       │ drained once per frame
//!                                       ▼
//!   render loop ──frame(delta)──▶ Stage ──▶ Transport (playhead, pause, loop)
//!                                       │
//!                                       ├─▶ PercussionKit ──▶ instruments
//!                                       └─▶ reverse cymbals
//!                                       ▼
//!                              Vec<RenderState>
//! ```
//!
//! Seeks are only ever applied between frames, so no instrument is advanced
//! and rewound at the same time.

use log::debug;

use crate::{
    command::{CommandReceiver, TransportCommand},
    config::StageConfig,
    instruments::{notes::REVERSE_CYMBAL_PROGRAM, DrumKit, Instrument, PercussionKit, ReverseCymbal, Setup},
    scene::RenderState,
    timeline::{ProgramEvent, TimedArc, Timeline, PERCUSSION_CHANNEL},
};

/// The playhead: where playback is, whether it is moving, and when it loops
#[derive(Debug, Clone, PartialEq)]
pub struct Transport {
    time: f64,
    paused: bool,
    /// Playback wraps to 0 once it passes this time
    loop_at: f64,
}

impl Transport {
    pub fn new(loop_at: f64) -> Self {
        Self {
            time: 0.0,
            paused: false,
            loop_at: loop_at.max(0.0),
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn loop_at(&self) -> f64 {
        self.loop_at
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Move to `time`, clamped to the playable range
    pub fn seek(&mut self, time: f64) -> f64 {
        self.time = time.clamp(0.0, self.loop_at);
        self.time
    }

    /// Advance by `delta` seconds unless paused. Returns true when playback
    /// passed the end and wrapped to the start.
    pub fn advance(&mut self, delta: f32) -> bool {
        if self.paused {
            return false;
        }
        self.time += delta.max(0.0) as f64;
        if self.time > self.loop_at {
            self.time = 0.0;
            return true;
        }
        false
    }
}

/// All instruments for a timeline, plus the transport that drives them
pub struct Stage {
    kit: PercussionKit,
    reverse_cymbals: Vec<ReverseCymbal>,
    transport: Transport,
}

impl Stage {
    pub fn new(timeline: &Timeline, config: StageConfig) -> Self {
        let setup = Setup::new(&config, timeline.division());

        let percussion: Vec<_> = timeline.channel(PERCUSSION_CHANNEL).copied().collect();
        let kit = PercussionKit::build(&percussion, &setup);

        let reverse_cymbals: Vec<ReverseCymbal> = timeline
            .channels()
            .into_iter()
            .filter(|&channel| channel != PERCUSSION_CHANNEL)
            .filter_map(|channel| {
                let arcs = reverse_cymbal_arcs(&timeline.arcs_on(channel), &timeline.programs_on(channel));
                (!arcs.is_empty()).then(|| ReverseCymbal::new(&arcs, &setup))
            })
            .collect();

        debug!(
            "stage built: {:?} + {} reverse cymbal(s), {:.2}s",
            kit.names(),
            reverse_cymbals.len(),
            timeline.duration()
        );

        Self {
            kit,
            reverse_cymbals,
            transport: Transport::new(timeline.duration() + config.presence.after),
        }
    }

    /// Render every instrument at `time`, `delta` seconds after the last frame
    pub fn tick(&mut self, time: f64, delta: f32) -> Vec<RenderState> {
        let mut states = self.kit.tick(time, delta);
        states.extend(self.reverse_cymbals.iter_mut().map(|c| c.tick(time, delta)));
        states
    }

    /// Jump every instrument to `time`
    pub fn seek(&mut self, time: f64) {
        debug!("seek to {:.3}s", time);
        self.kit.seek(time);
        for cymbal in &mut self.reverse_cymbals {
            cymbal.seek(time);
        }
    }

    /// One frame of playback: apply pending commands, move the playhead,
    /// render at the new time
    pub fn frame<R: CommandReceiver>(&mut self, delta: f32, commands: &mut R) -> Vec<RenderState> {
        while let Some(command) = commands.pop() {
            match command {
                TransportCommand::Seek(time) => {
                    let time = self.transport.seek(time);
                    self.seek(time);
                }
                TransportCommand::TogglePause => self.transport.toggle_pause(),
                TransportCommand::Restart => {
                    self.transport.seek(0.0);
                    self.seek(0.0);
                }
            }
        }

        if self.transport.advance(delta) {
            debug!("loop restart after {:.2}s", self.transport.loop_at());
            self.seek(0.0);
        }
        let delta = if self.transport.is_paused() { 0.0 } else { delta };
        self.tick(self.transport.time(), delta)
    }

    pub fn current_kit(&self) -> DrumKit {
        self.kit.current_kit()
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Names of every instrument, in the order `tick` reports them
    pub fn instrument_names(&self) -> Vec<&'static str> {
        let mut names = self.kit.names();
        names.extend(self.reverse_cymbals.iter().map(|c| c.name()));
        names
    }
}

/// The arcs that start while the Reverse Cymbal program is selected
fn reverse_cymbal_arcs(arcs: &[TimedArc], programs: &[ProgramEvent]) -> Vec<TimedArc> {
    arcs.iter()
        .filter(|arc| {
            let program = programs
                .iter()
                .take_while(|p| p.tick <= arc.start_tick)
                .last()
                .map_or(0, |p| p.program);
            program == REVERSE_CYMBAL_PROGRAM
        })
        .copied()
        .collect()
}
