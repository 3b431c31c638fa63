//! Timestamped musical events and the tick → seconds mapping.
//!
//! A [`Timeline`] is built once per song and never mutated afterwards. Every
//! event carries both its tick and its time in seconds, so collectors and
//! animators downstream never need the tempo map themselves.

pub mod arc;
pub mod tempo;

pub use arc::{contiguous_groups, pair_arcs, ArcGroup, Span, TimedArc};
pub use tempo::{TempoChange, TempoMap, DEFAULT_TEMPO};

/// The General MIDI percussion channel (zero-based)
pub const PERCUSSION_CHANNEL: u8 = 9;

/// Anything that sits at a point on the timeline
pub trait Timed {
    /// Time in seconds
    fn time(&self) -> f64;
    /// Time in ticks
    fn tick(&self) -> u64;
}

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8 },
    ControlChange { controller: u8, value: u8 },
    ProgramChange { program: u8 },
}

/// A single event on the timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub tick: u64,
    /// Seconds, derived from `tick` through the tempo map
    pub time: f64,
    pub channel: u8,
    pub kind: EventKind,
}

impl Event {
    /// The NoteOn view of this event, if it is one
    pub fn as_hit(&self) -> Option<Hit> {
        match self.kind {
            EventKind::NoteOn { note, velocity } => Some(Hit {
                tick: self.tick,
                time: self.time,
                note,
                velocity,
            }),
            _ => None,
        }
    }

    /// The ProgramChange view of this event, if it is one
    pub fn as_program(&self) -> Option<ProgramEvent> {
        match self.kind {
            EventKind::ProgramChange { program } => Some(ProgramEvent {
                tick: self.tick,
                time: self.time,
                program,
            }),
            _ => None,
        }
    }
}

impl Timed for Event {
    fn time(&self) -> f64 {
        self.time
    }

    fn tick(&self) -> u64 {
        self.tick
    }
}

/// A NoteOn: the thing a stick strikes for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub tick: u64,
    pub time: f64,
    pub note: u8,
    /// MIDI velocity (1-127)
    pub velocity: u8,
}

impl Timed for Hit {
    fn time(&self) -> f64 {
        self.time
    }

    fn tick(&self) -> u64 {
        self.tick
    }
}

/// A program change with its timing, used for kit selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramEvent {
    pub tick: u64,
    pub time: f64,
    pub program: u8,
}

impl Timed for ProgramEvent {
    fn time(&self) -> f64 {
        self.time
    }

    fn tick(&self) -> u64 {
        self.tick
    }
}

/// Keep only the hits whose note is one of `notes`, preserving order
pub fn hits_for(hits: &[Hit], notes: &[u8]) -> Vec<Hit> {
    hits.iter().filter(|h| notes.contains(&h.note)).copied().collect()
}

/// An immutable, tick-sorted list of events plus its tempo map
#[derive(Debug, Clone)]
pub struct Timeline {
    tempo: TempoMap,
    events: Vec<Event>,
}

impl Timeline {
    /// Start building a timeline with the given ticks-per-quarter resolution
    pub fn builder(division: u32) -> TimelineBuilder {
        TimelineBuilder::new(division)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn tempo(&self) -> &TempoMap {
        &self.tempo
    }

    /// Ticks per quarter note
    pub fn division(&self) -> u32 {
        self.tempo.division()
    }

    /// Seconds at which a tick occurs
    pub fn seconds_at(&self, tick: u64) -> f64 {
        self.tempo.seconds_at(tick)
    }

    /// Time of the last event, in seconds (0 for an empty timeline)
    pub fn duration(&self) -> f64 {
        self.events.last().map_or(0.0, |e| e.time)
    }

    /// Channels that carry at least one event, ascending
    pub fn channels(&self) -> Vec<u8> {
        let mut channels: Vec<u8> = self.events.iter().map(|e| e.channel).collect();
        channels.sort_unstable();
        channels.dedup();
        channels
    }

    /// All events on one channel, in order
    pub fn channel(&self, channel: u8) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.channel == channel)
    }

    /// NoteOns on one channel
    pub fn hits_on(&self, channel: u8) -> Vec<Hit> {
        self.channel(channel).filter_map(Event::as_hit).collect()
    }

    /// Paired note periods on one channel
    pub fn arcs_on(&self, channel: u8) -> Vec<TimedArc> {
        let events: Vec<Event> = self.channel(channel).copied().collect();
        pair_arcs(&events)
    }

    /// Program changes on one channel
    pub fn programs_on(&self, channel: u8) -> Vec<ProgramEvent> {
        self.channel(channel).filter_map(Event::as_program).collect()
    }
}

/// Builder for constructing timelines with a fluent API
pub struct TimelineBuilder {
    division: u32,
    tempo_changes: Vec<TempoChange>,
    events: Vec<(u64, u8, EventKind)>,
}

impl TimelineBuilder {
    fn new(division: u32) -> Self {
        Self {
            division,
            tempo_changes: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Set the tempo (in BPM) from `tick` onwards
    pub fn tempo(mut self, tick: u64, bpm: f64) -> Self {
        let micros_per_quarter = if bpm > 0.0 {
            (60_000_000.0 / bpm).round() as u32
        } else {
            0
        };
        self.tempo_changes.push(TempoChange {
            tick,
            micros_per_quarter,
        });
        self
    }

    /// Set the tempo in raw microseconds per quarter note
    pub fn tempo_micros(mut self, tick: u64, micros_per_quarter: u32) -> Self {
        self.tempo_changes.push(TempoChange {
            tick,
            micros_per_quarter,
        });
        self
    }

    /// Add a NoteOn. A velocity of 0 is recorded as a NoteOff.
    pub fn note_on(mut self, tick: u64, channel: u8, note: u8, velocity: u8) -> Self {
        let kind = if velocity == 0 {
            EventKind::NoteOff { note }
        } else {
            EventKind::NoteOn {
                note,
                velocity: velocity.min(127),
            }
        };
        self.events.push((tick, channel, kind));
        self
    }

    pub fn note_off(mut self, tick: u64, channel: u8, note: u8) -> Self {
        self.events.push((tick, channel, EventKind::NoteOff { note }));
        self
    }

    /// Add a NoteOn and its NoteOff `length` ticks later
    pub fn note(self, tick: u64, length: u64, channel: u8, note: u8, velocity: u8) -> Self {
        self.note_on(tick, channel, note, velocity)
            .note_off(tick + length, channel, note)
    }

    /// Add a percussion hit (channel 10) lasting one tick
    pub fn hit(self, tick: u64, note: u8, velocity: u8) -> Self {
        self.note(tick, 1, PERCUSSION_CHANNEL, note, velocity)
    }

    pub fn control_change(mut self, tick: u64, channel: u8, controller: u8, value: u8) -> Self {
        self.events
            .push((tick, channel, EventKind::ControlChange { controller, value }));
        self
    }

    pub fn program_change(mut self, tick: u64, channel: u8, program: u8) -> Self {
        self.events
            .push((tick, channel, EventKind::ProgramChange { program }));
        self
    }

    /// Build the final timeline.
    ///
    /// Events are stably sorted by tick, so events added at the same tick keep
    /// their insertion order.
    pub fn build(self) -> Result<Timeline, TimelineError> {
        if self.division == 0 {
            return Err(TimelineError::ZeroDivision);
        }

        let mut tempo_changes = self.tempo_changes;
        tempo_changes.sort_by_key(|c| c.tick);
        for pair in tempo_changes.windows(2) {
            if pair[0].tick == pair[1].tick {
                return Err(TimelineError::DuplicateTempoChange { tick: pair[1].tick });
            }
        }
        if let Some(change) = tempo_changes.iter().find(|c| c.micros_per_quarter == 0) {
            return Err(TimelineError::InvalidTempo { tick: change.tick });
        }

        let tempo = TempoMap::new(self.division, tempo_changes);

        let mut raw = self.events;
        raw.sort_by_key(|(tick, _, _)| *tick);

        let events = raw
            .into_iter()
            .map(|(tick, channel, kind)| Event {
                tick,
                time: tempo.seconds_at(tick),
                channel,
                kind,
            })
            .collect();

        Ok(Timeline { tempo, events })
    }
}

/// Errors that can occur when building a timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// Ticks-per-quarter of zero makes every duration infinite
    ZeroDivision,
    /// A tempo of zero (or a non-positive BPM) was given
    InvalidTempo { tick: u64 },
    /// Two tempo changes share one tick
    DuplicateTempoChange { tick: u64 },
}

impl std::fmt::Display for TimelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimelineError::ZeroDivision => {
                write!(f, "Timeline division must be at least one tick per quarter note")
            }
            TimelineError::InvalidTempo { tick } => {
                write!(f, "Invalid tempo at tick {}: tempo must be positive", tick)
            }
            TimelineError::DuplicateTempoChange { tick } => {
                write!(f, "More than one tempo change at tick {}", tick)
            }
        }
    }
}

impl std::error::Error for TimelineError {}

#[cfg(test)]
mod tests {
    use super::*;

    const PPQ: u32 = 480;

    #[test]
    fn events_are_timed_through_the_tempo_map() {
        let timeline = Timeline::builder(PPQ)
            .tempo(0, 120.0)
            .hit(480, 38, 100)
            .hit(960, 36, 90)
            .build()
            .unwrap();

        let hits = timeline.hits_on(PERCUSSION_CHANNEL);
        assert_eq!(hits.len(), 2);
        assert!((hits[0].time - 0.5).abs() < 1e-9);
        assert!((hits[1].time - 1.0).abs() < 1e-9);
        assert_eq!(hits[1].note, 36);
    }

    #[test]
    fn events_are_sorted_stably() {
        let timeline = Timeline::builder(PPQ)
            .hit(960, 42, 80)
            .hit(0, 36, 100)
            .hit(0, 38, 100)
            .build()
            .unwrap();

        let notes: Vec<u8> = timeline
            .hits_on(PERCUSSION_CHANNEL)
            .iter()
            .map(|h| h.note)
            .collect();
        assert_eq!(notes, vec![36, 38, 42]);
    }

    #[test]
    fn zero_velocity_note_on_is_note_off() {
        let timeline = Timeline::builder(PPQ)
            .note_on(0, 0, 60, 100)
            .note_on(240, 0, 60, 0)
            .build()
            .unwrap();

        assert!(matches!(
            timeline.events()[1].kind,
            EventKind::NoteOff { note: 60 }
        ));
        assert_eq!(timeline.arcs_on(0).len(), 1);
    }

    #[test]
    fn programs_are_extracted_per_channel() {
        let timeline = Timeline::builder(PPQ)
            .program_change(0, PERCUSSION_CHANNEL, 16)
            .program_change(0, 2, 119)
            .control_change(10, 2, 64, 127)
            .build()
            .unwrap();

        let programs = timeline.programs_on(PERCUSSION_CHANNEL);
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].program, 16);
        assert_eq!(timeline.channels(), vec![2, PERCUSSION_CHANNEL]);
    }

    #[test]
    fn zero_division_is_rejected() {
        let result = Timeline::builder(0).hit(0, 36, 100).build();
        assert_eq!(result.unwrap_err(), TimelineError::ZeroDivision);
    }

    #[test]
    fn invalid_tempo_is_rejected() {
        let result = Timeline::builder(PPQ).tempo(0, 0.0).build();
        assert!(matches!(result, Err(TimelineError::InvalidTempo { tick: 0 })));

        let result = Timeline::builder(PPQ)
            .tempo(0, 120.0)
            .tempo(0, 90.0)
            .build();
        assert!(matches!(
            result,
            Err(TimelineError::DuplicateTempoChange { tick: 0 })
        ));
    }
}
