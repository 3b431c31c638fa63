use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Event, EventKind, Timed};

/// Anything with a start and an end on the timeline
pub trait Span {
    fn start(&self) -> f64;
    fn end(&self) -> f64;

    fn duration(&self) -> f64 {
        self.end() - self.start()
    }
}

/// A sustained note: a NoteOn paired with its NoteOff
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedArc {
    pub note: u8,
    pub velocity: u8,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    pub start_tick: u64,
    pub end_tick: u64,
}

impl Span for TimedArc {
    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> f64 {
        self.end
    }
}

impl Timed for TimedArc {
    fn time(&self) -> f64 {
        self.start
    }

    fn tick(&self) -> u64 {
        self.start_tick
    }
}

/// Pair NoteOns with NoteOffs into arcs.
///
/// A retriggered note replaces the pending NoteOn, so the later one wins.
/// NoteOffs with no pending NoteOn are dropped. Exact duplicates are removed
/// and the result is sorted by start.
pub fn pair_arcs(events: &[Event]) -> Vec<TimedArc> {
    let mut pending: [Option<&Event>; 128] = [None; 128];
    let mut arcs: Vec<TimedArc> = Vec::new();
    let mut seen = HashSet::new();

    for event in events {
        match event.kind {
            EventKind::NoteOn { note, .. } => pending[note as usize & 0x7f] = Some(event),
            EventKind::NoteOff { note } => match pending[note as usize & 0x7f].take() {
                Some(on) => {
                    let velocity = match on.kind {
                        EventKind::NoteOn { velocity, .. } => velocity,
                        _ => 0,
                    };
                    let arc = TimedArc {
                        note,
                        velocity,
                        start: on.time,
                        end: event.time,
                        start_tick: on.tick,
                        end_tick: event.tick,
                    };
                    if seen.insert((arc.start_tick, arc.end_tick, note, velocity)) {
                        arcs.push(arc);
                    }
                }
                None => {
                    log::warn!(
                        "dropping unpaired note-off (note {} at tick {}, channel {})",
                        note,
                        event.tick,
                        event.channel
                    );
                }
            },
            _ => {}
        }
    }

    arcs.sort_by(|a, b| a.start.total_cmp(&b.start));
    arcs
}

/// A run of arcs that overlap one another
#[derive(Debug, Clone, PartialEq)]
pub struct ArcGroup {
    pub arcs: Vec<TimedArc>,
    start: f64,
    end: f64,
}

impl ArcGroup {
    fn new(arcs: Vec<TimedArc>) -> Self {
        let start = arcs.iter().map(|a| a.start).fold(f64::INFINITY, f64::min);
        let end = arcs.iter().map(|a| a.end).fold(f64::NEG_INFINITY, f64::max);
        Self { arcs, start, end }
    }
}

impl Span for ArcGroup {
    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> f64 {
        self.end
    }
}

/// Split start-sorted arcs into groups of overlapping arcs.
///
/// A new group begins when an arc starts at or after the furthest end tick
/// seen in the current group, so arcs that merely touch are separate.
pub fn contiguous_groups(arcs: &[TimedArc]) -> Vec<ArcGroup> {
    let mut groups = Vec::new();
    let mut current: Vec<TimedArc> = Vec::new();
    let mut furthest = 0u64;

    for arc in arcs {
        if !current.is_empty() && arc.start_tick >= furthest {
            groups.push(ArcGroup::new(std::mem::take(&mut current)));
            furthest = arc.end_tick;
        } else {
            furthest = furthest.max(arc.end_tick);
        }
        current.push(*arc);
    }

    if !current.is_empty() {
        groups.push(ArcGroup::new(current));
    }

    groups
}
