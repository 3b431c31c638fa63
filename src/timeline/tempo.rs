/// Microseconds per quarter note when a file never sets a tempo (120 BPM).
pub const DEFAULT_TEMPO: u32 = 500_000;

/// A tempo change taking effect at a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempoChange {
    /// Tick at which this tempo starts
    pub tick: u64,
    /// Microseconds per quarter note
    pub micros_per_quarter: u32,
}

impl TempoChange {
    pub fn bpm(&self) -> f64 {
        60_000_000.0 / self.micros_per_quarter as f64
    }
}

/// Piecewise-constant tempo map converting ticks to seconds.
///
/// Each change stores the absolute second at which it starts, so a lookup is a
/// binary search plus one multiply.
#[derive(Debug, Clone)]
pub struct TempoMap {
    /// Ticks per quarter note
    division: u32,
    changes: Vec<TempoChange>,
    /// Seconds elapsed at each change's tick (parallel to `changes`)
    starts: Vec<f64>,
}

impl TempoMap {
    /// Build a map from ticks-per-quarter and a list of changes sorted by tick.
    ///
    /// A change at tick 0 is implied when none is given.
    pub(crate) fn new(division: u32, mut changes: Vec<TempoChange>) -> Self {
        if changes.first().map_or(true, |c| c.tick != 0) {
            changes.insert(
                0,
                TempoChange {
                    tick: 0,
                    micros_per_quarter: DEFAULT_TEMPO,
                },
            );
        }

        let mut starts = Vec::with_capacity(changes.len());
        let mut seconds = 0.0;
        for (i, change) in changes.iter().enumerate() {
            if i > 0 {
                let previous = &changes[i - 1];
                seconds += Self::span_seconds(division, previous, change.tick - previous.tick);
            }
            starts.push(seconds);
        }

        Self {
            division,
            changes,
            starts,
        }
    }

    /// Ticks per quarter note
    pub fn division(&self) -> u32 {
        self.division
    }

    pub fn changes(&self) -> &[TempoChange] {
        &self.changes
    }

    /// Seconds from the start of the song to `tick`
    pub fn seconds_at(&self, tick: u64) -> f64 {
        let index = self.index_at(tick);
        let change = &self.changes[index];
        self.starts[index] + Self::span_seconds(self.division, change, tick - change.tick)
    }

    /// Tempo in effect at `tick`, in beats per minute
    pub fn bpm_at(&self, tick: u64) -> f64 {
        self.changes[self.index_at(tick)].bpm()
    }

    fn index_at(&self, tick: u64) -> usize {
        // changes[0].tick is always 0, so the partition point is at least 1
        self.changes.partition_point(|c| c.tick <= tick) - 1
    }

    fn span_seconds(division: u32, change: &TempoChange, ticks: u64) -> f64 {
        ticks as f64 / division as f64 * change.micros_per_quarter as f64 / 1_000_000.0
    }
}
