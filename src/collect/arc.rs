use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::timeline::Span;

/// Decides whether an open span should close at a playback time
pub type Release<S> = Box<dyn Fn(&S, f64) -> bool + Send>;

/// Heap key: end time, then index so equal ends pop in a stable order
#[derive(Debug, Clone, Copy)]
struct Ending {
    end: f64,
    index: usize,
}

impl PartialEq for Ending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ending {}

impl PartialOrd for Ending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.end
            .total_cmp(&other.end)
            .then(self.index.cmp(&other.index))
    }
}

/// Tracks which spans are sounding as playback time moves forward.
///
/// Spans open when their start is reached and close when the release predicate
/// (by default `end <= time`) holds for them. Open spans wait in a min-heap
/// keyed by end time, so closing is a cheap look at the heap's top.
pub struct ArcCollector<S> {
    spans: Vec<S>,
    /// Index of the next span that has not opened yet
    next: usize,
    ending: BinaryHeap<Reverse<Ending>>,
    /// Open spans in the order they opened
    open: Vec<usize>,
    just_opened: Vec<usize>,
    last_closed: Option<usize>,
    release: Release<S>,
}

impl<S: Span> ArcCollector<S> {
    pub fn new(spans: Vec<S>) -> Self {
        Self::with_release(spans, |span: &S, time| span.end() <= time)
    }

    /// Build a collector with a custom release predicate.
    ///
    /// The predicate must be monotonic in the span's end time.
    pub fn with_release<F>(mut spans: Vec<S>, release: F) -> Self
    where
        F: Fn(&S, f64) -> bool + Send + 'static,
    {
        spans.sort_by(|a, b| a.start().total_cmp(&b.start()));
        Self {
            spans,
            next: 0,
            ending: BinaryHeap::new(),
            open: Vec::new(),
            just_opened: Vec::new(),
            last_closed: None,
            release: Box::new(release),
        }
    }

    /// Close spans `seconds` before their real end, leaving a visible gap
    /// between back-to-back notes.
    pub fn release_early(spans: Vec<S>, seconds: f64) -> Self {
        Self::with_release(spans, move |span: &S, time| span.end() - seconds <= time)
    }

    /// Open every span whose start has been reached, close every span whose
    /// release condition now holds, and return the open set.
    pub fn advance(&mut self, time: f64) -> impl Iterator<Item = &S> + '_ {
        self.just_opened.clear();

        while let Some(span) = self.spans.get(self.next) {
            if span.start() > time {
                break;
            }
            self.ending.push(Reverse(Ending {
                end: span.end(),
                index: self.next,
            }));
            self.open.push(self.next);
            self.just_opened.push(self.next);
            self.next += 1;
        }

        while let Some(Reverse(top)) = self.ending.peek().copied() {
            if !(self.release)(&self.spans[top.index], time) {
                break;
            }
            self.ending.pop();
            self.open.retain(|&i| i != top.index);
            self.last_closed = Some(top.index);
        }

        self.open()
    }

    /// Open spans, oldest first
    pub fn open(&self) -> impl Iterator<Item = &S> + '_ {
        self.open.iter().map(move |&i| &self.spans[i])
    }

    /// The most recently opened span that is still open
    pub fn current(&self) -> Option<&S> {
        self.open.last().map(|&i| &self.spans[i])
    }

    /// The open span that will close first
    pub fn soonest_ending(&self) -> Option<&S> {
        self.ending.peek().map(|Reverse(e)| &self.spans[e.index])
    }

    /// Spans opened by the latest `advance`, including any that closed in
    /// the same call
    pub fn just_opened(&self) -> impl Iterator<Item = &S> + '_ {
        self.just_opened.iter().map(move |&i| &self.spans[i])
    }

    /// The next span that has not opened yet
    pub fn peek(&self) -> Option<&S> {
        self.spans.get(self.next)
    }

    /// The span that closed most recently
    pub fn prev(&self) -> Option<&S> {
        self.last_closed.map(|i| &self.spans[i])
    }

    pub fn is_open(&self) -> bool {
        !self.open.is_empty()
    }

    /// Rebuild the open set from scratch as of `time`.
    ///
    /// Spans opened by the replay are not reported by `just_opened`.
    pub fn seek(&mut self, time: f64) {
        self.next = 0;
        self.ending.clear();
        self.open.clear();
        self.last_closed = None;
        self.advance(time).for_each(drop);
        self.just_opened.clear();
    }

    pub fn spans(&self) -> &[S] {
        &self.spans
    }
}

impl<S> std::fmt::Debug for ArcCollector<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArcCollector")
            .field("len", &self.spans.len())
            .field("next", &self.next)
            .field("open", &self.open)
            .finish()
    }
}
