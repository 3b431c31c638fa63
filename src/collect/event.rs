use crate::timeline::Timed;

/// Decides whether an event is eligible at a playback time
pub type Trigger<T> = Box<dyn Fn(&T, f64) -> bool + Send>;

/// A forward-only, seekable cursor over a sorted event list.
///
/// Each call to an `advance_*` method returns the events that became eligible
/// since the previous call. Eligibility is decided by the trigger, which
/// defaults to `event.time() <= time` and must be monotonic in time.
pub struct EventCollector<T> {
    events: Vec<T>,
    /// Index of the next event that has not been returned yet
    index: usize,
    trigger: Trigger<T>,
}

impl<T: Timed> EventCollector<T> {
    pub fn new(events: Vec<T>) -> Self {
        Self::with_trigger(events, |event: &T, time| event.time() <= time)
    }

    /// Build a collector with a custom eligibility predicate.
    ///
    /// Events are stably sorted by time, so unsorted input still yields
    /// events in timeline order.
    pub fn with_trigger<F>(mut events: Vec<T>, trigger: F) -> Self
    where
        F: Fn(&T, f64) -> bool + Send + 'static,
    {
        events.sort_by(|a, b| a.time().total_cmp(&b.time()));
        Self {
            events,
            index: 0,
            trigger: Box::new(trigger),
        }
    }

    /// Every event that became eligible at `time`, in timeline order.
    ///
    /// Calling again with the same or an earlier time returns an empty slice.
    pub fn advance_collect_all(&mut self, time: f64) -> &[T] {
        let start = self.index;
        while self
            .events
            .get(self.index)
            .is_some_and(|event| (self.trigger)(event, time))
        {
            self.index += 1;
        }
        &self.events[start..self.index]
    }

    /// The last event that became eligible at `time`.
    ///
    /// Earlier events eligible in the same call are skipped.
    pub fn advance_collect_one(&mut self, time: f64) -> Option<&T> {
        self.advance_collect_all(time).last()
    }

    /// Move the cursor to where sequential advancement up to `time` would
    /// have left it. Works in both directions.
    pub fn seek(&mut self, time: f64) {
        let trigger = &self.trigger;
        self.index = self.events.partition_point(|event| trigger(event, time));
    }

    /// The next event that is not yet eligible
    pub fn peek(&self) -> Option<&T> {
        self.events.get(self.index)
    }

    /// The most recently returned event
    pub fn prev(&self) -> Option<&T> {
        self.index.checked_sub(1).and_then(|i| self.events.get(i))
    }

    pub fn events(&self) -> &[T] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for EventCollector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventCollector")
            .field("len", &self.events.len())
            .field("index", &self.index)
            .finish()
    }
}
