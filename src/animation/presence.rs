use crate::{
    collect::{ArcCollector, EventCollector},
    config::PresenceConfig,
    timeline::{Span, Timed},
};

/// Whether an instrument belongs on stage at `time`, given its surrounding
/// hits: shortly before the next one, across a short silence, or shortly
/// after the last one.
pub fn around_hits(time: f64, next: Option<f64>, prev: Option<f64>, config: &PresenceConfig) -> bool {
    if next.is_some_and(|next| next - time <= config.before) {
        return true;
    }
    if let (Some(next), Some(prev)) = (next, prev) {
        if next - prev <= config.between {
            return true;
        }
    }
    prev.is_some_and(|prev| time - prev <= config.after)
}

/// [`around_hits`] for sustained notes: always on stage while a span is open,
/// and silences are measured from the end of one span to the start of the next.
pub fn around_spans<S: Span>(collector: &ArcCollector<S>, time: f64, config: &PresenceConfig) -> bool {
    if collector.is_open() {
        return true;
    }
    let next = collector.peek().map(|s| s.start());
    let prev = collector.prev().map(|s| s.end());
    around_hits(time, next, prev, config)
}

/// Tracks every hit of an instrument to decide when it is on stage
pub struct Presence<T> {
    collector: EventCollector<T>,
    config: PresenceConfig,
}

impl<T: Timed> Presence<T> {
    pub fn new(events: Vec<T>, config: &PresenceConfig) -> Self {
        Self {
            collector: EventCollector::new(events),
            config: config.clone(),
        }
    }

    pub fn tick(&mut self, time: f64) -> bool {
        self.collector.advance_collect_all(time);
        around_hits(
            time,
            self.collector.peek().map(Timed::time),
            self.collector.prev().map(Timed::time),
            &self.config,
        )
    }

    pub fn seek(&mut self, time: f64) {
        self.collector.seek(time);
    }
}
