/// A fixed-length effect started by a hit: a whistle blast, a laser flash.
///
/// Retriggering restarts it from the beginning.
#[derive(Debug, Clone)]
pub struct OneShot {
    duration: f32,
    /// Fraction of `duration` played so far, `None` when idle
    progress: Option<f32>,
}

impl OneShot {
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(f32::EPSILON),
            progress: None,
        }
    }

    pub fn trigger(&mut self) {
        self.progress = Some(0.0);
    }

    /// Advance by `delta` and return the progress in `[0, 1)`, or `None` once
    /// the effect has run its course
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        if let Some(progress) = self.progress {
            let progress = progress + delta / self.duration;
            self.progress = (progress < 1.0).then_some(progress);
        }
        self.progress
    }

    pub fn is_playing(&self) -> bool {
        self.progress.is_some()
    }

    pub fn progress(&self) -> Option<f32> {
        self.progress
    }

    /// Resume as if the last trigger happened `seconds` ago
    pub fn resume(&mut self, seconds: Option<f64>) {
        self.progress = seconds
            .map(|s| s as f32 / self.duration)
            .filter(|p| (0.0..1.0).contains(p));
    }
}
