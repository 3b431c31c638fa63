use crate::timeline::Hit;

/// Flips a swing direction each time a striker takes aim at a new hit.
///
/// Only a change from one target to a different one flips. Frames with no
/// target leave the direction alone, and the very first target sets no flip.
#[derive(Debug, Clone, Default)]
pub struct SwingAlternator {
    last_target: Option<Hit>,
    flipped: bool,
}

impl SwingAlternator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's target and return whether the swing is flipped
    pub fn update(&mut self, target: Option<Hit>) -> bool {
        if let Some(target) = target {
            if self.last_target.is_some_and(|last| last != target) {
                self.flipped = !self.flipped;
            }
            self.last_target = Some(target);
        }
        self.flipped
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Restore the state continuous playback would have reached, given the
    /// last target and how many times the target changed before it. Each
    /// change flipped once, so the direction is that count's parity.
    pub fn seek(&mut self, last_target: Option<(usize, Hit)>) {
        match last_target {
            Some((changes, hit)) => {
                self.last_target = Some(hit);
                self.flipped = changes % 2 == 1;
            }
            None => {
                self.last_target = None;
                self.flipped = false;
            }
        }
    }
}
