use crate::{collect::EventCollector, timeline::Hit};

/// Which of two poses a toggle is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    /// Muted, closed, or hand down
    Closed,
    /// Open, hand up
    Open,
}

/// A two-pose state picked by whichever of two hit lists fired last.
///
/// When the history is unknown (at the start, or after a seek) the pose is
/// chosen for the hit coming up next, so the hand is already in place. Ties
/// go to [`Pose::Closed`].
pub struct PoseToggle {
    closed: EventCollector<Hit>,
    open: EventCollector<Hit>,
    pose: Pose,
}

impl PoseToggle {
    pub fn new(closed: Vec<Hit>, open: Vec<Hit>) -> Self {
        let mut toggle = Self {
            closed: EventCollector::new(closed),
            open: EventCollector::new(open),
            pose: Pose::Closed,
        };
        toggle.pose = toggle.upcoming();
        toggle
    }

    /// Advance both lists and return the pose plus the hit that set it this
    /// frame, if any
    pub fn tick(&mut self, time: f64) -> (Pose, Option<Hit>) {
        let closed = self.closed.advance_collect_one(time).copied();
        let open = self.open.advance_collect_one(time).copied();

        let fired = match (closed, open) {
            (Some(c), Some(o)) if o.time > c.time => Some((Pose::Open, o)),
            (Some(c), _) => Some((Pose::Closed, c)),
            (None, Some(o)) => Some((Pose::Open, o)),
            (None, None) => None,
        };

        if let Some((pose, _)) = fired {
            self.pose = pose;
        }
        (self.pose, fired.map(|(_, hit)| hit))
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn seek(&mut self, time: f64) {
        self.closed.seek(time);
        self.open.seek(time);
        self.pose = self.upcoming();
    }

    fn upcoming(&self) -> Pose {
        match (self.closed.peek(), self.open.peek()) {
            (Some(c), Some(o)) if o.time < c.time => Pose::Open,
            (Some(_), _) => Pose::Closed,
            (None, Some(_)) => Pose::Open,
            (None, None) => self.latest(),
        }
    }

    /// Pose of the most recent hit, for when nothing is coming up
    fn latest(&self) -> Pose {
        match (self.closed.prev(), self.open.prev()) {
            (Some(c), Some(o)) if o.time > c.time => Pose::Open,
            (None, Some(_)) => Pose::Open,
            _ => Pose::Closed,
        }
    }

    /// Every hit on both lists, in time order
    pub fn hits(&self) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self
            .closed
            .events()
            .iter()
            .chain(self.open.events())
            .copied()
            .collect();
        hits.sort_by(|a, b| a.time.total_cmp(&b.time));
        hits
    }
}
