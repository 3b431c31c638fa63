//! Frame-rate independent motion built on the collectors.
//!
//! - [`Striker`]: the swing of a stick onto each hit
//! - [`DrumRecoil`]: a drum head knocked down and springing back
//! - [`Wobble`]: a cymbal rocking after a strike
//! - [`SwingAlternator`]: left/right swings that change only per target
//! - [`PoseToggle`]: two poses picked by which of two notes fired last
//! - [`OneShot`], [`Smoother`]: timed effects and eased transitions
//! - [`presence`]: when a whole instrument is on stage

pub mod alternator;
pub mod curves;
pub mod overlay;
pub mod presence;
pub mod recoil;
pub mod smoother;
pub mod striker;
pub mod toggle;
pub mod wobble;

pub use alternator::SwingAlternator;
pub use overlay::OneShot;
pub use presence::Presence;
pub use recoil::{max_velocity, DrumRecoil};
pub use smoother::{Smoother, VecSmoother};
pub use striker::{StrikeStatus, Striker, StrikerVisibility};
pub use toggle::{Pose, PoseToggle};
pub use wobble::Wobble;
