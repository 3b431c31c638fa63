//! Cursors that walk sorted timelines as playback time advances.
//!
//! [`EventCollector`] hands out instantaneous events once each; [`ArcCollector`]
//! tracks which sustained spans are open. Both support seeking in either
//! direction and end up exactly where continuous playback would have.

pub mod arc;
pub mod event;

pub use arc::{ArcCollector, Release};
pub use event::{EventCollector, Trigger};
