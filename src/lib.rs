pub mod animation; // Strikers, recoil, wobble and friends
pub mod collect; // Cursors over sorted timelines
pub mod command;
pub mod config;
pub mod instruments; // One animator per percussion instrument
pub mod scene;
pub mod stage;
pub mod timeline; // Events, tempo and note arcs

pub use command::{CommandReceiver, TransportCommand};
pub use config::StageConfig;
pub use scene::{PartState, RenderState};
pub use stage::{Stage, Transport};
pub use timeline::Timeline;
