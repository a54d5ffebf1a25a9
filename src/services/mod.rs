/// System volume control service
pub mod volume;

pub use volume::{BackendKind, SinkId, VolumeError, VolumeService};
