//! Sync and playback bridge
//!
//! After each edit the engine redraws the staff, rewrites the submission
//! input and auditions the affected note through these collaborators.

pub mod midi;
pub mod playback;
pub mod ports;
pub mod recording;
pub mod submission;

pub use midi::export_smf;
pub use playback::{schedule, ScheduledNote};
pub use ports::{AudioRequest, AudioSink, Ports, RenderSurface, SubmissionChannel};
pub use recording::{PortEvent, Recorder};
pub use submission::serialize_notes;
