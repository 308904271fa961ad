//! Models module for the score editor
//!
//! This module contains the in-memory music model: spelled pitches,
//! note events and the piece itself.

pub mod music;
pub mod note;
pub mod pitch;

// Re-export commonly used types
pub use music::Music;
pub use note::{NoteEvent, NoteValue, Pitches, DEFAULT_REST_PLACEHOLDER, REST_MARKER};
pub use pitch::{Accidental, Letter, PitchName, PitchNumber};
