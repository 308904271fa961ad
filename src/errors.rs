//! Error types for the score editor
//!
//! `ModelError` covers the music model and the pitch tables (bad input data,
//! out-of-range lookups). `EditorError` is what the command interpreter
//! returns; user-level failures never reach the page as messages, they are
//! logged and the edit is dropped.

use thiserror::Error;

/// Errors raised by the music model and pitch conversion tables
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Pitch name does not match `<letter>[#|b]<octave>`
    #[error("Invalid pitch name: '{0}'")]
    InvalidPitchName(String),

    /// Pitch name is well formed but not covered by the conversion tables
    #[error("Unknown pitch name: '{0}'")]
    UnknownPitchName(String),

    /// Pitch number outside the table range
    #[error("Pitch number {0} is outside the supported range")]
    PitchOutOfRange(i32),

    /// Note value is not a power of two
    #[error("Invalid note value: {0} (must be a power of two)")]
    InvalidNoteValue(u32),

    #[error("Invalid tempo: {0} (must be positive)")]
    InvalidTempo(f64),

    #[error("Event index {index} out of bounds (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Chords are carried through but never re-spelled
    #[error("Event {0} is a chord and cannot be re-spelled")]
    ChordNotEditable(usize),

    /// Serialized note sequence could not be parsed
    #[error("Failed to parse notes: {0}")]
    NotesParse(String),
}

/// Errors raised while interpreting an editor command
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Accidental tokens are engine-internal, so this is a programming error
    #[error("Unknown accidental: '{0}'. Accepted values are '#', 'b' and 'n'")]
    InvalidAccidental(String),

    /// Divide only shortens; lengthening goes through merge
    #[error("Cannot divide a 1/{from} note into 1/{to} notes")]
    CannotLengthen { from: u32, to: u32 },

    /// Merge needs an event after the selected one to absorb
    #[error("Cannot merge event {index}: no following event")]
    MergePastEnd { index: usize },

    #[error("No event is selected")]
    NoSelection,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("MIDI export failed: {0}")]
    Midi(String),
}

pub type Result<T> = std::result::Result<T, EditorError>;
