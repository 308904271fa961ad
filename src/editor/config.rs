//! Editor configuration

use serde::Deserialize;

use crate::models::{NoteValue, DEFAULT_REST_PLACEHOLDER};

/// Default tempo in beats per minute
pub const DEFAULT_TEMPO_BPM: f64 = 120.0;

/// Id of the hidden form input that receives the serialized notes
pub const DEFAULT_SUBMISSION_TARGET: &str = "check-form-notes-input";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Subdivision unit passed along when auditioning a single note
    pub audition_unit: NoteValue,
    /// Pitch stored in rests created by divide
    pub rest_placeholder: String,
    pub submission_target_id: String,
    /// Used when the page gives no tempo
    pub default_tempo: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            audition_unit: NoteValue::EIGHTH,
            rest_placeholder: DEFAULT_REST_PLACEHOLDER.to_string(),
            submission_target_id: DEFAULT_SUBMISSION_TARGET.to_string(),
            default_tempo: DEFAULT_TEMPO_BPM,
        }
    }
}
