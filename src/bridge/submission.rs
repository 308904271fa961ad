//! Serialized form written to the page's submission input
//!
//! `[[pitches-or-rest, value], ...]`, e.g. `[["D4"],8],[["r","A4"],8]`.

use crate::errors::{EditorError, Result};
use crate::models::Music;

pub fn serialize_notes(music: &Music) -> Result<String> {
    serde_json::to_string(music.events()).map_err(|e| EditorError::Serialization(e.to_string()))
}
