//! Physical key -> editor command mapping
//!
//! The interpreter never sees key codes; the page hands over a `KeyInput`
//! (the DOM `KeyboardEvent.code` plus modifier state) and this module turns
//! it into an `EditorCommand`.

use serde::Deserialize;

use crate::models::{Letter, NoteValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    /// Up one semitone, or one octave, re-spelled with sharps
    TransposeUp { octave: bool },
    /// Down one semitone, or one octave, re-spelled with flats
    TransposeDown { octave: bool },
    MoveSelection(Direction),
    SnapToDegree(Letter),
    Divide(NoteValue),
    MergeOrDivideQuarter,
}

/// A key press on the selected note
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyInput {
    pub code: String,
    pub meta_key: bool,
    pub ctrl_key: bool,
}

impl KeyInput {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    /// Cmd or Ctrl turns a semitone step into an octave step
    pub fn octave_modifier(&self) -> bool {
        self.meta_key || self.ctrl_key
    }

    pub fn command(&self) -> Option<EditorCommand> {
        let octave = self.octave_modifier();
        match self.code.as_str() {
            "ArrowUp" => Some(EditorCommand::TransposeUp { octave }),
            "ArrowDown" => Some(EditorCommand::TransposeDown { octave }),
            "ArrowLeft" => Some(EditorCommand::MoveSelection(Direction::Previous)),
            "ArrowRight" => Some(EditorCommand::MoveSelection(Direction::Next)),
            "Digit4" => Some(EditorCommand::Divide(NoteValue::EIGHTH)),
            "Digit5" => Some(EditorCommand::MergeOrDivideQuarter),
            code => letter_key(code).map(EditorCommand::SnapToDegree),
        }
    }
}

fn letter_key(code: &str) -> Option<Letter> {
    let rest = code.strip_prefix("Key")?;
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Letter::from_char(c),
        _ => None,
    }
}
