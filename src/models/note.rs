//! Note events
//!
//! A `NoteEvent` is one entry of the piece: pitch content plus a rhythmic
//! value. On the wire it is the pair `[pitches, value]`, where pitches is a
//! list of pitch names or the rest form `["r", <placeholder>]`.

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

use super::pitch::PitchName;
use crate::errors::ModelError;

/// Marker in the first slot of a serialized rest
pub const REST_MARKER: &str = "r";

/// Placeholder pitch used for rests that carry none
pub const DEFAULT_REST_PLACEHOLDER: &str = "A4";

/// Rhythmic value as a power-of-two denominator (4 = quarter, 8 = eighth)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NoteValue(u32);

impl NoteValue {
    pub const WHOLE: NoteValue = NoteValue(1);
    pub const HALF: NoteValue = NoteValue(2);
    pub const QUARTER: NoteValue = NoteValue(4);
    pub const EIGHTH: NoteValue = NoteValue(8);
    pub const SIXTEENTH: NoteValue = NoteValue(16);

    pub fn new(value: u32) -> Result<NoteValue, ModelError> {
        if value.is_power_of_two() {
            Ok(NoteValue(value))
        } else {
            Err(ModelError::InvalidNoteValue(value))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn log2(self) -> u32 {
        self.0.trailing_zeros()
    }

    /// Fraction of a whole note
    pub fn duration(self) -> Ratio<u32> {
        Ratio::new(1, self.0)
    }
}

impl TryFrom<u32> for NoteValue {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NoteValue::new(value)
    }
}

impl From<NoteValue> for u32 {
    fn from(value: NoteValue) -> u32 {
        value.0
    }
}

/// Pitch content of an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPitches", into = "RawPitches")]
pub enum Pitches {
    /// One pitch for a single note, several for a chord
    Notes(Vec<PitchName>),
    /// Silence; the placeholder is only read when a rest is given a pitch
    Rest { placeholder: PitchName },
}

/// Wire form of the pitch slot: a bare name or a list of tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawPitches {
    Single(String),
    List(Vec<String>),
}

impl TryFrom<RawPitches> for Pitches {
    type Error = ModelError;

    fn try_from(raw: RawPitches) -> Result<Self, Self::Error> {
        let tokens = match raw {
            RawPitches::Single(name) => vec![name],
            RawPitches::List(tokens) => tokens,
        };

        match tokens.split_first() {
            Some((first, rest)) if first == REST_MARKER => {
                let placeholder = rest
                    .first()
                    .map(String::as_str)
                    .unwrap_or(DEFAULT_REST_PLACEHOLDER);
                Ok(Pitches::Rest {
                    placeholder: PitchName::parse(placeholder)?,
                })
            }
            Some(_) => tokens
                .iter()
                .map(|t| PitchName::parse(t))
                .collect::<Result<Vec<_>, _>>()
                .map(Pitches::Notes),
            None => Err(ModelError::NotesParse("empty pitch list".to_string())),
        }
    }
}

impl From<Pitches> for RawPitches {
    fn from(pitches: Pitches) -> RawPitches {
        match pitches {
            Pitches::Notes(names) => RawPitches::List(names.into_iter().map(String::from).collect()),
            Pitches::Rest { placeholder } => {
                RawPitches::List(vec![REST_MARKER.to_string(), placeholder.into()])
            }
        }
    }
}

/// One note, chord or rest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Pitches, NoteValue)", into = "(Pitches, NoteValue)")]
pub struct NoteEvent {
    pub pitches: Pitches,
    pub value: NoteValue,
}

impl NoteEvent {
    pub fn note(name: PitchName, value: NoteValue) -> Self {
        Self {
            pitches: Pitches::Notes(vec![name]),
            value,
        }
    }

    pub fn rest(placeholder: PitchName, value: NoteValue) -> Self {
        Self {
            pitches: Pitches::Rest { placeholder },
            value,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self.pitches, Pitches::Rest { .. })
    }

    pub fn is_chord(&self) -> bool {
        matches!(&self.pitches, Pitches::Notes(names) if names.len() > 1)
    }

    /// Name of the sounding pitch, `None` for rests
    pub fn sounding_name(&self) -> Option<&PitchName> {
        match &self.pitches {
            Pitches::Notes(names) => names.first(),
            Pitches::Rest { .. } => None,
        }
    }

    /// Sounding pitch, or the stored placeholder for a rest
    pub fn reference_name(&self) -> Option<&PitchName> {
        match &self.pitches {
            Pitches::Notes(names) => names.first(),
            Pitches::Rest { placeholder } => Some(placeholder),
        }
    }
}

impl From<(Pitches, NoteValue)> for NoteEvent {
    fn from((pitches, value): (Pitches, NoteValue)) -> Self {
        Self { pitches, value }
    }
}

impl From<NoteEvent> for (Pitches, NoteValue) {
    fn from(event: NoteEvent) -> Self {
        (event.pitches, event.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PitchName {
        PitchName::parse(s).unwrap()
    }

    #[test]
    fn test_note_value_must_be_power_of_two() {
        assert!(NoteValue::new(1).is_ok());
        assert!(NoteValue::new(16).is_ok());
        assert_eq!(NoteValue::new(0), Err(ModelError::InvalidNoteValue(0)));
        assert_eq!(NoteValue::new(6), Err(ModelError::InvalidNoteValue(6)));
    }

    #[test]
    fn test_note_value_log2_and_duration() {
        assert_eq!(NoteValue::QUARTER.log2(), 2);
        assert_eq!(NoteValue::SIXTEENTH.log2(), 4);
        assert_eq!(NoteValue::EIGHTH.duration(), Ratio::new(1, 8));
    }

    #[test]
    fn test_serialize_note_and_rest() {
        let note = NoteEvent::note(name("C4"), NoteValue::QUARTER);
        let rest = NoteEvent::rest(name("A4"), NoteValue::EIGHTH);

        assert_eq!(serde_json::to_string(&note).unwrap(), r#"[["C4"],4]"#);
        assert_eq!(serde_json::to_string(&rest).unwrap(), r#"[["r","A4"],8]"#);
    }

    #[test]
    fn test_deserialize_accepts_bare_name() {
        let event: NoteEvent = serde_json::from_str(r#"["D4", 8]"#).unwrap();
        assert_eq!(event, NoteEvent::note(name("D4"), NoteValue::EIGHTH));
    }

    #[test]
    fn test_deserialize_rest_without_placeholder() {
        let event: NoteEvent = serde_json::from_str(r#"[["r"], 4]"#).unwrap();
        assert!(event.is_rest());
        assert_eq!(event.reference_name(), Some(&name(DEFAULT_REST_PLACEHOLDER)));
        assert_eq!(event.sounding_name(), None);
    }

    #[test]
    fn test_deserialize_chord() {
        let event: NoteEvent = serde_json::from_str(r#"[["C4", "E4", "G4"], 2]"#).unwrap();
        assert!(event.is_chord());
        assert_eq!(event.sounding_name(), Some(&name("C4")));
    }

    #[test]
    fn test_deserialize_rejects_bad_value() {
        assert!(serde_json::from_str::<NoteEvent>(r#"[["C4"], 3]"#).is_err());
        assert!(serde_json::from_str::<NoteEvent>(r#"[["X4"], 4]"#).is_err());
    }
}
