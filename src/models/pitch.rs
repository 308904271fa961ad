//! Pitch representation
//!
//! A `PitchName` is a spelled pitch such as `"C#4"` or `"Bb3"`. A
//! `PitchNumber` is the sounding pitch on the chromatic scale (MIDI
//! numbering, C4 = 60). Several names can map to the same number.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{EditorError, ModelError};

/// Sounding pitch on the chromatic scale
pub type PitchNumber = i32;

/// Natural note letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    pub fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    /// Pitch number of the natural letter in octave 0 (C0 = 12)
    pub fn reference_number(self) -> PitchNumber {
        match self {
            Letter::C => 12,
            Letter::D => 14,
            Letter::E => 16,
            Letter::F => 17,
            Letter::G => 19,
            Letter::A => 21,
            Letter::B => 23,
        }
    }
}

/// Which spelling to use when turning a pitch number back into a name
///
/// The editor only ever builds these from the enum itself, so
/// `InvalidAccidental` cannot come out of an edit; `from_token` is the one
/// place a bad token is turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accidental {
    Sharp,
    Flat,
    Natural,
}

impl Accidental {
    /// Parse an accidental token (`#`, `b` or `n`)
    pub fn from_token(token: &str) -> Result<Accidental, EditorError> {
        match token {
            "#" => Ok(Accidental::Sharp),
            "b" => Ok(Accidental::Flat),
            "n" => Ok(Accidental::Natural),
            other => Err(EditorError::InvalidAccidental(other.to_string())),
        }
    }
}

/// Spelled pitch: letter, optional `#`/`b`, octave digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PitchName(String);

impl PitchName {
    pub fn parse(name: &str) -> Result<PitchName, ModelError> {
        let invalid = || ModelError::InvalidPitchName(name.to_string());

        let mut chars = name.chars();
        chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(invalid)?;

        let rest = chars.as_str();
        let octave = rest
            .strip_prefix('#')
            .or_else(|| rest.strip_prefix('b'))
            .unwrap_or(rest);

        if octave.is_empty() || !octave.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        Ok(PitchName(name.to_string()))
    }

    /// Pitch class token from a conversion table plus octave
    pub(crate) fn from_class(class: &str, octave: PitchNumber) -> PitchName {
        PitchName(format!("{}{}", class, octave))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letter(&self) -> Letter {
        // Validated on construction
        self.0
            .chars()
            .next()
            .and_then(Letter::from_char)
            .unwrap_or(Letter::C)
    }
}

impl fmt::Display for PitchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PitchName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PitchName::parse(&value)
    }
}

impl From<PitchName> for String {
    fn from(name: PitchName) -> String {
        name.0
    }
}
