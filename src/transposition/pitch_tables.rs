//! Pitch number <-> pitch name conversion tables
//!
//! Covers pitch numbers `MIDI_NUM_SHIFT .. MIDI_NUM_SHIFT + TABLE_SPAN`
//! (C0 = 12 up to B7 = 107). Each number has a sharp spelling and a flat
//! spelling; both spellings resolve back to the number.
//!
//! Built once per editing session and shared read-only.

use std::collections::HashMap;
use std::ops::Range;

use crate::errors::ModelError;
use crate::models::{Accidental, PitchName, PitchNumber};

pub const MIDI_NUM_SHIFT: PitchNumber = 12;
pub const TABLE_SPAN: PitchNumber = 96;

const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

#[derive(Debug, Clone)]
pub struct PitchTables {
    sharp: Vec<PitchName>,
    flat: Vec<PitchName>,
    numbers: HashMap<PitchName, PitchNumber>,
}

impl PitchTables {
    pub fn new() -> Self {
        let mut sharp = Vec::with_capacity(TABLE_SPAN as usize);
        let mut flat = Vec::with_capacity(TABLE_SPAN as usize);
        let mut numbers = HashMap::new();

        for i in 0..TABLE_SPAN {
            let class = (i % 12) as usize;
            let octave = i / 12;
            let number = MIDI_NUM_SHIFT + i;

            let sharp_name = PitchName::from_class(NOTE_NAMES_SHARP[class], octave);
            let flat_name = PitchName::from_class(NOTE_NAMES_FLAT[class], octave);

            // Naturals write the same key twice
            numbers.insert(sharp_name.clone(), number);
            numbers.insert(flat_name.clone(), number);

            sharp.push(sharp_name);
            flat.push(flat_name);
        }

        Self { sharp, flat, numbers }
    }

    pub fn range() -> Range<PitchNumber> {
        MIDI_NUM_SHIFT..MIDI_NUM_SHIFT + TABLE_SPAN
    }

    pub fn contains(number: PitchNumber) -> bool {
        Self::range().contains(&number)
    }

    pub fn sharp_name(&self, number: PitchNumber) -> Result<&PitchName, ModelError> {
        Self::slot(number).map(|i| &self.sharp[i])
    }

    pub fn flat_name(&self, number: PitchNumber) -> Result<&PitchName, ModelError> {
        Self::slot(number).map(|i| &self.flat[i])
    }

    /// Spell a number: sharps for `Sharp`, flats for `Flat` and `Natural`
    pub fn name(&self, number: PitchNumber, accidental: Accidental) -> Result<&PitchName, ModelError> {
        match accidental {
            Accidental::Sharp => self.sharp_name(number),
            Accidental::Flat | Accidental::Natural => self.flat_name(number),
        }
    }

    pub fn number(&self, name: &PitchName) -> Result<PitchNumber, ModelError> {
        self.numbers
            .get(name)
            .copied()
            .ok_or_else(|| ModelError::UnknownPitchName(name.to_string()))
    }

    fn slot(number: PitchNumber) -> Result<usize, ModelError> {
        if Self::contains(number) {
            Ok((number - MIDI_NUM_SHIFT) as usize)
        } else {
            Err(ModelError::PitchOutOfRange(number))
        }
    }
}

impl Default for PitchTables {
    fn default() -> Self {
        Self::new()
    }
}
