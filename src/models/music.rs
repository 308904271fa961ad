//! The piece being edited
//!
//! `Music` owns the ordered event sequence and the tempo. All mutation is
//! in place and immediately visible. Events are addressed by position only;
//! an index held across an insert or remove before it is stale.

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

use super::note::{NoteEvent, NoteValue, Pitches};
use super::pitch::PitchName;
use crate::errors::ModelError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Music {
    events: Vec<NoteEvent>,
    tempo: f64,
}

impl Music {
    pub fn new(events: Vec<NoteEvent>, tempo: f64) -> Result<Self, ModelError> {
        if !(tempo.is_finite() && tempo > 0.0) {
            return Err(ModelError::InvalidTempo(tempo));
        }
        Ok(Self { events, tempo })
    }

    /// Build from the serialized `[[pitches, value], ...]` form
    pub fn from_notes_json(notes: &str, tempo: f64) -> Result<Self, ModelError> {
        let events: Vec<NoteEvent> =
            serde_json::from_str(notes).map_err(|e| ModelError::NotesParse(e.to_string()))?;
        Self::new(events, tempo)
    }

    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    pub fn event(&self, index: usize) -> Result<&NoteEvent, ModelError> {
        self.events.get(index).ok_or(ModelError::IndexOutOfRange {
            index,
            len: self.events.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn tempo(&self) -> f64 {
        self.tempo
    }

    pub fn is_rest(&self, index: usize) -> Result<bool, ModelError> {
        Ok(self.event(index)?.is_rest())
    }

    /// Replace the pitch of a single-note event (a rest becomes a note)
    pub fn respell(&mut self, index: usize, name: PitchName) -> Result<(), ModelError> {
        let event = self.event_mut(index)?;
        if event.is_chord() {
            return Err(ModelError::ChordNotEditable(index));
        }
        event.pitches = Pitches::Notes(vec![name]);
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, value: NoteValue) -> Result<(), ModelError> {
        self.event_mut(index)?.value = value;
        Ok(())
    }

    /// Insert before `index`; `index == len` appends
    pub fn insert(&mut self, index: usize, event: NoteEvent) -> Result<(), ModelError> {
        if index > self.events.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.events.len(),
            });
        }
        self.events.insert(index, event);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<NoteEvent, ModelError> {
        self.event(index)?;
        Ok(self.events.remove(index))
    }

    /// Total length in whole notes
    pub fn total_duration(&self) -> Ratio<u32> {
        self.events
            .iter()
            .map(|e| e.value.duration())
            .fold(Ratio::from_integer(0), |acc, d| acc + d)
    }

    /// Same events in the same order; tempo is not compared
    pub fn same_notes(&self, other: &Music) -> bool {
        self.events == other.events
    }

    fn event_mut(&mut self, index: usize) -> Result<&mut NoteEvent, ModelError> {
        let len = self.events.len();
        self.events
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })
    }
}
