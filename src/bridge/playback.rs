//! Whole-piece playback schedule
//!
//! Turns the event sequence into timed notes for the audio engine. A beat
//! is a quarter note, so a 1/`v` event lasts `4 / v` beats. Rests only
//! advance time.

use serde::Serialize;

use crate::models::{Music, PitchName, Pitches};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledNote {
    pub pitches: Vec<PitchName>,
    pub start_secs: f64,
    pub duration_secs: f64,
}

/// Seconds per whole note at `tempo` beats per minute
pub fn whole_note_secs(tempo: f64) -> f64 {
    4.0 * 60.0 / tempo
}

pub fn schedule(music: &Music) -> Vec<ScheduledNote> {
    let whole = whole_note_secs(music.tempo());
    let mut start = 0.0;
    let mut notes = Vec::new();

    for event in music.events() {
        let duration = whole / f64::from(event.value.get());
        if let Pitches::Notes(pitches) = &event.pitches {
            notes.push(ScheduledNote {
                pitches: pitches.clone(),
                start_secs: start,
                duration_secs: duration,
            });
        }
        start += duration;
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_skips_rests() {
        let music = Music::from_notes_json(
            r#"[[["C4"], 4], [["r", "A4"], 4], [["E4", "G4"], 2]]"#,
            120.0,
        )
        .unwrap();
        let notes = schedule(&music);

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].start_secs, 0.0);
        assert_eq!(notes[0].duration_secs, 0.5);
        assert_eq!(notes[1].start_secs, 1.0);
        assert_eq!(notes[1].duration_secs, 1.0);
        assert_eq!(notes[1].pitches.len(), 2);
    }

    #[test]
    fn test_whole_note_length() {
        assert_eq!(whole_note_secs(60.0), 4.0);
        assert_eq!(whole_note_secs(120.0), 2.0);
    }
}
