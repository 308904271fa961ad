//! Standard MIDI File export of the piece
//!
//! Single track: tempo meta event, note on/off per pitch, rests as delta
//! time. Chords start and stop together.

use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind};

use crate::errors::{EditorError, Result};
use crate::models::{Music, NoteValue, Pitches};
use crate::transposition::PitchTables;

/// Ticks per quarter note
pub const DEFAULT_TPQ: u16 = 480;

/// Default MIDI velocity (1-127)
pub const DEFAULT_VELOCITY: u8 = 64;

/// Largest value the 24-bit tempo meta event holds
const MAX_MICROSECONDS_PER_QUARTER: f64 = 0xFF_FFFF as f64;

/// Microseconds per quarter note for `bpm`, refused when it overflows 24 bits
pub fn tempo_microseconds(bpm: f64) -> Result<u32> {
    let micros = (60_000_000.0 / bpm).round();
    if micros > MAX_MICROSECONDS_PER_QUARTER {
        return Err(EditorError::Midi(format!(
            "Tempo {} bpm is too slow for a MIDI tempo event",
            bpm
        )));
    }
    Ok(micros as u32)
}

pub fn value_to_ticks(value: NoteValue, tpq: u16) -> u32 {
    u32::from(tpq) * 4 / value.get()
}

/// Write `music` as a Format 0 SMF
pub fn export_smf(music: &Music, tables: &PitchTables) -> Result<Vec<u8>> {
    let track = build_track(music, tables)?;

    let smf = Smf {
        header: Header {
            format: Format::SingleTrack,
            timing: Timing::Metrical(DEFAULT_TPQ.into()),
        },
        tracks: vec![track],
    };

    let mut out = Vec::new();
    smf.write(&mut out)
        .map_err(|e| EditorError::Midi(format!("Failed to write MIDI: {}", e)))?;
    Ok(out)
}

fn build_track<'a>(music: &Music, tables: &PitchTables) -> Result<Track<'a>> {
    let microseconds_per_quarter = tempo_microseconds(music.tempo())?;
    let mut events = vec![TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(microseconds_per_quarter.into())),
    }];

    let mut pending_delta = 0u32;
    for event in music.events() {
        let ticks = value_to_ticks(event.value, DEFAULT_TPQ);
        let names = match &event.pitches {
            Pitches::Notes(names) => names,
            Pitches::Rest { .. } => {
                pending_delta += ticks;
                continue;
            }
        };

        let keys = names
            .iter()
            .map(|name| tables.number(name).map(|n| n as u8))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        for (i, key) in keys.iter().enumerate() {
            events.push(TrackEvent {
                delta: if i == 0 { pending_delta.into() } else { 0.into() },
                kind: TrackEventKind::Midi {
                    channel: 0.into(),
                    message: MidiMessage::NoteOn {
                        key: (*key).into(),
                        vel: DEFAULT_VELOCITY.into(),
                    },
                },
            });
        }
        for (i, key) in keys.iter().enumerate() {
            events.push(TrackEvent {
                delta: if i == 0 { ticks.into() } else { 0.into() },
                kind: TrackEventKind::Midi {
                    channel: 0.into(),
                    message: MidiMessage::NoteOff {
                        key: (*key).into(),
                        vel: 0.into(),
                    },
                },
            });
        }
        pending_delta = 0;
    }

    events.push(TrackEvent {
        delta: pending_delta.into(),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    Ok(events)
}
