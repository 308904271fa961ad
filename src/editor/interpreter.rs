//! Command interpreter
//!
//! `ScoreEditor` owns the piece and the selection and runs one input to
//! completion before the next: pointer activation toggles the selection,
//! key presses on the selected event transpose, snap, divide or merge it.
//! After every edit the staff is redrawn, the submission input rewritten
//! and the edited note auditioned.

use std::rc::Rc;

use super::config::EditorConfig;
use super::keys::{Direction, EditorCommand, KeyInput};
use super::selection::{Selection, SelectionChange};
use crate::bridge::{serialize_notes, AudioRequest, Ports};
use crate::errors::{EditorError, Result};
use crate::models::{Accidental, Letter, Music, NoteValue, PitchName};
use crate::rhythm;
use crate::transposition::{snap_to_degree, transpose_step, PitchTables};

pub struct ScoreEditor {
    music: Music,
    selection: Selection,
    tables: Rc<PitchTables>,
    ports: Ports,
    config: EditorConfig,
    rest_placeholder: PitchName,
}

impl ScoreEditor {
    pub fn new(
        music: Music,
        tables: Rc<PitchTables>,
        ports: Ports,
        config: EditorConfig,
    ) -> Result<Self> {
        let rest_placeholder = PitchName::parse(&config.rest_placeholder)?;
        Ok(Self {
            music,
            selection: Selection::Idle,
            tables,
            ports,
            config,
            rest_placeholder,
        })
    }

    /// Initial draw and submission sync
    pub fn start(&mut self) -> Result<()> {
        self.ports.render.draw(&self.music);
        self.submit()
    }

    pub fn music(&self) -> &Music {
        &self.music
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn tables(&self) -> &PitchTables {
        &self.tables
    }

    /// Pointer activation on the element of event `index`
    pub fn click(&mut self, index: usize) -> Result<()> {
        self.music.event(index)?;
        self.toggle(index, true);
        Ok(())
    }

    /// Key press while an event is selected; ignored otherwise
    pub fn key_down(&mut self, key: &KeyInput) -> Result<()> {
        if !self.selection.is_active() {
            log::debug!("key_down: {} ignored, nothing selected", key.code);
            return Ok(());
        }
        match key.command() {
            Some(command) => self.apply(command),
            None => {
                log::debug!("key_down: {} is not bound", key.code);
                Ok(())
            }
        }
    }

    pub fn apply(&mut self, command: EditorCommand) -> Result<()> {
        let index = self.selection.index().ok_or(EditorError::NoSelection)?;
        log::debug!("apply: {:?} on event {}", command, index);

        match command {
            EditorCommand::TransposeUp { octave } => {
                self.transpose(index, transpose_step(true, octave), Accidental::Sharp)
            }
            EditorCommand::TransposeDown { octave } => {
                self.transpose(index, transpose_step(false, octave), Accidental::Flat)
            }
            EditorCommand::MoveSelection(direction) => {
                self.move_selection(index, direction, true);
                Ok(())
            }
            EditorCommand::SnapToDegree(letter) => self.snap(index, letter),
            EditorCommand::Divide(target) => {
                rhythm::divide(&mut self.music, index, target, &self.rest_placeholder)?;
                self.refresh(index)
            }
            EditorCommand::MergeOrDivideQuarter => {
                let result = rhythm::merge_or_divide(
                    &mut self.music,
                    index,
                    NoteValue::QUARTER,
                    &self.rest_placeholder,
                );
                if let Err(err @ EditorError::MergePastEnd { .. }) = &result {
                    log::warn!("apply: {}", err);
                }
                result?;
                self.refresh(index)
            }
        }
    }

    /// "Play the whole attempt"
    pub fn play_attempt(&mut self) {
        self.ports.audio.send(AudioRequest::PlayMusic {
            music: self.music.clone(),
        });
    }

    /// Re-spell a single note `step` semitones away; rests and chords stay
    fn transpose(&mut self, index: usize, step: i32, accidental: Accidental) -> Result<()> {
        let event = self.music.event(index)?;
        if event.is_rest() || event.is_chord() {
            return Ok(());
        }
        let Some(name) = event.sounding_name() else {
            return Ok(());
        };

        let target = self.tables.number(name)? + step;
        let new_name = self.tables.name(target, accidental)?.clone();
        self.music.respell(index, new_name)?;
        self.refresh(index)
    }

    /// Move to the nearest `letter`, spelled with flats, then select the
    /// next event without auditioning it. Rests take the new pitch too.
    fn snap(&mut self, index: usize, letter: Letter) -> Result<()> {
        let event = self.music.event(index)?;
        if event.is_chord() {
            self.move_selection(index, Direction::Next, false);
            return Ok(());
        }

        let name = event
            .reference_name()
            .unwrap_or(&self.rest_placeholder);
        let number = self.tables.number(name)?;
        let target = snap_to_degree(number, letter);
        debug_assert_eq!(target.rem_euclid(12), letter.reference_number() % 12);

        let new_name = self.tables.name(target, Accidental::Natural)?.clone();
        self.music.respell(index, new_name)?;
        self.refresh(index)?;
        self.move_selection(index, Direction::Next, false);
        Ok(())
    }

    fn move_selection(&mut self, index: usize, direction: Direction, audition: bool) {
        let target = match direction {
            Direction::Previous => Selection::previous_index(index),
            Direction::Next => Selection::next_index(index, self.music.len()),
        };
        // Leave the current element first so a clamped move reselects it
        if self.selection.is_active() {
            self.toggle(index, false);
        }
        self.toggle(target, audition);
    }

    fn toggle(&mut self, index: usize, audition: bool) {
        match self.selection.toggle(index) {
            SelectionChange::Selected { previous, index } => {
                if let Some(previous) = previous {
                    self.ports.render.set_selected(previous, false);
                }
                self.ports.render.set_selected(index, true);
                if audition {
                    self.audition(index);
                }
            }
            SelectionChange::Cleared { previous } => {
                self.ports.render.set_selected(previous, false);
            }
        }
    }

    /// Sync after an edit: redraw, resubmit, reselect `index` and audition it
    fn refresh(&mut self, index: usize) -> Result<()> {
        self.ports.render.draw(&self.music);
        self.submit()?;
        self.selection = Selection::Active(index);
        self.ports.render.set_selected(index, true);
        self.audition(index);
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        let notes = serialize_notes(&self.music)?;
        self.ports.submission.write(&notes);
        Ok(())
    }

    fn audition(&mut self, index: usize) {
        let Ok(event) = self.music.event(index) else {
            return;
        };
        if let Some(pitch) = event.sounding_name() {
            self.ports.audio.send(AudioRequest::PlaySingle {
                pitch: pitch.clone(),
                unit: self.config.audition_unit,
                tempo: self.music.tempo(),
            });
        }
    }
}
