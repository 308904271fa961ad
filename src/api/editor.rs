//! JavaScript-facing score editor
//!
//! One `ScoreEditorHandle` per editing session. The page forwards clicks
//! and keydowns on note elements; the handle drives the staff, the audio
//! engine and the submission input through the callbacks it was built with.

use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, editor_error, serialize};
use crate::api::ports::{DomSubmissionChannel, JsAudioSink, JsRenderSurface};
use crate::bridge::{export_smf, schedule, serialize_notes, Ports};
use crate::editor::{EditorConfig, KeyInput, ScoreEditor};
use crate::errors::{EditorError, ModelError};
use crate::models::Music;
use crate::transposition::PitchTables;
use crate::{wasm_info, wasm_warn};

#[wasm_bindgen]
pub struct ScoreEditorHandle {
    editor: ScoreEditor,
}

#[wasm_bindgen]
impl ScoreEditorHandle {
    /// # Parameters
    /// - `notes`: serialized events, `[[pitches, value], ...]`
    /// - `bpm`: tempo; the configured default when absent
    /// - `draw`, `select`, `play`: renderer and audio callbacks
    /// - `config`: optional `EditorConfig` object
    #[wasm_bindgen(constructor)]
    pub fn new(
        notes: &str,
        bpm: Option<f64>,
        draw: Function,
        select: Function,
        play: Function,
        config: JsValue,
    ) -> Result<ScoreEditorHandle, JsValue> {
        let config: EditorConfig = deserialize_or_default(config, "Invalid editor config")?;
        let tempo = bpm.unwrap_or(config.default_tempo);

        let music = Music::from_notes_json(notes, tempo)
            .map_err(|e| editor_error(&EditorError::from(e)))?;
        let ports = Ports::new(
            JsRenderSurface::new(draw, select),
            JsAudioSink::new(play),
            DomSubmissionChannel::new(&config.submission_target_id),
        );

        let mut editor = ScoreEditor::new(music, Rc::new(PitchTables::new()), ports, config)
            .map_err(|e| editor_error(&e))?;
        editor.start().map_err(|e| editor_error(&e))?;

        wasm_info!("ScoreEditor started with {} events", editor.music().len());
        Ok(ScoreEditorHandle { editor })
    }

    /// Pointer activation on the note element of event `index`
    #[wasm_bindgen(js_name = clickNote)]
    pub fn click_note(&mut self, index: usize) -> Result<(), JsValue> {
        self.editor.click(index).map_err(|e| editor_error(&e))
    }

    /// Key press on the selected note element (`KeyboardEvent.code`)
    ///
    /// Rejected edits are logged, never reported to the page.
    #[wasm_bindgen(js_name = keyDownOnNote)]
    pub fn key_down_on_note(&mut self, code: &str, meta_key: bool, ctrl_key: bool) {
        let key = KeyInput {
            code: code.to_string(),
            meta_key,
            ctrl_key,
        };
        if let Err(e) = self.editor.key_down(&key) {
            wasm_warn!("keyDownOnNote {} rejected: {}", code, e);
        }
    }

    #[wasm_bindgen(js_name = playAttempt)]
    pub fn play_attempt(&mut self) {
        self.editor.play_attempt();
    }

    #[wasm_bindgen(js_name = selectedIndex)]
    pub fn selected_index(&self) -> Option<usize> {
        self.editor.selection().index()
    }

    #[wasm_bindgen(js_name = notesJson)]
    pub fn notes_json(&self) -> Result<String, JsValue> {
        serialize_notes(self.editor.music()).map_err(|e| editor_error(&e))
    }

    /// Timed notes for whole-piece playback
    #[wasm_bindgen(js_name = playbackSchedule)]
    pub fn playback_schedule(&self) -> Result<JsValue, JsValue> {
        serialize(&schedule(self.editor.music()), "Failed to serialize playback schedule")
    }

    /// Standard MIDI File bytes of the current piece
    #[wasm_bindgen(js_name = exportMidi)]
    pub fn export_midi(&self) -> Result<Vec<u8>, JsValue> {
        export_smf(self.editor.music(), self.editor.tables()).map_err(|e| editor_error(&e))
    }

    /// Whether the current piece has exactly the events of `question_notes`
    #[wasm_bindgen(js_name = matchesQuestion)]
    pub fn matches_question(&self, question_notes: &str) -> Result<bool, JsValue> {
        let question = Music::from_notes_json(question_notes, self.editor.music().tempo())
            .map_err(|e: ModelError| editor_error(&e.into()))?;
        Ok(self.editor.music().same_notes(&question))
    }
}
