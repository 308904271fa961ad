//! Browser-side collaborators
//!
//! The staff renderer and the audio engine live in JavaScript and are
//! handed in as callbacks; the submission channel is a form input found by
//! id. Failures on the JS side are logged and otherwise ignored.

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::helpers::{log_warn, serialize};
use crate::bridge::{AudioRequest, AudioSink, RenderSurface, SubmissionChannel};
use crate::models::Music;

/// `draw(events)` redraws the staff, `select(index, selected)` toggles the
/// highlight and keydown binding of one note element
pub struct JsRenderSurface {
    draw: Function,
    select: Function,
}

impl JsRenderSurface {
    pub fn new(draw: Function, select: Function) -> Self {
        Self { draw, select }
    }
}

impl RenderSurface for JsRenderSurface {
    fn draw(&mut self, music: &Music) {
        let Ok(events) = serialize(&music.events(), "Failed to serialize events for drawing") else {
            return;
        };
        if let Err(e) = self.draw.call1(&JsValue::NULL, &events) {
            log_warn(&format!("draw callback failed: {:?}", e));
        }
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        let index = JsValue::from(index as u32);
        if let Err(e) = self.select.call2(&JsValue::NULL, &index, &JsValue::from_bool(selected)) {
            log_warn(&format!("select callback failed: {:?}", e));
        }
    }
}

/// `play(request)` receives a serialized `AudioRequest`
pub struct JsAudioSink {
    play: Function,
}

impl JsAudioSink {
    pub fn new(play: Function) -> Self {
        Self { play }
    }
}

impl AudioSink for JsAudioSink {
    fn send(&mut self, request: AudioRequest) {
        let Ok(request) = serialize(&request, "Failed to serialize audio request") else {
            return;
        };
        if let Err(e) = self.play.call1(&JsValue::NULL, &request) {
            log_warn(&format!("audio callback failed: {:?}", e));
        }
    }
}

/// Writes the notes into `<input id=target_id>`
pub struct DomSubmissionChannel {
    target_id: String,
}

impl DomSubmissionChannel {
    pub fn new(target_id: &str) -> Self {
        Self {
            target_id: target_id.to_string(),
        }
    }
}

impl SubmissionChannel for DomSubmissionChannel {
    fn write(&mut self, notes: &str) {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.target_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());

        match input {
            Some(input) => input.set_value(notes),
            None => log_warn(&format!("submission input #{} not found", self.target_id)),
        }
    }
}
