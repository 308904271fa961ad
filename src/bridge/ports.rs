//! Collaborator interfaces
//!
//! The engine talks to the staff renderer, the audio engine and the page's
//! submission input through these traits. Every call is fire-and-forget:
//! nothing is returned and nothing is awaited.

use serde::Serialize;

use crate::models::{Music, NoteValue, PitchName};

/// Outbound message to the audio engine
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AudioRequest {
    /// Audition one pitch
    PlaySingle {
        pitch: PitchName,
        unit: NoteValue,
        tempo: f64,
    },
    /// Play the whole attempt from the start
    PlayMusic { music: Music },
}

pub trait RenderSurface {
    /// Redraw every event of the piece
    fn draw(&mut self, music: &Music);

    /// Mark or unmark the element of event `index` as selected, and
    /// install or remove its keyboard binding
    fn set_selected(&mut self, index: usize, selected: bool);
}

pub trait AudioSink {
    fn send(&mut self, request: AudioRequest);
}

pub trait SubmissionChannel {
    /// Overwrite the submitted notes with `notes`
    fn write(&mut self, notes: &str);
}

pub struct Ports {
    pub render: Box<dyn RenderSurface>,
    pub audio: Box<dyn AudioSink>,
    pub submission: Box<dyn SubmissionChannel>,
}

impl Ports {
    pub fn new(
        render: impl RenderSurface + 'static,
        audio: impl AudioSink + 'static,
        submission: impl SubmissionChannel + 'static,
    ) -> Self {
        Self {
            render: Box::new(render),
            audio: Box::new(audio),
            submission: Box::new(submission),
        }
    }
}
