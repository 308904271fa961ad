//! In-memory collaborators that record every call, for headless use and tests

use std::cell::RefCell;
use std::rc::Rc;

use super::ports::{AudioRequest, AudioSink, Ports, RenderSurface, SubmissionChannel};
use crate::models::Music;

#[derive(Debug, Clone, PartialEq)]
pub enum PortEvent {
    Drawn { events: usize },
    Selected(usize),
    Deselected(usize),
    Audio(AudioRequest),
    Submitted(String),
}

/// Shared call log; clones write to the same log
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<PortEvent>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ports(&self) -> Ports {
        Ports::new(self.clone(), self.clone(), self.clone())
    }

    pub fn events(&self) -> Vec<PortEvent> {
        self.log.borrow().clone()
    }

    /// Drain the log
    pub fn take(&self) -> Vec<PortEvent> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    pub fn audio(&self) -> Vec<AudioRequest> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PortEvent::Audio(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_submission(&self) -> Option<String> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            PortEvent::Submitted(notes) => Some(notes.clone()),
            _ => None,
        })
    }

    fn push(&self, event: PortEvent) {
        self.log.borrow_mut().push(event);
    }
}

impl RenderSurface for Recorder {
    fn draw(&mut self, music: &Music) {
        self.push(PortEvent::Drawn { events: music.len() });
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        self.push(if selected {
            PortEvent::Selected(index)
        } else {
            PortEvent::Deselected(index)
        });
    }
}

impl AudioSink for Recorder {
    fn send(&mut self, request: AudioRequest) {
        self.push(PortEvent::Audio(request));
    }
}

impl SubmissionChannel for Recorder {
    fn write(&mut self, notes: &str) {
        self.push(PortEvent::Submitted(notes.to_string()));
    }
}
