//! Note selection and mutation engine
//!
//! - `keys`: physical key -> `EditorCommand`
//! - `selection`: `Idle` / `Active(index)` state
//! - `interpreter`: `ScoreEditor`, applies commands to the piece
//! - `config`: `EditorConfig`

pub mod config;
pub mod interpreter;
pub mod keys;
pub mod selection;

pub use config::EditorConfig;
pub use interpreter::ScoreEditor;
pub use keys::{Direction, EditorCommand, KeyInput};
pub use selection::{Selection, SelectionChange};
