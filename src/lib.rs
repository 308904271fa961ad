//! Score Editor WASM Module
//!
//! Selection and mutation engine for a monophonic staff editor: pick a note,
//! transpose it, snap it to a scale degree, divide or merge its rhythm, and
//! keep the submission input and audio engine in sync.

pub mod api;
pub mod bridge;
pub mod editor;
pub mod errors;
pub mod models;
pub mod rhythm;
pub mod transposition;

// Re-export commonly used types
pub use editor::{EditorCommand, EditorConfig, KeyInput, ScoreEditor, Selection};
pub use errors::{EditorError, ModelError};
pub use models::*;
pub use transposition::PitchTables;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
        }
    }

    log::info!("Score editor WASM module initialized");
}
