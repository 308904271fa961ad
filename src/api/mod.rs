//! Score Editor WASM API
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serde-wasm-bindgen helpers, error conversion
//! - `ports`: JS callback and DOM implementations of the bridge traits
//! - `editor`: `ScoreEditorHandle`, the per-session editor exposed to the page

pub mod helpers;
pub mod ports;
pub mod editor;

pub use editor::ScoreEditorHandle;
