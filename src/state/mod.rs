//! State management module.
//!
//! - `EditorState` - compose screen session (beatmap, selection, input)

pub mod editor;

pub use editor::EditorState;
