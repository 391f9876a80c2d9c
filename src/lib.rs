//! Beatmap editor core: the editable document, selection blueprints and the
//! quick-delete gesture, plus the multiplayer room header panel.

pub mod core;
pub mod harness;
pub mod logic;
pub mod models;
pub mod state;
pub mod system;
pub mod views;
