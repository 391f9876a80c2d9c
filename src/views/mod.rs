//! egui surfaces over the editor and multiplayer models.

pub mod components;
