pub mod editor;
pub mod multiplayer;
