pub mod editor;
pub mod room;
pub mod settings;
