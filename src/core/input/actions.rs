//! Canonical editor input events and the actions they resolve to.

use egui::Pos2;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Raw input delivered to the compose screen, already in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorInput {
    PointerMoved(Pos2),
    KeyPressed(KeyCode),
    KeyReleased(KeyCode),
    Click(MouseButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    /// Replace the selection with the object under the pointer.
    Select,
    /// Delete the handle or object under the pointer.
    QuickDelete,
    None,
}
