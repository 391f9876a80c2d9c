pub mod actions;
pub mod bindings;

use self::actions::EditorInput;
use egui::Pos2;
use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Snapshot of the pointer and held keys, owned by the input layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    pub position: Pos2,
    pub held_keys: HashSet<KeyCode>,
}

impl PointerState {
    /// Folds an input event into the snapshot.
    pub fn apply(&mut self, input: &EditorInput) {
        match input {
            EditorInput::PointerMoved(pos) => self.position = *pos,
            EditorInput::KeyPressed(key) => {
                self.held_keys.insert(*key);
            }
            EditorInput::KeyReleased(key) => {
                self.held_keys.remove(key);
            }
            EditorInput::Click(_) => {}
        }
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held_keys.contains(&key)
    }
}

impl EditorInput {
    /// Translates a window event into editor input. Key repeats are ignored.
    pub fn from_winit(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(EditorInput::PointerMoved(
                Pos2::new(position.x as f32, position.y as f32),
            )),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => Some(EditorInput::Click(*button)),
            WindowEvent::KeyboardInput { event, .. } => {
                Self::from_key(event.physical_key, event.state, event.repeat)
            }
            _ => None,
        }
    }

    fn from_key(physical_key: PhysicalKey, state: ElementState, repeat: bool) -> Option<Self> {
        let PhysicalKey::Code(keycode) = physical_key else {
            return None;
        };
        if repeat {
            return None;
        }
        Some(match state {
            ElementState::Pressed => EditorInput::KeyPressed(keycode),
            ElementState::Released => EditorInput::KeyReleased(keycode),
        })
    }
}
