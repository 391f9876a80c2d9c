use super::actions::EditorAction;
use crate::models::settings::QuickDeleteSettings;
use std::collections::HashSet;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

#[derive(Clone, Debug)]
pub struct KeyBindings {
    quick_delete_modifiers: HashSet<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            quick_delete_modifiers: [KeyCode::ShiftLeft, KeyCode::ShiftRight]
                .into_iter()
                .collect(),
        }
    }

    pub fn from_settings(settings: &QuickDeleteSettings) -> Self {
        let mut modifiers = HashSet::new();
        for key_str in &settings.modifier_keys {
            if let Some(keycode) = parse_keycode(key_str) {
                modifiers.insert(keycode);
            } else {
                log::warn!("INPUT: unknown keycode in settings: {}", key_str);
            }
        }
        if modifiers.is_empty() {
            log::warn!("INPUT: no usable quick-delete modifier, keeping Shift");
            return Self::new();
        }
        Self {
            quick_delete_modifiers: modifiers,
        }
    }

    pub fn is_quick_delete_modifier(&self, key: KeyCode) -> bool {
        self.quick_delete_modifiers.contains(&key)
    }

    /// Whether any quick-delete modifier is among the held keys.
    pub fn modifier_held(&self, held: &HashSet<KeyCode>) -> bool {
        held.iter().any(|k| self.is_quick_delete_modifier(*k))
    }

    /// Resolves a click given the keys currently held.
    pub fn resolve_click(&self, button: MouseButton, held: &HashSet<KeyCode>) -> EditorAction {
        match button {
            MouseButton::Right if self.modifier_held(held) => EditorAction::QuickDelete,
            MouseButton::Left => EditorAction::Select,
            _ => EditorAction::None,
        }
    }
}

pub(crate) fn parse_keycode(s: &str) -> Option<KeyCode> {
    match s {
        "ShiftLeft" => Some(KeyCode::ShiftLeft),
        "ShiftRight" => Some(KeyCode::ShiftRight),
        "ControlLeft" => Some(KeyCode::ControlLeft),
        "ControlRight" => Some(KeyCode::ControlRight),
        "AltLeft" => Some(KeyCode::AltLeft),
        "AltRight" => Some(KeyCode::AltRight),
        "SuperLeft" => Some(KeyCode::SuperLeft),
        "SuperRight" => Some(KeyCode::SuperRight),
        "Space" => Some(KeyCode::Space),
        "KeyD" => Some(KeyCode::KeyD),
        "KeyX" => Some(KeyCode::KeyX),
        _ => None,
    }
}
