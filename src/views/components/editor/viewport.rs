use crate::core::input::actions::EditorInput;
use crate::logic::layout::HandleLocator;
use crate::logic::quick_delete::QuickDeleteOutcome;
use crate::models::editor::HitObjectKind;
use crate::state::editor::EditorState;
use egui::{Color32, Key, Modifiers, PointerButton, Sense, Stroke, StrokeKind, Ui};
use std::collections::HashSet;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Compose playfield: draws objects and blueprints, feeds pointer input to the editor.
#[derive(Default)]
pub struct ComposeViewport {
    held: HashSet<KeyCode>,
}

impl ComposeViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut EditorState) -> Option<QuickDeleteOutcome> {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click());
        state.set_viewport(response.rect);

        let down = ui.input(|i| keys_down(i.modifiers, |key| i.key_down(key)));
        self.sync_keys(state, down);

        if let Some(pos) = response.hover_pos() {
            state.handle_input(EditorInput::PointerMoved(pos));
        }
        if response.clicked_by(PointerButton::Primary) {
            state.handle_input(EditorInput::Click(MouseButton::Left));
        }
        if response.clicked_by(PointerButton::Secondary) {
            state.handle_input(EditorInput::Click(MouseButton::Right));
        }

        let layout = state.layout;
        painter.rect_filled(layout.playfield_rect(), 0.0, Color32::from_rgb(10, 10, 15));
        painter.rect_stroke(
            layout.playfield_rect(),
            0.0,
            Stroke::new(2.0, Color32::from_gray(60)),
            StrokeKind::Inside,
        );

        let beatmap = &state.beatmap;
        for object in beatmap.hit_objects() {
            let selected = beatmap.selected.contains(object.id);
            let radius = layout.object_radius(beatmap, object);
            let centre = layout.object_centre(object);
            let body = if selected {
                Color32::from_rgb(255, 200, 80)
            } else {
                Color32::from_gray(180)
            };

            if let HitObjectKind::Slider { path, .. } = &object.kind {
                let points: Vec<_> = path
                    .control_points()
                    .iter()
                    .map(|p| layout.control_point_centre(object, p))
                    .collect();
                for pair in points.windows(2) {
                    painter.line_segment([pair[0], pair[1]], Stroke::new(radius * 0.5, body));
                }
                if selected {
                    for point in &points {
                        painter.circle_filled(
                            *point,
                            layout.control_point_radius(),
                            Color32::from_rgb(90, 160, 255),
                        );
                    }
                }
            }
            painter.circle_stroke(centre, radius, Stroke::new(3.0, body));
        }

        state.take_outcome()
    }

    /// Sends press/release events for every key whose state changed since the last frame.
    fn sync_keys(&mut self, state: &mut EditorState, down: HashSet<KeyCode>) {
        for key in self.held.difference(&down) {
            state.handle_input(EditorInput::KeyReleased(*key));
        }
        for key in down.difference(&self.held) {
            state.handle_input(EditorInput::KeyPressed(*key));
        }
        self.held = down;
    }
}

/// Keys held according to egui. egui does not tell left from right modifiers,
/// so a held modifier reports both sides.
fn keys_down(modifiers: Modifiers, key_down: impl Fn(Key) -> bool) -> HashSet<KeyCode> {
    let mut down = HashSet::new();
    let sides = [
        (modifiers.shift, [KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        (modifiers.ctrl, [KeyCode::ControlLeft, KeyCode::ControlRight]),
        (modifiers.alt, [KeyCode::AltLeft, KeyCode::AltRight]),
        (modifiers.mac_cmd, [KeyCode::SuperLeft, KeyCode::SuperRight]),
    ];
    for (held, keys) in sides {
        if held {
            down.extend(keys);
        }
    }
    for (key, code) in [
        (Key::Space, KeyCode::Space),
        (Key::D, KeyCode::KeyD),
        (Key::X, KeyCode::KeyX),
    ] {
        if key_down(key) {
            down.insert(code);
        }
    }
    down
}
