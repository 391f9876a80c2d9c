//! Editor state module.
//!
//! Contains the `EditorState` struct that owns one editing session.

use crate::core::input::actions::EditorInput;
use crate::core::input::bindings::KeyBindings;
use crate::logic::input::editor::EditorInputHandler;
use crate::logic::input::{InputContext, InputHandler};
use crate::logic::layout::PlayfieldLayout;
use crate::logic::quick_delete::{QuickDeleteOutcome, QuickDeleteResolver};
use crate::models::editor::EditorBeatmap;
use crate::models::settings::EditorSettings;
use egui::{Pos2, Rect, Vec2};

/// State for the compose screen.
pub struct EditorState {
    /// The beatmap being edited, selection included.
    pub beatmap: EditorBeatmap,
    /// Current placement of the playfield on screen.
    pub layout: PlayfieldLayout,
    pub resolver: QuickDeleteResolver,
    pub input: EditorInputHandler,
    /// Result of the last quick-delete gesture.
    pub last_outcome: Option<QuickDeleteOutcome>,
}

impl EditorState {
    /// Creates a session for `beatmap` configured from `settings`.
    pub fn new(beatmap: EditorBeatmap, settings: &EditorSettings) -> Self {
        let screen = Rect::from_min_size(
            Pos2::ZERO,
            Vec2::new(settings.viewport.width, settings.viewport.height),
        );
        Self {
            beatmap,
            layout: PlayfieldLayout::fit(screen, settings.quick_delete.control_point_radius),
            resolver: QuickDeleteResolver::new(settings.quick_delete.minimum_point_policy),
            input: EditorInputHandler::new(KeyBindings::from_settings(&settings.quick_delete)),
            last_outcome: None,
        }
    }

    /// Refits the playfield after the viewport moved or resized.
    pub fn set_viewport(&mut self, screen: Rect) {
        self.layout = PlayfieldLayout::fit(screen, self.layout.control_point_radius);
    }

    /// Feeds one input event through the editor. Returns true if consumed.
    pub fn handle_input(&mut self, input: EditorInput) -> bool {
        let mut ctx = InputContext {
            beatmap: &mut self.beatmap,
            locator: &self.layout,
            resolver: &self.resolver,
            last_outcome: &mut self.last_outcome,
        };
        self.input.handle(input, &mut ctx)
    }

    /// Takes the outcome of the last quick-delete, if one happened since.
    pub fn take_outcome(&mut self) -> Option<QuickDeleteOutcome> {
        self.last_outcome.take()
    }
}
