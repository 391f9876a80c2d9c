pub mod editor;

use crate::core::input::actions::EditorInput;
use crate::logic::layout::HandleLocator;
use crate::logic::quick_delete::{QuickDeleteOutcome, QuickDeleteResolver};
use crate::models::editor::EditorBeatmap;

// Everything a handler may touch, passed in explicitly for each event.
pub struct InputContext<'a> {
    pub beatmap: &'a mut EditorBeatmap,
    pub locator: &'a dyn HandleLocator,
    pub resolver: &'a QuickDeleteResolver,
    pub last_outcome: &'a mut Option<QuickDeleteOutcome>,
}

pub trait InputHandler {
    /// Returns true if the input was consumed.
    fn handle(&mut self, input: EditorInput, ctx: &mut InputContext) -> bool;
}
