use super::{InputContext, InputHandler};
use crate::core::input::PointerState;
use crate::core::input::actions::{EditorAction, EditorInput};
use crate::core::input::bindings::KeyBindings;
use crate::logic::blueprint::BlueprintSnapshot;

/// Routes compose-screen input to selection and quick-delete.
pub struct EditorInputHandler {
    pub bindings: KeyBindings,
    pub pointer: PointerState,
}

impl EditorInputHandler {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pointer: PointerState::default(),
        }
    }

    fn select_at(&self, ctx: &mut InputContext) {
        let snapshot = BlueprintSnapshot::capture_all(ctx.beatmap, ctx.locator);
        let hit = snapshot.hit_test(self.pointer.position);
        ctx.beatmap.selected.clear();
        if let Some(hit) = hit {
            ctx.beatmap.select(hit.object);
        }
    }
}

impl InputHandler for EditorInputHandler {
    fn handle(&mut self, input: EditorInput, ctx: &mut InputContext) -> bool {
        self.pointer.apply(&input);

        let EditorInput::Click(button) = input else {
            return false;
        };

        match self.bindings.resolve_click(button, &self.pointer.held_keys) {
            EditorAction::QuickDelete => {
                // Pointer and modifiers are sampled once, here, for the whole gesture.
                let modifier_held = self.bindings.modifier_held(&self.pointer.held_keys);
                let outcome = ctx.resolver.quick_delete(
                    ctx.beatmap,
                    ctx.locator,
                    self.pointer.position,
                    modifier_held,
                );
                *ctx.last_outcome = Some(outcome);
            }
            EditorAction::Select => self.select_at(ctx),
            EditorAction::None => return false,
        }
        true
    }
}
