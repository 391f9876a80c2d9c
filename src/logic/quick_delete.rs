//! Quick-delete: a modifier-qualified delete gesture that removes the handle
//! under the pointer instead of the whole selection.
//!
//! Resolution runs once per gesture against a [`BlueprintSnapshot`] and yields
//! a [`QuickDeleteTarget`] made of stable ids. Applying the target mutates the
//! beatmap through those ids only.

use super::blueprint::BlueprintSnapshot;
use super::layout::HandleLocator;
use crate::models::editor::{ControlPointId, EditorBeatmap, HitObjectId, PathEditError};
use crate::models::settings::MinimumPointPolicy;
use egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickDeleteTarget {
    /// The whole object.
    Object(HitObjectId),
    /// One control point of a slider.
    ControlPoint {
        object: HitObjectId,
        point: ControlPointId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickDeleteOutcome {
    /// The modifier was not held; nothing was considered.
    Ignored,
    /// Empty selection, or nothing selected under the pointer.
    NoTarget,
    RemovedObject(HitObjectId),
    RemovedControlPoint {
        object: HitObjectId,
        point: ControlPointId,
    },
    /// The point could not go, so the whole slider went.
    CascadedToObject {
        object: HitObjectId,
        point: ControlPointId,
    },
    /// The point could not go and the policy refused to delete the slider.
    Denied {
        object: HitObjectId,
        point: ControlPointId,
    },
}

impl QuickDeleteOutcome {
    /// Whether the beatmap was changed.
    pub fn mutated(&self) -> bool {
        matches!(
            self,
            QuickDeleteOutcome::RemovedObject(_)
                | QuickDeleteOutcome::RemovedControlPoint { .. }
                | QuickDeleteOutcome::CascadedToObject { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuickDeleteResolver {
    pub policy: MinimumPointPolicy,
}

impl QuickDeleteResolver {
    pub fn new(policy: MinimumPointPolicy) -> Self {
        Self { policy }
    }

    /// Resolves the target under `pointer` among the snapshot's objects.
    ///
    /// A control point handle under the pointer takes precedence over any
    /// object body, whichever slider it belongs to. Otherwise the nearest
    /// object under the pointer is targeted whole.
    pub fn resolve(&self, snapshot: &BlueprintSnapshot, pointer: Pos2) -> Option<QuickDeleteTarget> {
        let target = match snapshot.handle_hit(pointer) {
            Some((object, point)) => QuickDeleteTarget::ControlPoint { object, point },
            None => QuickDeleteTarget::Object(snapshot.hit_test(pointer)?.object),
        };
        log::debug!("EDITOR: quick-delete resolved {:?} at {:?}", target, pointer);
        Some(target)
    }

    /// Applies a resolved target to the beatmap.
    pub fn apply(&self, beatmap: &mut EditorBeatmap, target: QuickDeleteTarget) -> QuickDeleteOutcome {
        match target {
            QuickDeleteTarget::Object(object) => match beatmap.remove(object) {
                Some(_) => {
                    log::info!("EDITOR: quick-delete removed {:?}", object);
                    QuickDeleteOutcome::RemovedObject(object)
                }
                None => QuickDeleteOutcome::NoTarget,
            },
            QuickDeleteTarget::ControlPoint { object, point } => {
                match beatmap.remove_control_point(object, point) {
                    Ok(()) => {
                        log::info!(
                            "EDITOR: quick-delete removed control point {:?} of {:?}",
                            point,
                            object
                        );
                        QuickDeleteOutcome::RemovedControlPoint { object, point }
                    }
                    Err(PathEditError::BelowMinimum { .. }) => {
                        self.apply_minimum_policy(beatmap, object, point)
                    }
                    Err(e @ (PathEditError::UnknownObject(_) | PathEditError::UnknownPoint(_))) => {
                        log::warn!("EDITOR: quick-delete target vanished: {}", e);
                        QuickDeleteOutcome::NoTarget
                    }
                }
            }
        }
    }

    fn apply_minimum_policy(
        &self,
        beatmap: &mut EditorBeatmap,
        object: HitObjectId,
        point: ControlPointId,
    ) -> QuickDeleteOutcome {
        match self.policy {
            MinimumPointPolicy::Cascade => {
                beatmap.remove(object);
                log::info!(
                    "EDITOR: {:?} cannot lose {:?}, removed the slider instead",
                    object,
                    point
                );
                QuickDeleteOutcome::CascadedToObject { object, point }
            }
            MinimumPointPolicy::Deny => {
                log::warn!(
                    "EDITOR: refused to remove {:?} of {:?}, slider is at its minimum",
                    point,
                    object
                );
                QuickDeleteOutcome::Denied { object, point }
            }
        }
    }

    /// Runs a whole gesture in one step: snapshot the selection, resolve, apply.
    pub fn quick_delete(
        &self,
        beatmap: &mut EditorBeatmap,
        locator: &dyn HandleLocator,
        pointer: Pos2,
        modifier_held: bool,
    ) -> QuickDeleteOutcome {
        if !modifier_held {
            return QuickDeleteOutcome::Ignored;
        }
        if beatmap.selected.is_empty() {
            return QuickDeleteOutcome::NoTarget;
        }
        let snapshot = BlueprintSnapshot::capture_selected(beatmap, locator);
        match self.resolve(&snapshot, pointer) {
            Some(target) => self.apply(beatmap, target),
            None => QuickDeleteOutcome::NoTarget,
        }
    }
}
