//! Per-gesture capture of selection blueprints and hit-testing against them.
//!
//! A [`BlueprintSnapshot`] freezes where every candidate object and control
//! point handle sits on screen at the moment a gesture starts. Hits resolve
//! to stable ids, so applying the gesture never goes back to screen positions.

use super::layout::HandleLocator;
use crate::models::editor::{ControlPointId, EditorBeatmap, HitObjectId, HitObjectKind};
use egui::Pos2;
use ordered_float::OrderedFloat;

#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointHandle {
    pub id: ControlPointId,
    pub centre: Pos2,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlueprintShape {
    /// Circles and spinners: a disc around the centre.
    Disc,
    /// Slider body polyline plus one handle per control point.
    Path { handles: Vec<ControlPointHandle> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBlueprint {
    pub object: HitObjectId,
    pub centre: Pos2,
    pub radius: f32,
    pub shape: BlueprintShape,
}

impl ObjectBlueprint {
    /// Distance from `pointer` to the object's visual representation, or
    /// `None` when the pointer is outside of it.
    fn hit_distance(&self, pointer: Pos2, handle_radius: f32) -> Option<f32> {
        match &self.shape {
            BlueprintShape::Disc => {
                let d = pointer.distance(self.centre);
                (d <= self.radius).then_some(d)
            }
            BlueprintShape::Path { handles } => {
                let handle_hit = self.nearest_handle(pointer, handle_radius).map(|(_, d)| d);
                let body_hit = handles
                    .windows(2)
                    .map(|w| distance_to_segment(pointer, w[0].centre, w[1].centre))
                    .chain(handles.first().map(|h| pointer.distance(h.centre)))
                    .filter(|d| *d <= self.radius)
                    .min_by_key(|d| OrderedFloat(*d));
                match (handle_hit, body_hit) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                }
            }
        }
    }

    /// Nearest control point handle under `pointer`.
    pub fn handle_at(&self, pointer: Pos2, handle_radius: f32) -> Option<ControlPointId> {
        self.nearest_handle(pointer, handle_radius).map(|(id, _)| id)
    }

    fn nearest_handle(&self, pointer: Pos2, handle_radius: f32) -> Option<(ControlPointId, f32)> {
        self.handles()
            .iter()
            .map(|h| (h.id, pointer.distance(h.centre)))
            .filter(|(_, d)| *d <= handle_radius)
            .min_by_key(|(_, d)| OrderedFloat(*d))
    }

    pub fn handles(&self) -> &[ControlPointHandle] {
        match &self.shape {
            BlueprintShape::Path { handles } => handles,
            BlueprintShape::Disc => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlueprintHit {
    pub object: HitObjectId,
    pub distance: f32,
}

/// Blueprints of the candidate objects, in document (draw) order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlueprintSnapshot {
    pub blueprints: Vec<ObjectBlueprint>,
    pub handle_radius: f32,
}

impl BlueprintSnapshot {
    /// Captures blueprints of the selected objects only.
    pub fn capture_selected(beatmap: &EditorBeatmap, locator: &dyn HandleLocator) -> Self {
        Self::capture(beatmap, locator, |id| beatmap.selected.contains(id))
    }

    /// Captures blueprints of every object in the beatmap.
    pub fn capture_all(beatmap: &EditorBeatmap, locator: &dyn HandleLocator) -> Self {
        Self::capture(beatmap, locator, |_| true)
    }

    fn capture<F>(beatmap: &EditorBeatmap, locator: &dyn HandleLocator, include: F) -> Self
    where
        F: Fn(HitObjectId) -> bool,
    {
        let blueprints = beatmap
            .hit_objects()
            .iter()
            .filter(|o| include(o.id))
            .map(|object| {
                let shape = match &object.kind {
                    HitObjectKind::Slider { path, .. } => BlueprintShape::Path {
                        handles: path
                            .control_points()
                            .iter()
                            .map(|p| ControlPointHandle {
                                id: p.id,
                                centre: locator.control_point_centre(object, p),
                            })
                            .collect(),
                    },
                    _ => BlueprintShape::Disc,
                };
                ObjectBlueprint {
                    object: object.id,
                    centre: locator.object_centre(object),
                    radius: locator.object_radius(beatmap, object),
                    shape,
                }
            })
            .collect();

        Self {
            blueprints,
            handle_radius: locator.control_point_radius(),
        }
    }

    pub fn get(&self, object: HitObjectId) -> Option<&ObjectBlueprint> {
        self.blueprints.iter().find(|b| b.object == object)
    }

    /// Object under the pointer. The nearest wins; on equal distance the one
    /// drawn on top (latest in the document) wins.
    pub fn hit_test(&self, pointer: Pos2) -> Option<BlueprintHit> {
        self.blueprints
            .iter()
            .rev()
            .filter_map(|b| {
                b.hit_distance(pointer, self.handle_radius)
                    .map(|distance| BlueprintHit {
                        object: b.object,
                        distance,
                    })
            })
            .min_by_key(|hit| OrderedFloat(hit.distance))
    }

    /// Control point handle under the pointer across every captured path.
    /// Same ordering as [`hit_test`](Self::hit_test): nearest first, then topmost.
    pub fn handle_hit(&self, pointer: Pos2) -> Option<(HitObjectId, ControlPointId)> {
        self.blueprints
            .iter()
            .rev()
            .filter_map(|b| {
                b.nearest_handle(pointer, self.handle_radius)
                    .map(|(point, d)| (b.object, point, d))
            })
            .min_by_key(|(_, _, d)| OrderedFloat(*d))
            .map(|(object, point, _)| (object, point))
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::layout::PlayfieldLayout;
    use crate::models::editor::{HitObject, SliderPath};
    use egui::Vec2;

    fn identity_layout() -> PlayfieldLayout {
        PlayfieldLayout::new(Pos2::ZERO, 1.0, 10.0)
    }

    #[test]
    fn test_segment_distance() {
        let a = Pos2::new(0.0, 0.0);
        let b = Pos2::new(10.0, 0.0);
        assert_eq!(distance_to_segment(Pos2::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(distance_to_segment(Pos2::new(-4.0, 3.0), a, b), 5.0);
        assert_eq!(distance_to_segment(Pos2::new(1.0, 1.0), a, a), 2f32.sqrt());
    }

    #[test]
    fn test_only_selected_objects_are_captured() {
        let mut beatmap = EditorBeatmap::default();
        let a = beatmap.add(HitObject::circle(1000.0, Pos2::new(100.0, 100.0)));
        beatmap.add(HitObject::circle(1000.0, Pos2::new(200.0, 100.0)));
        beatmap.select(a);

        let snapshot = BlueprintSnapshot::capture_selected(&beatmap, &identity_layout());

        assert_eq!(snapshot.blueprints.len(), 1);
        assert!(snapshot.hit_test(Pos2::new(200.0, 100.0)).is_none());
        assert_eq!(
            snapshot.hit_test(Pos2::new(105.0, 100.0)).map(|h| h.object),
            Some(a)
        );
    }

    #[test]
    fn test_topmost_wins_on_overlap() {
        let mut beatmap = EditorBeatmap::default();
        beatmap.add(HitObject::circle(1000.0, Pos2::new(100.0, 100.0)));
        let top = beatmap.add(HitObject::circle(1000.0, Pos2::new(100.0, 100.0)));

        let snapshot = BlueprintSnapshot::capture_all(&beatmap, &identity_layout());

        assert_eq!(
            snapshot.hit_test(Pos2::new(100.0, 100.0)).map(|h| h.object),
            Some(top)
        );
    }

    #[test]
    fn test_slider_body_and_handles() {
        let mut beatmap = EditorBeatmap::default();
        let path = SliderPath::from_offsets([
            Vec2::ZERO,
            Vec2::new(50.0, 0.0),
            Vec2::new(100.0, 0.0),
        ]);
        let last = path.last_id().unwrap();
        let id = beatmap.add(HitObject::slider(1000.0, Pos2::new(100.0, 100.0), path));

        let snapshot = BlueprintSnapshot::capture_all(&beatmap, &identity_layout());
        let blueprint = snapshot.get(id).unwrap();

        // On the body between handles: a hit, but no handle.
        assert!(snapshot.hit_test(Pos2::new(175.0, 110.0)).is_some());
        assert_eq!(blueprint.handle_at(Pos2::new(175.0, 110.0), 10.0), None);

        assert_eq!(blueprint.handle_at(Pos2::new(198.0, 101.0), 10.0), Some(last));
        assert!(snapshot.hit_test(Pos2::new(100.0, 300.0)).is_none());
    }

    #[test]
    fn test_handle_hit_spans_all_sliders() {
        let mut beatmap = EditorBeatmap::default();
        let below = beatmap.add(HitObject::slider(
            500.0,
            Pos2::new(100.0, 100.0),
            SliderPath::from_offsets([Vec2::ZERO, Vec2::new(100.0, 0.0)]),
        ));
        let path = SliderPath::from_offsets([Vec2::ZERO, Vec2::new(0.0, 100.0)]);
        let head = path.first_id().unwrap();
        let above = beatmap.add(HitObject::slider(1000.0, Pos2::new(100.0, 100.0), path));
        let far = SliderPath::from_offsets([Vec2::ZERO, Vec2::new(0.0, 100.0)]);
        let far_head = far.first_id().unwrap();
        let far_id = beatmap.add(HitObject::slider(1500.0, Pos2::new(300.0, 100.0), far));

        let snapshot = BlueprintSnapshot::capture_all(&beatmap, &identity_layout());

        // Both heads sit at the same spot: the topmost slider's handle wins.
        assert_eq!(snapshot.handle_hit(Pos2::new(101.0, 100.0)), Some((above, head)));
        assert_ne!(snapshot.handle_hit(Pos2::new(101.0, 100.0)).map(|h| h.0), Some(below));
        assert_eq!(snapshot.handle_hit(Pos2::new(296.0, 100.0)), Some((far_id, far_head)));
        assert_eq!(snapshot.handle_hit(Pos2::new(150.0, 100.0)), None);
    }
}
