//! Mapping between playfield units and screen space.

use crate::models::editor::{EditorBeatmap, HitObject, HitObjectKind, PathControlPoint};
use egui::{Pos2, Rect, Vec2};

/// osu! playfield size in playfield units.
pub const PLAYFIELD_SIZE: Vec2 = Vec2::new(512.0, 384.0);

/// Where the layout host draws handles. Hit-testing only consumes these
/// positions, it never lays anything out itself.
pub trait HandleLocator {
    /// Screen-space centre of an object's main handle.
    fn object_centre(&self, object: &HitObject) -> Pos2;

    /// Screen-space centre of one control point handle of a slider.
    fn control_point_centre(&self, object: &HitObject, point: &PathControlPoint) -> Pos2;

    /// Screen-space radius of an object's hit area.
    fn object_radius(&self, beatmap: &EditorBeatmap, object: &HitObject) -> f32;

    /// Screen-space radius of a control point handle.
    fn control_point_radius(&self) -> f32;
}

/// Playfield fitted into a screen rectangle, aspect ratio preserved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayfieldLayout {
    /// Screen position of playfield (0, 0).
    pub origin: Pos2,
    /// Screen pixels per playfield unit.
    pub scale: f32,
    pub control_point_radius: f32,
}

impl PlayfieldLayout {
    pub fn new(origin: Pos2, scale: f32, control_point_radius: f32) -> Self {
        Self {
            origin,
            scale,
            control_point_radius,
        }
    }

    /// Fits the playfield in `screen`, centred.
    pub fn fit(screen: Rect, control_point_radius: f32) -> Self {
        let scale = (screen.width() / PLAYFIELD_SIZE.x).min(screen.height() / PLAYFIELD_SIZE.y);
        let size = PLAYFIELD_SIZE * scale;
        Self {
            origin: screen.center() - size / 2.0,
            scale,
            control_point_radius,
        }
    }

    pub fn to_screen(&self, playfield: Pos2) -> Pos2 {
        self.origin + playfield.to_vec2() * self.scale
    }

    pub fn to_playfield(&self, screen: Pos2) -> Pos2 {
        Pos2::ZERO + (screen - self.origin) / self.scale
    }

    /// Screen rectangle covered by the playfield.
    pub fn playfield_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, PLAYFIELD_SIZE * self.scale)
    }
}

impl HandleLocator for PlayfieldLayout {
    fn object_centre(&self, object: &HitObject) -> Pos2 {
        self.to_screen(object.position)
    }

    fn control_point_centre(&self, object: &HitObject, point: &PathControlPoint) -> Pos2 {
        self.to_screen(object.position + point.offset)
    }

    fn object_radius(&self, beatmap: &EditorBeatmap, object: &HitObject) -> f32 {
        let radius = beatmap.object_radius() * self.scale;
        match object.kind {
            // Spinner blueprints cover a wider disc than circles.
            HitObjectKind::Spinner { .. } => radius * 2.0,
            _ => radius,
        }
    }

    fn control_point_radius(&self) -> f32 {
        self.control_point_radius
    }
}
