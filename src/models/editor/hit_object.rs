//! Hit objects placed on the osu! playfield.

use super::path::SliderPath;
use egui::Pos2;

/// Identity of a hit object inside an editing session.
///
/// Assigned by [`super::EditorBeatmap::add`] and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HitObjectId(pub u64);

/// Type-specific part of a hit object.
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    /// Simple tap circle.
    Circle,

    /// Composite object following a path of control points.
    Slider {
        path: SliderPath,
        /// Number of times the ball travels back along the path.
        repeat_count: u32,
    },

    /// Spinner, always centred on the playfield.
    Spinner { end_time: f64 },
}

impl HitObjectKind {
    /// Returns true if the object exposes removable sub-elements.
    pub fn is_composite(&self) -> bool {
        matches!(self, HitObjectKind::Slider { .. })
    }

    pub fn path(&self) -> Option<&SliderPath> {
        match self {
            HitObjectKind::Slider { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn path_mut(&mut self) -> Option<&mut SliderPath> {
        match self {
            HitObjectKind::Slider { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// A hit object as seen by the editor.
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    /// Set when the object is added to a beatmap.
    pub id: HitObjectId,
    /// When the object should be hit (in milliseconds).
    pub start_time: f64,
    /// Head position in playfield units.
    pub position: Pos2,
    pub kind: HitObjectKind,
}

impl HitObject {
    /// Default position for objects created without one (playfield centre).
    pub const PLAYFIELD_CENTRE: Pos2 = Pos2::new(256.0, 192.0);

    /// Creates a circle. The id is assigned when added to a beatmap.
    pub fn circle(start_time: f64, position: Pos2) -> Self {
        Self {
            id: HitObjectId(0),
            start_time,
            position,
            kind: HitObjectKind::Circle,
        }
    }

    /// Creates a slider with a single pass along `path`.
    pub fn slider(start_time: f64, position: Pos2, path: SliderPath) -> Self {
        Self {
            id: HitObjectId(0),
            start_time,
            position,
            kind: HitObjectKind::Slider {
                path,
                repeat_count: 0,
            },
        }
    }

    pub fn spinner(start_time: f64, end_time: f64) -> Self {
        Self {
            id: HitObjectId(0),
            start_time,
            position: Self::PLAYFIELD_CENTRE,
            kind: HitObjectKind::Spinner { end_time },
        }
    }

    pub fn is_slider(&self) -> bool {
        self.kind.is_composite()
    }

    /// Control point count for sliders, 0 otherwise.
    pub fn control_point_count(&self) -> usize {
        self.kind.path().map_or(0, SliderPath::len)
    }

    pub fn end_time(&self) -> f64 {
        match self.kind {
            HitObjectKind::Spinner { end_time } => end_time,
            _ => self.start_time,
        }
    }
}

/// Circle radius in playfield units for a given circle size.
pub fn circle_radius(circle_size: f32) -> f32 {
    54.4 - 4.48 * circle_size
}
