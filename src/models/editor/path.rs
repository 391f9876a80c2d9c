//! Slider paths and their editable control points.

use super::hit_object::HitObjectId;
use egui::{Pos2, Vec2};
use std::fmt;

/// Stable identifier of a control point inside one slider path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlPointId(pub u32);

/// Curve type starting at a control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    Linear,
    PerfectCurve,
    Bezier,
    Catmull,
}

/// A single point defining part of a slider's geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PathControlPoint {
    pub id: ControlPointId,
    /// Offset from the slider's head position, in playfield units.
    pub offset: Vec2,
    /// Segment type starting at this point, `None` continues the previous one.
    pub path_type: Option<PathType>,
}

/// Why a structural edit on a path was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathEditError {
    /// No slider with this id exists in the beatmap.
    UnknownObject(HitObjectId),
    /// No control point with this id exists in the path.
    UnknownPoint(ControlPointId),
    /// Removing the point would leave fewer than `minimum` points.
    BelowMinimum { remaining: usize, minimum: usize },
}

impl fmt::Display for PathEditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathEditError::UnknownObject(id) => write!(f, "no slider with id {}", id.0),
            PathEditError::UnknownPoint(id) => write!(f, "no control point with id {}", id.0),
            PathEditError::BelowMinimum { remaining, minimum } => write!(
                f,
                "path would keep {} control point(s), at least {} required",
                remaining, minimum
            ),
        }
    }
}

impl std::error::Error for PathEditError {}

/// Ordered sequence of control points. The first point is always the slider head.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderPath {
    points: Vec<PathControlPoint>,
    next_id: u32,
}

impl SliderPath {
    /// Smallest number of control points that still describes a path.
    pub const MIN_CONTROL_POINTS: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a path from raw offsets. The first segment is marked as bezier,
    /// which is what the editor places by default.
    pub fn from_offsets<I>(offsets: I) -> Self
    where
        I: IntoIterator<Item = Vec2>,
    {
        let mut path = Self::new();
        for (i, offset) in offsets.into_iter().enumerate() {
            let path_type = if i == 0 { Some(PathType::Bezier) } else { None };
            path.push(offset, path_type);
        }
        path
    }

    /// Appends a control point and returns its id.
    pub fn push(&mut self, offset: Vec2, path_type: Option<PathType>) -> ControlPointId {
        let id = ControlPointId(self.next_id);
        self.next_id += 1;
        self.points.push(PathControlPoint {
            id,
            offset,
            path_type,
        });
        id
    }

    pub fn control_points(&self) -> &[PathControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: ControlPointId) -> Option<&PathControlPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn index_of(&self, id: ControlPointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    pub fn first_id(&self) -> Option<ControlPointId> {
        self.points.first().map(|p| p.id)
    }

    pub fn last_id(&self) -> Option<ControlPointId> {
        self.points.last().map(|p| p.id)
    }

    /// Whether removing one more point is structurally allowed.
    pub fn can_remove(&self) -> bool {
        self.points.len() > Self::MIN_CONTROL_POINTS
    }

    /// Removes a control point and rebuilds the path without it.
    ///
    /// Returns the translation the owning slider must apply to its position.
    /// It is zero unless the head point was removed, in which case the next
    /// point becomes the new head and all offsets are rebased on it.
    pub fn remove(&mut self, id: ControlPointId) -> Result<Vec2, PathEditError> {
        let index = self.index_of(id).ok_or(PathEditError::UnknownPoint(id))?;
        if !self.can_remove() {
            return Err(PathEditError::BelowMinimum {
                remaining: self.points.len() - 1,
                minimum: Self::MIN_CONTROL_POINTS,
            });
        }

        let removed = self.points.remove(index);
        if index != 0 {
            return Ok(Vec2::ZERO);
        }

        let delta = self.points[0].offset;
        for point in &mut self.points {
            point.offset -= delta;
        }
        // The new head inherits the segment type so the curve keeps its shape kind.
        if self.points[0].path_type.is_none() {
            self.points[0].path_type = removed.path_type;
        }
        Ok(delta)
    }

    /// Absolute playfield positions of every control point for a slider at `head`.
    pub fn positions(&self, head: Pos2) -> impl Iterator<Item = (ControlPointId, Pos2)> + '_ {
        self.points.iter().map(move |p| (p.id, head + p.offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_point_path() -> SliderPath {
        SliderPath::from_offsets([
            Vec2::ZERO,
            Vec2::new(50.0, 0.0),
            Vec2::new(100.0, 0.0),
        ])
    }

    #[test]
    fn test_ids_are_stable_after_removal() {
        let mut path = three_point_path();
        let last = path.last_id().unwrap();
        let middle = path.control_points()[1].id;

        path.remove(middle).unwrap();

        assert_eq!(path.len(), 2);
        assert_eq!(path.last_id(), Some(last));
        assert_eq!(path.get(last).unwrap().offset, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_removing_head_rebases_offsets() {
        let mut path = three_point_path();
        let head = path.first_id().unwrap();

        let delta = path.remove(head).unwrap();

        assert_eq!(delta, Vec2::new(50.0, 0.0));
        assert_eq!(path.control_points()[0].offset, Vec2::ZERO);
        assert_eq!(path.control_points()[1].offset, Vec2::new(50.0, 0.0));
        assert_eq!(path.control_points()[0].path_type, Some(PathType::Bezier));
    }

    #[test]
    fn test_refuses_to_go_below_minimum() {
        let mut path = SliderPath::from_offsets([Vec2::ZERO, Vec2::new(10.0, 0.0)]);
        let last = path.last_id().unwrap();

        let err = path.remove(last).unwrap_err();

        assert_eq!(
            err,
            PathEditError::BelowMinimum {
                remaining: 1,
                minimum: SliderPath::MIN_CONTROL_POINTS
            }
        );
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_unknown_point() {
        let mut path = three_point_path();
        assert_eq!(
            path.remove(ControlPointId(42)),
            Err(PathEditError::UnknownPoint(ControlPointId(42)))
        );
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_new_points_never_reuse_ids() {
        let mut path = three_point_path();
        let last = path.last_id().unwrap();
        path.remove(last).unwrap();
        let pushed = path.push(Vec2::new(80.0, 20.0), None);
        assert_ne!(pushed, last);
    }
}
