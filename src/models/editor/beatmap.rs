//! The editable document: hit objects of one difficulty plus the selection.

use super::hit_object::{HitObject, HitObjectId, circle_radius};
use super::path::{ControlPointId, PathEditError};
use super::selection::SelectionSet;

/// Hit objects being edited, ordered by start time.
#[derive(Debug, Clone)]
pub struct EditorBeatmap {
    hit_objects: Vec<HitObject>,
    /// Objects targeted by edit actions.
    pub selected: SelectionSet,
    /// Beatmap circle size, drives hit-testing radii.
    pub circle_size: f32,
    next_id: u64,
}

impl Default for EditorBeatmap {
    fn default() -> Self {
        Self::new(4.0)
    }
}

impl EditorBeatmap {
    pub fn new(circle_size: f32) -> Self {
        Self {
            hit_objects: Vec::new(),
            selected: SelectionSet::new(),
            circle_size,
            next_id: 1,
        }
    }

    /// Adds an object and returns its identity.
    ///
    /// Objects sharing a start time keep insertion order.
    pub fn add(&mut self, mut object: HitObject) -> HitObjectId {
        let id = HitObjectId(self.next_id);
        self.next_id += 1;
        object.id = id;

        let index = self
            .hit_objects
            .partition_point(|o| o.start_time <= object.start_time);
        log::debug!("EDITOR: add {:?} at {}ms", id, object.start_time);
        self.hit_objects.insert(index, object);
        id
    }

    /// Removes an object by identity, dropping it from the selection too.
    pub fn remove(&mut self, id: HitObjectId) -> Option<HitObject> {
        let index = self.hit_objects.iter().position(|o| o.id == id)?;
        self.selected.remove(id);
        Some(self.hit_objects.remove(index))
    }

    /// Removes one control point of a slider, moving the slider when its head
    /// point is the one removed.
    pub fn remove_control_point(
        &mut self,
        id: HitObjectId,
        point: ControlPointId,
    ) -> Result<(), PathEditError> {
        let object = self.get_mut(id).ok_or(PathEditError::UnknownObject(id))?;
        let path = object
            .kind
            .path_mut()
            .ok_or(PathEditError::UnknownObject(id))?;
        let delta = path.remove(point)?;
        object.position += delta;
        Ok(())
    }

    pub fn get(&self, id: HitObjectId) -> Option<&HitObject> {
        self.hit_objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: HitObjectId) -> Option<&mut HitObject> {
        self.hit_objects.iter_mut().find(|o| o.id == id)
    }

    pub fn hit_objects(&self) -> &[HitObject] {
        &self.hit_objects
    }

    pub fn len(&self) -> usize {
        self.hit_objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hit_objects.is_empty()
    }

    /// Selects an object present in the beatmap.
    pub fn select(&mut self, id: HitObjectId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected.add(id)
    }

    pub fn deselect(&mut self, id: HitObjectId) -> bool {
        self.selected.remove(id)
    }

    /// Selected objects in document order.
    pub fn selected_objects(&self) -> impl Iterator<Item = &HitObject> + '_ {
        self.hit_objects
            .iter()
            .filter(|o| self.selected.contains(o.id))
    }

    /// Circle radius in playfield units for this beatmap.
    pub fn object_radius(&self) -> f32 {
        circle_radius(self.circle_size)
    }
}
