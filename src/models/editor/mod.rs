//! Editable beatmap document used by the compose screen.

pub mod beatmap;
pub mod hit_object;
pub mod loader;
pub mod path;
pub mod selection;

pub use beatmap::EditorBeatmap;
pub use hit_object::{HitObject, HitObjectId, HitObjectKind};
pub use path::{ControlPointId, PathControlPoint, PathEditError, PathType, SliderPath};
pub use selection::SelectionSet;
