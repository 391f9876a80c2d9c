//! Loading `.osu` files into an [`EditorBeatmap`].

use super::beatmap::EditorBeatmap;
use super::hit_object::{HitObject, HitObjectId, HitObjectKind as EditorKind};
use super::path::{PathType, SliderPath};
use egui::{Pos2, Vec2};
use rosu_map::section::hit_objects::{self as rosu, HitObjectKind, SplineType};
use std::path::Path;

/// Loads a beatmap from a `.osu` file.
pub fn load_beatmap(path: &Path) -> Result<EditorBeatmap, String> {
    let map = rosu_map::Beatmap::from_path(path)
        .map_err(|e| format!("Failed to load beatmap {:?}: {}", path, e))?;
    let beatmap = from_rosu(&map);
    log::info!(
        "EDITOR: loaded {} hit objects from {:?}",
        beatmap.len(),
        path
    );
    Ok(beatmap)
}

/// Parses `.osu` content already in memory.
pub fn parse_beatmap(bytes: &[u8]) -> Result<EditorBeatmap, String> {
    let map = rosu_map::Beatmap::from_bytes(bytes)
        .map_err(|e| format!("rosu_map parse failed: {}", e))?;
    Ok(from_rosu(&map))
}

/// Converts a parsed osu! beatmap into editable objects.
pub fn from_rosu(map: &rosu_map::Beatmap) -> EditorBeatmap {
    let mut beatmap = EditorBeatmap::new(map.circle_size);
    for hit_object in &map.hit_objects {
        if let Some(object) = convert_hit_object(hit_object) {
            beatmap.add(object);
        }
    }
    beatmap
}

fn convert_hit_object(hit_object: &rosu::HitObject) -> Option<HitObject> {
    let start_time = hit_object.start_time;
    match &hit_object.kind {
        HitObjectKind::Circle(circle) => Some(HitObject::circle(
            start_time,
            Pos2::new(circle.pos.x, circle.pos.y),
        )),
        HitObjectKind::Slider(slider) => {
            let mut path = SliderPath::new();
            for point in slider.path.control_points() {
                path.push(
                    Vec2::new(point.pos.x, point.pos.y),
                    point.path_type.as_ref().map(|t| convert_path_type(t.kind)),
                );
            }
            if path.len() < SliderPath::MIN_CONTROL_POINTS {
                log::warn!(
                    "EDITOR: skipping slider at {}ms with {} control point(s)",
                    start_time,
                    path.len()
                );
                return None;
            }
            Some(HitObject {
                id: HitObjectId(0),
                start_time,
                position: Pos2::new(slider.pos.x, slider.pos.y),
                kind: EditorKind::Slider {
                    path,
                    repeat_count: slider.repeat_count.max(0) as u32,
                },
            })
        }
        HitObjectKind::Spinner(spinner) => {
            Some(HitObject::spinner(start_time, start_time + spinner.duration))
        }
        HitObjectKind::Hold(_) => {
            log::warn!("EDITOR: mania hold at {}ms is not editable here", start_time);
            None
        }
    }
}

fn convert_path_type(kind: SplineType) -> PathType {
    match kind {
        SplineType::Linear => PathType::Linear,
        SplineType::PerfectCurve => PathType::PerfectCurve,
        SplineType::Catmull => PathType::Catmull,
        _ => PathType::Bezier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "osu file format v14

[General]
Mode: 0

[Difficulty]
CircleSize:4
SliderMultiplier:1.4
SliderTickRate:1

[TimingPoints]
0,500,4,2,0,100,1,0

[HitObjects]
256,192,1000,1,0,0:0:0:0:
100,100,2000,2,0,B|150:100|200:100,1,140
256,192,3000,12,0,4000,0:0:0:0:
";

    #[test]
    fn test_parse_standard_objects() {
        let beatmap = parse_beatmap(SAMPLE.as_bytes()).unwrap();

        assert_eq!(beatmap.len(), 3);
        assert!((beatmap.circle_size - 4.0).abs() < f32::EPSILON);

        let slider = &beatmap.hit_objects()[1];
        assert!(slider.is_slider());
        assert_eq!(slider.control_point_count(), 3);
        assert_eq!(slider.position, Pos2::new(100.0, 100.0));

        let spinner = &beatmap.hit_objects()[2];
        assert_eq!(spinner.end_time(), 4000.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_beatmap(Path::new("does/not/exist.osu")).is_err());
    }
}
