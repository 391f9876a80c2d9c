//! Editor settings, read from `settings.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What a quick-delete does when the targeted control point is one the
/// slider cannot lose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MinimumPointPolicy {
    /// Delete the whole slider instead.
    #[default]
    Cascade,
    /// Refuse the deletion and leave the slider untouched.
    Deny,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickDeleteSettings {
    pub minimum_point_policy: MinimumPointPolicy,
    /// Radius of a control point handle, in screen pixels.
    pub control_point_radius: f32,
    /// Key names (winit `KeyCode` names) acting as the quick-delete modifier.
    /// Unknown names are skipped with a warning. The egui view cannot tell
    /// left from right, so a held Shift/Control/Alt/Super counts for both sides.
    pub modifier_keys: Vec<String>,
}

impl Default for QuickDeleteSettings {
    fn default() -> Self {
        Self {
            minimum_point_policy: MinimumPointPolicy::Cascade,
            control_point_radius: 10.0,
            modifier_keys: vec!["ShiftLeft".to_string(), "ShiftRight".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Screen size the playfield is fitted into.
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorSettings {
    pub quick_delete: QuickDeleteSettings,
    pub viewport: ViewportSettings,
}

impl EditorSettings {
    /// Loads settings, falling back to defaults when the file is missing or invalid.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("SETTINGS: {:?} not found, using defaults", path);
            return Self::default();
        }
        load_toml(path).unwrap_or_else(|e| {
            log::warn!("SETTINGS: falling back to defaults ({})", e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, content).map_err(|e| e.to_string())
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    match toml::from_str(&content) {
        Ok(data) => Ok(data),
        Err(e) => {
            log::error!("Failed to parse TOML file {:?}: {}", path, e);
            Err(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: EditorSettings = toml::from_str(
            r#"
            [quick_delete]
            minimum_point_policy = "deny"
            "#,
        )
        .unwrap();

        assert_eq!(
            settings.quick_delete.minimum_point_policy,
            MinimumPointPolicy::Deny
        );
        assert_eq!(settings.quick_delete.control_point_radius, 10.0);
        assert_eq!(settings.viewport, ViewportSettings::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = EditorSettings::load(Path::new("no/such/settings.toml"));
        assert_eq!(settings, EditorSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "rvsrg_editor_settings_save_then_load_{}.toml",
            std::process::id()
        ));
        let mut settings = EditorSettings::default();
        settings.quick_delete.modifier_keys = vec!["ControlLeft".to_string()];

        settings.save(&path).unwrap();
        let loaded = EditorSettings::load(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, settings);
    }
}
