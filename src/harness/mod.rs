//! Scripted editor scenarios.
//!
//! A scenario is a list of steps: place objects, select them, move the mouse
//! to a handle, press keys, click, and assert on the resulting beatmap. The
//! same scripts drive the unit tests and `rvsrg-editor --scenario`.

use crate::core::input::actions::EditorInput;
use crate::core::input::bindings::parse_keycode;
use crate::logic::layout::HandleLocator;
use crate::models::editor::{HitObject, HitObjectId, SliderPath};
use crate::models::settings::load_toml;
use crate::state::editor::EditorState;
use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;
use winit::event::MouseButton;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleEnd {
    First,
    Last,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Left,
    Right,
}

impl From<Button> for MouseButton {
    fn from(button: Button) -> Self {
        match button {
            Button::Left => MouseButton::Left,
            Button::Right => MouseButton::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    AddCircle {
        time: f64,
        #[serde(default)]
        position: Option<[f32; 2]>,
    },
    AddSlider {
        time: f64,
        #[serde(default)]
        position: Option<[f32; 2]>,
        points: Vec<[f32; 2]>,
    },
    /// Selects the most recently added object.
    SelectAdded,
    ClearSelection,
    /// Moves the mouse onto the most recently added object's handle.
    MoveMouseToObject,
    /// Moves the mouse onto a control point handle of the most recently added slider.
    MoveMouseToControlPoint { handle: HandleEnd },
    MoveMouseTo { position: [f32; 2] },
    PressKey { key: String },
    ReleaseKey { key: String },
    Click { button: Button },
    AssertObjectCount { count: usize },
    AssertControlPointCount { count: usize },
    AssertSelectionCount { count: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, String> {
        load_toml(path)
    }
}

/// Drives an [`EditorState`] through scenario steps.
pub struct ScenarioHarness {
    pub state: EditorState,
    added: Vec<HitObjectId>,
}

impl ScenarioHarness {
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            added: Vec::new(),
        }
    }

    /// Runs every step, stopping at the first failure.
    pub fn run(&mut self, scenario: &Scenario) -> Result<(), String> {
        log::info!("HARNESS: running '{}'", scenario.name);
        for (i, step) in scenario.steps.iter().enumerate() {
            log::debug!("HARNESS: step {}: {:?}", i + 1, step);
            self.step(step)
                .map_err(|e| format!("{} (step {}: {:?})", e, i + 1, step))?;
        }
        Ok(())
    }

    pub fn step(&mut self, step: &Step) -> Result<(), String> {
        match step {
            Step::AddCircle { time, position } => {
                let position = to_pos(*position);
                let id = self.state.beatmap.add(HitObject::circle(*time, position));
                self.added.push(id);
            }
            Step::AddSlider {
                time,
                position,
                points,
            } => {
                let path = SliderPath::from_offsets(points.iter().map(|p| Vec2::new(p[0], p[1])));
                let id = self
                    .state
                    .beatmap
                    .add(HitObject::slider(*time, to_pos(*position), path));
                self.added.push(id);
            }
            Step::SelectAdded => {
                let id = self.last_added()?;
                self.state.beatmap.select(id);
            }
            Step::ClearSelection => self.state.beatmap.selected.clear(),
            Step::MoveMouseToObject => {
                let object = self.last_added_object()?;
                let pos = self.state.layout.object_centre(object);
                self.state.handle_input(EditorInput::PointerMoved(pos));
            }
            Step::MoveMouseToControlPoint { handle } => {
                let object = self.last_added_object()?;
                let points = object
                    .kind
                    .path()
                    .ok_or_else(|| format!("{:?} is not a slider", object.id))?
                    .control_points();
                let point = match handle {
                    HandleEnd::First => points.first(),
                    HandleEnd::Last => points.last(),
                }
                .ok_or("slider has no control points")?;
                let pos = self.state.layout.control_point_centre(object, point);
                self.state.handle_input(EditorInput::PointerMoved(pos));
            }
            Step::MoveMouseTo { position } => {
                let pos = self.state.layout.to_screen(Pos2::new(position[0], position[1]));
                self.state.handle_input(EditorInput::PointerMoved(pos));
            }
            Step::PressKey { key } => {
                let key = parse_keycode(key).ok_or_else(|| format!("unknown key {}", key))?;
                self.state.handle_input(EditorInput::KeyPressed(key));
            }
            Step::ReleaseKey { key } => {
                let key = parse_keycode(key).ok_or_else(|| format!("unknown key {}", key))?;
                self.state.handle_input(EditorInput::KeyReleased(key));
            }
            Step::Click { button } => {
                self.state.handle_input(EditorInput::Click((*button).into()));
            }
            Step::AssertObjectCount { count } => {
                expect("hit object count", *count, self.state.beatmap.len())?
            }
            Step::AssertControlPointCount { count } => {
                let actual = self
                    .state
                    .beatmap
                    .get(self.last_added()?)
                    .map_or(0, HitObject::control_point_count);
                expect("control point count", *count, actual)?
            }
            Step::AssertSelectionCount { count } => {
                expect("selection size", *count, self.state.beatmap.selected.len())?
            }
        }
        Ok(())
    }

    fn last_added(&self) -> Result<HitObjectId, String> {
        self.added
            .last()
            .copied()
            .ok_or_else(|| "no object was added".to_string())
    }

    fn last_added_object(&self) -> Result<&HitObject, String> {
        let id = self.last_added()?;
        self.state
            .beatmap
            .get(id)
            .ok_or_else(|| format!("{:?} is no longer in the beatmap", id))
    }
}

fn to_pos(position: Option<[f32; 2]>) -> Pos2 {
    position.map_or(HitObject::PLAYFIELD_CENTRE, |p| Pos2::new(p[0], p[1]))
}

fn expect(what: &str, expected: usize, actual: usize) -> Result<(), String> {
    if expected == actual {
        Ok(())
    } else {
        Err(format!("expected {} {}, got {}", what, expected, actual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::editor::EditorBeatmap;
    use crate::models::settings::{EditorSettings, MinimumPointPolicy};

    fn harness(policy: MinimumPointPolicy) -> ScenarioHarness {
        let mut settings = EditorSettings::default();
        settings.quick_delete.minimum_point_policy = policy;
        ScenarioHarness::new(EditorState::new(EditorBeatmap::default(), &settings))
    }

    fn quick_delete_steps() -> Vec<Step> {
        vec![
            Step::PressKey {
                key: "ShiftLeft".to_string(),
            },
            Step::Click {
                button: Button::Right,
            },
            Step::ReleaseKey {
                key: "ShiftLeft".to_string(),
            },
        ]
    }

    #[test]
    fn test_quick_delete_removes_object() {
        let mut steps = vec![
            Step::AddCircle {
                time: 1000.0,
                position: None,
            },
            Step::SelectAdded,
            Step::MoveMouseToObject,
        ];
        steps.extend(quick_delete_steps());
        steps.push(Step::AssertObjectCount { count: 0 });

        let scenario = Scenario {
            name: "quick delete removes object".to_string(),
            steps,
        };
        harness(MinimumPointPolicy::Cascade).run(&scenario).unwrap();
    }

    #[test]
    fn test_quick_delete_removes_slider_control_point() {
        let mut steps = vec![
            Step::AddSlider {
                time: 1000.0,
                position: None,
                points: vec![[0.0, 0.0], [50.0, 0.0], [100.0, 0.0]],
            },
            Step::SelectAdded,
            Step::MoveMouseToControlPoint {
                handle: HandleEnd::Last,
            },
        ];
        steps.extend(quick_delete_steps());
        steps.push(Step::AssertControlPointCount { count: 2 });
        steps.push(Step::AssertObjectCount { count: 1 });
        steps.push(Step::AssertSelectionCount { count: 1 });

        let scenario = Scenario {
            name: "quick delete removes slider control point".to_string(),
            steps,
        };

        // Consecutive runs must target the same handle every time.
        for _ in 0..10 {
            harness(MinimumPointPolicy::Cascade).run(&scenario).unwrap();
        }
    }

    #[test]
    fn test_repeated_quick_delete_hits_minimum_policy() {
        let mut steps = vec![
            Step::AddSlider {
                time: 1000.0,
                position: None,
                points: vec![[0.0, 0.0], [50.0, 0.0], [100.0, 0.0]],
            },
            Step::SelectAdded,
        ];
        for _ in 0..2 {
            steps.push(Step::MoveMouseToControlPoint {
                handle: HandleEnd::Last,
            });
            steps.extend(quick_delete_steps());
        }
        let scenario = Scenario {
            name: "down to the minimum".to_string(),
            steps,
        };

        let mut cascade = harness(MinimumPointPolicy::Cascade);
        cascade.run(&scenario).unwrap();
        assert!(cascade.state.beatmap.is_empty());

        let mut deny = harness(MinimumPointPolicy::Deny);
        deny.run(&scenario).unwrap();
        assert_eq!(deny.state.beatmap.len(), 1);
        assert_eq!(
            deny.state.beatmap.hit_objects()[0].control_point_count(),
            2
        );
    }

    #[test]
    fn test_without_shift_nothing_is_deleted() {
        let scenario = Scenario {
            name: "plain right click".to_string(),
            steps: vec![
                Step::AddCircle {
                    time: 1000.0,
                    position: None,
                },
                Step::SelectAdded,
                Step::MoveMouseToObject,
                Step::Click {
                    button: Button::Right,
                },
                Step::AssertObjectCount { count: 1 },
            ],
        };
        harness(MinimumPointPolicy::Cascade).run(&scenario).unwrap();
    }

    #[test]
    fn test_failed_assertion_names_the_step() {
        let scenario = Scenario {
            name: "wrong count".to_string(),
            steps: vec![Step::AssertObjectCount { count: 3 }],
        };
        let err = harness(MinimumPointPolicy::Cascade)
            .run(&scenario)
            .unwrap_err();
        assert!(err.contains("expected hit object count 3, got 0"));
        assert!(err.contains("step 1"));
    }

    #[test]
    fn test_scenario_from_toml() {
        let scenario: Scenario = toml::from_str(
            r#"
            name = "from toml"

            [[steps]]
            step = "add_slider"
            time = 1000.0
            points = [[0.0, 0.0], [50.0, 0.0], [100.0, 0.0]]

            [[steps]]
            step = "select_added"

            [[steps]]
            step = "move_mouse_to_control_point"
            handle = "last"

            [[steps]]
            step = "press_key"
            key = "ShiftLeft"

            [[steps]]
            step = "click"
            button = "right"

            [[steps]]
            step = "assert_control_point_count"
            count = 2
            "#,
        )
        .unwrap();

        assert_eq!(scenario.steps.len(), 6);
        harness(MinimumPointPolicy::Cascade).run(&scenario).unwrap();
    }
}
