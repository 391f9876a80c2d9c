//! Headless editor entry point.
//!
//! `rvsrg-editor [beatmap.osu] [--scenario scenario.toml]` loads settings and
//! an optional beatmap, then replays a scripted scenario against it.

use rvsrg_editor::harness::{Scenario, ScenarioHarness};
use rvsrg_editor::models::editor::EditorBeatmap;
use rvsrg_editor::models::editor::loader::load_beatmap;
use rvsrg_editor::models::settings::EditorSettings;
use rvsrg_editor::state::EditorState;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    log::info!("MAIN: Booting rvsrg editor...");

    let mut beatmap_path: Option<PathBuf> = None;
    let mut scenario_path: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--scenario" {
            scenario_path = args.next().map(PathBuf::from);
        } else {
            beatmap_path = Some(PathBuf::from(arg));
        }
    }

    let settings = EditorSettings::load(&PathBuf::from("settings.toml"));

    let beatmap = match beatmap_path {
        Some(path) => match load_beatmap(&path) {
            Ok(beatmap) => beatmap,
            Err(e) => {
                log::error!("MAIN: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => EditorBeatmap::default(),
    };

    let Some(scenario_path) = scenario_path else {
        log::info!(
            "MAIN: {} hit objects loaded, no scenario given",
            beatmap.len()
        );
        return ExitCode::SUCCESS;
    };

    let scenario = match Scenario::load(&scenario_path) {
        Ok(scenario) => scenario,
        Err(e) => {
            log::error!("MAIN: cannot read scenario {:?}: {}", scenario_path, e);
            return ExitCode::FAILURE;
        }
    };

    let mut harness = ScenarioHarness::new(EditorState::new(beatmap, &settings));
    match harness.run(&scenario) {
        Ok(()) => {
            log::info!(
                "MAIN: '{}' passed, {} hit objects left",
                scenario.name,
                harness.state.beatmap.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("MAIN: '{}' failed: {}", scenario.name, e);
            ExitCode::FAILURE
        }
    }
}
