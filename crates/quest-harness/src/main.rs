use std::fs;
use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use quest_core::config::Config;
use quest_core::shell::{AppShell, Effect, InputEvent};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Replays scripted input events against the checklist shell without a
/// display server and prints the canonical end state, so behavior can be
/// diffed across revisions.
#[derive(Parser, Debug)]
#[command(name = "quest-harness", about = "Headless event-script runner for Checklist Quest")]
struct Args {
    #[arg(long, default_value = "crates/quest-harness/scenarios/basic_flow.json")]
    scenario: Vec<PathBuf>,

    #[arg(long)]
    questrc: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    #[serde(default)]
    capacity: Option<usize>,
    steps: Vec<InputEvent>,
}

#[derive(Debug, Serialize, PartialEq)]
struct CanonicalRow {
    completed: bool,
    text: String,
}

#[derive(Debug, Serialize)]
struct CanonicalState {
    rows: Vec<CanonicalRow>,
    editing_index: Option<usize>,
    maximized: bool,
    window: (i32, i32, u32, u32),
    rejected_adds: usize,
    close_requested: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    quest_core::init_tracing(&args.log_level)?;

    let scenarios = load_scenarios(&args.scenario)?;
    if scenarios.is_empty() {
        return Err(anyhow!("no scenarios loaded"));
    }

    for scenario in scenarios {
        info!(scenario = %scenario.name, steps = scenario.steps.len(), "running scenario");

        let cfg = build_config(args.questrc.as_deref(), scenario.capacity)?;
        let state = replay(&cfg, &scenario);

        println!("Scenario: {}", scenario.name);
        println!(
            "  rows occupied : {}",
            state.rows.iter().filter(|row| !row.text.is_empty()).count()
        );
        println!(
            "  rows completed: {}",
            state.rows.iter().filter(|row| row.completed).count()
        );
        println!("  rejected adds : {}", state.rejected_adds);
        println!("{}", serde_json::to_string_pretty(&state)?);
    }

    Ok(())
}

fn build_config(
    questrc: Option<&std::path::Path>,
    capacity: Option<usize>,
) -> anyhow::Result<Config> {
    let mut cfg = Config::load(questrc).context("failed to load questrc")?;
    if let Some(capacity) = capacity {
        cfg.apply_overrides([("list.capacity".to_string(), capacity.to_string())]);
    }
    Ok(cfg)
}

fn replay(cfg: &Config, scenario: &Scenario) -> CanonicalState {
    let mut shell = AppShell::new(cfg);
    let mut rejected_adds = 0;
    let mut close_requested = false;

    for step in &scenario.steps {
        let effects = shell.handle(step.clone());
        debug!(?step, effects = effects.len(), "step replayed");
        for effect in &effects {
            match effect {
                Effect::View(quest_core::view::ViewEffect::AddRejected) => rejected_adds += 1,
                Effect::CloseWindow => close_requested = true,
                _ => {}
            }
        }
    }

    canonicalize(&shell, rejected_adds, close_requested)
}

fn canonicalize(shell: &AppShell, rejected_adds: usize, close_requested: bool) -> CanonicalState {
    let geometry = shell.geometry();
    CanonicalState {
        rows: shell
            .store()
            .rows()
            .iter()
            .map(|row| CanonicalRow {
                completed: row.completed,
                text: row.text.clone(),
            })
            .collect(),
        editing_index: shell.store().editing_index(),
        maximized: shell.chrome().is_maximized(),
        window: (geometry.x, geometry.y, geometry.width, geometry.height),
        rejected_adds,
        close_requested,
    }
}

fn load_scenarios(paths: &[PathBuf]) -> anyhow::Result<Vec<Scenario>> {
    let mut scenarios = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let scenario: Scenario = serde_json::from_str(&text)
            .with_context(|| format!("failed to decode scenario {}", path.display()))?;
        scenarios.push(scenario);
    }
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use quest_core::config::Config;

    use super::{Scenario, replay};

    fn isolated_config(capacity: usize) -> Config {
        let dir = tempfile::tempdir().expect("tempdir");
        let rc = dir.path().join("questrc");
        std::fs::write(&rc, format!("list.capacity = {capacity}\n")).expect("write rc");
        Config::load(Some(&rc)).expect("load config")
    }

    #[test]
    fn scenario_decodes_snake_case_events() {
        let json = r#"{
            "name": "decode",
            "capacity": 2,
            "steps": [
                { "add_submitted": { "text": "buy milk" } },
                { "row_clicked": { "index": 0, "region": "Checkbox" } },
                "drag_ended"
            ]
        }"#;

        let scenario: Scenario = serde_json::from_str(json).expect("decode scenario");
        assert_eq!(scenario.name, "decode");
        assert_eq!(scenario.steps.len(), 3);
    }

    #[test]
    fn replay_tracks_rejections_and_end_state() {
        let json = r#"{
            "name": "overflow",
            "steps": [
                { "add_submitted": { "text": "a" } },
                { "add_submitted": { "text": "b" } },
                { "add_submitted": { "text": "c" } },
                { "row_clicked": { "index": 1, "region": "Checkbox" } }
            ]
        }"#;
        let scenario: Scenario = serde_json::from_str(json).expect("decode scenario");

        let state = replay(&isolated_config(2), &scenario);
        assert_eq!(state.rows.len(), 2);
        assert_eq!(state.rows[0].text, "a");
        assert!(state.rows[1].completed);
        assert_eq!(state.rejected_adds, 1);
        assert!(!state.close_requested);
    }
}
