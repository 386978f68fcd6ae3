#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Waymark **
//! Quest walkthrough assistant demo

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use waymark_engine::data_paths::data_path;
use waymark_engine::step::StepTarget;
use waymark_engine::style::{GuideStyle, paint};
use waymark_engine::{Config, GameState, Requirement, Resolution, Step, WorldPoint, load_quest, load_snapshot};

fn main() -> Result<()> {
    env_logger::init();

    let quest_path = arg_or_default(1, "quest.ron");
    let state_path = arg_or_default(2, "state.ron");

    info!("Start: loading quest walkthrough...");
    let quest = load_quest(&quest_path).context("while loading quest walkthrough")?;
    info!("quest '{}' loaded successfully", quest.name);

    let state = load_snapshot(&state_path).context("while loading state snapshot")?;
    let config = Config::load(&data_path("config.toml"));

    println!("{}", quest.name.quest_title_style());
    println!(
        "{} progress {} / {}",
        "quest".section_style(),
        quest.progress(&state),
        quest.completion_value
    );

    match quest.current_step(&state) {
        Resolution::Complete => {
            println!("{}", "Walkthrough complete - nothing left to do.".step_done_style());
        },
        Resolution::Show(step) => render_step(step, &state, &config),
    }

    Ok(())
}

fn arg_or_default(position: usize, file_name: &str) -> PathBuf {
    env::args().nth(position).map_or_else(|| data_path(file_name), PathBuf::from)
}

fn render_step(step: &Step, state: &GameState, config: &Config) {
    println!("\n{}", step.text.step_style());

    if let Some(target) = &step.target {
        let described = match target {
            StepTarget::Npc { npc, tile } => format!("NPC {npc}{}", tile_suffix(tile.as_ref())),
            StepTarget::Object { object, tile } => format!("object {object}{}", tile_suffix(tile.as_ref())),
            StepTarget::Tile(tile) => format!("tile ({}, {}, {})", tile.x, tile.y, tile.plane),
        };
        println!("{} {described}", "target".section_style());
    }

    if !step.items.is_empty() {
        println!("{}", "items".section_style());
        for item in &step.items {
            let requirement = Requirement::Item(item.clone());
            let color = config.color_for(requirement.color_hint(state, config));
            println!("  {}", paint(&requirement.display_text(), color));
            if let Some(tooltip) = requirement.tooltip() {
                println!("    {}", tooltip.tooltip_style());
            }
        }
    }

    if !step.dialog_choices.is_empty() {
        println!("{}", "dialogue".section_style());
        for choice in &step.dialog_choices {
            println!("  {}", choice.dialog_choice_style());
        }
    }
}

fn tile_suffix(tile: Option<&WorldPoint>) -> String {
    tile.map_or(String::new(), |t| format!(" at ({}, {}, {})", t.x, t.y, t.plane))
}
