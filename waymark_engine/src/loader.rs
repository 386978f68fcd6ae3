//! Loader utilities for building runtime [`Quest`]s from serialized data.
//!
//! Walkthroughs are authored as `QuestDef` RON files. Loading validates the
//! definition first (malformed quests abort with one aggregated error rather
//! than failing predicate-by-predicate at runtime), then converts it into the
//! immutable runtime tree.

pub mod questdef;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use thiserror::Error;

use crate::quest::Quest;
use crate::state::GameState;
use waymark_data::QuestDef;

pub use questdef::{build_quest_from_def, load_questdef};

/// Errors produced while turning a `QuestDef` into a runtime [`Quest`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestBuildError {
    #[error("zone corners on different planes ({a} vs {b})")]
    ZonePlaneMismatch { a: i32, b: i32 },
    #[error("duplicate step entry for progress value {at}")]
    DuplicateStepEntry { at: i32 },
    #[error("quest '{name}' has no step entries")]
    NoSteps { name: String },
}

/// Load a quest walkthrough from a RON file.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, validation, or conversion.
pub fn load_quest(path: &Path) -> Result<Quest> {
    let def = load_questdef(path).context("while loading quest definition from file")?;
    validate_questdef(&def)?;
    let quest = build_quest_from_def(&def).context("while building quest from definition")?;
    info!("{} step entries added to quest '{}'", quest.step_count(), quest.name);
    Ok(quest)
}

/// Load a game-state snapshot from a RON file.
///
/// # Errors
/// - on unreadable or unparseable snapshot files
pub fn load_snapshot(path: &Path) -> Result<GameState> {
    let text = fs::read_to_string(path).with_context(|| format!("reading snapshot from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing snapshot RON from '{}'", path.display()))
}

/// Validate the QuestDef and return a single aggregated error.
fn validate_questdef(def: &QuestDef) -> Result<()> {
    let errors = waymark_data::validate_quest(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("quest definition validation failed:\n{details}");
}
