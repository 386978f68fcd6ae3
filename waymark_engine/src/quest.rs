//! Quest module --
//!
//! A quest walkthrough is a table of step nodes keyed by the value of an
//! external progress counter. Dispatch is an exact key match: the host game
//! bumps the counter as the quest advances, and each recorded value owns the
//! node that tells the player what to do at that stage.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::state::{GameState, VarKind};
use crate::step::{Resolution, StepNode};
use waymark_data::VarId;

/// Reference to the external counter that tracks quest progress.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarRef {
    pub kind: VarKind,
    pub id: VarId,
}

/// A named walkthrough: progress-keyed step table plus a completion threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub name: String,
    pub progress: VarRef,
    pub completion_value: i32,
    steps: BTreeMap<i32, StepNode>,
}

impl Quest {
    pub fn new(name: impl Into<String>, progress: VarRef, completion_value: i32) -> Quest {
        Quest {
            name: name.into(),
            progress,
            completion_value,
            steps: BTreeMap::new(),
        }
    }

    /// Record the node to show while the progress counter reads `at`.
    /// Replacing an existing entry is almost certainly an authoring slip, so it warns.
    pub fn set_step(&mut self, at: i32, node: impl Into<StepNode>) {
        if self.steps.insert(at, node.into()).is_some() {
            warn!("quest '{}' replaced step entry at progress value {at}", self.name);
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Current value of the progress counter; an unreported counter reads 0
    /// (the quest hasn't visibly started).
    pub fn progress(&self, state: &GameState) -> i32 {
        state.var(self.progress.kind, self.progress.id).unwrap_or(0)
    }

    pub fn is_complete(&self, state: &GameState) -> bool {
        self.progress(state) >= self.completion_value
    }

    /// The node for the current progress value.
    ///
    /// An unrecorded value past the completion threshold means the quest is
    /// done and there is nothing to show. An unrecorded value before it means
    /// the table has a gap; the earliest node is the safest thing to present.
    pub fn current_node(&self, state: &GameState) -> Option<&StepNode> {
        let progress = self.progress(state);
        if let Some(node) = self.steps.get(&progress) {
            return Some(node);
        }
        if progress >= self.completion_value {
            return None;
        }
        warn!(
            "quest '{}' has no step entry for progress value {progress}; falling back to earliest",
            self.name
        );
        self.steps.values().next()
    }

    /// Resolve the instruction to present for this snapshot.
    pub fn current_step<'a>(&'a self, state: &GameState) -> Resolution<'a> {
        match self.current_node(state) {
            Some(node) => node.resolve(state),
            None => Resolution::Complete,
        }
    }
}
