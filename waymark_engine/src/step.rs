//! Step module --
//!
//! Instruction nodes and the conditional resolver that projects a requirement
//! tree onto the single step to present for the current snapshot. Trees are
//! assembled once at load time and only read afterward; resolution is a fresh
//! walk per query, so an unchanged snapshot always resolves the same way.

use serde::{Deserialize, Serialize};
use variantly::Variantly;

use crate::requirement::{ItemRequirement, Requirement};
use crate::state::GameState;
use crate::zone::WorldPoint;
use waymark_data::{NpcId, ObjectId};

/// What an instruction points the player at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StepTarget {
    Npc { npc: NpcId, tile: Option<WorldPoint> },
    Object { object: ObjectId, tile: Option<WorldPoint> },
    Tile(WorldPoint),
}

/// One instruction shown to the player.
///
/// The item list is advisory display material, never enforced; dialogue
/// choices are the options to pick while following this step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub text: String,
    pub target: Option<StepTarget>,
    pub items: Vec<ItemRequirement>,
    pub dialog_choices: Vec<String>,
}

impl Step {
    pub fn new(text: impl Into<String>) -> Step {
        Step {
            text: text.into(),
            target: None,
            items: Vec::new(),
            dialog_choices: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: StepTarget) -> Step {
        self.target = Some(target);
        self
    }

    pub fn with_items(mut self, items: Vec<ItemRequirement>) -> Step {
        self.items = items;
        self
    }

    pub fn with_dialog_choices(mut self, choices: Vec<String>) -> Step {
        self.dialog_choices = choices;
        self
    }
}

/// A node in the step tree: a plain instruction or a nested dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize, Variantly)]
pub enum StepNode {
    Single(Step),
    Conditional(Box<ConditionalStep>),
}

impl StepNode {
    pub fn resolve<'a>(&'a self, state: &GameState) -> Resolution<'a> {
        match self {
            StepNode::Single(step) => Resolution::Show(step),
            StepNode::Conditional(conditional) => conditional.resolve(state),
        }
    }
}

impl From<Step> for StepNode {
    fn from(step: Step) -> StepNode {
        StepNode::Single(step)
    }
}

impl From<ConditionalStep> for StepNode {
    fn from(conditional: ConditionalStep) -> StepNode {
        StepNode::Conditional(Box::new(conditional))
    }
}

/// Outcome of resolving a step node against a snapshot.
#[derive(Debug, Copy, Clone)]
pub enum Resolution<'a> {
    /// The node's locking condition (or an inner node's) marks it already done.
    Complete,
    /// The instruction to present.
    Show(&'a Step),
}

impl<'a> Resolution<'a> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Resolution::Complete)
    }

    pub fn step(&self) -> Option<&'a Step> {
        match self {
            Resolution::Complete => None,
            Resolution::Show(step) => Some(step),
        }
    }
}

/// Prioritized first-match dispatch over (requirement, step) pairs.
///
/// Branches are checked in the order they were added; the first whose
/// requirement holds wins even when later ones would also hold. When none
/// hold, the default step applies, so resolution always produces an outcome.
/// A locking condition is checked before any branch: when it holds, the whole
/// node is already complete and no branch is consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalStep {
    branches: Vec<(Requirement, StepNode)>,
    default: StepNode,
    lock: Option<Requirement>,
}

impl ConditionalStep {
    pub fn new(default: impl Into<StepNode>) -> ConditionalStep {
        ConditionalStep {
            branches: Vec::new(),
            default: default.into(),
            lock: None,
        }
    }

    /// Append a branch. Order of calls is the dispatch priority.
    pub fn add_step(&mut self, when: impl Into<Requirement>, then: impl Into<StepNode>) {
        self.branches.push((when.into(), then.into()));
    }

    /// Builder-flavored [`ConditionalStep::add_step`].
    pub fn with_step(mut self, when: impl Into<Requirement>, then: impl Into<StepNode>) -> ConditionalStep {
        self.add_step(when, then);
        self
    }

    /// Mark the whole node complete whenever `lock` holds.
    pub fn lock_when(mut self, lock: impl Into<Requirement>) -> ConditionalStep {
        self.lock = Some(lock.into());
        self
    }

    /// Pick the step to present for this snapshot.
    pub fn resolve<'a>(&'a self, state: &GameState) -> Resolution<'a> {
        if let Some(lock) = &self.lock
            && lock.check(state)
        {
            return Resolution::Complete;
        }
        for (when, then) in &self.branches {
            if when.check(state) {
                return then.resolve(state);
            }
        }
        self.default.resolve(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirement::ChatMessageRequirement;

    fn chat_req(text: &str) -> Requirement {
        Requirement::ChatMessage(ChatMessageRequirement { text: text.into() })
    }

    fn state_with_chat(lines: &[&str]) -> GameState {
        let mut state = GameState::new_empty();
        state.chat_log = lines.iter().map(|line| (*line).to_string()).collect();
        state
    }

    fn resolved_text<'a>(resolution: &Resolution<'a>) -> &'a str {
        resolution.step().map(|s| s.text.as_str()).unwrap_or("<complete>")
    }

    #[test]
    fn first_true_branch_wins_in_declaration_order() {
        let node = ConditionalStep::new(Step::new("S0"))
            .with_step(chat_req("never"), Step::new("S1"))
            .with_step(chat_req("seen"), Step::new("S2"))
            .with_step(chat_req("seen"), Step::new("S3"));
        let state = state_with_chat(&["seen"]);
        assert_eq!(resolved_text(&node.resolve(&state)), "S2");
    }

    #[test]
    fn no_matching_branch_falls_back_to_default() {
        let node = ConditionalStep::new(Step::new("S0")).with_step(chat_req("never"), Step::new("S1"));
        let state = GameState::new_empty();
        assert_eq!(resolved_text(&node.resolve(&state)), "S0");
    }

    #[test]
    fn lock_short_circuits_every_branch() {
        let node = ConditionalStep::new(Step::new("S0"))
            .with_step(chat_req("seen"), Step::new("S1"))
            .lock_when(chat_req("done"));
        let state = state_with_chat(&["seen", "done"]);
        assert!(node.resolve(&state).is_complete());
    }

    #[test]
    fn unsatisfied_lock_leaves_branches_active() {
        let node = ConditionalStep::new(Step::new("S0"))
            .with_step(chat_req("seen"), Step::new("S1"))
            .lock_when(chat_req("done"));
        let state = state_with_chat(&["seen"]);
        assert_eq!(resolved_text(&node.resolve(&state)), "S1");
    }

    #[test]
    fn nested_conditional_resolves_recursively() {
        let inner = ConditionalStep::new(Step::new("inner-default")).with_step(chat_req("deep"), Step::new("inner-hit"));
        let outer = ConditionalStep::new(Step::new("outer-default")).with_step(chat_req("seen"), inner);
        let state = state_with_chat(&["seen", "deep"]);
        assert_eq!(resolved_text(&outer.resolve(&state)), "inner-hit");
        let state = state_with_chat(&["seen"]);
        assert_eq!(resolved_text(&outer.resolve(&state)), "inner-default");
    }

    #[test]
    fn locked_inner_node_propagates_complete() {
        let inner = ConditionalStep::new(Step::new("inner-default")).lock_when(chat_req("done"));
        let outer = ConditionalStep::new(Step::new("outer-default")).with_step(chat_req("seen"), inner);
        let state = state_with_chat(&["seen", "done"]);
        assert!(outer.resolve(&state).is_complete());
    }

    #[test]
    fn resolution_is_idempotent_for_an_unchanged_snapshot() {
        let node = ConditionalStep::new(Step::new("S0"))
            .with_step(chat_req("a"), Step::new("S1"))
            .with_step(chat_req("b"), Step::new("S2"));
        let state = state_with_chat(&["b"]);
        let first = resolved_text(&node.resolve(&state)).to_string();
        let second = resolved_text(&node.resolve(&state)).to_string();
        assert_eq!(first, second);
        assert_eq!(first, "S2");
    }

    #[test]
    fn step_builder_collects_display_material() {
        let step = Step::new("Talk to the guard.")
            .with_target(StepTarget::Npc {
                npc: 3080,
                tile: Some(WorldPoint::new(2897, 3565, 0)),
            })
            .with_items(vec![ItemRequirement::new("Bread", 2309).with_quantity(10)])
            .with_dialog_choices(vec!["I'll help you.".into()]);
        assert_eq!(step.items.len(), 1);
        assert_eq!(step.dialog_choices.len(), 1);
        assert!(step.target.is_some());
    }

    #[test]
    fn step_node_variant_helpers() {
        let node: StepNode = Step::new("S0").into();
        assert!(node.is_single());
        let node: StepNode = ConditionalStep::new(Step::new("S0")).into();
        assert!(node.is_conditional());
    }
}
