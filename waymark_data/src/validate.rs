use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed values in a QuestDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateStepKey { at: i32 },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateStepKey { at } => {
                write!(f, "duplicate step entry for progress value {at}")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate basic invariants in a QuestDef.
///
/// ```
/// use waymark_data::{QuestDef, StepDef, StepEntryDef, StepNodeDef, VarRefDef, validate_quest};
///
/// let quest = QuestDef {
///     name: "Demo".into(),
///     progress: VarRefDef::default(),
///     completion_value: 2,
///     steps: vec![StepEntryDef {
///         at: 0,
///         node: StepNodeDef::Step(StepDef {
///             text: "Talk to the guide.".into(),
///             target: None,
///             items: Vec::new(),
///             dialog_choices: Vec::new(),
///         }),
///     }],
/// };
/// assert!(validate_quest(&quest).is_empty());
/// ```
pub fn validate_quest(quest: &QuestDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if quest.name.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "quest name missing".to_string(),
        });
    }

    if quest.steps.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("quest '{}' has no step entries", quest.name),
        });
    }

    let mut seen_keys = HashSet::new();
    for entry in &quest.steps {
        if !seen_keys.insert(entry.at) {
            errors.push(ValidationError::DuplicateStepKey { at: entry.at });
        }
        check_node(&entry.node, &format!("step at progress {}", entry.at), &mut errors);
    }

    errors
}

fn check_node(node: &StepNodeDef, context: &str, errors: &mut Vec<ValidationError>) {
    match node {
        StepNodeDef::Step(step) => check_step(step, context, errors),
        StepNodeDef::Conditional(cond) => {
            for (i, branch) in cond.branches.iter().enumerate() {
                let branch_ctx = format!("{context} branch {i}");
                check_expr(&branch.when, &branch_ctx, errors);
                check_node(&branch.then, &branch_ctx, errors);
            }
            check_node(&cond.default, &format!("{context} default"), errors);
            if let Some(lock) = &cond.lock {
                check_expr(lock, &format!("{context} lock"), errors);
            }
        },
    }
}

fn check_step(step: &StepDef, context: &str, errors: &mut Vec<ValidationError>) {
    if step.text.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context} has empty instruction text"),
        });
    }
    for item in &step.items {
        check_item_req(item, context, errors);
    }
    for choice in &step.dialog_choices {
        if choice.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context} has empty dialog choice"),
            });
        }
    }
}

fn check_expr(expr: &RequirementExpr, context: &str, errors: &mut Vec<ValidationError>) {
    match expr {
        RequirementExpr::All(children) | RequirementExpr::Any(children) | RequirementExpr::Nor(children) => {
            for child in children {
                check_expr(child, context, errors);
            }
        },
        RequirementExpr::Not(inner) => check_expr(inner, context, errors),
        RequirementExpr::Pred(pred) => check_pred(pred, context, errors),
    }
}

fn check_pred(pred: &RequirementDef, context: &str, errors: &mut Vec<ValidationError>) {
    match pred {
        RequirementDef::Item(item) => check_item_req(item, context, errors),
        RequirementDef::InZone { zones } => {
            if zones.is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} zone requirement lists no zones"),
                });
            }
            for zone in zones {
                if zone.corner_a.plane != zone.corner_b.plane {
                    errors.push(ValidationError::InvalidValue {
                        context: format!(
                            "{context} zone corners on different planes ({} vs {})",
                            zone.corner_a.plane, zone.corner_b.plane
                        ),
                    });
                }
            }
        },
        RequirementDef::SkillLevel { level, .. } => {
            if !(1..=126).contains(level) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} skill level out of range ({level})"),
                });
            }
        },
        RequirementDef::ChatMessage { text } | RequirementDef::WidgetText { text, .. } => {
            if text.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} has empty match text"),
                });
            }
        },
        RequirementDef::Dialog { text, .. } => {
            if text.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context} has empty dialogue match text"),
                });
            }
        },
        RequirementDef::ItemOnTile { .. } | RequirementDef::Var { .. } | RequirementDef::NpcInteracting { .. } => {},
    }
}

fn check_item_req(item: &ItemReqDef, context: &str, errors: &mut Vec<ValidationError>) {
    if item.name.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context} item requirement missing display name"),
        });
    }
    if item.quantity == 0 {
        errors.push(ValidationError::InvalidValue {
            context: format!("{context} item '{}' requires zero quantity", item.name),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_step(text: &str) -> StepNodeDef {
        StepNodeDef::Step(StepDef {
            text: text.into(),
            target: None,
            items: Vec::new(),
            dialog_choices: Vec::new(),
        })
    }

    fn minimal_quest() -> QuestDef {
        QuestDef {
            name: "Test Quest".into(),
            progress: VarRefDef::default(),
            completion_value: 1,
            steps: vec![StepEntryDef {
                at: 0,
                node: plain_step("Do the thing."),
            }],
        }
    }

    #[test]
    fn minimal_quest_validates_clean() {
        assert!(validate_quest(&minimal_quest()).is_empty());
    }

    #[test]
    fn missing_name_is_flagged() {
        let mut quest = minimal_quest();
        quest.name = "  ".into();
        let errors = validate_quest(&quest);
        assert!(errors.iter().any(|e| matches!(e, ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn empty_step_table_is_flagged() {
        let mut quest = minimal_quest();
        quest.steps.clear();
        assert!(!validate_quest(&quest).is_empty());
    }

    #[test]
    fn duplicate_step_keys_are_flagged() {
        let mut quest = minimal_quest();
        quest.steps.push(StepEntryDef {
            at: 0,
            node: plain_step("Do the other thing."),
        });
        let errors = validate_quest(&quest);
        assert!(errors.contains(&ValidationError::DuplicateStepKey { at: 0 }));
    }

    #[test]
    fn empty_step_text_is_flagged() {
        let mut quest = minimal_quest();
        quest.steps[0].node = plain_step("");
        assert!(!validate_quest(&quest).is_empty());
    }

    #[test]
    fn zone_plane_mismatch_is_flagged() {
        let mut quest = minimal_quest();
        quest.steps[0].node = StepNodeDef::Conditional(ConditionalDef {
            branches: vec![BranchDef {
                when: RequirementExpr::Pred(RequirementDef::InZone {
                    zones: vec![ZoneDef {
                        corner_a: PointDef { x: 0, y: 0, plane: 0 },
                        corner_b: PointDef { x: 5, y: 5, plane: 1 },
                    }],
                }),
                then: plain_step("Inside."),
            }],
            default: Box::new(plain_step("Outside.")),
            lock: None,
        });
        let errors = validate_quest(&quest);
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, ValidationError::InvalidValue { context } if context.contains("planes")))
        );
    }

    #[test]
    fn skill_level_out_of_range_is_flagged() {
        let mut quest = minimal_quest();
        quest.steps[0].node = StepNodeDef::Conditional(ConditionalDef {
            branches: vec![BranchDef {
                when: RequirementExpr::Pred(RequirementDef::SkillLevel {
                    skill: SkillDef::Fishing,
                    level: 0,
                    boostable: false,
                }),
                then: plain_step("Fish."),
            }],
            default: Box::new(plain_step("Train.")),
            lock: None,
        });
        assert!(!validate_quest(&quest).is_empty());
    }

    #[test]
    fn zero_quantity_item_is_flagged() {
        let mut quest = minimal_quest();
        quest.steps[0].node = StepNodeDef::Step(StepDef {
            text: "Bring the rope.".into(),
            target: None,
            items: vec![ItemReqDef {
                name: "Rope".into(),
                item: 954,
                quantity: 0,
                alternates: Vec::new(),
                equipped: false,
                include_bank: false,
                tooltip: None,
            }],
            dialog_choices: Vec::new(),
        });
        assert!(!validate_quest(&quest).is_empty());
    }

    #[test]
    fn nested_conditionals_are_walked() {
        let mut quest = minimal_quest();
        quest.steps[0].node = StepNodeDef::Conditional(ConditionalDef {
            branches: Vec::new(),
            default: Box::new(StepNodeDef::Conditional(ConditionalDef {
                branches: Vec::new(),
                default: Box::new(plain_step("")),
                lock: None,
            })),
            lock: None,
        });
        assert!(!validate_quest(&quest).is_empty());
    }
}
