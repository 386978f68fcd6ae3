//! QuestDef loader and conversion helpers.
//!
//! Converts the serialized `QuestDef` data model into runtime engine structs.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use waymark_data::{
    ConditionalDef, ItemReqDef, OperationDef, PointDef, QuestDef, RequirementDef, RequirementExpr, SkillDef, StepDef,
    StepNodeDef, StepTargetDef, VarKindDef, VarRefDef, ZoneDef,
};

use crate::conditions::{Conditions, LogicType};
use crate::loader::QuestBuildError;
use crate::quest::{Quest, VarRef};
use crate::requirement::{
    ChatMessageRequirement, DialogRequirement, ItemOnTileRequirement, ItemRequirement, NpcInteractingRequirement,
    Operation, Requirement, SkillRequirement, VarRequirement, WidgetTextRequirement, ZoneRequirement,
};
use crate::skill::Skill;
use crate::state::VarKind;
use crate::step::{ConditionalStep, Step, StepNode, StepTarget};
use crate::zone::{WorldPoint, Zone};

/// Load a `QuestDef` from a RON file.
pub fn load_questdef(path: &Path) -> Result<QuestDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading quest definition from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing quest definition RON from '{}'", path.display()))
}

/// Convert a `QuestDef` into a runtime [`Quest`].
pub fn build_quest_from_def(def: &QuestDef) -> Result<Quest> {
    if def.steps.is_empty() {
        return Err(QuestBuildError::NoSteps { name: def.name.clone() }.into());
    }

    let mut quest = Quest::new(&def.name, var_ref_from_def(def.progress), def.completion_value);
    let mut seen_keys = HashSet::new();
    for entry in &def.steps {
        if !seen_keys.insert(entry.at) {
            return Err(QuestBuildError::DuplicateStepEntry { at: entry.at }.into());
        }
        let node = node_from_def(&entry.node).with_context(|| format!("in step entry at progress {}", entry.at))?;
        quest.set_step(entry.at, node);
    }
    Ok(quest)
}

fn var_ref_from_def(def: VarRefDef) -> VarRef {
    VarRef {
        kind: var_kind_from_def(def.kind),
        id: def.id,
    }
}

fn var_kind_from_def(def: VarKindDef) -> VarKind {
    match def {
        VarKindDef::Varbit => VarKind::Varbit,
        VarKindDef::Varplayer => VarKind::Varplayer,
    }
}

fn node_from_def(def: &StepNodeDef) -> Result<StepNode> {
    match def {
        StepNodeDef::Step(step) => Ok(StepNode::Single(step_from_def(step))),
        StepNodeDef::Conditional(conditional) => Ok(conditional_from_def(conditional)?.into()),
    }
}

fn conditional_from_def(def: &ConditionalDef) -> Result<ConditionalStep> {
    let mut node = ConditionalStep::new(node_from_def(&def.default)?);
    for branch in &def.branches {
        node.add_step(requirement_from_expr(&branch.when)?, node_from_def(&branch.then)?);
    }
    if let Some(lock) = &def.lock {
        node = node.lock_when(requirement_from_expr(lock)?);
    }
    Ok(node)
}

fn step_from_def(def: &StepDef) -> Step {
    let mut step = Step::new(&def.text);
    if let Some(target) = &def.target {
        step = step.with_target(target_from_def(target));
    }
    step.with_items(def.items.iter().map(item_req_from_def).collect())
        .with_dialog_choices(def.dialog_choices.clone())
}

fn target_from_def(def: &StepTargetDef) -> StepTarget {
    match def {
        StepTargetDef::Npc { npc, tile } => StepTarget::Npc {
            npc: *npc,
            tile: tile.map(point_from_def),
        },
        StepTargetDef::Object { object, tile } => StepTarget::Object {
            object: *object,
            tile: tile.map(point_from_def),
        },
        StepTargetDef::Tile { tile } => StepTarget::Tile(point_from_def(*tile)),
    }
}

/// Convert a requirement expression tree, bottom-up.
pub fn requirement_from_expr(expr: &RequirementExpr) -> Result<Requirement> {
    let requirement = match expr {
        RequirementExpr::All(children) => Conditions::all(children_from_defs(children)?).into(),
        RequirementExpr::Any(children) => Conditions::any(children_from_defs(children)?).into(),
        RequirementExpr::Nor(children) => Conditions::nor(children_from_defs(children)?).into(),
        RequirementExpr::Not(inner) => Conditions::all(vec![requirement_from_expr(inner)?]).negated().into(),
        RequirementExpr::Pred(pred) => requirement_from_def(pred)?,
    };
    Ok(requirement)
}

fn children_from_defs(defs: &[RequirementExpr]) -> Result<Vec<Requirement>> {
    defs.iter().map(requirement_from_expr).collect()
}

fn requirement_from_def(def: &RequirementDef) -> Result<Requirement> {
    let requirement = match def {
        RequirementDef::Item(item) => Requirement::Item(item_req_from_def(item)),
        RequirementDef::ItemOnTile { item, tile } => Requirement::ItemOnTile(ItemOnTileRequirement {
            item: *item,
            tile: tile.map(point_from_def),
        }),
        RequirementDef::InZone { zones } => {
            let zones = zones.iter().map(|z| zone_from_def(*z)).collect::<Result<Vec<_>>>()?;
            Requirement::Zones(ZoneRequirement::new(zones))
        },
        RequirementDef::Var { kind, id, value, op } => Requirement::Var(VarRequirement {
            kind: var_kind_from_def(*kind),
            id: *id,
            value: *value,
            op: operation_from_def(*op),
        }),
        RequirementDef::SkillLevel { skill, level, boostable } => Requirement::Skill(SkillRequirement {
            skill: skill_from_def(*skill),
            level: *level,
            boostable: *boostable,
        }),
        RequirementDef::ChatMessage { text } => Requirement::ChatMessage(ChatMessageRequirement { text: text.clone() }),
        RequirementDef::Dialog { speaker, text } => Requirement::Dialog(DialogRequirement {
            speaker: speaker.clone(),
            text: text.clone(),
        }),
        RequirementDef::NpcInteracting { npc } => Requirement::NpcInteracting(NpcInteractingRequirement { npc: *npc }),
        RequirementDef::WidgetText { group, child, text } => Requirement::WidgetText(WidgetTextRequirement {
            group: *group,
            child: *child,
            text: text.clone(),
        }),
    };
    Ok(requirement)
}

fn item_req_from_def(def: &ItemReqDef) -> ItemRequirement {
    ItemRequirement {
        name: def.name.clone(),
        item: def.item,
        quantity: def.quantity,
        alternates: def.alternates.clone(),
        equipped: def.equipped,
        include_bank: def.include_bank,
        tooltip: def.tooltip.clone(),
    }
}

fn zone_from_def(def: ZoneDef) -> Result<Zone> {
    if def.corner_a.plane != def.corner_b.plane {
        return Err(QuestBuildError::ZonePlaneMismatch {
            a: def.corner_a.plane,
            b: def.corner_b.plane,
        }
        .into());
    }
    Ok(Zone::new(point_from_def(def.corner_a), point_from_def(def.corner_b)))
}

fn point_from_def(def: PointDef) -> WorldPoint {
    WorldPoint::new(def.x, def.y, def.plane)
}

fn operation_from_def(def: OperationDef) -> Operation {
    match def {
        OperationDef::Equal => Operation::Equal,
        OperationDef::NotEqual => Operation::NotEqual,
        OperationDef::Greater => Operation::Greater,
        OperationDef::GreaterEqual => Operation::GreaterEqual,
        OperationDef::Less => Operation::Less,
        OperationDef::LessEqual => Operation::LessEqual,
    }
}

fn skill_from_def(def: SkillDef) -> Skill {
    match def {
        SkillDef::Attack => Skill::Attack,
        SkillDef::Strength => Skill::Strength,
        SkillDef::Defence => Skill::Defence,
        SkillDef::Ranged => Skill::Ranged,
        SkillDef::Prayer => Skill::Prayer,
        SkillDef::Magic => Skill::Magic,
        SkillDef::Runecraft => Skill::Runecraft,
        SkillDef::Hitpoints => Skill::Hitpoints,
        SkillDef::Crafting => Skill::Crafting,
        SkillDef::Mining => Skill::Mining,
        SkillDef::Smithing => Skill::Smithing,
        SkillDef::Fishing => Skill::Fishing,
        SkillDef::Cooking => Skill::Cooking,
        SkillDef::Firemaking => Skill::Firemaking,
        SkillDef::Woodcutting => Skill::Woodcutting,
        SkillDef::Agility => Skill::Agility,
        SkillDef::Herblore => Skill::Herblore,
        SkillDef::Thieving => Skill::Thieving,
        SkillDef::Fletching => Skill::Fletching,
        SkillDef::Slayer => Skill::Slayer,
        SkillDef::Farming => Skill::Farming,
        SkillDef::Construction => Skill::Construction,
        SkillDef::Hunter => Skill::Hunter,
    }
}
