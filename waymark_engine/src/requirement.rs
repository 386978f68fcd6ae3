//! Requirement module --
//!
//! Leaf predicates evaluated against a [`GameState`] snapshot, combined into
//! trees by [`Conditions`]. Every check is a pure function of the snapshot and
//! the requirement's own parameters; missing or unknown state fails closed
//! (the predicate reads false) so step resolution always has an answer.

use serde::{Deserialize, Serialize};

use crate::conditions::{Conditions, LogicType};
use crate::config::Config;
use crate::skill::{BoostStatus, Skill};
use crate::state::{GameState, VarKind};
use crate::zone::{WorldPoint, Zone};
use waymark_data::{ItemId, NpcId, VarId};

/// Comparison operator for counter and level checks.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Equal,
    NotEqual,
    Greater,
    #[default]
    GreaterEqual,
    Less,
    LessEqual,
}

impl Operation {
    pub fn apply(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Operation::Equal => lhs == rhs,
            Operation::NotEqual => lhs != rhs,
            Operation::Greater => lhs > rhs,
            Operation::GreaterEqual => lhs >= rhs,
            Operation::Less => lhs < rhs,
            Operation::LessEqual => lhs <= rhs,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Equal => "==",
            Operation::NotEqual => "!=",
            Operation::Greater => ">",
            Operation::GreaterEqual => ">=",
            Operation::Less => "<",
            Operation::LessEqual => "<=",
        }
    }
}

/// Advisory pass/fail coloring for a requirement against a snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorHint {
    Met,
    Boostable,
    Unmet,
}

/// Possession of an item, with display metadata.
///
/// By default the item counts whether carried or worn; `equipped` restricts
/// the count to worn copies, and `include_bank` adds banked copies. Any id in
/// `alternates` counts the same as the primary id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequirement {
    pub name: String,
    pub item: ItemId,
    pub quantity: u32,
    pub alternates: Vec<ItemId>,
    pub equipped: bool,
    pub include_bank: bool,
    pub tooltip: Option<String>,
}

impl ItemRequirement {
    pub fn new(name: impl Into<String>, item: ItemId) -> ItemRequirement {
        ItemRequirement {
            name: name.into(),
            item,
            quantity: 1,
            alternates: Vec::new(),
            equipped: false,
            include_bank: false,
            tooltip: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> ItemRequirement {
        self.quantity = quantity;
        self
    }

    pub fn with_alternates(mut self, alternates: Vec<ItemId>) -> ItemRequirement {
        self.alternates = alternates;
        self
    }

    /// Require the item to be worn rather than merely carried.
    pub fn worn(mut self) -> ItemRequirement {
        self.equipped = true;
        self
    }

    /// Count banked copies toward the required quantity.
    pub fn also_check_bank(mut self) -> ItemRequirement {
        self.include_bank = true;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> ItemRequirement {
        self.tooltip = Some(tooltip.into());
        self
    }

    fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        std::iter::once(self.item).chain(self.alternates.iter().copied())
    }

    pub fn check(&self, state: &GameState) -> bool {
        let total: u32 = self
            .ids()
            .map(|id| {
                if self.equipped {
                    state.equipment_count(id)
                } else {
                    let carried = state.inventory_count(id) + state.equipment_count(id);
                    if self.include_bank {
                        carried + state.bank_count(id)
                    } else {
                        carried
                    }
                }
            })
            .sum();
        total >= self.quantity
    }

    pub fn display_text(&self) -> String {
        let mut text = self.name.clone();
        if self.quantity > 1 {
            text.push_str(&format!(" x{}", self.quantity));
        }
        if self.equipped {
            text.push_str(" (equipped)");
        }
        text
    }
}

/// A ground item of the given id, anywhere or on one exact tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemOnTileRequirement {
    pub item: ItemId,
    pub tile: Option<WorldPoint>,
}

/// Player position inside any of a list of zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRequirement {
    pub zones: Vec<Zone>,
}

impl ZoneRequirement {
    pub fn new(zones: Vec<Zone>) -> ZoneRequirement {
        ZoneRequirement { zones }
    }

    pub fn check(&self, state: &GameState) -> bool {
        self.zones.iter().any(|zone| zone.contains(state.position))
    }
}

/// An external counter compared against a fixed value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VarRequirement {
    pub kind: VarKind,
    pub id: VarId,
    pub value: i32,
    pub op: Operation,
}

impl VarRequirement {
    pub fn check(&self, state: &GameState) -> bool {
        state
            .var(self.kind, self.id)
            .is_some_and(|current| self.op.apply(current, self.value))
    }
}

/// A skill level gate, optionally satisfiable through temporary boosts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: Skill,
    pub level: u32,
    pub boostable: bool,
}

impl SkillRequirement {
    pub fn new(skill: Skill, level: u32) -> SkillRequirement {
        SkillRequirement {
            skill,
            level,
            boostable: false,
        }
    }

    pub fn boostable(mut self) -> SkillRequirement {
        self.boostable = true;
        self
    }

    pub fn check(&self, state: &GameState) -> bool {
        let Some(levels) = state.skill(self.skill) else {
            return false;
        };
        let effective = if self.boostable {
            levels.boosted.max(levels.base)
        } else {
            levels.base
        };
        effective >= self.level
    }

    /// Boost-aware advisory check: could the player pass right now, pass after
    /// drinking/eating something, or not at all? Never used for gating.
    pub fn boost_status(&self, state: &GameState, config: &Config) -> BoostStatus {
        if self.check(state) {
            return BoostStatus::Pass;
        }
        if !self.boostable {
            return BoostStatus::Fail;
        }
        let Some(levels) = state.skill(self.skill) else {
            return BoostStatus::Fail;
        };
        let reachable = levels.base + self.skill.highest_boost(config.stew_boosts);
        if reachable >= self.level {
            BoostStatus::CanPassWithBoost
        } else {
            BoostStatus::Fail
        }
    }

    pub fn display_text(&self) -> String {
        let mut text = format!("{} {}", self.level, self.skill.name());
        if self.boostable {
            text.push_str(" (boostable)");
        }
        text
    }
}

/// A message seen in the rolling chat log (substring match).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageRequirement {
    pub text: String,
}

/// The dialogue line currently on screen. Speaker matches exactly when given;
/// the text matches as a substring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogRequirement {
    pub speaker: Option<String>,
    pub text: String,
}

impl DialogRequirement {
    pub fn check(&self, state: &GameState) -> bool {
        let Some(dialog) = &state.dialog else {
            return false;
        };
        let speaker_ok = match &self.speaker {
            Some(wanted) => dialog.speaker.as_deref() == Some(wanted.as_str()),
            None => true,
        };
        speaker_ok && dialog.text.contains(&self.text)
    }
}

/// An NPC of the given id currently interacting with the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NpcInteractingRequirement {
    pub npc: NpcId,
}

/// A widget showing exactly the given text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetTextRequirement {
    pub group: u32,
    pub child: u32,
    pub text: String,
}

impl WidgetTextRequirement {
    pub fn check(&self, state: &GameState) -> bool {
        state.widget_text(self.group, self.child) == Some(self.text.as_str())
    }
}

/// A displayable boolean predicate over the current game state.
///
/// The variant set is closed on purpose: walkthroughs only ever need these
/// kinds of checks, and exhaustive matching catches a missed case at compile
/// time when one is added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Requirement {
    Item(ItemRequirement),
    ItemOnTile(ItemOnTileRequirement),
    Zones(ZoneRequirement),
    Var(VarRequirement),
    Skill(SkillRequirement),
    ChatMessage(ChatMessageRequirement),
    Dialog(DialogRequirement),
    NpcInteracting(NpcInteractingRequirement),
    WidgetText(WidgetTextRequirement),
    Compound(Conditions),
}

impl Requirement {
    /// Evaluate against the snapshot. Pure; never mutates; fails closed.
    pub fn check(&self, state: &GameState) -> bool {
        match self {
            Requirement::Item(req) => req.check(state),
            Requirement::ItemOnTile(req) => state.ground_item_present(req.item, req.tile),
            Requirement::Zones(req) => req.check(state),
            Requirement::Var(req) => req.check(state),
            Requirement::Skill(req) => req.check(state),
            Requirement::ChatMessage(req) => state.chat_contains(&req.text),
            Requirement::Dialog(req) => req.check(state),
            Requirement::NpcInteracting(req) => state.npc_interacting(req.npc),
            Requirement::WidgetText(req) => req.check(state),
            Requirement::Compound(conditions) => conditions.check(state),
        }
    }

    /// Short human-readable label for advisory display.
    pub fn display_text(&self) -> String {
        match self {
            Requirement::Item(req) => req.display_text(),
            Requirement::ItemOnTile(req) => format!("item {} on the ground", req.item),
            Requirement::Zones(_) => "in the target area".to_string(),
            Requirement::Var(req) => format!("counter {} {} {}", req.id, req.op.symbol(), req.value),
            Requirement::Skill(req) => req.display_text(),
            Requirement::ChatMessage(req) => format!("message seen: \"{}\"", req.text),
            Requirement::Dialog(req) => format!("dialogue seen: \"{}\"", req.text),
            Requirement::NpcInteracting(req) => format!("talking to NPC {}", req.npc),
            Requirement::WidgetText(req) => format!("interface shows \"{}\"", req.text),
            Requirement::Compound(conditions) => {
                let glue = match conditions.logic {
                    LogicType::And => " and ",
                    LogicType::Or => " or ",
                    LogicType::Nor => " nor ",
                };
                let body = conditions
                    .children
                    .iter()
                    .map(Requirement::display_text)
                    .collect::<Vec<_>>()
                    .join(glue);
                if conditions.negated { format!("not ({body})") } else { body }
            },
        }
    }

    /// Extra advisory detail, when the requirement carries any.
    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Requirement::Item(req) => req.tooltip.as_deref(),
            _ => None,
        }
    }

    /// Advisory coloring: met, unmet, or (for boostable skill gates) passable
    /// with a consumable boost.
    pub fn color_hint(&self, state: &GameState, config: &Config) -> ColorHint {
        if self.check(state) {
            return ColorHint::Met;
        }
        if let Requirement::Skill(req) = self
            && req.boost_status(state, config) == BoostStatus::CanPassWithBoost
        {
            return ColorHint::Boostable;
        }
        ColorHint::Unmet
    }
}

impl From<ItemRequirement> for Requirement {
    fn from(req: ItemRequirement) -> Requirement {
        Requirement::Item(req)
    }
}

impl From<ZoneRequirement> for Requirement {
    fn from(req: ZoneRequirement) -> Requirement {
        Requirement::Zones(req)
    }
}

impl From<VarRequirement> for Requirement {
    fn from(req: VarRequirement) -> Requirement {
        Requirement::Var(req)
    }
}

impl From<SkillRequirement> for Requirement {
    fn from(req: SkillRequirement) -> Requirement {
        Requirement::Skill(req)
    }
}

impl From<Conditions> for Requirement {
    fn from(conditions: Conditions) -> Requirement {
        Requirement::Compound(conditions)
    }
}
