//! Read-only snapshot of player and world state.
//!
//! This module defines [`GameState`], the immutable snapshot every requirement
//! is evaluated against. The host client captures one snapshot per refresh and
//! hands it to the resolver; nothing in this crate ever mutates it. Lookups
//! for data the snapshot doesn't carry fail closed (the caller sees "not
//! there"), so a sparse snapshot degrades to unmet requirements rather than
//! errors.

use std::collections::HashMap;

use log::info;
use serde::{Deserialize, Serialize};

use crate::skill::Skill;
use crate::zone::WorldPoint;
use waymark_data::{ItemId, NpcId, VarId};

/// Which counter store a var requirement reads from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VarKind {
    Varbit,
    Varplayer,
}

/// Base and currently-boosted level for one skill.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub base: u32,
    pub boosted: u32,
}

/// A nearby NPC as reported by the state provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyNpc {
    pub id: NpcId,
    pub position: WorldPoint,
    #[serde(default)]
    pub interacting_with_player: bool,
}

/// An item lying on the ground.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroundItem {
    pub item: ItemId,
    pub position: WorldPoint,
}

/// The dialogue line currently on screen, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DialogLine {
    pub speaker: Option<String>,
    pub text: String,
}

/// A piece of interface text, addressed by widget group and child id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetLine {
    pub group: u32,
    pub child: u32,
    pub text: String,
}

/// Everything the requirement engine can see about the current game moment.
///
/// Item containers map item id to total quantity across stacks. Counter maps
/// hold whichever varbits/varplayers the provider chose to report; absent ids
/// read as absent, not zero (requirements decide how to fail).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameState {
    pub position: WorldPoint,
    #[serde(default)]
    pub skills: HashMap<Skill, SkillLevel>,
    #[serde(default)]
    pub inventory: HashMap<ItemId, u32>,
    #[serde(default)]
    pub equipment: HashMap<ItemId, u32>,
    #[serde(default)]
    pub bank: HashMap<ItemId, u32>,
    #[serde(default)]
    pub varbits: HashMap<VarId, i32>,
    #[serde(default)]
    pub varplayers: HashMap<VarId, i32>,
    /// Rolling log of recent chat/game messages, oldest first.
    #[serde(default)]
    pub chat_log: Vec<String>,
    #[serde(default)]
    pub dialog: Option<DialogLine>,
    #[serde(default)]
    pub npcs: Vec<NearbyNpc>,
    #[serde(default)]
    pub ground_items: Vec<GroundItem>,
    #[serde(default)]
    pub widgets: Vec<WidgetLine>,
}

impl GameState {
    /// Create a new empty snapshot (origin position, nothing known).
    pub fn new_empty() -> GameState {
        let state = GameState::default();
        info!("new, empty GameState snapshot created");
        state
    }

    pub fn skill(&self, skill: Skill) -> Option<SkillLevel> {
        self.skills.get(&skill).copied()
    }

    pub fn var(&self, kind: VarKind, id: VarId) -> Option<i32> {
        match kind {
            VarKind::Varbit => self.varbits.get(&id).copied(),
            VarKind::Varplayer => self.varplayers.get(&id).copied(),
        }
    }

    pub fn inventory_count(&self, item: ItemId) -> u32 {
        self.inventory.get(&item).copied().unwrap_or(0)
    }

    pub fn equipment_count(&self, item: ItemId) -> u32 {
        self.equipment.get(&item).copied().unwrap_or(0)
    }

    pub fn bank_count(&self, item: ItemId) -> u32 {
        self.bank.get(&item).copied().unwrap_or(0)
    }

    /// Substring search over the rolling chat log.
    pub fn chat_contains(&self, text: &str) -> bool {
        self.chat_log.iter().any(|line| line.contains(text))
    }

    pub fn widget_text(&self, group: u32, child: u32) -> Option<&str> {
        self.widgets
            .iter()
            .find(|w| w.group == group && w.child == child)
            .map(|w| w.text.as_str())
    }

    /// True if an NPC of the given id is currently interacting with the player.
    pub fn npc_interacting(&self, npc: NpcId) -> bool {
        self.npcs.iter().any(|n| n.id == npc && n.interacting_with_player)
    }

    /// True if a ground item of the given id exists, optionally on one exact tile.
    pub fn ground_item_present(&self, item: ItemId, tile: Option<WorldPoint>) -> bool {
        self.ground_items
            .iter()
            .any(|g| g.item == item && tile.is_none_or(|t| g.position == t))
    }
}
