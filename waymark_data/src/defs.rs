use serde::{Deserialize, Serialize};

/// Numeric item id from the host game's data files.
pub type ItemId = u32;
/// Numeric NPC id from the host game's data files.
pub type NpcId = u32;
/// Numeric world-object id from the host game's data files.
pub type ObjectId = u32;
/// Numeric id of an external progress counter (varbit or varplayer).
pub type VarId = u32;

/// Top-level compiled walkthrough data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestDef {
    pub name: String,
    pub progress: VarRefDef,
    /// Progress value at (or beyond) which the quest counts as finished.
    pub completion_value: i32,
    #[serde(default)]
    pub steps: Vec<StepEntryDef>,
}

/// Reference to the external counter that tracks quest progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VarRefDef {
    pub kind: VarKindDef,
    pub id: VarId,
}

impl Default for VarRefDef {
    fn default() -> Self {
        Self {
            kind: VarKindDef::Varplayer,
            id: 0,
        }
    }
}

/// Which counter store a [`VarRefDef`] or var requirement reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VarKindDef {
    Varbit,
    Varplayer,
}

/// One entry in the progress-value -> step table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepEntryDef {
    pub at: i32,
    pub node: StepNodeDef,
}

/// A step table entry: either a plain instruction or a conditional dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepNodeDef {
    Step(StepDef),
    Conditional(ConditionalDef),
}

/// Conditional step definition with ordered branches and a mandatory default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalDef {
    #[serde(default)]
    pub branches: Vec<BranchDef>,
    pub default: Box<StepNodeDef>,
    /// When this evaluates true the whole node counts as already complete.
    #[serde(default)]
    pub lock: Option<RequirementExpr>,
}

/// A single (predicate, step) branch. Declaration order is the tie-break.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchDef {
    pub when: RequirementExpr,
    pub then: StepNodeDef,
}

/// Boolean expression tree over requirement leaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RequirementExpr {
    All(Vec<RequirementExpr>),
    Any(Vec<RequirementExpr>),
    Nor(Vec<RequirementExpr>),
    Not(Box<RequirementExpr>),
    Pred(RequirementDef),
}

impl Default for RequirementExpr {
    fn default() -> Self {
        RequirementExpr::All(Vec::new())
    }
}

/// Leaf predicates used by [`RequirementExpr`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementDef {
    Item(ItemReqDef),
    ItemOnTile {
        item: ItemId,
        #[serde(default)]
        tile: Option<PointDef>,
    },
    InZone {
        zones: Vec<ZoneDef>,
    },
    Var {
        kind: VarKindDef,
        id: VarId,
        value: i32,
        #[serde(default)]
        op: OperationDef,
    },
    SkillLevel {
        skill: SkillDef,
        level: u32,
        #[serde(default)]
        boostable: bool,
    },
    ChatMessage {
        text: String,
    },
    Dialog {
        #[serde(default)]
        speaker: Option<String>,
        text: String,
    },
    NpcInteracting {
        npc: NpcId,
    },
    WidgetText {
        group: u32,
        child: u32,
        text: String,
    },
}

/// Item possession requirement with display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemReqDef {
    pub name: String,
    pub item: ItemId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Other item ids accepted in place of `item`.
    #[serde(default)]
    pub alternates: Vec<ItemId>,
    /// Require the item to be worn rather than merely carried.
    #[serde(default)]
    pub equipped: bool,
    /// Count banked copies toward the required quantity.
    #[serde(default)]
    pub include_bank: bool,
    #[serde(default)]
    pub tooltip: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// Comparison operator for counter and level checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationDef {
    Equal,
    NotEqual,
    Greater,
    #[default]
    GreaterEqual,
    Less,
    LessEqual,
}

/// A tile coordinate in the game world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointDef {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub plane: i32,
}

/// An axis-aligned zone given as two opposite corners on the same plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDef {
    pub corner_a: PointDef,
    pub corner_b: PointDef,
}

/// Skill names accepted in walkthrough definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillDef {
    Attack,
    Strength,
    Defence,
    Ranged,
    Prayer,
    Magic,
    Runecraft,
    Hitpoints,
    Crafting,
    Mining,
    Smithing,
    Fishing,
    Cooking,
    Firemaking,
    Woodcutting,
    Agility,
    Herblore,
    Thieving,
    Fletching,
    Slayer,
    Farming,
    Construction,
    Hunter,
}

/// One instruction shown to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDef {
    pub text: String,
    #[serde(default)]
    pub target: Option<StepTargetDef>,
    /// Advisory item list rendered alongside the instruction; never gating.
    #[serde(default)]
    pub items: Vec<ItemReqDef>,
    /// Dialogue options to pick while following this step.
    #[serde(default)]
    pub dialog_choices: Vec<String>,
}

/// What the instruction points the player at.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StepTargetDef {
    Npc {
        npc: NpcId,
        #[serde(default)]
        tile: Option<PointDef>,
    },
    Object {
        object: ObjectId,
        #[serde(default)]
        tile: Option<PointDef>,
    },
    Tile {
        tile: PointDef,
    },
}
