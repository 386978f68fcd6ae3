#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const WAYMARK_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod conditions;
pub mod config;
pub mod data_paths;
pub mod loader;
pub mod quest;
pub mod requirement;
pub mod skill;
pub mod state;
pub mod step;
pub mod style;
pub mod zone;

// Re-exports for convenience
pub use conditions::{Conditions, LogicType};
pub use config::Config;
pub use loader::{load_quest, load_snapshot};
pub use quest::{Quest, VarRef};
pub use requirement::{ColorHint, ItemRequirement, Operation, Requirement, SkillRequirement};
pub use skill::{BoostStatus, Skill};
pub use state::{GameState, VarKind};
pub use step::{ConditionalStep, Resolution, Step, StepNode};
pub use waymark_data::{ItemId, NpcId, ObjectId, VarId};
pub use zone::{WorldPoint, Zone};
