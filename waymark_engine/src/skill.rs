//! Player skills and consumable boost data.
//!
//! Skill checks compare against either the base level or (for boostable
//! requirements) the higher of base and currently-boosted level. The boost
//! table below records the largest gain ordinarily reachable with a consumable,
//! used only for advisory "you could boost to this" coloring.

use serde::{Deserialize, Serialize};

/// The gain available from the spicy-stew gamble when that mode is enabled.
const STEW_BOOST: u32 = 5;

/// The player skills a walkthrough can gate on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Skill {
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

impl Skill {
    pub fn name(self) -> &'static str {
        match self {
            Skill::Attack => "Attack",
            Skill::Strength => "Strength",
            Skill::Defence => "Defence",
            Skill::Ranged => "Ranged",
            Skill::Prayer => "Prayer",
            Skill::Magic => "Magic",
            Skill::Runecraft => "Runecraft",
            Skill::Hitpoints => "Hitpoints",
            Skill::Crafting => "Crafting",
            Skill::Mining => "Mining",
            Skill::Smithing => "Smithing",
            Skill::Fishing => "Fishing",
            Skill::Cooking => "Cooking",
            Skill::Firemaking => "Firemaking",
            Skill::Woodcutting => "Woodcutting",
            Skill::Agility => "Agility",
            Skill::Herblore => "Herblore",
            Skill::Thieving => "Thieving",
            Skill::Fletching => "Fletching",
            Skill::Slayer => "Slayer",
            Skill::Farming => "Farming",
            Skill::Construction => "Construction",
            Skill::Hunter => "Hunter",
        }
    }

    /// Largest level gain reachable with an ordinary consumable for this skill.
    fn consumable_boost(self) -> u32 {
        match self {
            Skill::Attack | Skill::Strength | Skill::Defence => 3,
            Skill::Ranged | Skill::Magic | Skill::Crafting | Skill::Herblore | Skill::Fletching => 4,
            Skill::Prayer | Skill::Runecraft | Skill::Hitpoints => 0,
            Skill::Mining | Skill::Thieving => 2,
            Skill::Smithing => 1,
            Skill::Fishing | Skill::Cooking | Skill::Firemaking | Skill::Agility | Skill::Slayer => 5,
            Skill::Woodcutting | Skill::Farming | Skill::Construction | Skill::Hunter => 3,
        }
    }

    /// Highest boost to consider for advisory checks.
    ///
    /// With `stew_boosts` enabled, skills whose ordinary consumable falls short
    /// of the stew gamble are credited the stew's gain instead -- except skills
    /// with no boost at all, which stay unboostable.
    pub fn highest_boost(self, stew_boosts: bool) -> u32 {
        let boost = self.consumable_boost();
        if stew_boosts && boost > 0 {
            boost.max(STEW_BOOST)
        } else {
            boost
        }
    }
}

/// Tri-state result of a boost-aware skill check, used for advisory coloring.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoostStatus {
    Pass,
    CanPassWithBoost,
    Fail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_names_match_variants() {
        assert_eq!(Skill::Fishing.name(), "Fishing");
        assert_eq!(Skill::Runecraft.name(), "Runecraft");
    }

    #[test]
    fn stew_boosts_raise_low_boost_skills() {
        assert_eq!(Skill::Smithing.highest_boost(false), 1);
        assert_eq!(Skill::Smithing.highest_boost(true), 5);
    }

    #[test]
    fn stew_boosts_never_lower_a_boost() {
        assert_eq!(Skill::Fishing.highest_boost(false), 5);
        assert_eq!(Skill::Fishing.highest_boost(true), 5);
    }

    #[test]
    fn unboostable_skills_stay_unboostable() {
        assert_eq!(Skill::Prayer.highest_boost(false), 0);
        assert_eq!(Skill::Prayer.highest_boost(true), 0);
    }

    #[test]
    fn skill_serde_uses_camel_case() {
        let json = serde_json::to_string(&Skill::Firemaking).unwrap();
        assert_eq!(json, "\"firemaking\"");
        let back: Skill = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Skill::Firemaking);
    }
}
