//! Boolean composition of requirements.
//!
//! [`Conditions`] combines child requirements with AND/OR/NOR logic and an
//! optional negation applied after the operator. Trees are built bottom-up at
//! load time and never mutated afterward, so nesting is unrestricted and no
//! cycles can form.

use serde::{Deserialize, Serialize};

use crate::requirement::Requirement;
use crate::state::GameState;

/// Logic operator applied over a list of child requirements.
///
/// An empty child list evaluates to the operator's identity: `And` and `Nor`
/// are vacuously true, `Or` is false.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogicType {
    And,
    Or,
    Nor,
}

impl LogicType {
    /// Fold an iterator of child results with short-circuit semantics:
    /// `And` stops at the first false, `Or`/`Nor` at the first true.
    pub fn apply<I>(self, mut results: I) -> bool
    where
        I: Iterator<Item = bool>,
    {
        match self {
            LogicType::And => results.all(|passed| passed),
            LogicType::Or => results.any(|passed| passed),
            LogicType::Nor => !results.any(|passed| passed),
        }
    }
}

/// A composite requirement: children joined by a [`LogicType`], optionally negated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conditions {
    pub logic: LogicType,
    pub children: Vec<Requirement>,
    #[serde(default)]
    pub negated: bool,
}

impl Conditions {
    pub fn all(children: Vec<Requirement>) -> Conditions {
        Conditions {
            logic: LogicType::And,
            children,
            negated: false,
        }
    }

    pub fn any(children: Vec<Requirement>) -> Conditions {
        Conditions {
            logic: LogicType::Or,
            children,
            negated: false,
        }
    }

    pub fn nor(children: Vec<Requirement>) -> Conditions {
        Conditions {
            logic: LogicType::Nor,
            children,
            negated: false,
        }
    }

    /// Flip the negation flag, inverting the combined result.
    pub fn negated(mut self) -> Conditions {
        self.negated = !self.negated;
        self
    }

    /// Evaluate children in declaration order with short-circuiting, then
    /// apply the negation flag.
    pub fn check(&self, state: &GameState) -> bool {
        let combined = self.logic.apply(self.children.iter().map(|child| child.check(state)));
        if self.negated { !combined } else { combined }
    }
}
