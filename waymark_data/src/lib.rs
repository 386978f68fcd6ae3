//! Shared data model for Waymark walkthrough content.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_quest};
