//! Engine configuration and its TOML loader.
//!
//! Settings cover the advisory coloring of requirements and whether the
//! spicy-stew gamble counts when judging boostable skill gates. A missing or
//! unreadable config file falls back to the defaults so the engine never
//! refuses to start over presentation preferences.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::requirement::ColorHint;

/// An RGB color triple used for advisory requirement coloring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Runtime configuration for requirement evaluation and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Count the spicy-stew gamble when judging whether a skill gate is boostable.
    pub stew_boosts: bool,
    pub pass_color: Rgb,
    pub boost_color: Rgb,
    pub fail_color: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stew_boosts: false,
            pass_color: Rgb { r: 40, g: 200, b: 60 },
            boost_color: Rgb { r: 80, g: 130, b: 255 },
            fail_color: Rgb { r: 230, g: 30, b: 30 },
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load(path: &Path) -> Config {
        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => {
                    info!("engine config loaded from '{}'", path.display());
                    config
                },
                Err(e) => {
                    warn!("failed to parse config '{}': {e}; using defaults", path.display());
                    Config::default()
                },
            },
            Err(e) => {
                warn!("failed to read config '{}': {e}; using defaults", path.display());
                Config::default()
            },
        }
    }

    /// Map an advisory hint to its configured color.
    pub fn color_for(&self, hint: ColorHint) -> Rgb {
        match hint {
            ColorHint::Met => self.pass_color,
            ColorHint::Boostable => self.boost_color,
            ColorHint::Unmet => self.fail_color,
        }
    }
}
