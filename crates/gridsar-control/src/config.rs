//! Controller configuration loading and typed config structure.
//!
//! The scenario manager writes one YAML file per run describing the human
//! agent's interaction ranges, the experiment condition, and the
//! keypress-to-action map. This module defines a strongly-typed struct
//! mirroring that YAML and a loader that reads and validates the file.
//! Every field has a default matching the scenario defaults, so a partial
//! file (or none at all) yields a usable baseline configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use gridsar_types::{ActionType, Condition};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Complete configuration for one human-agent controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ControllerConfig {
    /// Maximum pick-up distance.
    #[serde(default = "default_range")]
    pub grab_range: u32,

    /// Maximum drop distance.
    #[serde(default = "default_range")]
    pub drop_range: u32,

    /// Maximum door open/close distance.
    #[serde(default = "default_range")]
    pub door_range: u32,

    /// Maximum obstacle removal distance.
    #[serde(default = "default_range")]
    pub remove_range: u32,

    /// Maximum number of objects carried at once.
    #[serde(default = "default_max_carry")]
    pub max_carry_objects: u32,

    /// The experiment arm this run belongs to.
    #[serde(default)]
    pub condition: Condition,

    /// The actions this agent is allowed to perform.
    ///
    /// Context menus enumerate exactly this set.
    #[serde(default = "default_action_set")]
    pub action_set: Vec<ActionType>,

    /// Keypress token to action mapping.
    ///
    /// Fixed at initialization; immutable during a run. Keys use the
    /// browser's `KeyboardEvent.key` values (`ArrowUp`, `q`, ...).
    #[serde(default)]
    pub key_action_map: BTreeMap<String, ActionType>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            grab_range: default_range(),
            drop_range: default_range(),
            door_range: default_range(),
            remove_range: default_range(),
            max_carry_objects: default_max_carry(),
            condition: Condition::default(),
            action_set: default_action_set(),
            key_action_map: BTreeMap::new(),
        }
    }
}

impl ControllerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content does not parse.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&text)?)
    }
}

const fn default_range() -> u32 {
    1
}

const fn default_max_carry() -> u32 {
    1
}

fn default_action_set() -> Vec<ActionType> {
    ActionType::ALL.to_vec()
}
