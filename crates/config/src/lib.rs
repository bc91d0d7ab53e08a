use serde::{Deserialize, Serialize};
use std::fmt;

mod config_loader;
pub use config_loader::*;

/// Environment variable naming a JSON file that replaces the embedded
/// configuration.
pub const CONFIG_PATH_ENV: &str = "APP_CONFIG_PATH";

/// What a removal mutation does to the backing collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletionMode {
    /// The record is dropped from the store and later reads no longer see it.
    #[default]
    Persist,
    /// A filtered copy is returned and the store keeps the record.
    Detached,
}

/// How strictly `teaches` has to point at an existing `coursecode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePolicy {
    #[default]
    Unchecked,
    Enforced,
}

impl fmt::Display for DeletionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persist => f.write_str("persist"),
            Self::Detached => f.write_str("detached"),
        }
    }
}

impl fmt::Display for ReferencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchecked => f.write_str("unchecked"),
            Self::Enforced => f.write_str("enforced"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub seed: bool,
    #[serde(default)]
    pub deletion: DeletionMode,
    #[serde(default)]
    pub references: ReferencePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: true,
            deletion: DeletionMode::default(),
            references: ReferencePolicy::default(),
        }
    }
}
