//! Finder configuration.
//!
//! Settings come from an optional YAML file:
//!
//! ```yaml
//! catalog: death_and_co_categorical_recipes.tsv
//! search_dirs: [".", "/usr/share/cocktails"]
//! groups: [syrup, bitters, whiskey]
//! ```
//!
//! Every key is optional. Group labels are title-cased on load and keep the
//! order given, which is also their matching priority.

use crate::model::{default_groups, title_case};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "COCKTAIL_FINDER_CONFIG";

/// Catalog file looked up when none is configured.
pub const DEFAULT_CATALOG: &str = "death_and_co_categorical_recipes.tsv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Config must declare at least one ingredient group")]
    EmptyGroups,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    /// Catalog file name or path
    pub catalog: Utf8PathBuf,
    /// Directories searched for a relative catalog, in order
    pub search_dirs: Vec<Utf8PathBuf>,
    /// Ingredient groups in priority order
    pub groups: Vec<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            catalog: Utf8PathBuf::from(DEFAULT_CATALOG),
            search_dirs: vec![Utf8PathBuf::from(".")],
            groups: default_groups(),
        }
    }
}

impl FinderConfig {
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut config: FinderConfig = serde_yaml::from_str(content)?;
        if config.groups.is_empty() {
            return Err(ConfigError::EmptyGroups);
        }
        config.groups = config.groups.iter().map(|g| title_case(g.trim())).collect();
        Ok(config)
    }

    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}
