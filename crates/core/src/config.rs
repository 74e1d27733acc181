//! Search configuration via `quickfind.toml`
//!
//! Holds the default result limits and the keyword tokenization switch.
//! Scoring weights are fixed and live with the query engine.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "quickfind.toml";

/// Default maximum number of results returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default maximum number of results of one entry type.
pub const DEFAULT_MAX_PER_CATEGORY: usize = 10;

/// Search configuration loaded from `quickfind.toml`.
///
/// # Example
///
/// ```toml
/// max_results = 50
/// max_per_category = 10
/// split_keywords = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result cap used by `search_with_defaults`.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Per-type cap used by `search_with_defaults`.
    #[serde(default = "default_max_per_category")]
    pub max_per_category: usize,
    /// Also index each word of a multi-word keyword.
    #[serde(default = "default_split_keywords")]
    pub split_keywords: bool,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_max_per_category() -> usize {
    DEFAULT_MAX_PER_CATEGORY
}

fn default_split_keywords() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            max_per_category: DEFAULT_MAX_PER_CATEGORY,
            split_keywords: true,
        }
    }
}

impl SearchConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# quickfind search configuration
#
# Maximum number of results returned by a search (default: 50)
max_results = 50

# Maximum number of results of a single entry type (default: 10)
max_per_category = 10

# Index each word of a multi-word keyword in addition to the whole keyword
# (default: true). "Pompe hydraulique" then also matches "hydraulique".
split_keywords = true
"#
    }

    /// Check that both limits are at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::InvalidConfig(
                "max_results must be at least 1".to_string(),
            ));
        }
        if self.max_per_category == 0 {
            return Err(Error::InvalidConfig(
                "max_per_category must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::ConfigParse(msg) => {
                Error::ConfigParse(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
