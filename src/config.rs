use crate::error::ConfigError;
use crate::record::Human;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Overrides for the copy-semantics demo, read from TOML:
///
/// ```toml
/// [record]
/// a = 12
/// b = 20
///
/// [record.stats]
/// age = 30
/// h = 189
/// ```
///
/// A missing `[record]` table means [`Human::sample`]. Fields left out of a
/// present table are zero. Unknown keys anywhere are a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub record: Human,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            record: Human::sample(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }
}
