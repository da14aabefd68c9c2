//! Catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Directory holding `beans.json`, `types.json` and `questions.json`
    pub data_dir: PathBuf,
    /// Base URL serving the same three documents (`remote-catalog` builds)
    pub base_url: Option<String>,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            base_url: None,
        }
    }
}
