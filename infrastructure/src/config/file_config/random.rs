//! Randomness configuration from TOML (`[random]` section)

use serde::{Deserialize, Serialize};

/// Raw randomness configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRandomConfig {
    /// Fixed seed for reproducible tie-breaks and pulls
    pub seed: Option<u64>,
}
