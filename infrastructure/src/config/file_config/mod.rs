//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain/application types
//! where appropriate.

mod catalog;
mod chart;
mod output;
mod pacing;
mod random;

pub use catalog::FileCatalogConfig;
pub use chart::FileChartConfig;
pub use output::FileOutputConfig;
pub use pacing::FilePacingConfig;
pub use random::FileRandomConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("chart.size must be positive, got {0}")]
    InvalidChartSize(f64),

    #[error("chart.radius_scale must be positive, got {0}")]
    InvalidRadiusScale(f64),

    #[error("chart.device_pixel_ratio must be positive, got {0}")]
    InvalidPixelRatio(f64),

    #[error("catalog.data_dir cannot be empty")]
    EmptyDataDir,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog location
    pub catalog: FileCatalogConfig,
    /// Radar chart layout, colours and output directory
    pub chart: FileChartConfig,
    /// Delays between flow steps
    pub pacing: FilePacingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Random seed
    pub random: FileRandomConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let chart = &self.chart;
        if !(chart.size.is_finite() && chart.size > 0.0) {
            return Err(ConfigValidationError::InvalidChartSize(chart.size));
        }
        if !(chart.radius_scale.is_finite() && chart.radius_scale > 0.0) {
            return Err(ConfigValidationError::InvalidRadiusScale(
                chart.radius_scale,
            ));
        }
        if !(chart.device_pixel_ratio.is_finite() && chart.device_pixel_ratio > 0.0) {
            return Err(ConfigValidationError::InvalidPixelRatio(
                chart.device_pixel_ratio,
            ));
        }
        if self.catalog.data_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyDataDir);
        }
        Ok(())
    }

    /// Render the merged configuration as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
