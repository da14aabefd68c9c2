//! Configuration file loading for beanquiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `BEANQUIZ_` environment variables (`BEANQUIZ_CHART__SIZE=320`)
//! 3. Project root: `./beanquiz.toml` or `./.beanquiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/beanquiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileChartConfig, FileConfig, FileOutputConfig,
    FilePacingConfig, FileRandomConfig,
};
pub use loader::ConfigLoader;
