//! Infrastructure layer for beanquiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod chart;
pub mod config;
pub mod random;

// Re-export commonly used types
pub use catalog::{DirectoryCatalogSource, parse_catalog};
#[cfg(feature = "remote-catalog")]
pub use catalog::HttpCatalogSource;
pub use chart::{SvgChartSink, SvgSurface, render_svg};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileChartConfig, FileConfig,
    FileOutputConfig, FilePacingConfig, FileRandomConfig,
};
pub use random::{SeededRandom, ThreadRandom};
