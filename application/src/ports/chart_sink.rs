//! Chart sink port
//!
//! Where rendered charts end up. The presenter forwards every
//! [`ChartRequest`](super::presenter::ChartRequest) to a sink; the
//! infrastructure layer writes SVG files.

use super::presenter::ChartRequest;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while emitting a chart
#[derive(Error, Debug)]
pub enum ChartSinkError {
    #[error("Invalid chart target '{0}'")]
    InvalidTarget(String),

    #[error("Failed to write chart '{target}': {message}")]
    Write { target: String, message: String },
}

/// Where a chart was emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartArtifact {
    pub target: String,
    pub path: Option<PathBuf>,
}

/// Port for emitting rendered charts
pub trait ChartSink: Send + Sync {
    fn emit(&self, request: &ChartRequest) -> Result<ChartArtifact, ChartSinkError>;
}
