//! Presentation-level configuration
//!
//! Configuration for output formatting and interactive behavior.

use crate::cli::commands::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Hide spinners and decorative output
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            quiet: false,
        }
    }
}

impl OutputConfig {
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Apply the colour preference to everything printed by this process
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }

    /// Spinners only make sense for interactive text output
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.is_json()
    }
}
