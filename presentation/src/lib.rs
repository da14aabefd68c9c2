//! Presentation layer for beanquiz
//!
//! This crate contains CLI definitions, output formatters, the console
//! presenter, the gacha spinner and the interactive quiz loop.

pub mod cli;
pub mod config;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use presenter::console::ConsolePresenter;
pub use progress::spinner::GachaSpinner;
pub use quiz::{ChoiceFocus, QuizRepl, ReplInput};
