//! Gacha spinner

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const FRAMES: &[&str] = &["☕", "🫘", "🎰", "✨"];

/// Spinner shown while a gacha pull is spinning
pub struct GachaSpinner {
    bar: Option<ProgressBar>,
}

impl GachaSpinner {
    /// Start spinning; a hidden spinner does nothing
    pub fn start(visible: bool) -> Self {
        if !visible {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .map(|s| s.tick_strings(FRAMES))
        {
            bar.set_style(style);
        }
        bar.set_message("ガチャを回しています...".cyan().to_string());
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar: Some(bar) }
    }

    /// Stop and erase the spinner
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_is_inert() {
        let spinner = GachaSpinner::start(false);
        assert!(spinner.bar.is_none());
        spinner.finish();
    }
}
