//! Pacing configuration from TOML (`[pacing]` section)

use beanquiz_application::PacingParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw pacing configuration from TOML, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePacingConfig {
    pub answer_cooldown_ms: u64,
    pub gacha_spin_ms: u64,
    pub chart_defer_ms: u64,
}

impl Default for FilePacingConfig {
    fn default() -> Self {
        let defaults = PacingParams::default();
        Self {
            answer_cooldown_ms: defaults.answer_cooldown.as_millis() as u64,
            gacha_spin_ms: defaults.gacha_spin.as_millis() as u64,
            chart_defer_ms: defaults.chart_defer.as_millis() as u64,
        }
    }
}

impl FilePacingConfig {
    pub fn to_pacing_params(&self) -> PacingParams {
        PacingParams::default()
            .with_answer_cooldown(Duration::from_millis(self.answer_cooldown_ms))
            .with_gacha_spin(Duration::from_millis(self.gacha_spin_ms))
            .with_chart_defer(Duration::from_millis(self.chart_defer_ms))
    }
}
