//! Pacing parameters: delays between flow steps.
//!
//! [`PacingParams`] groups the delays the use cases wait out between steps.
//! They only pace the flow; the one correctness guard (never scoring an
//! answer twice) is the quiz session's ticket check, not a timer.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delays between flow steps.
///
/// | Delay           | Where                                        |
/// |-----------------|----------------------------------------------|
/// | answer_cooldown | after an answer, before the next question    |
/// | gacha_spin      | between a pull and the revealed bean         |
/// | chart_defer     | after a result is shown, before its charts   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingParams {
    pub answer_cooldown: Duration,
    pub gacha_spin: Duration,
    pub chart_defer: Duration,
}

impl Default for PacingParams {
    fn default() -> Self {
        Self {
            answer_cooldown: Duration::from_millis(350),
            gacha_spin: Duration::from_millis(900),
            chart_defer: Duration::from_millis(100),
        }
    }
}

impl PacingParams {
    /// No delays at all (tests, `--quiet` runs)
    pub fn immediate() -> Self {
        Self {
            answer_cooldown: Duration::ZERO,
            gacha_spin: Duration::ZERO,
            chart_defer: Duration::ZERO,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_answer_cooldown(mut self, delay: Duration) -> Self {
        self.answer_cooldown = delay;
        self
    }

    pub fn with_gacha_spin(mut self, delay: Duration) -> Self {
        self.gacha_spin = delay;
        self
    }

    pub fn with_chart_defer(mut self, delay: Duration) -> Self {
        self.chart_defer = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let params = PacingParams::default();
        assert_eq!(params.answer_cooldown, Duration::from_millis(350));
        assert_eq!(params.gacha_spin, Duration::from_millis(900));
        assert_eq!(params.chart_defer, Duration::from_millis(100));
    }

    #[test]
    fn test_builder_chain() {
        let params = PacingParams::immediate().with_gacha_spin(Duration::from_millis(5));
        assert_eq!(params.gacha_spin, Duration::from_millis(5));
        assert_eq!(params.answer_cooldown, Duration::ZERO);
    }
}
