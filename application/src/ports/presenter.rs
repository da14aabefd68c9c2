//! Presentation port
//!
//! The use cases never print or draw themselves; they ask a
//! [`QuizPresenter`] to show a question, switch screens, show a result, or
//! draw a chart. The terminal front end implements it in the presentation
//! layer.

use beanquiz_domain::{
    Bean, BlendBreakdown, ChartStyleOverrides, QuestionTicket, Recommendation, ScoreVector,
    Screen,
};

/// A question ready to be shown, with progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub ticket: QuestionTicket,
    /// Zero-based position of the question
    pub index: usize,
    pub total: usize,
    pub text: String,
    pub choices: Vec<String>,
}

impl QuestionView {
    /// One-based progress label, e.g. "3 / 7"
    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.total)
    }

    /// Progress in percent after this question is shown
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.index + 1) as f64 / self.total as f64 * 100.0
    }
}

/// Request to draw a radar chart into a named target
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    /// Target identifier, e.g. `radar-chart-main` or `blend-chart-<id>`
    pub target: String,
    pub scores: ScoreVector,
    pub overrides: ChartStyleOverrides,
}

impl ChartRequest {
    pub fn new(target: impl Into<String>, scores: ScoreVector) -> Self {
        Self {
            target: target.into(),
            scores,
            overrides: ChartStyleOverrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: ChartStyleOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Callbacks from the use cases to the front end
pub trait QuizPresenter: Send + Sync {
    /// Show a question with its choices and progress
    fn show_question(&self, view: &QuestionView);

    /// Switch to a screen
    fn navigate(&self, screen: Screen);

    /// Show the diagnosis result (persona, bean, optional alternate)
    fn show_diagnosis(&self, result: &Recommendation);

    /// Show the omakase result
    fn show_omakase(&self, result: &Recommendation);

    /// A gacha pull started (`true`) or stopped (`false`) spinning
    fn gacha_spinning(&self, _spinning: bool) {}

    /// Show the bean revealed by a gacha pull
    fn show_gacha(&self, bean: &Bean);

    /// Show a blend broken down into its components
    fn show_blend(&self, breakdown: &BlendBreakdown);

    /// Transient, non-blocking notice
    fn notify(&self, message: &str);

    /// Draw a radar chart
    fn render_chart(&self, request: &ChartRequest);
}

/// No-op presenter for when nothing needs to be shown
pub struct NoPresenter;

impl QuizPresenter for NoPresenter {
    fn show_question(&self, _view: &QuestionView) {}
    fn navigate(&self, _screen: Screen) {}
    fn show_diagnosis(&self, _result: &Recommendation) {}
    fn show_omakase(&self, _result: &Recommendation) {}
    fn show_gacha(&self, _bean: &Bean) {}
    fn show_blend(&self, _breakdown: &BlendBreakdown) {}
    fn notify(&self, _message: &str) {}
    fn render_chart(&self, _request: &ChartRequest) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_label_and_percent() {
        let view = QuestionView {
            ticket: QuestionTicket::for_index(2),
            index: 2,
            total: 8,
            text: "Q".to_string(),
            choices: vec![],
        };
        assert_eq!(view.progress_label(), "3 / 8");
        assert_eq!(view.progress_percent(), 37.5);
    }
}
