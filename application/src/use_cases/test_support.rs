//! Test doubles shared by the use case tests

use crate::ports::presenter::{ChartRequest, QuestionView, QuizPresenter};
use beanquiz_domain::{
    Bean, BlendBreakdown, Catalog, Choice, Persona, Question, RandomSource, Recommendation, Screen,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays a fixed list of indices, then keeps returning 0.
pub struct ScriptedRandom {
    values: Mutex<VecDeque<usize>>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Arc<Self> {
        Arc::new(Self {
            values: Mutex::new(values.into_iter().collect()),
        })
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&self, upper: usize) -> usize {
        self.values.lock().unwrap().pop_front().unwrap_or(0) % upper
    }
}

/// Seven questions whose first choice awards `{ a: 2 }`.
pub fn seven_question_catalog() -> Catalog {
    let questions = (1..=7)
        .map(|n| {
            Question::new(
                format!("Q{}", n),
                vec![
                    Choice::new("A").scoring("a", 2),
                    Choice::new("B").scoring("b", 1),
                ],
            )
        })
        .collect();
    Catalog::new(
        vec![
            Bean::new("x", "Bean X"),
            Bean::new("y", "Bean Y").featured(),
            Bean::new("z", "Bean Z"),
        ],
        vec![
            Persona::new("a", "Type A").recommending(["x"]),
            Persona::new("b", "Type B").recommending(["x", "z"]),
            Persona::new("c", "Type C"),
        ],
        questions,
    )
}

/// Presenter that records every call as a short string
#[derive(Default)]
pub struct RecordingPresenter {
    pub events: Mutex<Vec<String>>,
    pub charts: Mutex<Vec<ChartRequest>>,
}

impl RecordingPresenter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn chart_targets(&self) -> Vec<String> {
        self.charts
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.target.clone())
            .collect()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl QuizPresenter for RecordingPresenter {
    fn show_question(&self, view: &QuestionView) {
        self.push(format!("question:{}", view.progress_label()));
    }

    fn navigate(&self, screen: Screen) {
        self.push(format!("navigate:{}", screen));
    }

    fn show_diagnosis(&self, result: &Recommendation) {
        self.push(format!("diagnosis:{}", result.primary.id));
    }

    fn show_omakase(&self, result: &Recommendation) {
        self.push(format!("omakase:{}", result.primary.id));
    }

    fn gacha_spinning(&self, spinning: bool) {
        self.push(format!("spinning:{}", spinning));
    }

    fn show_gacha(&self, bean: &Bean) {
        self.push(format!("gacha:{}", bean.id));
    }

    fn show_blend(&self, breakdown: &BlendBreakdown) {
        self.push(format!("blend:{}", breakdown.components.len()));
    }

    fn notify(&self, message: &str) {
        self.push(format!("notify:{}", message));
    }

    fn render_chart(&self, request: &ChartRequest) {
        self.charts.lock().unwrap().push(request.clone());
    }
}
