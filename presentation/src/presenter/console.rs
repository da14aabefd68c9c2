//! Console presenter
//!
//! Prints every presenter callback to the terminal and forwards chart
//! requests to an optional [`ChartSink`].

use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::GachaSpinner;
use beanquiz_application::{ChartRequest, ChartSink, QuestionView, QuizPresenter};
use beanquiz_domain::{Bean, BlendBreakdown, Recommendation, Screen};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Terminal implementation of [`QuizPresenter`]
pub struct ConsolePresenter {
    config: OutputConfig,
    chart_sink: Option<Arc<dyn ChartSink>>,
    written: Mutex<Vec<PathBuf>>,
    spinner: Mutex<Option<GachaSpinner>>,
}

impl ConsolePresenter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            chart_sink: None,
            written: Mutex::new(Vec::new()),
            spinner: Mutex::new(None),
        }
    }

    pub fn with_chart_sink(mut self, sink: Arc<dyn ChartSink>) -> Self {
        self.chart_sink = Some(sink);
        self
    }

    /// Chart files written so far
    pub fn written_charts(&self) -> Vec<PathBuf> {
        self.written
            .lock()
            .map(|w| w.clone())
            .unwrap_or_default()
    }

    fn print_result(&self, text: impl FnOnce() -> String, value: &Recommendation) {
        if self.config.is_json() {
            println!("{}", ConsoleFormatter::format_json(value));
        } else {
            print!("{}", text());
        }
    }
}

impl QuizPresenter for ConsolePresenter {
    fn show_question(&self, view: &QuestionView) {
        print!("{}", ConsoleFormatter::format_question(view, None));
    }

    fn navigate(&self, screen: Screen) {
        debug!("Showing {}", screen);
    }

    fn show_diagnosis(&self, result: &Recommendation) {
        self.print_result(|| ConsoleFormatter::format_diagnosis(result), result);
    }

    fn show_omakase(&self, result: &Recommendation) {
        self.print_result(|| ConsoleFormatter::format_omakase(result), result);
    }

    fn gacha_spinning(&self, spinning: bool) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(previous) = slot.take() {
            previous.finish();
        }
        if spinning {
            *slot = Some(GachaSpinner::start(self.config.show_progress()));
        }
    }

    fn show_gacha(&self, bean: &Bean) {
        if self.config.is_json() {
            println!("{}", ConsoleFormatter::format_json(bean));
        } else {
            print!("{}", ConsoleFormatter::format_gacha(bean));
        }
    }

    fn show_blend(&self, breakdown: &BlendBreakdown) {
        if self.config.is_json() {
            println!("{}", ConsoleFormatter::format_json(breakdown));
        } else {
            print!("{}", ConsoleFormatter::format_blend(breakdown));
        }
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", ConsoleFormatter::format_notice(message));
    }

    fn render_chart(&self, request: &ChartRequest) {
        let Some(sink) = &self.chart_sink else {
            debug!("No chart sink, skipping {}", request.target);
            return;
        };
        match sink.emit(request) {
            Ok(artifact) => {
                if let Some(path) = artifact.path {
                    if !self.config.quiet && !self.config.is_json() {
                        println!("{} {}", "chart:".dimmed(), path.display());
                    }
                    if let Ok(mut written) = self.written.lock() {
                        written.push(path);
                    }
                }
            }
            Err(e) => warn!("Chart {} not written: {}", request.target, e),
        }
    }
}
