//! Interactive quiz loop
//!
//! Reads one line at a time and drives an [`AppController`]. A number
//! answers the current question, `j`/`k` move the focus and an empty line
//! answers with the focused choice.

use super::focus::ChoiceFocus;
use crate::output::console::ConsoleFormatter;
use beanquiz_application::{AppController, AppError, DiagnosisStep, QuestionView};
use beanquiz_domain::Screen;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::{debug, warn};

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// 0-based choice index
    Choose(usize),
    SelectFocused,
    FocusNext,
    FocusPrevious,
    Start,
    Omakase,
    Gacha,
    Blend,
    Back,
    Help,
    Quit,
    Unknown(String),
}

impl ReplInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplInput::SelectFocused;
        }
        if let Ok(n) = line.parse::<usize>() {
            return match n {
                0 => ReplInput::Unknown(line.to_string()),
                n => ReplInput::Choose(n - 1),
            };
        }
        match line.trim_start_matches('/').to_lowercase().as_str() {
            "j" | "n" | "down" => ReplInput::FocusNext,
            "k" | "p" | "up" => ReplInput::FocusPrevious,
            "s" | "start" | "r" | "restart" => ReplInput::Start,
            "o" | "omakase" => ReplInput::Omakase,
            "g" | "gacha" => ReplInput::Gacha,
            "b" | "blend" => ReplInput::Blend,
            "t" | "top" | "back" => ReplInput::Back,
            "h" | "?" | "help" => ReplInput::Help,
            "q" | "quit" | "exit" => ReplInput::Quit,
            _ => ReplInput::Unknown(line.to_string()),
        }
    }
}

/// Interactive quiz REPL
pub struct QuizRepl {
    app: AppController,
    focus: ChoiceFocus,
}

impl QuizRepl {
    pub fn new(app: AppController) -> Self {
        Self {
            app,
            focus: ChoiceFocus::default(),
        }
    }

    /// Give the controller back, e.g. to inspect the last result
    pub fn into_controller(self) -> AppController {
        self.app
    }

    /// Run until the user quits or closes input
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("beanquiz".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();
        self.start();

        loop {
            match off_runtime(|| editor.read_line(&prompt))? {
                Signal::Success(line) => {
                    if !self.handle(ReplInput::parse(&line)).await {
                        println!("Bye!");
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }
        Ok(())
    }

    /// Handle one input; `false` ends the loop
    pub async fn handle(&mut self, input: ReplInput) -> bool {
        debug!("Input {:?} on {}", input, self.app.screen());
        match input {
            ReplInput::Quit => return false,
            ReplInput::Help => Self::print_help(),
            ReplInput::Start => self.start(),
            ReplInput::Choose(index) => self.answer(index).await,
            ReplInput::SelectFocused => match self.focus.current() {
                Some(index) if self.app.current_question().is_some() => self.answer(index).await,
                _ => self.hint(),
            },
            ReplInput::FocusNext => {
                self.focus.next();
                self.reprint_question();
            }
            ReplInput::FocusPrevious => {
                self.focus.previous();
                self.reprint_question();
            }
            ReplInput::Omakase => {
                if let Err(e) = self.app.omakase().await {
                    Self::report(&e);
                }
            }
            ReplInput::Gacha => {
                if let Err(e) = self.app.pull_gacha().await {
                    Self::report(&e);
                }
            }
            ReplInput::Blend => match self.app.show_blend_detail().await {
                Ok(_) => {}
                Err(AppError::NotABlend) => {
                    println!("{}", "ブレンドの結果が表示されていません".dimmed());
                }
                Err(e) => Self::report(&e),
            },
            ReplInput::Back => {
                self.app.back();
                self.focus = ChoiceFocus::default();
                if self.app.screen() == Screen::Top {
                    Self::print_menu();
                }
            }
            ReplInput::Unknown(text) => {
                println!(
                    "{}",
                    ConsoleFormatter::format_notice(&format!("Unknown input: {} (h for help)", text))
                );
            }
        }
        true
    }

    fn start(&mut self) {
        match self.app.start_diagnosis() {
            Ok(view) => self.focus = ChoiceFocus::new(view.choices.len()),
            Err(e) => Self::report(&e),
        }
    }

    async fn answer(&mut self, index: usize) {
        let Some(view) = self.app.current_question() else {
            self.hint();
            return;
        };
        if index >= view.choices.len() {
            println!(
                "{}",
                ConsoleFormatter::format_notice(&format!("1〜{} で選んでください", view.choices.len()))
            );
            return;
        }

        match self.app.answer(view.ticket, index).await {
            Ok(DiagnosisStep::Question(next)) => self.focus = ChoiceFocus::new(next.choices.len()),
            Ok(DiagnosisStep::Finished(result)) => {
                self.focus = ChoiceFocus::default();
                if result.primary.is_blend() {
                    println!("{}", "b でブレンドの中身を見られます".dimmed());
                }
                println!("{}", "s でもう一度診断、t でトップへ".dimmed());
            }
            Ok(DiagnosisStep::Cancelled) => debug!("Answer cancelled"),
            Err(e) => Self::report(&e),
        }
    }

    fn reprint_question(&self) {
        match self.app.current_question() {
            Some(view) => print_question(&view, self.focus.current()),
            None => self.hint(),
        }
    }

    fn hint(&self) {
        println!("{}", "診断中ではありません。s で診断を始めます".dimmed());
    }

    fn report(error: &AppError) {
        if error.is_data_unavailable() {
            // The controller has already shown a notice
            warn!("{}", error);
        } else {
            println!("{}", ConsoleFormatter::format_notice(&error.to_string()));
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        ☕ コーヒータイプ診断 beanquiz        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        Self::print_help();
    }

    fn print_menu() {
        println!();
        println!("  s  診断をはじめる");
        println!("  o  おまかせ");
        println!("  g  ガチャ");
        println!();
    }

    fn print_help() {
        println!("Commands:");
        println!("  1-9        - Answer with that choice");
        println!("  j / k      - Move focus down / up");
        println!("  (enter)    - Answer with the focused choice");
        println!("  s          - Start the diagnosis over");
        println!("  o          - Omakase (today's featured bean)");
        println!("  g          - Pull the gacha");
        println!("  b          - Show the blend behind the result");
        println!("  t          - Back");
        println!("  q          - Quit");
        println!();
    }
}

/// Run blocking terminal I/O without stalling the runtime's worker.
///
/// On a multi-threaded runtime the worker hands its tasks off first; a
/// current-thread runtime has nowhere to hand them, so `f` runs in place.
fn off_runtime<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current().map(|handle| handle.runtime_flavor()) {
        Ok(RuntimeFlavor::MultiThread) => tokio::task::block_in_place(f),
        _ => f(),
    }
}

fn print_question(view: &QuestionView, focus: Option<usize>) {
    print!("{}", ConsoleFormatter::format_question(view, focus));
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanquiz_application::{NoPresenter, PacingParams};
    use beanquiz_domain::{Bean, Catalog, Choice, Persona, Question, RandomSource};
    use std::sync::Arc;

    struct First;

    impl RandomSource for First {
        fn next_index(&self, _upper: usize) -> usize {
            0
        }
    }

    fn catalog() -> Catalog {
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
            vec![Bean::new("x", "Bean X").featured()],
            vec![
                Persona::new("a", "Type A").recommending(["x"]),
                Persona::new("b", "Type B").recommending(["x"]),
            ],
            questions,
        )
    }

    fn repl() -> QuizRepl {
        let mut app = AppController::new(
            Arc::new(NoPresenter),
            Arc::new(First),
            PacingParams::immediate(),
        );
        app.install(catalog()).unwrap();
        QuizRepl::new(app)
    }

    #[test]
    fn test_off_runtime_outside_tokio() {
        assert_eq!(off_runtime(|| 7), 7);
    }

    #[tokio::test]
    async fn test_off_runtime_on_current_thread() {
        assert_eq!(off_runtime(|| "line".to_string()), "line");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_off_runtime_keeps_other_tasks_running() {
        let ticker = tokio::spawn(async { 42 });
        let read = off_runtime(|| {
            std::thread::sleep(std::time::Duration::from_millis(10));
            "q".to_string()
        });
        assert_eq!(read, "q");
        assert_eq!(ticker.await.unwrap(), 42);
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(ReplInput::parse("2"), ReplInput::Choose(1));
        assert_eq!(ReplInput::parse("  "), ReplInput::SelectFocused);
        assert_eq!(ReplInput::parse("j"), ReplInput::FocusNext);
        assert_eq!(ReplInput::parse("K"), ReplInput::FocusPrevious);
        assert_eq!(ReplInput::parse("/quit"), ReplInput::Quit);
        assert_eq!(ReplInput::parse("g"), ReplInput::Gacha);
        assert_eq!(ReplInput::parse("0"), ReplInput::Unknown("0".to_string()));
        assert_eq!(ReplInput::parse("coffee"), ReplInput::Unknown("coffee".to_string()));
    }

    #[tokio::test]
    async fn test_full_diagnosis_through_inputs() {
        let mut repl = repl();
        repl.start();
        assert_eq!(repl.app.screen(), Screen::Diagnosis);

        for _ in 0..7 {
            assert!(repl.handle(ReplInput::SelectFocused).await);
        }
        assert_eq!(repl.app.screen(), Screen::Result);
        let result = repl.app.last_result().unwrap();
        assert_eq!(result.persona_id.as_ref().map(|p| p.as_str()), Some("a"));
    }

    #[tokio::test]
    async fn test_focus_moves_the_selected_answer() {
        let mut repl = repl();
        repl.start();
        for _ in 0..7 {
            repl.handle(ReplInput::FocusNext).await;
            repl.handle(ReplInput::SelectFocused).await;
        }
        let result = repl.app.last_result().unwrap();
        assert_eq!(result.persona_id.as_ref().map(|p| p.as_str()), Some("b"));
    }

    #[tokio::test]
    async fn test_out_of_range_choice_is_ignored() {
        let mut repl = repl();
        repl.start();
        repl.handle(ReplInput::Choose(5)).await;
        assert_eq!(repl.app.current_question().unwrap().index, 0);
    }

    #[tokio::test]
    async fn test_quit_ends_loop() {
        let mut repl = repl();
        assert!(!repl.handle(ReplInput::Quit).await);
        assert!(repl.handle(ReplInput::Help).await);
    }
}
