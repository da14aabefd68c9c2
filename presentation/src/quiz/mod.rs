//! Interactive diagnosis

pub mod focus;
pub mod repl;

pub use focus::ChoiceFocus;
pub use repl::{QuizRepl, ReplInput};
