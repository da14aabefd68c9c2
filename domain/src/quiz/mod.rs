//! Quiz domain
//!
//! The diagnosis quiz is a deterministic accumulator: each answer adds its
//! per-persona deltas to a [`session::ScoreBoard`], and once the last
//! question is answered the personas are ranked by
//! [`ranking::Classification`], ties broken at random.

pub mod ranking;
pub mod session;

pub use ranking::{Classification, RankedPersona};
pub use session::{AnswerProgress, QuestionTicket, QuizSession, QuizState, ScoreBoard};
