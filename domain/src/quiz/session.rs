//! Quiz session state machine
//!
//! ```text
//! Idle ──start──▶ InProgress(0) ──answer──▶ InProgress(1) ... ──answer──▶ Complete
//! ```
//!
//! Every presented question is identified by a [`QuestionTicket`]. An answer
//! is only scored when its ticket matches the current question, so a late or
//! repeated answer can never be folded in twice.

use crate::catalog::question::Choice;
use crate::core::error::DomainError;
use crate::core::ids::PersonaId;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a quiz run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuizState {
    #[default]
    Idle,
    InProgress { question_index: usize },
    Complete,
}

impl QuizState {
    pub fn as_str(&self) -> &str {
        match self {
            QuizState::Idle => "idle",
            QuizState::InProgress { .. } => "in_progress",
            QuizState::Complete => "complete",
        }
    }
}

impl std::fmt::Display for QuizState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizState::InProgress { question_index } => {
                write!(f, "in_progress({})", question_index)
            }
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Handle for one presented question; answers must carry it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionTicket {
    index: usize,
}

impl QuestionTicket {
    pub fn for_index(index: usize) -> Self {
        Self { index }
    }

    /// Zero-based index of the question this ticket was issued for
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Per-persona score accumulator preserving first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    entries: Vec<(PersonaId, i64)>,
}

impl ScoreBoard {
    /// Start every persona at zero
    pub fn zeroed(personas: impl IntoIterator<Item = PersonaId>) -> Self {
        let mut board = Self::default();
        for id in personas {
            if board.get(id.as_str()).is_none() {
                board.entries.push((id, 0));
            }
        }
        board
    }

    /// Add `delta` to a persona, inserting it at zero if unseen.
    ///
    /// Scores saturate at the `i64` bounds.
    pub fn add(&mut self, persona: &PersonaId, delta: i64) {
        match self.entries.iter_mut().find(|(id, _)| id == persona) {
            Some((_, score)) => *score = score.saturating_add(delta),
            None => self.entries.push((persona.clone(), delta)),
        }
    }

    pub fn get(&self, persona: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(id, _)| id.as_str() == persona)
            .map(|(_, score)| *score)
    }

    pub fn entries(&self) -> &[(PersonaId, i64)] {
        &self.entries
    }
}

/// Result of folding one answer into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerProgress {
    /// Another question follows
    Next(QuestionTicket),
    /// That was the last question
    Finished,
}

/// One quiz run: current question and score accumulator
#[derive(Debug, Clone)]
pub struct QuizSession {
    state: QuizState,
    total_questions: usize,
    board: ScoreBoard,
}

impl QuizSession {
    /// Start a session at question 0 with every persona at zero.
    ///
    /// Fails when there are no personas or no questions.
    pub fn start(
        personas: impl IntoIterator<Item = PersonaId>,
        total_questions: usize,
    ) -> Result<Self, DomainError> {
        let board = ScoreBoard::zeroed(personas);
        if board.entries().is_empty() {
            return Err(DomainError::NoPersonas);
        }
        if total_questions == 0 {
            return Err(DomainError::NoQuestions);
        }
        Ok(Self {
            state: QuizState::InProgress { question_index: 0 },
            total_questions,
            board,
        })
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Ticket of the question currently awaiting an answer
    pub fn ticket(&self) -> Option<QuestionTicket> {
        match self.state {
            QuizState::InProgress { question_index } => {
                Some(QuestionTicket::for_index(question_index))
            }
            _ => None,
        }
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.board
    }

    /// Check that `ticket` addresses the current question.
    pub fn check_ticket(&self, ticket: QuestionTicket) -> Result<usize, DomainError> {
        match self.state {
            QuizState::InProgress { question_index } if question_index == ticket.index => {
                Ok(question_index)
            }
            QuizState::InProgress { question_index } => Err(DomainError::StaleAnswer {
                answered: ticket.index,
                current: question_index,
            }),
            _ => Err(DomainError::NotInProgress),
        }
    }

    /// Fold the chosen answer into the accumulator and advance.
    pub fn apply(
        &mut self,
        ticket: QuestionTicket,
        choice: &Choice,
    ) -> Result<AnswerProgress, DomainError> {
        let index = self.check_ticket(ticket)?;

        for (persona, delta) in &choice.scores {
            self.board.add(persona, *delta);
        }

        let next = index + 1;
        if next == self.total_questions {
            self.state = QuizState::Complete;
            Ok(AnswerProgress::Finished)
        } else {
            self.state = QuizState::InProgress {
                question_index: next,
            };
            Ok(AnswerProgress::Next(QuestionTicket::for_index(next)))
        }
    }
}
