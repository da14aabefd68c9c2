//! Quiz engine use case
//!
//! Drives one diagnosis run over the catalog: hands out questions with
//! tickets, folds answers into the session, and classifies the finished
//! run. Pacing is left to the caller.

use crate::ports::catalog_store::CatalogStore;
use crate::ports::presenter::QuestionView;
use beanquiz_domain::{
    AnswerProgress, Classification, DomainError, PersonaId, QuestionTicket, QuizSession, QuizState,
    RandomSource,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised by the quiz engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No known persona received a score")]
    Unclassifiable,
}

impl QuizError {
    /// The catalog lacks personas or questions
    pub fn is_no_data(&self) -> bool {
        matches!(self, QuizError::Domain(e) if e.is_no_data())
    }

    /// A late or duplicate answer was ignored
    pub fn is_rejected_answer(&self) -> bool {
        matches!(self, QuizError::Domain(e) if e.is_rejected_answer())
    }
}

/// What happened after an accepted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Show this question next
    Next(QuestionView),
    /// The run is over
    Complete(Classification),
}

/// Use case for running a diagnosis
pub struct QuizEngine {
    catalog: Arc<dyn CatalogStore>,
    rng: Arc<dyn RandomSource>,
    session: Option<QuizSession>,
}

impl QuizEngine {
    pub fn new(catalog: Arc<dyn CatalogStore>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            catalog,
            rng,
            session: None,
        }
    }

    pub fn state(&self) -> QuizState {
        self.session
            .as_ref()
            .map(QuizSession::state)
            .unwrap_or_default()
    }

    /// Reset scores to zero for every persona and present question 0.
    ///
    /// Any earlier run is discarded, finished or not.
    pub fn start(&mut self) -> Result<QuestionView, QuizError> {
        self.session = None;

        let personas = self.catalog.types().iter().map(|t| t.id.clone());
        let session = QuizSession::start(personas, self.catalog.questions().len())?;

        let view = question_view(self.catalog.as_ref(), QuestionTicket::for_index(0))
            .ok_or(DomainError::NoQuestions)?;

        info!(
            "Diagnosis started: {} questions, {} personas",
            session.total_questions(),
            session.scores().entries().len()
        );
        self.session = Some(session);
        Ok(view)
    }

    /// The question currently awaiting an answer
    pub fn current_question(&self) -> Option<QuestionView> {
        let ticket = self.session.as_ref()?.ticket()?;
        question_view(self.catalog.as_ref(), ticket)
    }

    /// Score the choice picked for the question `ticket` was issued for.
    ///
    /// Answers for any other question, or outside a run, are rejected and
    /// leave the scores untouched.
    pub fn answer(
        &mut self,
        ticket: QuestionTicket,
        choice_index: usize,
    ) -> Result<AnswerOutcome, QuizError> {
        let session = self.session.as_mut().ok_or(DomainError::NotInProgress)?;

        let index = session.check_ticket(ticket).inspect_err(|e| {
            warn!("Ignoring answer: {}", e);
        })?;

        let question = self
            .catalog
            .questions()
            .get(index)
            .ok_or(DomainError::NotInProgress)?;
        let choice = question
            .choice(choice_index)
            .ok_or(DomainError::InvalidChoice {
                index: choice_index,
                available: question.choices.len(),
            })?;

        debug!("Question {} answered with choice {}", index, choice_index);

        match session.apply(ticket, choice)? {
            AnswerProgress::Next(next) => {
                let view = question_view(self.catalog.as_ref(), next)
                    .ok_or(DomainError::NoQuestions)?;
                Ok(AnswerOutcome::Next(view))
            }
            AnswerProgress::Finished => {
                let known = known_scores(self.catalog.as_ref(), session.scores().entries());
                let classification =
                    Classification::rank(&known, self.rng.as_ref()).ok_or(QuizError::Unclassifiable)?;
                let winner = classification.winner();
                info!(
                    "Diagnosis complete: {} ({} points){}",
                    winner.persona,
                    winner.score,
                    if classification.was_tie_broken() {
                        ", tie broken at random"
                    } else {
                        ""
                    }
                );
                Ok(AnswerOutcome::Complete(classification))
            }
        }
    }

    /// Drop the current run, e.g. when leaving the diagnosis screen
    pub fn abandon(&mut self) {
        if self.session.take().is_some() {
            debug!("Diagnosis abandoned");
        }
    }
}

fn question_view(catalog: &dyn CatalogStore, ticket: QuestionTicket) -> Option<QuestionView> {
    let questions = catalog.questions();
    let question = questions.get(ticket.index())?;
    Some(QuestionView {
        ticket,
        index: ticket.index(),
        total: questions.len(),
        text: question.text.clone(),
        choices: question.choices.iter().map(|c| c.text.clone()).collect(),
    })
}

/// Scores restricted to personas the catalog defines.
///
/// Choices may award points to ids with no persona; those are tracked by
/// the session but never win.
fn known_scores(catalog: &dyn CatalogStore, entries: &[(PersonaId, i64)]) -> Vec<(PersonaId, i64)> {
    entries
        .iter()
        .filter(|(id, _)| {
            let known = catalog.type_by_id(id.as_str()).is_some();
            if !known {
                debug!("Excluding unknown persona '{}' from ranking", id);
            }
            known
        })
        .cloned()
        .collect()
}
