//! Quiz question and choice value objects

use crate::core::ids::PersonaId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One selectable answer of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    /// Score deltas per persona; personas not listed are left unchanged
    #[serde(default)]
    pub scores: BTreeMap<PersonaId, i64>,
}

impl Choice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            scores: BTreeMap::new(),
        }
    }

    pub fn scoring(mut self, persona: impl Into<PersonaId>, delta: i64) -> Self {
        self.scores.insert(persona.into(), delta);
        self
    }
}

/// A quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Question {
    pub fn new(text: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            text: text.into(),
            choices,
        }
    }

    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }
}

/// The questions document is either a bare array or `{ "questions": [...] }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuestionsDocument {
    Wrapped { questions: Vec<Question> },
    Bare(Vec<Question>),
}

impl QuestionsDocument {
    pub fn into_questions(self) -> Vec<Question> {
        match self {
            QuestionsDocument::Wrapped { questions } => questions,
            QuestionsDocument::Bare(questions) => questions,
        }
    }
}
