//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No persona types available")]
    NoPersonas,

    #[error("No quiz questions available")]
    NoQuestions,

    #[error("Quiz is not in progress")]
    NotInProgress,

    #[error("Stale answer for question {answered}, current question is {current}")]
    StaleAnswer { answered: usize, current: usize },

    #[error("Invalid choice {index}: question has {available} choices")]
    InvalidChoice { index: usize, available: usize },

    #[error("Catalog contains no beans")]
    EmptyCatalog,
}

impl DomainError {
    /// Check if this error means the catalog lacks the data a flow needs
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            DomainError::NoPersonas | DomainError::NoQuestions | DomainError::EmptyCatalog
        )
    }

    /// Check if this error is a rejected (late or duplicate) answer
    pub fn is_rejected_answer(&self) -> bool {
        matches!(
            self,
            DomainError::NotInProgress | DomainError::StaleAnswer { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_answer_display() {
        let error = DomainError::StaleAnswer {
            answered: 2,
            current: 3,
        };
        assert_eq!(
            error.to_string(),
            "Stale answer for question 2, current question is 3"
        );
    }

    #[test]
    fn test_is_no_data_check() {
        assert!(DomainError::NoPersonas.is_no_data());
        assert!(DomainError::NoQuestions.is_no_data());
        assert!(DomainError::EmptyCatalog.is_no_data());
        assert!(!DomainError::NotInProgress.is_no_data());
    }

    #[test]
    fn test_is_rejected_answer_check() {
        assert!(DomainError::NotInProgress.is_rejected_answer());
        assert!(
            DomainError::StaleAnswer {
                answered: 0,
                current: 1
            }
            .is_rejected_answer()
        );
        assert!(
            !DomainError::InvalidChoice {
                index: 4,
                available: 3
            }
            .is_rejected_answer()
        );
    }
}
