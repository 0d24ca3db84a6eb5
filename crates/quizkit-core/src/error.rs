//! Quiz error types.
//!
//! Every variant of [`QuizError`] is a caller-side contract violation detected
//! synchronously by the session operation that raised it. None of them are
//! transient, so none are worth retrying.

use thiserror::Error;

use crate::model::SessionStatus;

/// Errors raised by [`QuizSession`](crate::session::QuizSession) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// The requested number of questions is outside `min..=max`.
    #[error("requested {requested} questions, expected between {min} and {max}")]
    InvalidRequestCount {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// An answer was submitted while the session was not accepting answers.
    #[error("session is not in progress (status: {status})")]
    SessionNotInProgress { status: SessionStatus },

    /// The submitted answer is not one of the current question's options.
    #[error("'{option}' is not one of the current question's options")]
    InvalidOption { option: String },

    /// A summary was requested before the last answer was submitted.
    #[error("session is not completed (status: {status})")]
    SessionNotCompleted { status: SessionStatus },
}

impl QuizError {
    /// Returns `true` if repeating the same call could succeed.
    ///
    /// Always `false`: nothing in a session depends on external state.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// A question that breaks the bank invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidQuestion {
    /// Fewer than 2 or more than 4 options.
    #[error("question '{prompt}' has {count} options, expected between {min} and {max}")]
    OptionCount {
        prompt: String,
        count: usize,
        min: usize,
        max: usize,
    },

    /// The correct answer is not one of the options.
    #[error("answer '{answer}' of question '{prompt}' is not one of its options")]
    AnswerNotAnOption { prompt: String, answer: String },
}
