//! The quiz session state machine.
//!
//! A [`QuizSession`] tracks one attempt at a randomly drawn subset of a
//! [`QuestionBank`]:
//!
//! ```text
//! NotStarted --start--> InProgress --submit_answer (last)--> Completed
//!      ^                                                         |
//!      +--------------------------reset--------------------------+
//! ```
//!
//! The session performs no I/O. Every operation returns the transition it
//! made, and the caller decides what to show.

use chrono::{DateTime, Utc};
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::QuizError;
use crate::model::{AnswerMatching, Question, QuestionBank, SessionStatus, MIN_QUESTIONS};
use crate::summary::QuizSummary;

/// The logged outcome of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredRecord {
    pub question_prompt: String,
    /// The option the submission matched, in its canonical spelling.
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// Result of a successful [`QuizSession::submit_answer`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// The record that was appended to the log.
    pub record: AnsweredRecord,
    /// Status after the submission.
    pub status: SessionStatus,
}

/// In-progress state of one quiz attempt.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    id: Option<Uuid>,
    matching: AnswerMatching,
    status: SessionStatus,
    requested_count: usize,
    selected_questions: Vec<Question>,
    current_index: usize,
    score: usize,
    answered_log: Vec<AnsweredRecord>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// A fresh session using exact answer matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session using the given answer matching policy.
    pub fn with_matching(matching: AnswerMatching) -> Self {
        Self {
            matching,
            ..Self::default()
        }
    }

    /// Draw `requested_count` distinct questions from `bank` and begin the quiz.
    ///
    /// Questions are sampled uniformly without replacement and asked in draw
    /// order. Any earlier attempt held by this session is discarded. On error
    /// the session is left untouched.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        requested_count: usize,
        bank: &QuestionBank,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        let max = bank.len();
        if requested_count < MIN_QUESTIONS || requested_count > max {
            return Err(QuizError::InvalidRequestCount {
                requested: requested_count,
                min: MIN_QUESTIONS,
                max,
            });
        }

        let selected_questions: Vec<Question> = index::sample(rng, max, requested_count)
            .into_iter()
            .map(|i| bank.questions()[i].clone())
            .collect();

        let id = Uuid::new_v4();
        tracing::info!(
            session = %id,
            bank = %bank.id(),
            questions = requested_count,
            "quiz session started"
        );

        *self = Self {
            id: Some(id),
            matching: self.matching,
            status: SessionStatus::InProgress,
            requested_count,
            selected_questions,
            current_index: 0,
            score: 0,
            answered_log: Vec::with_capacity(requested_count),
            started_at: Some(Utc::now()),
            completed_at: None,
        };
        Ok(())
    }

    /// [`start`](Self::start) using the thread-local random source.
    pub fn start_with_thread_rng(
        &mut self,
        requested_count: usize,
        bank: &QuestionBank,
    ) -> Result<(), QuizError> {
        self.start(requested_count, bank, &mut rand::rng())
    }

    /// Answer the current question.
    ///
    /// Scores the answer, logs it, and either advances to the next question
    /// or completes the session. On the last question `current_index` stays
    /// where it is.
    pub fn submit_answer(&mut self, selected_option: &str) -> Result<SubmitOutcome, QuizError> {
        if self.status != SessionStatus::InProgress {
            return Err(QuizError::SessionNotInProgress {
                status: self.status,
            });
        }

        let question = &self.selected_questions[self.current_index];
        let Some(chosen) = question.find_option(selected_option, self.matching) else {
            return Err(QuizError::InvalidOption {
                option: selected_option.to_string(),
            });
        };

        let is_correct = chosen == question.correct_option();
        let record = AnsweredRecord {
            question_prompt: question.prompt().to_string(),
            user_answer: chosen.to_string(),
            correct_answer: question.correct_option().to_string(),
            is_correct,
            explanation: question.explanation().to_string(),
        };

        if is_correct {
            self.score += 1;
        }
        self.answered_log.push(record.clone());

        if self.current_index + 1 == self.requested_count {
            self.status = SessionStatus::Completed;
            self.completed_at = Some(Utc::now());
            tracing::info!(
                session = ?self.id,
                score = self.score,
                questions = self.requested_count,
                "quiz session completed"
            );
        } else {
            self.current_index += 1;
        }

        tracing::debug!(
            session = ?self.id,
            correct = is_correct,
            index = self.current_index,
            status = %self.status,
            "answer submitted"
        );

        Ok(SubmitOutcome {
            record,
            status: self.status,
        })
    }

    /// Drop the current attempt and go back to `NotStarted`.
    pub fn reset(&mut self) {
        *self = Self::with_matching(self.matching);
    }

    /// Final score and answer review. Only available once completed.
    pub fn summary(&self) -> Result<QuizSummary, QuizError> {
        let (SessionStatus::Completed, Some(id), Some(started_at), Some(completed_at)) =
            (self.status, self.id, self.started_at, self.completed_at)
        else {
            return Err(QuizError::SessionNotCompleted {
                status: self.status,
            });
        };

        Ok(QuizSummary::new(
            id,
            self.score,
            self.requested_count,
            self.answered_log.clone(),
            started_at,
            completed_at,
        ))
    }

    /// The question awaiting an answer, if the session is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.status {
            SessionStatus::InProgress => self.selected_questions.get(self.current_index),
            _ => None,
        }
    }

    /// Fraction of the selected questions answered so far, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.requested_count == 0 {
            return 0.0;
        }
        self.answered_log.len() as f64 / self.requested_count as f64
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn matching(&self) -> AnswerMatching {
        self.matching
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_questions(&self) -> &[Question] {
        &self.selected_questions
    }

    pub fn answered_log(&self) -> &[AnsweredRecord] {
        &self.answered_log
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}
