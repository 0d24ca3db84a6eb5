//! Quiz engine.
//!
//! Drives one [`QuizSession`] from start to summary, pulling answers from a
//! [`Responder`] and reporting each step to a [`ProgressReporter`].

use anyhow::Result;
use rand::Rng;

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::model::{AnswerMatching, Question, QuestionBank};
use crate::session::{AnsweredRecord, QuizSession};
use crate::summary::QuizSummary;

/// Configuration for the quiz engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of questions to ask.
    pub question_count: usize,
    /// How answers are matched against options.
    pub matching: AnswerMatching,
    /// Unrecognised answers tolerated per question.
    pub max_invalid_attempts: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            question_count: 5,
            matching: AnswerMatching::Exact,
            max_invalid_attempts: 3,
        }
    }
}

impl From<&QuizConfig> for EngineConfig {
    fn from(config: &QuizConfig) -> Self {
        Self {
            question_count: config.default_question_count,
            matching: config.answer_matching,
            max_invalid_attempts: config.max_invalid_attempts,
        }
    }
}

/// A question as presented to the responder.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    pub question: &'a Question,
    /// 1-based position ("Question X of Y").
    pub number: usize,
    pub total: usize,
    /// Fraction of questions already answered.
    pub progress: f64,
}

/// Source of answers, typically a user at a terminal.
pub trait Responder {
    /// Return the answer to `prompt`. An error abandons the quiz.
    fn respond(&mut self, prompt: &Prompt<'_>) -> Result<String>;
}

/// Progress reporting trait.
pub trait ProgressReporter {
    fn on_question(&self, prompt: &Prompt<'_>);
    fn on_answer(&self, record: &AnsweredRecord);
    fn on_invalid_option(&self, option: &str, attempts_left: u32);
    fn on_complete(&self, summary: &QuizSummary);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_question(&self, _: &Prompt<'_>) {}
    fn on_answer(&self, _: &AnsweredRecord) {}
    fn on_invalid_option(&self, _: &str, _: u32) {}
    fn on_complete(&self, _: &QuizSummary) {}
}

/// Runs complete quiz sessions.
pub struct QuizEngine {
    config: EngineConfig,
}

impl QuizEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one quiz over `bank` and return its summary.
    pub fn run<R: Rng + ?Sized>(
        &self,
        bank: &QuestionBank,
        responder: &mut dyn Responder,
        progress: &dyn ProgressReporter,
        rng: &mut R,
    ) -> Result<QuizSummary> {
        let mut session = QuizSession::with_matching(self.config.matching);
        session.start(self.config.question_count, bank, rng)?;

        while let Some(question) = session.current_question().cloned() {
            let prompt = Prompt {
                question: &question,
                number: session.current_index() + 1,
                total: session.requested_count(),
                progress: session.progress(),
            };
            progress.on_question(&prompt);

            let mut invalid = 0u32;
            loop {
                let answer = responder.respond(&prompt)?;
                match session.submit_answer(&answer) {
                    Ok(outcome) => {
                        progress.on_answer(&outcome.record);
                        break;
                    }
                    Err(QuizError::InvalidOption { option }) => {
                        invalid += 1;
                        tracing::debug!(option = %option, invalid, "unrecognised answer");
                        if invalid >= self.config.max_invalid_attempts {
                            anyhow::bail!(
                                "no valid answer to question {} after {invalid} attempt(s)",
                                prompt.number
                            );
                        }
                        let attempts_left = self.config.max_invalid_attempts - invalid;
                        progress.on_invalid_option(&option, attempts_left);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        let summary = session.summary()?;
        progress.on_complete(&summary);
        Ok(summary)
    }
}
