//! Core data model types for quizkit.
//!
//! Questions and banks are immutable once loaded; sessions copy the
//! questions they draw.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvalidQuestion;

/// Smallest number of questions a session may ask.
pub const MIN_QUESTIONS: usize = 3;
/// Fewest options a question may offer.
pub const MIN_OPTIONS: usize = 2;
/// Most options a question may offer.
pub const MAX_OPTIONS: usize = 4;

/// A single multiple-choice question.
///
/// Only constructible through [`Question::new`], so the correct option is
/// always one of the options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_option: String,
    explanation: String,
}

impl Question {
    /// Build a question, checking the option count and that the answer is an option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, InvalidQuestion> {
        let question = Self {
            prompt: prompt.into(),
            options,
            correct_option: correct_option.into(),
            explanation: explanation.into(),
        };
        question.check()?;
        Ok(question)
    }

    /// The question text shown to the user.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Answer choices in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    /// Shown after the question is answered; may be empty.
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    fn check(&self) -> Result<(), InvalidQuestion> {
        let count = self.options.len();
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&count) {
            return Err(InvalidQuestion::OptionCount {
                prompt: self.prompt.clone(),
                count,
                min: MIN_OPTIONS,
                max: MAX_OPTIONS,
            });
        }
        if !self.options.contains(&self.correct_option) {
            return Err(InvalidQuestion::AnswerNotAnOption {
                prompt: self.prompt.clone(),
                answer: self.correct_option.clone(),
            });
        }
        Ok(())
    }

    /// Find the option a submitted answer refers to.
    ///
    /// Returns the canonical option text, or `None` if nothing matches.
    pub fn find_option(&self, submitted: &str, matching: AnswerMatching) -> Option<&str> {
        self.options
            .iter()
            .find(|option| matching.matches(submitted, option))
            .map(String::as_str)
    }
}

/// How a submitted answer is compared against the options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMatching {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// Equality after trimming whitespace and lowercasing.
    Normalized,
}

impl AnswerMatching {
    /// Whether `submitted` selects `option` under this policy.
    pub fn matches(self, submitted: &str, option: &str) -> bool {
        match self {
            AnswerMatching::Exact => submitted == option,
            AnswerMatching::Normalized => normalize(submitted) == normalize(option),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

impl fmt::Display for AnswerMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerMatching::Exact => write!(f, "exact"),
            AnswerMatching::Normalized => write!(f, "normalized"),
        }
    }
}

/// Accepts the same spellings as the config file.
impl FromStr for AnswerMatching {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(AnswerMatching::Exact),
            "normalized" => Ok(AnswerMatching::Normalized),
            other => Err(format!(
                "unknown answer matching mode: {other} (expected \"exact\" or \"normalized\")"
            )),
        }
    }
}

/// Lifecycle state of a quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStatus::NotStarted => write!(f, "not started"),
            SessionStatus::InProgress => write!(f, "in progress"),
            SessionStatus::Completed => write!(f, "completed"),
        }
    }
}

/// An ordered, read-only collection of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    id: String,
    name: String,
    description: String,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting any question that breaks the invariants.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, InvalidQuestion> {
        for question in &questions {
            question.check()?;
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            questions,
        })
    }

    /// Unique identifier for this bank.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The questions, in bank order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Summary of this bank without the questions.
    pub fn summary(&self) -> BankSummary {
        BankSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            question_count: self.questions.len(),
        }
    }
}

/// Summary of a question bank (without the full question definitions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSummary {
    pub id: String,
    pub name: String,
    pub question_count: usize,
}
