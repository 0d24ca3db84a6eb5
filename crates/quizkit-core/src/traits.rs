//! Trait definitions for question bank sources.
//!
//! Implemented by [`BuiltinQuestions`](crate::builtin::BuiltinQuestions) and
//! [`TomlQuestionFile`](crate::parser::TomlQuestionFile).

use crate::model::QuestionBank;

/// Something that can supply a question bank.
///
/// Banks are loaded once per process and treated as read-only afterwards.
pub trait QuestionProvider {
    /// Human-readable source name (e.g. "builtin" or a file path).
    fn name(&self) -> &str;

    /// Load the bank, enforcing the question invariants.
    fn load(&self) -> anyhow::Result<QuestionBank>;
}
