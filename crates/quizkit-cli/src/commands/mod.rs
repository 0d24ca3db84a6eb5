pub mod init;
pub mod list;
pub mod take;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use quizkit_core::builtin::BuiltinQuestions;
use quizkit_core::config::QuizConfig;
use quizkit_core::model::QuestionBank;
use quizkit_core::parser::TomlQuestionFile;
use quizkit_core::traits::QuestionProvider;

/// Pick the bank source: explicit flag, then config, then the built-in bank.
pub fn question_provider(flag: Option<PathBuf>, config: &QuizConfig) -> Box<dyn QuestionProvider> {
    match flag.or_else(|| config.bank_path.clone()) {
        Some(path) => Box::new(TomlQuestionFile::new(path)),
        None => Box::new(BuiltinQuestions),
    }
}

pub fn load_bank(flag: Option<PathBuf>, config: &QuizConfig) -> Result<QuestionBank> {
    let provider = question_provider(flag, config);
    let bank = provider.load()?;
    tracing::debug!(
        source = provider.name(),
        questions = bank.len(),
        "loaded question bank"
    );
    Ok(bank)
}
