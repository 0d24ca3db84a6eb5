//! TOML question bank parser.
//!
//! Loads question banks from TOML files and directories, and validates them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, QuestionBank, MIN_QUESTIONS};
use crate::traits::QuestionProvider;

/// Intermediate TOML structure for parsing question bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    prompt: String,
    options: Vec<String>,
    answer: String,
    #[serde(default)]
    explanation: String,
}

/// Parse a single TOML file into a `QuestionBank`.
pub fn parse_question_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank file: {}", path.display()))?;

    parse_question_bank_str(&content, path)
}

/// Parse a TOML string into a `QuestionBank` (useful for testing).
pub fn parse_question_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .enumerate()
        .map(|(i, q)| {
            Question::new(q.prompt, q.options, q.answer, q.explanation).with_context(|| {
                format!(
                    "invalid question #{} in {}",
                    i + 1,
                    source_path.display()
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank::new(
        parsed.bank.id,
        parsed.bank.name,
        parsed.bank.description,
        questions,
    )?)
}

/// Recursively load all `.toml` question bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<QuestionBank>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_question_bank(&path) {
                Ok(bank) => banks.push(bank),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(banks)
}

/// A question bank stored in a TOML file.
#[derive(Debug, Clone)]
pub struct TomlQuestionFile {
    path: PathBuf,
    name: String,
}

impl TomlQuestionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl QuestionProvider for TomlQuestionFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<QuestionBank> {
        parse_question_bank(&self.path)
    }
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based position of the question (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for issues that don't break its invariants.
pub fn validate_question_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if bank.len() < MIN_QUESTIONS {
        warnings.push(ValidationWarning {
            question: None,
            message: format!(
                "bank has {} question(s); at least {MIN_QUESTIONS} are needed to start a quiz",
                bank.len()
            ),
        });
    }

    let mut seen_prompts = HashSet::new();
    for (i, q) in bank.questions().iter().enumerate() {
        let position = Some(i + 1);

        if q.prompt().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: position,
                message: "prompt is empty".into(),
            });
        } else if !seen_prompts.insert(q.prompt().trim()) {
            warnings.push(ValidationWarning {
                question: position,
                message: format!("duplicate prompt: {}", q.prompt().trim()),
            });
        }

        // Options that differ only by case or whitespace collide under normalized matching
        let mut seen_options = HashSet::new();
        for option in q.options() {
            if !seen_options.insert(option.trim().to_lowercase()) {
                warnings.push(ValidationWarning {
                    question: position,
                    message: format!("duplicate option: {option}"),
                });
            }
        }

        if q.explanation().trim().is_empty() {
            warnings.push(ValidationWarning {
                question: position,
                message: "explanation is empty".into(),
            });
        }
    }

    warnings
}
