//! quizkit configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::AnswerMatching;

/// Name of the config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "quizkit.toml";

/// Top-level quizkit configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Number of questions asked when none is requested.
    #[serde(default = "default_question_count")]
    pub default_question_count: usize,
    /// How submitted answers are compared against the options.
    #[serde(default)]
    pub answer_matching: AnswerMatching,
    /// Unrecognised answers tolerated per question before giving up.
    #[serde(default = "default_max_invalid_attempts")]
    pub max_invalid_attempts: u32,
    /// Question bank file; the built-in bank is used when unset.
    #[serde(default)]
    pub bank_path: Option<PathBuf>,
    /// Fixed seed for question selection.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_question_count() -> usize {
    5
}
fn default_max_invalid_attempts() -> u32 {
    3
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_question_count: default_question_count(),
            answer_matching: AnswerMatching::default(),
            max_invalid_attempts: default_max_invalid_attempts(),
            bank_path: None,
            seed: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are copied verbatim; references inside them are not
/// expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or `./quizkit.toml` when present.
///
/// Environment variable override: `QUIZKIT_BANK` sets the bank path.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            local.exists().then_some(local)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizConfig::default(),
    };

    if let Ok(bank) = std::env::var("QUIZKIT_BANK") {
        if !bank.is_empty() {
            config.bank_path = Some(PathBuf::from(bank));
        }
    }

    Ok(config)
}

/// Parse a config from TOML text, expanding `${VAR}` in the bank path.
pub fn parse_config_str(content: &str) -> Result<QuizConfig> {
    let mut config: QuizConfig = toml::from_str(content)?;
    anyhow::ensure!(
        config.max_invalid_attempts >= 1,
        "max_invalid_attempts must be at least 1"
    );
    if let Some(bank) = &config.bank_path {
        config.bank_path = Some(PathBuf::from(resolve_env_vars(&bank.to_string_lossy())));
    }
    Ok(config)
}
