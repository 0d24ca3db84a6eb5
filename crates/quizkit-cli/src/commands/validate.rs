//! The `quizkit validate` command.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;

use quizkit_core::model::QuestionBank;
use quizkit_core::parser::{load_bank_directory, parse_question_bank, validate_question_bank};

/// Longest prompt excerpt shown next to a warning.
const EXCERPT_CHARS: usize = 40;

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let banks = if bank_path.is_dir() {
        load_bank_directory(&bank_path)?
    } else {
        vec![parse_question_bank(&bank_path)?]
    };

    let mut total_warnings = 0;
    let mut unplayable = 0;
    let mut ids: HashMap<&str, &str> = HashMap::new();

    for bank in &banks {
        println!(
            "Question bank: {} [{}] ({} questions)",
            bank.name(),
            bank.id(),
            bank.len()
        );

        if let Some(first) = ids.insert(bank.id(), bank.name()) {
            println!("  WARNING: id \"{}\" is also used by \"{first}\"", bank.id());
            total_warnings += 1;
        }

        for w in validate_question_bank(bank) {
            match w.question {
                Some(n) => {
                    println!("  [#{n}] WARNING: {} ({})", w.message, excerpt(bank, n));
                    total_warnings += 1;
                }
                // Bank-level findings mean no quiz can be started from it.
                None => {
                    println!("  NOT PLAYABLE: {}", w.message);
                    unplayable += 1;
                }
            }
        }
    }

    if total_warnings == 0 && unplayable == 0 {
        println!("All question banks valid.");
        return Ok(());
    }
    println!();
    if total_warnings > 0 {
        println!("{total_warnings} warning(s) found.");
    }
    if unplayable > 0 {
        println!("{unplayable} bank(s) too small to start a quiz.");
    }

    Ok(())
}

/// Quoted, shortened prompt of the 1-based question `n`.
fn excerpt(bank: &QuestionBank, n: usize) -> String {
    let prompt = bank
        .questions()
        .get(n - 1)
        .map(|q| q.prompt().trim())
        .unwrap_or_default();
    if prompt.chars().count() <= EXCERPT_CHARS {
        format!("\"{prompt}\"")
    } else {
        let short: String = prompt.chars().take(EXCERPT_CHARS).collect();
        format!("\"{short}...\"")
    }
}
