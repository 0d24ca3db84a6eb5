//! The `quizkit init` command.

use std::path::Path;

use anyhow::{Context, Result};

use quizkit_core::config::CONFIG_FILE_NAME;
use quizkit_core::parser::parse_question_bank_str;

const EXAMPLE_BANK_PATH: &str = "question-banks/example.toml";

pub fn execute() -> Result<()> {
    for (path, contents) in [
        (CONFIG_FILE_NAME, SAMPLE_CONFIG),
        (EXAMPLE_BANK_PATH, EXAMPLE_BANK),
    ] {
        write_starter(Path::new(path), contents)?;
    }

    let bank = parse_question_bank_str(EXAMPLE_BANK, Path::new(EXAMPLE_BANK_PATH))?;
    println!(
        "\nThe example bank \"{}\" has {} questions.",
        bank.name(),
        bank.len()
    );
    println!("Next steps:");
    println!("  1. Edit {EXAMPLE_BANK_PATH} or add your own banks");
    println!("  2. Run: quizkit validate --bank {EXAMPLE_BANK_PATH}");
    println!("  3. Run: quizkit take --bank {EXAMPLE_BANK_PATH}");

    Ok(())
}

/// Write a starter file unless one is already there.
fn write_starter(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizkit configuration

# Questions asked when --questions is not given
default_question_count = 5

# "exact" compares typed answers byte for byte;
# "normalized" ignores case and surrounding whitespace
answer_matching = "exact"

# Unrecognised answers allowed per question
max_invalid_attempts = 3

# Uncomment to use a custom bank instead of the built-in one
# bank_path = "question-banks/example.toml"

# Uncomment for a fixed question order
# seed = 42
"#;

const EXAMPLE_BANK: &str = r#"[bank]
id = "prevention"
name = "Prevention Basics"
description = "Protective factors and early intervention"

[[questions]]
prompt = "Prevention of child maltreatment is possible with the right supports and services."
options = ["True", "False"]
answer = "True"
explanation = "Family support, home visiting, and economic supports all reduce risk."

[[questions]]
prompt = "Which age group faces the highest risk of maltreatment?"
options = ["Infants", "Pre-teens", "Teenagers"]
answer = "Infants"
explanation = "Younger children, particularly infants, face the highest risk."

[[questions]]
prompt = "Early intervention can significantly improve outcomes."
options = ["True", "False"]
answer = "True"
explanation = "Services delivered early reduce long-term harm."

[[questions]]
prompt = "What is the most common form of child maltreatment?"
options = ["Physical abuse", "Neglect", "Emotional abuse", "Sexual abuse"]
answer = "Neglect"
explanation = "Neglect accounts for roughly three quarters of substantiated cases."

[[questions]]
prompt = "Which of these is a protective factor for families?"
options = ["Social isolation", "Concrete support in times of need", "Housing instability"]
answer = "Concrete support in times of need"
explanation = "Access to food, housing, and services in a crisis lowers family stress."
"#;
