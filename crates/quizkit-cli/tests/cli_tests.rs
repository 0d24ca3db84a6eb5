//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizkit() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizkit").unwrap();
    cmd.env_remove("QUIZKIT_BANK").env("RUST_LOG", "quizkit=warn");
    cmd
}

const TRUE_FALSE_BANK: &str = r#"
[bank]
id = "true-false"
name = "True or False"

[[questions]]
prompt = "Neglect is the most common form of maltreatment."
options = ["True", "False"]
answer = "True"
explanation = "About three quarters of cases."

[[questions]]
prompt = "Infants face the highest victimization rate."
options = ["True", "False"]
answer = "True"
explanation = "24.5 per 1,000 children."

[[questions]]
prompt = "Most perpetrators are parents."
options = ["True", "False"]
answer = "True"
explanation = "Roughly 77.5%."
"#;

fn write_bank(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("true-false.toml");
    std::fs::write(&path, TRUE_FALSE_BANK).unwrap();
    path
}

#[test]
fn take_builtin_quiz() {
    quizkit()
        .args(["take", "--questions", "3", "--seed", "7"])
        .write_stdin("1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Child Maltreatment Quiz"))
        .stdout(predicate::str::contains("Question 1 of 3"))
        .stdout(predicate::str::contains("Question 3 of 3"))
        .stdout(predicate::str::contains("Your Score:"))
        .stdout(predicate::str::contains("Review Your Answers"));
}

#[test]
fn take_custom_bank_by_text() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    quizkit()
        .args(["take", "-n", "3", "--bank"])
        .arg(&bank)
        .write_stdin("True\nTrue\nFalse\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Correct!"))
        .stdout(predicate::str::contains(
            "✗ Incorrect. The correct answer is: True.",
        ))
        .stdout(predicate::str::contains("Your Score: 2/3 (67%)"))
        .stdout(predicate::str::contains("Good job!"))
        .stdout(predicate::str::contains("Finished in"))
        .stdout(predicate::str::contains("To revisit (1):"));
}

#[test]
fn take_normalized_accepts_lowercase() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    quizkit()
        .args(["take", "-n", "3", "--matching", "normalized", "--bank"])
        .arg(&bank)
        .write_stdin("true\n TRUE\ntrue \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Score: 3/3 (100%)"))
        .stdout(predicate::str::contains("Excellent!"))
        .stdout(predicate::str::contains("No questions missed."));
}

#[test]
fn take_rejects_unknown_matching_mode() {
    quizkit()
        .args(["take", "--matching", "relaxed"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown answer matching mode: relaxed"));
}

#[test]
fn take_exact_rejects_lowercase() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    quizkit()
        .args(["take", "-n", "3", "--bank"])
        .arg(&bank)
        .write_stdin("true\ntrue\ntrue\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("'true' is not one of the options"))
        .stderr(predicate::str::contains("no valid answer to question 1"));
}

#[test]
fn take_json_summary() {
    let output = quizkit()
        .args(["take", "-n", "4", "--seed", "11", "--json"])
        .write_stdin("1\n2\n1\n2\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["requested_count"], 4);
    assert_eq!(summary["answered_log"].as_array().unwrap().len(), 4);
    let score = summary["score"].as_u64().unwrap();
    let percentage = summary["percentage"].as_f64().unwrap();
    assert!((percentage - 25.0 * score as f64).abs() < 1e-9);
}

#[test]
fn take_same_seed_same_questions() {
    let run = || {
        let output = quizkit()
            .args(["take", "-n", "5", "--seed", "99", "--json"])
            .write_stdin("1\n1\n1\n1\n1\n")
            .output()
            .unwrap();
        let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        summary["answered_log"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["question_prompt"].as_str().unwrap().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn take_writes_html_results() {
    let dir = TempDir::new().unwrap();
    let html = dir.path().join("results/quiz.html");

    quizkit()
        .args(["take", "-n", "3", "--seed", "1", "--html"])
        .arg(&html)
        .write_stdin("1\n1\n1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Results page"));

    let page = std::fs::read_to_string(&html).unwrap();
    assert!(page.contains("Your Score:"));
    assert!(page.contains("Review Your Answers"));
}

#[test]
fn take_rejects_too_few_questions() {
    quizkit()
        .args(["take", "-n", "2"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "requested 2 questions, expected between 3 and 7",
        ));
}

#[test]
fn take_fails_when_input_ends_early() {
    quizkit()
        .args(["take", "-n", "3", "--seed", "5"])
        .write_stdin("1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}

#[test]
fn take_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);
    let config = dir.path().join("quizkit.toml");
    std::fs::write(
        &config,
        format!(
            "default_question_count = 3\nanswer_matching = \"normalized\"\nbank_path = {:?}\n",
            bank.display().to_string()
        ),
    )
    .unwrap();

    quizkit()
        .args(["take", "--config"])
        .arg(&config)
        .write_stdin("true\ntrue\ntrue\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("True or False"))
        .stdout(predicate::str::contains("Question 3 of 3"))
        .stdout(predicate::str::contains("Your Score: 3/3 (100%)"));
}

#[test]
fn take_missing_config_fails() {
    quizkit()
        .args(["take", "--config", "no_such_config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn validate_valid_bank() {
    let dir = TempDir::new().unwrap();
    let bank = write_bank(&dir);

    quizkit()
        .arg("validate")
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 questions"))
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("small.toml");
    std::fs::write(
        &path,
        r#"
[bank]
id = "small"
name = "Small"

[[questions]]
prompt = "Only one?"
options = ["Yes", "No"]
answer = "Yes"
"#,
    )
    .unwrap();

    quizkit()
        .arg("validate")
        .arg("--bank")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[#1] WARNING: explanation is empty (\"Only one?\")",
        ))
        .stdout(predicate::str::contains("NOT PLAYABLE: bank has 1 question(s)"))
        .stdout(predicate::str::contains("1 warning(s) found"))
        .stdout(predicate::str::contains("1 bank(s) too small to start a quiz"));
}

#[test]
fn validate_directory() {
    let dir = TempDir::new().unwrap();
    write_bank(&dir);
    std::fs::write(
        dir.path().join("other.toml"),
        TRUE_FALSE_BANK.replace("True or False", "Second Bank"),
    )
    .unwrap();

    quizkit()
        .arg("validate")
        .arg("--bank")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("True or False"))
        .stdout(predicate::str::contains("Second Bank"))
        .stdout(predicate::str::contains("id \"true-false\" is also used by"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_rejects_answer_outside_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, TRUE_FALSE_BANK.replacen("answer = \"True\"", "answer = \"Yes\"", 1))
        .unwrap();

    quizkit()
        .arg("validate")
        .arg("--bank")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not one of its options"));
}

#[test]
fn validate_nonexistent_file() {
    quizkit()
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn list_builtin_bank() {
    quizkit()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("child-maltreatment"))
        .stdout(predicate::str::contains("Neglect is the most common"))
        .stdout(predicate::str::contains("7 question(s)"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizkit.toml"))
        .stdout(predicate::str::contains("Created question-banks/example.toml"));

    assert!(dir.path().join("quizkit.toml").exists());
    assert!(dir.path().join("question-banks/example.toml").exists());

    quizkit()
        .current_dir(dir.path())
        .args(["validate", "--bank", "question-banks/example.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All question banks valid"));
}

#[test]
fn init_then_take_example_bank() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("has 5 questions"));

    quizkit()
        .current_dir(dir.path())
        .args(["take", "--bank", "question-banks/example.toml"])
        .write_stdin("1\n1\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prevention Basics"))
        .stdout(predicate::str::contains("Question 5 of 5"))
        .stdout(predicate::str::contains("Your Score:"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizkit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    quizkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Child maltreatment awareness quiz"));
}

#[test]
fn version_output() {
    quizkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizkit"));
}
