//! The `quizkit take` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizkit_core::config::load_config_from;
use quizkit_core::engine::{EngineConfig, ProgressReporter, Prompt, QuizEngine, Responder};
use quizkit_core::model::AnswerMatching;
use quizkit_core::session::AnsweredRecord;
use quizkit_core::summary::QuizSummary;
use quizkit_report::html::write_html_report;

pub struct TakeArgs {
    pub questions: Option<usize>,
    pub bank: Option<PathBuf>,
    pub seed: Option<u64>,
    pub matching: Option<AnswerMatching>,
    pub json: bool,
    pub html: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Where the interactive transcript goes.
#[derive(Clone, Copy)]
enum Channel {
    Stdout,
    /// Keeps stdout clean for `--json`.
    Stderr,
}

impl Channel {
    fn line(self, text: &str) {
        match self {
            Channel::Stdout => println!("{text}"),
            Channel::Stderr => eprintln!("{text}"),
        }
    }

    fn prompt(self, text: &str) -> io::Result<()> {
        match self {
            Channel::Stdout => {
                print!("{text}");
                io::stdout().flush()
            }
            Channel::Stderr => {
                eprint!("{text}");
                io::stderr().flush()
            }
        }
    }
}

/// Console progress reporter.
struct ConsoleReporter {
    channel: Channel,
}

impl ProgressReporter for ConsoleReporter {
    fn on_question(&self, prompt: &Prompt<'_>) {
        let out = self.channel;
        out.line("");
        out.line(&format!(
            "{} Question {} of {}",
            progress_bar(prompt.progress, 20),
            prompt.number,
            prompt.total
        ));
        out.line(prompt.question.prompt());
        for (i, option) in prompt.question.options().iter().enumerate() {
            out.line(&format!("  {}) {option}", i + 1));
        }
    }

    fn on_answer(&self, record: &AnsweredRecord) {
        let text = if record.is_correct {
            format!("✓ Correct! {}", record.explanation)
        } else {
            format!(
                "✗ Incorrect. The correct answer is: {}. {}",
                record.correct_answer, record.explanation
            )
        };
        self.channel.line(text.trim_end());
    }

    fn on_invalid_option(&self, option: &str, attempts_left: u32) {
        self.channel.line(&format!(
            "'{option}' is not one of the options ({attempts_left} attempt(s) left)"
        ));
    }

    fn on_complete(&self, summary: &QuizSummary) {
        let out = self.channel;
        out.line("");
        out.line(&format!(
            "Your Score: {}/{} ({:.0}%)",
            summary.score, summary.requested_count, summary.percentage
        ));
        out.line(summary.band.message());
        out.line(&format!("Finished in {}s", summary.elapsed_secs()));
    }
}

/// Reads answers line by line. A number picks the option at that position.
struct LineResponder<R> {
    input: R,
    channel: Channel,
}

impl<R: BufRead> Responder for LineResponder<R> {
    fn respond(&mut self, prompt: &Prompt<'_>) -> Result<String> {
        self.channel.prompt("Your answer: ")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read answer")?;
        if read == 0 {
            anyhow::bail!("input closed before the quiz was finished");
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        let options = prompt.question.options();
        match answer.trim().parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => Ok(options[n - 1].clone()),
            _ => Ok(answer.to_string()),
        }
    }
}

fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn execute(args: TakeArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let bank = super::load_bank(args.bank, &config)?;

    let mut engine_config = EngineConfig::from(&config);
    if let Some(n) = args.questions {
        engine_config.question_count = n;
    }
    if let Some(matching) = args.matching {
        engine_config.matching = matching;
    }
    let engine = QuizEngine::new(engine_config);

    let channel = if args.json {
        Channel::Stderr
    } else {
        Channel::Stdout
    };
    channel.line(&format!("{} ({} questions available)", bank.name(), bank.len()));

    let reporter = ConsoleReporter { channel };
    let mut responder = LineResponder {
        input: io::stdin().lock(),
        channel,
    };

    let summary = match args.seed.or(config.seed) {
        Some(seed) => engine.run(
            &bank,
            &mut responder,
            &reporter,
            &mut StdRng::seed_from_u64(seed),
        )?,
        None => engine.run(&bank, &mut responder, &reporter, &mut rand::rng())?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_review(&summary);
    }

    if let Some(path) = &args.html {
        write_html_report(&summary, &bank.summary(), path)?;
        eprintln!("Results page: {}", path.display());
    }

    Ok(())
}

fn print_review(summary: &QuizSummary) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", "Result"]);

    for (i, record) in summary.answered_log.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&record.question_prompt),
            Cell::new(&record.user_answer),
            Cell::new(&record.correct_answer),
            Cell::new(if record.is_correct { "✓" } else { "✗" }),
        ]);
    }

    println!("\nReview Your Answers\n{table}");

    let missed: Vec<_> = summary.missed().collect();
    if missed.is_empty() {
        println!("No questions missed.");
        return;
    }
    println!("\nTo revisit ({}):", missed.len());
    for record in missed {
        println!("  - {}", record.question_prompt);
        if !record.explanation.is_empty() {
            println!("    {}", record.explanation);
        }
    }
}
