//! quizkit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use quizkit_core::model::AnswerMatching;

mod commands;

#[derive(Parser)]
#[command(
    name = "quizkit",
    version,
    about = "Child maltreatment awareness quiz"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz
    Take {
        /// Number of questions (at least 3, at most the bank size)
        #[arg(long, short = 'n')]
        questions: Option<usize>,

        /// Path to a .toml question bank (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Seed for question selection
        #[arg(long)]
        seed: Option<u64>,

        /// How typed answers are matched: "exact" or "normalized" (ignores
        /// case and surrounding whitespace). Overrides the config file.
        #[arg(long, value_name = "MODE")]
        matching: Option<AnswerMatching>,

        /// Print the final summary as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Write an HTML results page to this path
        #[arg(long)]
        html: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to question bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// List the questions in a bank
    List {
        /// Path to a .toml question bank (default: built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizkit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            questions,
            bank,
            seed,
            matching,
            json,
            html,
            config,
        } => commands::take::execute(commands::take::TakeArgs {
            questions,
            bank,
            seed,
            matching,
            json,
            html,
            config,
        }),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::List { bank, config } => commands::list::execute(bank, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
