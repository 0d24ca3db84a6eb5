//! The `quizkit list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizkit_core::config::load_config_from;

pub fn execute(bank: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = super::load_bank(bank, &config)?;

    println!("{} [{}]", bank.name(), bank.id());
    if !bank.description().is_empty() {
        println!("{}", bank.description());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Options"]);
    for (i, q) in bank.questions().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(q.prompt()),
            Cell::new(q.options().len()),
        ]);
    }
    println!("{table}");
    println!("{} question(s)", bank.len());

    Ok(())
}
