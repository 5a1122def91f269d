//! `cronlens` CLI -- check cron expressions and preview their upcoming runs.
//!
//! ## Usage
//!
//! ```sh
//! # Validate an expression; problems are explained in plain English
//! cronlens check "*/5 * * * *"
//!
//! # Machine-readable error descriptors (translation key + payload)
//! cronlens check --json "61 * * * *"
//!
//! # Preview the next five runs in the host timezone
//! cronlens next "0 9 * * 1-5"
//!
//! # Formatted for another locale
//! cronlens next --locale de-DE "0 9 * * 1-5"
//! ```

mod messages;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cronlens_core::{calculate_next_runs, detect_ambiguous_schedule, get_validation_errors};
use std::process;

#[derive(Parser)]
#[command(
    name = "cronlens",
    version,
    about = "Cron expression checker and next-run preview"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a cron expression and explain any problems
    Check {
        /// The 5-field cron expression (quote it)
        expression: String,
        /// Print raw error descriptors as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the next five runs of a cron expression
    Next {
        /// The 5-field cron expression (quote it)
        expression: String,
        /// BCP-47 locale tag used to format the runs
        #[arg(long, default_value = "en-US")]
        locale: String,
        /// Print the calculation result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { expression, json } => check(&expression, json),
        Commands::Next {
            expression,
            locale,
            json,
        } => next(&expression, &locale, json),
    }
}

fn check(expression: &str, json: bool) -> Result<()> {
    let errors = get_validation_errors(expression);

    if json {
        println!("{}", serde_json::to_string_pretty(&errors)?);
        if !errors.is_empty() {
            process::exit(1);
        }
        return Ok(());
    }

    if errors.is_empty() {
        println!("OK: {}", expression);
        if detect_ambiguous_schedule(expression) {
            println!("note: {}", messages::AMBIGUOUS);
        }
        return Ok(());
    }

    for error in &errors {
        eprintln!("error: {}", messages::render(error));
    }
    process::exit(1);
}

fn next(expression: &str, locale: &str, json: bool) -> Result<()> {
    let result = calculate_next_runs(expression, locale);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if result.error.is_some() {
            process::exit(1);
        }
        return Ok(());
    }

    if let Some(error) = &result.error {
        eprintln!("error: {}", error);
        process::exit(1);
    }

    if result.has_ambiguous_schedule {
        println!("note: {}", messages::AMBIGUOUS);
    }
    for run in &result.runs {
        println!("{}", run);
    }
    Ok(())
}
