// ABOUTME: Main entry point for gitship
//
// Binary: gitship
// Usage: gitship
// Fully interactive - no flags beyond --help/--version. The run writes a
// timestamped log file to the current directory and exits 0 on success
// (including the nothing-to-commit no-op) or 1 on any failure.

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;

use gitship::error::SessionError;
use gitship::github::GithubClient;
use gitship::session::Outcome;
use gitship::{deps, prompt, session};

/// Create a GitHub repository and push a local directory to it
#[derive(Parser)]
#[command(name = "gitship")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    setup_logging();
    setup_panic_handler();

    if let Err(err) = run_session() {
        tracing::error!("Session aborted: {}", err);
        eprintln!("{}", format!("Error: {err}").red());
        std::process::exit(1);
    }

    Ok(())
}

fn run_session() -> Result<(), SessionError> {
    deps::ensure_dependencies()?;

    let config = prompt::collect()?;
    let github = GithubClient::new(&config.username, &config.token)?;

    match session::run(&config, &github)? {
        Outcome::Pushed { repo_url } => {
            println!("{}", format!("Done: {repo_url}").green());
        }
        Outcome::NothingToCommit => {
            // Not an error - exit 0 with the notice already printed.
        }
    }
    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    // Timestamped run log in the current directory, one line per event.
    let log_file = format!("gitship-{}.log", chrono::Local::now().format("%Y%m%d-%H%M%S"));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .expect("Failed to create log file");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_target(false)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_env("GITSHIP_LOG")
                .unwrap_or_else(|_| "gitship=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!("Unexpected termination: {}", panic_info);
        eprintln!("{}", format!("Unexpected termination: {panic_info}").red());
        std::process::exit(1);
    }));
}
