// Entrypoint for the poem converter.
// - Keeps `main` small: set up logging and Ctrl-C handling, pick a
//   prompter and hand it to the session loop.
// - Every failure ends up in one place and is reported without a trace.

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use poem_entry_cli::{
    config::Config,
    error::is_interrupt,
    ui::{run, StreamPrompter, TerminalPrompter},
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more.
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    match run_app() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_interrupt(&err) => {
            farewell();
            ExitCode::SUCCESS
        }
        Err(err) => {
            let message = format!("❌ Error: {:#}", err);
            if io::stderr().is_terminal() {
                eprintln!("\n{}", message.red());
            } else {
                eprintln!("\n{}", message);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_app() -> Result<()> {
    // Ctrl-C while reading the body (cooked mode) arrives as a signal.
    // Inside dialoguer prompts it surfaces as an Interrupted read instead.
    ctrlc::set_handler(|| {
        farewell();
        std::process::exit(0);
    })
    .context("Failed to install Ctrl-C handler")?;

    let config = Config::default();
    tracing::debug!(dir = %config.poems_dir.display(), "starting entry session");

    if io::stdin().is_terminal() {
        run(&mut TerminalPrompter::new(), &config)?;
    } else {
        let stdin = io::stdin();
        let mut prompter = StreamPrompter::new(stdin.lock(), io::stdout());
        run(&mut prompter, &config)?;
    }
    Ok(())
}

fn farewell() {
    let message = "👋 Goodbye!";
    if io::stdout().is_terminal() {
        println!("\n\n{}", message.cyan());
    } else {
        println!("\n\n{}", message);
    }
}
