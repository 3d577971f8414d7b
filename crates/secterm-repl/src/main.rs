//! secterm CLI entry point.
//!
//! Usage:
//!   secterm                      # Interactive terminal
//!   secterm -c <line>            # Run one line against a fresh session and exit
//!   secterm --config <path> ...  # Use a specific config file

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Respects RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Interactive,
    Command(String),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<(Mode, Option<PathBuf>)> {
    let mut mode = Mode::Interactive;
    let mut config = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok((Mode::Help, None)),
            "--version" | "-V" => return Ok((Mode::Version, None)),
            "-c" => {
                let line = iter.next().context("-c requires a command argument")?;
                mode = Mode::Command(line.clone());
            }
            "--config" => {
                let path = iter.next().context("--config requires a path")?;
                config = Some(PathBuf::from(path));
            }
            other => match other.strip_prefix("--config=") {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("Unknown option: {other}\nRun 'secterm --help' for usage."),
            },
        }
    }

    Ok((mode, config))
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (mode, config) = parse_args(&args)?;

    match mode {
        Mode::Help => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }
        Mode::Version => {
            println!(
                "secterm {} ({} {})",
                env!("CARGO_PKG_VERSION"),
                env!("SECTERM_GIT_HASH"),
                env!("SECTERM_BUILD_DATE")
            );
            Ok(ExitCode::SUCCESS)
        }
        Mode::Command(line) => {
            let outcome = secterm_repl::run_once(&line, config.as_deref())?;
            if !outcome.text.is_empty() {
                println!("{}", outcome.text);
            }
            Ok(ExitCode::SUCCESS)
        }
        Mode::Interactive => {
            secterm_repl::run(config.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_help() {
    println!(
        r#"secterm v{}

Usage:
  secterm                      Interactive terminal
  secterm -c <line>            Run one line against a fresh session and exit

Options:
  -c <line>                    Run a line and exit
  --config <path>              Read configuration from <path>
  -h, --help                   Show this help
  -V, --version                Show version

Configuration is read from the platform config directory
(e.g. ~/.config/secterm/config.toml) when --config is not given.

Examples:
  secterm                      # Open the terminal
  secterm -c 'ls /docs'        # List the documents folder
  secterm -c 'help goto'       # Show help for a command
"#,
        env!("CARGO_PKG_VERSION")
    );
}
