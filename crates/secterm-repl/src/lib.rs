//! secterm REPL: an interactive host for the secret terminal.
//!
//! This REPL owns one [`Session`] and forwards each line to the shell.
//! It handles:
//! - Rendering output lines and events (see [`format`])
//! - Alert lockouts: input is held for the alert's duration
//! - `exit` closing the terminal
//! - Command history via rustyline

pub mod format;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use secterm_kernel::{Dispatch, Event, Session, Shell, ShellConfig};

use format::OutputContext;

/// What the REPL loop should do after one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text to print, possibly empty.
    pub text: String,
    /// Hold input for this long before reading the next line.
    pub lockout: Option<Duration>,
    /// The shell asked to close the terminal.
    pub close: bool,
}

impl Outcome {
    fn from_dispatch(dispatch: &Dispatch, context: OutputContext) -> Self {
        let lockout = dispatch.events.iter().find_map(|event| match event {
            Event::Alert { duration_ms } => Some(Duration::from_millis(*duration_ms)),
            _ => None,
        });
        Self {
            text: format::format_dispatch(dispatch, context),
            lockout,
            close: dispatch.events.contains(&Event::Close),
        }
    }
}

/// REPL state: the shell and the one session it serves.
pub struct Repl {
    shell: Shell,
    session: Session,
    context: OutputContext,
}

impl Repl {
    /// Create a REPL using the config file from the default location.
    pub fn new() -> Result<Self> {
        Self::with_config(ShellConfig::load()?)
    }

    /// Create a REPL with an explicit configuration.
    pub fn with_config(config: ShellConfig) -> Result<Self> {
        let shell =
            Shell::with_default_layout(config).context("Failed to build the filesystem")?;
        Ok(Self {
            shell,
            session: Session::new(),
            context: format::detect_context(),
        })
    }

    /// Load the config from `path` if given, else from the default location.
    pub fn from_config_path(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => ShellConfig::load_from(path)?,
            None => ShellConfig::load()?,
        };
        Self::with_config(config)
    }

    /// Override terminal detection.
    pub fn with_context(mut self, context: OutputContext) -> Self {
        self.context = context;
        self
    }

    /// Banner lines shown when the terminal opens.
    pub fn motd(&self) -> &[String] {
        &self.shell.config().motd
    }

    /// The prompt for the next line. Empty while a password is awaited.
    pub fn prompt(&self) -> String {
        if self.session.auth == secterm_kernel::AuthState::AwaitingPassword {
            String::new()
        } else {
            self.session.prompt()
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> Outcome {
        let dispatch = self.shell.dispatch(line, &mut self.session);
        let outcome = Outcome::from_dispatch(&dispatch, self.context);
        if outcome.close {
            tracing::debug!("terminal closed, discarding session");
            self.session.reset();
        }
        outcome
    }
}

/// Path of the persistent line-editor history.
fn history_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "secterm").map(|d| d.data_dir().join("history.txt"))
}

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<(), DefaultHistory>, history_path: &Option<PathBuf>) {
    if let Some(path) = history_path {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create history directory: {}", e);
            }
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("Failed to save history: {}", e);
        }
    }
}

/// Run the REPL until `exit`, end of input or a terminal error.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let mut repl = Repl::from_config_path(config_path)?;

    let mut rl: Editor<(), DefaultHistory> =
        Editor::new().context("Failed to create editor")?;

    let history_path = history_path();
    if let Some(ref path) = history_path {
        if let Err(e) = rl.load_history(path) {
            // Expected on first run
            let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
            if !is_not_found {
                tracing::warn!("Failed to load history: {}", e);
            }
        }
    }

    for line in repl.motd() {
        println!("{line}");
    }
    println!();

    loop {
        let prompt = repl.prompt();
        let awaiting_password = prompt.is_empty();

        match rl.readline(&prompt) {
            Ok(line) => {
                if !awaiting_password {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        tracing::warn!("Failed to add history entry: {}", e);
                    }
                }

                let outcome = repl.process_line(&line);
                if !outcome.text.is_empty() {
                    println!("{}", outcome.text);
                }
                if outcome.close {
                    break;
                }
                if let Some(lockout) = outcome.lockout {
                    std::thread::sleep(lockout);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    save_history(&mut rl, &history_path);

    Ok(())
}

/// Run one line against a fresh session and return what would be printed.
pub fn run_once(line: &str, config_path: Option<&Path>) -> Result<Outcome> {
    let mut repl = Repl::from_config_path(config_path)?;
    Ok(repl.process_line(line))
}
