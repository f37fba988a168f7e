//! memsh REPL — interactive shell over the in-memory filesystem.
//!
//! The REPL owns the rustyline editor, the prompt, command history, and
//! the interactive delete confirmation. Everything else lives in
//! `memsh-kernel`; one [`Session`] persists for the life of the loop.

pub mod format;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use memsh_kernel::{ConfirmSource, Dispatcher, Session};

/// What one processed line means for the loop.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print this and keep going.
    Output(String),
    /// Nothing to print, keep going.
    Quiet,
    /// Print nothing further and stop the loop.
    Exit,
}

/// Asks the delete question on stdout and reads the answer from stdin.
struct StdinConfirm;

impl ConfirmSource for StdinConfirm {
    fn ask(&mut self, target: &str) -> Option<String> {
        print!("Are you sure you want to delete {target}? (yes/no): ");
        if std::io::stdout().flush().is_err() {
            return None;
        }
        let mut reply = String::new();
        match std::io::stdin().read_line(&mut reply) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(reply.trim().to_string()),
        }
    }
}

/// REPL state: one dispatcher, one session.
pub struct Repl {
    dispatcher: Dispatcher,
    session: Session,
}

impl Repl {
    /// A REPL whose delete confirmations come from stdin.
    pub fn new() -> Self {
        let mut session = Session::new();
        session.set_confirm_source(Box::new(StdinConfirm));
        Self {
            dispatcher: Dispatcher::new(),
            session,
        }
    }

    /// A REPL around an existing session, for embedding and tests.
    pub fn with_session(session: Session) -> Self {
        Self {
            dispatcher: Dispatcher::new(),
            session,
        }
    }

    /// The prompt string for the next read.
    pub fn prompt(&self) -> String {
        format!("{}$ ", self.session.cwd_path())
    }

    /// Run one line and return the raw result.
    pub fn execute(&mut self, line: &str) -> memsh_types::ExecResult {
        self.dispatcher.dispatch(line, &mut self.session)
    }

    /// Run one input line to completion.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let result = self.execute(line);
        if result.halt {
            return LineOutcome::Exit;
        }
        match format::render(&result) {
            Some(text) => LineOutcome::Output(text),
            None => LineOutcome::Quiet,
        }
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

/// Where command history is kept between runs.
fn history_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.data_dir().join("memsh").join("history.txt"))
}

fn save_history(rl: &mut Editor<(), DefaultHistory>, path: &Option<PathBuf>) {
    if let Some(path) = path {
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

/// Run the interactive loop until `exit` or end of input.
pub fn run() -> Result<()> {
    println!("memsh v{}", env!("CARGO_PKG_VERSION"));
    println!("Type help for commands, exit to leave.");

    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;

    let history = history_path();
    if let Some(ref path) = history {
        if let Err(e) = rl.load_history(path) {
            // missing history is expected on first run
            let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
            if !is_not_found {
                tracing::warn!("Failed to load history: {}", e);
            }
        }
    }

    let mut repl = Repl::new();
    println!();

    loop {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("Failed to add history entry: {}", e);
                }
                match repl.process_line(&line) {
                    LineOutcome::Output(text) => println!("{text}"),
                    LineOutcome::Quiet => {}
                    LineOutcome::Exit => break,
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
                eprintln!("Error: {err}");
                break;
            }
        }
    }

    save_history(&mut rl, &history);
    Ok(())
}
