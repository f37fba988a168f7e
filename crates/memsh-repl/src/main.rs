//! memsh CLI entry point.
//!
//! Usage:
//!   memsh              # Interactive shell
//!   memsh -c <line>    # Execute one command line and exit

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use memsh_repl::Repl;

fn main() -> ExitCode {
    // Respects RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer())
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

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            memsh_repl::run()?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("memsh {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let line = args.get(2).context("-c requires a command argument")?;
            run_command(line)
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'memsh --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"memsh v{}

Usage:
  memsh                Interactive shell
  memsh -c <line>      Execute one command line and exit

Options:
  -c <line>            Execute the given line and exit
  -h, --help           Show this help
  -V, --version        Show version

Type `help` inside the shell for the command list.
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Execute one line against a fresh session and exit.
fn run_command(line: &str) -> Result<ExitCode> {
    let mut repl = Repl::new();
    let result = repl.execute(line);
    if let Some(text) = memsh_repl::format::render(&result) {
        println!("{text}");
    }
    if result.ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
