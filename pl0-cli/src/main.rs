//! PL/0 machine CLI: check and run instruction files.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage, load, or configuration error
//! - 2: `check` found errors
//! - 3: Runtime error

mod commands;

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use pl0_common::Word;
use pl0_vm::config::{DEFAULT_BASE_OFFSET, DEFAULT_MAX_ADDRESS, DEFAULT_TIMEOUT};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "pl0")]
#[command(about = "Run PL/0 machine programs", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue)]
    version: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a program from line 1
    Run {
        /// Instruction file, one instruction per line
        file: Option<PathBuf>,

        /// Enable timing and abort after MS milliseconds (default 5000)
        #[arg(short = 't', long = "timeout", value_name = "MS", num_args = 0..=1)]
        timeout: Option<Option<String>>,

        /// Lowest addressable memory address
        #[arg(long = "base", value_name = "ADDR", default_value_t = DEFAULT_BASE_OFFSET)]
        base: Word,

        /// One past the highest address; SP and FP start here
        #[arg(long, value_name = "ADDR", default_value_t = DEFAULT_MAX_ADDRESS)]
        max_address: Word,
    },
    /// Decode every line without executing
    Check {
        /// Instruction file
        file: PathBuf,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help lands here too, on stdout.
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if cli.version {
        println!("pl0 {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let result = match cli.command {
        Some(Command::Run {
            file,
            timeout,
            base,
            max_address,
        }) => match run_target(file, timeout) {
            Ok((file, budget)) => commands::run(&file, budget, base, max_address),
            Err(message) => {
                eprintln!("error: {message}");
                Err(1)
            }
        },
        Some(Command::Check { file }) => commands::check(&file),
        None => {
            eprintln!("{}", Cli::command().render_help());
            process::exit(1);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

/// Resolve the program file and time budget for `run`.
///
/// `-t` takes an optional value, so in `run -t prog.pl0` the file lands in
/// the timeout slot. A value that is not a number is taken as the file when
/// no file was given separately.
fn run_target(
    file: Option<PathBuf>,
    timeout: Option<Option<String>>,
) -> Result<(PathBuf, Option<Duration>), String> {
    let (file, budget) = match timeout {
        None => (file, None),
        Some(None) => (file, Some(DEFAULT_TIMEOUT)),
        Some(Some(value)) => match value.parse::<u64>() {
            Ok(ms) => (file, Some(Duration::from_millis(ms))),
            Err(_) if file.is_none() => (Some(PathBuf::from(value)), Some(DEFAULT_TIMEOUT)),
            Err(_) => return Err(format!("invalid timeout '{value}'")),
        },
    };
    let file = file.ok_or_else(|| "run requires an input file".to_string())?;
    Ok((file, budget))
}
