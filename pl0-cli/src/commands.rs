//! CLI command implementations.

use pl0_common::{Program, Word};
use pl0_vm::{Machine, MachineConfig};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Decode every line of a program without executing it.
pub fn check(file: &Path) -> Result<(), i32> {
    let program = read_program(file)?;

    match pl0_assembler::check(&program) {
        Ok(count) => {
            println!("OK: {} ({count} instructions)", file.display());
            Ok(())
        }
        Err(errors) => {
            for e in &errors {
                eprintln!("error: {e}");
            }
            Err(2)
        }
    }
}

/// Execute a program, optionally timed.
///
/// With a time budget the run is framed by start/end banners on stdout and
/// the elapsed time is reported. On a runtime error the machine state is
/// dumped to stderr.
pub fn run(
    file: &Path,
    timeout: Option<Duration>,
    base: Word,
    max_address: Word,
) -> Result<(), i32> {
    let program = read_program(file)?;

    let mut config = MachineConfig::new(base, max_address).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;
    if let Some(budget) = timeout {
        config = config.with_timeout(budget);
    }
    let timed = config.timeout.is_some();

    if timed {
        println!("--- program start ---");
    }

    let mut machine = Machine::new(&program, config);
    match machine.execute(&mut io::stdout(), &mut io::stderr()) {
        Ok(outcome) => {
            if timed {
                println!();
                println!("--- program end ---");
                println!("elapsed: {} ms", outcome.elapsed.as_millis());
            }
            Ok(())
        }
        Err(e) => {
            // Program output first, so the dump follows it in a shared terminal.
            let _ = io::stdout().flush();
            eprintln!("runtime error: {e}");
            let _ = machine.dump_state(&mut io::stderr());
            Err(3)
        }
    }
}

fn read_program(file: &Path) -> Result<Program, i32> {
    Program::load(file).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
