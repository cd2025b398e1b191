//! PL/0 machine: executes the assembly-level output of a PL/0 compiler.
//!
//! The machine has:
//! - Three general registers (A, B, C), a frame pointer and a stack pointer
//! - A fixed memory window `[base_offset, max_address)`, shared by
//!   addressable storage and a downward-growing stack
//! - A 1-based program counter over the instruction lines
//! - An optional wall-clock budget, checked before every instruction
//!
//! # Usage
//!
//! ```
//! use pl0_common::Program;
//! use pl0_vm::{run, MachineConfig};
//!
//! let program = Program::from_source("LOAD A,5\nLOAD B,3\nPLUS\nPRINT C\nEND\n");
//! let mut out = Vec::new();
//! run(&program, MachineConfig::default(), &mut out, &mut std::io::sink()).unwrap();
//! assert_eq!(out, b"8");
//! ```

pub mod config;
pub mod error;
pub mod execute;
pub mod machine;
pub mod memory;
pub mod registers;

mod dump;
mod eval;

pub use config::{ConfigError, MachineConfig};
pub use error::RuntimeError;
pub use execute::Outcome;
pub use machine::Machine;
pub use registers::RegisterBank;

use pl0_common::Program;
use std::io::Write;

/// Execute a program from line 1 and return the run summary.
///
/// This is the primary entry point when the final machine state is not
/// needed. To dump state after a failure, build a [`Machine`] and call
/// [`Machine::execute`] and [`Machine::dump_state`] directly.
///
/// # Errors
///
/// Returns [`RuntimeError`] if execution fails (syntax error, addressing
/// error, division by zero, stack overflow/underflow, timeout, etc.).
pub fn run<O: Write, D: Write>(
    program: &Program,
    config: MachineConfig,
    out: &mut O,
    diag: &mut D,
) -> Result<Outcome, RuntimeError> {
    let mut machine = Machine::new(program, config);
    machine.execute(out, diag)
}
