//! Runtime errors for the PL/0 machine.
//!
//! Every error is fatal and carries the line (`at`) the program counter was
//! on when it fired.

use pl0_assembler::DecodeError;
use pl0_common::Word;
use thiserror::Error;

/// Errors that stop a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The line under the program counter does not decode.
    #[error("syntax error at line {at}: {source}")]
    Syntax {
        at: usize,
        #[source]
        source: DecodeError,
    },

    /// A memory access outside `[base_offset, max_address)`.
    #[error("address {address} out of range (null pointer) at line {at}")]
    AddressOutOfRange { at: usize, address: Word },

    /// `DIV` with B = 0.
    #[error("division by zero at line {at}")]
    DivisionByZero { at: usize },

    /// A push or reservation with no room left below SP.
    #[error("stack overflow (SP={sp}) at line {at}")]
    StackOverflow { at: usize, sp: Word },

    /// A pop (or frame discard) past the top of memory.
    #[error("stack underflow (SP={sp}) at line {at}")]
    StackUnderflow { at: usize, sp: Word },

    /// The wall-clock budget ran out before `END`.
    #[error("timeout of {timeout_ms} ms exceeded at line {at}")]
    TimeoutExceeded { at: usize, timeout_ms: u128 },

    /// A jump, call, or return to a line that does not exist.
    #[error("jump target {target} outside the program at line {at}")]
    InvalidJumpTarget { at: usize, target: Word },

    /// The program counter ran past the last line without `END`.
    #[error("unexpected end of program at line {at}")]
    UnexpectedEndOfProgram { at: usize },

    /// Writing program output or a state dump failed.
    #[error("output error at line {at}: {message}")]
    Output { at: usize, message: String },
}

impl RuntimeError {
    /// The line the error fired at.
    pub fn line(&self) -> usize {
        match *self {
            RuntimeError::Syntax { at, .. }
            | RuntimeError::AddressOutOfRange { at, .. }
            | RuntimeError::DivisionByZero { at }
            | RuntimeError::StackOverflow { at, .. }
            | RuntimeError::StackUnderflow { at, .. }
            | RuntimeError::TimeoutExceeded { at, .. }
            | RuntimeError::InvalidJumpTarget { at, .. }
            | RuntimeError::UnexpectedEndOfProgram { at }
            | RuntimeError::Output { at, .. } => at,
        }
    }
}
