//! Error types for instruction decoding and static checks.

use pl0_common::Word;
use thiserror::Error;

/// Syntax errors from decoding one instruction line.
///
/// These carry no line number: the engine attaches the program counter,
/// [`check`](crate::check) attaches the line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// An unrecognized opcode mnemonic.
    #[error("unknown opcode '{token}'")]
    UnknownOpcode { token: String },

    /// An opcode got the wrong number of operands.
    #[error("{opcode} expects {expected} operand(s), found {found}")]
    OperandCount {
        opcode: &'static str,
        expected: usize,
        found: usize,
    },

    /// A name that is not one of A, B, C, FP, SP.
    #[error("unknown register '{token}'")]
    UnknownRegister { token: String },

    /// A numeric literal that does not fit in a machine word.
    #[error("invalid number '{token}'")]
    InvalidNumber { token: String },

    /// Operators and sub-expressions do not alternate.
    #[error("malformed expression '{token}'")]
    MalformedExpression { token: String },
}

/// Problems found by the whole-program static check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// A line does not decode.
    #[error("line {line}: {source}")]
    Syntax {
        line: usize,
        #[source]
        source: DecodeError,
    },

    /// A literal jump target outside the program.
    #[error("line {line}: jump target {target} is outside the program (1..={len})")]
    JumpOutOfRange { line: usize, target: Word, len: usize },
}

impl CheckError {
    /// 1-based line the error refers to.
    pub fn line(&self) -> usize {
        match *self {
            CheckError::Syntax { line, .. } | CheckError::JumpOutOfRange { line, .. } => line,
        }
    }
}
