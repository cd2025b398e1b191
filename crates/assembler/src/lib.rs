//! PL/0 machine assembler: instruction text → [`Instruction`].
//!
//! Decoding is a mechanical per-line translation: tokenize, look up the
//! opcode, parse operand expressions. There is no label resolution and no
//! output format; the engine calls [`decode_line`] on the line under the
//! program counter, and [`check`] runs the same decoder over a whole
//! program ahead of time.
//!
//! # Usage
//!
//! ```
//! use pl0_assembler::decode_line;
//! use pl0_common::{Instruction, Operand, Register};
//!
//! let instr = decode_line("load a, 5").unwrap();
//! assert_eq!(
//!     instr,
//!     Some(Instruction::Load { dst: Register::A, src: Operand::literal(5) })
//! );
//! assert_eq!(decode_line("   ; comment").unwrap(), None);
//! ```

pub mod error;

mod check;
mod expr;
mod lexer;
mod parser;

pub use check::check;
pub use error::{CheckError, DecodeError};
pub use expr::{parse_operand, parse_register};

use lexer::tokenize_line;
use parser::parse_line;
use pl0_common::Instruction;

/// Decode one line of instruction text.
///
/// Returns `Ok(None)` for blank and comment-only lines, which execute as
/// no-ops but still occupy an address.
pub fn decode_line(line: &str) -> Result<Option<Instruction>, DecodeError> {
    parse_line(&tokenize_line(line))
}
