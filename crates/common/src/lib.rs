//! PL/0 machine common types.
//!
//! This crate provides the shared data structures for the PL/0 register
//! machine:
//!
//! - [`Word`]: the machine's integer cell type
//! - [`Register`]: the five named registers
//! - [`Opcode`]: all 24 opcodes
//! - [`Operand`], [`Expr`], [`Term`]: operand expressions
//! - [`Instruction`]: a decoded instruction
//! - [`Program`]: the loaded instruction text
//! - [`LoadError`]: errors from reading program files

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod operand;
pub mod program;
pub mod register;

/// Integer width of registers, memory cells, and literals.
pub type Word = i32;

pub use error::LoadError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use operand::{Expr, Operand, Sign, Term};
pub use program::Program;
pub use register::Register;
