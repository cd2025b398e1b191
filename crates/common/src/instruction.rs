//! Decoded instructions.
//!
//! One variant per opcode, carrying typed operands. Register write targets
//! (`LOAD`, `POP`) are plain [`Register`]s; everything else is an
//! [`Operand`] expression evaluated at execution time.

use crate::opcode::Opcode;
use crate::operand::Operand;
use crate::register::Register;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Load { dst: Register, src: Operand },
    Store { src: Operand, addr: Operand },
    Push(Operand),
    Pop(Register),
    PushUp,
    Plus,
    Minus,
    Multi,
    Div,
    CmpOdd,
    CmpEq,
    CmpLt,
    CmpGt,
    CmpNotEq,
    CmpLe,
    CmpGe,
    Jmp(Operand),
    Jpc(Operand),
    Call(Operand),
    Ret(Operand),
    Print(Operand),
    Println,
    Debug,
    End,
}

impl Instruction {
    /// The opcode this instruction was decoded from.
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Load { .. } => Opcode::Load,
            Instruction::Store { .. } => Opcode::Store,
            Instruction::Push(_) => Opcode::Push,
            Instruction::Pop(_) => Opcode::Pop,
            Instruction::PushUp => Opcode::PushUp,
            Instruction::Plus => Opcode::Plus,
            Instruction::Minus => Opcode::Minus,
            Instruction::Multi => Opcode::Multi,
            Instruction::Div => Opcode::Div,
            Instruction::CmpOdd => Opcode::CmpOdd,
            Instruction::CmpEq => Opcode::CmpEq,
            Instruction::CmpLt => Opcode::CmpLt,
            Instruction::CmpGt => Opcode::CmpGt,
            Instruction::CmpNotEq => Opcode::CmpNotEq,
            Instruction::CmpLe => Opcode::CmpLe,
            Instruction::CmpGe => Opcode::CmpGe,
            Instruction::Jmp(_) => Opcode::Jmp,
            Instruction::Jpc(_) => Opcode::Jpc,
            Instruction::Call(_) => Opcode::Call,
            Instruction::Ret(_) => Opcode::Ret,
            Instruction::Print(_) => Opcode::Print,
            Instruction::Println => Opcode::Println,
            Instruction::Debug => Opcode::Debug,
            Instruction::End => Opcode::End,
        }
    }

    /// The jump target operand of `JMP`, `JPC` or `CALL`.
    pub fn jump_target(&self) -> Option<&Operand> {
        match self {
            Instruction::Jmp(op) | Instruction::Jpc(op) | Instruction::Call(op) => Some(op),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.opcode().mnemonic();
        match self {
            Instruction::Load { dst, src } => write!(f, "{m} {dst}, {src}"),
            Instruction::Store { src, addr } => write!(f, "{m} {src}, {addr}"),
            Instruction::Pop(reg) => write!(f, "{m} {reg}"),
            Instruction::Push(op)
            | Instruction::Jmp(op)
            | Instruction::Jpc(op)
            | Instruction::Call(op)
            | Instruction::Ret(op)
            | Instruction::Print(op) => write!(f, "{m} {op}"),
            _ => f.write_str(m),
        }
    }
}
