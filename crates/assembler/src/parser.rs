//! Parser for instruction tokens → [`Instruction`].
//!
//! Dispatches on the opcode to the operand pattern it takes.

use crate::error::DecodeError;
use crate::expr::{parse_operand, parse_register};
use pl0_common::{Instruction, Opcode};

/// Parse the tokens of a single line.
///
/// Returns `Ok(None)` for blank lines (empty token list). A mnemonic that
/// starts with `@` is a debug marker regardless of what follows it.
pub(crate) fn parse_line(tokens: &[&str]) -> Result<Option<Instruction>, DecodeError> {
    let Some((&mnemonic, args)) = tokens.split_first() else {
        return Ok(None);
    };

    if mnemonic.starts_with('@') {
        return Ok(Some(Instruction::Debug));
    }

    let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| DecodeError::UnknownOpcode {
        token: mnemonic.to_string(),
    })?;

    if args.len() != opcode.operand_count() {
        return Err(DecodeError::OperandCount {
            opcode: opcode.mnemonic(),
            expected: opcode.operand_count(),
            found: args.len(),
        });
    }

    let instr = match opcode {
        // Register target + operand
        Opcode::Load => Instruction::Load {
            dst: parse_register(args[0])?,
            src: parse_operand(args[1])?,
        },

        // Two operands
        Opcode::Store => Instruction::Store {
            src: parse_operand(args[0])?,
            addr: parse_operand(args[1])?,
        },

        // Register target
        Opcode::Pop => Instruction::Pop(parse_register(args[0])?),

        // One operand
        Opcode::Push => Instruction::Push(parse_operand(args[0])?),
        Opcode::Jmp => Instruction::Jmp(parse_operand(args[0])?),
        Opcode::Jpc => Instruction::Jpc(parse_operand(args[0])?),
        Opcode::Call => Instruction::Call(parse_operand(args[0])?),
        Opcode::Ret => Instruction::Ret(parse_operand(args[0])?),
        Opcode::Print => Instruction::Print(parse_operand(args[0])?),

        // No operands
        Opcode::PushUp => Instruction::PushUp,
        Opcode::Plus => Instruction::Plus,
        Opcode::Minus => Instruction::Minus,
        Opcode::Multi => Instruction::Multi,
        Opcode::Div => Instruction::Div,
        Opcode::CmpOdd => Instruction::CmpOdd,
        Opcode::CmpEq => Instruction::CmpEq,
        Opcode::CmpLt => Instruction::CmpLt,
        Opcode::CmpGt => Instruction::CmpGt,
        Opcode::CmpNotEq => Instruction::CmpNotEq,
        Opcode::CmpLe => Instruction::CmpLe,
        Opcode::CmpGe => Instruction::CmpGe,
        Opcode::Println => Instruction::Println,
        Opcode::Debug => Instruction::Debug,
        Opcode::End => Instruction::End,
    };

    Ok(Some(instr))
}
