//! Whole-program static check.
//!
//! The engine only decodes lines it reaches, so a syntax error on a line
//! that never runs goes unnoticed at runtime. This pass decodes every line
//! up front and reports everything it finds.

use crate::error::CheckError;
use crate::{decode_line, DecodeError};
use pl0_common::{Instruction, Program};

/// Decode every line and validate literal jump targets.
///
/// Returns the number of executable instructions (blank and comment lines
/// excluded), or every error found, in line order.
pub fn check(program: &Program) -> Result<usize, Vec<CheckError>> {
    let len = program.len();
    let mut errors = Vec::new();
    let mut count = 0;

    for (idx, text) in program.lines.iter().enumerate() {
        let line = idx + 1;
        match decode_line(text) {
            Ok(Some(instr)) => {
                count += 1;
                check_jump(&instr, line, len, &mut errors);
            }
            Ok(None) => {}
            Err(source) => errors.push(syntax(line, source)),
        }
    }

    if errors.is_empty() {
        Ok(count)
    } else {
        Err(errors)
    }
}

fn syntax(line: usize, source: DecodeError) -> CheckError {
    CheckError::Syntax { line, source }
}

fn check_jump(instr: &Instruction, line: usize, len: usize, errors: &mut Vec<CheckError>) {
    let Some(target) = instr.jump_target().and_then(|op| op.expr.as_literal()) else {
        return;
    };
    let in_range = usize::try_from(target).is_ok_and(|t| (1..=len).contains(&t));
    if !in_range {
        errors.push(CheckError::JumpOutOfRange { line, target, len });
    }
}
