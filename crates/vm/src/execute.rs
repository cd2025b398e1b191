//! Main execution loop and opcode dispatch.

use crate::error::RuntimeError;
use crate::machine::Machine;
use pl0_assembler::decode_line;
use pl0_common::{Instruction, Operand, Word};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Where control goes after an instruction.
enum Flow {
    /// Fall through to `pc + 1`.
    Next,
    /// Continue at the given 1-based line.
    Jump(usize),
    /// `END` reached.
    Halt,
}

/// Summary of a run that reached `END`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Instructions executed (blank and comment lines excluded).
    pub steps: u64,
    /// Wall-clock time from the first step to `END`.
    pub elapsed: Duration,
}

impl<'a> Machine<'a> {
    /// Execute from the current line until `END` or error.
    ///
    /// Program output (`PRINT`, `PRINTLN`) goes to `out`; `DEBUG` state
    /// dumps go to `diag`. The time budget is checked before each line, so
    /// a single instruction always runs to completion.
    pub fn execute<O: Write, D: Write>(
        &mut self,
        out: &mut O,
        diag: &mut D,
    ) -> Result<Outcome, RuntimeError> {
        let started = Instant::now();

        loop {
            if let Some(limit) = self.config.timeout {
                if started.elapsed() > limit {
                    return Err(RuntimeError::TimeoutExceeded {
                        at: self.pc,
                        timeout_ms: limit.as_millis(),
                    });
                }
            }

            let text = self.fetch()?;
            let decoded = decode_line(text).map_err(|source| RuntimeError::Syntax {
                at: self.pc,
                source,
            })?;
            let Some(instr) = decoded else {
                self.pc += 1;
                continue;
            };

            self.steps += 1;
            match self.step(&instr, out, diag)? {
                Flow::Next => self.pc += 1,
                Flow::Jump(target) => self.pc = target,
                Flow::Halt => {
                    return Ok(Outcome {
                        steps: self.steps,
                        elapsed: started.elapsed(),
                    })
                }
            }
        }
    }

    fn step<O: Write, D: Write>(
        &mut self,
        instr: &Instruction,
        out: &mut O,
        diag: &mut D,
    ) -> Result<Flow, RuntimeError> {
        match instr {
            // Data movement
            Instruction::Load { dst, src } => {
                let value = self.load_source(src)?;
                self.registers.set(*dst, value);
            }
            Instruction::Store { src, addr } => {
                let value = self.evaluate(src);
                let address = self.evaluate(addr);
                self.write(address, value)?;
            }
            Instruction::Push(op) => {
                let value = self.evaluate(op);
                self.push(value)?;
            }
            Instruction::Pop(reg) => {
                let value = self.pop()?;
                self.registers.set(*reg, value);
            }
            Instruction::PushUp => self.reserve()?,

            // Arithmetic
            Instruction::Plus => self.exec_arith(Word::wrapping_add),
            Instruction::Minus => self.exec_arith(Word::wrapping_sub),
            Instruction::Multi => self.exec_arith(Word::wrapping_mul),
            Instruction::Div => self.exec_div()?,

            // Comparison
            Instruction::CmpOdd => {
                let odd = self.registers.a % 2 != 0;
                self.set_condition(odd);
            }
            Instruction::CmpEq => self.exec_comparison(|a, b| a == b),
            Instruction::CmpLt => self.exec_comparison(|a, b| a < b),
            Instruction::CmpGt => self.exec_comparison(|a, b| a > b),
            Instruction::CmpNotEq => self.exec_comparison(|a, b| a != b),
            Instruction::CmpLe => self.exec_comparison(|a, b| a <= b),
            Instruction::CmpGe => self.exec_comparison(|a, b| a >= b),

            // Control flow
            Instruction::Jmp(op) => return self.exec_jump(op),
            Instruction::Jpc(op) => {
                // Jump on false: C = 0 takes the branch.
                if self.registers.c == 0 {
                    return self.exec_jump(op);
                }
            }
            Instruction::Call(op) => return self.exec_call(op),
            Instruction::Ret(op) => return self.exec_ret(op),

            // Output
            Instruction::Print(op) => {
                let value = self.evaluate(op);
                write!(out, "{value}").map_err(|e| self.output_error(e))?;
            }
            Instruction::Println => writeln!(out).map_err(|e| self.output_error(e))?,
            Instruction::Debug => self.dump_state(diag).map_err(|e| self.output_error(e))?,

            Instruction::End => return Ok(Flow::Halt),
        }

        Ok(Flow::Next)
    }

    // ---- Arithmetic and comparison ----

    fn exec_arith(&mut self, op: fn(Word, Word) -> Word) {
        self.registers.c = op(self.registers.a, self.registers.b);
    }

    fn exec_div(&mut self) -> Result<(), RuntimeError> {
        if self.registers.b == 0 {
            return Err(RuntimeError::DivisionByZero { at: self.pc });
        }
        self.registers.c = self.registers.a.wrapping_div(self.registers.b);
        Ok(())
    }

    fn exec_comparison(&mut self, relation: fn(Word, Word) -> bool) {
        let holds = relation(self.registers.a, self.registers.b);
        self.set_condition(holds);
    }

    fn set_condition(&mut self, holds: bool) {
        self.registers.c = Word::from(holds);
    }

    // ---- Control flow ----

    fn exec_jump(&self, op: &Operand) -> Result<Flow, RuntimeError> {
        self.jump_target(self.evaluate(op)).map(Flow::Jump)
    }

    fn exec_call(&mut self, op: &Operand) -> Result<Flow, RuntimeError> {
        let target = self.jump_target(self.evaluate(op))?;
        let return_line = (self.pc + 1) as Word;
        self.push(return_line)?;
        Ok(Flow::Jump(target))
    }

    fn exec_ret(&mut self, op: &Operand) -> Result<Flow, RuntimeError> {
        let return_line = self.pop()?;
        let target = self.jump_target(return_line)?;
        // `n` sees SP after the return line is popped.
        let discard = self.evaluate(op);
        self.adjust_sp(discard)?;
        Ok(Flow::Jump(target))
    }

    fn output_error(&self, e: io::Error) -> RuntimeError {
        RuntimeError::Output {
            at: self.pc,
            message: e.to_string(),
        }
    }
}
