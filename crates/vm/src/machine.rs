//! Machine state: registers, memory, program counter, stack helpers.

use crate::config::MachineConfig;
use crate::error::RuntimeError;
use crate::memory::Memory;
use crate::registers::RegisterBank;
use pl0_common::{Program, Word};

/// The PL/0 register machine.
///
/// Owns its registers and memory for the lifetime of one run. After
/// [`execute`](Machine::execute) returns, successfully or not, the state
/// stays readable for diagnostics.
pub struct Machine<'a> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    pub(crate) config: MachineConfig,
    pub(crate) registers: RegisterBank,
    pub(crate) memory: Memory,
    /// 1-based line about to execute.
    pub(crate) pc: usize,
    /// Instructions executed so far (blank lines excluded).
    pub(crate) steps: u64,
}

impl<'a> Machine<'a> {
    /// Create a machine with fresh registers and zeroed memory.
    pub fn new(program: &'a Program, config: MachineConfig) -> Self {
        Self {
            program,
            config,
            registers: RegisterBank::new(config.max_address),
            memory: Memory::new(config.base_offset, config.mem_size()),
            pc: 1,
            steps: 0,
        }
    }

    pub fn registers(&self) -> &RegisterBank {
        &self.registers
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Read a memory cell by logical address.
    pub fn peek(&self, address: Word) -> Option<Word> {
        self.memory.read(address)
    }

    /// Read a memory cell, failing outside the window.
    pub(crate) fn read(&self, address: Word) -> Result<Word, RuntimeError> {
        self.memory
            .read(address)
            .ok_or(RuntimeError::AddressOutOfRange { at: self.pc, address })
    }

    /// Write a memory cell, failing outside the window.
    pub(crate) fn write(&mut self, address: Word, value: Word) -> Result<(), RuntimeError> {
        self.memory
            .write(address, value)
            .ok_or(RuntimeError::AddressOutOfRange { at: self.pc, address })
    }

    /// Move SP down one cell, checking for room.
    fn grow(&mut self) -> Result<Word, RuntimeError> {
        let sp = self.registers.sp;
        if sp <= self.config.base_offset || sp > self.config.max_address {
            return Err(RuntimeError::StackOverflow { at: self.pc, sp });
        }
        self.registers.sp = sp - 1;
        Ok(sp - 1)
    }

    /// Push a value onto the stack region.
    pub(crate) fn push(&mut self, value: Word) -> Result<(), RuntimeError> {
        let slot = self.grow()?;
        self.write(slot, value)
    }

    /// Reserve one stack cell without writing it.
    pub(crate) fn reserve(&mut self) -> Result<(), RuntimeError> {
        self.grow().map(|_| ())
    }

    /// Pop the cell at SP.
    pub(crate) fn pop(&mut self) -> Result<Word, RuntimeError> {
        let sp = self.registers.sp;
        if sp >= self.config.max_address {
            return Err(RuntimeError::StackUnderflow { at: self.pc, sp });
        }
        let value = self.read(sp)?;
        self.registers.sp = sp + 1;
        Ok(value)
    }

    /// Move SP by `delta` cells, keeping it inside `[base_offset, max_address]`.
    pub(crate) fn adjust_sp(&mut self, delta: Word) -> Result<(), RuntimeError> {
        let sp = i64::from(self.registers.sp) + i64::from(delta);
        if sp > i64::from(self.config.max_address) {
            return Err(RuntimeError::StackUnderflow {
                at: self.pc,
                sp: self.registers.sp,
            });
        }
        if sp < i64::from(self.config.base_offset) {
            return Err(RuntimeError::StackOverflow {
                at: self.pc,
                sp: self.registers.sp,
            });
        }
        self.registers.sp = sp as Word;
        Ok(())
    }

    /// Fetch the text of the line under the program counter.
    pub(crate) fn fetch(&self) -> Result<&'a str, RuntimeError> {
        self.program
            .line(self.pc)
            .ok_or(RuntimeError::UnexpectedEndOfProgram { at: self.pc })
    }

    /// Convert an evaluated jump target to a line number.
    pub(crate) fn jump_target(&self, target: Word) -> Result<usize, RuntimeError> {
        usize::try_from(target)
            .ok()
            .filter(|t| (1..=self.program.len()).contains(t))
            .ok_or(RuntimeError::InvalidJumpTarget { at: self.pc, target })
    }
}
