//! The register bank.

use pl0_common::{Register, Word};

/// Five named integer cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterBank {
    pub a: Word,
    pub b: Word,
    pub c: Word,
    pub fp: Word,
    pub sp: Word,
}

impl RegisterBank {
    /// General registers at 0; FP and SP at the top of the address space.
    pub fn new(max_address: Word) -> Self {
        Self {
            a: 0,
            b: 0,
            c: 0,
            fp: max_address,
            sp: max_address,
        }
    }

    pub fn get(&self, reg: Register) -> Word {
        match reg {
            Register::A => self.a,
            Register::B => self.b,
            Register::C => self.c,
            Register::FP => self.fp,
            Register::SP => self.sp,
        }
    }

    pub fn set(&mut self, reg: Register, value: Word) {
        match reg {
            Register::A => self.a = value,
            Register::B => self.b = value,
            Register::C => self.c = value,
            Register::FP => self.fp = value,
            Register::SP => self.sp = value,
        }
    }
}
