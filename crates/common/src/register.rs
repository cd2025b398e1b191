//! Register names for the PL/0 machine.

use std::fmt;

/// One of the five named register cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// General purpose; left operand of arithmetic and comparisons.
    A,
    /// General purpose; right operand of arithmetic and comparisons.
    B,
    /// General purpose; receives arithmetic results and the condition flag.
    C,
    /// Frame pointer.
    FP,
    /// Stack pointer. Points at the most recently pushed cell.
    SP,
}

/// All registers, in bank order.
pub const ALL_REGISTERS: [Register; 5] = [
    Register::A,
    Register::B,
    Register::C,
    Register::FP,
    Register::SP,
];

impl Register {
    /// Canonical (uppercase) name.
    pub fn name(self) -> &'static str {
        match self {
            Register::A => "A",
            Register::B => "B",
            Register::C => "C",
            Register::FP => "FP",
            Register::SP => "SP",
        }
    }

    /// Look up a register by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Register> {
        ALL_REGISTERS
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
            .copied()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
