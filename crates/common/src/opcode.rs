//! Opcode definitions for the PL/0 machine instruction set.

/// Identifies the operation an instruction performs.
///
/// Operands named below: `reg` is a register write target, `val`/`addr`
/// are operand expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Data movement
    /// `LOAD reg, src`: register from literal, register, or memory.
    Load,
    /// `STORE val, addr`: memory cell from value.
    Store,
    /// `PUSH val`: decrement SP, write value at SP.
    Push,
    /// `POP reg`: read the cell at SP into a register, increment SP.
    Pop,
    /// `PUSHUP`: reserve one stack slot without writing it.
    PushUp,

    // Arithmetic: C := A op B
    /// C := A + B
    Plus,
    /// C := A - B
    Minus,
    /// C := A * B
    Multi,
    /// C := A / B. Division by zero is a runtime error.
    Div,

    // Comparison: C := 1 if the relation holds, else 0
    /// A is odd.
    CmpOdd,
    /// A == B
    CmpEq,
    /// A < B
    CmpLt,
    /// A > B
    CmpGt,
    /// A != B
    CmpNotEq,
    /// A <= B
    CmpLe,
    /// A >= B
    CmpGe,

    // Control flow
    /// `JMP addr`: unconditional jump to a 1-based line.
    Jmp,
    /// `JPC addr`: jump when C is 0, fall through otherwise.
    Jpc,
    /// `CALL addr`: push the return line, then jump.
    Call,
    /// `RET n`: pop the return line, then discard `n` stack cells.
    Ret,

    // Output and control
    /// `PRINT val`: write a value with no trailing newline.
    Print,
    /// `PRINTLN`: write a newline.
    Println,
    /// `DEBUG` (or any `@`-prefixed mnemonic): dump machine state.
    Debug,
    /// `END`: stop the run normally.
    End,
}

/// All opcodes, in definition order.
pub const ALL_OPCODES: [Opcode; 24] = [
    Opcode::Load,
    Opcode::Store,
    Opcode::Push,
    Opcode::Pop,
    Opcode::PushUp,
    Opcode::Plus,
    Opcode::Minus,
    Opcode::Multi,
    Opcode::Div,
    Opcode::CmpOdd,
    Opcode::CmpEq,
    Opcode::CmpLt,
    Opcode::CmpGt,
    Opcode::CmpNotEq,
    Opcode::CmpLe,
    Opcode::CmpGe,
    Opcode::Jmp,
    Opcode::Jpc,
    Opcode::Call,
    Opcode::Ret,
    Opcode::Print,
    Opcode::Println,
    Opcode::Debug,
    Opcode::End,
];

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Load => "LOAD",
            Opcode::Store => "STORE",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::PushUp => "PUSHUP",
            Opcode::Plus => "PLUS",
            Opcode::Minus => "MINUS",
            Opcode::Multi => "MULTI",
            Opcode::Div => "DIV",
            Opcode::CmpOdd => "CMPODD",
            Opcode::CmpEq => "CMPEQ",
            Opcode::CmpLt => "CMPLT",
            Opcode::CmpGt => "CMPGT",
            Opcode::CmpNotEq => "CMPNOTEQ",
            Opcode::CmpLe => "CMPLE",
            Opcode::CmpGe => "CMPGE",
            Opcode::Jmp => "JMP",
            Opcode::Jpc => "JPC",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::Print => "PRINT",
            Opcode::Println => "PRINTLN",
            Opcode::Debug => "DEBUG",
            Opcode::End => "END",
        }
    }

    /// Number of operand tokens the opcode takes.
    pub fn operand_count(self) -> usize {
        match self {
            Opcode::Load | Opcode::Store => 2,
            Opcode::Push
            | Opcode::Pop
            | Opcode::Jmp
            | Opcode::Jpc
            | Opcode::Call
            | Opcode::Ret
            | Opcode::Print => 1,
            Opcode::PushUp
            | Opcode::Plus
            | Opcode::Minus
            | Opcode::Multi
            | Opcode::Div
            | Opcode::CmpOdd
            | Opcode::CmpEq
            | Opcode::CmpLt
            | Opcode::CmpGt
            | Opcode::CmpNotEq
            | Opcode::CmpLe
            | Opcode::CmpGe
            | Opcode::Println
            | Opcode::Debug
            | Opcode::End => 0,
        }
    }

    /// Look up an opcode by mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(mnemonic))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonic_roundtrip() {
        for &opcode in &ALL_OPCODES {
            let m = opcode.mnemonic();
            assert!(!m.is_empty(), "empty mnemonic for {opcode:?}");
            assert_eq!(m, m.to_uppercase(), "mnemonic should be uppercase: {m}");
            assert_eq!(Opcode::from_mnemonic(m), Some(opcode));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Opcode::from_mnemonic("load"), Some(Opcode::Load));
        assert_eq!(Opcode::from_mnemonic("CmpNotEq"), Some(Opcode::CmpNotEq));
        assert_eq!(Opcode::from_mnemonic("NOP"), None);
    }

    #[test]
    fn arities() {
        assert_eq!(Opcode::Load.operand_count(), 2);
        assert_eq!(Opcode::Store.operand_count(), 2);
        assert_eq!(Opcode::Ret.operand_count(), 1);
        assert_eq!(Opcode::PushUp.operand_count(), 0);
        assert_eq!(Opcode::End.operand_count(), 0);
    }

    #[test]
    fn mnemonics_are_unique() {
        for (i, a) in ALL_OPCODES.iter().enumerate() {
            for b in &ALL_OPCODES[i + 1..] {
                assert_ne!(a.mnemonic(), b.mnemonic());
            }
        }
    }
}
