//! Operand evaluation against the current machine state.

use crate::error::RuntimeError;
use crate::machine::Machine;
use pl0_common::{Operand, Word};

impl Machine<'_> {
    /// Evaluate an operand expression. The indirect wrapper is ignored.
    pub(crate) fn evaluate(&self, operand: &Operand) -> Word {
        operand.expr.eval(|reg| self.registers.get(reg))
    }

    /// Resolve a `LOAD` source.
    ///
    /// A bare literal or register is the value itself. Anything else names
    /// a memory cell.
    pub(crate) fn load_source(&self, operand: &Operand) -> Result<Word, RuntimeError> {
        let value = self.evaluate(operand);
        if operand.is_bare() {
            Ok(value)
        } else {
            self.read(value)
        }
    }
}
