//! Machine state dump for `DEBUG` and fatal errors.

use crate::machine::Machine;
use std::io::{self, Write};

impl Machine<'_> {
    /// Write registers, the current line, and the live stack window.
    ///
    /// The stack window is every cell from SP up to `max_address - 1`,
    /// clipped to the memory window.
    pub fn dump_state<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let regs = &self.registers;
        let current = self
            .program
            .line(self.pc)
            .map(str::trim)
            .unwrap_or("<end of program>");

        writeln!(w, "--- machine state at line {} ---", self.pc)?;
        writeln!(w, "  line {}: {}", self.pc, current)?;
        writeln!(w, "  A={} B={} C={}", regs.a, regs.b, regs.c)?;
        writeln!(w, "  PC={} FP={} SP={}", self.pc, regs.fp, regs.sp)?;

        let top = self.config.max_address;
        let bottom = regs.sp.max(self.config.base_offset);
        if bottom >= top {
            return writeln!(w, "  stack: (empty)");
        }

        writeln!(w, "  stack:")?;
        for address in (bottom..top).rev() {
            let value = self.memory.read(address).unwrap_or_default();
            let marker = match (address == regs.sp, address == regs.fp) {
                (true, true) => "  <- SP, FP",
                (true, false) => "  <- SP",
                (false, true) => "  <- FP",
                (false, false) => "",
            };
            writeln!(w, "    [{address}] {value}{marker}")?;
        }
        Ok(())
    }
}
