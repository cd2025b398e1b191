//! Fixed-size memory addressed through an offset.
//!
//! Logical address `a` lives at cell `a - base_offset`. Heap-style
//! `LOAD`/`STORE` and the downward-growing stack share the same cells.

use pl0_common::Word;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    base_offset: Word,
    cells: Vec<Word>,
}

impl Memory {
    /// Zeroed memory covering `[base_offset, base_offset + size)`.
    pub fn new(base_offset: Word, size: usize) -> Self {
        Self {
            base_offset,
            cells: vec![0; size],
        }
    }

    /// Translate a logical address to a cell index.
    fn index(&self, address: Word) -> Option<usize> {
        let offset = i64::from(address) - i64::from(self.base_offset);
        usize::try_from(offset).ok().filter(|&i| i < self.cells.len())
    }

    /// Read a cell; `None` when the address is outside the window.
    pub fn read(&self, address: Word) -> Option<Word> {
        self.index(address).map(|i| self.cells[i])
    }

    /// Write a cell; `None` when the address is outside the window.
    pub fn write(&mut self, address: Word, value: Word) -> Option<()> {
        let i = self.index(address)?;
        self.cells[i] = value;
        Some(())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
