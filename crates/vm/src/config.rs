//! Machine configuration: memory window and time budget.

use pl0_common::Word;
use std::time::Duration;
use thiserror::Error;

/// Lowest addressable logical address.
pub const DEFAULT_BASE_OFFSET: Word = 800;

/// One past the highest addressable logical address; FP and SP start here.
pub const DEFAULT_MAX_ADDRESS: Word = 1000;

/// Timeout used when timing is requested without an explicit budget.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Largest memory window, in cells.
pub const MAX_MEMORY_CELLS: usize = 1 << 20;

/// Rejected configurations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("empty memory window: base offset {base} must be below max address {max}")]
    EmptyMemoryWindow { base: Word, max: Word },

    #[error("memory window of {size} cells exceeds the limit of {limit}")]
    MemoryWindowTooLarge { size: u64, limit: usize },
}

/// Settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Logical address of memory cell 0.
    pub base_offset: Word,
    /// Exclusive top of the address space.
    pub max_address: Word,
    /// Wall-clock budget, checked before every step. `None` runs unbounded.
    pub timeout: Option<Duration>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            base_offset: DEFAULT_BASE_OFFSET,
            max_address: DEFAULT_MAX_ADDRESS,
            timeout: None,
        }
    }
}

impl MachineConfig {
    /// A configuration with memory window `[base_offset, max_address)`.
    ///
    /// The window must hold between 1 and [`MAX_MEMORY_CELLS`] cells.
    pub fn new(base_offset: Word, max_address: Word) -> Result<Self, ConfigError> {
        if base_offset >= max_address {
            return Err(ConfigError::EmptyMemoryWindow {
                base: base_offset,
                max: max_address,
            });
        }
        let size = (i64::from(max_address) - i64::from(base_offset)) as u64;
        if size > MAX_MEMORY_CELLS as u64 {
            return Err(ConfigError::MemoryWindowTooLarge {
                size,
                limit: MAX_MEMORY_CELLS,
            });
        }
        Ok(Self {
            base_offset,
            max_address,
            timeout: None,
        })
    }

    /// Set the wall-clock budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Number of memory cells (`max_address - base_offset`).
    pub fn mem_size(&self) -> usize {
        (i64::from(self.max_address) - i64::from(self.base_offset)).max(0) as usize
    }
}
