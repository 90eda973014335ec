// src/snapshot.rs

use once_cell::sync::Lazy;

use crate::{logical_count, physical_count, platform::Platform};

/// Logical and physical counts captured together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreSnapshot {
    pub platform: Platform,
    pub logical: usize,
    pub physical: usize,
}

impl Default for CoreSnapshot {
    fn default() -> Self {
        Self::capture()
    }
}

impl CoreSnapshot {
    pub fn capture() -> Self {
        CoreSnapshot {
            platform: Platform::current(),
            logical: logical_count(),
            physical: physical_count(),
        }
    }

    /// Whether some physical cores run more than one logical processor.
    pub fn has_smt(&self) -> bool {
        self.logical > self.physical
    }
}

/// Counts for this process, computed on first access and never refreshed.
pub static HOST_CORES: Lazy<CoreSnapshot> = Lazy::new(CoreSnapshot::capture);
