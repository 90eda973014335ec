// src/platform/linux.rs

use std::path::PathBuf;

use crate::{
    constants::CPUINFO_PATH,
    counter::CoreCounter,
    cpuinfo::CpuTopology,
    errors::DetectionError,
    platform::{unix::online_processors, Platform},
};

/// Linux strategy: `sysconf` for logical processors, the `/proc/cpuinfo`
/// topology fields for physical cores.
#[derive(Debug, Clone)]
pub struct LinuxCounter {
    cpuinfo_path: PathBuf,
}

impl Default for LinuxCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl LinuxCounter {
    pub fn new() -> Self {
        Self::with_cpuinfo_path(CPUINFO_PATH)
    }

    /// Reads the descriptor table from `path` instead of `/proc/cpuinfo`.
    pub fn with_cpuinfo_path(path: impl Into<PathBuf>) -> Self {
        LinuxCounter {
            cpuinfo_path: path.into(),
        }
    }
}

impl CoreCounter for LinuxCounter {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn query_logical(&self) -> Result<usize, DetectionError> {
        online_processors()
    }

    fn query_physical(&self) -> Result<usize, DetectionError> {
        CpuTopology::from_path(&self.cpuinfo_path)?.physical_cores()
    }
}
