// src/constants.rs

/// Smallest count any public operation will report.
pub const MIN_CORE_COUNT: usize = 1;

// Per-processor descriptor table exposed by the Linux kernel.
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

// Field names inside each `/proc/cpuinfo` entry.
pub const CPUINFO_PHYSICAL_ID: &str = "physical id";
pub const CPUINFO_CORE_ID: &str = "core id";

// macOS kernel parameter holding the physical core count.
pub const SYSCTL_PHYSICAL_CPU: &str = "hw.physicalcpu";
