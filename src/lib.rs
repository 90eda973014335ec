// src/lib.rs

//! Logical and physical processor counts for the current host.
//!
//! Both operations always succeed and return at least `1`. Each platform
//! tries its native mechanism first and falls back when it is missing or
//! reports nonsense:
//!
//! | Platform | Logical | Physical |
//! |---|---|---|
//! | Windows | `GetSystemInfo` | `GetLogicalProcessorInformation`, else logical |
//! | Linux | `sysconf(_SC_NPROCESSORS_ONLN)` | `/proc/cpuinfo` topology, else logical |
//! | macOS | `sysconf(_SC_NPROCESSORS_ONLN)` | `hw.physicalcpu`, else logical |
//! | Other Unix | `sysconf(_SC_NPROCESSORS_ONLN)` | logical |
//! | Unknown | `1` | `1` |
//!
//! Nothing is cached; see [`snapshot::HOST_CORES`] for a memoized copy.

pub mod constants;
pub mod counter;
pub mod cpuinfo;
pub mod errors;
pub mod platform;
pub mod relationship;
pub mod snapshot;

pub use counter::CoreCounter;
pub use errors::DetectionError;
pub use platform::{HostCounter, Platform};
pub use snapshot::{CoreSnapshot, HOST_CORES};

/// Number of logical processors (hardware threads) on this host.
pub fn logical_count() -> usize {
    HostCounter::default().logical_count()
}

/// Number of physical cores on this host, or [`logical_count`] when the
/// platform cannot tell.
pub fn physical_count() -> usize {
    HostCounter::default().physical_count()
}
