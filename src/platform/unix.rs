// src/platform/unix.rs

use crate::{
    counter::{positive, CoreCounter},
    errors::DetectionError,
    platform::Platform,
};

/// Number of processors currently online, as reported by `sysconf`.
///
/// Shared by every Unix-family strategy.
pub fn online_processors() -> Result<usize, DetectionError> {
    let cpus = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
    positive("sysconf(_SC_NPROCESSORS_ONLN)", cpus as i64)
}

/// Strategy for POSIX systems without a physical core query.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixCounter;

impl CoreCounter for UnixCounter {
    fn platform(&self) -> Platform {
        Platform::Unix
    }

    fn query_logical(&self) -> Result<usize, DetectionError> {
        online_processors()
    }

    fn query_physical(&self) -> Result<usize, DetectionError> {
        Err(DetectionError::Unsupported(self.platform()))
    }
}
