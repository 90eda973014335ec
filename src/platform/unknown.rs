// src/platform/unknown.rs

use crate::{counter::CoreCounter, errors::DetectionError, platform::Platform};

/// Strategy for platforms with no known detection mechanism. Reports 1 for
/// both counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnknownCounter;

impl CoreCounter for UnknownCounter {
    fn platform(&self) -> Platform {
        Platform::Unknown
    }

    fn query_logical(&self) -> Result<usize, DetectionError> {
        Err(DetectionError::Unsupported(self.platform()))
    }

    fn query_physical(&self) -> Result<usize, DetectionError> {
        Err(DetectionError::Unsupported(self.platform()))
    }
}
