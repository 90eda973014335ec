// src/counter.rs

use crate::{constants::MIN_CORE_COUNT, errors::DetectionError, platform::Platform};

/// A per-platform strategy for counting processing units.
///
/// Implementors only supply the raw queries. The provided `logical_count` and
/// `physical_count` carry the fallback chain shared by every platform:
///
/// - logical: query, otherwise [`MIN_CORE_COUNT`]
/// - physical: query, otherwise `logical_count()`
pub trait CoreCounter: Send + Sync {
    /// The platform this strategy was written for.
    fn platform(&self) -> Platform;

    /// Primary mechanism for the number of logical processors.
    fn query_logical(&self) -> Result<usize, DetectionError>;

    /// Primary mechanism for the number of physical cores.
    fn query_physical(&self) -> Result<usize, DetectionError>;

    /// Number of logical processors, always at least 1.
    fn logical_count(&self) -> usize {
        match self.query_logical() {
            Ok(count) => {
                tracing::trace!("{} -> logical count: {}", self.platform(), count);
                count
            }
            Err(e) => {
                tracing::debug!(
                    "{} -> logical count query failed, using {}: {}",
                    self.platform(),
                    MIN_CORE_COUNT,
                    e
                );
                MIN_CORE_COUNT
            }
        }
    }

    /// Number of physical cores, always at least 1.
    fn physical_count(&self) -> usize {
        match self.query_physical() {
            Ok(count) => {
                tracing::trace!("{} -> physical count: {}", self.platform(), count);
                count
            }
            Err(e) => {
                let logical = self.logical_count();
                tracing::debug!(
                    "{} -> physical count query failed, falling back to logical count {}: {}",
                    self.platform(),
                    logical,
                    e
                );
                logical
            }
        }
    }
}

/// Accepts a raw count from an OS query only if it is at least 1.
pub fn positive(source_name: &'static str, raw: i64) -> Result<usize, DetectionError> {
    if raw < MIN_CORE_COUNT as i64 {
        return Err(DetectionError::InvalidValue {
            source_name,
            value: raw,
        });
    }
    usize::try_from(raw).map_err(|_| DetectionError::InvalidValue {
        source_name,
        value: raw,
    })
}
