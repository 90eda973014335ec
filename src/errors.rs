// src/errors.rs

use thiserror::Error;

use crate::platform::Platform;

/// Reasons a single detection strategy could not produce a count.
///
/// These never leave the crate's public operations; they are logged and
/// replaced by the next value in the fallback chain.
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("{source_name} is unavailable: {reason}")]
    Unavailable {
        source_name: &'static str,
        reason: String,
    },

    #[error("Failed to read processor descriptor: {0}")]
    Io(#[from] std::io::Error),

    #[error("{source_name} returned an invalid count: {value}")]
    InvalidValue {
        source_name: &'static str,
        value: i64,
    },

    #[error("No `physical id` or `core id` fields found in processor descriptor")]
    NoTopologyFields,

    #[error("Processor relationship table contained no physical core records")]
    NoCoreRecords,

    #[error("Failed to allocate processor information buffer: {0}")]
    Allocation(String),

    #[error("No detection strategy for platform `{0}`")]
    Unsupported(Platform),
}
