// src/platform/windows.rs

use std::mem;

use ::windows::Win32::{
    Foundation::ERROR_INSUFFICIENT_BUFFER,
    System::SystemInformation::{
        GetLogicalProcessorInformation, GetSystemInfo, SYSTEM_INFO,
        SYSTEM_LOGICAL_PROCESSOR_INFORMATION,
    },
};

use crate::{
    counter::{positive, CoreCounter},
    errors::DetectionError,
    platform::Platform,
    relationship::{count_physical_cores, ProcessorRelationship},
};

/// Windows strategy: `GetSystemInfo` for logical processors,
/// `GetLogicalProcessorInformation` for physical cores.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsCounter;

/// Fetches the full logical processor information table.
///
/// The table lives in a `Vec` owned by this call, so it is released on every
/// return path.
fn logical_processor_information(
) -> Result<Vec<SYSTEM_LOGICAL_PROCESSOR_INFORMATION>, DetectionError> {
    const SOURCE: &str = "GetLogicalProcessorInformation";
    let entry_size = mem::size_of::<SYSTEM_LOGICAL_PROCESSOR_INFORMATION>();

    // First call only reports the required buffer length in bytes.
    let mut length: u32 = 0;
    if let Err(e) = unsafe { GetLogicalProcessorInformation(None, &mut length) } {
        if e.code() != ERROR_INSUFFICIENT_BUFFER.to_hresult() {
            return Err(DetectionError::Unavailable {
                source_name: SOURCE,
                reason: format!("size probe failed: {:?}", e),
            });
        }
    }

    let entries = length as usize / entry_size;
    if entries == 0 {
        return Err(DetectionError::Unavailable {
            source_name: SOURCE,
            reason: format!("size probe reported {} bytes", length),
        });
    }

    let mut buffer: Vec<SYSTEM_LOGICAL_PROCESSOR_INFORMATION> = Vec::new();
    buffer
        .try_reserve_exact(entries)
        .map_err(|e| DetectionError::Allocation(e.to_string()))?;
    buffer.resize(entries, unsafe { mem::zeroed() });

    let mut length = (entries * entry_size) as u32;
    let fetched = unsafe { GetLogicalProcessorInformation(Some(buffer.as_mut_ptr()), &mut length) };
    fetched.map_err(|e| DetectionError::Unavailable {
        source_name: SOURCE,
        reason: format!("data fetch failed: {:?}", e),
    })?;

    buffer.truncate(length as usize / entry_size);
    Ok(buffer)
}

fn relationships(
    table: &[SYSTEM_LOGICAL_PROCESSOR_INFORMATION],
) -> impl Iterator<Item = ProcessorRelationship> + '_ {
    table
        .iter()
        .map(|info| ProcessorRelationship::from_raw(info.Relationship.0))
}

impl CoreCounter for WindowsCounter {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn query_logical(&self) -> Result<usize, DetectionError> {
        let mut info: SYSTEM_INFO = unsafe { mem::zeroed() };
        unsafe { GetSystemInfo(&mut info) };
        positive("GetSystemInfo", info.dwNumberOfProcessors as i64)
    }

    fn query_physical(&self) -> Result<usize, DetectionError> {
        let table = logical_processor_information()?;
        count_physical_cores(relationships(&table))
    }
}
