// src/platform/macos.rs

use std::{ffi::CString, io, mem, ptr};

use crate::{
    constants::SYSCTL_PHYSICAL_CPU,
    counter::{positive, CoreCounter},
    errors::DetectionError,
    platform::{unix::online_processors, Platform},
};

/// macOS strategy: `sysconf` for logical processors, `hw.physicalcpu` for
/// physical cores.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacosCounter;

/// Reads an integer kernel parameter by name.
fn sysctl_int(name: &'static str) -> Result<i64, DetectionError> {
    let c_name = CString::new(name).map_err(|e| DetectionError::Unavailable {
        source_name: name,
        reason: e.to_string(),
    })?;

    let mut value: libc::c_int = 0;
    let mut size = mem::size_of::<libc::c_int>();
    let status = unsafe {
        libc::sysctlbyname(
            c_name.as_ptr(),
            &mut value as *mut _ as *mut libc::c_void,
            &mut size,
            ptr::null_mut(),
            0,
        )
    };

    if status != 0 {
        return Err(DetectionError::Unavailable {
            source_name: name,
            reason: io::Error::last_os_error().to_string(),
        });
    }
    Ok(value as i64)
}

impl CoreCounter for MacosCounter {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn query_logical(&self) -> Result<usize, DetectionError> {
        online_processors()
    }

    fn query_physical(&self) -> Result<usize, DetectionError> {
        positive(SYSCTL_PHYSICAL_CPU, sysctl_int(SYSCTL_PHYSICAL_CPU)?)
    }
}
