// src/platform/mod.rs

//! Per-platform detection strategies.
//!
//! Exactly one of these is the [`HostCounter`] for a given build. The
//! unknown-platform strategy is compiled everywhere since it has no OS
//! dependencies.

#[cfg(any(target_os = "linux", target_os = "android"))]
pub mod linux;
#[cfg(target_os = "macos")]
pub mod macos;
#[cfg(unix)]
pub mod unix;
pub mod unknown;
#[cfg(windows)]
pub mod windows;

use strum_macros::{Display, EnumIter};

/// Operating system families with a distinct detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Windows,
    /// Linux and Android, both of which expose `/proc/cpuinfo`.
    Linux,
    MacOs,
    /// Any other POSIX system (BSDs, illumos, ...).
    Unix,
    Unknown,
}

impl Platform {
    /// The platform whose strategy is compiled into this build.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(any(target_os = "linux", target_os = "android")) {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(unix) {
            Platform::Unix
        } else {
            Platform::Unknown
        }
    }
}

#[cfg(windows)]
pub type HostCounter = self::windows::WindowsCounter;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub type HostCounter = self::linux::LinuxCounter;

#[cfg(target_os = "macos")]
pub type HostCounter = self::macos::MacosCounter;

#[cfg(all(
    unix,
    not(any(target_os = "linux", target_os = "android", target_os = "macos"))
))]
pub type HostCounter = self::unix::UnixCounter;

#[cfg(not(any(unix, windows)))]
pub type HostCounter = self::unknown::UnknownCounter;
