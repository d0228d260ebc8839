//! Platform collaborators behind the probe.

use sysinfo::System;
use tracing::debug;

use super::display::{self, DisplayBounds};
use super::error::HostQueryError;

/// Raw host queries the probe is built on.
///
/// The probe owns one collaborator; substituting a scripted implementation
/// lets the conversion and classification logic run without a real OS.
pub trait HostPlatform {
    /// Total physical memory in bytes.
    fn total_memory_bytes(&self) -> Result<u64, HostQueryError>;

    /// Marketing name of the installed processor, if the host reports one.
    /// Absence is a normal outcome, not an error.
    fn processor_name(&self) -> Result<Option<String>, HostQueryError>;

    /// Bounding rectangle of the primary display.
    fn primary_display_bounds(&self) -> Result<DisplayBounds, HostQueryError>;
}

/// Live host queries via sysinfo and the platform display backends.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePlatform;

impl HostPlatform for NativePlatform {
    fn total_memory_bytes(&self) -> Result<u64, HostQueryError> {
        let mut sys = System::new();
        sys.refresh_memory();
        Ok(sys.total_memory())
    }

    fn processor_name(&self) -> Result<Option<String>, HostQueryError> {
        let mut sys = System::new();
        sys.refresh_cpu_all();

        let name = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|name| !name.is_empty());
        if name.is_none() {
            debug!("host reported no processor name");
        }
        Ok(name)
    }

    fn primary_display_bounds(&self) -> Result<DisplayBounds, HostQueryError> {
        display::primary_display_bounds()
    }
}
