//! Primary display geometry.
//!
//! Platform-specific lookup of the primary display's bounding rectangle:
//! - Windows: Win32 system metrics
//! - Linux: xrandr, falling back to the framebuffer sysfs entry
//! - macOS: osascript desktop bounds
//!
//! A headless host reports `HostQueryError::DisplayUnavailable` rather
//! than panicking; callers treat it as "capability unknown".

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux::primary_display_bounds_impl;
#[cfg(target_os = "macos")]
use macos::primary_display_bounds_impl;
#[cfg(target_os = "windows")]
use windows::primary_display_bounds_impl;

use serde::{Deserialize, Serialize};

use super::error::HostQueryError;

/// Bounding rectangle of a display, in the host's native pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Query the host windowing system for the primary display's bounds.
pub fn primary_display_bounds() -> Result<DisplayBounds, HostQueryError> {
    primary_display_bounds_impl()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn primary_display_bounds_impl() -> Result<DisplayBounds, HostQueryError> {
    Err(HostQueryError::DisplayUnavailable)
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
const COMMAND_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(2);

/// Run an external query command, capturing trimmed stdout.
///
/// The command runs on a helper thread under a bounded timeout so a wedged
/// display server cannot hang the caller.
#[cfg(any(target_os = "linux", target_os = "macos"))]
fn run_command_capture(command: &str, args: &[&str]) -> Result<Option<String>, HostQueryError> {
    use std::process::Command;
    use std::sync::mpsc;
    use std::thread;

    let command = command.to_string();
    let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let output = Command::new(&command).args(&args).output();
        let _ = tx.send(output);
    });

    match rx.recv_timeout(COMMAND_TIMEOUT) {
        Ok(Ok(output)) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let trimmed = stdout.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Ok(_) => Ok(None),
        Err(mpsc::RecvTimeoutError::Timeout) => Err(HostQueryError::Timeout(COMMAND_TIMEOUT)),
        Err(mpsc::RecvTimeoutError::Disconnected) => Ok(None),
    }
}
