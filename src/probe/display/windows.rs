use windows_sys::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

use super::DisplayBounds;
use crate::probe::error::HostQueryError;

pub(super) fn primary_display_bounds_impl() -> Result<DisplayBounds, HostQueryError> {
    let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
    let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
    if width <= 0 || height <= 0 {
        return Err(HostQueryError::DisplayUnavailable);
    }

    // The primary monitor anchors the virtual screen at the origin.
    Ok(DisplayBounds {
        x: 0,
        y: 0,
        width: width as u32,
        height: height as u32,
    })
}
