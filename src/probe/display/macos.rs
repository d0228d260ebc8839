use super::{run_command_capture, DisplayBounds};
use crate::probe::error::HostQueryError;

pub(super) fn primary_display_bounds_impl() -> Result<DisplayBounds, HostQueryError> {
    let script = r#"tell application "Finder" to get bounds of window of desktop"#;
    if let Some(output) = run_command_capture("osascript", &["-e", script])? {
        if let Some(bounds) = parse_desktop_bounds(&output) {
            return Ok(bounds);
        }
    }
    Err(HostQueryError::DisplayUnavailable)
}

/// Parse Finder desktop bounds, e.g. `0, 0, 2560, 1440` (left, top, right, bottom).
fn parse_desktop_bounds(output: &str) -> Option<DisplayBounds> {
    let mut parts = output.split(',').map(str::trim);
    let left: i32 = parts.next()?.parse().ok()?;
    let top: i32 = parts.next()?.parse().ok()?;
    let right: i32 = parts.next()?.parse().ok()?;
    let bottom: i32 = parts.next()?.parse().ok()?;
    let width = u32::try_from(right.checked_sub(left)?).ok()?;
    let height = u32::try_from(bottom.checked_sub(top)?).ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(DisplayBounds {
        x: left,
        y: top,
        width,
        height,
    })
}
