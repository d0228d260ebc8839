use std::fs;

use tracing::debug;

use super::{run_command_capture, DisplayBounds};
use crate::probe::error::HostQueryError;

pub(super) fn primary_display_bounds_impl() -> Result<DisplayBounds, HostQueryError> {
    if let Some(output) = run_command_capture("xrandr", &["--query"])? {
        if let Some(bounds) = parse_xrandr_query(&output) {
            return Ok(bounds);
        }
        debug!("xrandr output carried no connected geometry");
    }

    // Console hosts without an X display still expose the framebuffer size.
    if let Some(bounds) = framebuffer_bounds() {
        return Ok(bounds);
    }

    Err(HostQueryError::DisplayUnavailable)
}

/// Pick the primary output's geometry from `xrandr --query` output,
/// falling back to the first connected output.
fn parse_xrandr_query(output: &str) -> Option<DisplayBounds> {
    let line = output
        .lines()
        .find(|line| line.contains(" connected primary "))
        .or_else(|| output.lines().find(|line| line.contains(" connected ")))?;
    line.split_whitespace().find_map(parse_geometry)
}

/// Parse an xrandr geometry token such as `2560x1440+0+0`.
fn parse_geometry(token: &str) -> Option<DisplayBounds> {
    let (size, origin) = token.split_once('+')?;
    let (width, height) = size.split_once('x')?;
    let (x, y) = origin.split_once('+')?;
    Some(DisplayBounds {
        x: x.parse().ok()?,
        y: y.parse().ok()?,
        width: width.parse().ok()?,
        height: height.parse().ok()?,
    })
}

fn framebuffer_bounds() -> Option<DisplayBounds> {
    let raw = fs::read_to_string("/sys/class/graphics/fb0/virtual_size").ok()?;
    let (width, height) = raw.trim().split_once(',')?;
    let width: u32 = width.trim().parse().ok()?;
    let height: u32 = height.trim().parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(DisplayBounds {
        x: 0,
        y: 0,
        width,
        height,
    })
}
