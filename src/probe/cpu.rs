//! Processor-name generation heuristics.
//!
//! These classify a CPU by the numeric patterns in its marketing name, an
//! approximation tied to Intel's historical model numbering rather than a
//! verified hardware capability. They are advisory feature-detection
//! signals: any name that does not match the expected pattern resolves to
//! `false`.

/// Whether the name looks like a recent Intel generation (model number
/// above 4000, roughly Haswell or newer).
///
/// Scans for the first window of four consecutive decimal digits; a window
/// inside a longer digit run counts, so five-digit model numbers are judged
/// by their leading four digits.
pub fn is_recent_generation(name: &str) -> bool {
    if !name.contains("Intel") {
        return false;
    }
    match digit_window(name, 4) {
        Some(model) => model > 4000,
        None => false,
    }
}

/// Whether the name looks like the 2000-series Intel generation (roughly
/// Sandy Bridge).
///
/// Anchors at the first two consecutive decimal digits, wherever the scan
/// finds them, and parses the whole digit run from that point. A four-digit
/// model number is therefore parsed whole and matches only if it falls
/// strictly between 2000 and 3000.
pub fn is_mid_generation(name: &str) -> bool {
    if !name.contains("Intel") {
        return false;
    }
    match digit_run(name, 2) {
        Some(model) => model > 2000 && model < 3000,
        None => false,
    }
}

/// First window of exactly `len` consecutive ASCII digits, parsed.
fn digit_window(name: &str, len: usize) -> Option<u64> {
    let bytes = name.as_bytes();
    if bytes.len() < len {
        return None;
    }
    for start in 0..=bytes.len() - len {
        if bytes[start..start + len].iter().all(|b| b.is_ascii_digit()) {
            return name[start..start + len].parse().ok();
        }
    }
    None
}

/// Whole consecutive digit run starting where the first window of `min`
/// ASCII digits occurs, parsed.
fn digit_run(name: &str, min: usize) -> Option<u64> {
    let bytes = name.as_bytes();
    if bytes.len() < min {
        return None;
    }
    for start in 0..=bytes.len() - min {
        if bytes[start..start + min].iter().all(|b| b.is_ascii_digit()) {
            let end = bytes[start..]
                .iter()
                .position(|b| !b.is_ascii_digit())
                .map_or(bytes.len(), |offset| start + offset);
            return name[start..end].parse().ok();
        }
    }
    None
}
