//! Physical memory reporting helpers.

/// Convert a raw byte count to whole megabytes.
///
/// Two sequential truncating divisions by 1024, the form the reported
/// figure has always used. For unsigned integers this is identical to a
/// single truncating division by 1,048,576.
pub fn bytes_to_megabytes(bytes: u64) -> u64 {
    bytes / 1024 / 1024
}
