//! Probe error types.

use std::time::Duration;

use thiserror::Error;

/// A required host fact could not be retrieved.
///
/// Queries are never retried here; the caller decides whether a failed
/// query is worth another attempt.
#[derive(Error, Debug)]
pub enum HostQueryError {
    #[error("memory status query failed: {0}")]
    Memory(String),

    #[error("processor descriptor read failed: {0}")]
    Processor(String),

    #[error("no display available")]
    DisplayUnavailable,

    #[error("host query timed out after {0:?}")]
    Timeout(Duration),
}
