//! Host capability probe.
//!
//! Queries three independent host facts — total physical memory, processor
//! identity, and primary display bounds — and derives two coarse generation
//! classifications from the processor name. Every query is a fresh,
//! side-effect-free read: nothing is cached, no query depends on another
//! being called first, and concurrent callers need no coordination.

pub mod cpu;
mod display;
mod error;
mod memory;
mod platform;

pub use display::DisplayBounds;
pub use error::HostQueryError;
pub use platform::{HostPlatform, NativePlatform};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Stateless host-capability queries over a platform collaborator.
pub struct HostProbe<P = NativePlatform> {
    platform: P,
}

impl HostProbe<NativePlatform> {
    /// Probe backed by the live operating system.
    pub fn native() -> Self {
        Self::with_platform(NativePlatform)
    }
}

impl<P: HostPlatform> HostProbe<P> {
    pub fn with_platform(platform: P) -> Self {
        Self { platform }
    }

    /// Total physical memory in whole megabytes (truncating).
    pub fn total_physical_memory_mb(&self) -> Result<u64, HostQueryError> {
        Ok(memory::bytes_to_megabytes(
            self.platform.total_memory_bytes()?,
        ))
    }

    /// Marketing name of the installed processor, `None` when the host
    /// cannot report one.
    pub fn processor_identity(&self) -> Result<Option<String>, HostQueryError> {
        self.platform.processor_name()
    }

    /// Whether the processor name classifies as a recent Intel generation.
    /// An absent or unreadable name classifies as `false`.
    pub fn is_recent_generation(&self) -> bool {
        self.identity_matches(cpu::is_recent_generation)
    }

    /// Whether the processor name classifies as the 2000-series Intel
    /// generation. An absent or unreadable name classifies as `false`.
    pub fn is_mid_generation(&self) -> bool {
        self.identity_matches(cpu::is_mid_generation)
    }

    /// Bounding rectangle of the primary display. A headless host reports
    /// `HostQueryError::DisplayUnavailable`.
    pub fn primary_display_bounds(&self) -> Result<DisplayBounds, HostQueryError> {
        self.platform.primary_display_bounds()
    }

    fn identity_matches(&self, classify: fn(&str) -> bool) -> bool {
        match self.platform.processor_name() {
            Ok(Some(name)) => classify(&name),
            Ok(None) => false,
            Err(err) => {
                warn!("processor identity query failed: {err}");
                false
            }
        }
    }
}

/// One-shot capture of every probe fact, for display or serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostReport {
    pub memory_mb: u64,
    pub processor: Option<String>,
    pub recent_generation: bool,
    pub mid_generation: bool,
    pub display: Option<DisplayBounds>,
}

impl HostReport {
    /// Collect all facts from the probe.
    ///
    /// Memory is a required fact and propagates its error. The processor
    /// and display queries degrade to absent fields so a restricted or
    /// headless host still gets a report.
    pub fn collect<P: HostPlatform>(probe: &HostProbe<P>) -> Result<Self, HostQueryError> {
        let memory_mb = probe.total_physical_memory_mb()?;

        let processor = match probe.processor_identity() {
            Ok(processor) => processor,
            Err(err) => {
                warn!("processor identity query failed: {err}");
                None
            }
        };

        let display = match probe.primary_display_bounds() {
            Ok(bounds) => Some(bounds),
            Err(err) => {
                warn!("primary display query failed: {err}");
                None
            }
        };

        Ok(HostReport {
            memory_mb,
            recent_generation: probe.is_recent_generation(),
            mid_generation: probe.is_mid_generation(),
            processor,
            display,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted collaborator standing in for the operating system.
    #[derive(Default)]
    struct ScriptedPlatform {
        memory_bytes: Option<u64>,
        processor: Option<String>,
        processor_fails: bool,
        display: Option<DisplayBounds>,
    }

    impl HostPlatform for ScriptedPlatform {
        fn total_memory_bytes(&self) -> Result<u64, HostQueryError> {
            self.memory_bytes
                .ok_or_else(|| HostQueryError::Memory("unreachable".into()))
        }

        fn processor_name(&self) -> Result<Option<String>, HostQueryError> {
            if self.processor_fails {
                return Err(HostQueryError::Processor("unreachable".into()));
            }
            Ok(self.processor.clone())
        }

        fn primary_display_bounds(&self) -> Result<DisplayBounds, HostQueryError> {
            self.display.ok_or(HostQueryError::DisplayUnavailable)
        }
    }

    const BOUNDS: DisplayBounds = DisplayBounds {
        x: 0,
        y: 0,
        width: 1920,
        height: 1080,
    };

    fn haswell_host() -> HostProbe<ScriptedPlatform> {
        HostProbe::with_platform(ScriptedPlatform {
            memory_bytes: Some(8_589_934_592),
            processor: Some("Intel(R) Core(TM) i7-4790K".to_string()),
            display: Some(BOUNDS),
            ..Default::default()
        })
    }

    #[test]
    fn memory_converts_reported_bytes_to_megabytes() {
        assert_eq!(haswell_host().total_physical_memory_mb().unwrap(), 8192);
    }

    #[test]
    fn zero_memory_is_a_valid_result() {
        let probe = HostProbe::with_platform(ScriptedPlatform {
            memory_bytes: Some(0),
            ..Default::default()
        });
        assert_eq!(probe.total_physical_memory_mb().unwrap(), 0);
    }

    #[test]
    fn memory_failure_surfaces_as_an_error() {
        let probe = HostProbe::with_platform(ScriptedPlatform::default());
        assert!(matches!(
            probe.total_physical_memory_mb(),
            Err(HostQueryError::Memory(_))
        ));
    }

    #[test]
    fn absent_processor_identity_is_not_an_error() {
        let probe = HostProbe::with_platform(ScriptedPlatform {
            memory_bytes: Some(0),
            ..Default::default()
        });
        assert_eq!(probe.processor_identity().unwrap(), None);
        assert!(!probe.is_recent_generation());
        assert!(!probe.is_mid_generation());
    }

    #[test]
    fn failed_processor_query_classifies_as_false() {
        let probe = HostProbe::with_platform(ScriptedPlatform {
            processor_fails: true,
            ..Default::default()
        });
        assert!(!probe.is_recent_generation());
        assert!(!probe.is_mid_generation());
    }

    #[test]
    fn classifications_follow_the_reported_name() {
        let probe = haswell_host();
        assert!(probe.is_recent_generation());
        assert!(!probe.is_mid_generation());

        let probe = HostProbe::with_platform(ScriptedPlatform {
            processor: Some("Intel(R) Core(TM) i5-2500K".to_string()),
            ..Default::default()
        });
        assert!(!probe.is_recent_generation());
        assert!(probe.is_mid_generation());
    }

    #[test]
    fn headless_host_reports_display_unavailable() {
        let probe = HostProbe::with_platform(ScriptedPlatform {
            memory_bytes: Some(0),
            ..Default::default()
        });
        assert!(matches!(
            probe.primary_display_bounds(),
            Err(HostQueryError::DisplayUnavailable)
        ));
    }

    #[test]
    fn repeated_queries_return_identical_results() {
        let probe = haswell_host();
        assert_eq!(
            probe.total_physical_memory_mb().unwrap(),
            probe.total_physical_memory_mb().unwrap()
        );
        assert_eq!(
            probe.processor_identity().unwrap(),
            probe.processor_identity().unwrap()
        );
        assert_eq!(probe.is_recent_generation(), probe.is_recent_generation());
        assert_eq!(
            probe.primary_display_bounds().unwrap(),
            probe.primary_display_bounds().unwrap()
        );
    }

    #[test]
    fn concurrent_queries_match_sequential_results() {
        let probe = haswell_host();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(probe.total_physical_memory_mb().unwrap(), 8192);
                    assert_eq!(
                        probe.processor_identity().unwrap().as_deref(),
                        Some("Intel(R) Core(TM) i7-4790K")
                    );
                    assert!(probe.is_recent_generation());
                    assert!(!probe.is_mid_generation());
                    assert_eq!(probe.primary_display_bounds().unwrap(), BOUNDS);
                });
            }
        });
    }

    #[test]
    fn report_degrades_display_and_processor_but_requires_memory() {
        let probe = HostProbe::with_platform(ScriptedPlatform {
            memory_bytes: Some(17_179_869_184),
            processor_fails: true,
            ..Default::default()
        });
        let report = HostReport::collect(&probe).unwrap();
        assert_eq!(report.memory_mb, 16384);
        assert_eq!(report.processor, None);
        assert!(!report.recent_generation);
        assert!(!report.mid_generation);
        assert_eq!(report.display, None);

        let probe = HostProbe::with_platform(ScriptedPlatform::default());
        assert!(HostReport::collect(&probe).is_err());
    }

    #[test]
    fn report_serializes_round_trip() {
        let report = HostReport::collect(&haswell_host()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: HostReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.memory_mb, report.memory_mb);
        assert_eq!(parsed.display, report.display);
    }
}
