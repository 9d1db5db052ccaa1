//! Trait definitions with mockall annotations for testing
//!
//! These traits are the seams between the registry core and the
//! collaborators it consumes: the pattern catalog owned by the
//! surrounding harness, and the diagnostic sink the harness logs
//! through. Both carry mockall mock generation annotations so the
//! registry's policy branches can be tested in isolation.

use crate::catalog::Pattern;

/// Pattern lookup abstraction for the active cluster stack
///
/// All three lookups share the same contract: absence is a valid,
/// empty result. The catalog never fails and never signals "not found"
/// as an error.
#[mockall::automock]
pub trait PatternCatalog: Send + Sync {
    /// Normal-operation patterns registered for `component`
    fn watch_patterns(&self, component: &str) -> Vec<Pattern>;

    /// Component-specific patterns to suppress from failure reporting
    fn ignore_patterns(&self, component: &str) -> Vec<Pattern>;

    /// Stack-wide patterns suppressed for every component
    fn common_ignore_patterns(&self) -> Vec<Pattern>;
}

/// Sink for human-readable diagnostic lines
///
/// The registry emits exactly one notice per component it drops from
/// the monitored set because the component runs under a memory
/// profiler. Nothing else is logged from this core.
#[mockall::automock]
pub trait DiagnosticSink: Send + Sync {
    fn notice(&self, line: &str);
}

/// Default sink forwarding notices to the tracing subscriber
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn notice(&self, line: &str) {
        tracing::info!("{line}");
    }
}
