//! Runtime environment for a single test run
//!
//! Captures the run-level configuration the registry's filtering
//! decisions depend on. The environment is owned by the surrounding
//! harness and read-only from the registry's perspective.

use std::collections::HashSet;

/// Run-level configuration consulted on every registry query
#[derive(Debug, Clone)]
pub struct RuntimeEnvironment {
    /// Daemon names running under a memory-profiling tool this run
    profiling_targets: HashSet<String>,
    /// Whether profiling is active for this run at all
    profiling_active: bool,
    /// Whether the fencing feature is enabled for this run
    fencing_enabled: bool,
}

impl Default for RuntimeEnvironment {
    fn default() -> Self {
        Self {
            profiling_targets: HashSet::new(),
            profiling_active: false,
            fencing_enabled: true,
        }
    }
}

impl RuntimeEnvironment {
    /// Create an environment with defaults: no profiling, fencing enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether profiling is active for this run (fluent API)
    pub fn with_profiling_active(mut self, active: bool) -> Self {
        self.profiling_active = active;
        self
    }

    /// Set the daemon names running under the profiler (fluent API)
    pub fn with_profiling_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profiling_targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether the fencing feature is enabled (fluent API)
    pub fn with_fencing_enabled(mut self, enabled: bool) -> Self {
        self.fencing_enabled = enabled;
        self
    }

    /// Parse profiling targets from a whitespace-separated process list,
    /// the textual form the harness configuration carries them in
    pub fn with_profiling_target_list(self, list: &str) -> Self {
        self.with_profiling_targets(list.split_whitespace())
    }

    pub fn profiling_active(&self) -> bool {
        self.profiling_active
    }

    pub fn fencing_enabled(&self) -> bool {
        self.fencing_enabled
    }

    pub fn is_profiling_target(&self, name: &str) -> bool {
        self.profiling_targets.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let env = RuntimeEnvironment::new();

        assert!(!env.profiling_active());
        assert!(env.fencing_enabled());
        assert!(!env.is_profiling_target("pacemaker-execd"));
    }

    #[test]
    fn test_fluent_configuration() {
        let env = RuntimeEnvironment::new()
            .with_profiling_active(true)
            .with_profiling_targets(["pacemaker-execd", "pacemaker-fenced"])
            .with_fencing_enabled(false);

        assert!(env.profiling_active());
        assert!(!env.fencing_enabled());
        assert!(env.is_profiling_target("pacemaker-execd"));
        assert!(env.is_profiling_target("pacemaker-fenced"));
        assert!(!env.is_profiling_target("pacemaker-controld"));
    }

    #[test]
    fn test_profiling_target_list_parsing() {
        let env = RuntimeEnvironment::new()
            .with_profiling_target_list("  pacemaker-execd\tpacemaker-based ");

        assert!(env.is_profiling_target("pacemaker-execd"));
        assert!(env.is_profiling_target("pacemaker-based"));
        assert!(!env.is_profiling_target(""));
    }

    #[test]
    fn test_empty_target_list() {
        let env = RuntimeEnvironment::new().with_profiling_target_list("");
        assert!(!env.is_profiling_target("pacemaker-execd"));
    }
}
