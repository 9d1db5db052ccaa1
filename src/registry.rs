//! Monitored component registry and runtime filtering
//!
//! The registry binds each daemon of the cluster stack to its watch and
//! ignore patterns, builds that descriptor set exactly once per
//! instance, and on every query filters it down to the subset the
//! process-monitoring subsystem should actually watch for the current
//! run.

use std::sync::{Arc, OnceLock};

use crate::catalog::Pattern;
use crate::environment::RuntimeEnvironment;
use crate::traits::{DiagnosticSink, PatternCatalog, TracingSink};

/// The five daemons monitored on every cluster node, in build order
pub const BASE_DAEMONS: [&str; 5] = [
    "pacemaker-based",
    "pacemaker-controld",
    "pacemaker-attrd",
    "pacemaker-execd",
    "pacemaker-fenced",
];

/// The scheduler, only meaningfully active on the coordinating node
pub const SCHEDULER_DAEMON: &str = "pacemaker-schedulerd";

/// The cluster membership layer
pub const MEMBERSHIP_LAYER: &str = "corosync";

/// The fencing daemon, excluded when fencing is disabled for a run
pub const FENCING_DAEMON: &str = "pacemaker-fenced";

/// Node role a component's watch patterns apply under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorRole {
    /// Watched on any cluster node
    Node,
    /// Watched only on the cluster's current coordinating node
    Dc,
}

/// Immutable binding of one daemon to its pattern sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub name: String,
    pub role: MonitorRole,
    /// Ordered patterns recognizing normal operation under `role`
    pub watch_patterns: Vec<Pattern>,
    /// Ordered suppression patterns: component-specific entries first,
    /// then the stack-wide common entries, duplicates permitted
    pub ignore_patterns: Vec<Pattern>,
}

/// Registry of monitored components for one cluster-manager instance
///
/// The full descriptor set is built lazily on first query and reused
/// for the instance's lifetime; filtering against the runtime
/// environment runs on every query.
pub struct ComponentRegistry {
    catalog: Arc<dyn PatternCatalog>,
    sink: Arc<dyn DiagnosticSink>,
    components: OnceLock<Vec<ComponentDescriptor>>,
    extras: Vec<(String, MonitorRole)>,
}

impl ComponentRegistry {
    /// Create a registry over the given catalog, logging through tracing
    pub fn new(catalog: Arc<dyn PatternCatalog>) -> Self {
        Self {
            catalog,
            sink: Arc::new(TracingSink),
            components: OnceLock::new(),
            extras: Vec::new(),
        }
    }

    /// Replace the diagnostic sink (fluent API)
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Register an additional component beyond the fixed corosync set
    /// (fluent API). Extras are added after the built-in components; an
    /// extra sharing a built-in name replaces that entry in place.
    pub fn with_extra_component<S: Into<String>>(mut self, name: S, role: MonitorRole) -> Self {
        self.extras.push((name.into(), role));
        self
    }

    /// The components to watch for the current run, in build order
    ///
    /// Excluded from the returned list:
    /// - components running under a memory profiler while profiling is
    ///   active, since they cannot be force-killed by the harness's
    ///   crash simulation (each such skip emits one diagnostic notice);
    /// - the fencing daemon when fencing is disabled for the run.
    pub fn monitored_components(&self, env: &RuntimeEnvironment) -> Vec<ComponentDescriptor> {
        let full_list = self.components.get_or_init(|| self.build_components());

        let mut monitored = Vec::with_capacity(full_list.len());
        for component in full_list {
            if env.profiling_active() && env.is_profiling_target(&component.name) {
                self.sink.notice(&format!(
                    "Filtering {} from the component list as it is running under a memory profiler",
                    component.name
                ));
                continue;
            }
            if component.name == FENCING_DAEMON && !env.fencing_enabled() {
                continue;
            }
            monitored.push(component.clone());
        }
        monitored
    }

    fn build_components(&self) -> Vec<ComponentDescriptor> {
        let mut components = Vec::with_capacity(BASE_DAEMONS.len() + 2 + self.extras.len());

        for name in BASE_DAEMONS {
            upsert(&mut components, self.describe(name, MonitorRole::Node));
        }

        // the scheduler is only ever watched in its DC role
        upsert(
            &mut components,
            self.describe(SCHEDULER_DAEMON, MonitorRole::Dc),
        );

        // add (or replace) the membership layer and any extras
        upsert(
            &mut components,
            self.describe(MEMBERSHIP_LAYER, MonitorRole::Node),
        );
        for (name, role) in &self.extras {
            upsert(&mut components, self.describe(name, *role));
        }

        components
    }

    fn describe(&self, name: &str, role: MonitorRole) -> ComponentDescriptor {
        let mut ignore_patterns = self.catalog.ignore_patterns(name);
        ignore_patterns.extend(self.catalog.common_ignore_patterns());

        ComponentDescriptor {
            name: name.to_string(),
            role,
            watch_patterns: self.catalog.watch_patterns(name),
            ignore_patterns,
        }
    }
}

/// Insert a descriptor, or replace an existing one with the same name
/// without disturbing its position
fn upsert(components: &mut Vec<ComponentDescriptor>, descriptor: ComponentDescriptor) {
    match components.iter_mut().find(|c| c.name == descriptor.name) {
        Some(existing) => *existing = descriptor,
        None => components.push(descriptor),
    }
}
