//! Component registry core for a cluster test harness
//!
//! This crate supplies the component registry and runtime filtering
//! logic of a fault-injection test harness for a cluster
//! resource-management stack: it binds each supervised daemon to the
//! log patterns that identify normal operation and to the patterns
//! that must be suppressed from failure reporting, and computes per
//! test run which daemons should actually be watched.
//!
//! Log-stream scanning, process signaling, and remote execution live in
//! the surrounding harness; this crate only produces the descriptor
//! list those subsystems consume.
//!
//! ## Quick Start
//!
//! ```rust
//! use ctsmon::{ComponentRegistry, RuntimeEnvironment, StackFlavor, StaticPatternCatalog};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(StaticPatternCatalog::for_flavor(StackFlavor::Corosync2));
//! let registry = ComponentRegistry::new(catalog);
//!
//! // A run with fencing disabled and the executor under valgrind
//! let env = RuntimeEnvironment::new()
//!     .with_fencing_enabled(false)
//!     .with_profiling_active(true)
//!     .with_profiling_target_list("pacemaker-execd");
//!
//! for component in registry.monitored_components(&env) {
//!     println!("watching {} ({:?})", component.name, component.role);
//! }
//! ```

// Core modules
pub mod catalog;
pub mod environment;
pub mod error;
pub mod registry;
pub mod traits;

// Main interfaces - re-exported at crate root for convenience
pub use catalog::{Pattern, StackFlavor, StaticPatternCatalog};
pub use environment::RuntimeEnvironment;
pub use registry::{ComponentDescriptor, ComponentRegistry, MonitorRole};

// Supporting types
pub use error::{CatalogError, CatalogResult};
pub use registry::{BASE_DAEMONS, FENCING_DAEMON, MEMBERSHIP_LAYER, SCHEDULER_DAEMON};
pub use traits::{DiagnosticSink, PatternCatalog, TracingSink};
