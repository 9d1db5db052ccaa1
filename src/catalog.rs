//! In-memory pattern catalog implementation
//!
//! Provides the [`Pattern`] value type plus [`StaticPatternCatalog`], a
//! table-backed [`PatternCatalog`] implementation with built-in entries
//! for the corosync stack and optional JSON loading for site-specific
//! overrides.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::CatalogResult;
use crate::traits::PatternCatalog;

/// A single log-matching pattern, opaque to the registry core
///
/// The registry never interprets pattern text; it only routes ordered
/// pattern sequences from the catalog to the descriptors handed to the
/// log-scanning subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(String);

impl Pattern {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cluster stack flavor the catalog serves patterns for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackFlavor {
    Corosync2,
}

/// Table-backed pattern catalog
///
/// Watch and ignore tables are keyed by component name; lookups on an
/// absent key return an empty sequence. Serializable so a deployment
/// can ship its catalog as a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticPatternCatalog {
    #[serde(default)]
    watch: HashMap<String, Vec<Pattern>>,
    #[serde(default)]
    ignore: HashMap<String, Vec<Pattern>>,
    #[serde(default)]
    common_ignore: Vec<Pattern>,
}

impl StaticPatternCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in catalog for the given stack flavor
    pub fn for_flavor(flavor: StackFlavor) -> Self {
        match flavor {
            StackFlavor::Corosync2 => Self::corosync2(),
        }
    }

    /// Register the watch patterns for a component, replacing any
    /// previous registration
    pub fn set_watch_patterns<S: Into<String>>(&mut self, component: S, patterns: Vec<Pattern>) {
        self.watch.insert(component.into(), patterns);
    }

    /// Register the component-specific ignore patterns, replacing any
    /// previous registration
    pub fn set_ignore_patterns<S: Into<String>>(&mut self, component: S, patterns: Vec<Pattern>) {
        self.ignore.insert(component.into(), patterns);
    }

    /// Register the stack-wide common ignore patterns
    pub fn set_common_ignore_patterns(&mut self, patterns: Vec<Pattern>) {
        self.common_ignore = patterns;
    }

    /// Parse a catalog from its JSON representation
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file on disk
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    fn corosync2() -> Self {
        let mut catalog = Self::new();

        catalog.set_watch_patterns(
            "pacemaker-based",
            vec![
                Pattern::from(r"pacemaker-based.*Starting Pacemaker CIB manager"),
                Pattern::from(r"pacemaker-based.*Forwarding \S+ operation for section"),
            ],
        );
        catalog.set_watch_patterns(
            "pacemaker-controld",
            vec![
                Pattern::from(r"pacemaker-controld.*Starting Pacemaker controller"),
                Pattern::from(r"pacemaker-controld.*State transition .* -> S_IDLE"),
            ],
        );
        catalog.set_watch_patterns(
            "pacemaker-attrd",
            vec![Pattern::from(
                r"pacemaker-attrd.*Starting Pacemaker node attribute manager",
            )],
        );
        catalog.set_watch_patterns(
            "pacemaker-execd",
            vec![Pattern::from(
                r"pacemaker-execd.*Starting Pacemaker executor",
            )],
        );
        catalog.set_watch_patterns(
            "pacemaker-fenced",
            vec![Pattern::from(
                r"pacemaker-fenced.*Starting Pacemaker fencer",
            )],
        );
        catalog.set_watch_patterns(
            "pacemaker-schedulerd",
            vec![Pattern::from(
                r"pacemaker-schedulerd.*Starting Pacemaker scheduler",
            )],
        );
        catalog.set_watch_patterns(
            "corosync",
            vec![
                Pattern::from(r"corosync.*Initializing transport"),
                Pattern::from(r"corosync.*A new membership .* was formed"),
            ],
        );

        catalog.set_ignore_patterns(
            "pacemaker-based",
            vec![Pattern::from(
                r"pacemaker-based.*Connection to .* \((closed|failed)\)",
            )],
        );
        catalog.set_ignore_patterns(
            "pacemaker-controld",
            vec![
                Pattern::from(r"pacemaker-controld.*Connection to the scheduler failed"),
                Pattern::from(r"pacemaker-controld.*Could not recover from internal error"),
            ],
        );
        catalog.set_ignore_patterns(
            "pacemaker-execd",
            vec![Pattern::from(
                r"pacemaker-controld.*Connection to executor failed",
            )],
        );
        catalog.set_ignore_patterns(
            "pacemaker-fenced",
            vec![Pattern::from(
                r"pacemaker-controld.*Fencer successfully connected",
            )],
        );
        catalog.set_ignore_patterns(
            "corosync",
            vec![Pattern::from(r"corosync.*Corosync main process was not scheduled")],
        );

        catalog.set_common_ignore_patterns(vec![
            Pattern::from(r"Connection to the cluster manager .* (closed|failed)"),
            Pattern::from(r"error: Lost connection to the CIB manager"),
        ]);

        catalog
    }
}

impl PatternCatalog for StaticPatternCatalog {
    fn watch_patterns(&self, component: &str) -> Vec<Pattern> {
        self.watch.get(component).cloned().unwrap_or_default()
    }

    fn ignore_patterns(&self, component: &str) -> Vec<Pattern> {
        self.ignore.get(component).cloned().unwrap_or_default()
    }

    fn common_ignore_patterns(&self) -> Vec<Pattern> {
        self.common_ignore.clone()
    }
}
