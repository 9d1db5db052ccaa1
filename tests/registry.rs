//! Integration tests for the monitored component registry
//!
//! These exercise the registry end to end over the built-in corosync
//! catalog: the full filtering matrix of profiling and fencing
//! configuration, descriptor content, and ordering guarantees.

use std::sync::Arc;

use ctsmon::{
    ComponentRegistry, MonitorRole, Pattern, RuntimeEnvironment, StackFlavor,
    StaticPatternCatalog, FENCING_DAEMON, MEMBERSHIP_LAYER, SCHEDULER_DAEMON,
};
use ctsmon::traits::MockDiagnosticSink;

fn corosync_registry() -> ComponentRegistry {
    let catalog = Arc::new(StaticPatternCatalog::for_flavor(StackFlavor::Corosync2));
    ComponentRegistry::new(catalog)
}

fn names(components: &[ctsmon::ComponentDescriptor]) -> Vec<&str> {
    components.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn baseline_run_watches_all_seven_components() {
    let registry = corosync_registry();
    let components = registry.monitored_components(&RuntimeEnvironment::new());

    assert_eq!(
        names(&components),
        vec![
            "pacemaker-based",
            "pacemaker-controld",
            "pacemaker-attrd",
            "pacemaker-execd",
            "pacemaker-fenced",
            "pacemaker-schedulerd",
            "corosync",
        ]
    );
}

#[test]
fn fencing_disabled_run_drops_only_the_fencer() {
    let registry = corosync_registry();
    let env = RuntimeEnvironment::new().with_fencing_enabled(false);

    let components = registry.monitored_components(&env);
    assert_eq!(components.len(), 6);
    assert!(!names(&components).contains(&FENCING_DAEMON));
    assert!(names(&components).contains(&SCHEDULER_DAEMON));
    assert!(names(&components).contains(&MEMBERSHIP_LAYER));
}

#[test]
fn profiled_executor_is_dropped_and_logged_once() {
    let mut sink = MockDiagnosticSink::new();
    sink.expect_notice()
        .withf(|line| line.contains("pacemaker-execd"))
        .times(1)
        .return_const(());

    let catalog = Arc::new(StaticPatternCatalog::for_flavor(StackFlavor::Corosync2));
    let registry = ComponentRegistry::new(catalog).with_sink(Arc::new(sink));

    let env = RuntimeEnvironment::new()
        .with_profiling_active(true)
        .with_profiling_target_list("pacemaker-execd");

    let components = registry.monitored_components(&env);
    assert_eq!(components.len(), 6);
    assert!(!names(&components).contains(&"pacemaker-execd"));
}

#[test]
fn descriptor_content_comes_from_the_catalog() {
    let mut catalog = StaticPatternCatalog::new();
    catalog.set_watch_patterns("corosync", vec![Pattern::from("corosync.*membership")]);
    catalog.set_ignore_patterns("corosync", vec![Pattern::from("corosync.*not scheduled")]);
    catalog.set_common_ignore_patterns(vec![Pattern::from("Lost connection")]);

    let registry = ComponentRegistry::new(Arc::new(catalog));
    let components = registry.monitored_components(&RuntimeEnvironment::new());

    let corosync = components
        .iter()
        .find(|c| c.name == MEMBERSHIP_LAYER)
        .unwrap();
    assert_eq!(corosync.role, MonitorRole::Node);
    assert_eq!(
        corosync.watch_patterns,
        vec![Pattern::from("corosync.*membership")]
    );
    assert_eq!(
        corosync.ignore_patterns,
        vec![
            Pattern::from("corosync.*not scheduled"),
            Pattern::from("Lost connection"),
        ]
    );

    // Components with no catalog entries still get the common set
    let attrd = components
        .iter()
        .find(|c| c.name == "pacemaker-attrd")
        .unwrap();
    assert!(attrd.watch_patterns.is_empty());
    assert_eq!(attrd.ignore_patterns, vec![Pattern::from("Lost connection")]);
}

#[test]
fn scheduler_is_the_only_dc_role_component() {
    let registry = corosync_registry();
    let components = registry.monitored_components(&RuntimeEnvironment::new());

    let dc_components: Vec<&str> = components
        .iter()
        .filter(|c| c.role == MonitorRole::Dc)
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(dc_components, vec![SCHEDULER_DAEMON]);
}

#[test]
fn combined_exclusions_apply_together() {
    let registry = corosync_registry();
    let env = RuntimeEnvironment::new()
        .with_fencing_enabled(false)
        .with_profiling_active(true)
        .with_profiling_target_list("pacemaker-based corosync");

    let components = registry.monitored_components(&env);
    assert_eq!(
        names(&components),
        vec!["pacemaker-controld", "pacemaker-attrd", "pacemaker-execd", "pacemaker-schedulerd"]
    );
}

#[test]
fn requery_after_environment_change_uses_the_same_built_set() {
    let registry = corosync_registry();

    let restricted = registry.monitored_components(
        &RuntimeEnvironment::new()
            .with_profiling_active(true)
            .with_profiling_target_list("pacemaker-execd pacemaker-fenced"),
    );
    let full = registry.monitored_components(&RuntimeEnvironment::new());

    assert_eq!(restricted.len(), 5);
    assert_eq!(full.len(), 7);
    // The restricted list is the full list with the targets removed,
    // order preserved
    let full_minus_targets: Vec<&str> = names(&full)
        .into_iter()
        .filter(|n| *n != "pacemaker-execd" && *n != "pacemaker-fenced")
        .collect();
    assert_eq!(names(&restricted), full_minus_targets);
}
