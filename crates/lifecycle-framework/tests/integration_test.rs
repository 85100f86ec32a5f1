use lifecycle_framework::mock::{Event, MockComponent, MockInstance, Recorder};
use lifecycle_framework::{
    start_component, start_system, stop_component, stop_system, stop_system_with, ComponentSpec,
    BoxError, LifecycleError, NestedRuntime, Registry, RoutineKind, ShutdownPolicy, SystemConfig,
};
use std::error::Error;

type MockConfig = SystemConfig<(), MockInstance>;

fn config_of(components: Vec<MockComponent>, names: &[&str]) -> MockConfig {
    let mut config = SystemConfig::new();
    for (name, component) in names.iter().zip(components) {
        config.insert(*name, component.spec()).unwrap();
    }
    config
}

fn plain(names: &[&str], recorder: &Recorder) -> MockConfig {
    let components = names
        .iter()
        .map(|name| MockComponent::new(*name, recorder))
        .collect();
    config_of(components, names)
}

fn instance(name: &str, saw_running: &[&str]) -> MockInstance {
    MockInstance {
        name: name.to_string(),
        stopped: false,
        saw_running: saw_running.iter().map(|s| s.to_string()).collect(),
    }
}

// --- System start / stop ---

#[test]
fn test_start_system_registers_every_component() {
    let recorder = Recorder::new();
    let config = plain(&["db", "cache", "api"], &recorder);
    let mut registry = Registry::new();

    start_system(&config, &mut registry).unwrap();

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.get("db"), Some(&instance("db", &[])));
    assert_eq!(registry.get("cache"), Some(&instance("cache", &["db"])));
    assert_eq!(registry.get("api"), Some(&instance("api", &["cache", "db"])));
}

#[test]
fn test_start_and_stop_order() {
    let recorder = Recorder::new();
    let config = plain(&["db", "cache", "api"], &recorder);
    let mut registry = Registry::new();

    start_system(&config, &mut registry).unwrap();
    stop_system(&config, &mut registry).unwrap();

    assert!(registry.is_empty());
    assert_eq!(recorder.starts(), vec!["db", "cache", "api"]);
    assert_eq!(recorder.stops(), vec!["api", "cache", "db"]);
}

#[test]
fn test_matches_manual_component_starts() {
    let recorder = Recorder::new();
    let config = plain(&["db", "cache"], &recorder);

    let mut manual = Registry::new();
    for name in config.names() {
        start_component(&config, &mut manual, name).unwrap();
    }
    let mut helper = Registry::new();
    start_system(&config, &mut helper).unwrap();

    assert_eq!(manual, helper);
}

#[test]
fn test_stop_system_skips_components_not_running() {
    let recorder = Recorder::new();
    let config = plain(&["db", "cache", "api"], &recorder);
    let mut registry = Registry::new();

    start_component(&config, &mut registry, "db").unwrap();
    start_component(&config, &mut registry, "api").unwrap();
    stop_system(&config, &mut registry).unwrap();

    assert!(registry.is_empty());
    assert_eq!(recorder.stops(), vec!["api", "db"]);
}

#[test]
fn test_stop_system_on_empty_registry_is_noop() {
    let recorder = Recorder::new();
    let config = plain(&["db"], &recorder);
    let mut registry = Registry::new();

    stop_system(&config, &mut registry).unwrap();
    assert!(recorder.events().is_empty());
}

// --- Partial failure ---

#[test]
fn test_start_failure_aborts_sequence() {
    let recorder = Recorder::new();
    let config = config_of(
        vec![
            MockComponent::new("db", &recorder),
            MockComponent::new("cache", &recorder).fail_start(),
            MockComponent::new("api", &recorder),
        ],
        &["db", "cache", "api"],
    );
    let mut registry = Registry::new();

    let err = start_system(&config, &mut registry).unwrap_err();

    assert!(matches!(err, LifecycleError::StartFailed { ref component, .. } if component == "cache"));
    assert!(!err.is_precondition());
    assert_eq!(
        err.source().unwrap().to_string(),
        "Mock start rejected: cache"
    );
    assert!(registry.contains("db"));
    assert!(!registry.contains("cache"));
    assert!(!registry.contains("api"));
    assert_eq!(recorder.starts(), vec!["db", "cache"]);
}

#[test]
fn test_stop_failure_keeps_component_registered() {
    let recorder = Recorder::new();
    let config = config_of(
        vec![
            MockComponent::new("db", &recorder),
            MockComponent::new("cache", &recorder).fail_stop(),
            MockComponent::new("api", &recorder),
        ],
        &["db", "cache", "api"],
    );
    let mut registry = Registry::new();
    start_system(&config, &mut registry).unwrap();

    let err = stop_system(&config, &mut registry).unwrap_err();

    assert!(matches!(err, LifecycleError::StopFailed { ref component, .. } if component == "cache"));
    assert_eq!(recorder.stops(), vec!["api", "cache"]);
    assert!(!registry.contains("api"));
    assert!(registry.contains("cache"));
    assert!(registry.contains("db"));
}

#[test]
fn test_suspending_start_failure_is_wrapped() {
    let recorder = Recorder::new();
    let config = config_of(
        vec![
            MockComponent::new("db", &recorder),
            MockComponent::new("cache", &recorder).suspending().fail_start(),
        ],
        &["db", "cache"],
    );
    let mut registry = Registry::new();

    let err = start_system(&config, &mut registry).unwrap_err();

    assert!(matches!(err, LifecycleError::StartFailed { ref component, .. } if component == "cache"));
    assert_eq!(
        err.source().unwrap().to_string(),
        "Mock start rejected: cache"
    );
    assert!(registry.contains("db"));
    assert!(!registry.contains("cache"));
}

#[test]
fn test_suspending_stop_failure_keeps_component_registered() {
    let recorder = Recorder::new();
    let config = config_of(
        vec![
            MockComponent::new("db", &recorder),
            MockComponent::new("cache", &recorder).suspending().fail_stop(),
        ],
        &["db", "cache"],
    );
    let mut registry = Registry::new();
    start_system(&config, &mut registry).unwrap();

    let err = stop_system(&config, &mut registry).unwrap_err();

    assert!(matches!(err, LifecycleError::StopFailed { ref component, .. } if component == "cache"));
    assert_eq!(recorder.stops(), vec!["cache"]);
    assert_eq!(registry.get("cache"), Some(&instance("cache", &["db"])));
    assert!(registry.contains("db"));
}

#[test]
fn test_failed_stop_leaves_partial_changes_visible() {
    let mut config: SystemConfig<u32, u32> = SystemConfig::new();
    config
        .insert(
            "blocking",
            ComponentSpec::builder(1)
                .start_blocking(|_, config| Ok(*config))
                .stop_blocking(|connections: &mut u32| {
                    *connections = 0;
                    Err("flush failed".into())
                })
                .build(),
        )
        .unwrap();
    config
        .insert(
            "suspending",
            ComponentSpec::builder(5)
                .start_blocking(|_, config| Ok(*config))
                .stop_suspending(|connections: &mut u32| {
                    Box::pin(async move {
                        *connections -= 1;
                        tokio::task::yield_now().await;
                        Err::<(), BoxError>("drain timed out".into())
                    })
                })
                .build(),
        )
        .unwrap();
    let mut registry = Registry::new();
    start_system(&config, &mut registry).unwrap();

    let err = stop_component(&config, &mut registry, "blocking").unwrap_err();
    assert!(matches!(err, LifecycleError::StopFailed { .. }));
    assert_eq!(registry.get("blocking"), Some(&0));

    let err = stop_component(&config, &mut registry, "suspending").unwrap_err();
    assert_eq!(err.source().unwrap().to_string(), "drain timed out");
    assert_eq!(registry.get("suspending"), Some(&4));
}

#[test]
fn test_best_effort_shutdown_attempts_everything() {
    let recorder = Recorder::new();
    let config = config_of(
        vec![
            MockComponent::new("db", &recorder).fail_stop(),
            MockComponent::new("cache", &recorder),
            MockComponent::new("api", &recorder).fail_stop(),
        ],
        &["db", "cache", "api"],
    );
    let mut registry = Registry::new();
    start_system(&config, &mut registry).unwrap();

    let err = stop_system_with(&config, &mut registry, ShutdownPolicy::BestEffort).unwrap_err();

    assert_eq!(recorder.stops(), vec!["api", "cache", "db"]);
    let failures = match err {
        LifecycleError::IncompleteShutdown { failures } => failures,
        other => panic!("expected IncompleteShutdown, got {other:?}"),
    };
    let failed: Vec<_> = failures.iter().filter_map(|e| e.component()).collect();
    assert_eq!(failed, vec!["api", "db"]);
    assert_eq!(registry.len(), 2);
    assert!(!registry.contains("cache"));
}

#[test]
fn test_best_effort_without_failures_empties_registry() {
    let recorder = Recorder::new();
    let config = plain(&["db", "api"], &recorder);
    let mut registry = Registry::new();
    start_system(&config, &mut registry).unwrap();

    stop_system_with(&config, &mut registry, ShutdownPolicy::BestEffort).unwrap();
    assert!(registry.is_empty());
}

// --- Preconditions ---

#[test]
fn test_double_start_is_rejected() {
    let recorder = Recorder::new();
    let config = plain(&["db", "api"], &recorder);
    let mut registry = Registry::new();
    start_component(&config, &mut registry, "db").unwrap();
    start_component(&config, &mut registry, "api").unwrap();
    let before = registry.clone();

    let err = start_component(&config, &mut registry, "db").unwrap_err();

    assert!(matches!(err, LifecycleError::AlreadyRunning(ref name) if name == "db"));
    assert!(err.is_precondition());
    assert_eq!(registry, before);
    assert_eq!(recorder.starts(), vec!["db", "api"]);
}

#[test]
fn test_stop_of_stopped_component_is_rejected() {
    let recorder = Recorder::new();
    let config = plain(&["db"], &recorder);
    let mut registry = Registry::new();

    let err = stop_component(&config, &mut registry, "db").unwrap_err();
    assert!(matches!(err, LifecycleError::NotRunning(ref name) if name == "db"));
    assert!(err.is_precondition());
    assert!(recorder.events().is_empty());
}

#[test]
fn test_unknown_component_is_rejected() {
    let recorder = Recorder::new();
    let config = plain(&["db"], &recorder);
    let mut registry = Registry::new();

    let err = start_component(&config, &mut registry, "ghost").unwrap_err();
    assert!(matches!(err, LifecycleError::UnknownComponent(ref name) if name == "ghost"));
    let err = stop_component(&config, &mut registry, "ghost").unwrap_err();
    assert!(matches!(err, LifecycleError::UnknownComponent(_)));
}

#[test]
fn test_missing_routines_are_rejected() {
    let mut config: SystemConfig<u32, u32> = SystemConfig::new();
    config
        .insert(
            "no_stop",
            ComponentSpec::builder(1)
                .start_blocking(|_, config| Ok(*config))
                .build(),
        )
        .unwrap();
    config
        .insert(
            "no_start",
            ComponentSpec::builder(2).stop_blocking(|_| Ok(())).build(),
        )
        .unwrap();
    let mut registry = Registry::new();

    let err = start_component(&config, &mut registry, "no_start").unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::MissingRoutine { kind: RoutineKind::Start, .. }
    ));

    start_component(&config, &mut registry, "no_stop").unwrap();
    let err = stop_system(&config, &mut registry).unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::MissingRoutine { kind: RoutineKind::Stop, ref component } if component == "no_stop"
    ));
    assert!(registry.contains("no_stop"));
}

#[test]
fn test_best_effort_still_aborts_on_misuse() {
    let mut config: SystemConfig<u32, u32> = SystemConfig::new();
    config
        .insert(
            "first",
            ComponentSpec::builder(1)
                .start_blocking(|_, config| Ok(*config))
                .stop_blocking(|_| Ok(()))
                .build(),
        )
        .unwrap();
    config
        .insert(
            "second",
            ComponentSpec::builder(2)
                .start_blocking(|_, config| Ok(*config))
                .build(),
        )
        .unwrap();
    let mut registry = Registry::new();
    start_system(&config, &mut registry).unwrap();

    let err = stop_system_with(&config, &mut registry, ShutdownPolicy::BestEffort).unwrap_err();
    assert!(err.is_precondition());
    assert!(registry.contains("first"));
}

// --- Blocking vs suspending ---

#[test]
fn test_mixed_invocation_styles_give_same_registry() {
    let recorder = Recorder::new();
    let names = ["db", "cache", "api"];
    let blocking = plain(&names, &recorder);
    let mixed = config_of(
        vec![
            MockComponent::new("db", &recorder),
            MockComponent::new("cache", &recorder).suspending(),
            MockComponent::new("api", &recorder),
        ],
        &names,
    );

    let mut blocking_registry = Registry::new();
    let mut mixed_registry = Registry::new();
    start_system(&blocking, &mut blocking_registry).unwrap();
    start_system(&mixed, &mut mixed_registry).unwrap();
    assert_eq!(blocking_registry, mixed_registry);

    stop_system(&mixed, &mut mixed_registry).unwrap();
    assert!(mixed_registry.is_empty());
}

#[test]
fn test_stop_component_returns_stopped_instance() {
    let recorder = Recorder::new();
    let config = config_of(
        vec![MockComponent::new("db", &recorder).suspending()],
        &["db"],
    );
    let mut registry = Registry::new();

    let started = start_component(&config, &mut registry, "db").unwrap();
    assert!(!started.stopped);

    let stopped = stop_component(&config, &mut registry, "db").unwrap();
    assert!(stopped.stopped);
    assert!(registry.is_empty());
    assert_eq!(
        recorder.events(),
        vec![Event::Start("db".into()), Event::Stop("db".into())]
    );
}

// --- Called from async code ---

#[tokio::test]
async fn test_suspending_start_inside_runtime_is_start_failure() {
    let recorder = Recorder::new();
    let config = config_of(
        vec![MockComponent::new("db", &recorder).suspending()],
        &["db"],
    );
    let mut registry = Registry::new();

    let err = start_component(&config, &mut registry, "db").unwrap_err();

    assert!(matches!(err, LifecycleError::StartFailed { ref component, .. } if component == "db"));
    assert!(err.source().unwrap().downcast_ref::<NestedRuntime>().is_some());
    assert!(registry.is_empty());
    // The routine never ran.
    assert!(recorder.events().is_empty());
}

#[tokio::test]
async fn test_suspending_stop_inside_runtime_is_stop_failure() {
    let mut config: SystemConfig<u32, u32> = SystemConfig::new();
    config
        .insert(
            "db",
            ComponentSpec::builder(3)
                .start_blocking(|_, config| Ok(*config))
                .stop_suspending(|_| Box::pin(async { Ok::<(), BoxError>(()) }))
                .build(),
        )
        .unwrap();
    let mut registry = Registry::new();
    start_component(&config, &mut registry, "db").unwrap();

    let err = stop_component(&config, &mut registry, "db").unwrap_err();

    assert!(matches!(err, LifecycleError::StopFailed { ref component, .. } if component == "db"));
    assert_eq!(registry.get("db"), Some(&3));
}
