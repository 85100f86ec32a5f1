//! # Orchestrator
//!
//! Free functions that start and stop components against a caller-owned
//! [`Registry`].
//!
//! ## Sequencing
//!
//! Everything runs on the calling thread, one component at a time. A
//! component's start (or stop) has fully completed or failed before the next
//! one begins. Suspending routines are driven to completion on their own
//! short-lived runtime, so there is never any overlap between components.
//!
//! ## Failure behavior
//!
//! - No retries, no rollback.
//! - A failed start leaves the registry untouched; components started earlier
//!   stay running.
//! - A failed stop leaves the component in the registry.
//! - [`start_system`] and [`stop_system`] abort at the first failure.
//!   [`stop_system_with`] can instead keep going ([`ShutdownPolicy::BestEffort`]).
//!
//! ## Tracing
//!
//! Each operation logs with a `component` field:
//!
//! ```text
//! INFO Starting system components=3
//! INFO Started component="settings" size=1
//! WARN Start failed component="cache" error=settings not running
//! ```

use crate::config::SystemConfig;
use crate::error::{LifecycleError, RoutineKind};
use crate::registry::Registry;
use tracing::{debug, info, warn};

/// What [`stop_system_with`] does when a component fails to stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShutdownPolicy {
    /// Stop at the first failure. Components not yet reached stay running.
    #[default]
    Abort,
    /// Attempt every running component and report all failures together in
    /// [`LifecycleError::IncompleteShutdown`]. Precondition violations still
    /// abort immediately.
    BestEffort,
}

/// Starts a single component and returns a reference to its new instance.
///
/// # Errors
///
/// - `AlreadyRunning` if `name` is in the registry (the entry is not touched).
/// - `UnknownComponent` / `MissingRoutine` if `config` can't start `name`.
/// - `StartFailed` if the start routine fails; nothing is written to the registry.
pub fn start_component<'r, C, I>(
    config: &SystemConfig<C, I>,
    registry: &'r mut Registry<I>,
    name: &str,
) -> Result<&'r I, LifecycleError> {
    if registry.contains(name) {
        warn!(component = name, "Already running");
        return Err(LifecycleError::AlreadyRunning(name.to_string()));
    }
    let spec = config
        .get(name)
        .ok_or_else(|| LifecycleError::UnknownComponent(name.to_string()))?;
    let start = spec
        .start_routine()
        .ok_or_else(|| LifecycleError::MissingRoutine {
            component: name.to_string(),
            kind: RoutineKind::Start,
        })?;

    debug!(component = name, suspending = start.is_suspending(), "Starting");
    match start.invoke(registry, spec.config()) {
        Ok(instance) => {
            info!(component = name, size = registry.len() + 1, "Started");
            Ok(registry.insert(name, instance))
        }
        Err(source) => {
            warn!(component = name, error = %source, "Start failed");
            Err(LifecycleError::StartFailed {
                component: name.to_string(),
                source,
            })
        }
    }
}

/// Stops a single component and returns the instance removed from the registry.
///
/// # Errors
///
/// - `UnknownComponent` / `MissingRoutine` if `config` can't stop `name`.
/// - `NotRunning` if `name` is not in the registry.
/// - `StopFailed` if the stop routine fails; the entry stays in the registry.
pub fn stop_component<C, I>(
    config: &SystemConfig<C, I>,
    registry: &mut Registry<I>,
    name: &str,
) -> Result<I, LifecycleError> {
    let spec = config
        .get(name)
        .ok_or_else(|| LifecycleError::UnknownComponent(name.to_string()))?;
    let stop = spec
        .stop_routine()
        .ok_or_else(|| LifecycleError::MissingRoutine {
            component: name.to_string(),
            kind: RoutineKind::Stop,
        })?;
    let not_running = || LifecycleError::NotRunning(name.to_string());
    let instance = registry.get_mut(name).ok_or_else(not_running)?;

    debug!(component = name, suspending = stop.is_suspending(), "Stopping");
    if let Err(source) = stop.invoke(instance) {
        warn!(component = name, error = %source, "Stop failed");
        return Err(LifecycleError::StopFailed {
            component: name.to_string(),
            source,
        });
    }

    let instance = registry.remove(name).ok_or_else(not_running)?;
    info!(component = name, size = registry.len(), "Stopped");
    Ok(instance)
}

/// Starts every component in declaration order, aborting at the first failure.
///
/// On failure, components started before the failing one remain in the
/// registry and later ones are never attempted.
pub fn start_system<C, I>(
    config: &SystemConfig<C, I>,
    registry: &mut Registry<I>,
) -> Result<(), LifecycleError> {
    info!(components = config.len(), "Starting system");
    for name in config.names() {
        start_component(config, registry, name)?;
    }
    info!(size = registry.len(), "System started");
    Ok(())
}

/// Stops every running component in reverse declaration order, aborting at
/// the first failure. Components that are not running are skipped.
pub fn stop_system<C, I>(
    config: &SystemConfig<C, I>,
    registry: &mut Registry<I>,
) -> Result<(), LifecycleError> {
    stop_system_with(config, registry, ShutdownPolicy::Abort)
}

/// Like [`stop_system`], with an explicit [`ShutdownPolicy`].
pub fn stop_system_with<C, I>(
    config: &SystemConfig<C, I>,
    registry: &mut Registry<I>,
    policy: ShutdownPolicy,
) -> Result<(), LifecycleError> {
    info!(running = registry.len(), ?policy, "Stopping system");
    let mut failures = Vec::new();

    for name in config.names().rev() {
        if !registry.contains(name) {
            debug!(component = name, "Not running, skipped");
            continue;
        }
        match stop_component(config, registry, name) {
            Ok(_) => {}
            Err(e) if policy == ShutdownPolicy::BestEffort && !e.is_precondition() => {
                failures.push(e);
            }
            Err(e) => return Err(e),
        }
    }

    if failures.is_empty() {
        info!("System stopped");
        Ok(())
    } else {
        warn!(
            failed = failures.len(),
            running = registry.len(),
            "Shutdown incomplete"
        );
        Err(LifecycleError::IncompleteShutdown { failures })
    }
}
