//! # Lifecycle Errors
//!
//! This module defines the error type returned by every orchestration call.
//!
//! Errors fall into two groups:
//!
//! - **Runtime failures**: a component's own start or stop routine failed
//!   ([`LifecycleError::StartFailed`], [`LifecycleError::StopFailed`],
//!   [`LifecycleError::IncompleteShutdown`]). These are recoverable from the
//!   caller's point of view.
//! - **Precondition violations**: the API was misused (unknown name, missing
//!   routine, starting a running component, stopping a stopped one, duplicate
//!   declaration). Use [`LifecycleError::is_precondition`] to tell them apart
//!   and treat them as fatal if you like.

use crate::routine::BoxError;
use std::fmt;

/// Which routine of a component an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineKind {
    Start,
    Stop,
}

impl fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutineKind::Start => write!(f, "start"),
            RoutineKind::Stop => write!(f, "stop"),
        }
    }
}

/// Errors that can occur while starting or stopping components.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("Component start failed: {component}")]
    StartFailed {
        component: String,
        #[source]
        source: BoxError,
    },
    #[error("Component stop failed: {component}")]
    StopFailed {
        component: String,
        #[source]
        source: BoxError,
    },
    /// Returned by a best-effort shutdown; holds one `StopFailed` per component
    /// that could not be stopped, in the order they were attempted.
    #[error("Shutdown incomplete: {} component(s) failed to stop", .failures.len())]
    IncompleteShutdown { failures: Vec<LifecycleError> },
    #[error("Unknown component: {0}")]
    UnknownComponent(String),
    #[error("Component {component} has no {kind} routine")]
    MissingRoutine {
        component: String,
        kind: RoutineKind,
    },
    #[error("Component already running: {0}")]
    AlreadyRunning(String),
    #[error("Component not running: {0}")]
    NotRunning(String),
    #[error("Duplicate component: {0}")]
    DuplicateComponent(String),
}

impl LifecycleError {
    /// Returns `true` if this error signals misuse of the API rather than a
    /// failed start or stop routine.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            LifecycleError::UnknownComponent(_)
                | LifecycleError::MissingRoutine { .. }
                | LifecycleError::AlreadyRunning(_)
                | LifecycleError::NotRunning(_)
                | LifecycleError::DuplicateComponent(_)
        )
    }

    /// The component this error is about, if it concerns a single one.
    pub fn component(&self) -> Option<&str> {
        match self {
            LifecycleError::StartFailed { component, .. }
            | LifecycleError::StopFailed { component, .. }
            | LifecycleError::MissingRoutine { component, .. } => Some(component),
            LifecycleError::UnknownComponent(name)
            | LifecycleError::AlreadyRunning(name)
            | LifecycleError::NotRunning(name)
            | LifecycleError::DuplicateComponent(name) => Some(name),
            LifecycleError::IncompleteShutdown { .. } => None,
        }
    }
}
