//! # Lifecycle Framework
//!
//! A small orchestrator that brings a system of named components up in
//! declared order and tears it down in reverse order, tracking the running ones
//! in a caller-owned [`Registry`].
//!
//! It is the bootstrap/shutdown layer under an application, not the
//! application. What a component does is up to you; the framework only calls
//! its start and stop routines at the right time and keeps the registry honest.
//!
//! ## Core Concepts
//!
//! - **[`ComponentSpec`]**: one component's configuration value plus its start
//!   and stop routines.
//! - **[`SystemConfig`]**: the ordered set of specs. Declaration order *is* the
//!   dependency order; there is no graph resolution.
//! - **[`Registry`]**: name → running instance. A name is present iff that
//!   component is running.
//! - **Orchestrator**: [`start_component`], [`stop_component`],
//!   [`start_system`], [`stop_system`], [`stop_system_with`].
//!
//! ## Blocking and Suspending Routines
//!
//! A routine is either a plain function or an async one. The choice is made
//! when the routine is bound ([`StartRoutine`], [`StopRoutine`]), and the
//! orchestrator drives async routines to completion on a dedicated
//! single-threaded runtime before moving to the next component. Call the
//! orchestrator from synchronous code: inside a running Tokio runtime an async
//! routine fails with [`routine::NestedRuntime`], reported as a start or stop
//! failure of its component.
//!
//! ```rust
//! use lifecycle_framework::{
//!     start_system, stop_system, BoxError, ComponentSpec, Registry, SystemConfig,
//! };
//! use std::time::Duration;
//!
//! #[derive(Debug, PartialEq)]
//! struct Sleeper { slept_ms: u64, stopped: bool }
//!
//! async fn nap(_registry: &Registry<Sleeper>, ms: &u64) -> Result<Sleeper, BoxError> {
//!     tokio::time::sleep(Duration::from_millis(*ms)).await;
//!     Ok(Sleeper { slept_ms: *ms, stopped: false })
//! }
//!
//! let direct = ComponentSpec::builder(2)
//!     .start_blocking(|_registry, ms: &u64| {
//!         std::thread::sleep(Duration::from_millis(*ms));
//!         Ok(Sleeper { slept_ms: *ms, stopped: false })
//!     })
//!     .stop_blocking(|sleeper| {
//!         sleeper.stopped = true;
//!         Ok(())
//!     })
//!     .build();
//!
//! let suspending = ComponentSpec::builder(3)
//!     .start_suspending(|registry, ms| Box::pin(nap(registry, ms)))
//!     .stop_blocking(|sleeper| {
//!         sleeper.stopped = true;
//!         Ok(())
//!     })
//!     .build();
//!
//! let config = SystemConfig::new()
//!     .with_component("direct", direct)
//!     .and_then(|c| c.with_component("suspending", suspending))
//!     .unwrap();
//!
//! let mut registry = Registry::new();
//! start_system(&config, &mut registry).unwrap();
//! assert_eq!(registry.get("suspending"), Some(&Sleeper { slept_ms: 3, stopped: false }));
//!
//! stop_system(&config, &mut registry).unwrap();
//! assert!(registry.is_empty());
//! ```
//!
//! Components written as types can implement the async [`Component`] trait and
//! be bound with [`ComponentSpecBuilder::component`].
//!
//! ## Error Handling
//!
//! Every call returns [`LifecycleError`]. Failed routines come back as
//! `StartFailed` / `StopFailed` with the routine's error as `source`; misuse
//! (unknown names, double start, stopping a stopped component, missing
//! routines) comes back as a distinct precondition error, see
//! [`LifecycleError::is_precondition`]. Nothing is retried or rolled back: after
//! a failure the registry holds exactly what is running.
//!
//! ## Testing
//!
//! The [`mock`] module provides recording components with failure injection
//! for asserting call order.

pub mod component;
pub mod config;
pub mod error;
pub mod mock;
pub mod orchestrator;
pub mod registry;
pub mod routine;
pub mod tracing;

// Re-export core types for convenience
pub use component::{Component, ComponentSpec, ComponentSpecBuilder};
pub use config::SystemConfig;
pub use error::{LifecycleError, RoutineKind};
pub use orchestrator::{
    start_component, start_system, stop_component, stop_system, stop_system_with, ShutdownPolicy,
};
pub use registry::Registry;
pub use routine::{BoxError, BoxFuture, NestedRuntime, StartRoutine, StopRoutine};
