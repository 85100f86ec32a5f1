//! # Component Specs
//!
//! A [`ComponentSpec`] is everything the orchestrator knows about one component:
//! its configuration value and its start and stop routines.
//!
//! Specs are assembled with [`ComponentSpec::builder`], either from closures:
//!
//! ```rust
//! use lifecycle_framework::ComponentSpec;
//!
//! let spec: ComponentSpec<u16, String> = ComponentSpec::builder(8080)
//!     .start_blocking(|_registry, port| Ok(format!("listening on {port}")))
//!     .stop_blocking(|_listener| Ok(()))
//!     .build();
//! assert_eq!(*spec.config(), 8080);
//! ```
//!
//! or from a type implementing [`Component`], whose async hooks are bound as
//! suspending routines.
//!
//! A routine may be left out. The spec is still accepted, and the omission is
//! reported as [`LifecycleError::MissingRoutine`](crate::LifecycleError::MissingRoutine)
//! only when that routine is needed.

use crate::registry::Registry;
use crate::routine::{BoxError, BoxFuture, StartRoutine, StopRoutine};
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for components written as a type rather than a pair of closures.
///
/// # Async Hooks
/// Both hooks are `async` (via `#[async_trait]`). When bound with
/// [`ComponentSpecBuilder::component`] they become suspending routines, each
/// driven on its own runtime by the orchestrator.
///
/// `C` is the system's configuration type and `I` its instance type.
#[async_trait]
pub trait Component<C, I>: Send + Sync + 'static
where
    C: Send + Sync,
    I: Send + Sync,
{
    /// Builds the running instance. Components started earlier are visible in
    /// `registry`.
    async fn start(&self, registry: &Registry<I>, config: &C) -> Result<I, BoxError>;

    /// Releases the instance. Called right before it leaves the registry.
    async fn stop(&self, instance: &mut I) -> Result<(), BoxError>;
}

/// Declaration of one component: configuration plus start and stop routines.
#[derive(Debug)]
pub struct ComponentSpec<C, I> {
    config: C,
    start: Option<StartRoutine<C, I>>,
    stop: Option<StopRoutine<I>>,
}

impl<C, I> ComponentSpec<C, I> {
    /// Creates a spec with both routines.
    pub fn new(config: C, start: StartRoutine<C, I>, stop: StopRoutine<I>) -> Self {
        Self {
            config,
            start: Some(start),
            stop: Some(stop),
        }
    }

    pub fn builder(config: C) -> ComponentSpecBuilder<C, I> {
        ComponentSpecBuilder {
            config,
            start: None,
            stop: None,
        }
    }

    /// The value handed to the start routine.
    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn start_routine(&self) -> Option<&StartRoutine<C, I>> {
        self.start.as_ref()
    }

    pub fn stop_routine(&self) -> Option<&StopRoutine<I>> {
        self.stop.as_ref()
    }
}

/// Fluent builder for [`ComponentSpec`].
pub struct ComponentSpecBuilder<C, I> {
    config: C,
    start: Option<StartRoutine<C, I>>,
    stop: Option<StopRoutine<I>>,
}

impl<C, I> ComponentSpecBuilder<C, I> {
    pub fn start(mut self, routine: StartRoutine<C, I>) -> Self {
        self.start = Some(routine);
        self
    }

    pub fn stop(mut self, routine: StopRoutine<I>) -> Self {
        self.stop = Some(routine);
        self
    }

    pub fn start_blocking<F>(self, start: F) -> Self
    where
        F: Fn(&Registry<I>, &C) -> Result<I, BoxError> + Send + Sync + 'static,
    {
        self.start(StartRoutine::blocking(start))
    }

    pub fn start_suspending<F>(self, start: F) -> Self
    where
        F: for<'a> Fn(&'a Registry<I>, &'a C) -> BoxFuture<'a, Result<I, BoxError>>
            + Send
            + Sync
            + 'static,
    {
        self.start(StartRoutine::suspending(start))
    }

    pub fn stop_blocking<F>(self, stop: F) -> Self
    where
        F: Fn(&mut I) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.stop(StopRoutine::blocking(stop))
    }

    pub fn stop_suspending<F>(self, stop: F) -> Self
    where
        F: for<'a> Fn(&'a mut I) -> BoxFuture<'a, Result<(), BoxError>> + Send + Sync + 'static,
    {
        self.stop(StopRoutine::suspending(stop))
    }

    pub fn build(self) -> ComponentSpec<C, I> {
        ComponentSpec {
            config: self.config,
            start: self.start,
            stop: self.stop,
        }
    }
}

impl<C, I> ComponentSpecBuilder<C, I>
where
    C: Send + Sync + 'static,
    I: Send + Sync + 'static,
{
    /// Binds both hooks of `component` as suspending routines.
    pub fn component<T>(self, component: T) -> Self
    where
        T: Component<C, I>,
    {
        let component = Arc::new(component);
        let starter = Arc::clone(&component);
        self.start_suspending(move |registry, config| {
            let component = Arc::clone(&starter);
            Box::pin(async move { component.start(registry, config).await })
        })
        .stop_suspending(move |instance| {
            let component = Arc::clone(&component);
            Box::pin(async move { component.stop(instance).await })
        })
    }
}
