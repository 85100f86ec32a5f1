//! # Start & Stop Routines
//!
//! A component's constructor and destructor can be plain functions or async
//! functions. Instead of checking at call time which kind we were handed, the
//! choice is made once, when the routine is bound:
//!
//! - [`StartRoutine::blocking`] / [`StopRoutine::blocking`] wrap a direct call.
//! - [`StartRoutine::suspending`] / [`StopRoutine::suspending`] wrap a function
//!   returning a [`BoxFuture`].
//!
//! Both variants expose the same `invoke`, so the orchestrator is written once
//! against it. A suspending routine is driven to completion on a fresh
//! single-threaded Tokio runtime that lives only for that one call; the calling
//! thread blocks until the future resolves. Inside an already running runtime
//! the routine is not run and fails with [`NestedRuntime`].

use crate::registry::Registry;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Error returned by component routines.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A suspending routine was invoked from a thread already driving a Tokio
/// runtime.
#[derive(Debug, thiserror::Error)]
#[error("Cannot drive a suspending routine from inside a running Tokio runtime")]
pub struct NestedRuntime;

/// Future returned by suspending routines.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type BlockingStart<C, I> = Box<dyn Fn(&Registry<I>, &C) -> Result<I, BoxError> + Send + Sync>;
type SuspendingStart<C, I> = Box<
    dyn for<'a> Fn(&'a Registry<I>, &'a C) -> BoxFuture<'a, Result<I, BoxError>> + Send + Sync,
>;
type BlockingStop<I> = Box<dyn Fn(&mut I) -> Result<(), BoxError> + Send + Sync>;
type SuspendingStop<I> =
    Box<dyn for<'a> Fn(&'a mut I) -> BoxFuture<'a, Result<(), BoxError>> + Send + Sync>;

/// Constructor of a component.
///
/// Receives the registry (read access to components started earlier) and the
/// component's own configuration, and returns the running instance.
pub enum StartRoutine<C, I> {
    Blocking(BlockingStart<C, I>),
    Suspending(SuspendingStart<C, I>),
}

impl<C, I> StartRoutine<C, I> {
    /// Binds a direct function as the start routine.
    pub fn blocking<F>(start: F) -> Self
    where
        F: Fn(&Registry<I>, &C) -> Result<I, BoxError> + Send + Sync + 'static,
    {
        StartRoutine::Blocking(Box::new(start))
    }

    /// Binds an async function as the start routine.
    ///
    /// ```rust,ignore
    /// StartRoutine::suspending(|registry, config| Box::pin(open_pool(registry, config)))
    /// ```
    pub fn suspending<F>(start: F) -> Self
    where
        F: for<'a> Fn(&'a Registry<I>, &'a C) -> BoxFuture<'a, Result<I, BoxError>>
            + Send
            + Sync
            + 'static,
    {
        StartRoutine::Suspending(Box::new(start))
    }

    pub fn is_suspending(&self) -> bool {
        matches!(self, StartRoutine::Suspending(_))
    }

    pub(crate) fn invoke(&self, registry: &Registry<I>, config: &C) -> Result<I, BoxError> {
        match self {
            StartRoutine::Blocking(start) => start(registry, config),
            StartRoutine::Suspending(start) => block_on(start(registry, config)),
        }
    }
}

/// Destructor of a component.
///
/// Receives only the component's own instance. If it fails, the instance stays
/// in the registry with whatever changes the routine made before failing.
pub enum StopRoutine<I> {
    Blocking(BlockingStop<I>),
    Suspending(SuspendingStop<I>),
}

impl<I> StopRoutine<I> {
    /// Binds a direct function as the stop routine.
    pub fn blocking<F>(stop: F) -> Self
    where
        F: Fn(&mut I) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        StopRoutine::Blocking(Box::new(stop))
    }

    /// Binds an async function as the stop routine.
    pub fn suspending<F>(stop: F) -> Self
    where
        F: for<'a> Fn(&'a mut I) -> BoxFuture<'a, Result<(), BoxError>> + Send + Sync + 'static,
    {
        StopRoutine::Suspending(Box::new(stop))
    }

    pub fn is_suspending(&self) -> bool {
        matches!(self, StopRoutine::Suspending(_))
    }

    pub(crate) fn invoke(&self, instance: &mut I) -> Result<(), BoxError> {
        match self {
            StopRoutine::Blocking(stop) => stop(instance),
            StopRoutine::Suspending(stop) => block_on(stop(instance)),
        }
    }
}

impl<C, I> fmt::Debug for StartRoutine<C, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartRoutine::Blocking(_) => f.write_str("StartRoutine::Blocking"),
            StartRoutine::Suspending(_) => f.write_str("StartRoutine::Suspending"),
        }
    }
}

impl<I> fmt::Debug for StopRoutine<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopRoutine::Blocking(_) => f.write_str("StopRoutine::Blocking"),
            StopRoutine::Suspending(_) => f.write_str("StopRoutine::Suspending"),
        }
    }
}

/// Runs one future to completion on a dedicated current-thread runtime.
///
/// Tokio forbids nested `block_on`, so a call made inside a runtime returns
/// [`NestedRuntime`] without polling the future.
fn block_on<T>(future: BoxFuture<'_, Result<T, BoxError>>) -> Result<T, BoxError> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(NestedRuntime.into());
    }
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}
