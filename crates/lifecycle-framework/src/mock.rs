//! # Mock Components & Testing Guide
//!
//! Testing an orchestrator means asserting *what was called, in which order*.
//! [`MockComponent`] builds a [`ComponentSpec`] whose routines log every call
//! into a shared [`Recorder`], and which can be told to fail on demand.
//!
//! | Feature | MockComponent | Real component |
//! |---------|---------------|----------------|
//! | **Speed** | Instant | Whatever the component does |
//! | **Call order** | Recorded | Not observable |
//! | **Error Injection** | `fail_start()` / `fail_stop()` | Hard |
//! | **Invocation style** | Blocking or `suspending()` | Fixed |
//!
//! ## Example
//!
//! ```rust
//! use lifecycle_framework::mock::{Event, MockComponent, Recorder};
//! use lifecycle_framework::{start_system, stop_system, Registry, SystemConfig};
//!
//! let recorder = Recorder::new();
//! let config = SystemConfig::new()
//!     .with_component("db", MockComponent::new("db", &recorder).spec())
//!     .and_then(|c| c.with_component("api", MockComponent::new("api", &recorder).suspending().spec()))
//!     .unwrap();
//!
//! let mut registry = Registry::new();
//! start_system(&config, &mut registry).unwrap();
//! stop_system(&config, &mut registry).unwrap();
//!
//! assert_eq!(
//!     recorder.events(),
//!     vec![
//!         Event::Start("db".into()),
//!         Event::Start("api".into()),
//!         Event::Stop("api".into()),
//!         Event::Stop("db".into()),
//!     ]
//! );
//! ```

use crate::component::ComponentSpec;
use crate::registry::Registry;
use crate::routine::BoxError;
use std::sync::{Arc, Mutex, PoisonError};

/// A routine call observed by a [`Recorder`]. Logged on entry, before the
/// routine succeeds or fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start(String),
    Stop(String),
}

/// Shared, ordered log of routine calls. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Names whose start routine was called, in call order.
    pub fn starts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Start(name) => Some(name),
                Event::Stop(_) => None,
            })
            .collect()
    }

    /// Names whose stop routine was called, in call order.
    pub fn stops(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Stop(name) => Some(name),
                Event::Start(_) => None,
            })
            .collect()
    }
}

/// Instance produced by a mock start routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockInstance {
    pub name: String,
    /// Set by the stop routine just before the instance leaves the registry.
    pub stopped: bool,
    /// Components that were already running when this one started, sorted.
    pub saw_running: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("Mock start rejected: {0}")]
    StartRejected(String),
    #[error("Mock stop rejected: {0}")]
    StopRejected(String),
}

#[derive(Debug)]
struct Behavior {
    name: String,
    recorder: Recorder,
    fail_start: bool,
    fail_stop: bool,
}

impl Behavior {
    fn start(&self, registry: &Registry<MockInstance>) -> Result<MockInstance, BoxError> {
        self.recorder.record(Event::Start(self.name.clone()));
        if self.fail_start {
            return Err(MockError::StartRejected(self.name.clone()).into());
        }
        let mut saw_running: Vec<String> = registry.names().map(String::from).collect();
        saw_running.sort();
        Ok(MockInstance {
            name: self.name.clone(),
            stopped: false,
            saw_running,
        })
    }

    fn stop(&self, instance: &mut MockInstance) -> Result<(), BoxError> {
        self.recorder.record(Event::Stop(self.name.clone()));
        if self.fail_stop {
            return Err(MockError::StopRejected(self.name.clone()).into());
        }
        instance.stopped = true;
        Ok(())
    }
}

/// Builder for a recording component.
///
/// # Example
/// ```ignore
/// let spec = MockComponent::new("cache", &recorder)
///     .suspending()
///     .fail_stop()
///     .spec();
/// ```
pub struct MockComponent {
    behavior: Behavior,
    suspending: bool,
}

impl MockComponent {
    pub fn new(name: impl Into<String>, recorder: &Recorder) -> Self {
        Self {
            behavior: Behavior {
                name: name.into(),
                recorder: recorder.clone(),
                fail_start: false,
                fail_stop: false,
            },
            suspending: false,
        }
    }

    /// Makes the start routine fail (after recording the call).
    pub fn fail_start(mut self) -> Self {
        self.behavior.fail_start = true;
        self
    }

    /// Makes the stop routine fail (after recording the call).
    pub fn fail_stop(mut self) -> Self {
        self.behavior.fail_stop = true;
        self
    }

    /// Binds the routines as suspending instead of blocking.
    pub fn suspending(mut self) -> Self {
        self.suspending = true;
        self
    }

    pub fn spec(self) -> ComponentSpec<(), MockInstance> {
        let behavior = Arc::new(self.behavior);
        let builder = ComponentSpec::builder(());

        if self.suspending {
            let starter = Arc::clone(&behavior);
            builder
                .start_suspending(move |registry, _config| {
                    let behavior = Arc::clone(&starter);
                    Box::pin(async move {
                        tokio::task::yield_now().await;
                        behavior.start(registry)
                    })
                })
                .stop_suspending(move |instance| {
                    let behavior = Arc::clone(&behavior);
                    Box::pin(async move {
                        tokio::task::yield_now().await;
                        behavior.stop(instance)
                    })
                })
                .build()
        } else {
            let starter = Arc::clone(&behavior);
            builder
                .start_blocking(move |registry, _config| starter.start(registry))
                .stop_blocking(move |instance| behavior.stop(instance))
                .build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_splits_events() {
        let recorder = Recorder::new();
        recorder.record(Event::Start("a".into()));
        recorder.record(Event::Start("b".into()));
        recorder.record(Event::Stop("b".into()));

        assert_eq!(recorder.starts(), vec!["a", "b"]);
        assert_eq!(recorder.stops(), vec!["b"]);
        assert_eq!(recorder.events().len(), 3);
    }

    #[test]
    fn test_failing_start_still_records() {
        let recorder = Recorder::new();
        let spec = MockComponent::new("db", &recorder).fail_start().spec();

        let result = spec
            .start_routine()
            .unwrap()
            .invoke(&Registry::new(), spec.config());
        assert!(result.is_err());
        assert_eq!(recorder.starts(), vec!["db"]);
    }

    #[test]
    fn test_suspending_stop_marks_instance() {
        let recorder = Recorder::new();
        let spec = MockComponent::new("db", &recorder).suspending().spec();
        let start = spec.start_routine().unwrap();
        assert!(start.is_suspending());

        let mut instance = start.invoke(&Registry::new(), spec.config()).unwrap();
        assert!(!instance.stopped);
        spec.stop_routine().unwrap().invoke(&mut instance).unwrap();
        assert!(instance.stopped);
        assert_eq!(recorder.stops(), vec!["db"]);
    }
}
