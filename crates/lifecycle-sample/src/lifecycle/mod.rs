//! # System Lifecycle
//!
//! [`SampleSystem`] declares the sample services in dependency order and drives
//! them through [`lifecycle_framework`]:
//!
//! ```text
//! start:  settings -> cache -> worker
//! stop:   worker -> cache -> settings
//! ```
//!
//! The cache reads the settings from the registry when it starts, which is why
//! settings come first. Nothing enforces this beyond declaration order.
//!
//! Shutdown is best-effort: a service that fails to stop does not keep the
//! others running. The failures are reported together and the failed services
//! stay visible in [`SampleSystem::registry`].

pub mod sample_system;

pub use sample_system::*;
