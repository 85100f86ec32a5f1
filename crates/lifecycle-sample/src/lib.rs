//! # Lifecycle Sample App Library
//!
//! A small system built on [`lifecycle_framework`]:
//!
//! - **[services::settings]**: loads application settings (blocking start).
//! - **[services::cache]**: an in-memory cache sized from the settings it finds
//!   in the registry, so it must be declared after them.
//! - **[services::worker]**: a background worker with async warm-up and drain,
//!   bound through the [`Component`](lifecycle_framework::Component) trait.
//! - **[lifecycle]**: [`SampleSystem`](lifecycle::SampleSystem) wires the three
//!   together and owns the registry.
//!
//! This library exposes the modules for the binary and for integration tests.

pub mod lifecycle;
pub mod model;
pub mod services;
