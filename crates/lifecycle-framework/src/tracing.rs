//! # Observability & Tracing
//!
//! The orchestrator emits `tracing` events for every start and stop, with the
//! component name as a structured `component` field. This module installs the
//! subscriber that prints them.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per component start/stop
//! RUST_LOG=debug cargo run     # also invocation style and skipped components
//! RUST_LOG=lifecycle_framework=debug,info cargo run
//! ```
//!
//! With `RUST_LOG=info` a full start/stop cycle looks like:
//!
//! ```text
//! INFO Starting system components=3
//! INFO Started component="settings" size=1
//! INFO Started component="cache" size=2
//! INFO Started component="worker" size=3
//! INFO System started size=3
//! INFO Stopping system running=3 policy=Abort
//! INFO Stopped component="worker" size=2
//! INFO Stopped component="cache" size=1
//! INFO Stopped component="settings" size=0
//! INFO System stopped
//! ```

/// Initializes the tracing subscriber.
///
/// Log level comes from `RUST_LOG`. The compact format hides module paths;
/// the `component` field already says where an event comes from.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
