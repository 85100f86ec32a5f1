//! # Lifecycle Sample
//!
//! Brings the sample system up, reads from the cache, and shuts it down.
//!
//! ```bash
//! RUST_LOG=info cargo run -p lifecycle-sample
//! RUST_LOG=debug cargo run -p lifecycle-sample   # also logs every running service
//! ```
//!
//! The orchestrator drives async services on its own runtimes, so `main` is a
//! plain synchronous function.

use lifecycle_framework::tracing::setup_tracing;
use lifecycle_sample::lifecycle::{SampleConfig, SampleSystem};
use std::error::Error;
use tracing::{debug, error, info};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting application with sample system");
    let mut system = SampleSystem::new(SampleConfig::default()).map_err(|e| describe(&e))?;

    let started = tracing::info_span!("startup").in_scope(|| system.start());
    if let Err(e) = started {
        error!(error = %describe(&e), "Startup failed");
        // Whatever did start still needs stopping.
        system.shutdown().map_err(|e| describe(&e))?;
        return Err(describe(&e));
    }

    for (name, service) in system.registry().iter() {
        debug!(component = name, ?service, "Running");
    }
    if let Some(cache) = system.cache() {
        for (key, value) in cache.iter() {
            info!(key, value, "Cached entry");
        }
    }

    tracing::info_span!("shutdown")
        .in_scope(|| system.shutdown())
        .map_err(|e| describe(&e))?;

    info!("Application completed successfully");
    Ok(())
}

/// Renders an error with its whole cause chain.
fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(source) = cause {
        message.push_str(": ");
        message.push_str(&source.to_string());
        cause = source.source();
    }
    message
}
