use crate::model::{Cache, CacheConfig, Service, ServiceConfig, SettingsConfig, WorkerConfig};
use crate::services::{cache, settings, worker};
use lifecycle_framework::{
    start_system, stop_system_with, LifecycleError, Registry, ShutdownPolicy, SystemConfig,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configuration of the whole sample system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    pub settings: SettingsConfig,
    pub cache: CacheConfig,
    pub worker: WorkerConfig,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            settings: SettingsConfig {
                app_name: "lifecycle-sample".to_string(),
                cache_capacity: 16,
            },
            cache: CacheConfig {
                preload: vec![
                    ("greeting".to_string(), "hello".to_string()),
                    ("farewell".to_string(), "goodbye".to_string()),
                ],
            },
            worker: WorkerConfig {
                warmup_ms: 200,
                drain_ms: 100,
            },
        }
    }
}

/// The sample system: settings, cache and worker, plus the registry of
/// whichever of them are running.
///
/// # Example
///
/// ```ignore
/// let mut system = SampleSystem::new(SampleConfig::default())?;
/// system.start()?;
/// let greeting = system.cache().and_then(|cache| cache.get("greeting"));
/// system.shutdown()?;
/// ```
pub struct SampleSystem {
    config: SystemConfig<ServiceConfig, Service>,
    registry: Registry<Service>,
}

impl SampleSystem {
    /// Declares the services. Nothing is started yet.
    pub fn new(config: SampleConfig) -> Result<Self, LifecycleError> {
        let config = SystemConfig::new()
            .with_component(settings::NAME, settings::spec(config.settings))?
            .with_component(cache::NAME, cache::spec(config.cache))?
            .with_component(worker::NAME, worker::spec(config.worker))?;

        Ok(Self {
            config,
            registry: Registry::new(),
        })
    }

    /// Starts every service in declaration order.
    ///
    /// On failure the services started so far keep running; call
    /// [`shutdown`](Self::shutdown) to stop them.
    pub fn start(&mut self) -> Result<(), LifecycleError> {
        start_system(&self.config, &mut self.registry)
    }

    /// Stops every running service in reverse order, continuing past failures.
    pub fn shutdown(&mut self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");
        stop_system_with(&self.config, &mut self.registry, ShutdownPolicy::BestEffort)?;
        info!("System shutdown complete.");
        Ok(())
    }

    pub fn registry(&self) -> &Registry<Service> {
        &self.registry
    }

    /// The running cache, if the cache service is up.
    pub fn cache(&self) -> Option<&Cache> {
        self.registry.get(cache::NAME).and_then(Service::as_cache)
    }
}
