//! Cache service: an in-memory cache sized from the running settings.
//!
//! The cache reads [`settings::NAME`] from the registry when it starts, so the
//! settings service must be declared before it.

use super::{settings, ServiceError};
use crate::model::{Cache, CacheConfig, Service, ServiceConfig};
use lifecycle_framework::{BoxError, ComponentSpec, Registry};
use tracing::{debug, info};

pub const NAME: &str = "cache";

pub fn spec(config: CacheConfig) -> ComponentSpec<ServiceConfig, Service> {
    ComponentSpec::builder(ServiceConfig::Cache(config))
        .start_blocking(start)
        .stop_blocking(stop)
        .build()
}

fn start(registry: &Registry<Service>, config: &ServiceConfig) -> Result<Service, BoxError> {
    let found = config.kind();
    let ServiceConfig::Cache(config) = config else {
        return Err(ServiceError::wrong_kind(NAME, found).into());
    };
    let settings = registry
        .get(settings::NAME)
        .and_then(Service::as_settings)
        .ok_or(ServiceError::MissingDependency {
            component: NAME,
            dependency: settings::NAME,
        })?;

    let mut cache = Cache::with_capacity(settings.cache_capacity);
    for (key, value) in &config.preload {
        cache.insert(key.as_str(), value.as_str())?;
    }
    info!(capacity = cache.capacity(), preloaded = cache.len(), "Cache opened");
    Ok(Service::Cache(cache))
}

fn stop(service: &mut Service) -> Result<(), BoxError> {
    let found = service.kind();
    let Service::Cache(cache) = service else {
        return Err(ServiceError::wrong_kind(NAME, found).into());
    };
    debug!(dropped = cache.len(), "Closing cache");
    cache.close();
    Ok(())
}
