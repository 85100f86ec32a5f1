//! Settings service: validates and publishes application settings.
//! Starts and stops synchronously.

use super::ServiceError;
use crate::model::{Service, ServiceConfig, Settings, SettingsConfig};
use lifecycle_framework::{BoxError, ComponentSpec, Registry};
use tracing::info;

pub const NAME: &str = "settings";

pub fn spec(config: SettingsConfig) -> ComponentSpec<ServiceConfig, Service> {
    ComponentSpec::builder(ServiceConfig::Settings(config))
        .start_blocking(start)
        .stop_blocking(stop)
        .build()
}

fn start(_registry: &Registry<Service>, config: &ServiceConfig) -> Result<Service, BoxError> {
    let found = config.kind();
    let ServiceConfig::Settings(config) = config else {
        return Err(ServiceError::wrong_kind(NAME, found).into());
    };
    if config.app_name.trim().is_empty() {
        return Err(ServiceError::InvalidSetting("app_name must not be empty".into()).into());
    }
    if config.cache_capacity == 0 {
        return Err(ServiceError::InvalidSetting("cache_capacity must be positive".into()).into());
    }

    info!(app_name = %config.app_name, cache_capacity = config.cache_capacity, "Settings loaded");
    Ok(Service::Settings(Settings {
        app_name: config.app_name.clone(),
        cache_capacity: config.cache_capacity,
        loaded: true,
    }))
}

fn stop(service: &mut Service) -> Result<(), BoxError> {
    let found = service.kind();
    let Service::Settings(settings) = service else {
        return Err(ServiceError::wrong_kind(NAME, found).into());
    };
    settings.loaded = false;
    Ok(())
}
