//! Configuration and instance types of the sample services.
//!
//! Every service in the system shares one configuration type ([`ServiceConfig`])
//! and one instance type ([`Service`]), so a single registry can hold them all.

pub mod cache;
pub mod settings;
pub mod worker;

pub use cache::{Cache, CacheConfig};
pub use settings::{Settings, SettingsConfig};
pub use worker::{Worker, WorkerConfig};

use serde::{Deserialize, Serialize};

/// Configuration of one sample service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServiceConfig {
    Settings(SettingsConfig),
    Cache(CacheConfig),
    Worker(WorkerConfig),
}

/// A running sample service, as stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Service {
    Settings(Settings),
    Cache(Cache),
    Worker(Worker),
}

impl ServiceConfig {
    /// Short name of the service this configuration belongs to.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceConfig::Settings(_) => "settings",
            ServiceConfig::Cache(_) => "cache",
            ServiceConfig::Worker(_) => "worker",
        }
    }
}

impl Service {
    pub fn kind(&self) -> &'static str {
        match self {
            Service::Settings(_) => "settings",
            Service::Cache(_) => "cache",
            Service::Worker(_) => "worker",
        }
    }

    pub fn as_settings(&self) -> Option<&Settings> {
        match self {
            Service::Settings(settings) => Some(settings),
            _ => None,
        }
    }

    pub fn as_cache(&self) -> Option<&Cache> {
        match self {
            Service::Cache(cache) => Some(cache),
            _ => None,
        }
    }

    pub fn as_worker(&self) -> Option<&Worker> {
        match self {
            Service::Worker(worker) => Some(worker),
            _ => None,
        }
    }
}
