//! Worker service: a background worker that needs time to warm up and to
//! drain.
//!
//! [`WorkerService`] implements the async [`Component`] trait and is bound as a
//! suspending component by [`spec`]. [`blocking_spec`] binds the same behavior
//! with thread sleeps instead, which is handy for comparing the two styles.

use super::ServiceError;
use crate::model::{Service, ServiceConfig, Worker, WorkerConfig};
use async_trait::async_trait;
use lifecycle_framework::{BoxError, Component, ComponentSpec, Registry};
use std::time::Duration;
use tracing::info;

pub const NAME: &str = "worker";

pub struct WorkerService;

#[async_trait]
impl Component<ServiceConfig, Service> for WorkerService {
    async fn start(
        &self,
        _registry: &Registry<Service>,
        config: &ServiceConfig,
    ) -> Result<Service, BoxError> {
        let config = worker_config(config)?;
        tokio::time::sleep(Duration::from_millis(config.warmup_ms)).await;
        info!(warmup_ms = config.warmup_ms, "Worker warmed up");
        Ok(Service::Worker(warmed_up(config)))
    }

    async fn stop(&self, service: &mut Service) -> Result<(), BoxError> {
        let worker = worker_mut(service)?;
        tokio::time::sleep(Duration::from_millis(worker.drain_ms)).await;
        worker.stopped = true;
        info!(drain_ms = worker.drain_ms, "Worker drained");
        Ok(())
    }
}

/// Worker bound with suspending routines.
pub fn spec(config: WorkerConfig) -> ComponentSpec<ServiceConfig, Service> {
    ComponentSpec::builder(ServiceConfig::Worker(config))
        .component(WorkerService)
        .build()
}

/// Worker bound with blocking routines that sleep the calling thread.
pub fn blocking_spec(config: WorkerConfig) -> ComponentSpec<ServiceConfig, Service> {
    ComponentSpec::builder(ServiceConfig::Worker(config))
        .start_blocking(|_registry, config| {
            let config = worker_config(config)?;
            std::thread::sleep(Duration::from_millis(config.warmup_ms));
            Ok(Service::Worker(warmed_up(config)))
        })
        .stop_blocking(|service| {
            let worker = worker_mut(service)?;
            std::thread::sleep(Duration::from_millis(worker.drain_ms));
            worker.stopped = true;
            Ok(())
        })
        .build()
}

fn worker_config(config: &ServiceConfig) -> Result<&WorkerConfig, ServiceError> {
    match config {
        ServiceConfig::Worker(config) => Ok(config),
        other => Err(ServiceError::wrong_kind(NAME, other.kind())),
    }
}

fn worker_mut(service: &mut Service) -> Result<&mut Worker, ServiceError> {
    match service {
        Service::Worker(worker) => Ok(worker),
        other => Err(ServiceError::wrong_kind(NAME, other.kind())),
    }
}

fn warmed_up(config: &WorkerConfig) -> Worker {
    Worker {
        slept_ms: config.warmup_ms,
        drain_ms: config.drain_ms,
        stopped: false,
    }
}
