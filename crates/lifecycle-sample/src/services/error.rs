//! Error types for the sample services.

use thiserror::Error;

/// Errors returned by the sample services' start and stop routines.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// A routine was handed the configuration or instance of another service.
    #[error("{component} was given a {found} value")]
    WrongKind {
        component: &'static str,
        found: &'static str,
    },

    /// A service read the registry and did not find what it depends on.
    #[error("{component} needs {dependency} to be running")]
    MissingDependency {
        component: &'static str,
        dependency: &'static str,
    },

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Cache full (capacity {0})")]
    CacheFull(usize),

    #[error("Cache closed")]
    CacheClosed,
}

impl ServiceError {
    pub fn wrong_kind(component: &'static str, found: &'static str) -> Self {
        ServiceError::WrongKind { component, found }
    }
}
