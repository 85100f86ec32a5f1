use serde::{Deserialize, Serialize};

/// Input for the settings service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub app_name: String,
    pub cache_capacity: usize,
}

/// Loaded application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub app_name: String,
    pub cache_capacity: usize,
    /// Cleared when the settings service stops.
    pub loaded: bool,
}
