use serde::{Deserialize, Serialize};

/// Timing of the worker's warm-up (on start) and drain (on stop).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerConfig {
    pub warmup_ms: u64,
    pub drain_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// How long the worker spent warming up.
    pub slept_ms: u64,
    pub drain_ms: u64,
    pub stopped: bool,
}
