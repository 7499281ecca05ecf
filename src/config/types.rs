//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed settings structure that is
//! deserialized from the YAML configuration file.

use serde::Deserialize;
use std::time::Duration;

fn default_tick_interval_secs() -> u64 {
    30
}

fn default_persist_timeout_ms() -> u64 {
    5_000
}

/// Engine settings.
///
/// Controls the scheduler tick rate and the bound on each per-staff ledger
/// write. Absent keys fall back to their defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Seconds between cadence evaluations.
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,
    /// Milliseconds allowed for a single ledger write before it is counted
    /// as a contained persistence failure.
    #[serde(default = "default_persist_timeout_ms")]
    pub persist_timeout_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: default_tick_interval_secs(),
            persist_timeout_ms: default_persist_timeout_ms(),
        }
    }
}

impl EngineConfig {
    /// The scheduler tick interval as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    /// The per-staff persistence timeout as a [`Duration`].
    pub fn persist_timeout(&self) -> Duration {
        Duration::from_millis(self.persist_timeout_ms)
    }
}
