//! Scan configuration shared by the orchestrator and the CLI.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Recommended lookback window, in days.
pub const MIN_DAYS_BACK: u32 = 30;
pub const MAX_DAYS_BACK: u32 = 180;

pub const DEFAULT_DAYS_BACK: u32 = 90;
pub const DEFAULT_MAX_RESULTS: u32 = 60;
pub const DEFAULT_PACING_MS: u64 = 50;

/// Knobs for a single scan run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Lookback window handed to the query builder.
    pub days_back: u32,
    /// Hard cap on messages processed per run.
    pub max_results: u32,
    /// Delay after each per-message fetch.
    #[serde(with = "millis", rename = "pacing_ms")]
    pub pacing: Duration,
    /// Number of fetches in flight at once. `1` is strictly sequential.
    pub concurrency: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            days_back: DEFAULT_DAYS_BACK,
            max_results: DEFAULT_MAX_RESULTS,
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
            concurrency: 1,
        }
    }
}

impl ScanConfig {
    /// The cap as a `usize`, for slicing id lists.
    pub fn cap(&self) -> usize {
        self.max_results as usize
    }
}

/// Clamp a lookback window into `MIN_DAYS_BACK..=MAX_DAYS_BACK`.
pub fn clamp_days_back(days: u32) -> u32 {
    days.clamp(MIN_DAYS_BACK, MAX_DAYS_BACK)
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
