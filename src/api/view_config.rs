use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::document::DEFAULT_TITLE;
use crate::error::{ChartError, ChartResult};
use crate::registry::FIXTURE_MAP_ID;

pub const DEFAULT_TICK_PERIOD_MS: u64 = 1_000;
pub const DEFAULT_REGION_VALUE_BOUND: u32 = 1_000;

/// Public view bootstrap configuration.
///
/// Serializable so hosts can keep view setup next to their own settings;
/// every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u64,
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,
    #[serde(default = "default_map_id")]
    pub map_id: String,
    /// Exclusive upper bound of generated region values.
    #[serde(default = "default_region_value_bound")]
    pub region_value_bound: u32,
}

impl Default for ChartViewConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
            label_prefix: default_label_prefix(),
            map_id: default_map_id(),
            region_value_bound: DEFAULT_REGION_VALUE_BOUND,
        }
    }
}

impl ChartViewConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tick_period_ms(mut self, tick_period_ms: u64) -> Self {
        self.tick_period_ms = tick_period_ms;
        self
    }

    #[must_use]
    pub fn with_label_prefix(mut self, label_prefix: impl Into<String>) -> Self {
        self.label_prefix = label_prefix.into();
        self
    }

    #[must_use]
    pub fn with_map_id(mut self, map_id: impl Into<String>) -> Self {
        self.map_id = map_id.into();
        self
    }

    #[must_use]
    pub fn with_region_value_bound(mut self, region_value_bound: u32) -> Self {
        self.region_value_bound = region_value_bound;
        self
    }

    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.tick_period_ms == 0 {
            return Err(ChartError::InvalidConfig(
                "tick period must be greater than zero".to_owned(),
            ));
        }
        if self.map_id.trim().is_empty() {
            return Err(ChartError::InvalidConfig(
                "map id must not be empty".to_owned(),
            ));
        }
        if self.region_value_bound == 0 {
            return Err(ChartError::InvalidConfig(
                "region value bound must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse view config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_tick_period_ms() -> u64 {
    DEFAULT_TICK_PERIOD_MS
}

fn default_label_prefix() -> String {
    DEFAULT_TITLE.to_owned()
}

fn default_map_id() -> String {
    FIXTURE_MAP_ID.to_owned()
}

fn default_region_value_bound() -> u32 {
    DEFAULT_REGION_VALUE_BOUND
}
