use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// Covers runtime knobs only; product data is compiled in and not
/// configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds (default: 250). Must be > 0.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}
