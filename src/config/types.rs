use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub ui: UiConfig,
}

/// The single record of initial selections, applied at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// ISO 3166-1 alpha-2 country code (e.g. "US").
    #[serde(default = "default_country")]
    pub country: String,
    /// ISO 4217 code ("USD") or full label ("USD - US Dollar").
    #[serde(default = "default_currency")]
    pub currency: String,
    /// ISO 639-1 language code (e.g. "en").
    #[serde(default = "default_language")]
    pub language: String,
}

/// Terminal UI tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_country() -> String {
    "US".to_string()
}

fn default_currency() -> String {
    "USD - US Dollar".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            country: default_country(),
            currency: default_currency(),
            language: default_language(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            ui: UiConfig::default(),
        }
    }
}
