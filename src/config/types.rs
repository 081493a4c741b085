use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CatalogConfig {
    /// Optional YAML file replacing the built-in content set.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingConfig {
    #[serde(default = "default_confirm_delay_ms")]
    pub confirm_delay_ms: u64,
    #[serde(default = "default_draft_ttl")]
    pub draft_ttl_secs: u64,
    #[serde(default = "default_max_drafts")]
    pub max_drafts: usize,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            confirm_delay_ms: default_confirm_delay_ms(),
            draft_ttl_secs: default_draft_ttl(),
            max_drafts: default_max_drafts(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuggestConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_default_results")]
    pub default_results: usize,
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            default_results: default_default_results(),
            latency_ms: default_latency_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurrencyConfig {
    /// Code of the currency prices render in until a client switches it.
    #[serde(default = "default_currency")]
    pub default: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            default: default_currency(),
        }
    }
}

fn default_confirm_delay_ms() -> u64 {
    2000
}

fn default_draft_ttl() -> u64 {
    1800 // 30 minutes
}

fn default_max_drafts() -> usize {
    500
}

fn default_max_results() -> usize {
    8
}

fn default_default_results() -> usize {
    6
}

fn default_latency_ms() -> u64 {
    300
}

fn default_currency() -> String {
    "ZMW".into()
}
