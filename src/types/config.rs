//! Configuration structures.
//!
//! Configuration is deserialized from JSON documents supplied by the host
//! application; `Default` gives working values everywhere.

use serde::{Deserialize, Serialize};

use crate::events::{CHILDREN_TOPIC, CONTENT_TOPIC};
use crate::types::Result;

/// Global configuration for the notification layer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Topic names used when wiring document observers to the bus.
    #[serde(default)]
    pub topics: TopicConfig,
}

impl Config {
    /// Parse a JSON configuration document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Topic names for observer registrations.
///
/// These are registration-time overrides passed to the translators by wiring
/// code; a translator invoked without an explicit topic still falls back to
/// the `children`/`content` literals on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicConfig {
    /// Topic for structural (child list) changes.
    pub children: String,

    /// Topic for content changes.
    pub content: String,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            children: CHILDREN_TOPIC.to_string(),
            content: CONTENT_TOPIC.to_string(),
        }
    }
}
