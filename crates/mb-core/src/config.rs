//! Adapter configuration, loadable from JSON handed over by the page.

use crate::error::Result;
use serde::Deserialize;

/// Identifier the Mandelbrot page gives its drawing canvas.
pub const DEFAULT_ELEMENT_ID: &str = "Canvas";

/// Level of the per-sync diagnostic line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncLogLevel {
    Off,
    Trace,
    Debug,
    #[default]
    Info,
}

impl SyncLogLevel {
    /// The `log` level to emit at, or `None` when silenced.
    pub fn to_level(self) -> Option<log::Level> {
        match self {
            SyncLogLevel::Off => None,
            SyncLogLevel::Trace => Some(log::Level::Trace),
            SyncLogLevel::Debug => Some(log::Level::Debug),
            SyncLogLevel::Info => Some(log::Level::Info),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AdapterConfig {
    /// Identifier of the canvas element in the host document.
    pub element_id: String,
    pub log_level: SyncLogLevel,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            log_level: SyncLogLevel::default(),
        }
    }
}

impl AdapterConfig {
    pub fn with_element_id(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            ..Self::default()
        }
    }

    pub fn log_level(mut self, level: SyncLogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Parse e.g. `{"elementId":"Canvas","logLevel":"debug"}`. Missing keys
    /// keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
