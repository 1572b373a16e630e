//! JSON output formatting

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,

    /// Server the data came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub influxdb_host: Option<String>,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                influxdb_host: None,
            },
        }
    }

    /// Record which server the data came from
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.meta.influxdb_host = Some(host.into());
        self
    }
}

/// Format data as pretty-printed JSON tagged with its source host
pub fn format_json_from<T: Serialize + ?Sized>(
    data: &T,
    host: &str,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data).with_host(host))
}
