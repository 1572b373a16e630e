//! Configuration management for influxorg

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default InfluxDB HTTP port
pub const DEFAULT_PORT: u16 = 8086;

/// Name of the token file looked up in the home directory
const DEFAULT_TOKEN_FILE: &str = ".influxdb_token";

/// Connection settings for an InfluxDB v2 server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server hostname
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Connect over HTTPS
    #[serde(default = "default_use_ssl")]
    pub use_ssl: bool,

    /// API token (takes precedence over `token_file`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// File holding the API token (defaults to ~/.influxdb_token)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_file: Option<PathBuf>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_use_ssl() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            use_ssl: default_use_ssl(),
            token: None,
            token_file: None,
        }
    }
}

/// Values supplied on the command line or through the environment.
///
/// Anything set here wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub use_ssl: Option<bool>,
    pub token: Option<String>,
    pub token_file: Option<PathBuf>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".influxorg").join("config.yaml"))
    }

    /// Resolve an optional custom path to the config file location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from a custom path or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a custom path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // The file may hold a token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Apply command-line and environment overrides
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(ref host) = overrides.host {
            self.host = host.clone();
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(use_ssl) = overrides.use_ssl {
            self.use_ssl = use_ssl;
        }
        if let Some(ref token) = overrides.token {
            self.token = Some(token.clone());
        }
        if let Some(ref token_file) = overrides.token_file {
            self.token_file = Some(token_file.clone());
        }
        self
    }

    /// Base URL of the InfluxDB HTTP API, without a trailing slash.
    ///
    /// A host that already carries a scheme (`http://...`) is used as is.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            return host.to_string();
        }
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{}://{}:{}", scheme, host, self.port)
    }

    /// Path of the token file that would be consulted
    pub fn token_file_path(&self) -> Option<PathBuf> {
        self.token_file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(DEFAULT_TOKEN_FILE)))
    }

    /// Resolve the API token from the explicit value or the token file
    pub fn resolve_token(&self) -> Result<String> {
        if let Some(token) = self.token.as_deref().filter(|t| !t.trim().is_empty()) {
            return Ok(token.trim().to_string());
        }

        if let Some(path) = self.token_file_path() {
            if path.exists() {
                let contents = std::fs::read_to_string(&path)?;
                let token = contents.trim();
                if !token.is_empty() {
                    log::debug!("Using token from {}", path.display());
                    return Ok(token.to_string());
                }
            }
        }

        Err(ConfigError::MissingToken.into())
    }
}
