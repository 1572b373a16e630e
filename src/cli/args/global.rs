//! Global CLI options shared across all commands
//!
//! Collects the global flags into a single value so handlers do not take
//! half a dozen parameters each.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::ConfigOverrides;

/// Global CLI options passed to all command handlers.
///
/// Precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; the config file is merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Host override
    pub host: Option<String>,

    /// Port override
    pub port: Option<u16>,

    /// Disable TLS
    pub no_ssl: bool,

    /// Token override
    pub token: Option<String>,

    /// Token file override
    pub token_file: Option<PathBuf>,

    /// Custom config file path (defaults to ~/.influxorg/config.yaml)
    pub config: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            host: cli.host.clone(),
            port: cli.port,
            no_ssl: cli.no_ssl,
            token: cli.token.clone(),
            token_file: cli.token_file.clone(),
            config: cli.config.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Connection overrides to merge over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            use_ssl: self.no_ssl.then_some(false),
            token: self.token.clone(),
            token_file: self.token_file.clone(),
        }
    }
}
