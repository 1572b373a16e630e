//! Command execution context
//!
//! Loads configuration, merges command-line overrides and builds the
//! authenticated client, so each command starts from the same place.

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::InfluxClient;
use crate::config::Config;
use crate::error::Result;
use crate::provider::{LogContext, OrgProvider};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Config file merged with command-line overrides
    pub config: Config,
    /// Authenticated API client
    pub client: InfluxClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is not an error; defaults and overrides are
    /// used instead.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be parsed or no token can
    /// be found.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?.with_overrides(&opts.overrides());
        let client = InfluxClient::from_config(&config)?;
        log::debug!("Using InfluxDB at {}", client.base_url());

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }

    /// Reconciler bound to this context's client
    pub fn provider(&self) -> OrgProvider<'_, InfluxClient> {
        OrgProvider::new(&self.client, self.config.host.clone())
    }

    /// Diagnostic context for lifecycle operations
    pub fn reconcile_context(&self) -> LogContext {
        LogContext::default()
    }
}
