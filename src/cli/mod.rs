//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod apply;
pub mod args;
pub mod context;
pub mod init;
pub mod org;
pub mod status;

pub use args::OutputFormat;
pub use context::CommandContext;

/// influxorg - reconcile InfluxDB v2 organizations against a desired state
#[derive(Parser, Debug)]
#[command(name = "influxorg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "INFLUXORG_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// InfluxDB host name, or a full URL such as http://localhost:8086
    #[arg(long, global = true, env = "INFLUXORG_HOST", hide_env = true)]
    pub host: Option<String>,

    /// InfluxDB port (default 8086)
    #[arg(long, global = true, env = "INFLUXORG_PORT", hide_env = true)]
    pub port: Option<u16>,

    /// Connect without TLS
    #[arg(long, global = true, env = "INFLUXORG_NO_SSL", hide_env = true)]
    pub no_ssl: bool,

    /// API token (overrides the config file and token file)
    #[arg(long, global = true, env = "INFLUXORG_TOKEN", hide_env = true)]
    pub token: Option<String>,

    /// File holding the API token (default ~/.influxdb_token)
    #[arg(long, global = true, env = "INFLUXORG_TOKEN_FILE", hide_env = true)]
    pub token_file: Option<PathBuf>,

    /// Override config file location
    #[arg(long, global = true, env = "INFLUXORG_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "INFLUXORG_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a configuration file
    Init,

    /// Show resolved connection settings
    Status,

    /// Display version information
    Version,

    /// List the current state of every organization
    Get,

    /// Create an organization (members are set by a later update)
    Create {
        /// Organization name
        name: String,

        /// Organization description
        #[arg(long)]
        description: Option<String>,
    },

    /// Converge an organization's members and description
    ///
    /// The listed members replace the current ones. Without any --member,
    /// every member except admin is removed.
    Update {
        /// Organization name
        name: String,

        /// Organization description (sent even when unchanged)
        #[arg(long)]
        description: Option<String>,

        /// Desired member user name (repeatable). Omitting it removes every
        /// member except `admin`
        #[arg(long = "member", short = 'm')]
        members: Vec<String>,
    },

    /// Delete an organization (not supported; only reports)
    Delete {
        /// Organization name
        name: String,
    },

    /// Reconcile every organization listed in a manifest file
    Apply {
        /// Path to the YAML manifest
        manifest: PathBuf,

        /// Show planned changes without making them
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   influxorg completion bash > /etc/bash_completion.d/influxorg
  zsh:    influxorg completion zsh > \"${fpath[1]}/_influxorg\"
  fish:   influxorg completion fish > ~/.config/fish/completions/influxorg.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_update_collects_repeated_members() {
        let cli = Cli::try_parse_from([
            "influxorg",
            "update",
            "acme",
            "--member",
            "admin",
            "-m",
            "bob",
            "--description",
            "Acme",
        ])
        .unwrap();

        match cli.command {
            Commands::Update {
                name,
                description,
                members,
            } => {
                assert_eq!(name, "acme");
                assert_eq!(description.as_deref(), Some("Acme"));
                assert_eq!(members, vec!["admin", "bob"]);
            }
            other => panic!("Expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "influxorg",
            "get",
            "--host",
            "db.local",
            "--no-ssl",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.host.as_deref(), Some("db.local"));
        assert!(cli.no_ssl);
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
