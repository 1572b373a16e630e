//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - one block per organization
    Pretty,
    /// Table format - one row per organization (default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}
