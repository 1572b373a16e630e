//! Status command implementation

use colored::Colorize;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display resolved connection settings
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config_path = Config::resolve_path(opts.config_ref())?;
    let file_found = config_path.exists();
    let config = Config::load_or_default(opts.config_ref())?.with_overrides(&opts.overrides());
    let token_ok = config.resolve_token().is_ok();

    if opts.format == OutputFormat::Json {
        let output = json!({
            "config_file": config_path.display().to_string(),
            "config_file_found": file_found,
            "base_url": config.base_url(),
            "token_configured": token_ok,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}\n", "influxorg Configuration Status".bold());

    if file_found {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display(),
            "(not found, using defaults)".dimmed()
        );
    }

    println!("InfluxDB:    {}", config.base_url().cyan());
    println!();

    if token_ok {
        println!("{} API token configured", "✓".green());
    } else {
        println!("{} API token not configured", "✗".red());
        if let Some(path) = config.token_file_path() {
            println!("  → Pass --token, write one to {}, or run 'influxorg init'", path.display());
        }
    }

    println!();
    Ok(())
}
