//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{InfluxClient, OrgApi};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for connection settings, verifies them with one request, and
/// writes the config file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();
    let existing = Config::load_or_default(opts.config_ref())?.with_overrides(&opts.overrides());

    println!("{}", "Welcome to influxorg!".bold().green());
    println!("Let's set up your InfluxDB connection.\n");

    let host: String = Input::with_theme(&theme)
        .with_prompt("InfluxDB host")
        .default(existing.host.clone())
        .interact_text()?;

    let port: u16 = Input::with_theme(&theme)
        .with_prompt("Port")
        .default(existing.port)
        .interact_text()?;

    let use_ssl = Confirm::with_theme(&theme)
        .with_prompt("Use HTTPS?")
        .default(existing.use_ssl)
        .interact()?;

    let token = match existing.token.clone() {
        Some(token) => token,
        None => Password::with_theme(&theme)
            .with_prompt("API token")
            .interact()?,
    };

    let config = Config {
        host,
        port,
        use_ssl,
        token: Some(token),
        token_file: existing.token_file.clone(),
    };

    println!("\n{}", "Checking connection...".cyan());
    let client = InfluxClient::from_config(&config)?;
    let orgs = client.list_orgs().await?;
    println!(
        "{} Connected to {} ({} organization(s))",
        "✓".green(),
        config.base_url(),
        orgs.len()
    );

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "influxorg status".cyan());
    println!("  {} - List organizations", "influxorg get".cyan());

    Ok(())
}
