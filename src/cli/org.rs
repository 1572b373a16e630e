//! Organization lifecycle commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::models::OrgDisplay;
use crate::output::{json, table};
use crate::provider::{DesiredOrg, OrgResource};

/// Print current-state records in the requested format
fn print_resources(resources: &[OrgResource], format: OutputFormat, host: &str) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<OrgDisplay> = resources.iter().map(OrgDisplay::from).collect();
            println!("{}", table::format_table(&rows, "No organizations found."));
        }
        OutputFormat::Pretty => {
            for resource in resources {
                match resource {
                    OrgResource::Present(org) => {
                        println!("{} {}", "●".green(), org.name.bold());
                        if let Some(ref description) = org.description {
                            println!("  Description: {}", description);
                        }
                        if org.members.is_empty() {
                            println!("  Members:     {}", "none".dimmed());
                        } else {
                            println!("  Members:     {}", org.members.join(", "));
                        }
                    }
                    OrgResource::Unprovisioned(marker) => {
                        println!(
                            "{} {} has no organizations (not provisioned)",
                            "○".dimmed(),
                            marker.influxdb_host
                        );
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", json::format_json_from(resources, host)?);
        }
    }
    Ok(())
}

/// Run the get command
pub async fn get(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let resources = ctx.provider().get(&ctx.reconcile_context()).await?;
    print_resources(&resources, ctx.format, &ctx.config.host)
}

/// Run the create command
pub async fn create(opts: &GlobalOptions, name: &str, description: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let desired = DesiredOrg {
        description,
        ..DesiredOrg::default()
    };

    ctx.provider()
        .create(&ctx.reconcile_context(), name, &desired)
        .await?;

    eprintln!("{} Created organization \"{}\"", "✓".green(), name);
    Ok(())
}

/// Run the update command
pub async fn update(
    opts: &GlobalOptions,
    name: &str,
    description: Option<String>,
    members: Vec<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let provider = ctx.provider();
    let desired = DesiredOrg {
        description,
        members: Some(members),
        ..DesiredOrg::default()
    };

    // Lookups are loaded right before the mutation, never reused from an earlier run
    let lookups = provider.lookups().await?;
    provider
        .update(&ctx.reconcile_context(), &lookups, name, &desired)
        .await?;

    eprintln!("{} Updated organization \"{}\"", "✓".green(), name);
    Ok(())
}

/// Run the delete command
pub async fn delete(opts: &GlobalOptions, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.provider()
        .delete(&ctx.reconcile_context(), name)
        .await?;

    eprintln!(
        "{} Deleting organizations is not supported; \"{}\" was left in place",
        "⚠".yellow(),
        name
    );
    Ok(())
}
