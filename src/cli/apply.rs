//! Manifest apply command
//!
//! Runs one reconciliation pass: `get` (which loads the lookup tables),
//! plan against the manifest, then create/update/delete per organization.
//! The lookup tables loaded by `get` are the ones every update in the pass
//! resolves names against.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::OrgApi;
use crate::error::Result;
use crate::manifest::{Action, Manifest, PlannedChange, plan};
use crate::models::PlanDisplay;
use crate::output::table;
use crate::provider::{LookupTables, OrgProvider, ReconcileContext};

/// Counts of what a pass did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplySummary {
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
    pub unchanged: usize,
}

/// Execute planned changes in manifest order, stopping at the first failure
pub async fn execute<C: OrgApi + ?Sized>(
    provider: &OrgProvider<'_, C>,
    ctx: &dyn ReconcileContext,
    lookups: &LookupTables,
    changes: &[PlannedChange<'_>],
) -> Result<ApplySummary> {
    let mut summary = ApplySummary::default();

    for change in changes {
        match change.action {
            Action::Create => {
                provider.create(ctx, change.name, change.desired).await?;
                summary.created += 1;
            }
            Action::Update => {
                provider
                    .update(ctx, lookups, change.org, change.desired)
                    .await?;
                summary.updated += 1;
            }
            Action::Delete => {
                provider.delete(ctx, change.org).await?;
                summary.deleted += 1;
            }
            Action::InSync => {
                ctx.info(&format!("'{}' is in sync", change.name));
                summary.unchanged += 1;
            }
        }
    }

    Ok(summary)
}

fn print_plan(changes: &[PlannedChange<'_>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "data": changes,
                "meta": {
                    "dry_run": true,
                    "version": env!("CARGO_PKG_VERSION"),
                    "timestamp": chrono::Utc::now().to_rfc3339()
                }
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            eprintln!("{}", "DRY RUN - no changes will be made".yellow());
            let rows: Vec<PlanDisplay> = changes.iter().map(PlanDisplay::from).collect();
            println!("{}", table::format_table(&rows, "Manifest lists no organizations."));
        }
    }
    Ok(())
}

/// Run the apply command
pub async fn run(opts: &GlobalOptions, manifest_path: &Path, dry_run: bool) -> Result<()> {
    let manifest = Manifest::load(manifest_path)?;
    let ctx = CommandContext::new(opts)?;
    let provider = ctx.provider();
    let reconcile_ctx = ctx.reconcile_context();

    let (current, lookups) = provider.get_with_lookups(&reconcile_ctx).await?;
    let changes = plan(&current, &manifest);

    if dry_run {
        return print_plan(&changes, ctx.format);
    }

    let summary = execute(&provider, &reconcile_ctx, &lookups, &changes).await?;

    match ctx.format {
        OutputFormat::Json => {
            let output = json!({
                "data": changes,
                "meta": {
                    "created": summary.created,
                    "updated": summary.updated,
                    "deleted": summary.deleted,
                    "unchanged": summary.unchanged,
                    "version": env!("CARGO_PKG_VERSION"),
                    "timestamp": chrono::Utc::now().to_rfc3339()
                }
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            eprintln!(
                "{} Applied {} (+{} ~{} -{} ={})",
                "✓".green(),
                manifest_path.display(),
                summary.created,
                summary.updated,
                summary.deleted,
                summary.unchanged
            );
            if summary.deleted > 0 {
                eprintln!(
                    "{} Deleting organizations is not supported; {} left in place",
                    "⚠".yellow(),
                    summary.deleted
                );
            }
        }
    }

    Ok(())
}
