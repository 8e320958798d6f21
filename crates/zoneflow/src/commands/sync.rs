use crate::output;
use anyhow::Context;
use colored::Colorize;
use std::path::PathBuf;
use zoneflow_cloud::{Reconciler, RuleMode};
use zoneflow_dynatrace::{DynatraceClient, DynatraceConfig};

pub struct SyncArgs {
    pub filename: PathBuf,
    pub dry_run: bool,
    pub rule_mode: RuleMode,
}

pub async fn handle(args: &SyncArgs) -> anyhow::Result<()> {
    let teams = zoneflow_config::load_teams(&args.filename)
        .with_context(|| format!("invalid teams file {}", args.filename.display()))?;
    println!(
        "Loaded {} teams from {}",
        teams.len(),
        args.filename.display().to_string().cyan()
    );

    let config = DynatraceConfig::from_env().context("Dynatrace credentials are not configured")?;
    let client = DynatraceClient::new(config);
    let reconciler = Reconciler::new(&client).with_mode(args.rule_mode);

    let index = reconciler
        .fetch_index()
        .await
        .context("failed to list management zones")?;
    println!(
        "Found {} management zones on {}",
        index.len(),
        client.base_url().cyan()
    );

    let plan = reconciler.plan(&teams, &index);
    output::print_plan(&plan, reconciler.mode());

    if args.dry_run {
        println!();
        println!("{}", "Dry run: no changes were made.".yellow());
        return Ok(());
    }

    if !plan.has_changes {
        println!("{}", "✓ Nothing to do".green());
        return Ok(());
    }

    let result = reconciler
        .apply(&plan)
        .await
        .context("reconciliation aborted")?;
    output::print_apply_result(&result);

    Ok(())
}
