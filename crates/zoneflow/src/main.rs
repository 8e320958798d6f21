mod commands;
mod output;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use zoneflow_cloud::RuleMode;

#[derive(Parser)]
#[command(name = "zoneflow", version)]
#[command(
    about = "Dynatrace management zones tool: keeps one zone per team in sync with its host-group prefixes",
    long_about = None
)]
struct Cli {
    /// Input YAML file with the team definitions
    #[arg(short = 'f', long = "filename", env = "ZONEFLOW_TEAMS_FILE")]
    filename: PathBuf,

    /// Print the planned API calls without changing any zone
    #[arg(long)]
    dry_run: bool,

    /// How host-group prefixes are written to a zone
    #[arg(long, value_enum, default_value_t = RuleModeArg::Overwrite)]
    rule_mode: RuleModeArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleModeArg {
    /// One call per prefix; the last prefix's rule is the one that remains
    Overwrite,
    /// One call carrying a rule for every prefix
    Accumulate,
}

impl From<RuleModeArg> for RuleMode {
    fn from(arg: RuleModeArg) -> Self {
        match arg {
            RuleModeArg::Overwrite => RuleMode::Overwrite,
            RuleModeArg::Accumulate => RuleMode::Accumulate,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, progress output to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = commands::sync::SyncArgs {
        filename: cli.filename,
        dry_run: cli.dry_run,
        rule_mode: cli.rule_mode.into(),
    };

    if let Err(e) = commands::sync::handle(&args).await {
        eprintln!();
        eprintln!("{}", "✗ Management zone sync failed".red().bold());
        eprintln!("  {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
