mod cli;

use anyhow::{bail, Context, Result};
use archivist::core::telemetry::init_logging;
use archivist::Archiver;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = cli::Cli::parse();
    init_logging(cli_args.log_directive());

    let config = cli_args.to_config();
    let source = config.source.clone();
    let report = Archiver::new(config)
        .run()
        .await
        .with_context(|| format!("archiving {} failed", source.display()))?;

    if cli_args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    for failure in &report.failures {
        eprintln!(
            "failed: {} -> {}: {}",
            failure.source.display(),
            failure.destination.display(),
            failure.reason
        );
    }
    if !report.is_complete() {
        bail!(
            "{} of {} files could not be copied into {}",
            report.failures.len(),
            report.failures.len() + report.copied.len(),
            report.root.display()
        );
    }
    Ok(())
}
