//! HotNet heat generation
//! Entry point for the `hotnet` binary.

mod cli;

use std::collections::BTreeMap;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hotnet_ingestion::pipeline::{filter_heat_file, run_heat_job, write_output, HeatJobResult};

use crate::cli::{Cli, Job};

fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "hotnet=info,info",
        (false, 1) => "hotnet=debug,info",
        (false, _) => "hotnet=trace,info",
    }
}

fn log_summary(result: &HeatJobResult) {
    let summary = &result.summary;
    info!(
        "{} genes scored, {} with heat, {} below threshold, {} not expressed",
        summary.genes_scored, summary.genes_included, summary.genes_excluded, summary.genes_filtered
    );
    if let Some(attribution) = &summary.attribution {
        debug!("Score attribution: {:?}", attribution);
    }
    if !result.samples.is_empty() {
        let mut per_type: BTreeMap<&str, usize> = BTreeMap::new();
        for (_, sample_type) in &result.samples {
            *per_type.entry(sample_type.as_deref().unwrap_or("untyped")).or_default() += 1;
        }
        info!("{} samples: {:?}", result.samples.len(), per_type);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so heat written to stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose, cli.quiet))),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.into_job()? {
        Job::Heat(config) => {
            let name = config.transform.name();
            let result = run_heat_job(&config).with_context(|| format!("{name} heat run failed"))?;
            log_summary(&result);
            write_output(&result.heat_file, &config.output).context("Failed to write heat")?;
        }
        Job::Filter { heat_file, expression_file, output } => {
            let filtered = filter_heat_file(&heat_file, &expression_file)
                .with_context(|| format!("Failed to filter {:?}", heat_file))?;
            write_output(&filtered, &output).context("Failed to write heat")?;
        }
    }

    Ok(())
}
