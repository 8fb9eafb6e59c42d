//! End-to-end heat generation.
//!
//! Orchestrates a single run:
//!   1. Validate the transform parameters
//!   2. Load the inputs of the selected transform
//!   3. Aggregate mutations (mutation transform only) and compute heat
//!   4. Restrict to expressed genes if an expression file is configured
//!   5. Package heat with its parameters for output
//!
//! Any load error aborts the run; nothing is written on failure.

use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use hotnet_common::{
    HeatError, OutputConfig, OutputFormat, Result, RunConfig, Sample, SampleSheet, TransformConfig,
    Whitelist,
};
use hotnet_heat::{
    mutation_frequency_heat, music_heat, mutsig_heat, oncodrive_heat, HeatFile, HeatRun,
    HeatSummary,
};
use hotnet_mutations::aggregate;

use crate::sources::{load_cnas, load_genes, load_music, load_mutsig, load_oncodrive, load_samples, load_snvs};

// ── Result summary ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct HeatJobResult {
    pub heat_file: HeatFile,
    pub summary: HeatSummary,
    /// Retained samples and their types (mutation runs only)
    pub samples: Vec<(Sample, Option<String>)>,
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Run one heat job as described by `config`.
pub fn run_heat_job(config: &RunConfig) -> Result<HeatJobResult> {
    config.validate()?;
    info!("Running {} heat job", config.transform.name());

    let mut samples = Vec::new();
    let mut run: HeatRun = match &config.transform {
        TransformConfig::Mutation { snv_file, cna_file, gene_file, sample_file, params } => {
            info!("Loading mutation data...");
            let gene_whitelist = match gene_file {
                Some(path) => Whitelist::from_set(load_genes(path)?),
                None => Whitelist::All,
            };
            let sheet = match sample_file {
                Some(path) => load_samples(path)?,
                None => SampleSheet::default(),
            };
            let snvs = load_snvs(snv_file)?;
            let cnas = load_cnas(cna_file)?;

            let data = aggregate(&snvs, &cnas, &gene_whitelist, &sheet.whitelist());
            samples = data.sample_types(&sheet);
            mutation_frequency_heat(&data.evidence, data.num_samples(), params)?
        }
        TransformConfig::Oncodrive { fm_file, cis_amp_file, cis_del_file, params } => {
            let scores = load_oncodrive(fm_file, cis_amp_file, cis_del_file)?;
            oncodrive_heat(&scores, params)?
        }
        TransformConfig::Mutsig { scores_file, params } => {
            mutsig_heat(&load_mutsig(scores_file)?, params)?
        }
        TransformConfig::Music { scores_file, params } => {
            music_heat(&load_music(scores_file)?, params)?
        }
    };

    if let Some(expression_file) = &config.expression_file {
        let expressed = load_genes(expression_file)?;
        run = run.filter_expressed(&expressed);
    }

    info!(
        "Heat for {} genes ({} excluded by threshold, {} by expression filter)",
        run.summary.genes_included, run.summary.genes_excluded, run.summary.genes_filtered
    );

    Ok(HeatJobResult {
        heat_file: HeatFile {
            heat: run.heat,
            parameters: config.transform.clone(),
            expression_file: config.expression_file.clone(),
        },
        summary: run.summary,
        samples,
    })
}

/// Restrict an existing heat file to the genes listed in `expression_file`.
pub fn filter_heat_file(heat_path: impl AsRef<Path>, expression_file: impl AsRef<Path>) -> Result<HeatFile> {
    let mut heat_file = HeatFile::load_json(heat_path)?;
    let expressed = load_genes(expression_file.as_ref())?;
    let before = heat_file.heat.len();
    heat_file.heat = hotnet_heat::expression_filter(&heat_file.heat, &expressed);
    heat_file.expression_file = Some(expression_file.as_ref().to_path_buf());
    info!("Expression filter kept {} of {} genes", heat_file.heat.len(), before);
    Ok(heat_file)
}

/// Write a heat file in the configured format, to a file or stdout.
pub fn write_output(heat_file: &HeatFile, output: &OutputConfig) -> Result<()> {
    match &output.path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| HeatError::io(path, e))?;
            let mut writer = BufWriter::new(file);
            write_heat(heat_file, output.format, &mut writer)?;
            writer.flush().map_err(|e| HeatError::io(path, e))?;
            info!("Wrote {} heat values to {:?}", heat_file.heat.len(), path);
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_heat(heat_file, output.format, &mut writer)?;
            if output.format == OutputFormat::Json {
                writeln!(writer).map_err(|e| HeatError::io("<stdout>", e))?;
            }
            Ok(())
        }
    }
}

fn write_heat<W: Write>(heat_file: &HeatFile, format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Json => heat_file.write_json(writer),
        OutputFormat::Tsv => heat_file.write_tsv(writer),
    }
}
