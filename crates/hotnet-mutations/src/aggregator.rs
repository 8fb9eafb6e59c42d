//! Whitelist-aware merge of SNV and CNA calls.
//!
//! Both sources are keyed by sample. The merge turns them around into
//! gene → sample → kinds, keeping only genes accepted by the gene whitelist
//! and samples accepted by the sample whitelist. An SNV and a CNA in the
//! same gene and sample are both kept; they are not mutually exclusive.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::info;

use hotnet_common::{Gene, MutationKind, Sample, SampleSheet, Whitelist};

use crate::evidence::MutationEvidence;

/// Sample → genes with a point mutation in that sample.
pub type SnvRecord = BTreeMap<Sample, BTreeSet<Gene>>;

/// Sample → gene → amplification or deletion. One call per gene and sample.
pub type CnaRecord = BTreeMap<Sample, BTreeMap<Gene, MutationKind>>;

/// Output of the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MutationData {
    /// Genes with at least one retained mutation
    pub genes: BTreeSet<Gene>,
    /// Whitelisted samples present in either source, with or without retained genes
    pub samples: BTreeSet<Sample>,
    pub evidence: MutationEvidence,
}

impl MutationData {
    /// Total sample count used as the mutation-frequency denominator.
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Retained samples with their type from the samples file, if any.
    pub fn sample_types(&self, sheet: &SampleSheet) -> Vec<(Sample, Option<String>)> {
        self.samples
            .iter()
            .map(|s| (s.clone(), sheet.sample_type(s).map(str::to_string)))
            .collect()
    }

    fn add(&mut self, gene: &str, sample: &str, kind: MutationKind) {
        if !self.genes.contains(gene) {
            self.genes.insert(gene.to_string());
        }
        self.evidence
            .entry(gene.to_string())
            .or_default()
            .entry(sample.to_string())
            .or_default()
            .push(kind);
    }
}

/// Merge SNV and CNA calls into per-gene evidence.
pub fn aggregate(
    snvs: &SnvRecord,
    cnas: &CnaRecord,
    gene_whitelist: &Whitelist,
    sample_whitelist: &Whitelist,
) -> MutationData {
    let mut data = MutationData::default();

    for (sample, genes) in snvs {
        if !sample_whitelist.accepts(sample) {
            continue;
        }
        data.samples.insert(sample.clone());
        for gene in genes.iter().filter(|g| gene_whitelist.accepts(g)) {
            data.add(gene, sample, MutationKind::Snv);
        }
    }

    for (sample, calls) in cnas {
        if !sample_whitelist.accepts(sample) {
            continue;
        }
        data.samples.insert(sample.clone());
        for (gene, kind) in calls.iter().filter(|(g, _)| gene_whitelist.accepts(g)) {
            data.add(gene, sample, *kind);
        }
    }

    info!(
        "Loaded mutation data for {} genes in {} samples",
        data.genes.len(),
        data.samples.len()
    );
    data
}
