//! Transform results and their summary counts.

use std::collections::BTreeMap;

use serde::Serialize;

use hotnet_common::Gene;

use crate::oncodrive::Attribution;

/// Gene → heat. Genes without support are absent rather than zero.
pub type HeatMapping = BTreeMap<Gene, f64>;

/// Counts reported after a run. Exclusions are normal control flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeatSummary {
    /// Genes given to the transform
    pub genes_scored: usize,
    /// Genes with heat
    pub genes_included: usize,
    /// Genes dropped by the transform's threshold
    pub genes_excluded: usize,
    /// Genes dropped afterwards by the expression filter
    pub genes_filtered: usize,
    /// Which oncodrive score produced each gene's heat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<Attribution>,
}

impl HeatSummary {
    pub(crate) fn new(genes_scored: usize, heat: &HeatMapping) -> Self {
        Self {
            genes_scored,
            genes_included: heat.len(),
            genes_excluded: genes_scored - heat.len(),
            ..Default::default()
        }
    }
}

/// Heat produced by one transform plus its summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeatRun {
    pub heat: HeatMapping,
    pub summary: HeatSummary,
}
