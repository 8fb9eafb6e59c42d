//! Expression filter: keep heat only for genes with adequate expression data.

use std::collections::BTreeSet;

use tracing::info;

use hotnet_common::Gene;

use crate::summary::{HeatMapping, HeatRun};

/// Restrict `heat` to `genes_to_preserve`. Values are unchanged.
pub fn expression_filter(heat: &HeatMapping, genes_to_preserve: &BTreeSet<Gene>) -> HeatMapping {
    heat.iter()
        .filter(|(gene, _)| genes_to_preserve.contains(*gene))
        .map(|(gene, h)| (gene.clone(), *h))
        .collect()
}

impl HeatRun {
    /// Apply `expression_filter` and record how many genes it dropped.
    pub fn filter_expressed(mut self, genes_to_preserve: &BTreeSet<Gene>) -> HeatRun {
        let before = self.heat.len();
        self.heat = expression_filter(&self.heat, genes_to_preserve);
        self.summary.genes_filtered = before - self.heat.len();
        self.summary.genes_included = self.heat.len();
        info!(
            "Expression filter kept {} of {} genes",
            self.heat.len(),
            before
        );
        self
    }
}
