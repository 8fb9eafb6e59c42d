//! MuSiC heat from the median of the three FDR q-values.
//!
//! A gene is kept when the median is below the threshold. A median of
//! exactly 0 maps to `max_heat`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use hotnet_common::{Gene, HeatError, MusicConfig, Result};

use crate::numeric::{median3, neg_log10};
use crate::summary::{HeatMapping, HeatRun, HeatSummary};

/// MuSiC FDR q-values for the CT, LRT and FCPT tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MusicScores {
    #[serde(rename = "FDR_CT")]
    pub fdr_ct: f64,
    #[serde(rename = "FDR_LRT")]
    pub fdr_lrt: f64,
    #[serde(rename = "FDR_FCPT")]
    pub fdr_fcpt: f64,
}

impl MusicScores {
    /// Median of the three q-values; NaN if any of them is NaN.
    pub fn median(&self) -> f64 {
        let values = [self.fdr_ct, self.fdr_lrt, self.fdr_fcpt];
        if values.iter().any(|v| v.is_nan()) {
            return f64::NAN;
        }
        median3(self.fdr_ct, self.fdr_lrt, self.fdr_fcpt)
    }
}

pub fn music_heat(gene2music: &BTreeMap<Gene, MusicScores>, config: &MusicConfig) -> Result<HeatRun> {
    config.validate()?;
    info!("Creating MuSiC heat map...");
    info!("Mapping q-values of 0 to {}", config.max_heat);

    let mut heat = HeatMapping::new();
    for (gene, scores) in gene2music {
        let median = scores.median();
        if median.is_nan() || median >= config.threshold {
            continue;
        }
        let value = if median == 0.0 {
            config.max_heat
        } else if median < 0.0 {
            return Err(HeatError::InvalidScore { gene: gene.clone(), value: median });
        } else {
            neg_log10(gene, median)?
        };
        heat.insert(gene.clone(), value);
    }

    info!("Including {} genes at threshold {}", heat.len(), config.threshold);
    let summary = HeatSummary::new(gene2music.len(), &heat);
    Ok(HeatRun { heat, summary })
}
