//! MutSig heat: `-log10(qval)` for genes with `qval < threshold`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use hotnet_common::{Gene, MutsigConfig, Result};

use crate::numeric::neg_log10;
use crate::summary::{HeatMapping, HeatRun, HeatSummary};

/// MutSig significance of one gene. Only `qval` feeds the heat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutsigScores {
    pub pval: f64,
    pub qval: f64,
}

pub fn mutsig_heat(gene2mutsig: &BTreeMap<Gene, MutsigScores>, config: &MutsigConfig) -> Result<HeatRun> {
    config.validate()?;
    info!("Creating MutSig heat map...");

    let heat = gene2mutsig
        .iter()
        .filter(|(_, scores)| scores.qval < config.threshold)
        .map(|(gene, scores)| neg_log10(gene, scores.qval).map(|h| (gene.clone(), h)))
        .collect::<Result<HeatMapping>>()?;

    info!("Including {} genes at threshold {}", heat.len(), config.threshold);
    let summary = HeatSummary::new(gene2mutsig.len(), &heat);
    Ok(HeatRun { heat, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotnet_common::HeatError;

    fn input(rows: &[(&str, f64)]) -> BTreeMap<Gene, MutsigScores> {
        rows.iter()
            .map(|(g, q)| (g.to_string(), MutsigScores { pval: *q / 10.0, qval: *q }))
            .collect()
    }

    #[test]
    fn test_mutsig_heat() {
        let run = mutsig_heat(&input(&[("TP53", 1e-4), ("KRAS", 0.5)]), &MutsigConfig::default()).unwrap();
        assert!((run.heat["TP53"] - 4.0).abs() < 1e-9);
        assert!((run.heat["KRAS"] - 0.5f64.log10().abs()).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_is_strict() {
        let cfg = MutsigConfig { threshold: 0.1 };
        let run = mutsig_heat(&input(&[("TP53", 0.1), ("KRAS", 0.09)]), &cfg).unwrap();
        assert!(!run.heat.contains_key("TP53"));
        assert!(run.heat.contains_key("KRAS"));
        assert_eq!(run.summary.genes_included, 1);
        assert_eq!(run.summary.genes_excluded, 1);
    }

    #[test]
    fn test_default_threshold_excludes_q_of_one() {
        let run = mutsig_heat(&input(&[("TTN", 1.0)]), &MutsigConfig::default()).unwrap();
        assert!(run.heat.is_empty());
    }

    #[test]
    fn test_zero_q_value_is_error() {
        let err = mutsig_heat(&input(&[("TP53", 0.0)]), &MutsigConfig::default());
        assert!(matches!(err, Err(HeatError::InvalidScore { ref gene, .. }) if gene == "TP53"));
    }

    #[test]
    fn test_invalid_threshold() {
        let err = mutsig_heat(&input(&[]), &MutsigConfig { threshold: -1.0 });
        assert!(matches!(err, Err(HeatError::InvalidThreshold { .. })));
    }

    #[test]
    fn test_threshold_above_one_never_yields_negative_heat() {
        let err = mutsig_heat(&input(&[("TP53", 1.5)]), &MutsigConfig { threshold: 2.0 });
        assert!(matches!(err, Err(HeatError::InvalidThreshold { .. })));

        let run = mutsig_heat(&input(&[("TP53", 1.5), ("KRAS", 0.01)]), &MutsigConfig::default()).unwrap();
        assert!(!run.heat.contains_key("TP53"));
        assert!(run.heat.values().all(|h| *h >= 0.0));
    }
}
