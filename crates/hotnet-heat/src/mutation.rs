//! Mutation-frequency heat.
//!
//! heat(g) = (samples with any SNV or CNA in g) / N
//!
//! A gene is kept when it has strictly more than `min_freq` SNV samples, or
//! any CNA sample at all. CNAs bypass `min_freq`.

use tracing::info;

use hotnet_common::{HeatError, MutationHeatConfig, Result};
use hotnet_mutations::{num_cnas, num_snvs, MutationEvidence};

use crate::summary::{HeatMapping, HeatRun, HeatSummary};

/// Mutation-frequency heat over `num_samples` samples.
///
/// `num_samples` is the number of whitelisted samples seen in either
/// source (`MutationData::num_samples`). Zero samples is a configuration
/// error because the frequency is undefined.
pub fn mutation_frequency_heat(
    evidence: &MutationEvidence,
    num_samples: usize,
    config: &MutationHeatConfig,
) -> Result<HeatRun> {
    if num_samples == 0 {
        return Err(HeatError::DegenerateInput(
            "mutation frequency needs at least one sample".to_string(),
        ));
    }
    info!(
        "Including {} genes in {} samples at min frequency {}",
        evidence.len(),
        num_samples,
        config.min_freq
    );

    let n = num_samples as f64;
    let heat: HeatMapping = evidence
        .iter()
        .filter(|(_, ev)| num_snvs(ev) > config.min_freq || num_cnas(ev) > 0)
        .map(|(gene, ev)| (gene.clone(), ev.len() as f64 / n))
        .collect();

    let summary = HeatSummary::new(evidence.len(), &heat);
    info!(
        "Mutation heat: {} genes included, {} below min frequency",
        summary.genes_included, summary.genes_excluded
    );
    Ok(HeatRun { heat, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotnet_common::MutationKind::{self, *};
    use hotnet_mutations::GeneEvidence;

    fn gene(rows: &[(&str, &[MutationKind])]) -> GeneEvidence {
        rows.iter()
            .map(|(s, kinds)| (s.to_string(), kinds.to_vec()))
            .collect()
    }

    fn evidence() -> MutationEvidence {
        let mut ev = MutationEvidence::new();
        ev.insert("TP53".into(), gene(&[("S1", &[Snv]), ("S2", &[Snv]), ("S3", &[Snv, Del])]));
        ev.insert("KRAS".into(), gene(&[("S1", &[Snv]), ("S2", &[Snv])]));
        ev.insert("MYC".into(), gene(&[("S4", &[Amp])]));
        ev
    }

    #[test]
    fn test_heat_is_sample_fraction() {
        let run = mutation_frequency_heat(&evidence(), 4, &MutationHeatConfig { min_freq: 0 }).unwrap();
        assert!((run.heat["TP53"] - 0.75).abs() < 1e-12);
        assert!((run.heat["KRAS"] - 0.5).abs() < 1e-12);
        assert!((run.heat["MYC"] - 0.25).abs() < 1e-12);
        assert!(run.heat.values().all(|h| (0.0..=1.0).contains(h)));
    }

    #[test]
    fn test_min_freq_is_strict() {
        // KRAS has exactly two SNV samples and no CNA: excluded at min_freq = 2
        let run = mutation_frequency_heat(&evidence(), 4, &MutationHeatConfig { min_freq: 2 }).unwrap();
        assert!(!run.heat.contains_key("KRAS"));
        assert!(run.heat.contains_key("TP53"));
        assert_eq!(run.summary.genes_excluded, 1);
    }

    #[test]
    fn test_any_cna_bypasses_min_freq() {
        let run = mutation_frequency_heat(&evidence(), 4, &MutationHeatConfig { min_freq: 100 }).unwrap();
        // TP53 has a deletion, MYC an amplification
        assert_eq!(run.heat.keys().collect::<Vec<_>>(), vec!["MYC", "TP53"]);
        assert!((run.heat["TP53"] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_zero_samples_is_error() {
        let err = mutation_frequency_heat(&MutationEvidence::new(), 0, &MutationHeatConfig::default());
        assert!(matches!(err, Err(HeatError::DegenerateInput(_))));
    }
}
