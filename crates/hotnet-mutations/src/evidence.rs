//! Per-gene mutation evidence and the counters derived from it.

use std::collections::BTreeMap;

use hotnet_common::{Gene, MutationKind, Sample};

/// Evidence for one gene: sample → alteration kinds seen in that sample.
///
/// Kinds are kept in insertion order (`snv` before CNA kinds). The order is
/// informational only; no counter depends on it.
pub type GeneEvidence = BTreeMap<Sample, Vec<MutationKind>>;

/// Gene → per-sample evidence. Every present (gene, sample) pair has at
/// least one kind; genes without evidence are absent.
pub type MutationEvidence = BTreeMap<Gene, GeneEvidence>;

/// Number of samples with an SNV in this gene.
pub fn num_snvs(evidence: &GeneEvidence) -> usize {
    evidence
        .values()
        .filter(|kinds| kinds.contains(&MutationKind::Snv))
        .count()
}

/// Number of samples with an amplification or deletion in this gene.
pub fn num_cnas(evidence: &GeneEvidence) -> usize {
    evidence
        .values()
        .filter(|kinds| kinds.iter().any(|k| k.is_cna()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use MutationKind::*;

    fn evidence(rows: &[(&str, &[MutationKind])]) -> GeneEvidence {
        rows.iter()
            .map(|(s, kinds)| (s.to_string(), kinds.to_vec()))
            .collect()
    }

    #[test]
    fn test_counts_samples_not_tags() {
        let ev = evidence(&[
            ("S1", &[Snv, Del]),
            ("S2", &[Snv]),
            ("S3", &[Amp]),
            ("S4", &[Amp, Del]),
        ]);
        assert_eq!(num_snvs(&ev), 2);
        assert_eq!(num_cnas(&ev), 3);
    }

    #[test]
    fn test_empty_evidence() {
        let ev = GeneEvidence::new();
        assert_eq!(num_snvs(&ev), 0);
        assert_eq!(num_cnas(&ev), 0);
    }
}
