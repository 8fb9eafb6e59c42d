//! Oncodrive heat: FM p-values, optionally combined with CIS amp/del p-values.
//!
//! Without CIS a gene needs `fm < fm_threshold` and gets `-log10(fm)`.
//! With CIS each score is ignored when at or above its threshold
//! (`fm_threshold` for FM, `cis_threshold` for amp and del); a gene with no
//! remaining score is excluded, otherwise heat is `-log10` of the smallest
//! remaining score. Which score won is counted in `Attribution` for
//! reporting only.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use hotnet_common::{Gene, OncodriveConfig, Result};

use crate::numeric::neg_log10;
use crate::summary::{HeatMapping, HeatRun, HeatSummary};

/// p-value used for a gene missing from one of the three score files.
pub const NEUTRAL_P_VALUE: f64 = 1.0;

/// FM and CIS p-values of one gene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OncodriveScores {
    pub fm: f64,
    pub amp: f64,
    pub del: f64,
}

impl Default for OncodriveScores {
    fn default() -> Self {
        Self { fm: NEUTRAL_P_VALUE, amp: NEUTRAL_P_VALUE, del: NEUTRAL_P_VALUE }
    }
}

/// Join the three per-file score maps over the union of their genes.
///
/// A gene absent from a file gets `NEUTRAL_P_VALUE` for that score.
pub fn merge_oncodrive_scores(
    fm: &BTreeMap<Gene, f64>,
    cis_amp: &BTreeMap<Gene, f64>,
    cis_del: &BTreeMap<Gene, f64>,
) -> BTreeMap<Gene, OncodriveScores> {
    let lookup = |scores: &BTreeMap<Gene, f64>, gene: &str| {
        scores.get(gene).copied().unwrap_or(NEUTRAL_P_VALUE)
    };

    let genes: BTreeSet<&Gene> = fm.keys().chain(cis_amp.keys()).chain(cis_del.keys()).collect();
    info!("Merged oncodrive scores for {} genes", genes.len());

    genes
        .into_iter()
        .map(|gene| {
            let scores = OncodriveScores {
                fm: lookup(fm, gene),
                amp: lookup(cis_amp, gene),
                del: lookup(cis_del, gene),
            };
            (gene.clone(), scores)
        })
        .collect()
}

// ── Attribution ──────────────────────────────────────────────────────────────

/// Score that produced a gene's heat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    Fm,
    CisAmp,
    CisDel,
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScoreSource::Fm => "FM",
            ScoreSource::CisAmp => "CIS AMP",
            ScoreSource::CisDel => "CIS DEL",
        })
    }
}

/// Number of genes whose heat came from each score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub fm: usize,
    pub cis_amp: usize,
    pub cis_del: usize,
}

impl Attribution {
    fn record(&mut self, source: ScoreSource) {
        match source {
            ScoreSource::Fm => self.fm += 1,
            ScoreSource::CisAmp => self.cis_amp += 1,
            ScoreSource::CisDel => self.cis_del += 1,
        }
    }
}

// ── Transform ────────────────────────────────────────────────────────────────

/// The p-value a gene's heat is computed from, and where it came from.
///
/// `None` means the gene is excluded. In CIS mode ties go to FM, then amp,
/// then del.
pub fn select_score(scores: &OncodriveScores, config: &OncodriveConfig) -> Option<(f64, ScoreSource)> {
    if !config.cis {
        return (scores.fm < config.fm_threshold).then_some((scores.fm, ScoreSource::Fm));
    }

    let candidates = [
        (scores.fm, config.fm_threshold, ScoreSource::Fm),
        (scores.amp, config.cis_threshold, ScoreSource::CisAmp),
        (scores.del, config.cis_threshold, ScoreSource::CisDel),
    ];
    candidates
        .into_iter()
        .filter(|(value, threshold, _)| value < threshold)
        .fold(None, |best: Option<(f64, ScoreSource)>, (value, _, source)| match best {
            Some((min, _)) if min <= value => best,
            _ => Some((value, source)),
        })
}

/// Oncodrive heat for every gene with scores.
pub fn oncodrive_heat(
    gene2scores: &BTreeMap<Gene, OncodriveScores>,
    config: &OncodriveConfig,
) -> Result<HeatRun> {
    config.validate()?;
    info!("Creating oncodrive heat map...");
    if config.cis {
        info!("Including CIS scores at threshold {}", config.cis_threshold);
    }

    let mut heat = HeatMapping::new();
    let mut attribution = Attribution::default();
    for (gene, scores) in gene2scores {
        let Some((value, source)) = select_score(scores, config) else {
            continue;
        };
        heat.insert(gene.clone(), neg_log10(gene, value)?);
        attribution.record(source);
    }

    info!("Genes using FM score: {}", attribution.fm);
    info!("Genes using CIS AMP score: {}", attribution.cis_amp);
    info!("Genes using CIS DEL score: {}", attribution.cis_del);

    let mut summary = HeatSummary::new(gene2scores.len(), &heat);
    summary.attribution = Some(attribution);
    Ok(HeatRun { heat, summary })
}
