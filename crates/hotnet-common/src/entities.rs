//! Core identifiers and mutation kinds shared by the aggregator and the heat engine.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque gene identifier (usually an HGNC symbol).
pub type Gene = String;

/// Opaque sample identifier (e.g. a TCGA barcode).
pub type Sample = String;

// ---------------------------------------------------------------------------
// Mutation kind
// ---------------------------------------------------------------------------

/// Kind of alteration observed for a gene in one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Snv,
    Amp,
    Del,
}

impl MutationKind {
    /// Split a CNA token such as `TP53(D)` into its gene and kind.
    ///
    /// The gene is everything before the first `(`. Returns `None` when the
    /// token does not end in `(A)` or `(D)`.
    pub fn parse_cna_token(token: &str) -> Option<(&str, MutationKind)> {
        let kind = if token.ends_with("(A)") {
            MutationKind::Amp
        } else if token.ends_with("(D)") {
            MutationKind::Del
        } else {
            return None;
        };
        let gene = token.split('(').next().unwrap_or_default();
        if gene.is_empty() {
            return None;
        }
        Some((gene, kind))
    }

    pub fn is_cna(self) -> bool {
        matches!(self, MutationKind::Amp | MutationKind::Del)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MutationKind::Snv => "snv",
            MutationKind::Amp => "amp",
            MutationKind::Del => "del",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Whitelist
// ---------------------------------------------------------------------------

/// Restriction set for genes or samples.
///
/// `All` accepts every identifier. A whitelist built from an empty set is
/// `All` as well: an empty whitelist file means "no filtering".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Whitelist {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl Whitelist {
    pub fn from_set(ids: BTreeSet<String>) -> Self {
        if ids.is_empty() {
            Whitelist::All
        } else {
            Whitelist::Only(ids)
        }
    }

    pub fn accepts(&self, id: &str) -> bool {
        match self {
            Whitelist::All => true,
            Whitelist::Only(ids) => ids.contains(id),
        }
    }

    /// Whitelist accepting exactly what both `self` and `other` accept.
    ///
    /// Unlike `from_set`, an empty intersection stays `Only` and accepts nothing.
    pub fn intersect(&self, other: &Whitelist) -> Whitelist {
        match (self, other) {
            (Whitelist::All, w) | (w, Whitelist::All) => w.clone(),
            (Whitelist::Only(a), Whitelist::Only(b)) => {
                Whitelist::Only(a.intersection(b).cloned().collect())
            }
        }
    }

    pub fn len(&self) -> Option<usize> {
        match self {
            Whitelist::All => None,
            Whitelist::Only(ids) => Some(ids.len()),
        }
    }
}

impl FromIterator<String> for Whitelist {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Whitelist::from_set(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Sample sheet
// ---------------------------------------------------------------------------

/// Samples file contents: the sample whitelist plus the optional sample type
/// (cancer subtype) listed next to each sample. Types are carried, never interpreted.
#[derive(Debug, Clone, Default)]
pub struct SampleSheet {
    pub samples: BTreeSet<Sample>,
    pub types: BTreeMap<Sample, String>,
}

impl SampleSheet {
    pub fn whitelist(&self) -> Whitelist {
        Whitelist::from_set(self.samples.clone())
    }

    pub fn sample_type(&self, sample: &str) -> Option<&str> {
        self.types.get(sample).map(String::as_str)
    }
}
