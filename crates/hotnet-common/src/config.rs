//! Run configuration for heat generation.
//!
//! A run selects exactly one heat transform, names its input files and
//! carries the thresholds for that transform. Runs can be described in a
//! TOML/YAML/JSON file or assembled from CLI flags; either way the same
//! `RunConfig` is produced and its `transform` section is echoed into the
//! heat output as provenance.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HeatError, Result};

/// Complete description of one heat run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Transform and its inputs
    pub transform: TransformConfig,

    /// Genes with adequate expression; when set, heat is restricted to these genes
    #[serde(default)]
    pub expression_file: Option<PathBuf>,

    /// Output options
    #[serde(default)]
    pub output: OutputConfig,
}

// ── Transform selection ──────────────────────────────────────────────────────

/// Heat transform to apply, with its input files and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "heat_fn", rename_all = "snake_case")]
pub enum TransformConfig {
    /// Mutation frequency from SNV + CNA calls
    Mutation {
        snv_file: PathBuf,
        cna_file: PathBuf,
        #[serde(default)]
        gene_file: Option<PathBuf>,
        #[serde(default)]
        sample_file: Option<PathBuf>,
        #[serde(default)]
        params: MutationHeatConfig,
    },
    /// Oncodrive-FM p-values, optionally combined with CIS amp/del p-values
    Oncodrive {
        fm_file: PathBuf,
        cis_amp_file: PathBuf,
        cis_del_file: PathBuf,
        #[serde(default)]
        params: OncodriveConfig,
    },
    /// MutSig q-values
    Mutsig {
        scores_file: PathBuf,
        #[serde(default)]
        params: MutsigConfig,
    },
    /// MuSiC FDR q-values (median of CT, LRT and FCPT)
    Music {
        scores_file: PathBuf,
        #[serde(default)]
        params: MusicConfig,
    },
}

impl TransformConfig {
    pub fn name(&self) -> &'static str {
        match self {
            TransformConfig::Mutation { .. } => "mutation",
            TransformConfig::Oncodrive { .. } => "oncodrive",
            TransformConfig::Mutsig { .. } => "mutsig",
            TransformConfig::Music { .. } => "music",
        }
    }

    /// Check the thresholds of the selected transform.
    pub fn validate(&self) -> Result<()> {
        match self {
            TransformConfig::Mutation { .. } => Ok(()),
            TransformConfig::Oncodrive { params, .. } => params.validate(),
            TransformConfig::Mutsig { params, .. } => params.validate(),
            TransformConfig::Music { params, .. } => params.validate(),
        }
    }
}

// ── Transform parameters ─────────────────────────────────────────────────────

/// Parameters of the mutation-frequency transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationHeatConfig {
    /// A gene without CNAs needs strictly more SNV samples than this
    #[serde(default)]
    pub min_freq: usize,
}

impl Default for MutationHeatConfig {
    fn default() -> Self {
        Self { min_freq: 0 }
    }
}

/// Parameters of the oncodrive transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OncodriveConfig {
    /// FM p-values at or above this are ignored
    #[serde(default = "default_fm_threshold")]
    pub fm_threshold: f64,

    /// CIS amp/del p-values at or above this are ignored (CIS mode only)
    #[serde(default = "default_cis_threshold")]
    pub cis_threshold: f64,

    /// Combine FM with the CIS amp/del scores
    #[serde(default)]
    pub cis: bool,
}

fn default_fm_threshold() -> f64 { 0.2 }
fn default_cis_threshold() -> f64 { 0.01 }

impl Default for OncodriveConfig {
    fn default() -> Self {
        Self {
            fm_threshold: default_fm_threshold(),
            cis_threshold: default_cis_threshold(),
            cis: false,
        }
    }
}

impl OncodriveConfig {
    pub fn validate(&self) -> Result<()> {
        check_threshold("fm_threshold", self.fm_threshold)?;
        if self.cis {
            check_threshold("cis_threshold", self.cis_threshold)?;
        }
        Ok(())
    }
}

/// Parameters of the MutSig transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutsigConfig {
    /// Genes need a q-value strictly below this
    #[serde(default = "default_q_threshold")]
    pub threshold: f64,
}

fn default_q_threshold() -> f64 { 1.0 }

impl Default for MutsigConfig {
    fn default() -> Self {
        Self { threshold: default_q_threshold() }
    }
}

impl MutsigConfig {
    pub fn validate(&self) -> Result<()> {
        check_threshold("threshold", self.threshold)
    }
}

/// Parameters of the MuSiC transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MusicConfig {
    /// Genes need a median q-value strictly below this
    #[serde(default = "default_q_threshold")]
    pub threshold: f64,

    /// Heat assigned when the median q-value is exactly 0
    #[serde(default = "default_max_heat")]
    pub max_heat: f64,
}

fn default_max_heat() -> f64 { 15.0 }

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            threshold: default_q_threshold(),
            max_heat: default_max_heat(),
        }
    }
}

impl MusicConfig {
    pub fn validate(&self) -> Result<()> {
        check_threshold("threshold", self.threshold)?;
        if !self.max_heat.is_finite() || self.max_heat < 0.0 {
            return Err(HeatError::InvalidThreshold { name: "max_heat", value: self.max_heat });
        }
        Ok(())
    }
}

/// p/q-value thresholds must lie in (0, 1].
fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(HeatError::InvalidThreshold { name, value })
    }
}

// ── Output ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"heat": {...}, "parameters": {...}}`
    #[default]
    Json,
    /// `gene<TAB>heat`, no provenance
    Tsv,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Destination file; stdout when absent
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// ── Loading ──────────────────────────────────────────────────────────────────

impl RunConfig {
    /// Load from a file, picking the format from its extension
    /// (`.toml`, `.yaml`/`.yml`, `.json`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(path),
            Some("yaml") | Some("yml") => Self::from_yaml(path),
            Some("json") => Self::from_json(path),
            _ => Err(HeatError::Config(format!(
                "Unrecognised config extension for {:?} (expected .toml, .yaml or .json)",
                path
            ))),
        }
    }

    /// Load from TOML file
    pub fn from_toml(path: impl AsRef<Path>) -> Result<Self> {
        let content = read(path.as_ref())?;
        toml::from_str(&content).map_err(|e| HeatError::Config(e.to_string()))
    }

    /// Load from YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let content = read(path.as_ref())?;
        serde_yaml::from_str(&content).map_err(|e| HeatError::Config(e.to_string()))
    }

    /// Load from JSON file
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = read(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.transform.validate()
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| HeatError::io(path, e))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
