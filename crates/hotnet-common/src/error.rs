use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TSV error: {0}")]
    Tsv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A line that does not follow the input format, e.g. a CNA token without
    /// an `(A)`/`(D)` marker.
    #[error("Malformed record in {origin}, line {line} (sample {sample}): {token}")]
    MalformedRecord {
        origin: String,
        line: usize,
        sample: String,
        token: String,
    },

    #[error("Parse error in {origin}, line {line}: {message}")]
    Parse {
        origin: String,
        line: usize,
        message: String,
    },

    #[error("Invalid {name} = {value}: out of range (thresholds must be in (0, 1], max_heat finite and >= 0)")]
    InvalidThreshold { name: &'static str, value: f64 },

    /// A p/q-value that would be fed to -log10 but is not positive.
    #[error("Invalid score for gene {gene}: {value} (-log10 is undefined)")]
    InvalidScore { gene: String, value: f64 },

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeatError {
    /// Attach a path to a raw I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, HeatError>;
