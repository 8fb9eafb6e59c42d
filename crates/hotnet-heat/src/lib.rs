//! hotnet-heat: Converts mutation evidence and significance scores into per-gene heat.
//!
//! Four independent transforms are provided; a run applies exactly one:
//! - `mutation`: fraction of samples with an SNV or CNA in the gene
//! - `oncodrive`: -log10 of the Oncodrive-FM p-value, optionally combined with CIS amp/del
//! - `mutsig`: -log10 of the MutSig q-value
//! - `music`: -log10 of the median MuSiC FDR q-value
//!
//! `filter::expression_filter` optionally restricts any result to expressed genes.

pub mod numeric;
pub mod summary;
pub mod mutation;
pub mod oncodrive;
pub mod mutsig;
pub mod music;
pub mod filter;
pub mod output;

pub use summary::{HeatMapping, HeatRun, HeatSummary};
pub use mutation::mutation_frequency_heat;
pub use oncodrive::{merge_oncodrive_scores, oncodrive_heat, Attribution, OncodriveScores, ScoreSource};
pub use mutsig::{mutsig_heat, MutsigScores};
pub use music::{music_heat, MusicScores};
pub use filter::expression_filter;
pub use output::HeatFile;
