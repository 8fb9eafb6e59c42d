//! hotnet-ingestion: Readers for mutation, whitelist and score files, and
//! the pipeline that turns one run configuration into a heat file.
//!
//! - `sources::lists`: gene and sample lists
//! - `sources::mutations`: per-sample SNV and CNA calls
//! - `sources::scores`: Oncodrive, MutSig and MuSiC score tables
//! - `pipeline`: load → aggregate/score → filter → output

pub mod sources;
pub mod pipeline;
