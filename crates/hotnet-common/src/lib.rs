//! hotnet-common: Shared types, errors, and run configuration used across all HotNet crates.

pub mod error;
pub mod entities;
pub mod config;

// Re-export commonly used types
pub use error::{HeatError, Result};
pub use entities::{Gene, MutationKind, Sample, SampleSheet, Whitelist};
pub use config::{
    MusicConfig, MutationHeatConfig, MutsigConfig, OncodriveConfig, OutputConfig, OutputFormat,
    RunConfig, TransformConfig,
};
