//! hotnet-mutations: Merges per-sample SNV and CNA calls into per-gene mutation evidence.

pub mod evidence;
pub mod aggregator;

pub use evidence::{num_cnas, num_snvs, GeneEvidence, MutationEvidence};
pub use aggregator::{aggregate, CnaRecord, MutationData, SnvRecord};
