//! Gene and sample lists.
//!
//! Gene list: one gene per line. Sample list: sample ID in the first
//! column, optionally followed by the sample type; further columns are ignored.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use tracing::info;

use hotnet_common::{Gene, Result, SampleSheet};

use super::{open, origin, read_rows};

pub fn parse_genes<R: Read>(reader: R, origin: &str) -> Result<BTreeSet<Gene>> {
    Ok(read_rows(reader, origin)?
        .into_iter()
        .filter_map(|row| row.fields.into_iter().next())
        .filter(|gene| !gene.is_empty())
        .collect())
}

pub fn load_genes(path: impl AsRef<Path>) -> Result<BTreeSet<Gene>> {
    let path = path.as_ref();
    let genes = parse_genes(open(path)?, &origin(path))?;
    info!("Loaded {} genes from {:?}", genes.len(), path);
    Ok(genes)
}

pub fn parse_samples<R: Read>(reader: R, origin: &str) -> Result<SampleSheet> {
    let mut sheet = SampleSheet::default();
    for row in read_rows(reader, origin)? {
        // Sample files are whitespace separated, not strictly tab separated
        let line = row.fields.join(" ");
        let mut columns = line.split_whitespace();
        let Some(sample) = columns.next() else { continue };
        sheet.samples.insert(sample.to_string());
        if let Some(ty) = columns.next() {
            sheet.types.insert(sample.to_string(), ty.to_string());
        }
    }
    Ok(sheet)
}

pub fn load_samples(path: impl AsRef<Path>) -> Result<SampleSheet> {
    let path = path.as_ref();
    let sheet = parse_samples(open(path)?, &origin(path))?;
    info!(
        "Loaded {} samples ({} with a type) from {:?}",
        sheet.samples.len(),
        sheet.types.len(),
        path
    );
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genes() {
        let genes = parse_genes("TP53\nKRAS \n\n# skipped\nMYC\n".as_bytes(), "genes.txt").unwrap();
        assert_eq!(genes.len(), 3);
        assert!(genes.contains("KRAS"));
    }

    #[test]
    fn test_parse_samples_with_types() {
        let sheet = parse_samples("S1\tBRCA\nS2\nS3 GBM extra\n".as_bytes(), "samples.txt").unwrap();
        assert_eq!(sheet.samples.len(), 3);
        assert_eq!(sheet.sample_type("S1"), Some("BRCA"));
        assert_eq!(sheet.sample_type("S2"), None);
        assert_eq!(sheet.sample_type("S3"), Some("GBM"));
    }

    #[test]
    fn test_empty_sample_file_accepts_all() {
        let sheet = parse_samples("".as_bytes(), "samples.txt").unwrap();
        assert!(sheet.whitelist().accepts("anyone"));
    }
}
