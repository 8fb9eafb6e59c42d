//! SNV and CNA call files.
//!
//! SNV: `sample<TAB>gene<TAB>gene...`
//! CNA: `sample<TAB>GENE(A)<TAB>GENE(D)...` where `(A)` marks an
//! amplification and `(D)` a deletion.
//!
//! A sample listed on several lines gets the union of its calls. Whitelists
//! are not applied here; the aggregator does that.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use hotnet_common::{HeatError, MutationKind, Result};
use hotnet_mutations::{CnaRecord, SnvRecord};

use super::{open, origin, read_rows};

pub fn parse_snvs<R: Read>(reader: R, origin: &str) -> Result<SnvRecord> {
    let mut snvs = SnvRecord::new();
    for row in read_rows(reader, origin)? {
        let mut fields = row.fields.into_iter();
        let Some(sample) = fields.next() else { continue };
        // A sample line without genes still counts as a sample
        snvs.entry(sample)
            .or_default()
            .extend(fields.filter(|g| !g.is_empty()));
    }
    Ok(snvs)
}

pub fn load_snvs(path: impl AsRef<Path>) -> Result<SnvRecord> {
    let path = path.as_ref();
    let snvs = parse_snvs(open(path)?, &origin(path))?;
    info!("Loaded SNVs for {} samples from {:?}", snvs.len(), path);
    Ok(snvs)
}

/// Parse CNA calls. Any token without an `(A)`/`(D)` marker aborts the load.
///
/// A gene called twice in one sample keeps the last call.
pub fn parse_cnas<R: Read>(reader: R, origin: &str) -> Result<CnaRecord> {
    let mut cnas = CnaRecord::new();
    for row in read_rows(reader, origin)? {
        let mut fields = row.fields.into_iter();
        let Some(sample) = fields.next() else { continue };
        let calls = cnas.entry(sample.clone()).or_default();

        for token in fields.filter(|t| !t.is_empty()) {
            let Some((gene, kind)) = MutationKind::parse_cna_token(&token) else {
                return Err(HeatError::MalformedRecord {
                    origin: origin.to_string(),
                    line: row.line,
                    sample,
                    token,
                });
            };
            if let Some(previous) = calls.insert(gene.to_string(), kind) {
                if previous != kind {
                    debug!("{sample}: {gene} called as both {previous} and {kind}, keeping {kind}");
                }
            }
        }
    }
    Ok(cnas)
}

pub fn load_cnas(path: impl AsRef<Path>) -> Result<CnaRecord> {
    let path = path.as_ref();
    let cnas = parse_cnas(open(path)?, &origin(path))?;
    info!("Loaded CNAs for {} samples from {:?}", cnas.len(), path);
    Ok(cnas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_snvs() {
        let snvs = parse_snvs("# sample\tgenes\nS1\tTP53\tKRAS\nS2\nS1\tMYC\n".as_bytes(), "snv").unwrap();
        assert_eq!(snvs.len(), 2);
        assert_eq!(snvs["S1"].len(), 3);
        assert!(snvs["S2"].is_empty());
    }

    #[test]
    fn test_parse_cnas() {
        let cnas = parse_cnas("S1\tMYC(A)\tPTEN(D)\nS2\tCDKN2A(D)\n".as_bytes(), "cna").unwrap();
        assert_eq!(cnas["S1"]["MYC"], MutationKind::Amp);
        assert_eq!(cnas["S1"]["PTEN"], MutationKind::Del);
        assert_eq!(cnas["S2"]["CDKN2A"], MutationKind::Del);
    }

    #[test]
    fn test_cna_collision_last_call_wins() {
        let cnas = parse_cnas("S1\tMYC(A)\tMYC(D)\n".as_bytes(), "cna").unwrap();
        assert_eq!(cnas["S1"].len(), 1);
        assert_eq!(cnas["S1"]["MYC"], MutationKind::Del);
    }

    #[test]
    fn test_unknown_marker_is_fatal() {
        let err = parse_cnas("S1\tMYC(A)\nS2\tTP53(X)\n".as_bytes(), "pan.cna").unwrap_err();
        match err {
            HeatError::MalformedRecord { origin, line, sample, token } => {
                assert_eq!(origin, "pan.cna");
                assert_eq!(line, 2);
                assert_eq!(sample, "S2");
                assert_eq!(token, "TP53(X)");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_marker_is_fatal() {
        assert!(parse_cnas("S1\tTP53\n".as_bytes(), "cna").is_err());
    }
}
