//! Significance score tables from Oncodrive, MutSig and MuSiC.
//!
//! Column layout (0-based):
//! - Oncodrive-FM: gene in column 1, p-value in column 2. Rows with an
//!   empty, `-` or `-0` p-value carry no score and are skipped.
//! - Oncodrive-CIS (amp and del files): gene in column 0, p-value in the last column.
//! - MutSig: gene in column 0, p-value second to last, q-value last.
//! - MuSiC: gene in column 0, FDR_FCPT in column 10, FDR_LRT in 11, FDR_CT in 12.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use tracing::info;

use hotnet_common::{Gene, HeatError, Result};
use hotnet_heat::{merge_oncodrive_scores, MusicScores, MutsigScores, OncodriveScores};

use super::{open, origin, parse_f64, read_rows, Row};

const FM_GENE: usize = 1;
const FM_PVALUE: usize = 2;

const MUSIC_FDR_FCPT: usize = 10;
const MUSIC_FDR_LRT: usize = 11;
const MUSIC_FDR_CT: usize = 12;

fn too_short(row: &Row, origin: &str, expected: usize) -> HeatError {
    HeatError::Parse {
        origin: origin.to_string(),
        line: row.line,
        message: format!("expected at least {expected} columns, found {}", row.fields.len()),
    }
}

// ── Oncodrive ────────────────────────────────────────────────────────────────

pub fn parse_fm_scores<R: Read>(reader: R, origin: &str) -> Result<BTreeMap<Gene, f64>> {
    let mut scores = BTreeMap::new();
    for row in read_rows(reader, origin)? {
        let Some(gene) = row.fields.get(FM_GENE) else {
            return Err(too_short(&row, origin, FM_GENE + 1));
        };
        let pvalue = row.fields.get(FM_PVALUE).map(String::as_str).unwrap_or("");
        if matches!(pvalue, "" | "-" | "-0") {
            continue;
        }
        scores.insert(gene.clone(), parse_f64(pvalue, origin, row.line, "FM p-value")?);
    }
    Ok(scores)
}

pub fn parse_cis_scores<R: Read>(reader: R, origin: &str) -> Result<BTreeMap<Gene, f64>> {
    let mut scores = BTreeMap::new();
    for row in read_rows(reader, origin)? {
        if row.fields.len() < 2 {
            return Err(too_short(&row, origin, 2));
        }
        let pvalue = parse_f64(&row.fields[row.fields.len() - 1], origin, row.line, "CIS p-value")?;
        scores.insert(row.fields[0].clone(), pvalue);
    }
    Ok(scores)
}

pub fn load_fm_scores(path: impl AsRef<Path>) -> Result<BTreeMap<Gene, f64>> {
    let path = path.as_ref();
    let scores = parse_fm_scores(open(path)?, &origin(path))?;
    info!("FM genes: {}", scores.len());
    Ok(scores)
}

pub fn load_cis_scores(path: impl AsRef<Path>) -> Result<BTreeMap<Gene, f64>> {
    let path = path.as_ref();
    let scores = parse_cis_scores(open(path)?, &origin(path))?;
    info!("CIS genes in {:?}: {}", path, scores.len());
    Ok(scores)
}

/// Load the three Oncodrive files and merge them per gene.
pub fn load_oncodrive(
    fm_file: impl AsRef<Path>,
    cis_amp_file: impl AsRef<Path>,
    cis_del_file: impl AsRef<Path>,
) -> Result<BTreeMap<Gene, OncodriveScores>> {
    info!("Loading oncodrive data...");
    let fm = load_fm_scores(fm_file)?;
    let cis_amp = load_cis_scores(cis_amp_file)?;
    let cis_del = load_cis_scores(cis_del_file)?;
    Ok(merge_oncodrive_scores(&fm, &cis_amp, &cis_del))
}

// ── MutSig ───────────────────────────────────────────────────────────────────

pub fn parse_mutsig<R: Read>(reader: R, origin: &str) -> Result<BTreeMap<Gene, MutsigScores>> {
    let mut scores = BTreeMap::new();
    for row in read_rows(reader, origin)? {
        let n = row.fields.len();
        if n < 3 {
            return Err(too_short(&row, origin, 3));
        }
        let pval = parse_f64(&row.fields[n - 2], origin, row.line, "p-value")?;
        let qval = parse_f64(&row.fields[n - 1], origin, row.line, "q-value")?;
        scores.insert(row.fields[0].clone(), MutsigScores { pval, qval });
    }
    Ok(scores)
}

pub fn load_mutsig(path: impl AsRef<Path>) -> Result<BTreeMap<Gene, MutsigScores>> {
    let path = path.as_ref();
    let scores = parse_mutsig(open(path)?, &origin(path))?;
    info!("Loaded MutSig scores for {} genes", scores.len());
    Ok(scores)
}

// ── MuSiC ────────────────────────────────────────────────────────────────────

pub fn parse_music<R: Read>(reader: R, origin: &str) -> Result<BTreeMap<Gene, MusicScores>> {
    let mut scores = BTreeMap::new();
    for row in read_rows(reader, origin)? {
        if row.fields.len() <= MUSIC_FDR_CT {
            return Err(too_short(&row, origin, MUSIC_FDR_CT + 1));
        }
        let column = |i: usize, name: &str| parse_f64(&row.fields[i], origin, row.line, name);
        let music = MusicScores {
            fdr_ct: column(MUSIC_FDR_CT, "FDR_CT")?,
            fdr_lrt: column(MUSIC_FDR_LRT, "FDR_LRT")?,
            fdr_fcpt: column(MUSIC_FDR_FCPT, "FDR_FCPT")?,
        };
        scores.insert(row.fields[0].clone(), music);
    }
    Ok(scores)
}

pub fn load_music(path: impl AsRef<Path>) -> Result<BTreeMap<Gene, MusicScores>> {
    let path = path.as_ref();
    info!("Loading MuSiC scores using the median of the 3 q-values...");
    let scores = parse_music(open(path)?, &origin(path))?;
    info!("Loaded {} genes", scores.len());
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fm_skips_missing_scores() {
        let tsv = "#id\tgene\tpval\n1\tTP53\t0.001\n2\tKRAS\t-\n3\tMYC\t-0\n4\tTTN\t\n5\tEGFR\t0.5\n";
        let scores = parse_fm_scores(tsv.as_bytes(), "fm").unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores["TP53"], 0.001);
        assert_eq!(scores["EGFR"], 0.5);
    }

    #[test]
    fn test_cis_uses_last_column() {
        let scores = parse_cis_scores("MYC\t12\t3.5\t0.004\n".as_bytes(), "amp").unwrap();
        assert_eq!(scores["MYC"], 0.004);
    }

    #[test]
    fn test_mutsig_columns() {
        let tsv = "# gene\t...\tp\tq\nTP53\t1000\t45\t1e-12\t1e-9\n";
        let scores = parse_mutsig(tsv.as_bytes(), "mutsig").unwrap();
        assert_eq!(scores["TP53"], MutsigScores { pval: 1e-12, qval: 1e-9 });
    }

    #[test]
    fn test_mutsig_bad_number() {
        let err = parse_mutsig("TP53\tx\t0.1\tnope\n".as_bytes(), "mutsig").unwrap_err();
        assert!(matches!(err, HeatError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_music_columns() {
        let mut cols: Vec<String> = vec!["PTEN".to_string()];
        cols.extend((1..10).map(|i| i.to_string()));
        cols.extend(["0.3", "0.2", "0.1"].iter().map(|s| s.to_string()));
        let line = cols.join("\t") + "\n";
        let scores = parse_music(line.as_bytes(), "music").unwrap();
        let s = scores["PTEN"];
        assert_eq!(s.fdr_fcpt, 0.3);
        assert_eq!(s.fdr_lrt, 0.2);
        assert_eq!(s.fdr_ct, 0.1);
    }

    #[test]
    fn test_music_short_row() {
        let err = parse_music("PTEN\t0.1\t0.2\n".as_bytes(), "music").unwrap_err();
        assert!(matches!(err, HeatError::Parse { .. }));
    }
}
