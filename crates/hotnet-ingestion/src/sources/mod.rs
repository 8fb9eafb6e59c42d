//! Input file readers.
//!
//! All tables are tab-separated without a header; lines starting with `#`
//! are comments. Each reader has a `parse_*` function over any `Read` (for
//! tests and in-memory data) and a `load_*` function over a path.

pub mod lists;
pub mod mutations;
pub mod scores;

pub use lists::{load_genes, load_samples, parse_genes, parse_samples};
pub use mutations::{load_cnas, load_snvs, parse_cnas, parse_snvs};
pub use scores::{
    load_cis_scores, load_fm_scores, load_music, load_mutsig, load_oncodrive, parse_cis_scores,
    parse_fm_scores, parse_music, parse_mutsig,
};

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hotnet_common::{HeatError, Result};

pub(crate) fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| HeatError::io(path, e))
}

pub(crate) fn origin(path: &Path) -> String {
    path.display().to_string()
}

/// One non-comment table row: 1-based line number and trimmed fields.
pub(crate) struct Row {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Read every row of a headerless TSV table.
pub(crate) fn read_rows<R: Read>(reader: R, origin: &str) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|e| HeatError::io(origin, e))?;
        if line.starts_with('#') {
            continue;
        }
        let mut fields: Vec<String> = line.split('\t').map(|f| f.trim().to_string()).collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        if fields.is_empty() {
            continue;
        }
        rows.push(Row { line: i + 1, fields });
    }
    Ok(rows)
}

pub(crate) fn parse_f64(value: &str, origin: &str, line: usize, column: &str) -> Result<f64> {
    value.trim().parse().map_err(|_| HeatError::Parse {
        origin: origin.to_string(),
        line,
        message: format!("invalid {column} value '{value}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows_skips_comments_and_trailing_blanks() {
        let rows = read_rows("# header\nS1\tTP53\t\t\n\nS2\n".as_bytes(), "mem").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].fields, vec!["S1", "TP53"]);
        assert_eq!(rows[1].line, 4);
        assert_eq!(rows[1].fields, vec!["S2"]);
    }

    #[test]
    fn test_parse_f64_reports_line() {
        let err = parse_f64("abc", "scores.tsv", 7, "qval").unwrap_err();
        assert!(matches!(err, HeatError::Parse { line: 7, .. }));
    }
}
