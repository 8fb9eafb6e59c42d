//! Heat files.
//!
//! JSON: `{"heat": {gene: value, ...}, "parameters": {"heat_fn": ..., ...}}`
//! with the run's transform configuration as provenance.
//! TSV: a `# parameters: {...}` comment line with the same provenance as
//! compact JSON, then `gene<TAB>heat`, one gene per line. Readers skip the
//! comment.
//! Genes are always written in sorted order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use hotnet_common::{HeatError, Result, TransformConfig};

use crate::summary::HeatMapping;

/// Heat values plus the parameters that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatFile {
    pub heat: HeatMapping,
    pub parameters: TransformConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression_file: Option<PathBuf>,
}

impl HeatFile {
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn read_json<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| HeatError::io(path, e))?;
        let heat_file = Self::read_json(BufReader::new(file))?;
        debug!("Loaded {} heat values from {:?}", heat_file.heat.len(), path);
        Ok(heat_file)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| HeatError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer)?;
        writer.flush().map_err(|e| HeatError::io(path, e))
    }

    /// Provenance comment line followed by `gene<TAB>heat` lines.
    pub fn write_tsv<W: Write>(&self, mut writer: W) -> Result<()> {
        let parameters = serde_json::to_string(&self.parameters)?;
        writeln!(writer, "{PARAMETERS_PREFIX}{parameters}").map_err(|e| HeatError::Tsv(e.into()))?;
        write_tsv(&self.heat, writer)
    }
}

const PARAMETERS_PREFIX: &str = "# parameters: ";

/// Write `gene<TAB>heat` lines.
pub fn write_tsv<W: Write>(heat: &HeatMapping, writer: W) -> Result<()> {
    let mut tsv = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);
    for (gene, value) in heat {
        tsv.write_record([gene.as_str(), value.to_string().as_str()])?;
    }
    tsv.flush().map_err(|e| HeatError::Tsv(e.into()))?;
    Ok(())
}

/// Read `gene<TAB>heat` lines. Extra columns are ignored.
pub fn read_tsv<R: Read>(reader: R, origin: &str) -> Result<HeatMapping> {
    let mut tsv = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut heat = HeatMapping::new();
    for (i, record) in tsv.records().enumerate() {
        let record = record?;
        let line = record.position().map(|p| p.line() as usize).unwrap_or(i + 1);
        let (Some(gene), Some(value)) = (record.get(0), record.get(1)) else {
            return Err(HeatError::Parse {
                origin: origin.to_string(),
                line,
                message: "expected gene and heat columns".to_string(),
            });
        };
        let value: f64 = value.trim().parse().map_err(|_| HeatError::Parse {
            origin: origin.to_string(),
            line,
            message: format!("invalid heat value '{value}' for gene {gene}"),
        })?;
        heat.insert(gene.trim().to_string(), value);
    }
    Ok(heat)
}

pub fn load_tsv(path: impl AsRef<Path>) -> Result<HeatMapping> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| HeatError::io(path, e))?;
    read_tsv(BufReader::new(file), &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotnet_common::MutsigConfig;
    use pretty_assertions::assert_eq;

    fn heat_file() -> HeatFile {
        HeatFile {
            heat: HeatMapping::from([("TP53".to_string(), 4.0), ("KRAS".to_string(), 0.25)]),
            parameters: TransformConfig::Mutsig {
                scores_file: "mutsig.tsv".into(),
                params: MutsigConfig { threshold: 0.5 },
            },
            expression_file: None,
        }
    }

    #[test]
    fn test_json_layout() {
        let mut buf = Vec::new();
        heat_file().write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["heat"]["TP53"], 4.0);
        assert_eq!(value["parameters"]["heat_fn"], "mutsig");
        assert_eq!(value["parameters"]["params"]["threshold"], 0.5);
        assert!(value.get("expression_file").is_none());
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heat.json");
        let original = heat_file();
        original.save_json(&path).unwrap();
        assert_eq!(HeatFile::load_json(&path).unwrap(), original);
    }

    #[test]
    fn test_tsv_sorted_output() {
        let mut buf = Vec::new();
        write_tsv(&heat_file().heat, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "KRAS\t0.25\nTP53\t4\n");
    }

    #[test]
    fn test_tsv_file_carries_parameters() {
        let mut buf = Vec::new();
        heat_file().write_tsv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let (header, rows) = text.split_once('\n').unwrap();

        let parameters: TransformConfig =
            serde_json::from_str(header.strip_prefix(PARAMETERS_PREFIX).unwrap()).unwrap();
        assert_eq!(parameters, heat_file().parameters);
        assert_eq!(rows, "KRAS\t0.25\nTP53\t4\n");
        assert_eq!(read_tsv(text.as_bytes(), "mem").unwrap(), heat_file().heat);
    }

    #[test]
    fn test_read_tsv() {
        let heat = read_tsv("TP53\t4.0\n# comment\nKRAS\t0.25\textra\n".as_bytes(), "mem").unwrap();
        assert_eq!(heat.len(), 2);
        assert_eq!(heat["KRAS"], 0.25);
    }

    #[test]
    fn test_read_tsv_bad_value() {
        let err = read_tsv("TP53\thot\n".as_bytes(), "mem").unwrap_err();
        assert!(matches!(err, HeatError::Parse { line: 1, .. }));
    }
}
