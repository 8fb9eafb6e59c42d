//! Shared fixtures for HotNet integration tests.
//!
//! `Fixture` owns a temporary directory; files written into it disappear
//! when the fixture is dropped. The `data` module holds small, hand-checked
//! input tables.

use std::fs;
use std::path::PathBuf;

pub use pretty_assertions;
use tempfile::TempDir;

pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read fixture file")
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// MuSiC row with the three FDR columns at their fixed positions.
pub fn music_row(gene: &str, fdr_fcpt: f64, fdr_lrt: f64, fdr_ct: f64) -> String {
    let mut cols = vec![gene.to_string()];
    cols.extend((1..10).map(|i| format!("c{i}")));
    cols.extend([fdr_fcpt, fdr_lrt, fdr_ct].iter().map(|v| v.to_string()));
    cols.join("\t")
}

pub mod data {
    //! Five samples, S5 without any mutation in the SNV file.
    //!
    //! | gene   | S1      | S2  | S3  | S4  | S5 |
    //! |--------|---------|-----|-----|-----|----|
    //! | TP53   | snv,del | snv | snv |     |    |
    //! | KRAS   | snv     | snv |     |     |    |
    //! | MYC    |         |     | amp | amp |    |
    //! | TTN    | snv     |     |     |     |    |

    pub const SNVS: &str = "\
# sample\tgenes
S1\tTP53\tKRAS\tTTN
S2\tTP53\tKRAS
S3\tTP53
S5
";

    pub const CNAS: &str = "\
S1\tTP53(D)
S3\tMYC(A)
S4\tMYC(A)
";

    pub const GENES: &str = "TP53\nKRAS\nMYC\nTTN\nEGFR\n";

    pub const SAMPLES: &str = "S1\tBRCA\nS2\tBRCA\nS3\tGBM\nS4\tGBM\nS5\tLUAD\n";

    pub const FM: &str = "\
#row\tgene\tpvalue
1\tTP53\t0.0001
2\tKRAS\t0.3
3\tTTN\t-
";

    pub const CIS_AMP: &str = "MYC\t7\t0.001\n";

    pub const CIS_DEL: &str = "TP53\t2\t0.5\nPTEN\t9\t0.00001\n";

    pub const MUTSIG: &str = "\
# gene\tn\tnpat\tp\tq
TP53\t1000\t40\t1e-14\t1e-10
KRAS\t500\t20\t1e-6\t0.001
TTN\t30000\t90\t0.2\t1
";
}
