use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use hotnet_common::{
    MusicConfig, MutationHeatConfig, MutsigConfig, OncodriveConfig, OutputConfig, OutputFormat,
    Result, RunConfig, TransformConfig,
};

/// HotNet heat generation: turn mutation calls or significance scores into per-gene heat
#[derive(Parser, Debug)]
#[command(name = "hotnet")]
#[command(version)]
pub struct Cli {
    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a heat job described in a TOML, YAML or JSON file
    Run {
        #[arg(short, long)]
        config: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Mutation frequency heat from SNV and CNA calls
    Mutation {
        #[arg(long)]
        snv_file: PathBuf,

        #[arg(long)]
        cna_file: PathBuf,

        /// Genes to consider (default: all)
        #[arg(long)]
        gene_file: Option<PathBuf>,

        /// Samples to consider, optionally with a type per sample (default: all)
        #[arg(long)]
        sample_file: Option<PathBuf>,

        /// A gene without CNAs needs more SNV samples than this
        #[arg(long)]
        min_freq: Option<usize>,

        #[command(flatten)]
        shared: TransformArgs,
    },

    /// Heat from Oncodrive-FM p-values, optionally with CIS amp/del p-values
    Oncodrive {
        #[arg(long)]
        fm_file: PathBuf,

        #[arg(long)]
        cis_amp_file: PathBuf,

        #[arg(long)]
        cis_del_file: PathBuf,

        #[arg(long)]
        fm_threshold: Option<f64>,

        #[arg(long)]
        cis_threshold: Option<f64>,

        /// Also use the CIS amp/del scores
        #[arg(long)]
        cis: bool,

        #[command(flatten)]
        shared: TransformArgs,
    },

    /// Heat from MutSig q-values
    Mutsig {
        #[arg(long)]
        scores_file: PathBuf,

        #[arg(long)]
        threshold: Option<f64>,

        #[command(flatten)]
        shared: TransformArgs,
    },

    /// Heat from the median of the MuSiC FDR q-values
    Music {
        #[arg(long)]
        scores_file: PathBuf,

        #[arg(long)]
        threshold: Option<f64>,

        /// Heat for genes whose median q-value is 0
        #[arg(long)]
        max_heat: Option<f64>,

        #[command(flatten)]
        shared: TransformArgs,
    },

    /// Restrict an existing JSON heat file to expressed genes
    Filter {
        #[arg(long)]
        heat_file: PathBuf,

        #[arg(long)]
        expression_file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Args, Debug, Default)]
pub struct TransformArgs {
    /// Only keep heat for the genes listed in this file
    #[arg(long)]
    pub expression_file: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Tsv => OutputFormat::Tsv,
        }
    }
}

impl OutputArgs {
    /// Flags given on the command line take precedence over `base`.
    fn apply(self, mut base: OutputConfig) -> OutputConfig {
        if let Some(path) = self.output {
            base.path = Some(path);
        }
        if let Some(format) = self.format {
            base.format = format.into();
        }
        base
    }
}

/// What the binary has to do once arguments are resolved.
#[derive(Debug, PartialEq)]
pub enum Job {
    Heat(RunConfig),
    Filter {
        heat_file: PathBuf,
        expression_file: PathBuf,
        output: OutputConfig,
    },
}

impl Command {
    pub fn into_job(self) -> Result<Job> {
        let (transform, shared) = match self {
            Command::Run { config, output } => {
                let mut run = RunConfig::load(&config)?;
                run.output = output.apply(run.output);
                return Ok(Job::Heat(run));
            }
            Command::Filter { heat_file, expression_file, output } => {
                return Ok(Job::Filter {
                    heat_file,
                    expression_file,
                    output: output.apply(OutputConfig::default()),
                });
            }
            Command::Mutation { snv_file, cna_file, gene_file, sample_file, min_freq, shared } => {
                let mut params = MutationHeatConfig::default();
                if let Some(min_freq) = min_freq {
                    params.min_freq = min_freq;
                }
                (TransformConfig::Mutation { snv_file, cna_file, gene_file, sample_file, params }, shared)
            }
            Command::Oncodrive {
                fm_file,
                cis_amp_file,
                cis_del_file,
                fm_threshold,
                cis_threshold,
                cis,
                shared,
            } => {
                let defaults = OncodriveConfig::default();
                let params = OncodriveConfig {
                    fm_threshold: fm_threshold.unwrap_or(defaults.fm_threshold),
                    cis_threshold: cis_threshold.unwrap_or(defaults.cis_threshold),
                    cis,
                };
                (TransformConfig::Oncodrive { fm_file, cis_amp_file, cis_del_file, params }, shared)
            }
            Command::Mutsig { scores_file, threshold, shared } => {
                let mut params = MutsigConfig::default();
                if let Some(threshold) = threshold {
                    params.threshold = threshold;
                }
                (TransformConfig::Mutsig { scores_file, params }, shared)
            }
            Command::Music { scores_file, threshold, max_heat, shared } => {
                let defaults = MusicConfig::default();
                let params = MusicConfig {
                    threshold: threshold.unwrap_or(defaults.threshold),
                    max_heat: max_heat.unwrap_or(defaults.max_heat),
                };
                (TransformConfig::Music { scores_file, params }, shared)
            }
        };

        Ok(Job::Heat(RunConfig {
            transform,
            expression_file: shared.expression_file,
            output: shared.output.apply(OutputConfig::default()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn job(args: &[&str]) -> Job {
        Cli::try_parse_from(args).unwrap().command.into_job().unwrap()
    }

    #[test]
    fn test_mutsig_defaults() {
        let Job::Heat(run) = job(&["hotnet", "mutsig", "--scores-file", "m.tsv"]) else {
            panic!("expected a heat job");
        };
        assert_eq!(
            run.transform,
            TransformConfig::Mutsig { scores_file: "m.tsv".into(), params: MutsigConfig::default() }
        );
        assert_eq!(run.output, OutputConfig::default());
        assert_eq!(run.expression_file, None);
    }

    #[test]
    fn test_oncodrive_flags() {
        let Job::Heat(run) = job(&[
            "hotnet", "oncodrive",
            "--fm-file", "fm.tsv", "--cis-amp-file", "amp.tsv", "--cis-del-file", "del.tsv",
            "--cis", "--cis-threshold", "0.05",
            "--expression-file", "expr.txt", "-o", "heat.tsv", "--format", "tsv",
        ]) else {
            panic!("expected a heat job");
        };
        match run.transform {
            TransformConfig::Oncodrive { params, .. } => {
                assert!(params.cis);
                assert_eq!(params.cis_threshold, 0.05);
                assert_eq!(params.fm_threshold, OncodriveConfig::default().fm_threshold);
            }
            other => panic!("unexpected transform {}", other.name()),
        }
        assert_eq!(run.expression_file, Some(PathBuf::from("expr.txt")));
        assert_eq!(run.output.format, OutputFormat::Tsv);
        assert_eq!(run.output.path, Some(PathBuf::from("heat.tsv")));
    }

    #[test]
    fn test_run_output_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("run.yaml");
        std::fs::write(
            &config,
            "transform:\n  heat_fn: music\n  scores_file: music.tsv\noutput:\n  format: json\n  path: a.json\n",
        )
        .unwrap();

        let Job::Heat(run) = job(&["hotnet", "run", "--config", config.to_str().unwrap(), "--format", "tsv"])
        else {
            panic!("expected a heat job");
        };
        assert_eq!(run.output.format, OutputFormat::Tsv);
        assert_eq!(run.output.path, Some(PathBuf::from("a.json")));
        assert_eq!(run.transform.name(), "music");
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["hotnet", "-v", "-q", "mutsig", "--scores-file", "m"]).is_err());
        let cli = Cli::try_parse_from(["hotnet", "-vv", "mutsig", "--scores-file", "m"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_mutation_requires_cna_file() {
        assert!(Cli::try_parse_from(["hotnet", "mutation", "--snv-file", "s.snv"]).is_err());
    }
}
