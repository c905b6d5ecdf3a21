use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_RAW_DIR: &str = "data/raw";
pub const DEFAULT_OUT_DIR: &str = "data/processed";

#[derive(Debug, Parser)]
#[command(
    name = "kira-calorimetry",
    version,
    about = "Convert per-subject calorimetry records into metadata and time-series tables"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn into_command(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert raw records and write the output tables (default)
    Run(RunArgs),
    /// Decode and convert without writing anything
    Validate(ValidateArgs),
    /// Print the genotype allow-list
    Genotypes,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, default_value = DEFAULT_RAW_DIR, help = "Directory with one subdirectory per experiment group")]
    pub raw_dir: PathBuf,

    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    #[arg(long, help = "Optional settings JSON shared with the analysis scripts")]
    pub settings: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Also write run_summary.json")]
    pub json: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            raw_dir: PathBuf::from(DEFAULT_RAW_DIR),
            out: PathBuf::from(DEFAULT_OUT_DIR),
            settings: None,
            json: false,
        }
    }
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, default_value = DEFAULT_RAW_DIR, help = "Directory with one subdirectory per experiment group")]
    pub raw_dir: PathBuf,

    #[arg(long)]
    pub settings: Option<PathBuf>,
}
