use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Synthseq Developers",
    version,
    about = "Synthseq CLI - Generate synthetic protein sequences over a grid of positive, negative, and neutral residue fractions.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sweep the composition grid and write the labeled sequence dataset.
    Generate(GenerateArgs),
    /// Resolve the residue counts for a single composition without permuting them.
    Compose(ComposeArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path of the CSV dataset to write.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of residues in every generated sequence.
    #[arg(short = 'l', long, value_name = "INT")]
    pub protein_length: Option<usize>,

    /// Number of subdivisions of the [0, 1] fraction axis.
    #[arg(short, long, value_name = "INT")]
    pub n_bins: Option<usize>,

    /// Seed the permutation source for a reproducible dataset.
    /// Without a seed every run produces different sequences.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Print every generated record to stdout.
    #[arg(long)]
    pub echo: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S n-bins=10
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `compose` subcommand.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Fraction of positively charged residues (R, K).
    #[arg(short, long, value_name = "FLOAT")]
    pub positive: f64,

    /// Fraction of negatively charged residues (D, E).
    #[arg(short, long, value_name = "FLOAT")]
    pub negative: f64,

    /// Sequence length.
    #[arg(short, long, value_name = "INT", default_value_t = 100)]
    pub length: usize,
}
