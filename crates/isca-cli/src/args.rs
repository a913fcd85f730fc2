//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "isca")]
#[command(about = "Run classical and Intention-Space cellular automata and render the result")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one preset or ad-hoc rule and render it
    Run(RunArgs),
    /// List available presets
    List,
    /// Render a classical preset and its Intention-Space counterpart into one directory
    Compare(CompareArgs),
}

/// Output encoding.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Binary greyscale PGM (P5)
    Pgm,
    /// Plain greyscale PGM (P2)
    PgmPlain,
    /// One text line per row
    Ascii,
}

/// Step-0 row.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedArg {
    /// A single live cell in the middle
    Center,
    /// Every cell dead
    Zero,
    /// Random live cells at --density
    Sparse,
}

/// Options shared by `run` and `compare`.
#[derive(Args, Debug, Clone)]
pub struct RenderOpts {
    /// Cells per row
    #[arg(long, default_value = "201")]
    pub size: usize,

    /// Rows to produce, including the seed row
    #[arg(long, default_value = "100")]
    pub steps: usize,

    /// RNG seed for novelty draws and sparse seeding
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Initial row
    #[arg(long = "init", value_enum, default_value = "center")]
    pub init: SeedArg,

    /// Live-cell density for --init sparse
    #[arg(long, default_value = "0.1")]
    pub density: f64,

    /// Output encoding
    #[arg(long, value_enum, default_value = "pgm")]
    pub format: Format,

    /// Pixel block size per cell (PGM only)
    #[arg(long, default_value = "1")]
    pub scale: usize,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Preset name (see `isca list`)
    #[arg(long, conflicts_with = "rule")]
    pub preset: Option<String>,

    /// Ad-hoc elementary rule number, 0-255
    #[arg(long, allow_negative_numbers = true)]
    pub rule: Option<i64>,

    /// With --rule, add the Intention-Space override sources
    #[arg(long, requires = "rule")]
    pub intention: bool,

    /// Category precedence, highest first, e.g. "baseline,pattern-trigger,reflection,novelty"
    #[arg(long)]
    pub order: Option<String>,

    #[command(flatten)]
    pub render: RenderOpts,

    /// Output file. Writes to stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Also write the proposal ledger as text to this file
    #[arg(long)]
    pub audit: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Either preset of the pair, e.g. "rule30" or "is-rule30"
    pub preset: String,

    #[command(flatten)]
    pub render: RenderOpts,

    /// Output directory
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}
