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
    version,
    about = "RiboPose CLI - A command-line interface for RiboPose, a constraint-driven assembler of RNA three-dimensional structures from rigid nucleotide templates.",
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

    /// Set the number of threads for the parallel search.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble every consistent structure of a problem by exhaustive search.
    Run(RunArgs),
    /// List the built-in assembly problems.
    Problems(ProblemsArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    // --- Core Arguments ---
    /// Name of the problem to assemble (see `ribopose problems`).
    #[arg(short, long, value_name = "NAME")]
    pub problem: Option<String>,

    /// Path to a run configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Template Overrides ---
    /// Override the nucleotide template set with a TOML file.
    /// Defaults to the built-in idealized set.
    #[arg(short = 't', long, value_name = "PATH")]
    pub template_set: Option<PathBuf>,

    // --- Search Overrides ---
    /// Stop after this many solutions instead of enumerating all of them.
    #[arg(short = 'n', long, value_name = "INT")]
    pub max_solutions: Option<usize>,

    /// Override `search.parallel` from the config file.
    #[command(flatten)]
    pub parallel: ParallelSwitch,

    // --- Output ---
    /// Directory to write one PDB file per solution.
    #[arg(short, long, value_name = "PATH")]
    pub output_dir: Option<PathBuf>,

    /// Append a one-line run summary to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub stats: Option<PathBuf>,
}

/// A group to handle mutually exclusive boolean flags for the parallel search.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct ParallelSwitch {
    /// Force the search to fan out across threads at the first residue.
    #[arg(long)]
    pub parallel: bool,
    /// Force a single-threaded search.
    #[arg(long)]
    pub no_parallel: bool,
}

/// Arguments for the `problems` subcommand.
#[derive(Args, Debug)]
pub struct ProblemsArgs {
    /// Build the listing against a custom template set instead of the
    /// built-in one.
    #[arg(short = 't', long, value_name = "PATH")]
    pub template_set: Option<PathBuf>,
}
