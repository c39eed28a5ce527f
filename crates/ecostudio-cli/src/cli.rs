use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Sustainable Design Studio Team",
    version,
    about = "EcoStudio CLI - Evaluate sustainable building-design alternatives against project constraints and rank them by sustainability.",
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
    /// Evaluate all design alternatives against project constraints and rank them.
    Evaluate(EvaluateArgs),
    /// Show the strategy and material recommendations for project constraints.
    Recommend(RecommendArgs),
    /// Compare a chosen subset of design archetypes side by side.
    Compare(CompareArgs),
    /// List the built-in project templates, or evaluate one of them.
    Templates(TemplatesArgs),
}

/// Project constraints, from a TOML config file and/or direct flags.
/// Flags override the file; every field must be provided by one of the two.
#[derive(Args, Debug, Clone, Default)]
pub struct ConstraintArgs {
    /// Path to a project configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Floor area in sq ft (supported range 300-2000).
    #[arg(long, value_name = "SQFT")]
    pub area: Option<f64>,

    /// Relative budget level (supported range 0-100).
    #[arg(long, value_name = "LEVEL")]
    pub budget: Option<f64>,

    /// Project climate: cold, moderate, hot, temperate, or arid.
    #[arg(long, value_name = "NAME")]
    pub climate: Option<String>,

    /// Sustainability priority: energy, water, or materials.
    #[arg(long, value_name = "NAME")]
    pub priority: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable tables with labeled tags.
    #[default]
    Table,
    /// The full report as a JSON document.
    Json,
    /// Per-design metric rows as CSV.
    Csv,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub constraints: ConstraintArgs,

    /// Output format for the evaluation report.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `recommend` subcommand.
#[derive(Args, Debug)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub constraints: ConstraintArgs,

    /// Output format (CSV is not available for recommendations).
    #[arg(short, long, value_enum, default_value_t)]
    pub format: ReportFormat,
}

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub constraints: ConstraintArgs,

    /// Comma-separated archetype ids to compare (e.g. design-a,design-c).
    #[arg(long, value_name = "IDS", value_delimiter = ',', required = true)]
    pub ids: Vec<String>,

    /// Output format for the comparison.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: ReportFormat,
}

/// Arguments for the `templates` subcommand.
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Evaluate the named template instead of listing all of them.
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Output format when evaluating a template.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: ReportFormat,
}
