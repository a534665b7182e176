use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shared application context for global flags
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    pub quiet: bool,    // global --quiet
    pub no_color: bool, // global --no-color
    pub dry_run: bool,  // global --dry-run
}

#[derive(Parser)]
#[command(name = "dork")]
#[command(
    about = "Version control for search strategies: queries in a file, opened in your browser"
)]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Show what would be done without opening browsers or writing files
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Log filter when RUST_LOG is unset (e.g. warn, debug, dorkscript=trace)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the queries in a .dork file
    Run(RunArgs),

    /// Parse a .dork file and report warnings without building URLs
    Check(CheckArgs),

    /// List available search engines
    Engines(EnginesArgs),

    /// Initialize a dorkscript.toml config file
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Query file to run
    pub file: PathBuf,

    /// Variable overrides (NAME=value), applied before any @var; may also precede FILE
    #[arg(value_name = "NAME=value")]
    pub vars: Vec<String>,

    /// Only run the first N queries
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,

    /// Show queries and URLs without opening the browser
    #[arg(short, long)]
    pub preview: bool,

    /// Use this engine for every query
    #[arg(short, long, value_name = "ENGINE")]
    pub engine: Option<String>,

    /// Seconds between browser launches (config default: 0.5)
    #[arg(short, long, value_name = "SECS")]
    pub delay: Option<f64>,

    /// Write URLs to this file (browser still opens unless --preview)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print only URLs, one per line, and open nothing
    #[arg(short, long, conflicts_with = "json")]
    pub urls: bool,

    /// Print resolved queries with URLs as JSON and open nothing
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Query file to check
    pub file: PathBuf,

    /// Variable overrides (NAME=value)
    #[arg(value_name = "NAME=value")]
    pub vars: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct EnginesArgs {
    /// Only list engines in this category (e.g. "security", "Code & Dev")
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory to initialize config in
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Output directory; if omitted and --stdout not set, prints error
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Print completion script to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}
