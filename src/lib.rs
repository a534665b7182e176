//! **dorkscript** - Version control for search strategies
//!
//! A `.dork` file is a list of search queries with a few directives
//! (`@engine`, `@var`, `@include`). The parser resolves it into ordered
//! query records; the URL builder turns each record into a search URL.

/// Command-line interface with clap integration
pub mod cli;

/// Shell completion generation
pub mod completion;

/// Core pipeline - directive parsing, engine registry, URL building
pub mod core {
    /// Static engine id → base URL registry
    pub mod engines;
    pub use engines::{Category, DEFAULT_ENGINE, Engine};

    /// Variable table and `$NAME` substitution
    pub mod vars;
    pub use vars::Variables;

    /// `.dork` directive parser (comments, @engine, @var, @include)
    pub mod parser;
    pub use parser::{DorkParser, ParseError, QueryRecord, Warning, parse_file};

    /// Per-engine query encoding and URL assembly
    pub mod url;
    pub use url::{Encoding, build_url};

    /// Platform browser launching
    pub mod browser;

    /// `run` command: print, export, or open resolved queries
    pub mod run;
    pub use run::run as run_run;

    /// `check` command: parse and report warnings
    pub mod check;
    pub use check::run as check_run;

    /// `engines` command: categorized registry listing
    pub mod listing;
    pub use listing::run as listing_run;
}

/// Infrastructure - configuration, output files, terminal helpers
pub mod infra {
    /// Configuration management with TOML support
    pub mod config;
    pub use self::config::{Config, init as config_init, load_config, load_config_or_default};

    /// URL list serialization
    pub mod io;
    pub use io::write_url_list;

    /// Utility functions and helpers for common operations
    pub mod utils;
}

// Strategic re-exports for clean CLI interface
pub use crate::cli::{AppContext, Cli, Commands};
pub use crate::infra::{Config, load_config};

// Core types for external consumers
pub use crate::core::{DorkParser, QueryRecord, Variables, build_url, parse_file};
