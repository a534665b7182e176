use clap::Parser;
use dorkscript::cli::{AppContext, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins, then --log-level, then a quiet-aware default
    let default_filter = cli
        .log_level
        .clone()
        .unwrap_or_else(|| if cli.quiet { "error" } else { "warn" }.to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(!cli.no_color)
        .init();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
        dry_run: cli.dry_run,
    };

    let result = match cli.command {
        Commands::Run(args) => dorkscript::core::run_run(args, &ctx),
        Commands::Check(args) => dorkscript::core::check_run(args, &ctx),
        Commands::Engines(args) => dorkscript::core::listing_run(args, &ctx),
        Commands::Init(args) => dorkscript::infra::config::init(args, &ctx),
        Commands::Completions(args) => dorkscript::completion::run(args, &ctx),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(dorkscript::core::run::exit_code_for(&err));
    }
}
