//! `dork run`: parse a query file, build URLs, then print, export, or open.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::{AppContext, RunArgs};
use crate::core::browser::Launcher;
use crate::core::engines;
use crate::core::parser::{DorkParser, ParseError, QueryRecord};
use crate::core::url::build_url;
use crate::core::vars::{self, Variables};
use crate::infra::config::{Config, load_config_or_default};
use crate::infra::io::{truncate_display, write_url_list, write_urls};
use crate::infra::utils::Paint;

/// A query record paired with its final URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedQuery {
    #[serde(flatten)]
    pub record: QueryRecord,
    pub url: String,
}

impl ResolvedQuery {
    /// Build the URL, optionally forcing a different engine
    pub fn resolve(mut record: QueryRecord, engine_override: Option<&str>) -> Self {
        if let Some(engine) = engine_override {
            record.engine = engine.to_string();
        }
        let url = build_url(&record.query, &record.engine);
        Self { record, url }
    }
}

/// Exit status for a failed command: 2 when an input file is missing
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ParseError>() {
        Some(ParseError::FileNotFound(_)) => 2,
        _ => 1,
    }
}

/// Overrides from CLI `NAME=value` tokens, then config defaults beneath them
pub fn collect_overrides(tokens: &[String], config: &Config) -> Result<Variables> {
    let mut overrides = Variables::new();

    for token in tokens {
        let (name, value) = vars::parse_assignment(token)
            .with_context(|| format!("Invalid variable override '{token}', expected NAME=value"))?;
        overrides.define(&name, &value);
    }

    for (name, value) in &config.variables {
        overrides.define(name, value);
    }

    Ok(overrides)
}

/// Pick the query file out of the positionals so `NAME=value` tokens may
/// come before it (`dork run TARGET=x recon.dork`). An existing path is
/// always taken as the file.
pub fn split_positionals(file: PathBuf, vars: Vec<String>) -> Result<(PathBuf, Vec<String>)> {
    let first = file.to_string_lossy().into_owned();
    if file.exists() || vars::parse_assignment(&first).is_none() {
        return Ok((file, vars));
    }

    let Some(pos) = vars.iter().position(|t| vars::parse_assignment(t).is_none()) else {
        anyhow::bail!("No query file given; '{first}' looks like a NAME=value override");
    };

    let mut tokens = vars;
    let file = PathBuf::from(tokens.remove(pos));
    tokens.insert(0, first);
    Ok((file, tokens))
}

/// Lowercase and validate an engine override against the registry
pub fn resolve_engine_override(
    cli: Option<&str>,
    config: &Config,
) -> Result<Option<String>> {
    let Some(engine) = cli.or(config.default_engine.as_deref()) else {
        return Ok(None);
    };

    let engine = engine.to_lowercase();
    if !engines::is_known(&engine) {
        anyhow::bail!("Unknown engine '{engine}'. Run `dork engines` to see available options.");
    }
    Ok(Some(engine))
}

pub fn run(args: RunArgs, ctx: &AppContext) -> Result<()> {
    let config = load_config_or_default();
    run_with_config(args, ctx, &config)
}

pub fn run_with_config(mut args: RunArgs, ctx: &AppContext, config: &Config) -> Result<()> {
    (args.file, args.vars) = split_positionals(args.file, args.vars)?;
    let engine_override = resolve_engine_override(args.engine.as_deref(), config)?;
    let overrides = collect_overrides(&args.vars, config)?;
    let shown_vars: Vec<(String, String)> = overrides
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let mut parser = DorkParser::with_overrides(overrides);
    let mut records = parser.parse(&args.file)?;

    if records.is_empty() {
        if args.json {
            println!("[]");
        } else if !args.urls {
            eprintln!("No queries found in file.");
        }
        return Ok(());
    }

    // -n 0 means no limit
    if let Some(limit) = args.limit.filter(|&n| n > 0) {
        records.truncate(limit);
    }

    let resolved: Vec<ResolvedQuery> = records
        .into_iter()
        .map(|r| ResolvedQuery::resolve(r, engine_override.as_deref()))
        .collect();
    let urls: Vec<&str> = resolved.iter().map(|r| r.url.as_str()).collect();

    info!(count = resolved.len(), file = %args.file.display(), "resolved queries");

    if args.urls {
        write_urls(std::io::stdout().lock(), &urls).context("Failed to write URLs to stdout")?;
        return Ok(());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&resolved).context("Failed to serialize queries")?;
        println!("{json}");
        return Ok(());
    }

    let paint = Paint::new(!ctx.no_color);
    let secs = args.delay.unwrap_or(config.delay_secs);
    let delay = if secs.is_finite() && secs > 0.0 {
        Duration::from_secs_f64(secs)
    } else {
        Duration::ZERO
    };
    let launcher = Launcher::resolve(config.browser.as_deref());

    if let Some(output) = &args.output {
        export(output, &urls, ctx, &paint)?;
        if !args.preview {
            let opened = open_urls(&launcher, &urls, delay, ctx)?;
            if !ctx.quiet {
                println!("Opened {opened} searches in your browser.");
            }
        }
        return Ok(());
    }

    if !ctx.quiet {
        let listing = render_listing(
            &args.file,
            &shown_vars,
            &resolved,
            args.preview,
            config.display_width,
            &paint,
        );
        print!("{listing}");
    }

    if args.preview {
        if !ctx.quiet {
            println!("  {}\n", paint.dim("(Preview mode - no browsers opened)"));
        }
        return Ok(());
    }

    let opened = open_urls(&launcher, &urls, delay, ctx)?;
    if !ctx.quiet {
        println!("  Opened {opened} searches in your browser.\n");
    }
    Ok(())
}

fn export(output: &Path, urls: &[&str], ctx: &AppContext, paint: &Paint) -> Result<()> {
    if ctx.dry_run {
        if !ctx.quiet {
            println!(
                "{}",
                paint.yellow(&format!(
                    "DRY RUN: Would write {} URLs to {}",
                    urls.len(),
                    output.display()
                ))
            );
        }
        return Ok(());
    }

    write_url_list(output, urls)?;
    if !ctx.quiet {
        println!("{} Wrote {} URLs to {}", paint.green("✓"), urls.len(), output.display());
    }
    Ok(())
}

fn open_urls(
    launcher: &Launcher,
    urls: &[&str],
    delay: Duration,
    ctx: &AppContext,
) -> Result<usize> {
    if ctx.dry_run {
        if !ctx.quiet {
            println!("DRY RUN: Would open {} URLs with {}", urls.len(), launcher.program());
        }
        return Ok(0);
    }
    launcher.open_all(urls, delay)
}

/// Human-readable listing of the resolved queries
pub fn render_listing(
    file: &Path,
    variables: &[(String, String)],
    resolved: &[ResolvedQuery],
    preview: bool,
    width: usize,
    paint: &Paint,
) -> String {
    let mut out = String::new();
    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let _ = writeln!(out, "\n  {}", paint.bold(&format!("DorkScript: {name}")));
    let _ = writeln!(out, "  {}", "=".repeat(60));

    if !variables.is_empty() {
        let joined: Vec<String> = variables.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let _ = writeln!(out, "  Variables: {}", joined.join(", "));
    }

    let _ = writeln!(out, "  Queries: {}\n", resolved.len());

    for (i, item) in resolved.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {}", i + 1, truncate_display(&item.record.query, width));
        let _ = writeln!(out, "      {}", paint.cyan(&format!("@{}", item.record.engine)));
        if preview {
            let _ = writeln!(out, "      {}", paint.dim(&item.url));
        }
        out.push('\n');
    }

    out
}
