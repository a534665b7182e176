//! `dork check`: parse only, report what the file resolves to and any warnings.

use anyhow::Result;

use crate::cli::{AppContext, CheckArgs};
use crate::core::parser::{DorkParser, Warning};
use crate::core::run::{collect_overrides, split_positionals};
use crate::infra::config::load_config_or_default;
use crate::infra::utils::Paint;

/// Outcome of checking one file
#[derive(Debug)]
pub struct CheckReport {
    pub queries: usize,
    pub variables: usize,
    pub warnings: Vec<Warning>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub fn check_file(args: &CheckArgs) -> Result<CheckReport> {
    let config = load_config_or_default();
    let overrides = collect_overrides(&args.vars, &config)?;

    let mut parser = DorkParser::with_overrides(overrides);
    let records = parser.parse(&args.file)?;

    Ok(CheckReport {
        queries: records.len(),
        variables: parser.variables().len(),
        warnings: parser.warnings().to_vec(),
    })
}

pub fn run(args: CheckArgs, ctx: &AppContext) -> Result<()> {
    let (file, vars) = split_positionals(args.file, args.vars)?;
    let args = CheckArgs { file, vars };
    let report = check_file(&args)?;
    let paint = Paint::new(!ctx.no_color);

    if !ctx.quiet {
        println!(
            "{}: {} queries, {} variables",
            args.file.display(),
            report.queries,
            report.variables
        );
        for warning in &report.warnings {
            println!("  {} {warning}", paint.yellow("warning:"));
        }
        if report.is_clean() {
            println!("{} no warnings", paint.green("✓"));
        }
    }

    if !report.is_clean() {
        anyhow::bail!("{} warning(s) in {}", report.warnings.len(), args.file.display());
    }
    Ok(())
}
