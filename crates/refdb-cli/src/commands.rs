use anyhow::{Context, Result};
use tracing::{info, info_span};

use refdb_cli::render::{render_json, render_schemas, render_tables, render_text};
use refdb_ingest::CsvLoader;
use refdb_model::ValidationReport;
use refdb_schema::SchemaRegistry;
use refdb_validate::Validator;

use crate::cli::{CheckArgs, ReportFormatArg};

pub fn run_schemas() -> Result<()> {
    let registry = SchemaRegistry::builtin().context("load schemas")?;
    println!("{}", render_schemas(&registry));
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<ValidationReport> {
    let registry = SchemaRegistry::builtin().context("load schemas")?;
    let validator = Validator::new(&registry);
    let span = info_span!("check", files = args.files.len());
    let _guard = span.enter();

    let report = if args.files.is_empty() {
        info!(dir = %args.database_dir.display(), "checking default datasets");
        validator.run_defaults(&args.database_dir, &CsvLoader)?
    } else {
        validator.run(&args.files, &CsvLoader)?
    };
    Ok(report)
}

pub fn print_report(report: &ValidationReport, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Text => {
            let rendered = render_text(report);
            if report.passed() {
                print!("{rendered}");
            } else {
                eprint!("{rendered}");
            }
        }
        ReportFormatArg::Table => print!("{}", render_tables(report)),
        ReportFormatArg::Json => {
            println!("{}", render_json(report).context("serialize report")?);
        }
    }
    Ok(())
}
