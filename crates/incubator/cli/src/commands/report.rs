//! Report generation

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use chrono::Utc;
use incubator_runtime::{render_text, to_csv, Incubator, ReportKind};

/// Execute the report command
pub fn execute(
    incubator: &Incubator,
    kind: ReportKind,
    period: &str,
    csv: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let report = incubator.report(kind, period, Utc::now());

    match format {
        OutputFormat::Table if csv => print!("{}", to_csv(&report)),
        OutputFormat::Table => print!("{}", render_text(&report)),
        _ => output::print_structured(&report, format)?,
    }
    Ok(())
}
