use crate::error::{AnalyzerError, Result};
use crate::report::builder::ReportBuilder;
use crate::report::render::render_report;
use crate::source::{AtomicOutput, open_source, records};
use chrono::Local;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub output: PathBuf,
    pub total_errors: u64,
    pub total_warnings: u64,
    pub unique_error_types: usize,
}

/// Builds the critical issues report for `input` and writes it to `output`.
///
/// Nothing is written when `input` cannot be read.
pub fn write_report(input: &Path, output: &Path) -> Result<ReportOutcome> {
    let mut builder = ReportBuilder::new();
    for record in records(open_source(input)?) {
        let record = record.map_err(|e| AnalyzerError::read(input, e))?;
        builder.push(&record);
    }

    let report = builder.finish(&input.display().to_string(), Local::now());

    let mut out = AtomicOutput::create(output)?;
    out.write_all(render_report(&report).as_bytes())
        .map_err(|e| AnalyzerError::write(output, e))?;
    let output = out.commit()?;

    tracing::info!(
        source = %input.display(),
        output = %output.display(),
        errors = report.total_errors,
        warnings = report.total_warnings,
        unique_error_types = report.unique_error_types,
        "critical report written"
    );

    Ok(ReportOutcome {
        output,
        total_errors: report.total_errors,
        total_warnings: report.total_warnings,
        unique_error_types: report.unique_error_types,
    })
}
