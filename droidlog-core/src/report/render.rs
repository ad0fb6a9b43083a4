use crate::report::builder::{CriticalReport, RankedEntry};
use crate::report::constants::{
    RECOMMENDATIONS, REPORT_WIDTH, TIMESTAMP_FORMAT, UNIQUE_MESSAGE_LIMIT,
};

pub fn render_report(report: &CriticalReport) -> String {
    let heavy = "=".repeat(REPORT_WIDTH);
    let light = "-".repeat(REPORT_WIDTH);
    let mut out = String::new();

    //-------------------------------------------------------------------------
    // Header
    //-------------------------------------------------------------------------
    out.push_str(&format!(
        "{heavy}\n\
         ANDROID LOGCAT - CRITICAL ISSUES REPORT\n\
         {heavy}\n\n"
    ));
    out.push_str(&format!(
        "Analysis Date: {}\n\
         Source File: {}\n\
         Total Errors: {}\n\
         Total Warnings: {}\n",
        report.generated_at.format(TIMESTAMP_FORMAT),
        report.source,
        report.total_errors,
        report.total_warnings
    ));
    out.push_str(&format!("\n{heavy}\n\n"));

    //-------------------------------------------------------------------------
    // Priority 1: recurring issues
    //-------------------------------------------------------------------------
    out.push_str(&format!("🚨 PRIORITY 1: MOST FREQUENT ERRORS\n{light}\n"));
    for entry in &report.frequent_errors {
        out.push_str(&format!("  [{}x] {}\n", entry.count, entry.name));
    }
    out.push('\n');

    //-------------------------------------------------------------------------
    // Priority 2: noisiest components
    //-------------------------------------------------------------------------
    out.push_str(&format!(
        "⚠️  PRIORITY 2: COMPONENTS WITH MOST ERRORS\n{light}\n"
    ));
    render_components(&mut out, &report.error_components, "errors");
    out.push('\n');

    //-------------------------------------------------------------------------
    // Priority 3: distinct messages in full
    //-------------------------------------------------------------------------
    out.push_str(&format!(
        "📝 PRIORITY 3: UNIQUE ERROR MESSAGES (First {UNIQUE_MESSAGE_LIMIT})\n{light}\n"
    ));
    for excerpt in &report.unique_errors {
        out.push_str(&format!(
            "\n[{}] {}\n  {}\n",
            excerpt.timestamp, excerpt.tag, excerpt.message
        ));
    }
    out.push('\n');

    //-------------------------------------------------------------------------
    // Warnings
    //-------------------------------------------------------------------------
    out.push_str(&format!("⚡ WARNING SUMMARY\n{light}\n"));
    render_components(&mut out, &report.warning_components, "warnings");
    out.push('\n');

    //-------------------------------------------------------------------------
    // Recommendations
    //-------------------------------------------------------------------------
    out.push_str(&format!("💡 RECOMMENDATIONS\n{light}\n"));
    for (i, advice) in RECOMMENDATIONS.iter().enumerate() {
        out.push_str(&format!("{}. {advice}\n", i + 1));
    }
    out.push_str(&format!("\n{heavy}\n"));

    out
}

fn render_components(out: &mut String, entries: &[RankedEntry], noun: &str) {
    for entry in entries {
        out.push_str(&format!("  {:>3} {noun} - {}\n", entry.count, entry.name));
    }
}
