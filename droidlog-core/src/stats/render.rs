use crate::stats::aggregation::{IssueEntry, LogStats};
use crate::stats::constants::{ISSUE_DISPLAY_LIMIT, SUMMARY_RULE_WIDTH, TOP_TAGS};

/// Renders the console summary for `stats` read from `source`.
pub fn render_summary(stats: &LogStats, source: &str) -> String {
    let rule = "=".repeat(SUMMARY_RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!(
        "\n{rule}\n\
         LOGCAT ANALYSIS: {source}\n\
         {rule}\n\n"
    ));

    out.push_str("📊 LOG LEVEL DISTRIBUTION:\n");
    for share in stats.level_shares() {
        out.push_str(&format!(
            "  {} ({:<8}): {:>6} ({:>5.2}%)\n",
            share.level.letter(),
            share.level.label(),
            share.count,
            share.percent
        ));
    }

    out.push_str(&format!("\n📝 TOTAL LOG ENTRIES: {}\n", stats.total));

    out.push_str(&format!("\n🏷️  TOP {TOP_TAGS} MOST ACTIVE TAGS:\n"));
    for (tag, count) in stats.top_tags() {
        out.push_str(&format!("  {count:>6} - {tag}\n"));
    }

    render_issues(&mut out, "❌ ERRORS", "errors", &stats.errors);
    render_issues(&mut out, "⚠️  WARNINGS", "warnings", &stats.warnings);

    out.push_str(&format!("\n{rule}\n\n"));
    out
}

fn render_issues(out: &mut String, title: &str, noun: &str, issues: &[IssueEntry]) {
    if issues.is_empty() {
        return;
    }

    out.push_str(&format!("\n{title} FOUND ({} total):\n", issues.len()));
    for (i, issue) in issues.iter().take(ISSUE_DISPLAY_LIMIT).enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, issue.summary()));
    }

    if issues.len() > ISSUE_DISPLAY_LIMIT {
        out.push_str(&format!(
            "  ... and {} more {noun}\n",
            issues.len() - ISSUE_DISPLAY_LIMIT
        ));
    }
}
