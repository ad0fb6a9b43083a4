/// Number of tags listed in the most-active ranking.
pub const TOP_TAGS: usize = 10;

/// Error and warning entries shown before the "... and N more" line.
pub const ISSUE_DISPLAY_LIMIT: usize = 10;

/// Characters of a message shown per error/warning entry in the summary.
pub const SUMMARY_MESSAGE_CHARS: usize = 100;

pub(crate) const SUMMARY_RULE_WIDTH: usize = 60;
