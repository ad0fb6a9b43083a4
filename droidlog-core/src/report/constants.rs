/// Message characters in the key used to count recurring issues.
pub const ISSUE_KEY_CHARS: usize = 50;

/// Message characters in the key used to de-duplicate the full-message listing.
pub const DEDUP_KEY_CHARS: usize = 80;

/// Entries in each ranked section.
pub const RANKING_LIMIT: usize = 10;

/// Distinct error messages listed in full.
pub const UNIQUE_MESSAGE_LIMIT: usize = 20;

pub const RECOMMENDATIONS: &[&str] = &[
    "Focus on components with repeated errors",
    "Check network connectivity (DNS resolution failures)",
    "Verify app permissions for socket operations",
    "Review system resource configurations",
];

pub(crate) const REPORT_WIDTH: usize = 80;
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
