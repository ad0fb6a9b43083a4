//! Level, tag and issue statistics over a captured log.
//!
//! The processing flow is:
//!
//! source lines
//! parse_line
//! LogRecord
//! StatsAggregator
//! LogStats
//! render_summary
//!
//! Aggregation is a single pass that keeps only counters plus the error and
//! warning entries; nothing is retained between invocations.

mod aggregation;
mod constants;
mod counter;
mod render;

#[cfg(test)]
mod tests;

pub use aggregation::*;
pub use constants::*;
pub use counter::*;
pub use render::render_summary;
