//! Critical issues report.
//!
//! A report is synthesized from the error and warning records of one capture:
//! recurring issues are grouped by a shortened `tag: message` key, components
//! are ranked by how many errors and warnings they produced, and the first
//! distinct error messages are listed in full. Rendering is deterministic for a
//! given record sequence and generation time.

mod builder;
mod constants;
mod render;
mod write;

#[cfg(test)]
mod tests;

pub use builder::*;
pub use constants::*;
pub use render::render_report;
pub use write::*;
