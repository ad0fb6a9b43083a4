pub mod capture;
pub mod cli;
pub mod conf;
pub mod error;
pub mod filter;
pub mod logging;
pub mod record;
pub mod report;
pub mod search;
pub mod source;
pub mod stats;

pub use error::{AnalyzerError, Result};
