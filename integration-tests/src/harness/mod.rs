mod fixtures;
pub mod tracing;

pub use fixtures::{Workspace, fixture_path};
pub use tracing::{CapturedEvent, events_with_message, init_test_tracing};
