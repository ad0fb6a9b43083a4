//! Line-oriented access to captured log files.
//!
//! Input is read as raw bytes so that filtered output can reproduce source
//! lines exactly; decoding to text is lossy and never fails. Output goes
//! through [`AtomicOutput`], which only becomes visible at its destination
//! once the producing operation has finished successfully.

mod lines;
mod output;


pub use lines::*;
pub use output::*;
