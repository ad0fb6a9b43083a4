//! Device log acquisition through `adb logcat`.
//!
//! ```text
//! adb logcat -c            (clear the device buffer)
//!   -> adb logcat -v time  (child process)
//!      -> file             capture: stdout redirected, bytes counted
//!      -> reader thread    monitor: lines sent over mpsc, pattern matched
//!      -> terminal         stream: stdout inherited
//! ```
//!
//! Supervising loops stop on Ctrl+C, when the child exits, or (for capture and
//! monitor) at a deadline. The child is always reaped before returning.

mod adb;
mod interrupt;
mod monitor;
mod session;
mod stream;

#[cfg(test)]
mod tests;

pub use adb::*;
pub use interrupt::*;
pub use monitor::*;
pub use session::*;
pub use stream::*;
