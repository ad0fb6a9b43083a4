mod level;
mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use level::*;
pub use parse::*;
pub use types::*;
