mod criteria;
mod run;

#[cfg(test)]
mod tests;

pub use criteria::*;
pub use run::*;
