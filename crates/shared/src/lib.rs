pub mod condition;
pub mod error;

pub use condition::{Condition, ConditionId, ConditionList};
pub use error::ConfigError;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
