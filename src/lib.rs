pub mod config;
pub mod error_utils;
pub mod plan;
pub mod protocol;
pub mod query;
pub mod tree;
pub mod validation;

pub use plan::{ValidationPlan, build_plan};
pub use tree::{Tree, TreeError, load_tree};
pub use validation::validate_plan;

#[cfg(test)]
pub(crate) mod test_support;
