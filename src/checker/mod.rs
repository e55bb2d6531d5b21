mod evaluator;
mod metrics;
mod result;

pub use evaluator::{Evaluator, evaluate};
pub use metrics::{comment_ratio, line_count};
pub use result::{CheckReport, Finding, Metric, RunStatus};

#[cfg(test)]
mod mock_accessor;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
