//! High-level entry point: run every method on one set of parameters.

pub mod compare;
pub mod options;
pub mod report;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use compare::solve_all;
pub use options::Parameters;
pub use report::{MethodReport, Report, TotalErrors};
