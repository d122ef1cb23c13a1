//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use ivp_compare::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `Equation`, `DifferentialEquation`, `InitialValueProblem`, `Status`.
//! - Methods: `Method`, `Solver`.
//! - Analysis: `local_errors`, `total_approximation_error`, `observed_order`.
//! - High-level API: `solve_all`, `Parameters`, `Report`, `MethodReport`, `TotalErrors`.
//!

pub use crate::analysis::{local_errors, max_error, observed_order, total_approximation_error};
pub use crate::core::{
    equation::{DifferentialEquation, Equation},
    ivp::InitialValueProblem,
    status::Status,
};
pub use crate::error::Error;
pub use crate::methods::{Method, Solver};
pub use crate::solve::{MethodReport, Parameters, Report, TotalErrors, solve_all};
