//! Fixed-step numerical methods (Euler, Improved Euler, Runge-Kutta 4) for the
//! initial value problem y' = -y^2/3 - 2/(3x^2), y(x0) = y0, compared against
//! its closed-form solution.
//!
//! The crate is organised bottom-up:
//! - [`core`]: the initial value problem, the [`Equation`] capability set and
//!   the concrete [`DifferentialEquation`].
//! - [`methods`]: the [`Method`] tag and the single-use [`Solver`].
//! - [`analysis`]: local errors and total approximation errors.
//! - [`solve`]: [`Parameters`] and [`solve_all`], which runs every method and
//!   collects a [`Report`].

pub mod analysis;
pub mod core;
pub mod error;
pub mod methods;
pub mod prelude;
pub mod solve;

#[cfg(feature = "python")]
mod python;

pub use crate::core::{
    equation::{DifferentialEquation, Equation},
    ivp::InitialValueProblem,
    status::Status,
};
pub use error::Error;
pub use methods::{Method, Solver};
pub use solve::{MethodReport, Parameters, Report, TotalErrors, solve_all};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

#[cfg(not(any(feature = "f32", feature = "f64")))]
compile_error!("enable exactly one Float precision feature: 'f32' or 'f64'");

/// Change this to f128, f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
