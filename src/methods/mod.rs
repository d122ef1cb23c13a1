//! Fixed-step integration methods and the solver that drives them.

mod euler;
mod exact;
mod improved_euler;
mod rk4;
mod solver;

pub use solver::Solver;

use std::{fmt, str::FromStr};

use crate::error::Error;

/// Integration method selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Closed-form solution sampled on the grid; the reference for all errors.
    Exact,
    /// Explicit Euler, first order.
    Euler,
    /// Improved Euler (Heun), second order.
    ImprovedEuler,
    /// Classic Runge-Kutta 4, fourth order.
    RungeKutta,
}

impl Method {
    /// All methods in display order.
    pub const ALL: [Method; 4] = [
        Method::Exact,
        Method::Euler,
        Method::ImprovedEuler,
        Method::RungeKutta,
    ];

    /// Methods that approximate, i.e. everything except [`Method::Exact`].
    pub const NUMERICAL: [Method; 3] = [Method::Euler, Method::ImprovedEuler, Method::RungeKutta];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Exact => "Exact",
            Method::Euler => "Euler",
            Method::ImprovedEuler => "Improved Euler",
            Method::RungeKutta => "Runge-Kutta",
        }
    }

    /// Plot colour as a single-letter code (g, b, y, r).
    pub fn color(&self) -> char {
        match self {
            Method::Exact => 'g',
            Method::Euler => 'b',
            Method::ImprovedEuler => 'y',
            Method::RungeKutta => 'r',
        }
    }

    pub fn is_numerical(&self) -> bool {
        !matches!(self, Method::Exact)
    }

    /// Asymptotic order of the global error.
    pub fn order(&self) -> Option<u32> {
        match self {
            Method::Exact => None,
            Method::Euler => Some(1),
            Method::ImprovedEuler => Some(2),
            Method::RungeKutta => Some(4),
        }
    }

    /// Derivative evaluations per step.
    pub fn nfev_per_step(&self) -> usize {
        match self {
            Method::Exact => 0,
            Method::Euler => euler::NFEV,
            Method::ImprovedEuler => improved_euler::NFEV,
            Method::RungeKutta => rk4::NFEV,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Method::Exact),
            "euler" => Ok(Method::Euler),
            "improved euler" | "improved-euler" | "improved_euler" | "heun" => {
                Ok(Method::ImprovedEuler)
            }
            "runge-kutta" | "runge kutta" | "runge_kutta" | "rk4" => Ok(Method::RungeKutta),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}
