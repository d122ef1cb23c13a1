//! Errors for the equation model, the integration methods and the analysis.

use thiserror::Error;

use crate::Float;

/// Failures raised by the equation, the solvers and the accuracy analysis.
///
/// Errors are raised where they are detected and propagated unchanged; nothing
/// in the crate clamps, retries or substitutes a default value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The initial value problem cannot seed the equation: `x0 <= 0`, a
    /// non-finite coordinate, or a vanishing denominator while deriving the
    /// integration constant.
    #[error("invalid initial value (x0 = {x0}, y0 = {y0}): {reason}")]
    InvalidInitialValue {
        x0: Float,
        y0: Float,
        reason: &'static str,
    },
    /// An evaluation left the domain of the equation.
    #[error("domain error at x = {x}: {reason}")]
    Domain { x: Float, reason: &'static str },
    /// Caller supplied parameters (interval, step counts) are out of range.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    /// The solver has fewer ordinates than grid points.
    #[error("solution is incomplete: {found} of {expected} ordinates computed")]
    Incomplete { expected: usize, found: usize },
    /// A solver instance is single-use.
    #[error("solver has already been run; construct a new one to solve again")]
    AlreadySolved,
    /// Method name could not be parsed.
    #[error("unknown method '{0}'")]
    UnknownMethod(String),
}

impl Error {
    pub(crate) fn invalid_parameters(msg: impl Into<String>) -> Self {
        Error::InvalidParameters(msg.into())
    }
}
