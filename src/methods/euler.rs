//! Explicit Euler method.

use crate::{Float, core::equation::Equation, error::Error};

/// Derivative evaluations per step.
pub(crate) const NFEV: usize = 1;

/// y[i+1] = y[i] + h f(x[i], y[i])
pub(crate) fn euler<E: Equation>(f: &E, x: Float, y: Float, h: Float) -> Result<Float, Error> {
    Ok(y + h * f.derivative(x, y)?)
}
