//! Improved Euler (Heun) predictor-corrector method.

use crate::{Float, core::equation::Equation, error::Error};

/// Derivative evaluations per step.
pub(crate) const NFEV: usize = 2;

/// Predict with an Euler step, then average the slopes at both ends:
///
/// y[i+1] = y[i] + h/2 (f(x, y) + f(x + h, y + h f(x, y)))
pub(crate) fn improved_euler<E: Equation>(
    f: &E,
    x: Float,
    y: Float,
    h: Float,
) -> Result<Float, Error> {
    let k1 = f.derivative(x, y)?;
    let k2 = f.derivative(x + h, y + h * k1)?;
    Ok(y + 0.5 * h * (k1 + k2))
}
