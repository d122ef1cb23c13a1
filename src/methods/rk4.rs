//! Classic explicit Runge-Kutta 4 (RK4) step.

use crate::{Float, core::equation::Equation, error::Error};

/// Derivative evaluations per step.
pub(crate) const NFEV: usize = 4;

/// One classical four stage Runge-Kutta step from (x, y) with step size h.
pub(crate) fn rk4<E: Equation>(f: &E, x: Float, y: Float, h: Float) -> Result<Float, Error> {
    // Stage computations
    let k1 = f.derivative(x, y)?;
    let k2 = f.derivative(x + C2 * h, y + h * A21 * k1)?;
    let k3 = f.derivative(x + C3 * h, y + h * A32 * k2)?;
    let k4 = f.derivative(x + C4 * h, y + h * A43 * k3)?;

    Ok(y + h * (B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4))
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
