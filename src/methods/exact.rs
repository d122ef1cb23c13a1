//! Closed-form "method": samples the exact solution on the grid.

use crate::{Float, core::equation::Equation, error::Error};

/// y[i+1] = y(x[i+1]); the previous ordinate is not used.
pub(crate) fn exact<E: Equation>(f: &E, xnext: Float) -> Result<Float, Error> {
    f.exact_solution(xnext)
}
