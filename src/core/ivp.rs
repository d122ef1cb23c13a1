//! Initial value problem: the starting point (x0, y0) of the integration.

use crate::{Float, error::Error};

/// Immutable starting point of an integration.
///
/// The governing equation is undefined at `x = 0` and the exact solution uses
/// `x^(4/3)`, so only problems with `x0 > 0` can be constructed. Changing the
/// problem means building a new value and handing it to
/// [`Equation::set_ivp`](crate::core::equation::Equation::set_ivp).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialValueProblem {
    x0: Float,
    y0: Float,
}

impl InitialValueProblem {
    pub fn new(x0: Float, y0: Float) -> Result<Self, Error> {
        if !x0.is_finite() || !y0.is_finite() {
            return Err(Error::InvalidInitialValue {
                x0,
                y0,
                reason: "initial values must be finite",
            });
        }
        if x0 <= 0.0 {
            return Err(Error::InvalidInitialValue {
                x0,
                y0,
                reason: "x0 must be positive",
            });
        }
        Ok(Self { x0, y0 })
    }

    pub fn x0(&self) -> Float {
        self.x0
    }

    pub fn y0(&self) -> Float {
        self.y0
    }
}
