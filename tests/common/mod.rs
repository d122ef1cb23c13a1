#![allow(dead_code)]

use ivp_compare::{Float, prelude::*};

/// Reference problem y(1) = 2; its constant is 0 and y = 2/x.
pub fn default_equation() -> DifferentialEquation {
    equation(1.0, 2.0)
}

/// y(1) = 3, constant 0.5: a problem with a non-trivial exact solution.
pub fn curved_equation() -> DifferentialEquation {
    equation(1.0, 3.0)
}

pub fn equation(x0: Float, y0: Float) -> DifferentialEquation {
    DifferentialEquation::new(InitialValueProblem::new(x0, y0).unwrap()).unwrap()
}

/// y' = y with y = y0 e^(x - x0).
pub struct Exponential {
    pub ivp: InitialValueProblem,
}

impl Exponential {
    pub fn new(x0: Float, y0: Float) -> Self {
        Self {
            ivp: InitialValueProblem::new(x0, y0).unwrap(),
        }
    }
}

impl Equation for Exponential {
    fn ivp(&self) -> &InitialValueProblem {
        &self.ivp
    }

    fn set_ivp(&mut self, ivp: InitialValueProblem) -> Result<(), Error> {
        self.ivp = ivp;
        Ok(())
    }

    fn derivative(&self, _x: Float, y: Float) -> Result<Float, Error> {
        Ok(y)
    }

    fn exact_solution(&self, x: Float) -> Result<Float, Error> {
        Ok(self.ivp.y0() * (x - self.ivp.x0()).exp())
    }
}

pub fn max(values: &[Float]) -> Float {
    values.iter().copied().fold(0.0, Float::max)
}

pub fn min(values: &[Float]) -> Float {
    values.iter().copied().fold(Float::INFINITY, Float::min)
}
