//! Parameters of a comparison run

use bon::Builder;

use crate::{Float, core::ivp::InitialValueProblem, error::Error};

#[derive(Builder, Clone, Debug, PartialEq)]
/// Parameters of a comparison run.
///
/// Defaults are the classic demonstration problem: y(1) = 2 on [1, 5] with 10
/// steps, and total errors over 3..=10 steps.
pub struct Parameters {
    /// Initial abscissa. Must be positive.
    #[builder(default = 1.0)]
    pub x0: Float,
    /// Initial ordinate.
    #[builder(default = 2.0)]
    pub y0: Float,
    /// Upper bound X of the interval. Must exceed `x0`.
    #[builder(default = 5.0)]
    pub xend: Float,
    /// Step count of the solutions and local errors.
    #[builder(default = 10)]
    pub n: usize,
    /// First step count of the total error sweep.
    #[builder(default = 3)]
    pub n0: usize,
    /// Last step count (inclusive) of the total error sweep.
    #[builder(default = 10)]
    pub nend: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Parameters {
    /// Check every parameter, stopping at the first violation.
    ///
    /// Problems with the starting point are reported as
    /// [`Error::InvalidInitialValue`], everything else as
    /// [`Error::InvalidParameters`].
    pub fn validate(&self) -> Result<(), Error> {
        let (x0, y0) = (self.x0, self.y0);
        if !x0.is_finite() || !y0.is_finite() {
            return Err(Error::InvalidInitialValue {
                x0,
                y0,
                reason: "initial values must be finite",
            });
        }
        if !self.xend.is_finite() {
            return Err(Error::invalid_parameters("X must be finite"));
        }
        if x0 >= self.xend {
            return Err(Error::invalid_parameters("X must be greater than x0"));
        }
        if x0 <= 0.0 {
            return Err(Error::InvalidInitialValue {
                x0,
                y0,
                reason: "x0 must be positive",
            });
        }
        if self.xend <= 0.0 {
            return Err(Error::invalid_parameters("X must be a positive number"));
        }
        if self.n < 2 {
            return Err(Error::invalid_parameters("n must be greater than 1"));
        }
        if self.n0 < 2 {
            return Err(Error::invalid_parameters("n0 must be greater than 1"));
        }
        if self.nend <= self.n0 {
            return Err(Error::invalid_parameters("N must be greater than n0"));
        }
        Ok(())
    }

    pub fn ivp(&self) -> Result<InitialValueProblem, Error> {
        InitialValueProblem::new(self.x0, self.y0)
    }
}
