//! The differential equation y' = -y^2/3 - 2/(3x^2) and its closed-form solution.

use log::debug;

use crate::{Float, core::ivp::InitialValueProblem, error::Error};

/// Capability set every integration method relies on.
///
/// Implement this trait to supply the right-hand side `y' = f(x, y)` and the
/// exact solution the numerical results are compared against. The crate ships
/// exactly one implementation, [`DifferentialEquation`]; the trait exists so
/// tests can substitute an equation with a known answer.
///
/// # Example
///
/// ```ignore
/// struct Growth { ivp: InitialValueProblem }
/// impl Equation for Growth {
///     fn ivp(&self) -> &InitialValueProblem { &self.ivp }
///     fn set_ivp(&mut self, ivp: InitialValueProblem) -> Result<(), Error> {
///         self.ivp = ivp;
///         Ok(())
///     }
///     fn derivative(&self, _x: Float, y: Float) -> Result<Float, Error> { Ok(y) }
///     fn exact_solution(&self, x: Float) -> Result<Float, Error> {
///         Ok(self.ivp.y0() * (x - self.ivp.x0()).exp())
///     }
/// }
/// ```
pub trait Equation {
    /// Initial value problem the equation is currently seeded with.
    fn ivp(&self) -> &InitialValueProblem;

    /// Replace the initial value problem. On error the previous problem stays
    /// in effect.
    fn set_ivp(&mut self, ivp: InitialValueProblem) -> Result<(), Error>;

    /// Right-hand side f(x, y).
    fn derivative(&self, x: Float, y: Float) -> Result<Float, Error>;

    /// Closed-form solution y(x) satisfying the initial value problem.
    fn exact_solution(&self, x: Float) -> Result<Float, Error>;
}

/// y' = -y^2/3 - 2/(3x^2), solved exactly by `y = 2/x + c / (x^(4/3) - c x)`.
///
/// The constant `c` is derived from the initial value problem and is replaced
/// together with it, so it always matches the problem returned by
/// [`Equation::ivp`].
#[derive(Debug, Clone, PartialEq)]
pub struct DifferentialEquation {
    ivp: InitialValueProblem,
    c: Float,
}

impl DifferentialEquation {
    pub fn new(ivp: InitialValueProblem) -> Result<Self, Error> {
        let c = constant(&ivp)?;
        Ok(Self { ivp, c })
    }

    /// Integration constant of the closed-form solution.
    pub fn constant(&self) -> Float {
        self.c
    }
}

impl Equation for DifferentialEquation {
    fn ivp(&self) -> &InitialValueProblem {
        &self.ivp
    }

    fn set_ivp(&mut self, ivp: InitialValueProblem) -> Result<(), Error> {
        let c = constant(&ivp)?;
        self.ivp = ivp;
        self.c = c;
        Ok(())
    }

    fn derivative(&self, x: Float, y: Float) -> Result<Float, Error> {
        if x == 0.0 {
            return Err(Error::Domain {
                x,
                reason: "derivative is undefined at x = 0",
            });
        }
        Ok(-(y * y) / 3.0 - 2.0 / (3.0 * x * x))
    }

    fn exact_solution(&self, x: Float) -> Result<Float, Error> {
        let denom = x.powf(4.0 / 3.0) - self.c * x;
        if denom == 0.0 {
            return Err(Error::Domain {
                x,
                reason: "exact solution denominator vanishes",
            });
        }
        let y = 2.0 / x + self.c / denom;
        if !y.is_finite() {
            return Err(Error::Domain {
                x,
                reason: "exact solution is not finite",
            });
        }
        Ok(y)
    }
}

/// c = x0^(4/3) (x0 y0 - 2) / (x0^2 y0 - x0)
fn constant(ivp: &InitialValueProblem) -> Result<Float, Error> {
    let (x0, y0) = (ivp.x0(), ivp.y0());
    if x0 <= 0.0 {
        return Err(Error::InvalidInitialValue {
            x0,
            y0,
            reason: "x0 must be positive",
        });
    }

    let denom = x0 * x0 * y0 - x0;
    if denom == 0.0 {
        return Err(Error::InvalidInitialValue {
            x0,
            y0,
            reason: "constant could not be determined",
        });
    }

    let c = x0.powf(4.0 / 3.0) * (x0 * y0 - 2.0) / denom;
    debug!("derived constant c = {c} for x0 = {x0}, y0 = {y0}");
    Ok(c)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn equation(x0: Float, y0: Float) -> DifferentialEquation {
        DifferentialEquation::new(InitialValueProblem::new(x0, y0).unwrap()).unwrap()
    }

    #[test]
    fn default_problem_has_zero_constant() {
        let de = equation(1.0, 2.0);
        assert_eq!(de.constant(), 0.0);
        assert_relative_eq!(de.exact_solution(4.0).unwrap(), 0.5);
    }

    #[test]
    fn boundary_condition_holds() {
        for (x0, y0) in [(1.0, 2.0), (1.0, 3.0), (2.0, -1.0), (0.5, 7.0), (3.0, 0.25)] {
            let de = equation(x0, y0);
            let y = de.exact_solution(x0).unwrap();
            assert_relative_eq!(y, y0, max_relative = 1e4 * Float::EPSILON);
        }
    }

    #[test]
    fn degenerate_constant_is_rejected() {
        let ivp = InitialValueProblem::new(1.0, 1.0).unwrap();
        let err = DifferentialEquation::new(ivp).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInitialValue {
                x0: 1.0,
                y0: 1.0,
                reason: "constant could not be determined",
            }
        );
    }

    #[test]
    fn failed_set_ivp_keeps_previous_state() {
        let mut de = equation(1.0, 3.0);
        let before = de.clone();
        let bad = InitialValueProblem::new(2.0, 0.5).unwrap();
        assert!(de.set_ivp(bad).is_err());
        assert_eq!(de, before);

        de.set_ivp(InitialValueProblem::new(1.0, 2.0).unwrap()).unwrap();
        assert_eq!(de.ivp().y0(), 2.0);
        assert_eq!(de.constant(), 0.0);
    }

    #[test]
    fn derivative_rejects_zero_abscissa() {
        let de = equation(1.0, 2.0);
        assert!(matches!(de.derivative(0.0, 1.0), Err(Error::Domain { .. })));
    }

    #[test]
    fn exact_solution_satisfies_the_equation() {
        let de = equation(1.0, 3.0);
        // central differences balance truncation and rounding at h ~ eps^(1/3)
        let h = Float::EPSILON.cbrt();
        for x in [1.5, 2.0, 3.5, 5.0] {
            let ahead = de.exact_solution(x + h).unwrap();
            let behind = de.exact_solution(x - h).unwrap();
            let dy = (ahead - behind) / (2.0 * h);
            let f = de.derivative(x, de.exact_solution(x).unwrap()).unwrap();
            assert_relative_eq!(dy, f, max_relative = 1e3 * h * h);
        }
    }

    #[test]
    fn exact_solution_pole_is_a_domain_error() {
        let de = equation(1.0, 3.0);
        assert_eq!(de.constant(), 0.5);
        assert!(matches!(de.exact_solution(0.0), Err(Error::Domain { .. })));
    }
}
