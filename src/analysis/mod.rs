//! Accuracy analysis: local (global truncation) errors on a solved grid and
//! total approximation errors over a range of step counts.

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    Float,
    core::equation::Equation,
    error::Error,
    methods::{Method, Solver},
};

/// `|y(x[i]) - y[i]|` for every grid point of a solved method.
///
/// The errors are measured against the exact solution of the solver's own
/// equation and are aligned 1:1 with [`Solver::xs`]. A solver whose ordinates
/// do not cover its grid (pending or failed) yields [`Error::Incomplete`]; a
/// NaN ordinate yields [`Error::Domain`] at its abscissa.
pub fn local_errors<E: Equation>(solver: &Solver<'_, E>) -> Result<Vec<Float>, Error> {
    let (xs, ys) = (solver.xs(), solver.ys());
    if xs.len() != ys.len() {
        return Err(Error::Incomplete {
            expected: xs.len(),
            found: ys.len(),
        });
    }

    let equation = solver.equation();
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| deviation(x, y, equation.exact_solution(x)?))
        .collect()
}

/// Worst pointwise deviation of `method` from the exact method on `n` steps.
///
/// Both methods are constructed and solved from scratch on the same grid.
pub fn max_error<E: Equation>(
    method: Method,
    equation: &E,
    xend: Float,
    n: usize,
) -> Result<Float, Error> {
    let approximation = method.solve(equation, xend, n)?;
    let exact = Method::Exact.solve(equation, xend, n)?;

    let mut err: Float = 0.0;
    for ((x, y), &y_exact) in approximation.points().zip(exact.ys()) {
        err = err.max(deviation(x, y, y_exact)?);
    }

    debug!("{method}: n = {n}, max error = {err}");
    Ok(err)
}

/// Total approximation error of `method` for every step count in `[n0, nend]`.
///
/// Entry `j` is [`max_error`] at `n0 + j` steps; every entry re-solves both the
/// method and the exact solution. Requires `n0 >= 2` and `nend > n0`. With the
/// `parallel` feature the step counts are evaluated on the rayon pool and
/// still returned in order; the `Sync` bound applies with or without it.
pub fn total_approximation_error<E: Equation + Sync>(
    method: Method,
    equation: &E,
    xend: Float,
    n0: usize,
    nend: usize,
) -> Result<Vec<Float>, Error> {
    check_range(n0, nend)?;

    #[cfg(feature = "parallel")]
    let errors: Result<Vec<Float>, Error> = (n0..=nend)
        .into_par_iter()
        .map(|n| max_error(method, equation, xend, n))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let errors: Result<Vec<Float>, Error> = (n0..=nend).map(|n| max_error(method, equation, xend, n)).collect();

    errors
}

/// Empirical convergence order `log2(e(n) / e(2n))`.
pub fn observed_order<E: Equation>(
    method: Method,
    equation: &E,
    xend: Float,
    n: usize,
) -> Result<Float, Error> {
    let coarse = max_error(method, equation, xend, n)?;
    let fine = max_error(method, equation, xend, 2 * n)?;
    Ok((coarse / fine).log2())
}

fn deviation(x: Float, y: Float, y_exact: Float) -> Result<Float, Error> {
    let d = (y_exact - y).abs();
    if d.is_nan() {
        return Err(Error::Domain {
            x,
            reason: "approximation is not a number",
        });
    }
    Ok(d)
}

fn check_range(n0: usize, nend: usize) -> Result<(), Error> {
    if n0 < 2 {
        return Err(Error::invalid_parameters(format!("n0 must be at least 2 (got {n0})")));
    }
    if nend <= n0 {
        return Err(Error::invalid_parameters(format!(
            "N must be greater than n0 (n0 = {n0}, N = {nend})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::core::{equation::DifferentialEquation, ivp::InitialValueProblem};

    fn equation(x0: Float, y0: Float) -> DifferentialEquation {
        DifferentialEquation::new(InitialValueProblem::new(x0, y0).unwrap()).unwrap()
    }

    #[test]
    fn exact_method_has_no_local_error() {
        let de = equation(1.0, 3.0);
        let exact = Method::Exact.solve(&de, 5.0, 10).unwrap();
        for e in local_errors(&exact).unwrap() {
            assert_abs_diff_eq!(e, 0.0, epsilon = 10.0 * Float::EPSILON);
        }
    }

    #[test]
    fn local_errors_align_with_grid() {
        let de = equation(1.0, 2.0);
        let euler = Method::Euler.solve(&de, 5.0, 10).unwrap();
        let errors = local_errors(&euler).unwrap();
        assert_eq!(errors.len(), euler.xs().len());
        assert_abs_diff_eq!(errors[0], 0.0, epsilon = Float::EPSILON);
        assert!(errors.iter().all(|&e| e >= 0.0));
    }

    #[test]
    fn unsolved_solver_is_incomplete() {
        let de = equation(1.0, 2.0);
        let pending = Solver::new(Method::Euler, &de, 5.0, 10).unwrap();
        assert_eq!(
            local_errors(&pending),
            Err(Error::Incomplete {
                expected: 11,
                found: 1
            })
        );
    }

    #[test]
    fn total_error_matches_worst_local_error() {
        let de = equation(1.0, 3.0);
        let taes = total_approximation_error(Method::ImprovedEuler, &de, 5.0, 4, 9).unwrap();
        assert_eq!(taes.len(), 6);
        for (j, tae) in taes.iter().enumerate() {
            let solver = Method::ImprovedEuler.solve(&de, 5.0, 4 + j).unwrap();
            let worst = local_errors(&solver).unwrap().into_iter().fold(0.0, Float::max);
            assert_relative_eq!(*tae, worst, max_relative = 100.0 * Float::EPSILON);
        }
    }

    /// y' = 2 below x = 1.5, NaN from there on.
    struct Diverging {
        ivp: InitialValueProblem,
    }

    impl Equation for Diverging {
        fn ivp(&self) -> &InitialValueProblem {
            &self.ivp
        }

        fn set_ivp(&mut self, ivp: InitialValueProblem) -> Result<(), Error> {
            self.ivp = ivp;
            Ok(())
        }

        fn derivative(&self, x: Float, _y: Float) -> Result<Float, Error> {
            Ok(if x >= 1.5 { Float::NAN } else { 2.0 })
        }

        fn exact_solution(&self, x: Float) -> Result<Float, Error> {
            Ok(self.ivp.y0() + 2.0 * (x - self.ivp.x0()))
        }
    }

    #[test]
    fn nan_ordinates_are_reported_not_dropped() {
        let eq = Diverging {
            ivp: InitialValueProblem::new(1.0, 1.0).unwrap(),
        };
        let euler = Method::Euler.solve(&eq, 2.0, 4).unwrap();
        assert!(euler.ys()[4].is_nan());

        assert_eq!(
            local_errors(&euler),
            Err(Error::Domain {
                x: 1.75,
                reason: "approximation is not a number",
            })
        );
        assert!(matches!(
            max_error(Method::Euler, &eq, 2.0, 4),
            Err(Error::Domain { x, .. }) if x == 1.75
        ));
        assert!(matches!(
            total_approximation_error(Method::Euler, &eq, 2.0, 2, 4),
            Err(Error::Domain { .. })
        ));
    }

    // Generic callers name the same bounds whether or not `parallel` is on.
    fn sweep<E: Equation + Sync>(equation: &E) -> Result<Vec<Float>, Error> {
        total_approximation_error(Method::RungeKutta, equation, 5.0, 3, 6)
    }

    #[test]
    fn sweep_bounds_do_not_depend_on_features() {
        let de = equation(1.0, 2.0);
        let taes = sweep(&de).unwrap();
        assert_eq!(taes.len(), 4);
        assert_eq!(taes[0], max_error(Method::RungeKutta, &de, 5.0, 3).unwrap());
    }

    #[test]
    fn range_is_validated() {
        let de = equation(1.0, 2.0);
        for (n0, nend) in [(1, 10), (0, 10), (5, 5), (6, 5)] {
            assert!(matches!(
                total_approximation_error(Method::Euler, &de, 5.0, n0, nend),
                Err(Error::InvalidParameters(_))
            ));
        }
    }
}
