//! Solve every method on one set of parameters and attach the error analysis.

use log::info;

use crate::{
    analysis::{local_errors, total_approximation_error},
    core::equation::DifferentialEquation,
    error::Error,
    methods::Method,
};

use super::{
    options::Parameters,
    report::{MethodReport, Report, TotalErrors},
};

/// Validate `parameters`, build the equation and solve all four methods.
///
/// Numerical methods additionally get their local errors on the `n` step grid
/// and the total approximation errors over `n0..=nend`. The first failure is
/// returned unchanged and no partial report is produced.
pub fn solve_all(parameters: &Parameters) -> Result<Report, Error> {
    parameters.validate()?;
    let equation = DifferentialEquation::new(parameters.ivp()?)?;

    info!(
        "comparing methods for y({}) = {} on [{}, {}] with n = {}, total errors over {}..={}",
        parameters.x0,
        parameters.y0,
        parameters.x0,
        parameters.xend,
        parameters.n,
        parameters.n0,
        parameters.nend
    );

    let methods = Method::ALL
        .into_iter()
        .map(|method| -> Result<MethodReport, Error> {
            let solver = method.solve(&equation, parameters.xend, parameters.n)?;

            let (local, total) = if method.is_numerical() {
                let local = local_errors(&solver)?;
                let values = total_approximation_error(
                    method,
                    &equation,
                    parameters.xend,
                    parameters.n0,
                    parameters.nend,
                )?;
                let total = TotalErrors {
                    n0: parameters.n0,
                    nend: parameters.nend,
                    values,
                };
                (Some(local), Some(total))
            } else {
                (None, None)
            };

            Ok(MethodReport {
                method,
                xs: solver.xs().to_vec(),
                ys: solver.ys().to_vec(),
                local_errors: local,
                total_errors: total,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Report {
        parameters: parameters.clone(),
        methods,
    })
}
