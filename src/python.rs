//! Python bindings, enabled with the `python` feature.

use numpy::PyArray1;
use pyo3::{exceptions::PyValueError, prelude::*, types::PyDict};

use crate::{
    Float, analysis,
    core::{
        equation::{DifferentialEquation, Equation},
        ivp::InitialValueProblem,
    },
    error::Error,
    methods::Method,
    solve::{Parameters, solve_all},
};

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn equation(x0: Float, y0: Float) -> Result<DifferentialEquation, Error> {
    DifferentialEquation::new(InitialValueProblem::new(x0, y0)?)
}

#[pyfunction]
#[pyo3(name = "solve")]
#[pyo3(signature = (method, x0=1.0, y0=2.0, xend=5.0, n=10))]
/// Solve the equation with one method.
///
/// Parameters
/// ----------
/// method : str
///     'exact', 'euler', 'improved-euler' (or 'heun'), 'runge-kutta' (or 'rk4').
/// x0, y0 : float
///     Initial value y(x0) = y0, x0 > 0.
/// xend : float
///     Upper bound of the interval, greater than x0.
/// n : int
///     Number of steps.
///
/// Returns
/// -------
/// (xs, ys) : tuple of ndarray, shape (n + 1,)
fn solve_py<'py>(
    py: Python<'py>,
    method: &str,
    x0: Float,
    y0: Float,
    xend: Float,
    n: usize,
) -> PyResult<(Bound<'py, PyArray1<Float>>, Bound<'py, PyArray1<Float>>)> {
    let method: Method = method.parse()?;
    let de = equation(x0, y0)?;
    let solver = method.solve(&de, xend, n)?;
    Ok((
        PyArray1::from_slice(py, solver.xs()),
        PyArray1::from_slice(py, solver.ys()),
    ))
}

#[pyfunction]
#[pyo3(name = "local_errors")]
#[pyo3(signature = (method, x0=1.0, y0=2.0, xend=5.0, n=10))]
/// Absolute error |y(x_i) - y_i| at every grid point of a solved method.
fn local_errors_py<'py>(
    py: Python<'py>,
    method: &str,
    x0: Float,
    y0: Float,
    xend: Float,
    n: usize,
) -> PyResult<Bound<'py, PyArray1<Float>>> {
    let method: Method = method.parse()?;
    let de = equation(x0, y0)?;
    let solver = method.solve(&de, xend, n)?;
    let errors = analysis::local_errors(&solver)?;
    Ok(PyArray1::from_vec(py, errors))
}

#[pyfunction]
#[pyo3(name = "total_approximation_error")]
#[pyo3(signature = (method, x0=1.0, y0=2.0, xend=5.0, n0=3, nend=10))]
/// Maximum local error for every step count in n0..=nend.
fn total_approximation_error_py<'py>(
    py: Python<'py>,
    method: &str,
    x0: Float,
    y0: Float,
    xend: Float,
    n0: usize,
    nend: usize,
) -> PyResult<Bound<'py, PyArray1<Float>>> {
    let method: Method = method.parse()?;
    let de = equation(x0, y0)?;
    let errors = analysis::total_approximation_error(method, &de, xend, n0, nend)?;
    Ok(PyArray1::from_vec(py, errors))
}

#[pyfunction]
#[pyo3(name = "exact_solution")]
/// Closed-form solution through (x0, y0) evaluated at x.
fn exact_solution_py(x0: Float, y0: Float, x: Float) -> PyResult<Float> {
    Ok(equation(x0, y0)?.exact_solution(x)?)
}

#[pyfunction]
#[pyo3(name = "compare")]
#[pyo3(signature = (x0=1.0, y0=2.0, xend=5.0, n=10, n0=3, nend=10))]
/// Solve with every method and collect the errors.
///
/// Returns a dict keyed by method name. Each entry holds ``xs``, ``ys`` and
/// ``color``; numerical methods also hold ``local_errors``,
/// ``total_errors``, ``n0`` and ``nend``.
fn compare_py<'py>(
    py: Python<'py>,
    x0: Float,
    y0: Float,
    xend: Float,
    n: usize,
    n0: usize,
    nend: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let params = Parameters::builder()
        .x0(x0)
        .y0(y0)
        .xend(xend)
        .n(n)
        .n0(n0)
        .nend(nend)
        .build();
    let report = solve_all(&params)?;

    let out = PyDict::new(py);
    for r in &report.methods {
        let entry = PyDict::new(py);
        entry.set_item("xs", PyArray1::from_slice(py, &r.xs))?;
        entry.set_item("ys", PyArray1::from_slice(py, &r.ys))?;
        entry.set_item("color", r.color())?;
        if let Some(local) = &r.local_errors {
            entry.set_item("local_errors", PyArray1::from_slice(py, local))?;
        }
        if let Some(total) = &r.total_errors {
            entry.set_item("total_errors", PyArray1::from_slice(py, &total.values))?;
            entry.set_item("n0", total.n0)?;
            entry.set_item("nend", total.nend)?;
        }
        out.set_item(r.name(), entry)?;
    }
    Ok(out)
}

#[pymodule]
fn ivp_compare(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(solve_py, m)?)?;
    m.add_function(wrap_pyfunction!(local_errors_py, m)?)?;
    m.add_function(wrap_pyfunction!(total_approximation_error_py, m)?)?;
    m.add_function(wrap_pyfunction!(exact_solution_py, m)?)?;
    m.add_function(wrap_pyfunction!(compare_py, m)?)?;

    let doc = "Fixed-step solvers for y' = -y^2/3 - 2/(3x^2) compared against the exact \
               solution.\n\n\
               Methods: Exact, Euler, Improved Euler, Runge-Kutta.\n\
               Invalid input raises ValueError.";
    m.setattr("__doc__", doc)?;

    Ok(())
}
