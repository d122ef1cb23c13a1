//! Single-use fixed-step solver over a uniform grid.

use log::{debug, warn};

use crate::{
    Float,
    core::{equation::Equation, grid::uniform_grid, status::Status},
    error::Error,
};

use super::{Method, euler::euler, exact::exact, improved_euler::improved_euler, rk4::rk4};

/// One integration run of a [`Method`] over `[x0, xend]` in `n` equal steps.
///
/// The ordinate buffer is allocated up front with `n + 1` slots and written
/// once per index in forward order; [`Solver::ys`] only exposes the slots
/// computed so far (just `y0` before [`Solver::solve`]). A solver runs once:
/// to use other parameters construct a new one.
#[derive(Debug, Clone)]
pub struct Solver<'a, E: Equation> {
    equation: &'a E,
    method: Method,
    xend: Float,
    n: usize,
    h: Float,
    xs: Vec<Float>,
    ys: Vec<Float>,
    steps: usize,
    nfev: usize,
    status: Status,
}

impl<'a, E: Equation> Solver<'a, E> {
    pub fn new(method: Method, equation: &'a E, xend: Float, n: usize) -> Result<Self, Error> {
        let ivp = equation.ivp();
        let x0 = ivp.x0();

        // --- Input Validation ---
        if !xend.is_finite() || xend <= x0 {
            return Err(Error::invalid_parameters(format!(
                "X must be greater than x0 (x0 = {x0}, X = {xend})"
            )));
        }
        if n < 1 {
            return Err(Error::invalid_parameters("n must be at least 1"));
        }

        let mut ys = vec![0.0; n + 1];
        ys[0] = ivp.y0();

        Ok(Self {
            equation,
            method,
            xend,
            n,
            h: (xend - x0) / n as Float,
            xs: uniform_grid(x0, xend, n),
            ys,
            steps: 0,
            nfev: 0,
            status: Status::Pending,
        })
    }

    /// Fill the ordinates by stepping forward through the grid.
    ///
    /// The first failing evaluation aborts the run: the error is returned
    /// unchanged, the ordinates computed so far stay readable and the solver
    /// is marked [`Status::Failed`].
    pub fn solve(&mut self) -> Result<(), Error> {
        if self.status != Status::Pending {
            return Err(Error::AlreadySolved);
        }

        for i in 0..self.n {
            match self.step(i) {
                Ok(y) => {
                    self.ys[i + 1] = y;
                    self.steps = i + 1;
                    self.nfev += self.method.nfev_per_step();
                }
                Err(err) => {
                    warn!("{} aborted at step {} of {}: {}", self.method, i + 1, self.n, err);
                    self.status = Status::Failed;
                    return Err(err);
                }
            }
        }

        self.status = Status::Solved;
        debug!(
            "{} solved: n = {}, h = {}, nfev = {}, y(X) = {}",
            self.method, self.n, self.h, self.nfev, self.ys[self.n]
        );
        Ok(())
    }

    fn step(&self, i: usize) -> Result<Float, Error> {
        let (x, y, h) = (self.xs[i], self.ys[i], self.h);
        match self.method {
            Method::Exact => exact(self.equation, self.xs[i + 1]),
            Method::Euler => euler(self.equation, x, y, h),
            Method::ImprovedEuler => improved_euler(self.equation, x, y, h),
            Method::RungeKutta => rk4(self.equation, x, y, h),
        }
    }

    /// Grid abscissas, always `n + 1` values.
    pub fn xs(&self) -> &[Float] {
        &self.xs
    }

    /// Ordinates computed so far.
    pub fn ys(&self) -> &[Float] {
        &self.ys[..=self.steps]
    }

    /// Iterate over the computed (x, y) pairs.
    pub fn points(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.xs.iter().copied().zip(self.ys().iter().copied())
    }

    pub fn equation(&self) -> &'a E {
        self.equation
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn name(&self) -> &'static str {
        self.method.name()
    }

    pub fn color(&self) -> char {
        self.method.color()
    }

    pub fn xend(&self) -> Float {
        self.xend
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn h(&self) -> Float {
        self.h
    }

    pub fn nfev(&self) -> usize {
        self.nfev
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

impl Method {
    /// Construct a [`Solver`] for this method and run it.
    pub fn solve<E: Equation>(
        self,
        equation: &E,
        xend: Float,
        n: usize,
    ) -> Result<Solver<'_, E>, Error> {
        let mut solver = Solver::new(self, equation, xend, n)?;
        solver.solve()?;
        Ok(solver)
    }
}
