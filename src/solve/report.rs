//! Results of a comparison run: per-method grids and their errors.

use std::fmt;

use crate::{Float, methods::Method};

use super::options::Parameters;

/// Total approximation errors over the step counts `n0..=nend`.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalErrors {
    pub n0: usize,
    pub nend: usize,
    pub values: Vec<Float>,
}

impl TotalErrors {
    /// Iterate over `(n, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Float)> + '_ {
        (self.n0..=self.nend).zip(self.values.iter().copied())
    }

    /// Step counts covered, in order.
    pub fn step_counts(&self) -> std::ops::RangeInclusive<usize> {
        self.n0..=self.nend
    }
}

/// Solution of one method and, for numerical methods, its errors.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodReport {
    pub method: Method,
    pub xs: Vec<Float>,
    pub ys: Vec<Float>,
    /// Local errors aligned with `xs`; `None` for [`Method::Exact`].
    pub local_errors: Option<Vec<Float>>,
    /// `None` for [`Method::Exact`].
    pub total_errors: Option<TotalErrors>,
}

impl MethodReport {
    pub fn name(&self) -> &'static str {
        self.method.name()
    }

    pub fn color(&self) -> char {
        self.method.color()
    }

    /// Largest local error on the solution grid, NaN if any error is NaN.
    pub fn max_local_error(&self) -> Option<Float> {
        self.local_errors.as_ref().map(|errors| {
            errors.iter().copied().fold(0.0, |max: Float, e| {
                if max.is_nan() || e.is_nan() { Float::NAN } else { max.max(e) }
            })
        })
    }

    /// Iterate over stored (x, y) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// All four methods solved on the same parameters, in [`Method::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub parameters: Parameters,
    pub methods: Vec<MethodReport>,
}

impl Report {
    pub fn get(&self, method: Method) -> Option<&MethodReport> {
        self.methods.iter().find(|r| r.method == method)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.parameters;
        writeln!(
            f,
            "y({}) = {}, X = {}, n = {}, total errors over n = {}..={}",
            p.x0, p.y0, p.xend, p.n, p.n0, p.nend
        )?;
        writeln!(
            f,
            "{:<16} {:>5} {:>16} {:>14} {:>14} {:>14}",
            "method", "color", "y(X)", "max local", "tae(n0)", "tae(N)"
        )?;
        for r in &self.methods {
            let last = r.ys.last().copied().unwrap_or(Float::NAN);
            let max_local = r.max_local_error();
            let (first, final_) = r
                .total_errors
                .as_ref()
                .map(|t| (t.values.first().copied(), t.values.last().copied()))
                .unwrap_or((None, None));
            writeln!(
                f,
                "{:<16} {:>5} {:>16.10} {:>14} {:>14} {:>14}",
                r.name(),
                r.color(),
                last,
                sci(max_local),
                sci(first),
                sci(final_)
            )?;
        }
        Ok(())
    }
}

fn sci(v: Option<Float>) -> String {
    v.map_or_else(|| "-".to_string(), |v| format!("{v:.4e}"))
}
