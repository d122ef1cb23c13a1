//! Uniform sample grid shared by every integration method.

use crate::Float;

/// `n + 1` evenly spaced abscissas from `x0` to `xend`, both inclusive.
///
/// The last point is set to `xend` exactly rather than accumulated, so the
/// grid always ends on the requested bound.
pub fn uniform_grid(x0: Float, xend: Float, n: usize) -> Vec<Float> {
    let h = (xend - x0) / n as Float;
    (0..=n)
        .map(|i| if i == n { xend } else { x0 + i as Float * h })
        .collect()
}
