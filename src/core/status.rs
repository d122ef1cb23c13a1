//! Lifecycle of a solver

/// Where a solver is in its single-use lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Constructed, only the initial ordinate is known.
    Pending,
    /// Every grid point has an ordinate.
    Solved,
    /// A step failed; the ordinates computed so far are kept but the solver
    /// must be discarded.
    Failed,
}
