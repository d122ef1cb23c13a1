//! Core types: the initial value problem, the equation and the sample grid.

pub mod equation;
pub mod grid;
pub mod ivp;
pub mod status;
