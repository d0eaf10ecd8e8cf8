#![allow(clippy::module_inception)]
//! Kernels for a single round of the blur.
//!
//! Every kernel implements `StencilStep` with the same contract,
//! they differ only in how the interior update is executed.

mod direct_3pt1d_opt;
mod direct_solver;
mod direct_solver_interface;
mod parallel;
mod reference;
mod vectorized;

pub use direct_3pt1d_opt::*;
pub use direct_solver::*;
pub use direct_solver_interface::*;
pub use parallel::*;
pub use reference::*;
pub use vectorized::*;
