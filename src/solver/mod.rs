mod diffusion_solver;

pub use diffusion_solver::*;
