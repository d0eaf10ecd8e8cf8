pub mod build_info;
pub mod csv;
pub mod demo_args;
pub mod direct_solver;
pub mod domain;
pub mod error;
pub mod image;
pub mod par_stencil;
pub mod signal;
pub mod solver;
pub mod stencil;
pub mod timing;
pub mod util;

pub use domain::Signal;
pub use error::InvalidInputError;
pub use signal::generate_signal;
pub use solver::{diffuse, diffuse_history};
