pub use num_traits::Zero;

pub mod indexing;
pub use indexing::*;

/// Stencil weights, or the neighbour values gathered for one point.
pub type Values<const NEIGHBORHOOD_SIZE: usize> =
    nalgebra::SVector<f64, { NEIGHBORHOOD_SIZE }>;

/// Neighbour offsets of a 1D stencil, relative to the updated point.
pub type Offsets<const NEIGHBORHOOD_SIZE: usize> = [i32; NEIGHBORHOOD_SIZE];

/// A diffused signal needs a left boundary, a right boundary,
/// and at least one interior point between them.
pub const MIN_SIGNAL_LEN: usize = 3;

/// A sampled time domain needs both endpoints.
pub const MIN_TIME_SAMPLES: usize = 2;
