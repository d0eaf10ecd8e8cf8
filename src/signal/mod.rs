//! Initial conditions.
//!
//! The sawtooth sampled over a time domain is the standard input
//! for the diffusion; the other signal types are handy for
//! checking the smoothing visually.

mod initial_conditions;
mod sawtooth;
mod time_domain;

pub use initial_conditions::*;
pub use sawtooth::*;
pub use time_domain::*;

use crate::domain::Signal;
use crate::error::Result;

/// Sawtooth evaluated at every point of the time domain.
pub fn generate_signal(
    time_domain: &TimeDomain,
    sawtooth: &Sawtooth,
) -> Result<Signal> {
    log::trace!(
        "generate_signal: {} samples over [0, {}], {:?}",
        time_domain.len(),
        time_domain.t_max(),
        sawtooth
    );
    generate_sawtooth(time_domain, sawtooth)
}
