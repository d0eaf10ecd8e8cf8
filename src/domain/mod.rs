//! Buffers the diffusion works on.
//!
//! A `Signal` is the immutable, caller owned sequence of samples.
//! A run copies it into a pair of stencil buffers, and alternates
//! which of the two holds the current state.
//! Both buffers start as a copy of the signal, and kernels only ever
//! write interior points, so the boundary values stay fixed for the
//! whole run without being recomputed.

mod ping_pong;
mod signal;
mod two_row;

pub use ping_pong::*;
pub use signal::*;
pub use two_row::*;

/// Storage for the current and next state of a run.
pub trait StencilBuffers {
    /// Previous round's state, and the buffer the next round writes.
    fn split(&mut self) -> (&[f64], &mut [f64]);

    /// Make the buffer that was just written the current state.
    fn swap(&mut self);

    fn current(&self) -> &[f64];

    fn len(&self) -> usize {
        self.current().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn into_signal(self) -> Signal
    where
        Self: Sized,
    {
        Signal::new(self.current().to_vec())
    }
}
