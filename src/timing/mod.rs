//! Timing harness.
//!
//! Times repeated solver invocations, aggregates the trials and
//! compares variants against a baseline.

mod compare;
mod stats;

pub use compare::*;
pub use stats::*;
