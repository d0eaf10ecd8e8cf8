use crate::direct_solver::*;
use crate::stencil::standard_stencils::*;
use crate::util::*;

/// Optimized direct kernel for the 3pt 1D blur.
/// The weights are compile time constants and the inner loop
/// runs without bounds checks.
#[derive(Copy, Clone, Debug, Default)]
pub struct Direct3Pt1DOpt;

impl StencilStep for Direct3Pt1DOpt {
    fn name(&self) -> &'static str {
        "compiled"
    }

    fn step(&self, input: &[f64], output: &mut [f64]) {
        profiling::scope!("direct_3pt1d_opt_step");
        let n_r = input.len();
        assert!(n_r >= MIN_SIGNAL_LEN);
        assert_eq!(n_r, output.len());

        let ib = input;
        // SAFETY: both slices hold n_r >= 3 elements, checked above,
        // and i - 1, i, i + 1 stay within 0..n_r for i in 1..n_r - 1.
        unsafe {
            for i in 1..n_r - 1 {
                *output.get_unchecked_mut(i) = BLUR_SCALE
                    * (*ib.get_unchecked(i - 1)
                        + BLUR_CENTER * *ib.get_unchecked(i)
                        + *ib.get_unchecked(i + 1));
            }
        }
    }
}
