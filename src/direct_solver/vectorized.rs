use crate::direct_solver::*;
use crate::stencil::standard_stencils::*;
use crate::util::*;
use nalgebra::{DVectorView, DVectorViewMut};

/// Whole-array expression over three shifted views of the input.
/// Evaluates `(left + 2 * middle + right) * 0.25` element wise,
/// in the same order as `blur_point`.
#[derive(Copy, Clone, Debug, Default)]
pub struct VectorizedStep;

impl StencilStep for VectorizedStep {
    fn name(&self) -> &'static str {
        "vectorized"
    }

    fn step(&self, input: &[f64], output: &mut [f64]) {
        profiling::scope!("vectorized_step");
        debug_assert_eq!(input.len(), output.len());
        let n_r = input.len();
        let n_i = interior_len(n_r);

        let left = DVectorView::from_slice(&input[0..n_i], n_i);
        let middle = DVectorView::from_slice(&input[1..n_r - 1], n_i);
        let right = DVectorView::from_slice(&input[2..n_r], n_i);

        let blurred = (left + middle * BLUR_CENTER + right) * BLUR_SCALE;

        let mut interior = DVectorViewMut::from_slice(&mut output[1..n_r - 1], n_i);
        interior.copy_from(&blurred);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::direct_solver::ReferenceStep;

    #[test]
    fn spike() {
        let input = [0.0, 0.0, 4.0, 0.0, 0.0];
        let mut output = [-1.0; 5];
        VectorizedStep.step(&input, &mut output);
        assert_eq!(output, [-1.0, 1.0, 2.0, 1.0, -1.0]);
    }

    #[test]
    fn matches_reference_bitwise() {
        let input: Vec<f64> = (0..97).map(|i| ((i * 37) % 11) as f64 * 0.1 - 0.3).collect();
        let mut a = input.clone();
        let mut b = input.clone();
        ReferenceStep.step(&input, &mut a);
        VectorizedStep.step(&input, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn smallest() {
        let input = [3.0, 9.0, 1.0];
        let mut output = input;
        VectorizedStep.step(&input, &mut output);
        assert_eq!(output, [3.0, 5.5, 1.0]);
    }
}
