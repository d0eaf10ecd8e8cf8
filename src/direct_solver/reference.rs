use crate::direct_solver::*;
use crate::stencil::standard_stencils::*;
use crate::util::*;

/// Plain indexed loop, every access bounds checked.
/// The other kernels are compared against this one.
#[derive(Copy, Clone, Debug, Default)]
pub struct ReferenceStep;

impl StencilStep for ReferenceStep {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn step(&self, input: &[f64], output: &mut [f64]) {
        profiling::scope!("reference_step");
        debug_assert_eq!(input.len(), output.len());
        for i in interior_range(input.len()) {
            output[i] = blur_point(input[i - 1], input[i], input[i + 1]);
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn spike() {
        let input = [0.0, 0.0, 4.0, 0.0, 0.0];
        let mut output = [-1.0; 5];
        ReferenceStep.step(&input, &mut output);
        assert_eq!(output, [-1.0, 1.0, 2.0, 1.0, -1.0]);
    }

    #[test]
    fn ramp() {
        let input = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut output = input;
        ReferenceStep.step(&input, &mut output);
        assert_eq!(output, input);
    }
}
