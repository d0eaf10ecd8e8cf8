use crate::direct_solver::*;
use crate::par_stencil;

/// Data parallel kernel, the interior is split into chunks
/// that rayon updates concurrently.
#[derive(Copy, Clone, Debug)]
pub struct ParallelStep {
    chunk_size: usize,
}

impl ParallelStep {
    pub fn new(chunk_size: usize) -> Self {
        ParallelStep {
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl StencilStep for ParallelStep {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn step(&self, input: &[f64], output: &mut [f64]) {
        profiling::scope!("parallel_step");
        par_stencil::apply(input, output, self.chunk_size);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn zero_chunk_size() {
        assert_eq!(ParallelStep::new(0).chunk_size(), 1);
    }

    #[test]
    fn matches_reference_bitwise() {
        let input: Vec<f64> = (0..513).map(|i| (i as f64 * 0.11).cos() * 3.0).collect();
        let mut a = input.clone();
        let mut b = input.clone();
        ReferenceStep.step(&input, &mut a);
        ParallelStep::new(17).step(&input, &mut b);
        assert_eq!(a, b);
    }
}
