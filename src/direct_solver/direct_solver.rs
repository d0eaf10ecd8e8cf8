use crate::direct_solver::*;
use crate::error::*;
use crate::stencil::*;
use crate::util::*;

/// Gather the neighbour values of `i` in stencil offset order.
pub fn gather_args<const NEIGHBORHOOD_SIZE: usize>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    input: &[f64],
    i: usize,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut result = Values::zero();
    for (n, offset) in stencil.offsets().iter().enumerate() {
        let n_i = (i as isize + *offset as isize) as usize;
        result[n] = input[n_i];
    }
    result
}

/// Generic direct kernel for any nearest neighbour stencil.
/// Nothing about the stencil is known until it is built:
/// the weights come out of the stencil closure at construction,
/// and each point is a weighted sum over the gathered neighbours.
/// You should prefer an optimized kernel if available.
#[derive(Clone, Debug)]
pub struct GenericDirectSolver<const NEIGHBORHOOD_SIZE: usize> {
    stencil: Stencil<NEIGHBORHOOD_SIZE>,
}

impl<const NEIGHBORHOOD_SIZE: usize> GenericDirectSolver<NEIGHBORHOOD_SIZE> {
    pub fn new(stencil: Stencil<NEIGHBORHOOD_SIZE>) -> Result<Self> {
        let reach = stencil.reach();
        if reach > 1 {
            return Err(InvalidInputError::StencilReach { reach });
        }
        Ok(GenericDirectSolver { stencil })
    }

    pub fn stencil(&self) -> &Stencil<NEIGHBORHOOD_SIZE> {
        &self.stencil
    }
}

impl<const NEIGHBORHOOD_SIZE: usize> StencilStep
    for GenericDirectSolver<NEIGHBORHOOD_SIZE>
{
    fn name(&self) -> &'static str {
        "jit"
    }

    fn step(&self, input: &[f64], output: &mut [f64]) {
        profiling::scope!("generic_direct_step");
        debug_assert_eq!(input.len(), output.len());
        for i in interior_range(input.len()) {
            let args = gather_args(&self.stencil, input, i);
            output[i] = self.stencil.apply(&args);
        }
    }
}
