use crate::util::*;

/// For linear stencils, we can extract the weight for a neighbor
/// by passing in 1.0 for that neighbor and 0.0 for the others.
pub fn extract_weights<
    const NEIGHBORHOOD_SIZE: usize,
    F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64,
>(
    f: F,
) -> Values<NEIGHBORHOOD_SIZE> {
    let mut weights = Values::zero();
    let mut arg_buffer = [0.0; NEIGHBORHOOD_SIZE];
    for n in 0..NEIGHBORHOOD_SIZE {
        arg_buffer[n] = 1.0;
        weights[n] = f(&arg_buffer);
        arg_buffer[n] = 0.0;
    }
    weights
}

/// We only deal with linear stencils.
/// A linear stencil is a combination of neighbor offsets and weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Stencil<const NEIGHBORHOOD_SIZE: usize> {
    pub weights: Values<NEIGHBORHOOD_SIZE>,
    pub offsets: Offsets<NEIGHBORHOOD_SIZE>,
}

impl<const NEIGHBORHOOD_SIZE: usize> Stencil<NEIGHBORHOOD_SIZE> {
    pub fn new<F: Fn(&[f64; NEIGHBORHOOD_SIZE]) -> f64>(
        offsets: Offsets<NEIGHBORHOOD_SIZE>,
        operation: F,
    ) -> Self {
        let weights = extract_weights(operation);
        Stencil { weights, offsets }
    }

    pub fn weights(&self) -> &Values<NEIGHBORHOOD_SIZE> {
        &self.weights
    }

    pub fn offsets(&self) -> &Offsets<NEIGHBORHOOD_SIZE> {
        &self.offsets
    }

    /// How far the stencil reads from the updated point.
    pub fn reach(&self) -> usize {
        self.offsets
            .iter()
            .map(|o| o.unsigned_abs() as usize)
            .max()
            .unwrap_or(0)
    }

    /// Sum of the weights, 1.0 for stencils that preserve constants.
    pub fn weight_sum(&self) -> f64 {
        self.weights.sum()
    }

    pub fn apply(&self, args: &Values<NEIGHBORHOOD_SIZE>) -> f64 {
        self.weights.component_mul(args).sum()
    }
}
