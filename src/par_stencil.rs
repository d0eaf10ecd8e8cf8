use crate::stencil::standard_stencils::*;
use crate::util::*;
use rayon::prelude::*;

/// Blur the interior of `output` from `input`, splitting the
/// interior into chunks of `chunk_size` points that are
/// updated as independent tasks.
/// Tasks only read `input`, so no task can see a value
/// written during the same round.
pub fn apply(input: &[f64], output: &mut [f64], chunk_size: usize) {
    debug_assert_eq!(input.len(), output.len());
    debug_assert!(chunk_size > 0);
    let n_r = input.len();
    output[interior_range(n_r)]
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(c, output_chunk): (usize, &mut [f64])| {
            profiling::scope!("par_stencil: Thread Callback");
            let start = interior_chunk_start(c, chunk_size);
            for (j, value_mut) in output_chunk.iter_mut().enumerate() {
                let i = start + j;
                *value_mut = blur_point(input[i - 1], input[i], input[i + 1]);
            }
        });
}
