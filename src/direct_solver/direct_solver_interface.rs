/// One synchronous round of the stencil.
///
/// Implementations write every interior point of `output`
/// (indices `1..n_r - 1`) from `input` alone, and never touch
/// the two boundary points.
/// `input` and `output` have the same length, at least 3,
/// which callers validate before the first round.
pub trait StencilStep: Send + Sync {
    fn name(&self) -> &'static str;

    fn step(&self, input: &[f64], output: &mut [f64]);
}
