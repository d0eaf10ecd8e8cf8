use crate::direct_solver::*;
use crate::domain::*;
use crate::error::*;
use crate::stencil::standard_stencils;
use crate::util::*;
use clap::ValueEnum;

/// Rounds applied when the caller has no preference.
pub const DEFAULT_STEPS: usize = 1024;

/// Interior points per task for the parallel kernel.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// How a single round is executed.
/// All variants compute the same blur; `Jit` may differ from the
/// others by floating point reassociation only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Variant {
    /// Bounds checked scalar loop.
    Reference,
    /// Bulk expression over shifted array views.
    Vectorized,
    /// Specialized kernel with constant weights and unchecked indexing.
    #[default]
    Compiled,
    /// Generic stencil kernel whose weights are extracted when the
    /// solver is assembled.
    Jit,
    /// Chunked interior update on the rayon pool.
    Parallel,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Reference,
        Variant::Vectorized,
        Variant::Compiled,
        Variant::Jit,
        Variant::Parallel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Reference => "reference",
            Variant::Vectorized => "vectorized",
            Variant::Compiled => "compiled",
            Variant::Jit => "jit",
            Variant::Parallel => "parallel",
        }
    }
}

/// Where the current and next state live.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Buffering {
    /// Two full size buffers with a toggled current index.
    #[default]
    DoubleBuffer,
    /// One buffer of two rows, current row picked by round parity.
    TwoRow,
}

impl Buffering {
    pub const ALL: [Buffering; 2] = [Buffering::DoubleBuffer, Buffering::TwoRow];

    pub fn name(&self) -> &'static str {
        match self {
            Buffering::DoubleBuffer => "double_buffer",
            Buffering::TwoRow => "two_row",
        }
    }
}

/// Applies the blur for a number of rounds with a chosen
/// kernel and buffering strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiffusionSolver {
    pub variant: Variant,
    pub buffering: Buffering,
    pub chunk_size: usize,
}

impl Default for DiffusionSolver {
    fn default() -> Self {
        DiffusionSolver {
            variant: Variant::default(),
            buffering: Buffering::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl DiffusionSolver {
    pub fn new(variant: Variant, buffering: Buffering, chunk_size: usize) -> Self {
        DiffusionSolver {
            variant,
            buffering,
            chunk_size,
        }
    }

    pub fn with_variant(variant: Variant) -> Self {
        DiffusionSolver {
            variant,
            ..Default::default()
        }
    }

    /// `steps` rounds of the blur, boundaries held fixed.
    /// Inputs are validated before any buffer is allocated.
    pub fn apply(&self, signal: &Signal, steps: usize) -> Result<Signal> {
        check_len(signal.len(), MIN_SIGNAL_LEN)?;
        if steps == 0 {
            return Ok(signal.clone());
        }
        log::debug!(
            "diffuse: {} samples, {} steps, {} / {}",
            signal.len(),
            steps,
            self.variant.name(),
            self.buffering.name()
        );
        profiling::scope!("DiffusionSolver::apply");

        let result = match self.variant {
            Variant::Reference => self.run(&ReferenceStep, signal, steps),
            Variant::Vectorized => self.run(&VectorizedStep, signal, steps),
            Variant::Compiled => self.run(&Direct3Pt1DOpt, signal, steps),
            Variant::Jit => {
                let kernel = GenericDirectSolver::new(standard_stencils::blur_1d())?;
                self.run(&kernel, signal, steps)
            }
            Variant::Parallel => {
                self.run(&ParallelStep::new(self.chunk_size), signal, steps)
            }
        };
        Ok(result)
    }

    /// The state every `steps_per_line` rounds.
    /// Entry 0 is the input, entry `l` the state after
    /// `l * steps_per_line` rounds, `lines` entries in total.
    pub fn history(
        &self,
        signal: &Signal,
        steps_per_line: usize,
        lines: usize,
    ) -> Result<Vec<Signal>> {
        check_len(signal.len(), MIN_SIGNAL_LEN)?;
        let mut result = Vec::with_capacity(lines);
        if lines == 0 {
            return Ok(result);
        }
        result.push(signal.clone());
        for l in 1..lines {
            let next = self.apply(&result[l - 1], steps_per_line)?;
            result.push(next);
        }
        Ok(result)
    }

    fn run<S: StencilStep>(&self, kernel: &S, signal: &Signal, steps: usize) -> Signal {
        match self.buffering {
            Buffering::DoubleBuffer => {
                iterate(kernel, PingPongBuffers::new(signal), steps)
            }
            Buffering::TwoRow => iterate(kernel, TwoRowBuffer::new(signal), steps),
        }
    }
}

/// Run `steps` synchronous rounds, each round reading the state
/// the previous round settled.
pub fn iterate<S: StencilStep, B: StencilBuffers>(
    kernel: &S,
    mut buffers: B,
    steps: usize,
) -> Signal {
    profiling::scope!("iterate", kernel.name());
    for _ in 0..steps {
        let (input, output) = buffers.split();
        kernel.step(input, output);
        buffers.swap();
    }
    buffers.into_signal()
}

/// Blur `signal` for `steps` rounds with the default solver.
pub fn diffuse(signal: &Signal, steps: usize) -> Result<Signal> {
    DiffusionSolver::default().apply(signal, steps)
}

/// The default solver's state every `steps_per_line` rounds.
pub fn diffuse_history(
    signal: &Signal,
    steps_per_line: usize,
    lines: usize,
) -> Result<Vec<Signal>> {
    DiffusionSolver::default().history(signal, steps_per_line, lines)
}
