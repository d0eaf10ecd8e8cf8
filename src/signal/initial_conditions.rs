use crate::domain::*;
use crate::error::*;
use crate::signal::*;
use clap::ValueEnum;
use rand::prelude::*;
use rayon::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SignalType {
    Sawtooth(Sawtooth),
    Impulse { variance: f64 },
    Rand { max_val: i32 },
    Zero,
}

impl Default for SignalType {
    fn default() -> Self {
        SignalType::Sawtooth(Sawtooth::default())
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, Default)]
pub enum ClapSignalType {
    #[default]
    Sawtooth,
    Impulse,
    Rand,
    Zero,
}

impl ClapSignalType {
    /// `dial` is the sawtooth frequency, the impulse variance,
    /// or the exclusive upper bound of the random values.
    pub fn to_signal_type(&self, dial: f64) -> SignalType {
        match self {
            ClapSignalType::Sawtooth => SignalType::Sawtooth(Sawtooth::new(dial)),
            ClapSignalType::Impulse => SignalType::Impulse { variance: dial },
            ClapSignalType::Rand => SignalType::Rand {
                max_val: dial as i32,
            },
            ClapSignalType::Zero => SignalType::Zero,
        }
    }
}

impl SignalType {
    pub fn generate(
        &self,
        time_domain: &TimeDomain,
        chunk_size: usize,
    ) -> Result<Signal> {
        let n_r = time_domain.len();
        match *self {
            SignalType::Sawtooth(ref sawtooth) => {
                generate_signal(time_domain, sawtooth)
            }
            SignalType::Impulse { variance } => {
                normal_impulse(n_r, variance, chunk_size)
            }
            SignalType::Rand { max_val } => rand_signal(n_r, max_val, chunk_size),
            SignalType::Zero => Ok(Signal::new(vec![0.0; n_r])),
        }
    }
}

/// Normal like distribution with a spike in the middle,
/// all values are in [0, 1].
pub fn normal_impulse(
    n_r: usize,
    variance: f64,
    chunk_size: usize,
) -> Result<Signal> {
    if !(variance.is_finite() && variance > 0.0) {
        return Err(InvalidInputError::InvalidParameter {
            name: "variance",
            value: variance,
        });
    }
    let n_f = n_r as f64;
    let sigma_sq: f64 = (n_f / variance) * (n_f / variance);
    let mut samples = vec![0.0; n_r];
    samples
        .par_chunks_mut(chunk_size.max(1))
        .enumerate()
        .for_each(|(c, chunk)| {
            let offset = c * chunk_size.max(1);
            for (i, value_mut) in chunk.iter_mut().enumerate() {
                let x = ((offset + i) as f64) - (n_f / 2.0);
                let exp = -x * x / (2.0 * sigma_sq);
                *value_mut = exp.exp();
            }
        });
    Ok(Signal::new(samples))
}

/// Uniform integer values in `[0, max_val)`.
pub fn rand_signal(n_r: usize, max_val: i32, chunk_size: usize) -> Result<Signal> {
    if max_val <= 0 {
        return Err(InvalidInputError::InvalidParameter {
            name: "max_val",
            value: max_val as f64,
        });
    }
    let mut samples = vec![0.0; n_r];
    samples
        .par_chunks_mut(chunk_size.max(1))
        .for_each(|chunk: &mut [f64]| {
            let mut rng = rand::thread_rng();
            for value_mut in chunk {
                *value_mut = rng.gen_range(0..max_val) as f64;
            }
        });
    Ok(Signal::new(samples))
}
