use crate::error::*;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Aggregate over repeated timings of the same call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimingStats {
    pub trials: usize,
    pub min: Duration,
    pub max: Duration,
    pub mean: Duration,
}

impl TimingStats {
    pub fn from_durations(durations: &[Duration]) -> Result<Self> {
        let trials = durations.len();
        if trials == 0 {
            return Err(InvalidInputError::NoTrials);
        }
        let min = durations.iter().copied().min().unwrap_or_default();
        let max = durations.iter().copied().max().unwrap_or_default();
        let total: Duration = durations.iter().sum();
        let mean = total / trials as u32;
        Ok(TimingStats {
            trials,
            min,
            max,
            mean,
        })
    }

    /// How many times faster `self` is than `baseline`, by mean.
    pub fn speedup_over(&self, baseline: &TimingStats) -> f64 {
        let own = self.mean.as_secs_f64();
        if own == 0.0 {
            return f64::INFINITY;
        }
        baseline.mean.as_secs_f64() / own
    }
}

impl fmt::Display for TimingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean {:?}, min {:?}, max {:?} ({} trials)",
            self.mean, self.min, self.max, self.trials
        )
    }
}

/// Run `f` `trials` times and aggregate the wall clock durations.
/// Results are passed through `black_box` so the work is not
/// optimized away.
pub fn time_trials<T, F: FnMut() -> T>(trials: usize, mut f: F) -> Result<TimingStats> {
    if trials == 0 {
        return Err(InvalidInputError::NoTrials);
    }
    let mut durations = Vec::with_capacity(trials);
    for _ in 0..trials {
        profiling::scope!("time_trials: trial");
        let start = Instant::now();
        let r = f();
        durations.push(start.elapsed());
        black_box(r);
    }
    TimingStats::from_durations(&durations)
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn aggregate() {
        let d = [
            Duration::from_millis(4),
            Duration::from_millis(1),
            Duration::from_millis(7),
        ];
        let s = TimingStats::from_durations(&d).unwrap();
        assert_eq!(s.trials, 3);
        assert_eq!(s.min, Duration::from_millis(1));
        assert_eq!(s.max, Duration::from_millis(7));
        assert_eq!(s.mean, Duration::from_millis(4));
    }

    #[test]
    fn no_trials() {
        assert_eq!(
            TimingStats::from_durations(&[]),
            Err(InvalidInputError::NoTrials)
        );
        assert_eq!(time_trials(0, || 1), Err(InvalidInputError::NoTrials));
    }

    #[test]
    fn ordering() {
        let mut calls = 0;
        let s = time_trials(5, || {
            calls += 1;
            (0..1000).sum::<u64>()
        })
        .unwrap();
        assert_eq!(calls, 5);
        assert!(s.min <= s.mean);
        assert!(s.mean <= s.max);
    }

    #[test]
    fn speedup() {
        let slow = TimingStats::from_durations(&[Duration::from_millis(10)]).unwrap();
        let fast = TimingStats::from_durations(&[Duration::from_millis(2)]).unwrap();
        assert_approx_eq!(f64, fast.speedup_over(&slow), 5.0);
        assert_approx_eq!(f64, slow.speedup_over(&slow), 1.0);
    }
}
