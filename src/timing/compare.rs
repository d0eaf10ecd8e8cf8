use crate::domain::*;
use crate::error::*;
use crate::solver::*;
use crate::timing::*;

/// Relative tolerance variants must agree within.
pub const EQUIVALENCE_TOLERANCE: f64 = 1e-9;

/// Largest absolute difference, relative to the magnitude of `a`.
/// Magnitudes below 1.0 are treated as 1.0 so values near zero
/// are compared absolutely.
pub fn max_relative_difference(a: &[f64], b: &[f64]) -> Result<f64> {
    check_same_len(a.len(), b.len())?;
    let scale = a.iter().fold(1.0_f64, |m, v| m.max(v.abs()));
    let diff = a
        .iter()
        .zip(b)
        .fold(0.0_f64, |m, (x, y)| m.max((x - y).abs()));
    Ok(diff / scale)
}

pub fn signals_agree(a: &Signal, b: &Signal, tolerance: f64) -> bool {
    max_relative_difference(a.as_slice(), b.as_slice())
        .map(|d| d <= tolerance)
        .unwrap_or(false)
}

#[derive(Clone, Debug)]
pub struct VariantReport {
    pub solver: DiffusionSolver,
    pub stats: TimingStats,
    /// Baseline mean over this solver's mean.
    pub speedup: f64,
    /// Against the baseline's output.
    pub max_relative_difference: f64,
    pub output: Signal,
}

impl VariantReport {
    pub fn agrees(&self) -> bool {
        self.max_relative_difference <= EQUIVALENCE_TOLERANCE
    }

    pub fn label(&self) -> String {
        format!(
            "{}/{}",
            self.solver.variant.name(),
            self.solver.buffering.name()
        )
    }
}

/// Time every solver on the same input.
/// The first solver is the baseline for speedups and for
/// the equivalence check.
pub fn compare_variants(
    signal: &Signal,
    steps: usize,
    trials: usize,
    solvers: &[DiffusionSolver],
) -> Result<Vec<VariantReport>> {
    if trials == 0 {
        return Err(InvalidInputError::NoTrials);
    }
    check_len(signal.len(), crate::util::MIN_SIGNAL_LEN)?;

    let mut result: Vec<VariantReport> = Vec::with_capacity(solvers.len());
    for solver in solvers {
        let output = solver.apply(signal, steps)?;
        let stats = time_trials(trials, || solver.apply(signal, steps))?;
        let (speedup, difference) = match result.first() {
            Some(baseline) => (
                stats.speedup_over(&baseline.stats),
                max_relative_difference(baseline.output.as_slice(), output.as_slice())?,
            ),
            None => (1.0, 0.0),
        };
        log::info!(
            "{}/{}: {}",
            solver.variant.name(),
            solver.buffering.name(),
            stats
        );
        result.push(VariantReport {
            solver: *solver,
            stats,
            speedup,
            max_relative_difference: difference,
            output,
        });
    }
    Ok(result)
}

/// Fixed width table of the reports, one line per solver.
pub fn format_report(reports: &[VariantReport]) -> String {
    let mut out = format!(
        "{:<26} {:>14} {:>14} {:>14} {:>9} {:>10}\n",
        "variant", "mean", "min", "max", "speedup", "max diff"
    );
    for r in reports {
        out.push_str(&format!(
            "{:<26} {:>14} {:>14} {:>14} {:>8.2}x {:>10.2e}\n",
            r.label(),
            format!("{:?}", r.stats.mean),
            format!("{:?}", r.stats.min),
            format!("{:?}", r.stats.max),
            r.speedup,
            r.max_relative_difference
        ));
    }
    out
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn relative_difference() {
        let a = [0.0, 100.0, -200.0];
        let b = [0.0, 100.0, -199.0];
        let d = max_relative_difference(&a, &b).unwrap();
        assert_eq!(d, 1.0 / 200.0);

        let small = [1e-3, 0.0];
        let small_b = [2e-3, 0.0];
        assert_eq!(max_relative_difference(&small, &small_b).unwrap(), 1e-3);

        assert!(max_relative_difference(&a, &small).is_err());
    }

    #[test]
    fn agree() {
        let a = Signal::from(vec![1.0, 2.0, 3.0]);
        let b = Signal::from(vec![1.0, 2.0 + 1e-12, 3.0]);
        let c = Signal::from(vec![1.0, 2.1, 3.0]);
        assert!(signals_agree(&a, &b, EQUIVALENCE_TOLERANCE));
        assert!(!signals_agree(&a, &c, EQUIVALENCE_TOLERANCE));
        assert!(!signals_agree(&a, &Signal::from(vec![1.0]), 1.0));
    }

    #[test]
    fn compare_all() {
        let signal: Signal = (0..200).map(|i| ((i % 20) as f64) / 10.0 - 1.0).collect();
        let solvers: Vec<DiffusionSolver> = Variant::ALL
            .iter()
            .map(|v| DiffusionSolver::new(*v, Buffering::TwoRow, 16))
            .collect();
        let reports = compare_variants(&signal, 64, 2, &solvers).unwrap();
        assert_eq!(reports.len(), 5);
        assert_eq!(reports[0].speedup, 1.0);
        for r in &reports {
            assert!(r.agrees(), "{} differs by {}", r.label(), r.max_relative_difference);
            assert_eq!(r.stats.trials, 2);
            assert_eq!(r.output.len(), 200);
        }
        let table = format_report(&reports);
        assert_eq!(table.lines().count(), 6);
        assert!(table.contains("jit/two_row"));
    }

    #[test]
    fn compare_errors() {
        let signal = Signal::from(vec![1.0, 2.0, 3.0]);
        let solvers = [DiffusionSolver::default()];
        assert!(matches!(
            compare_variants(&signal, 1, 0, &solvers),
            Err(InvalidInputError::NoTrials)
        ));
        assert!(compare_variants(&Signal::from(vec![1.0]), 1, 1, &solvers).is_err());
    }
}
