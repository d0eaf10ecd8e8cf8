use crate::error::*;
use crate::util::*;

/// Ordered sample points the initial condition is evaluated at.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeDomain {
    points: Vec<f64>,
}

impl TimeDomain {
    /// `samples` evenly spaced points over `[0, t_max]`,
    /// both endpoints included exactly.
    pub fn linspace(t_max: f64, samples: usize) -> Result<Self> {
        check_len(samples, MIN_TIME_SAMPLES)?;
        if !t_max.is_finite() || t_max < 0.0 {
            return Err(InvalidInputError::InvalidTimeDomain(t_max));
        }
        let last = samples - 1;
        let dt = t_max / last as f64;
        let points = (0..samples)
            .map(|i| if i == last { t_max } else { i as f64 * dt })
            .collect();
        Ok(TimeDomain { points })
    }

    /// Arbitrary points, which must be finite and non-decreasing.
    pub fn from_points(points: Vec<f64>) -> Result<Self> {
        check_len(points.len(), MIN_TIME_SAMPLES)?;
        if let Some(bad) = points.iter().find(|t| !t.is_finite()) {
            return Err(InvalidInputError::InvalidTimeDomain(*bad));
        }
        if let Some(w) = points.windows(2).find(|w| w[1] < w[0]) {
            return Err(InvalidInputError::InvalidTimeDomain(w[1]));
        }
        Ok(TimeDomain { points })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn t_max(&self) -> f64 {
        self.points[self.points.len() - 1]
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn linspace() {
        let d = TimeDomain::linspace(1.0, 5).unwrap();
        assert_eq!(d.len(), 5);
        assert_eq!(d.points()[0], 0.0);
        assert_eq!(d.t_max(), 1.0);
        assert_approx_eq!(f64, d.points()[1], 0.25);
        assert_approx_eq!(f64, d.points()[2], 0.5);

        let d = TimeDomain::linspace(0.3, 7).unwrap();
        assert_eq!(d.t_max(), 0.3);
    }

    #[test]
    fn linspace_errors() {
        assert_eq!(
            TimeDomain::linspace(1.0, 1),
            Err(InvalidInputError::SignalTooShort { len: 1, min: 2 })
        );
        assert_eq!(
            TimeDomain::linspace(1.0, 0),
            Err(InvalidInputError::SignalTooShort { len: 0, min: 2 })
        );
        assert_eq!(
            TimeDomain::linspace(-1.0, 10),
            Err(InvalidInputError::InvalidTimeDomain(-1.0))
        );
        assert!(TimeDomain::linspace(f64::NAN, 10).is_err());
    }

    #[test]
    fn from_points() {
        assert!(TimeDomain::from_points(vec![0.0, 0.5, 0.5, 2.0]).is_ok());
        assert_eq!(
            TimeDomain::from_points(vec![0.0, 2.0, 1.0]),
            Err(InvalidInputError::InvalidTimeDomain(1.0))
        );
        assert!(TimeDomain::from_points(vec![0.0, f64::INFINITY]).is_err());
        assert!(TimeDomain::from_points(vec![]).is_err());
    }
}
