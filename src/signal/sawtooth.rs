use crate::domain::*;
use crate::error::*;
use crate::signal::TimeDomain;

/// Periodic sawtooth wave.
///
/// Within one period the phase `p` runs over `[0, 1)`.
/// The wave rises from `-amplitude` to `amplitude` while `p < width`,
/// then falls back to `-amplitude`.
/// `width == 1.0` is the plain rising ramp, `width == 0.5` a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sawtooth {
    /// Periods per unit of time.
    pub frequency: f64,
    pub amplitude: f64,
    pub width: f64,
}

impl Default for Sawtooth {
    fn default() -> Self {
        Sawtooth {
            frequency: 5.0,
            amplitude: 1.0,
            width: 1.0,
        }
    }
}

impl Sawtooth {
    pub fn new(frequency: f64) -> Self {
        Sawtooth {
            frequency,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.frequency.is_finite() {
            return Err(InvalidInputError::InvalidParameter {
                name: "frequency",
                value: self.frequency,
            });
        }
        if !self.amplitude.is_finite() {
            return Err(InvalidInputError::InvalidParameter {
                name: "amplitude",
                value: self.amplitude,
            });
        }
        if !(0.0..=1.0).contains(&self.width) {
            return Err(InvalidInputError::InvalidParameter {
                name: "width",
                value: self.width,
            });
        }
        Ok(())
    }

    pub fn eval(&self, t: f64) -> f64 {
        let p = (self.frequency * t).rem_euclid(1.0);
        // rem_euclid rounds tiny negative products up to 1.0
        let p = if p >= 1.0 { 0.0 } else { p };
        let unit = if p < self.width {
            -1.0 + 2.0 * p / self.width
        } else {
            1.0 - 2.0 * (p - self.width) / (1.0 - self.width)
        };
        self.amplitude * unit
    }
}

/// Sample `sawtooth` at every point of `time_domain`.
pub fn generate_sawtooth(
    time_domain: &TimeDomain,
    sawtooth: &Sawtooth,
) -> Result<Signal> {
    sawtooth.validate()?;
    Ok(time_domain.points().iter().map(|&t| sawtooth.eval(t)).collect())
}
