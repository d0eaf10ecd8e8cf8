use std::ops::Index;

/// Fixed length, immutable sequence of samples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    pub fn new(samples: Vec<f64>) -> Self {
        Signal { samples }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<f64> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.samples.last().copied()
    }

    /// Samples between the two boundaries.
    pub fn interior(&self) -> &[f64] {
        match self.samples.len() {
            0..=2 => &[],
            n_r => &self.samples[1..n_r - 1],
        }
    }

    pub fn interior_sum(&self) -> f64 {
        self.interior().iter().sum()
    }

    /// Largest interior value, `None` without interior points.
    pub fn interior_max(&self) -> Option<f64> {
        self.interior().iter().copied().reduce(f64::max)
    }

    /// (min, max) over all samples.
    pub fn range(&self) -> Option<(f64, f64)> {
        let first = self.first()?;
        Some(
            self.samples
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Signal::new(samples)
    }
}

impl From<&[f64]> for Signal {
    fn from(samples: &[f64]) -> Self {
        Signal::new(samples.to_vec())
    }
}

impl FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Signal::new(iter.into_iter().collect())
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl Index<usize> for Signal {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Signal {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
