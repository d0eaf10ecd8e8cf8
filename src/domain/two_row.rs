use super::*;
use crate::util::*;

/// One allocation holding two rows of `n_r` samples.
/// The current row is chosen by the parity of the completed rounds.
pub struct TwoRowBuffer {
    rows: Vec<f64>,
    n_r: usize,
    round: usize,
}

impl TwoRowBuffer {
    pub fn new(signal: &Signal) -> Self {
        let n_r = signal.len();
        let mut rows = Vec::with_capacity(2 * n_r);
        rows.extend_from_slice(signal.as_slice());
        rows.extend_from_slice(signal.as_slice());
        TwoRowBuffer { rows, n_r, round: 0 }
    }

    pub fn round(&self) -> usize {
        self.round
    }
}

impl StencilBuffers for TwoRowBuffer {
    fn split(&mut self) -> (&[f64], &mut [f64]) {
        let (row_0, row_1) = self.rows.split_at_mut(self.n_r);
        if parity_row(self.round) == 0 {
            (&*row_0, row_1)
        } else {
            (&*row_1, row_0)
        }
    }

    fn swap(&mut self) {
        self.round += 1;
    }

    fn current(&self) -> &[f64] {
        let start = parity_row(self.round) * self.n_r;
        &self.rows[start..start + self.n_r]
    }

    fn len(&self) -> usize {
        self.n_r
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn rows_alternate() {
        let mut b = TwoRowBuffer::new(&Signal::from(vec![0.0, 1.0, 0.0]));
        assert_eq!(b.len(), 3);
        for round in 0..4 {
            assert_eq!(b.round(), round);
            {
                let (i, o) = b.split();
                o[1] = i[1] + 1.0;
            }
            b.swap();
        }
        assert_eq!(b.current(), &[0.0, 5.0, 0.0]);
    }

    #[test]
    fn rows_are_disjoint() {
        let mut b = TwoRowBuffer::new(&Signal::from(vec![4.0, 5.0, 6.0, 7.0]));
        let (i, o) = b.split();
        assert_eq!(i, o);
        assert_eq!(i.as_ptr().wrapping_add(4), o.as_ptr());
    }
}
