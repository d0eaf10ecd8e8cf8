use super::*;

/// Two full size buffers, `current` picks the authoritative one.
pub struct PingPongBuffers {
    buffers: [Vec<f64>; 2],
    current: usize,
}

impl PingPongBuffers {
    pub fn new(signal: &Signal) -> Self {
        let samples = signal.as_slice();
        PingPongBuffers {
            buffers: [samples.to_vec(), samples.to_vec()],
            current: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }
}

impl StencilBuffers for PingPongBuffers {
    fn split(&mut self) -> (&[f64], &mut [f64]) {
        let (a, b) = self.buffers.split_at_mut(1);
        if self.current == 0 {
            (a[0].as_slice(), b[0].as_mut_slice())
        } else {
            (b[0].as_slice(), a[0].as_mut_slice())
        }
    }

    fn swap(&mut self) {
        self.current = 1 - self.current;
    }

    fn current(&self) -> &[f64] {
        &self.buffers[self.current]
    }
}
