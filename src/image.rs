use crate::domain::*;

/// Space-time picture of a 1D run, one row per recorded state.
pub struct Image1D {
    img_buffer: image::RgbImage,
    lo: f64,
    hi: f64,
}

impl Image1D {
    /// Values in `[lo, hi]` span the full colour map.
    pub fn new(width: u32, lines: u32, lo: f64, hi: f64) -> Self {
        Image1D {
            img_buffer: image::RgbImage::new(width, lines),
            lo,
            hi,
        }
    }

    /// One row per signal in `history`, scaled by the overall range.
    pub fn from_history(history: &[Signal]) -> Self {
        let width = history.first().map(|s| s.len()).unwrap_or(0);
        let (lo, hi) = history
            .iter()
            .filter_map(|s| s.range())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (l, h)| {
                (lo.min(l), hi.max(h))
            });
        let mut result = Image1D::new(width as u32, history.len() as u32, lo, hi);
        for (l, s) in history.iter().enumerate() {
            result.add_line(l as u32, s.as_slice());
        }
        result
    }

    fn normalize(&self, r: f64) -> f64 {
        let span = self.hi - self.lo;
        if !(span.is_finite() && span > 0.0) {
            return 0.5;
        }
        ((r - self.lo) / span).clamp(0.0, 1.0)
    }

    pub fn add_line(&mut self, l: u32, v: &[f64]) {
        debug_assert!(l < self.img_buffer.height());
        debug_assert_eq!(v.len(), self.img_buffer.width() as usize);
        let gradient = colorous::TURBO;
        for x in 0..self.img_buffer.width() {
            let r = self.normalize(v[x as usize]);
            let c = gradient.eval_continuous(r);
            self.img_buffer.put_pixel(x, l, image::Rgb(c.as_array()));
        }
    }

    pub fn width(&self) -> u32 {
        self.img_buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.img_buffer.height()
    }

    pub fn pixel(&self, x: u32, l: u32) -> [u8; 3] {
        self.img_buffer.get_pixel(x, l).0
    }

    pub fn write<F: AsRef<std::path::Path>>(
        self,
        s: &F,
    ) -> Result<(), image::ImageError> {
        log::info!("Writing: {:?}", s.as_ref());
        self.img_buffer.save(s)
    }
}
