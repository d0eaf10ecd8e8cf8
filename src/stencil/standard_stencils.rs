use crate::stencil::*;

/// Scale of the 1:2:1 blur stencil.
pub const BLUR_SCALE: f64 = 0.25;

/// Weight of the centre point of the 1:2:1 blur stencil.
pub const BLUR_CENTER: f64 = 2.0;

/// One point of the 1:2:1 blur.
/// Every specialized kernel evaluates it in this exact order,
/// which keeps them bit-for-bit identical.
#[inline(always)]
pub fn blur_point(left: f64, middle: f64, right: f64) -> f64 {
    BLUR_SCALE * (left + BLUR_CENTER * middle + right)
}

/// The 1:2:1 averaging stencil, normalized by 4.
pub fn blur_1d() -> Stencil<3> {
    Stencil::new([-1, 0, 1], |args: &[f64; 3]| {
        blur_point(args[0], args[1], args[2])
    })
}

/// Explicit Euler step of the 1D heat equation.
/// With `k * dt / dx^2 == 0.25` this is `blur_1d`.
pub fn heat_1d(dt: f64, dx: f64, k: f64) -> Stencil<3> {
    Stencil::new([-1, 0, 1], move |args: &[f64; 3]| {
        let left = args[0];
        let middle = args[1];
        let right = args[2];
        middle + (k * dt / (dx * dx)) * (left - 2.0 * middle + right)
    })
}
