//! Core utilities shared by the filters.
//!
//! This module provides functionality used by multiple filters:
//! - Component clamping (the rounding rule every operator ends with)
//! - Linear interpolation between component values
//! - Gaussian kernel generation

/// Distance from an integer below which a value is treated as that integer.
///
/// Products like `0.1 * 1000.0` leave noise such as `100.00002`, which must
/// still come out as 100. Anything further from the integer rounds up.
const SNAP_EPSILON: f32 = 1e-4;

/// Clamp a computed component back into a byte.
///
/// Rounds up to the nearest integer, then clips to 0-255. NaN becomes 0.
#[inline]
pub fn adjust_component(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let nearest = value.round();
    let rounded = if (value - nearest).abs() < SNAP_EPSILON {
        nearest
    } else {
        value.ceil()
    };
    rounded.clamp(0.0, 255.0) as u8
}

/// Move `from` towards `to` by `amount` (0.0 = `from`, 1.0 = `to`).
///
/// Exact at both endpoints.
#[inline]
pub fn mix(from: f32, to: f32, amount: f32) -> f32 {
    from * (1.0 - amount) + to * amount
}

/// Generate a 1D Gaussian kernel.
///
/// # Arguments
/// * `sigma` - Standard deviation of the Gaussian, in pixels
/// * `max_half` - Largest useful reach in pixels. With edge-clamped sampling
///   every tap further out reads the same edge pixel, so the kernel stops there.
///
/// # Returns
/// Normalized kernel of odd length `2 * half + 1`, `half <= max_half`
pub fn gaussian_kernel_1d(sigma: f64, max_half: usize) -> Vec<f64> {
    if sigma.is_nan() || sigma <= 0.0 {
        return vec![1.0];
    }

    // 3 sigma either side covers 99.7% of the distribution
    let reach = (sigma * 3.0).ceil();
    let half = if reach < max_half as f64 {
        reach as usize
    } else {
        max_half
    };

    // An infinite sigma flattens into a box average
    let spread = 2.0 * sigma * sigma;
    let mut kernel: Vec<f64> = (0..=2 * half)
        .map(|i| {
            let x = i as f64 - half as f64;
            (-x * x / spread).exp()
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}
