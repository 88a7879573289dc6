//! Color science operators: Saturation and the two Hue Rotations.
//!
//! Saturation and the perceptual hue rotation go through HSL (see
//! [`super::color_space`]). The compositor-equivalent hue rotation instead
//! applies the luminance-preserving 3x3 matrix used by CSS/SVG
//! `hue-rotate()`.
//!
//! The two hue rotations produce visibly different colors for the same
//! angle: one rotates around the color wheel, the other reproduces what a
//! browser renders for the declarative string.

use super::color_space::{hsl_to_rgb, rgb_to_hsl};
use super::core::adjust_component;

/// Luminance coefficients (ITU-R BT.709)
const LUM_R: f64 = 0.2126;
const LUM_G: f64 = 0.7152;
const LUM_B: f64 = 0.0722;

/// Hue-rotate coefficients from the SVG `feColorMatrix` definition
const HUE_R: f64 = 0.143;
const HUE_G: f64 = 0.140;
const HUE_B: f64 = 0.283;

#[inline]
fn to_bytes((r, g, b): (f64, f64, f64)) -> [u8; 3] {
    [r, g, b].map(|c| adjust_component(c as f32))
}

// ============================================================================
// Saturation
// ============================================================================

/// Scale the pixel's HSL saturation.
///
/// # Arguments
/// * `rgb` - Pixel color channels
/// * `amount` - Saturation multiplier: 0.0 = gray, 1.0 = no change, >1.0 = vivid
pub fn saturate(rgb: [u8; 3], amount: f32) -> [u8; 3] {
    let [r, g, b] = rgb.map(f64::from);
    let (h, s, l) = rgb_to_hsl(r, g, b);
    to_bytes(hsl_to_rgb(h, s * f64::from(amount), l))
}

// ============================================================================
// Hue Rotation (perceptual)
// ============================================================================

/// Rotate the pixel's hue around the HSL color wheel.
///
/// # Arguments
/// * `rgb` - Pixel color channels
/// * `turns` - Hue offset as a fraction of a full turn (degrees / 360), wraps
pub fn rotate_hue(rgb: [u8; 3], turns: f32) -> [u8; 3] {
    let [r, g, b] = rgb.map(f64::from);
    let (h, s, l) = rgb_to_hsl(r, g, b);
    to_bytes(hsl_to_rgb((h + f64::from(turns)).rem_euclid(1.0), s, l))
}

// ============================================================================
// Hue Rotation (compositor matrix)
// ============================================================================

/// Luminance-preserving hue rotation matrix for a fixed angle.
///
/// Buffer transforms build it once per call and reuse it for every pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRotationMatrix {
    m: [f64; 9],
}

impl HueRotationMatrix {
    /// Build the matrix for `degrees` of rotation.
    pub fn new(degrees: f32) -> Self {
        let radians = f64::from(degrees).to_radians();
        let cos = radians.cos();
        let sin = radians.sin();

        Self {
            m: [
                LUM_R + (1.0 - LUM_R) * cos - LUM_R * sin,
                LUM_G - LUM_G * cos - LUM_G * sin,
                LUM_B - LUM_B * cos + (1.0 - LUM_B) * sin,
                LUM_R - LUM_R * cos + HUE_R * sin,
                LUM_G + (1.0 - LUM_G) * cos + HUE_G * sin,
                LUM_B - LUM_B * cos - HUE_B * sin,
                LUM_R - LUM_R * cos - (1.0 - LUM_R) * sin,
                LUM_G - LUM_G * cos + LUM_G * sin,
                LUM_B + (1.0 - LUM_B) * cos + LUM_B * sin,
            ],
        }
    }

    /// Apply the matrix to one pixel.
    #[inline]
    pub fn apply(&self, rgb: [u8; 3]) -> [u8; 3] {
        let [r, g, b] = rgb.map(f64::from);
        let m = &self.m;
        to_bytes((
            m[0] * r + m[1] * g + m[2] * b,
            m[3] * r + m[4] * g + m[5] * b,
            m[6] * r + m[7] * g + m[8] * b,
        ))
    }
}

/// Rotate hue the way a compositor's `hue-rotate()` does.
///
/// # Arguments
/// * `rgb` - Pixel color channels
/// * `degrees` - Rotation angle in degrees
pub fn rotate_hue_matrix(rgb: [u8; 3], degrees: f32) -> [u8; 3] {
    HueRotationMatrix::new(degrees).apply(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [[u8; 3]; 7] = [
        [0, 0, 0],
        [255, 255, 255],
        [100, 150, 200],
        [255, 0, 0],
        [13, 201, 77],
        [128, 128, 128],
        [250, 3, 129],
    ];

    // ========================================================================
    // Saturation Tests
    // ========================================================================

    #[test]
    fn test_saturate_neutral() {
        for px in SAMPLES {
            assert_eq!(saturate(px, 1.0), px);
        }
    }

    #[test]
    fn test_saturate_zero_is_gray() {
        for px in SAMPLES {
            let [r, g, b] = saturate(px, 0.0);
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn test_saturate_boosts_spread() {
        let before = [100u8, 150, 200];
        let after = saturate(before, 1.5);
        assert!(after[2] - after[0] > before[2] - before[0]);
    }

    // ========================================================================
    // Hue Rotation Tests
    // ========================================================================

    #[test]
    fn test_rotate_hue_neutral() {
        for px in SAMPLES {
            assert_eq!(rotate_hue(px, 0.0), px);
        }
    }

    #[test]
    fn test_rotate_hue_primaries() {
        assert_eq!(rotate_hue([255, 0, 0], 1.0 / 3.0), [0, 255, 0]);
        assert_eq!(rotate_hue([255, 0, 0], 2.0 / 3.0), [0, 0, 255]);
    }

    #[test]
    fn test_rotate_hue_full_turn_wraps() {
        for px in SAMPLES {
            assert_eq!(rotate_hue(px, 1.0), rotate_hue(px, 0.0));
        }
    }

    #[test]
    fn test_rotate_hue_matrix_zero_is_identity() {
        for px in SAMPLES {
            assert_eq!(rotate_hue_matrix(px, 0.0), px);
        }
    }

    #[test]
    fn test_rotate_hue_matrix_keeps_grays() {
        for v in [0u8, 64, 128, 255] {
            let [r, g, b] = rotate_hue_matrix([v, v, v], 90.0);
            assert!((r as i32 - v as i32).abs() <= 1);
            assert!((g as i32 - v as i32).abs() <= 1);
            assert!((b as i32 - v as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_hue_rotations_differ() {
        // Same angle, different models
        let px = [255, 0, 0];
        assert_ne!(rotate_hue(px, 120.0 / 360.0), rotate_hue_matrix(px, 120.0));
    }

    #[test]
    fn test_matrix_reuse_matches_free_function() {
        let matrix = HueRotationMatrix::new(-30.0);
        for px in SAMPLES {
            assert_eq!(matrix.apply(px), rotate_hue_matrix(px, -30.0));
        }
    }
}
