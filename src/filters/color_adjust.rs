//! Color adjustment operators: Brightness, Contrast, Grayscale, Invert, Sepia, Opacity.
//!
//! These are pixel-wise operations that don't require spatial context.
//! Each operator takes one pixel's color channels (R, G, B as bytes) and an
//! amount already normalized to the operator's natural unit, and returns
//! new clamped channels.
//!
//! Amounts are never validated: a negative multiplier or an amount above
//! 1.0 is applied as-is and only the output is clamped (see
//! [`adjust_component`]).

use super::core::{adjust_component, mix};

/// Luma coefficients used by the grayscale operator (ITU-R BT.601).
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Sepia tone matrix, one row per output channel.
const SEPIA: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

#[inline]
fn map_channels(rgb: [u8; 3], f: impl Fn(f32) -> f32) -> [u8; 3] {
    rgb.map(|c| adjust_component(f(c as f32)))
}

// ============================================================================
// Brightness
// ============================================================================

/// Scale every color channel.
///
/// # Arguments
/// * `rgb` - Pixel color channels
/// * `amount` - Multiplier, 1.0 = no change, 0.0 = black
pub fn brighten(rgb: [u8; 3], amount: f32) -> [u8; 3] {
    map_channels(rgb, |c| c * amount)
}

// ============================================================================
// Contrast
// ============================================================================

/// Stretch channels away from (or towards) mid-gray.
///
/// # Arguments
/// * `rgb` - Pixel color channels
/// * `amount` - Multiplier around the 128 pivot, 1.0 = no change, 0.0 = flat gray
pub fn contrast(rgb: [u8; 3], amount: f32) -> [u8; 3] {
    map_channels(rgb, |c| amount * (c - 128.0) + 128.0)
}

// ============================================================================
// Grayscale
// ============================================================================

/// Blend channels towards the pixel's luma.
///
/// # Arguments
/// * `rgb` - Pixel color channels
/// * `amount` - 0.0 = no change, 1.0 = fully desaturated
pub fn grayscale(rgb: [u8; 3], amount: f32) -> [u8; 3] {
    let [r, g, b] = rgb.map(f32::from);
    let luma = LUMA_R * r + LUMA_G * g + LUMA_B * b;
    map_channels(rgb, |c| mix(c, luma, amount))
}

// ============================================================================
// Invert
// ============================================================================

/// Blend channels towards their inverse.
///
/// # Arguments
/// * `rgb` - Pixel color channels
/// * `amount` - 0.0 = no change, 1.0 = fully inverted, 0.5 = flat gray
pub fn invert(rgb: [u8; 3], amount: f32) -> [u8; 3] {
    map_channels(rgb, |c| mix(c, 255.0 - c, amount))
}

// ============================================================================
// Sepia
// ============================================================================

/// Blend channels towards their sepia tone.
///
/// # Arguments
/// * `rgb` - Pixel color channels
/// * `amount` - 0.0 = no change, 1.0 = full sepia
pub fn sepia(rgb: [u8; 3], amount: f32) -> [u8; 3] {
    let [r, g, b] = rgb.map(f32::from);
    let mut out = [0u8; 3];
    for (channel, row) in SEPIA.iter().enumerate() {
        let target = row[0] * r + row[1] * g + row[2] * b;
        out[channel] = adjust_component(mix(f32::from(rgb[channel]), target, amount));
    }
    out
}

// ============================================================================
// Opacity
// ============================================================================

/// Scale the alpha channel. Only meaningful for layouts that carry alpha.
///
/// # Arguments
/// * `alpha` - Pixel alpha
/// * `amount` - Multiplier, 1.0 = no change, 0.0 = fully transparent
pub fn opacify(alpha: u8, amount: f32) -> u8 {
    adjust_component(alpha as f32 * amount)
}
