//! Built-in pixel operators and how a filter value maps onto them.
//!
//! Filter values use the declarative units (percent, degrees, pixels).
//! Each operator normalizes the value to its own amount before touching
//! pixels, e.g. `brightness(150%)` becomes a 1.5 multiplier.

use serde::{Deserialize, Serialize};

use super::blur::gaussian_blur;
use super::color_adjust::{brighten, contrast, grayscale, invert, opacify, sepia};
use super::color_science::{rotate_hue, saturate, HueRotationMatrix};
use super::layout::ByteLayout;
use crate::error::Result;

/// One of the engine's pixel transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Brighten,
    Contrast,
    Grayscale,
    Invert,
    Sepia,
    Saturate,
    /// Perceptual rotation around the HSL wheel.
    RotateHue,
    /// Compositor-equivalent matrix rotation.
    RotateHueMatrix,
    Opacify,
    Blur,
}

impl Operator {
    /// Convert a filter value to this operator's amount.
    ///
    /// | Operator | Value | Amount |
    /// |----------|-------|--------|
    /// | percent based | `v` % | `v / 100` |
    /// | `RotateHue` | `v` deg | `v / 360` turns |
    /// | `RotateHueMatrix` | `v` deg | `v` degrees |
    /// | `Blur` | `v` px | `v` sigma |
    pub fn amount(self, value: f32) -> f32 {
        match self {
            Operator::Brighten
            | Operator::Contrast
            | Operator::Grayscale
            | Operator::Invert
            | Operator::Sepia
            | Operator::Saturate
            | Operator::Opacify => value / 100.0,
            Operator::RotateHue => value / 360.0,
            Operator::RotateHueMatrix | Operator::Blur => value,
        }
    }

    /// Apply the operator to a validated region of whole pixels.
    ///
    /// Color operators rewrite R, G, B and never alpha; `Opacify` rewrites
    /// only alpha and leaves `Packed` regions alone.
    pub fn apply(
        self,
        region: &mut [u8],
        value: f32,
        layout: ByteLayout,
        width: Option<usize>,
    ) -> Result<()> {
        let amount = self.amount(value);
        let stride = layout.stride();

        match self {
            Operator::Brighten => map_rgb(region, stride, |px| brighten(px, amount)),
            Operator::Contrast => map_rgb(region, stride, |px| contrast(px, amount)),
            Operator::Grayscale => map_rgb(region, stride, |px| grayscale(px, amount)),
            Operator::Invert => map_rgb(region, stride, |px| invert(px, amount)),
            Operator::Sepia => map_rgb(region, stride, |px| sepia(px, amount)),
            Operator::Saturate => map_rgb(region, stride, |px| saturate(px, amount)),
            Operator::RotateHue => map_rgb(region, stride, |px| rotate_hue(px, amount)),
            Operator::RotateHueMatrix => {
                let matrix = HueRotationMatrix::new(amount);
                map_rgb(region, stride, |px| matrix.apply(px));
            }
            Operator::Opacify => {
                if layout.has_alpha() {
                    for px in region.chunks_exact_mut(stride) {
                        px[3] = opacify(px[3], amount);
                    }
                } else {
                    log::debug!("opacity on a layout without alpha, nothing to do");
                }
            }
            Operator::Blur => gaussian_blur(region, layout, width, amount)?,
        }
        Ok(())
    }
}

#[inline]
fn map_rgb(region: &mut [u8], stride: usize, f: impl Fn([u8; 3]) -> [u8; 3]) {
    for px in region.chunks_exact_mut(stride) {
        let out = f([px[0], px[1], px[2]]);
        px[..3].copy_from_slice(&out);
    }
}
