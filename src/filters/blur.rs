//! Gaussian blur over a pixel region.
//!
//! The declarative `blur(<n>px)` function is a Gaussian with standard
//! deviation `n` pixels. This is the CPU equivalent: a separable two-pass
//! convolution with edge-clamped sampling.
//!
//! Only the color channels are blurred; alpha (if present) is left as-is,
//! like every other color operator.

use ndarray::{Array3, ArrayViewMut3};

use super::core::{adjust_component, gaussian_kernel_1d};
use super::layout::ByteLayout;
use crate::error::{FilterError, Result};

/// Apply Gaussian blur to a region of pixels in place.
///
/// # Arguments
/// * `region` - Bytes of whole pixels, row-major
/// * `layout` - Pixel layout of `region`
/// * `width` - Row length in pixels; `None` treats the region as one row
/// * `sigma` - Standard deviation in pixels, `<= 0.0` is a no-op. Huge
///   values are fine: the kernel never reaches past the image.
///
/// # Errors
/// [`FilterError::RowMismatch`] when the region doesn't split into rows of
/// `width` pixels. Checked before anything is written.
pub fn gaussian_blur(
    region: &mut [u8],
    layout: ByteLayout,
    width: Option<usize>,
    sigma: f32,
) -> Result<()> {
    let stride = layout.stride();
    let pixels = layout.pixel_count(region.len())?;
    let width = width.unwrap_or(pixels);

    if pixels == 0 {
        return Ok(());
    }
    if width == 0 || pixels % width != 0 {
        return Err(FilterError::RowMismatch { pixels, width });
    }
    if sigma <= 0.0 || sigma.is_nan() {
        return Ok(());
    }

    let height = pixels / width;
    let mut image = ArrayViewMut3::from_shape((height, width, stride), region)
        .map_err(|_| FilterError::RowMismatch { pixels, width })?;

    let kernel = gaussian_kernel_1d(f64::from(sigma), width.max(height));
    let half = kernel.len() / 2;

    let mut temp = Array3::<f64>::zeros((height, width, 3));

    // Horizontal pass
    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let mut sum = 0.0f64;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sx = (x as isize + ki as isize - half as isize)
                        .clamp(0, width as isize - 1) as usize;
                    sum += f64::from(image[[y, sx, c]]) * kv;
                }
                temp[[y, x, c]] = sum;
            }
        }
    }

    // Vertical pass, written straight back
    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                let mut sum = 0.0f64;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sy = (y as isize + ki as isize - half as isize)
                        .clamp(0, height as isize - 1) as usize;
                    sum += temp[[sy, x, c]] * kv;
                }
                image[[y, x, c]] = adjust_component(sum as f32);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(width: usize, height: usize) -> Vec<u8> {
        // Black RGBA image with one white pixel in the middle
        let mut data = vec![0u8; width * height * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        let center = (height / 2 * width + width / 2) * 4;
        data[center..center + 3].copy_from_slice(&[255, 255, 255]);
        data
    }

    #[test]
    fn test_blur_spreads_spot() {
        let mut data = spot(5, 5);
        gaussian_blur(&mut data, ByteLayout::WithAlpha, Some(5), 1.0).unwrap();

        let at = |x: usize, y: usize| data[(y * 5 + x) * 4];
        assert!(at(2, 2) < 255);
        assert!(at(1, 2) > 0);
        assert!(at(2, 1) > 0);
        // Symmetric around the center
        assert_eq!(at(1, 2), at(3, 2));
        assert_eq!(at(2, 1), at(2, 3));
    }

    #[test]
    fn test_blur_preserves_alpha() {
        let mut data = spot(5, 5);
        gaussian_blur(&mut data, ByteLayout::WithAlpha, Some(5), 2.0).unwrap();
        assert!(data.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_blur_uniform_unchanged() {
        let mut data = vec![77u8; 4 * 4 * 3];
        gaussian_blur(&mut data, ByteLayout::Packed, Some(4), 3.0).unwrap();
        assert!(data.iter().all(|&v| v == 77));
    }

    #[test]
    fn test_blur_zero_sigma_noop() {
        let original = spot(3, 3);
        let mut data = original.clone();
        gaussian_blur(&mut data, ByteLayout::WithAlpha, Some(3), 0.0).unwrap();
        assert_eq!(data, original);
    }

    #[test]
    fn test_blur_single_row_without_width() {
        let mut data = vec![0, 0, 0, 255, 255, 255, 0, 0, 0];
        gaussian_blur(&mut data, ByteLayout::Packed, None, 1.0).unwrap();
        assert!(data[0] > 0);
        assert_eq!(data[0], data[6]);
    }

    #[test]
    fn test_blur_huge_sigma_stays_bounded() {
        let mut pixel = vec![10, 20, 30, 255];
        gaussian_blur(&mut pixel, ByteLayout::WithAlpha, None, f32::MAX).unwrap();
        assert_eq!(pixel, vec![10, 20, 30, 255]);

        let mut pixel = vec![10, 20, 30];
        gaussian_blur(&mut pixel, ByteLayout::Packed, None, f32::INFINITY).unwrap();
        assert_eq!(pixel, vec![10, 20, 30]);
    }

    #[test]
    fn test_blur_huge_sigma_averages_image() {
        let mut data = vec![0, 0, 0, 90, 90, 90];
        gaussian_blur(&mut data, ByteLayout::Packed, None, 1e9).unwrap();
        // Flat 5-tap kernel, edge-clamped: 2/5 and 3/5 of 90
        assert_eq!(data, vec![36, 36, 36, 54, 54, 54]);
    }

    #[test]
    fn test_blur_rejects_ragged_rows() {
        let original = spot(3, 3);
        let mut data = original.clone();
        let result = gaussian_blur(&mut data, ByteLayout::WithAlpha, Some(4), 1.0);
        assert!(matches!(
            result,
            Err(FilterError::RowMismatch { pixels: 9, width: 4 })
        ));
        assert_eq!(data, original);
    }
}
