//! RGB <-> HSL conversion.
//!
//! RGB components use the byte scale (0.0-255.0); HSL components are all
//! normalized to 0.0-1.0, hue included (one full turn = 1.0).
//!
//! Both directions work in f64: a round-trip of byte inputs lands within
//! ~1e-12 of the original integers, well inside the clamp's snap.
//!
//! Neither direction clamps. Out-of-range inputs are converted as-is and the
//! caller decides how to bring the result back into a byte.

/// Convert RGB to HSL.
/// Input: r, g, b in 0.0-255.0
/// Output: (h, s, l) where h is 0.0-1.0 (exclusive), s and l are 0.0-1.0
#[inline]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let r = r / 255.0;
    let g = g / 255.0;
    let b = b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// Convert HSL to RGB.
/// Input: h in 0.0-1.0 (wraps), s and l in 0.0-1.0
/// Output: (r, g, b) in 0.0-255.0, unclamped
#[inline]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l * 255.0, l * 255.0, l * 255.0);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    (r * 255.0, g * 255.0, b * 255.0)
}

/// One channel of the piecewise-linear HSL reconstruction.
#[inline]
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert!((actual.0 - expected.0).abs() < 1e-4, "{actual:?} != {expected:?}");
        assert!((actual.1 - expected.1).abs() < 1e-4, "{actual:?} != {expected:?}");
        assert!((actual.2 - expected.2).abs() < 1e-4, "{actual:?} != {expected:?}");
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        assert_close(rgb_to_hsl(255.0, 0.0, 0.0), (0.0, 1.0, 0.5));
        assert_close(rgb_to_hsl(0.0, 255.0, 0.0), (1.0 / 3.0, 1.0, 0.5));
        assert_close(rgb_to_hsl(0.0, 0.0, 255.0), (2.0 / 3.0, 1.0, 0.5));
    }

    #[test]
    fn test_rgb_to_hsl_achromatic() {
        let (h, s, l) = rgb_to_hsl(128.0, 128.0, 128.0);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_to_hsl_magenta_wraps_positive() {
        // Red dominant with g < b lands just below a full turn
        let (h, _, _) = rgb_to_hsl(255.0, 0.0, 128.0);
        assert!(h > 0.8 && h < 1.0);
    }

    #[test]
    fn test_rgb_to_hsl_accepts_out_of_range() {
        let (h, s, l) = rgb_to_hsl(300.0, -20.0, 0.0);
        assert!(h.is_finite() && s.is_finite() && l.is_finite());
    }

    #[test]
    fn test_hsl_to_rgb_achromatic() {
        assert_close(hsl_to_rgb(0.3, 0.0, 0.5), (127.5, 127.5, 127.5));
    }

    #[test]
    fn test_hsl_to_rgb_wraps_hue() {
        assert_close(hsl_to_rgb(1.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
        assert_close(hsl_to_rgb(-0.5, 1.0, 0.5), hsl_to_rgb(0.5, 1.0, 0.5));
    }

    #[test]
    fn test_round_trip_is_exact_on_integers() {
        for (r, g, b) in [(100.0, 150.0, 200.0), (250.0, 3.0, 129.0), (13.0, 201.0, 77.0)] {
            let (h, s, l) = rgb_to_hsl(r, g, b);
            let (nr, ng, nb) = hsl_to_rgb(h, s, l);
            assert!((nr - r).abs() < 1e-9 && (ng - g).abs() < 1e-9 && (nb - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_round_trip_within_one() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(17) {
                for b in (0..=255).step_by(51) {
                    let (h, s, l) = rgb_to_hsl(r as f64, g as f64, b as f64);
                    let (nr, ng, nb) = hsl_to_rgb(h, s, l);
                    assert!((nr - r as f64).abs() <= 1.0, "r {r} -> {nr}");
                    assert!((ng - g as f64).abs() <= 1.0, "g {g} -> {ng}");
                    assert!((nb - b as f64).abs() <= 1.0, "b {b} -> {nb}");
                }
            }
        }
    }
}
