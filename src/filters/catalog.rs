//! The standard filters, one per declarative filter function.
//!
//! | Filter | Declarative | Neutral |
//! |--------|-------------|---------|
//! | `BrightnessFilter` | `brightness(<v>%)` | 100 |
//! | `ContrastFilter` | `contrast(<v>%)` | 100 |
//! | `GrayscaleFilter` | `grayscale(<v>%)` | 0 |
//! | `InversionFilter` | `invert(<v>%)` | 0 |
//! | `OpacityFilter` | `opacity(<v>%)` | 100 |
//! | `SaturationFilter` | `saturate(<v>%)` | 100 |
//! | `SepiaFilter` | `sepia(<v>%)` | 0 |
//! | `HueRotationFilter` | `hue-rotate(<v>deg)` | 0 |
//! | `HueRotationBrowserFilter` | `hue-rotate(<v>deg)` | 0 |
//! | `BlurFilter` | `blur(<v>px)` | 0 |

use super::factory::{Filter, Neutral, Processor, Representation};
use super::operator::Operator;

fn standard(
    name: &'static str,
    function: &'static str,
    unit: &'static str,
    neutral: f32,
    operator: Operator,
) -> Filter {
    Filter::new(
        name,
        Representation::template(function, unit),
        Neutral::Value(neutral),
        Processor::Pixel(operator),
    )
}

pub fn brightness() -> Filter {
    standard("BrightnessFilter", "brightness", "%", 100.0, Operator::Brighten)
}

pub fn contrast() -> Filter {
    standard("ContrastFilter", "contrast", "%", 100.0, Operator::Contrast)
}

pub fn grayscale() -> Filter {
    standard("GrayscaleFilter", "grayscale", "%", 0.0, Operator::Grayscale)
}

pub fn inversion() -> Filter {
    standard("InversionFilter", "invert", "%", 0.0, Operator::Invert)
}

/// Scales alpha only; a no-op on buffers without alpha.
pub fn opacity() -> Filter {
    standard("OpacityFilter", "opacity", "%", 100.0, Operator::Opacify)
}

pub fn saturation() -> Filter {
    standard("SaturationFilter", "saturate", "%", 100.0, Operator::Saturate)
}

pub fn sepia() -> Filter {
    standard("SepiaFilter", "sepia", "%", 0.0, Operator::Sepia)
}

/// Perceptual hue rotation around the HSL wheel.
///
/// Renders the same declarative string as [`hue_rotation_browser`] but the
/// pixels differ from what a browser draws for it.
pub fn hue_rotation() -> Filter {
    standard("HueRotationFilter", "hue-rotate", "deg", 0.0, Operator::RotateHue)
}

/// Hue rotation matching the compositor's `hue-rotate()` pixel for pixel.
pub fn hue_rotation_browser() -> Filter {
    standard(
        "HueRotationBrowserFilter",
        "hue-rotate",
        "deg",
        0.0,
        Operator::RotateHueMatrix,
    )
}

/// Gaussian blur; the value is the standard deviation in pixels.
pub fn blur() -> Filter {
    standard("BlurFilter", "blur", "px", 0.0, Operator::Blur)
}

/// Every standard filter.
pub fn all() -> Vec<Filter> {
    vec![
        brightness(),
        contrast(),
        grayscale(),
        inversion(),
        opacity(),
        saturation(),
        sepia(),
        hue_rotation(),
        hue_rotation_browser(),
        blur(),
    ]
}

/// Look a filter up by its name (`SepiaFilter`) or declarative function
/// (`sepia`).
///
/// `hue-rotate` resolves to [`hue_rotation_browser`], since that is what the
/// declarative string renders as.
pub fn by_name(name: &str) -> Option<Filter> {
    let filter = match name {
        "brightness" | "BrightnessFilter" => brightness(),
        "contrast" | "ContrastFilter" => contrast(),
        "grayscale" | "GrayscaleFilter" => grayscale(),
        "invert" | "InversionFilter" => inversion(),
        "opacity" | "OpacityFilter" => opacity(),
        "saturate" | "SaturationFilter" => saturation(),
        "sepia" | "SepiaFilter" => sepia(),
        "HueRotationFilter" => hue_rotation(),
        "hue-rotate" | "HueRotationBrowserFilter" => hue_rotation_browser(),
        "blur" | "BlurFilter" => blur(),
        _ => return None,
    };
    Some(filter)
}
