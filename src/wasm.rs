//! WebAssembly exports for the color filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Buffers are
//! flat RGBA (or RGB) byte arrays, the same layout as canvas `ImageData`.
//! Errors are returned as strings and surface as thrown exceptions in JS.

use wasm_bindgen::prelude::*;

use crate::filters::{catalog, ByteLayout, Filter, FilterChain, PresetConfig, TransformOptions};
use crate::FilterError;

fn to_js(err: FilterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn lookup(name: &str) -> Result<Filter, JsValue> {
    catalog::by_name(name).ok_or_else(|| to_js(FilterError::UnknownFilter(name.to_string())))
}

fn parse_preset(preset: &str) -> Result<FilterChain, JsValue> {
    PresetConfig::from_json(preset)
        .and_then(|config| config.build())
        .map_err(to_js)
}

fn options(width: usize, has_alpha: bool) -> TransformOptions {
    let layout = if has_alpha {
        ByteLayout::WithAlpha
    } else {
        ByteLayout::Packed
    };
    TransformOptions::new(layout).with_width(width)
}

// ============================================================================
// Single Filters
// ============================================================================

/// Declarative string of a standard filter, e.g. `sepia(50%)`.
#[wasm_bindgen]
pub fn filter_css_wasm(name: &str, value: f32) -> Result<String, JsValue> {
    Ok(lookup(name)?.representation(value))
}

/// Whether `value` leaves the image unchanged for the named filter.
#[wasm_bindgen]
pub fn filter_is_neutral_wasm(name: &str, value: f32) -> Result<bool, JsValue> {
    Ok(lookup(name)?.is_neutral(value))
}

/// Apply a standard filter to a flat pixel array.
///
/// # Arguments
/// * `name` - Filter name or declarative function
/// * `data` - Flat array of RGBA (or RGB) bytes
/// * `width` - Image width in pixels (used by blur)
/// * `value` - Filter value in its declarative unit (%, deg, px)
/// * `has_alpha` - `true` for RGBA data, `false` for RGB
///
/// # Returns
/// Filtered copy of `data`
#[wasm_bindgen]
pub fn apply_filter_wasm(
    name: &str,
    data: &[u8],
    width: usize,
    value: f32,
    has_alpha: bool,
) -> Result<Vec<u8>, JsValue> {
    let filter = lookup(name)?;
    let mut output = data.to_vec();
    filter
        .apply(&mut output, value, &options(width, has_alpha))
        .map_err(to_js)?;
    Ok(output)
}

// ============================================================================
// Presets
// ============================================================================

/// Declarative string of a JSON preset at `intensity` (0-100).
#[wasm_bindgen]
pub fn preset_css_wasm(preset: &str, intensity: f32) -> Result<String, JsValue> {
    Ok(parse_preset(preset)?.representation(intensity))
}

/// Apply a JSON preset to a flat pixel array at `intensity` (0-100).
#[wasm_bindgen]
pub fn apply_preset_wasm(
    preset: &str,
    data: &[u8],
    width: usize,
    intensity: f32,
    has_alpha: bool,
) -> Result<Vec<u8>, JsValue> {
    let chain = parse_preset(preset)?;
    let mut output = data.to_vec();
    chain
        .apply(&mut output, intensity, &options(width, has_alpha))
        .map_err(to_js)?;
    Ok(output)
}
