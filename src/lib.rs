//! Colorfilter Rust Core
//!
//! Color filters that work two ways: as a declarative filter string for a
//! compositor that renders the effect natively (`brightness(150%)`), and as
//! a CPU pixel transform over an in-memory buffer that reproduces the same
//! effect. Python bindings via PyO3 and WASM bindings for JavaScript are
//! available behind the `python` and `wasm` features.
//!
//! ## Image Format
//! Buffers are flat `u8` slices of contiguous pixels:
//! - **RGB**: 3 bytes per pixel
//! - **RGBA**: 4 bytes per pixel, alpha last
//!
//! ## Example
//!
//! ```
//! use colorfilter_rust::filters::{catalog, ByteLayout, TransformOptions};
//!
//! let sepia = catalog::sepia();
//! assert_eq!(sepia.representation(50.0), "sepia(50%)");
//!
//! let mut pixels = vec![100, 150, 200, 255];
//! catalog::brightness()
//!     .apply(&mut pixels, 150.0, &TransformOptions::new(ByteLayout::WithAlpha))
//!     .unwrap();
//! assert_eq!(pixels, vec![150, 225, 255, 255]);
//! ```

pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FilterError, Result};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use ndarray::Array3;
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::filters::{catalog, ByteLayout, PresetConfig, TransformOptions};
    use crate::FilterError;

    fn to_py_err(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn lookup(name: &str) -> PyResult<crate::filters::Filter> {
        catalog::by_name(name).ok_or_else(|| to_py_err(FilterError::UnknownFilter(name.to_string())))
    }

    /// Flatten an (H, W, C) image and pick the layout from C.
    fn flatten(image: &PyReadonlyArray3<'_, u8>) -> PyResult<(Vec<u8>, (usize, usize, usize), TransformOptions)> {
        let input = image.as_array();
        let (height, width, channels) = input.dim();
        let layout = ByteLayout::from_channels(channels).ok_or_else(|| {
            PyValueError::new_err(format!("expected 3 or 4 channels, got {channels}"))
        })?;
        let data = input.iter().copied().collect();
        Ok((data, (height, width, channels), TransformOptions::new(layout).with_width(width)))
    }

    fn unflatten<'py>(
        py: Python<'py>,
        data: Vec<u8>,
        shape: (usize, usize, usize),
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let output = Array3::from_shape_vec(shape, data)
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(output.into_pyarray(py))
    }

    // ========================================================================
    // Single Filters
    // ========================================================================

    /// Declarative string of a standard filter, e.g. `filter_css("sepia", 50)`.
    #[pyfunction]
    pub fn filter_css(name: &str, value: f32) -> PyResult<String> {
        Ok(lookup(name)?.representation(value))
    }

    /// Whether `value` leaves the image unchanged for the named filter.
    #[pyfunction]
    pub fn filter_is_neutral(name: &str, value: f32) -> PyResult<bool> {
        Ok(lookup(name)?.is_neutral(value))
    }

    /// Apply a standard filter to an RGB or RGBA u8 image.
    ///
    /// # Arguments
    /// * `name` - Filter name or declarative function (`"sepia"`, `"BlurFilter"`)
    /// * `image` - Input image (height, width, 3 or 4)
    /// * `value` - Filter value in its declarative unit (%, deg, px)
    #[pyfunction]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        name: &str,
        image: PyReadonlyArray3<'py, u8>,
        value: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let filter = lookup(name)?;
        let (mut data, shape, options) = flatten(&image)?;
        filter.apply(&mut data, value, &options).map_err(to_py_err)?;
        unflatten(py, data, shape)
    }

    // ========================================================================
    // Presets
    // ========================================================================

    /// Declarative string of a JSON preset at `intensity` (0-100).
    #[pyfunction]
    pub fn preset_css(preset: &str, intensity: f32) -> PyResult<String> {
        let chain = PresetConfig::from_json(preset)
            .and_then(|config| config.build())
            .map_err(to_py_err)?;
        Ok(chain.representation(intensity))
    }

    /// Apply a JSON preset to an RGB or RGBA u8 image at `intensity` (0-100).
    #[pyfunction]
    pub fn apply_preset<'py>(
        py: Python<'py>,
        preset: &str,
        image: PyReadonlyArray3<'py, u8>,
        intensity: f32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let chain = PresetConfig::from_json(preset)
            .and_then(|config| config.build())
            .map_err(to_py_err)?;
        let (mut data, shape, options) = flatten(&image)?;
        chain.apply(&mut data, intensity, &options).map_err(to_py_err)?;
        unflatten(py, data, shape)
    }

    /// Colorfilter Rust extension module
    #[pymodule]
    pub fn colorfilter_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Single filters
        m.add_function(wrap_pyfunction!(filter_css, m)?)?;
        m.add_function(wrap_pyfunction!(filter_is_neutral, m)?)?;
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;

        // Presets
        m.add_function(wrap_pyfunction!(preset_css, m)?)?;
        m.add_function(wrap_pyfunction!(apply_preset, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::colorfilter_rust;
