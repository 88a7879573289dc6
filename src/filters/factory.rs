//! Filter construction.
//!
//! A [`Filter`] bundles three behaviors for one effect:
//!
//! - its declarative string (`brightness(150%)`),
//! - whether a value is a visual no-op,
//! - the pixel transform that reproduces the effect on a buffer.
//!
//! The mutually exclusive configuration choices are enums, so a filter can't
//! be built with both a template and a custom generator, or with neither.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::layout::{Mutation, TransformOptions};
use super::operator::Operator;
use crate::error::Result;

/// Custom declarative-string generator.
pub type Representer = Arc<dyn Fn(f32) -> String + Send + Sync>;

/// Custom neutral-value predicate.
pub type NeutralPredicate = Arc<dyn Fn(f32) -> bool + Send + Sync>;

/// Custom buffer transform. Receives the whole (already validated) buffer.
pub type BufferProcessor =
    Arc<dyn Fn(&mut [u8], f32, &TransformOptions) -> Result<()> + Send + Sync>;

/// How a filter renders its declarative string.
#[derive(Clone)]
pub enum Representation {
    /// `"<function>(<value><unit>)"`, e.g. `hue-rotate(90deg)`.
    Template {
        function: Cow<'static, str>,
        unit: Cow<'static, str>,
    },
    Custom(Representer),
}

impl Representation {
    pub fn template(
        function: impl Into<Cow<'static, str>>,
        unit: impl Into<Cow<'static, str>>,
    ) -> Self {
        Representation::Template {
            function: function.into(),
            unit: unit.into(),
        }
    }

    pub fn custom(f: impl Fn(f32) -> String + Send + Sync + 'static) -> Self {
        Representation::Custom(Arc::new(f))
    }

    pub fn render(&self, value: f32) -> String {
        match self {
            Representation::Template { function, unit } => {
                format!("{function}({}{unit})", format_value(value))
            }
            Representation::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Template { function, unit } => f
                .debug_struct("Template")
                .field("function", function)
                .field("unit", unit)
                .finish(),
            Representation::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Which values leave the image unchanged.
#[derive(Clone)]
pub enum Neutral {
    Value(f32),
    /// Several equally neutral values, e.g. `0` and `360` degrees.
    Values(Vec<f32>),
    Predicate(NeutralPredicate),
}

impl Neutral {
    pub fn predicate(f: impl Fn(f32) -> bool + Send + Sync + 'static) -> Self {
        Neutral::Predicate(Arc::new(f))
    }

    pub fn matches(&self, value: f32) -> bool {
        match self {
            Neutral::Value(neutral) => *neutral == value,
            Neutral::Values(neutrals) => neutrals.contains(&value),
            Neutral::Predicate(f) => f(value),
        }
    }
}

impl fmt::Debug for Neutral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Neutral::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Neutral::Values(vs) => f.debug_tuple("Values").field(vs).finish(),
            Neutral::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// What a filter does to pixels.
#[derive(Clone)]
pub enum Processor {
    /// One built-in operator applied to the resolved pixel range.
    Pixel(Operator),
    Custom(BufferProcessor),
}

impl Processor {
    pub fn custom(
        f: impl Fn(&mut [u8], f32, &TransformOptions) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Processor::Custom(Arc::new(f))
    }
}

impl fmt::Debug for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Processor::Pixel(op) => f.debug_tuple("Pixel").field(op).finish(),
            Processor::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// An immutable, shareable filter.
#[derive(Debug, Clone)]
pub struct Filter {
    name: Cow<'static, str>,
    representation: Representation,
    neutral: Neutral,
    processor: Processor,
}

impl Filter {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        representation: Representation,
        neutral: Neutral,
        processor: Processor,
    ) -> Self {
        Self {
            name: name.into(),
            representation,
            neutral,
            processor,
        }
    }

    /// Diagnostic name, e.g. `BrightnessFilter`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The built-in operator behind this filter, if any.
    pub fn operator(&self) -> Option<Operator> {
        match self.processor {
            Processor::Pixel(op) => Some(op),
            Processor::Custom(_) => None,
        }
    }

    /// Declarative string for `value`. No range validation.
    pub fn representation(&self, value: f32) -> String {
        self.representation.render(value)
    }

    pub fn is_neutral(&self, value: f32) -> bool {
        self.neutral.matches(value)
    }

    /// Apply the filter to `buffer` in place.
    ///
    /// `options.mutation` is ignored here; see [`Filter::transform`].
    ///
    /// # Errors
    /// Buffer length or range errors, detected before any byte is written.
    pub fn apply(&self, buffer: &mut [u8], value: f32, options: &TransformOptions) -> Result<()> {
        let bytes = options.resolve(buffer.len()).inspect_err(|err| {
            log::debug!("{} rejected buffer of {} bytes: {err}", self.name, buffer.len());
        })?;

        match &self.processor {
            Processor::Pixel(op) => {
                op.apply(&mut buffer[bytes], value, options.layout, options.width)
            }
            Processor::Custom(f) => f(buffer, value, options),
        }
    }

    /// Apply the filter honoring `options.mutation`.
    ///
    /// - [`Mutation::InPlace`]: `buffer` is overwritten and borrowed back.
    /// - [`Mutation::Copy`]: `buffer` is left untouched and a transformed
    ///   copy is returned.
    pub fn transform<'a>(
        &self,
        buffer: &'a mut [u8],
        value: f32,
        options: &TransformOptions,
    ) -> Result<Cow<'a, [u8]>> {
        match options.mutation {
            Mutation::InPlace => {
                self.apply(buffer, value, options)?;
                Ok(Cow::Borrowed(buffer))
            }
            Mutation::Copy => {
                let mut copy = buffer.to_vec();
                self.apply(&mut copy, value, options)?;
                Ok(Cow::Owned(copy))
            }
        }
    }
}

/// Format a value for a declarative string: shortest round-trip form, with
/// negative zero printed as `0`.
pub(crate) fn format_value(value: f32) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::filters::layout::ByteLayout;

    fn brightness() -> Filter {
        Filter::new(
            "BrightnessFilter",
            Representation::template("brightness", "%"),
            Neutral::Value(100.0),
            Processor::Pixel(Operator::Brighten),
        )
    }

    fn hue_rotation(neutral: Neutral) -> Filter {
        Filter::new(
            "HueRotationFilter",
            Representation::template("hue-rotate", "deg"),
            neutral,
            Processor::Pixel(Operator::RotateHue),
        )
    }

    #[test]
    fn test_template_representation() {
        let filter = brightness();
        assert_eq!(filter.representation(150.0), "brightness(150%)");
        assert_eq!(filter.representation(12.5), "brightness(12.5%)");
        assert_eq!(filter.representation(-0.0), "brightness(0%)");
        assert_eq!(filter.name(), "BrightnessFilter");
        assert_eq!(filter.operator(), Some(Operator::Brighten));
    }

    #[test]
    fn test_custom_representation() {
        let filter = Filter::new(
            "Doubled",
            Representation::custom(|v| format!("brightness({}%) contrast({}%)", v, v * 2.0)),
            Neutral::Value(100.0),
            Processor::Pixel(Operator::Brighten),
        );
        assert_eq!(filter.representation(60.0), "brightness(60%) contrast(120%)");
    }

    #[test]
    fn test_neutral_single_value() {
        let filter = hue_rotation(Neutral::Value(0.0));
        assert!(filter.is_neutral(0.0));
        assert!(!filter.is_neutral(360.0));
        assert!(!filter.is_neutral(1.0));
    }

    #[test]
    fn test_neutral_value_list() {
        let filter = hue_rotation(Neutral::Values(vec![0.0, 360.0]));
        assert!(filter.is_neutral(0.0));
        assert!(filter.is_neutral(360.0));
        assert!(!filter.is_neutral(180.0));
    }

    #[test]
    fn test_neutral_predicate() {
        let filter = hue_rotation(Neutral::predicate(|v| v.rem_euclid(360.0) == 0.0));
        assert!(filter.is_neutral(720.0));
        assert!(filter.is_neutral(-360.0));
        assert!(!filter.is_neutral(90.0));
    }

    #[test]
    fn test_apply_brightness_with_alpha() {
        let mut data = [100, 150, 200, 255];
        brightness()
            .apply(&mut data, 150.0, &TransformOptions::new(ByteLayout::WithAlpha))
            .unwrap();
        assert_eq!(data, [150, 225, 255, 255]);
    }

    #[test]
    fn test_apply_corrupted_buffer_untouched() {
        let mut data = [100, 150, 200, 255, 1];
        let result = brightness().apply(&mut data, 150.0, &TransformOptions::default());
        assert!(matches!(
            result,
            Err(FilterError::CorruptedBuffer { len: 5, stride: 4 })
        ));
        assert_eq!(data, [100, 150, 200, 255, 1]);
    }

    #[test]
    fn test_apply_partial_range() {
        let mut data = [10, 10, 10, 20, 20, 20, 30, 30, 30];
        let options = TransformOptions::new(ByteLayout::Packed).with_range(1..2);
        brightness().apply(&mut data, 200.0, &options).unwrap();
        assert_eq!(data, [10, 10, 10, 40, 40, 40, 30, 30, 30]);
    }

    #[test]
    fn test_apply_bad_range_untouched() {
        let mut data = [10, 10, 10, 20, 20, 20];
        let options = TransformOptions::new(ByteLayout::Packed).with_range(1..3);
        let result = brightness().apply(&mut data, 200.0, &options);
        assert!(matches!(result, Err(FilterError::InvalidRange { .. })));
        assert_eq!(data, [10, 10, 10, 20, 20, 20]);
    }

    #[test]
    fn test_transform_in_place() {
        let mut data = [100, 150, 200];
        let options = TransformOptions::new(ByteLayout::Packed);
        let out = brightness().transform(&mut data, 50.0, &options).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, &[50, 75, 100]);
        assert_eq!(data, [50, 75, 100]);
    }

    #[test]
    fn test_transform_copy_leaves_input() {
        let mut data = [100, 150, 200];
        let options = TransformOptions::new(ByteLayout::Packed).copied();
        let out = brightness()
            .transform(&mut data, 50.0, &options)
            .unwrap()
            .into_owned();
        assert_eq!(out, vec![50, 75, 100]);
        assert_eq!(data, [100, 150, 200]);
    }

    #[test]
    fn test_custom_processor() {
        let zero_red = Filter::new(
            "ZeroRed",
            Representation::template("zero-red", ""),
            Neutral::Value(0.0),
            Processor::custom(|buffer, _value, options| {
                for px in buffer.chunks_exact_mut(options.layout.stride()) {
                    px[0] = 0;
                }
                Ok(())
            }),
        );
        let mut data = [9, 8, 7, 6, 5, 4];
        zero_red
            .apply(&mut data, 1.0, &TransformOptions::new(ByteLayout::Packed))
            .unwrap();
        assert_eq!(data, [0, 8, 7, 0, 5, 4]);
        assert_eq!(zero_red.operator(), None);
    }

    #[test]
    fn test_filter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Filter>();
    }
}
