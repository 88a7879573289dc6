//! Buffer layout and transform options.
//!
//! Buffers are flat byte slices with pixels laid out contiguously:
//!
//! | Layout | Stride | Bytes |
//! |--------|--------|-------|
//! | `Packed` | 3 | R, G, B |
//! | `WithAlpha` | 4 | R, G, B, A |
//!
//! A transform may be limited to a half-open pixel range. Validation happens
//! up front so a rejected call never writes to the buffer.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

/// How many bytes make up one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteLayout {
    /// 3 bytes per pixel: R, G, B
    Packed,
    /// 4 bytes per pixel: R, G, B, A
    #[default]
    WithAlpha,
}

impl ByteLayout {
    /// Bytes per pixel.
    pub const fn stride(self) -> usize {
        match self {
            ByteLayout::Packed => 3,
            ByteLayout::WithAlpha => 4,
        }
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, ByteLayout::WithAlpha)
    }

    /// Layout for an image with `channels` channels, if it has one.
    pub const fn from_channels(channels: usize) -> Option<Self> {
        match channels {
            3 => Some(ByteLayout::Packed),
            4 => Some(ByteLayout::WithAlpha),
            _ => None,
        }
    }

    /// Number of whole pixels in a buffer of `len` bytes.
    ///
    /// Fails with [`FilterError::CorruptedBuffer`] when `len` is not a
    /// multiple of the stride.
    pub fn pixel_count(self, len: usize) -> Result<usize> {
        let stride = self.stride();
        if len % stride != 0 {
            return Err(FilterError::CorruptedBuffer { len, stride });
        }
        Ok(len / stride)
    }
}

/// Whether a transform writes into the caller's buffer or into a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mutation {
    /// Overwrite the caller's buffer.
    #[default]
    InPlace,
    /// Leave the caller's buffer untouched and return a transformed copy.
    Copy,
}

/// Per-call settings for a filter transform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformOptions {
    pub layout: ByteLayout,
    /// Half-open pixel range to operate on. `None` means the whole buffer.
    pub range: Option<Range<usize>>,
    /// Row length in pixels. Only spatial filters (blur) look at it; without
    /// it the region is treated as a single row.
    pub width: Option<usize>,
    pub mutation: Mutation,
}

impl TransformOptions {
    pub fn new(layout: ByteLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Limit the transform to pixels `range.start..range.end`.
    pub fn with_range(mut self, range: Range<usize>) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Shorthand for `with_mutation(Mutation::Copy)`.
    pub fn copied(self) -> Self {
        self.with_mutation(Mutation::Copy)
    }

    /// Validate a buffer of `len` bytes against these options and return the
    /// byte range to operate on.
    ///
    /// Checks, in order: the length is a whole number of pixels, then the
    /// pixel range (if any) satisfies `from < to <= pixel_count`.
    pub fn resolve(&self, len: usize) -> Result<Range<usize>> {
        let pixels = self.layout.pixel_count(len)?;
        let stride = self.layout.stride();

        match &self.range {
            None => Ok(0..len),
            Some(range) => {
                let (from, to) = (range.start, range.end);
                if from >= to || to > pixels {
                    return Err(FilterError::InvalidRange { from, to, pixels });
                }
                Ok(from * stride..to * stride)
            }
        }
    }
}
