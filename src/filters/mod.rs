//! Filter modules for the color-filter engine.
//!
//! ## Supported Formats
//!
//! All filters operate on flat `u8` buffers with contiguous pixels:
//!
//! | Layout | Stride | Bytes |
//! |--------|--------|-------|
//! | [`ByteLayout::Packed`] | 3 | R, G, B |
//! | [`ByteLayout::WithAlpha`] | 4 | R, G, B, A |
//!
//! ## Architecture
//!
//! - **Two outputs per filter** - a declarative string (`sepia(50%)`) and an
//!   equivalent pixel transform
//! - **Alpha preservation** - Color operators never touch alpha; only opacity does
//! - **Validate first** - Buffer and range errors are reported before any write
//! - **Clamp last** - Operators accept any amount and clamp only their output
//!
//! ## Layers
//!
//! - **Color space**: RGB <-> HSL ([`color_space`])
//! - **Operators**: per-pixel math ([`color_adjust`], [`color_science`]) and
//!   Gaussian blur ([`blur`]), dispatched through [`Operator`]
//! - **Filters**: [`Filter`] records from the factory, the standard set in
//!   [`catalog`]
//! - **Composition**: [`FilterChain`] and JSON [`presets`]

pub mod core;
pub mod color_space;
pub mod color_adjust;
pub mod color_science;
pub mod blur;
pub mod layout;
pub mod operator;
pub mod factory;
pub mod compose;
pub mod catalog;
pub mod presets;

pub use compose::{BlendStrategy, FilterChain};
pub use factory::{Filter, Neutral, Processor, Representation};
pub use layout::{ByteLayout, Mutation, TransformOptions};
pub use operator::Operator;
pub use presets::{PresetConfig, PresetStep};
