//! Filter composition.
//!
//! A [`FilterChain`] puts an ordered list of `(filter, weight)` pairs behind a
//! single intensity knob in 0-100. Preset looks such as
//! `sepia(50%) hue-rotate(-30deg) saturate(140%)` are expressed this way.
//!
//! Declarative filters don't commute, so member order is preserved exactly
//! in both the string and the pixel output.

use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::core::{adjust_component, mix};
use super::factory::{Filter, Neutral, Processor, Representation};
use super::layout::{Mutation, TransformOptions};
use crate::error::Result;

/// How a chain scales its members with intensity on the pixel path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendStrategy {
    /// Apply each member in order at `weight * intensity`.
    Sequential,
    /// Apply the full chain at fixed weights, then blend between the original
    /// and the filtered pixels by intensity.
    #[default]
    Blend,
}

/// An ordered chain of weighted filters driven by one intensity.
#[derive(Debug, Clone)]
pub struct FilterChain {
    name: Cow<'static, str>,
    members: Vec<(Filter, f32)>,
    strategy: BlendStrategy,
}

/// Clamp an intensity to 0-100 and normalize it to 0.0-1.0.
#[inline]
fn normalize_intensity(intensity: f32) -> f32 {
    intensity.clamp(0.0, 100.0) / 100.0
}

impl FilterChain {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        members: impl IntoIterator<Item = (Filter, f32)>,
    ) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().collect(),
            strategy: BlendStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: BlendStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[(Filter, f32)] {
        &self.members
    }

    pub fn strategy(&self) -> BlendStrategy {
        self.strategy
    }

    /// Members' declarative strings at `weight * intensity`, space separated.
    pub fn representation(&self, intensity: f32) -> String {
        let intensity = normalize_intensity(intensity);
        self.members
            .iter()
            .map(|(filter, weight)| filter.representation(weight * intensity))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether applying the chain at `intensity` leaves pixels unchanged.
    ///
    /// A blended chain is neutral at intensity 0. A sequential chain runs every
    /// member at `weight * intensity`, so it is neutral only where all of its
    /// members are.
    pub fn is_neutral(&self, intensity: f32) -> bool {
        match self.strategy {
            BlendStrategy::Blend => intensity == 0.0,
            BlendStrategy::Sequential => {
                let intensity = normalize_intensity(intensity);
                self.members
                    .iter()
                    .all(|(filter, weight)| filter.is_neutral(weight * intensity))
            }
        }
    }

    /// Apply the chain to `buffer` in place.
    ///
    /// Members run on a scratch copy; the caller's buffer is written only once
    /// every member has succeeded.
    pub fn apply(&self, buffer: &mut [u8], intensity: f32, options: &TransformOptions) -> Result<()> {
        let bytes = options.resolve(buffer.len())?;
        let intensity = normalize_intensity(intensity);
        let step_options = TransformOptions {
            mutation: Mutation::InPlace,
            ..options.clone()
        };
        let mut scratch = buffer.to_vec();

        match self.strategy {
            BlendStrategy::Sequential => {
                for (filter, weight) in &self.members {
                    log::trace!("{}: {} at {}", self.name, filter.name(), weight * intensity);
                    filter.apply(&mut scratch, weight * intensity, &step_options)?;
                }
                buffer[bytes.clone()].copy_from_slice(&scratch[bytes]);
            }
            BlendStrategy::Blend => {
                for (filter, weight) in &self.members {
                    log::trace!("{}: {} at {}", self.name, filter.name(), weight);
                    filter.apply(&mut scratch, *weight, &step_options)?;
                }
                for (original, filtered) in buffer[bytes.clone()].iter_mut().zip(&scratch[bytes]) {
                    *original = adjust_component(mix(*original as f32, *filtered as f32, intensity));
                }
            }
        }
        Ok(())
    }

    /// Apply the chain honoring `options.mutation`, like [`Filter::transform`].
    pub fn transform<'a>(
        &self,
        buffer: &'a mut [u8],
        intensity: f32,
        options: &TransformOptions,
    ) -> Result<Cow<'a, [u8]>> {
        match options.mutation {
            Mutation::InPlace => {
                self.apply(buffer, intensity, options)?;
                Ok(Cow::Borrowed(buffer))
            }
            Mutation::Copy => {
                let mut copy = buffer.to_vec();
                self.apply(&mut copy, intensity, options)?;
                Ok(Cow::Owned(copy))
            }
        }
    }

    /// Wrap the chain as a plain [`Filter`] with the same behavior.
    pub fn into_filter(self) -> Filter {
        let name = self.name.clone();
        let chain = Arc::new(self);
        let render = Arc::clone(&chain);
        let neutral = Arc::clone(&chain);

        Filter::new(
            name,
            Representation::custom(move |intensity| render.representation(intensity)),
            Neutral::predicate(move |intensity| neutral.is_neutral(intensity)),
            Processor::custom(move |buffer, intensity, options| {
                chain.apply(buffer, intensity, options)
            }),
        )
    }
}

impl From<FilterChain> for Filter {
    fn from(chain: FilterChain) -> Self {
        chain.into_filter()
    }
}
