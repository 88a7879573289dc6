//! Preset looks built from the standard filters.
//!
//! Presets are plain data: a name, a blend strategy and an ordered list of
//! `(filter, value)` steps. They can be written in JSON and resolved
//! against [`super::catalog`]:
//!
//! ```json
//! {
//!   "name": "Inst1977",
//!   "strategy": "blend",
//!   "steps": [
//!     { "filter": "sepia", "value": 50 },
//!     { "filter": "hue-rotate", "value": -30 },
//!     { "filter": "saturate", "value": 140 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::catalog;
use super::compose::{BlendStrategy, FilterChain};
use crate::error::{FilterError, Result};

/// One member of a preset: a catalog filter at a fixed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetStep {
    /// Filter name or declarative function, see [`catalog::by_name`].
    pub filter: String,
    pub value: f32,
}

/// Declarative definition of a [`FilterChain`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetConfig {
    pub name: String,
    #[serde(default)]
    pub strategy: BlendStrategy,
    pub steps: Vec<PresetStep>,
}

impl PresetConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve every step against the catalog.
    ///
    /// # Errors
    /// [`FilterError::UnknownFilter`] for the first step naming a filter the
    /// catalog doesn't have.
    pub fn build(&self) -> Result<FilterChain> {
        let members = self
            .steps
            .iter()
            .map(|step| {
                catalog::by_name(&step.filter)
                    .map(|filter| (filter, step.value))
                    .ok_or_else(|| FilterError::UnknownFilter(step.filter.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "built preset {} with {} steps ({:?})",
            self.name,
            members.len(),
            self.strategy
        );
        Ok(FilterChain::new(self.name.clone(), members).with_strategy(self.strategy))
    }
}

/// Definition of the "1977" look: `sepia(50%) hue-rotate(-30deg) saturate(140%)`.
pub fn inst_1977_config() -> PresetConfig {
    let step = |filter: &str, value: f32| PresetStep {
        filter: filter.to_string(),
        value,
    };
    PresetConfig {
        name: "Inst1977".to_string(),
        strategy: BlendStrategy::Blend,
        steps: vec![
            step("SepiaFilter", 50.0),
            step("HueRotationBrowserFilter", -30.0),
            step("SaturationFilter", 140.0),
        ],
    }
}

/// The "1977" look as a ready chain.
pub fn inst_1977() -> FilterChain {
    FilterChain::new(
        "Inst1977",
        [
            (catalog::sepia(), 50.0),
            (catalog::hue_rotation_browser(), -30.0),
            (catalog::saturation(), 140.0),
        ],
    )
}
