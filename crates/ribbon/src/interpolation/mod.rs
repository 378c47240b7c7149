//! Interchangeable smoothing strategies.
//!
//! Every strategy shares one signature: a flat coordinate sequence plus one [`ValueData`] per
//! point in, a [`Path`] out. Strategies are configured once and are immutable afterwards, so a
//! single instance can be shared across threads and applied to any number of series.

mod cardinal;
mod straight;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::path::Path;
use crate::value::ValueData;

pub use cardinal::{Cardinal, CardinalOptions};
pub use straight::{Straight, StraightOptions};

pub trait Interpolation: Send + Sync {
    fn interpolate(&self, coordinates: &[f64], values: &[ValueData]) -> Path;
}

impl<F> Interpolation for F
where
    F: Fn(&[f64], &[ValueData]) -> Path + Send + Sync,
{
    fn interpolate(&self, coordinates: &[f64], values: &[ValueData]) -> Path {
        self(coordinates, values)
    }
}

/// Strategy selection as it appears in a JSON chart config.
///
/// ```json
/// { "type": "cardinal", "tension": 0.2, "alpha": 0.5, "fillHoles": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InterpolationConfig {
    #[serde(rename = "none")]
    Straight(StraightOptions),
    Cardinal(CardinalOptions),
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        InterpolationConfig::Cardinal(CardinalOptions::default())
    }
}

impl InterpolationConfig {
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    pub fn build(&self) -> Box<dyn Interpolation> {
        match *self {
            InterpolationConfig::Straight(options) => Box::new(Straight::new(options)),
            InterpolationConfig::Cardinal(options) => Box::new(Cardinal::new(options)),
        }
    }
}
