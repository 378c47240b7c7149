//! Per-point data carried alongside the flat coordinate sequence.
//!
//! The spline code never looks inside a [`ValueData`] except to ask whether the point is a hole;
//! everything else is passed through and attached to the emitted path elements.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The original data value of a point.
///
/// Deserializes from a bare number (`3.5`) or from an object with optional `x`/`y` components
/// (`{"x": 1, "y": 2}`, `{"y": null}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Point {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        x: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        y: Option<f64>,
    },
}

impl DataValue {
    /// The `y` dimension of the value. A bare number is its own `y`.
    pub fn y(&self) -> Option<f64> {
        match *self {
            DataValue::Number(v) => Some(v),
            DataValue::Point { y, .. } => y,
        }
    }

    pub fn x(&self) -> Option<f64> {
        match *self {
            DataValue::Number(_) => None,
            DataValue::Point { x, .. } => x,
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Number(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<DataValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

impl ValueData {
    pub fn new(value: impl Into<DataValue>) -> Self {
        Self {
            value: Some(value.into()),
            meta: None,
        }
    }

    /// A missing value; splits the series when hole filling is off.
    pub fn hole() -> Self {
        Self::default()
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// A point is a hole when it has no value, no `y` component, or a non-finite `y`.
    pub fn is_hole(&self) -> bool {
        !matches!(self.value.and_then(|v| v.y()), Some(y) if y.is_finite())
    }
}
