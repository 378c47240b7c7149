#![forbid(unsafe_code)]

//! Hole-aware cardinal spline paths for chart lines (headless).
//!
//! A data series is handed over as a flat coordinate sequence (`[x0, y0, x1, y1, ...]`) plus one
//! [`ValueData`] entry per point. The series is split around holes, each run is smoothed with a
//! tension/alpha parameterized Catmull-Rom spline, and the result is returned as a [`Path`] of
//! move/line/curve elements that still carry the per-point data.
//!
//! Design goals:
//! - pure, synchronous strategies configured once and applied many times
//! - no non-finite coordinate ever reaches the emitted path
//! - deterministic SVG `d` output (fixed fractional digits)

pub mod error;
pub mod interpolation;
pub mod path;
pub mod segment;
pub mod value;

pub use error::{Error, Result};
pub use interpolation::{
    Cardinal, CardinalOptions, Interpolation, InterpolationConfig, Straight, StraightOptions,
};
pub use path::{Path, PathCommand, PathElement};
pub use segment::{Segment, SplitOptions, split_into_segments};
pub use value::{DataValue, ValueData};
