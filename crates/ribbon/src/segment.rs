//! Splitting a series into contiguous runs of valid points.

use crate::error::{Error, Result};
use crate::value::ValueData;

/// A maximal contiguous run of valid points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segment {
    pub path_coordinates: Vec<f64>,
    pub value_data: Vec<ValueData>,
}

impl Segment {
    pub fn point_count(&self) -> usize {
        self.value_data.len()
    }

    fn push(&mut self, x: f64, y: f64, data: &ValueData) {
        self.path_coordinates.push(x);
        self.path_coordinates.push(y);
        self.value_data.push(data.clone());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Skip over holes instead of starting a new segment after them.
    pub fill_holes: bool,
    /// Start a new segment whenever `x` does not strictly increase.
    pub increasing_x: bool,
}

/// Fails fast on a coordinate/value sequence pair that does not describe the same points.
pub fn check_input(coordinates: &[f64], values: &[ValueData]) -> Result<()> {
    if coordinates.len() % 2 != 0 || coordinates.len() / 2 != values.len() {
        return Err(Error::MismatchedInput {
            coordinates: coordinates.len(),
            values: values.len(),
        });
    }
    Ok(())
}

/// Number of points both sequences agree on.
///
/// Mismatched input is handled best effort: only the common prefix is used.
pub(crate) fn usable_points(coordinates: &[f64], values: &[ValueData]) -> usize {
    let n = (coordinates.len() / 2).min(values.len());
    if check_input(coordinates, values).is_err() {
        tracing::warn!(
            coordinates = coordinates.len(),
            values = values.len(),
            used_points = n,
            "mismatched series input; using the common prefix"
        );
    }
    n
}

/// Splits a series into segments of valid points, in source order.
///
/// With `fill_holes`, hole points are dropped and the run continues across them. A series
/// without any valid point yields no segments.
pub fn split_into_segments(
    coordinates: &[f64],
    values: &[ValueData],
    options: SplitOptions,
) -> Vec<Segment> {
    let n = usable_points(coordinates, values);

    let mut segments: Vec<Segment> = Vec::new();
    let mut hole = true;
    for (i, data) in values.iter().enumerate().take(n) {
        let x = coordinates[2 * i];
        let y = coordinates[2 * i + 1];

        if data.is_hole() {
            if !options.fill_holes {
                hole = true;
            }
            continue;
        }

        if options.increasing_x && i > 0 && x <= coordinates[2 * (i - 1)] {
            hole = true;
        }

        if hole || segments.is_empty() {
            segments.push(Segment::default());
            hole = false;
        }
        if let Some(segment) = segments.last_mut() {
            segment.push(x, y, data);
        }
    }

    tracing::debug!(
        points = n,
        segments = segments.len(),
        fill_holes = options.fill_holes,
        "split series into segments"
    );
    segments
}
