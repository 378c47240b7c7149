use serde::{Deserialize, Serialize};

use super::{Interpolation, Straight, StraightOptions};
use crate::path::Path;
use crate::segment::{Segment, SplitOptions, split_into_segments};
use crate::value::ValueData;

/// Points a segment needs before it is splined; shorter runs are joined with straight lines.
const MIN_SPLINE_POINTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardinalOptions {
    /// `0` is the smoothest curve, `1` collapses to straight joins.
    pub tension: f64,
    /// Parameterization exponent: `0` uniform, `0.5` centripetal, `1` chordal.
    pub alpha: f64,
    pub fill_holes: bool,
}

impl Default for CardinalOptions {
    fn default() -> Self {
        Self {
            tension: 0.0,
            alpha: 0.5,
            fill_holes: false,
        }
    }
}

/// Tension/alpha parameterized Catmull-Rom spline through each run of valid points.
///
/// Every run of `n >= 3` points becomes one move followed by `n - 1` cubic curves ending
/// exactly on the source points. Runs are never smoothed into each other: each hole leaves a
/// visible break unless holes are filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cardinal {
    tension: f64,
    alpha: f64,
    fill_holes: bool,
}

impl Default for Cardinal {
    fn default() -> Self {
        Self::new(CardinalOptions::default())
    }
}

fn clamp_unit(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { fallback }
}

impl Cardinal {
    pub fn new(options: CardinalOptions) -> Self {
        let defaults = CardinalOptions::default();
        Self {
            tension: clamp_unit(options.tension, defaults.tension),
            alpha: clamp_unit(options.alpha, defaults.alpha),
            fill_holes: options.fill_holes,
        }
    }

    pub fn tension(&self) -> f64 {
        self.tension
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn fill_holes(&self) -> bool {
        self.fill_holes
    }

    fn fallback(&self) -> Straight {
        Straight::new(StraightOptions {
            fill_holes: self.fill_holes,
        })
    }

    fn interpolate_segment(&self, segment: &Segment) -> Path {
        let n = segment.point_count();
        if n < MIN_SPLINE_POINTS {
            tracing::debug!(points = n, "segment too short to spline; joining straight");
            return self
                .fallback()
                .interpolate(&segment.path_coordinates, &segment.value_data);
        }

        let coords = &segment.path_coordinates;
        let point = |i: usize| Point {
            x: coords[2 * i],
            y: coords[2 * i + 1],
        };
        let c = 1.0 - self.tension;

        let mut path = Path::new();
        let first = point(0);
        path.move_to(first.x, first.y, false, Some(segment.value_data[0].clone()));

        for i in 0..n - 1 {
            let p1 = point(i);
            let p2 = point(i + 1);

            let cp1 = match Knot::classify(i, n) {
                Knot::First => p1,
                Knot::Interior | Knot::Last => {
                    outgoing_control(point(i - 1), p1, p2, self.alpha, c)
                }
            };
            let cp2 = match Knot::classify(i, n) {
                Knot::Last => p2,
                Knot::First | Knot::Interior => {
                    incoming_control(p1, p2, point(i + 2), self.alpha, c)
                }
            };

            tracing::trace!(
                index = i + 1,
                cp1.x = cp1.x,
                cp1.y = cp1.y,
                cp2.x = cp2.x,
                cp2.y = cp2.y,
                "cardinal curve"
            );
            path.curve_to(
                cp1.x,
                cp1.y,
                cp2.x,
                cp2.y,
                p2.x,
                p2.y,
                false,
                Some(segment.value_data[i + 1].clone()),
            );
        }

        path
    }
}

impl Interpolation for Cardinal {
    fn interpolate(&self, coordinates: &[f64], values: &[ValueData]) -> Path {
        let segments = split_into_segments(
            coordinates,
            values,
            SplitOptions {
                fill_holes: self.fill_holes,
                increasing_x: false,
            },
        );

        match segments.as_slice() {
            [] => self.fallback().interpolate(&[], &[]),
            [segment] => self.interpolate_segment(segment),
            _ => Path::join(segments.iter().map(|s| self.interpolate_segment(s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

/// Where the curve step starting at point `i` sits within its segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Knot {
    /// No point before `p1`: the outgoing control point is `p1` itself.
    First,
    Interior,
    /// No point after `p2`: the incoming control point is `p2` itself.
    Last,
}

impl Knot {
    fn classify(i: usize, n: usize) -> Knot {
        debug_assert!(n >= MIN_SPLINE_POINTS && i + 1 < n);
        if i == 0 {
            Knot::First
        } else if i + 2 == n {
            Knot::Last
        } else {
            Knot::Interior
        }
    }
}

/// `(|d|^2)^alpha`, the parameterized edge length.
fn edge_weight(dx: f64, dy: f64, alpha: f64) -> f64 {
    (dx * dx + dy * dy).powf(alpha)
}

/// Control point leaving `p1` toward `p2`.
fn outgoing_control(p0: Point, p1: Point, p2: Point, alpha: f64, c: f64) -> Point {
    let (d1x, d1y) = (p1.x - p0.x, p1.y - p0.y);
    let (d2x, d2y) = (p2.x - p1.x, p2.y - p1.y);
    let l1 = edge_weight(d1x, d1y, alpha);
    let l2 = edge_weight(d2x, d2y, alpha);

    let denom = 3.0 * (l1 + (l1 * l2).sqrt());
    let cp = Point {
        x: p1.x + c * (d1x * l2 + d2x * l1) / denom,
        y: p1.y + c * (d1y * l2 + d2y * l1) / denom,
    };
    guard_control(cp, p1, denom)
}

/// Control point entering `p2` from `p1`.
fn incoming_control(p1: Point, p2: Point, p3: Point, alpha: f64, c: f64) -> Point {
    let (d2x, d2y) = (p2.x - p1.x, p2.y - p1.y);
    let (d3x, d3y) = (p3.x - p2.x, p3.y - p2.y);
    let l2 = edge_weight(d2x, d2y, alpha);
    let l3 = edge_weight(d3x, d3y, alpha);

    let denom = 3.0 * (l3 + (l3 * l2).sqrt());
    let cp = Point {
        x: p2.x - c * (d3x * l2 + d2x * l3) / denom,
        y: p2.y - c * (d3y * l2 + d2y * l3) / denom,
    };
    guard_control(cp, p2, denom)
}

/// A coincident neighbour has no influence: the control point collapses onto its endpoint.
fn guard_control(cp: Point, endpoint: Point, denom: f64) -> Point {
    if denom > 0.0 && cp.x.is_finite() && cp.y.is_finite() {
        return cp;
    }
    tracing::debug!(
        x = endpoint.x,
        y = endpoint.y,
        "degenerate edge; control point collapsed onto its endpoint"
    );
    endpoint
}
