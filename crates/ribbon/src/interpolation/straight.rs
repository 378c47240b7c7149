use serde::{Deserialize, Serialize};

use super::Interpolation;
use crate::path::Path;
use crate::segment::usable_points;
use crate::value::ValueData;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StraightOptions {
    pub fill_holes: bool,
}

/// No smoothing: valid points are joined with straight lines.
///
/// Each hole ends the current run; the next valid point starts over with a move, unless holes
/// are filled. Also serves as the fallback for runs too short to spline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Straight {
    fill_holes: bool,
}

impl Straight {
    pub fn new(options: StraightOptions) -> Self {
        Self {
            fill_holes: options.fill_holes,
        }
    }
}

impl Interpolation for Straight {
    fn interpolate(&self, coordinates: &[f64], values: &[ValueData]) -> Path {
        let n = usable_points(coordinates, values);
        let mut path = Path::new();
        let mut hole = true;

        for (i, data) in values.iter().enumerate().take(n) {
            if data.is_hole() {
                if !self.fill_holes {
                    hole = true;
                }
                continue;
            }

            let (x, y) = (coordinates[2 * i], coordinates[2 * i + 1]);
            if hole {
                path.move_to(x, y, false, Some(data.clone()));
                hole = false;
            } else {
                path.line_to(x, y, false, Some(data.clone()));
            }
        }

        path
    }
}
