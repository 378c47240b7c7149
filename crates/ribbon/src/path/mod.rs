//! Path accumulator: an ordered list of drawing elements that keep their source point data.

mod fmt;
mod parse;

use std::fmt::Display;

use serde::Serialize;

use crate::value::ValueData;

pub use fmt::{DEFAULT_ACCURACY, MAX_ACCURACY};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PathCommand {
    Move {
        x: f64,
        y: f64,
    },
    Line {
        x: f64,
        y: f64,
    },
    Curve {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    Close,
}

impl PathCommand {
    pub fn letter(&self) -> char {
        match self {
            PathCommand::Move { .. } => 'M',
            PathCommand::Line { .. } => 'L',
            PathCommand::Curve { .. } => 'C',
            PathCommand::Close => 'Z',
        }
    }

    /// The point the command ends at, if any.
    pub fn end(&self) -> Option<(f64, f64)> {
        match *self {
            PathCommand::Move { x, y }
            | PathCommand::Line { x, y }
            | PathCommand::Curve { x, y, .. } => Some((x, y)),
            PathCommand::Close => None,
        }
    }

    fn map_points(&mut self, mut f: impl FnMut(f64, f64) -> (f64, f64)) {
        match self {
            PathCommand::Move { x, y } | PathCommand::Line { x, y } => {
                (*x, *y) = f(*x, *y);
            }
            PathCommand::Curve {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                (*x1, *y1) = f(*x1, *y1);
                (*x2, *y2) = f(*x2, *y2);
                (*x, *y) = f(*x, *y);
            }
            PathCommand::Close => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathElement {
    #[serde(flatten)]
    pub command: PathCommand,
    pub relative: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ValueData>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
    accuracy: u8,
}

impl Default for Path {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            accuracy: DEFAULT_ACCURACY,
        }
    }
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of fractional digits used by [`Path::stringify`].
    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = accuracy.min(MAX_ACCURACY);
        self
    }

    pub fn accuracy(&self) -> u8 {
        self.accuracy
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<PathElement> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements drawn with the given command letter (`'M'`, `'L'`, `'C'`, `'Z'`).
    pub fn count(&self, letter: char) -> usize {
        self.elements
            .iter()
            .filter(|e| e.command.letter() == letter.to_ascii_uppercase())
            .count()
    }

    fn push(&mut self, command: PathCommand, relative: bool, data: Option<ValueData>) -> &mut Self {
        self.elements.push(PathElement {
            command,
            relative,
            data,
        });
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64, relative: bool, data: Option<ValueData>) -> &mut Self {
        self.push(PathCommand::Move { x, y }, relative, data)
    }

    pub fn line_to(&mut self, x: f64, y: f64, relative: bool, data: Option<ValueData>) -> &mut Self {
        self.push(PathCommand::Line { x, y }, relative, data)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn curve_to(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        relative: bool,
        data: Option<ValueData>,
    ) -> &mut Self {
        self.push(
            PathCommand::Curve {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            },
            relative,
            data,
        )
    }

    pub fn close(&mut self) -> &mut Self {
        self.push(PathCommand::Close, false, None)
    }

    /// Concatenates independently built paths, keeping each one's elements in order.
    ///
    /// The joined path uses the accuracy of the first input.
    pub fn join(paths: impl IntoIterator<Item = Path>) -> Path {
        Self::join_closed(paths, false)
    }

    /// Like [`Path::join`], closing the joined path when `close` is set.
    pub fn join_closed(paths: impl IntoIterator<Item = Path>, close: bool) -> Path {
        let mut paths = paths.into_iter();
        let mut joined = paths.next().unwrap_or_default();
        for path in paths {
            joined.elements.extend(path.elements);
        }
        if close {
            joined.close();
        }
        joined
    }

    /// Scales every coordinate, relative elements included.
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        for e in &mut self.elements {
            e.command.map_points(|x, y| (x * sx, y * sy));
        }
        self
    }

    /// Translates every absolute element; relative elements are offsets and stay unchanged.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        for e in self.elements.iter_mut().filter(|e| !e.relative) {
            e.command.map_points(|x, y| (x + dx, y + dy));
        }
        self
    }

    /// Renders the path as an SVG `d` attribute value.
    pub fn stringify(&self) -> String {
        let mut out = String::with_capacity(self.elements.len().saturating_mul(32));
        for e in &self.elements {
            let letter = if e.relative {
                e.command.letter().to_ascii_lowercase()
            } else {
                e.command.letter()
            };
            out.push(letter);
            match e.command {
                PathCommand::Move { x, y } | PathCommand::Line { x, y } => {
                    self.push_coords(&mut out, &[x, y]);
                }
                PathCommand::Curve {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    self.push_coords(&mut out, &[x1, y1, x2, y2, x, y]);
                }
                PathCommand::Close => {}
            }
        }
        out
    }

    fn push_coords(&self, out: &mut String, coords: &[f64]) {
        for (i, v) in coords.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            fmt::fmt_coord_into(out, *v, self.accuracy);
        }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Self {
        Self {
            elements: iter.into_iter().collect(),
            ..Default::default()
        }
    }
}
