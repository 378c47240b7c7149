use svgtypes::{PathParser, PathSegment};

use super::Path;
use crate::error::{Error, Result};

impl Path {
    /// Parses an SVG `d` string made of `M`, `L`, `C` and `Z` commands (either case).
    ///
    /// Relative commands stay relative; no data is attached to the parsed elements.
    pub fn parse(d: &str) -> Result<Path> {
        let mut path = Path::new();
        for segment in PathParser::from(d) {
            let segment = segment.map_err(|err| Error::PathSyntax {
                message: err.to_string(),
            })?;
            match segment {
                PathSegment::MoveTo { abs, x, y } => {
                    path.move_to(x, y, !abs, None);
                }
                PathSegment::LineTo { abs, x, y } => {
                    path.line_to(x, y, !abs, None);
                }
                PathSegment::CurveTo {
                    abs,
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    path.curve_to(x1, y1, x2, y2, x, y, !abs, None);
                }
                PathSegment::ClosePath { .. } => {
                    path.close();
                }
                other => {
                    return Err(Error::UnsupportedPathCommand {
                        command: segment_letter(&other),
                    });
                }
            }
        }
        Ok(path)
    }
}

fn segment_letter(segment: &PathSegment) -> char {
    let (letter, abs) = match *segment {
        PathSegment::MoveTo { abs, .. } => ('M', abs),
        PathSegment::LineTo { abs, .. } => ('L', abs),
        PathSegment::HorizontalLineTo { abs, .. } => ('H', abs),
        PathSegment::VerticalLineTo { abs, .. } => ('V', abs),
        PathSegment::CurveTo { abs, .. } => ('C', abs),
        PathSegment::SmoothCurveTo { abs, .. } => ('S', abs),
        PathSegment::Quadratic { abs, .. } => ('Q', abs),
        PathSegment::SmoothQuadratic { abs, .. } => ('T', abs),
        PathSegment::EllipticalArc { abs, .. } => ('A', abs),
        PathSegment::ClosePath { abs } => ('Z', abs),
    };
    if abs { letter } else { letter.to_ascii_lowercase() }
}
