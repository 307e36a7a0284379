//! Line geometry for the price series.
//!
//! `build_path` runs a cardinal spline through the points and records the
//! result as move, line and cubic commands. The commands print as SVG path
//! data and flatten into a polyline for the drawing backend.

use crate::format::coord;
use std::fmt;

/// Segments a cubic is split into when flattened.
pub const CURVE_STEPS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CubicTo {
        c1: (f64, f64),
        c2: (f64, f64),
        to: (f64, f64),
    },
}

/// A built line in plot-area pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinePath {
    commands: Vec<PathCommand>,
}

impl LinePath {
    /// Polyline through the path, each cubic sampled `steps` times.
    pub fn flatten(&self, steps: usize) -> Vec<(f64, f64)> {
        let steps = steps.max(1);
        let mut out = Vec::new();
        let mut pen = (0.0, 0.0);
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(x, y) | PathCommand::LineTo(x, y) => {
                    pen = (x, y);
                    out.push(pen);
                }
                PathCommand::CubicTo { c1, c2, to } => {
                    for i in 1..=steps {
                        let t = i as f64 / steps as f64;
                        out.push(cubic_at(pen, c1, c2, to, t));
                    }
                    pen = to;
                }
            }
        }
        out
    }
}

fn cubic_at(p0: (f64, f64), c1: (f64, f64), c2: (f64, f64), p3: (f64, f64), t: f64) -> (f64, f64) {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * c1.0 + c * c2.0 + d * p3.0,
        a * p0.1 + b * c1.1 + c * c2.1 + d * p3.1,
    )
}

impl fmt::Display for LinePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(x, y) => write!(f, "M{},{}", coord(x), coord(y))?,
                PathCommand::LineTo(x, y) => write!(f, "L{},{}", coord(x), coord(y))?,
                PathCommand::CubicTo { c1, c2, to } => write!(
                    f,
                    "C{},{},{},{},{},{}",
                    coord(c1.0),
                    coord(c1.1),
                    coord(c2.0),
                    coord(c2.1),
                    coord(to.0),
                    coord(to.1)
                )?,
            }
        }
        Ok(())
    }
}

/// Accumulates path commands.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo(x, y));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo(x, y));
    }

    pub fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::CubicTo {
            c1: (x1, y1),
            c2: (x2, y2),
            to: (x, y),
        });
    }

    pub fn finish(self) -> LinePath {
        LinePath {
            commands: self.commands,
        }
    }
}

/// Streaming cardinal spline. Each segment's tangents come from its
/// neighbours; the first and last segments reuse their own far endpoint as
/// the missing neighbour.
struct Cardinal<'a> {
    path: &'a mut PathBuilder,
    k: f64,
    x0: f64,
    x1: f64,
    x2: f64,
    y0: f64,
    y1: f64,
    y2: f64,
    seen: u8,
}

impl<'a> Cardinal<'a> {
    fn new(path: &'a mut PathBuilder, tension: f64) -> Self {
        Self {
            path,
            k: (1.0 - tension) / 6.0,
            x0: f64::NAN,
            x1: f64::NAN,
            x2: f64::NAN,
            y0: f64::NAN,
            y1: f64::NAN,
            y2: f64::NAN,
            seen: 0,
        }
    }

    fn segment(&mut self, x: f64, y: f64) {
        self.path.bezier_curve_to(
            self.x1 + self.k * (self.x2 - self.x0),
            self.y1 + self.k * (self.y2 - self.y0),
            self.x2 + self.k * (self.x1 - x),
            self.y2 + self.k * (self.y1 - y),
            self.x2,
            self.y2,
        );
    }

    fn point(&mut self, x: f64, y: f64) {
        match self.seen {
            0 => {
                self.seen = 1;
                self.path.move_to(x, y);
            }
            1 => {
                self.seen = 2;
                self.x1 = x;
                self.y1 = y;
            }
            _ => {
                self.seen = 3;
                self.segment(x, y);
            }
        }
        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }

    fn end(&mut self) {
        match self.seen {
            2 => self.path.line_to(self.x2, self.y2),
            3 => {
                let (x, y) = (self.x1, self.y1);
                self.segment(x, y);
            }
            _ => {}
        }
    }
}

/// Cardinal spline through `points` using the given accessors.
///
/// No points yields `None`. A single point yields a lone move command, which
/// draws nothing but keeps the series present; two points are always joined
/// by a straight segment.
pub fn build_path<T, X, Y>(points: &[T], x: X, y: Y, tension: f64) -> Option<LinePath>
where
    X: Fn(&T) -> f64,
    Y: Fn(&T) -> f64,
{
    if points.is_empty() {
        return None;
    }
    let mut path = PathBuilder::new();
    let mut spline = Cardinal::new(&mut path, tension);
    for p in points {
        spline.point(x(p), y(p));
    }
    spline.end();
    Some(path.finish())
}
