//! Canonical lines `y·cos(angle) = x·sin(angle) + b` with `angle ∈ [0, π)`.
//!
//! - Vertical lines are regular members: angle exactly `π/2`.
//! - Constructors from two points reject coincident points; `cross_point`
//!   rejects parallel lines instead of returning NaN coordinates.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use super::types::{Point, Segment};
use super::GeometryError;

/// Line through a point at a given angle to the X axis.
///
/// Invariants:
/// - `0 <= angle < π`.
/// - `b = point.y·cos(angle) − point.x·sin(angle)` for any point on the line.
///
/// Equality is exact on `(angle, b)`; no tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    b: f64,
    angle: f64,
}

impl Line {
    pub fn new(point: Point, angle: f64) -> Result<Self, GeometryError> {
        if !(0.0..PI).contains(&angle) {
            return Err(GeometryError::InvalidAngle { angle });
        }
        Ok(Self {
            b: point.y * angle.cos() - point.x * angle.sin(),
            angle,
        })
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Intersection of two lines.
    ///
    /// The y coordinate is taken from whichever line has the larger `|cos|`,
    /// which keeps the division away from near-vertical lines.
    pub fn cross_point(&self, other: &Line) -> Result<Point, GeometryError> {
        let det = (other.angle - self.angle).sin();
        if det == 0.0 {
            return Err(GeometryError::ParallelLines);
        }
        let x = (self.b * other.angle.cos() - other.b * self.angle.cos()) / det;
        let y = if self.angle.cos().abs() <= other.angle.cos().abs() {
            (x * other.angle.sin() + other.b) / other.angle.cos()
        } else {
            (x * self.angle.sin() + self.b) / self.angle.cos()
        };
        if !(x.is_finite() && y.is_finite()) {
            return Err(GeometryError::ParallelLines);
        }
        Ok(Point::new(x, y))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line({} * y = {} * x + {})",
            self.angle.cos(),
            self.angle.sin(),
            self.b
        )
    }
}

/// Line through `s.begin` and `s.end`.
pub fn line_by_segment(s: &Segment) -> Result<Line, GeometryError> {
    line_by_points(s.begin, s.end)
}

/// Line through two distinct points, anchored at `a`.
pub fn line_by_points(a: Point, b: Point) -> Result<Line, GeometryError> {
    let angle = match slope(a, b)? {
        Some(k) => (k.atan() + 2.0 * PI) % PI,
        None => FRAC_PI_2,
    };
    Line::new(a, angle)
}

/// Perpendicular bisector of `ab`, anchored at the midpoint.
pub fn bisector_by_points(a: Point, b: Point) -> Result<Line, GeometryError> {
    let angle = match slope(a, b)? {
        Some(k) => (k.atan() + FRAC_PI_2) % PI,
        None => 0.0,
    };
    Line::new(a.midpoint(b), angle)
}

/// `dy/dx` of the line through `a` and `b`; `None` when vertical.
fn slope(a: Point, b: Point) -> Result<Option<f64>, GeometryError> {
    if a == b {
        return Err(GeometryError::CoincidentPoints { point: a });
    }
    let dx = a.x - b.x;
    if dx == 0.0 {
        return Ok(None);
    }
    Ok(Some((a.y - b.y) / dx))
}
