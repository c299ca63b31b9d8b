//! Elementary 2D geometry (points, segments, circles, triangles, lines).
//!
//! Purpose
//! - Small value types with structural equality plus free functions for the
//!   classic constructions: farthest pair, circle by diameter, circumcircle,
//!   perpendicular bisector, line intersection, minimum enclosing circle.
//!
//! Conventions
//! - Plain `f64` arithmetic; no robustness guarantees beyond IEEE-754.
//! - `Circle::contains` and `Triangle::contains` compare exactly. The
//!   enclosing-circle search is the only place that applies a slack
//!   (`GeomCfg::eps_contain`, scaled by the input's coordinate magnitude).
//! - `Line` equality is exact-bit equality on the normalized `(angle, b)` pair.
//!   Lines built through the same constructor from the same inputs compare
//!   equal; lines built along different paths may differ in the last ulp.
//! - Undefined results (parallel lines, coincident or collinear points) are
//!   surfaced as `GeometryError`, never as NaN.

mod enclose;
mod line;
mod types;

pub use enclose::{
    circle_by_diameter, circle_by_three_points, diameter, find_nearest_circle_pair,
    min_containing_circle, min_containing_circle_cfg,
};
pub use line::{bisector_by_points, line_by_points, line_by_segment, Line};
pub use types::{Circle, GeomCfg, Point, Segment, Triangle};

use std::fmt;

/// Errors surfaced by geometry constructors and free functions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    /// A point-set operation received fewer points than it needs.
    TooFewPoints { needed: usize, got: usize },
    /// `find_nearest_circle_pair` needs at least two circles.
    TooFewCircles { needed: usize, got: usize },
    /// Line angle outside `[0, π)` (or NaN).
    InvalidAngle { angle: f64 },
    /// Circle radius negative or not finite.
    InvalidRadius { radius: f64 },
    /// Two points that must differ coincide (line through one point, triangle vertices).
    CoincidentPoints { point: Point },
    /// Lines with equal angle have no single intersection point.
    ParallelLines,
    /// Three points on one line have no circumcircle.
    CollinearPoints,
    /// No candidate circle covered every input point (non-finite input).
    NoEnclosingCircle,
}

impl GeometryError {
    /// True for precondition violations on argument count or value; false for
    /// geometrically undefined results.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            GeometryError::TooFewPoints { .. }
                | GeometryError::TooFewCircles { .. }
                | GeometryError::InvalidAngle { .. }
                | GeometryError::InvalidRadius { .. }
        )
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::TooFewPoints { needed, got } => {
                write!(f, "need at least {needed} points, got {got}")
            }
            GeometryError::TooFewCircles { needed, got } => {
                write!(f, "need at least {needed} circles, got {got}")
            }
            GeometryError::InvalidAngle { angle } => {
                write!(f, "line angle {angle} outside [0, π)")
            }
            GeometryError::InvalidRadius { radius } => {
                write!(f, "circle radius {radius} must be finite and >= 0")
            }
            GeometryError::CoincidentPoints { point } => {
                write!(f, "points coincide at {point}")
            }
            GeometryError::ParallelLines => write!(f, "lines are parallel (no unique crossing)"),
            GeometryError::CollinearPoints => {
                write!(f, "points are collinear (no circumcircle)")
            }
            GeometryError::NoEnclosingCircle => {
                write!(f, "no candidate circle covers every point")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

#[cfg(test)]
mod tests;
