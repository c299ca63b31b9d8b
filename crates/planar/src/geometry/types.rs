//! Value types: `Point`, `Segment`, `Circle`, `Triangle`, plus `GeomCfg`.
//!
//! - Equality and hashing are structural. `Segment` and `Triangle` compare as
//!   unordered collections of their points.
//! - Hashing treats `-0.0` and `0.0` as the same coordinate so `Hash` agrees
//!   with `PartialEq`. Coordinates are assumed finite; a NaN point is not equal
//!   to itself.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use super::GeometryError;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Relative coverage slack for the enclosing-circle search. A candidate
    /// covers `p` when `|center - p| <= radius + eps_contain * (1 + m)`, with
    /// `m` the largest absolute input coordinate.
    pub eps_contain: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_contain: 1e-12 }
    }
}

#[inline]
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn midpoint(&self, other: Point) -> Point {
        ((self.to_vector() + other.to_vector()) / 2.0).into()
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Total order over coordinates (x, then y) with `-0.0 == 0.0`.
    /// Used to store unordered point collections canonically.
    pub(crate) fn canonical_cmp(&self, other: &Point) -> Ordering {
        unsigned_zero(self.x)
            .total_cmp(&unsigned_zero(other.x))
            .then_with(|| unsigned_zero(self.y).total_cmp(&unsigned_zero(other.y)))
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unsigned_zero(self.x).to_bits().hash(state);
        unsigned_zero(self.y).to_bits().hash(state);
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Segment between two points. Endpoint order is irrelevant for `Eq`/`Hash`.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub begin: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub const fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.begin.distance(self.end)
    }

    fn sorted_endpoints(&self) -> (Point, Point) {
        if self.begin.canonical_cmp(&self.end) == Ordering::Greater {
            (self.end, self.begin)
        } else {
            (self.begin, self.end)
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_endpoints() == other.sorted_endpoints()
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_endpoints().hash(state);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({} -> {})", self.begin, self.end)
    }
}

/// Circle with a finite, non-negative radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius { radius });
        }
        Ok(Self { center, radius })
    }

    /// Zero-radius circle.
    #[inline]
    pub fn point(center: Point) -> Self {
        Self {
            center,
            radius: 0.0,
        }
    }

    /// Callers guarantee `radius >= 0` (distances, norms).
    #[inline]
    pub(crate) fn from_parts(center: Point, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "negative radius {radius}");
        Self { center, radius }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Gap between the two circles; `0.0` when they overlap.
    pub fn distance(&self, other: &Circle) -> f64 {
        let centers = self.center.distance(other.center);
        if self.radius + other.radius > centers {
            0.0
        } else {
            centers - self.radius - other.radius
        }
    }

    /// Boundary-inclusive membership, exact comparison.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }

    /// Membership with slack `eps` added to the radius.
    #[inline]
    pub fn contains_eps(&self, p: Point, eps: f64) -> bool {
        self.center.distance(p) <= self.radius + eps
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle(center = {}, radius = {})", self.center, self.radius)
    }
}

/// Triangle as an unordered set of three distinct points.
///
/// Invariants:
/// - Vertices are pairwise distinct.
/// - Stored in canonical order, so derived `Eq`/`Hash` ignore input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    points: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self, GeometryError> {
        for (p, q) in [(a, b), (b, c), (c, a)] {
            if p == q {
                return Err(GeometryError::CoincidentPoints { point: p });
            }
        }
        let mut points = [a, b, c];
        points.sort_by(Point::canonical_cmp);
        Ok(Self { points })
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn b(&self) -> Point {
        self.points[1]
    }

    #[inline]
    pub fn c(&self) -> Point {
        self.points[2]
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        self.points
    }

    pub fn half_perimeter(&self) -> f64 {
        let [a, b, c] = self.points;
        (a.distance(b) + b.distance(c) + c.distance(a)) / 2.0
    }

    /// Heron's formula.
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.points;
        heron(a, b, c)
    }

    /// Area-decomposition test: the three sub-triangles towards `p` must not
    /// cover more area than the triangle itself. Exact `<=`, no slack.
    pub fn contains(&self, p: Point) -> bool {
        let [a, b, c] = self.points;
        heron(a, b, p) + heron(b, c, p) + heron(c, a, p) <= self.area()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.points;
        write!(f, "Triangle(a = {a}, b = {b}, c = {c})")
    }
}

/// Heron's formula on raw vertices; degenerate input yields `0.0`.
fn heron(a: Point, b: Point, c: Point) -> f64 {
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ca = c.distance(a);
    let s = (ab + bc + ca) / 2.0;
    // Rounding can push a flat triangle's product slightly below zero.
    (s * (s - ab) * (s - bc) * (s - ca)).max(0.0).sqrt()
}
