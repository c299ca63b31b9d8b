//! Point-set and circle-set searches: farthest pair, nearest circle pair,
//! circumcircle and minimum enclosing circle.
//!
//! Model
//! - The minimum enclosing circle of a finite set either has two of the
//!   points as a diameter or passes through three of them. We enumerate both
//!   candidate families and keep the smallest one covering every point.
//! - Brute force: O(n³) candidates × O(n) coverage check. Meant for small sets.
//!
//! Scan order
//! - All searches visit unordered pairs `(i, j)` with `i < j` (and triples
//!   `i < j < k`) in lexicographic order; ties keep the first candidate found.

use super::line::bisector_by_points;
use super::types::{Circle, GeomCfg, Point, Segment};
use super::GeometryError;

const COLLINEAR_ULPS: f64 = 8.0;

/// Segment joining the two farthest points.
pub fn diameter(points: &[Point]) -> Result<Segment, GeometryError> {
    if points.len() < 2 {
        return Err(GeometryError::TooFewPoints {
            needed: 2,
            got: points.len(),
        });
    }
    let mut best = Segment::new(points[0], points[1]);
    let mut best_len = best.length();
    for (i, &p) in points.iter().enumerate() {
        for &q in &points[i + 1..] {
            let len = p.distance(q);
            if len > best_len {
                best_len = len;
                best = Segment::new(p, q);
            }
        }
    }
    Ok(best)
}

/// Circle whose diameter is `s`: centered at the midpoint.
pub fn circle_by_diameter(s: &Segment) -> Circle {
    let center = s.begin.midpoint(s.end);
    Circle::from_parts(center, center.distance(s.begin))
}

/// Pair of circles with the smallest gap (`Circle::distance`).
pub fn find_nearest_circle_pair(circles: &[Circle]) -> Result<(Circle, Circle), GeometryError> {
    if circles.len() < 2 {
        return Err(GeometryError::TooFewCircles {
            needed: 2,
            got: circles.len(),
        });
    }
    let mut best = (circles[0], circles[1]);
    let mut best_gap = f64::INFINITY;
    for (i, c) in circles.iter().enumerate() {
        for d in &circles[i + 1..] {
            let gap = c.distance(d);
            if gap < best_gap {
                best_gap = gap;
                best = (*c, *d);
            }
        }
    }
    Ok(best)
}

/// Circumcircle: crossing of the bisectors of `ab` and `bc`, radius to `a`.
///
/// Triples whose turn `(b - a) × (c - a)` is within a few ulps of zero,
/// relative to `|b - a| |c - a|`, count as collinear.
pub fn circle_by_three_points(a: Point, b: Point, c: Point) -> Result<Circle, GeometryError> {
    let ab = bisector_by_points(a, b)?;
    let bc = bisector_by_points(b, c)?;
    let (u, v) = (b.to_vector() - a.to_vector(), c.to_vector() - a.to_vector());
    if (u.x * v.y - u.y * v.x).abs() <= COLLINEAR_ULPS * f64::EPSILON * u.norm() * v.norm() {
        return Err(GeometryError::CollinearPoints);
    }
    let center = ab
        .cross_point(&bc)
        .map_err(|_| GeometryError::CollinearPoints)?;
    Ok(Circle::from_parts(center, center.distance(a)))
}

/// Smallest circle covering all points, with default tolerances.
pub fn min_containing_circle(points: &[Point]) -> Result<Circle, GeometryError> {
    min_containing_circle_cfg(points, GeomCfg::default())
}

/// Smallest circle covering all points.
///
/// - 0 points: `TooFewPoints`.
/// - 1 point: zero-radius circle at that point.
/// - 2 points: circle by diameter.
/// - 3+ points: pair/triple enumeration. Each candidate's radius reaches its
///   farthest defining point; other points are covered up to
///   `cfg.eps_contain * (1 + m)`, where `m` is the largest absolute coordinate.
pub fn min_containing_circle_cfg(
    points: &[Point],
    cfg: GeomCfg,
) -> Result<Circle, GeometryError> {
    match points {
        [] => Err(GeometryError::TooFewPoints { needed: 1, got: 0 }),
        [p] => Ok(Circle::point(*p)),
        [p, q] => Ok(circle_by_diameter(&Segment::new(*p, *q))),
        _ => enclose_brute_force(points, cfg),
    }
}

fn enclose_brute_force(points: &[Point], cfg: GeomCfg) -> Result<Circle, GeometryError> {
    if !points.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
        return Err(GeometryError::NoEnclosingCircle);
    }
    let scale = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max);
    let slack = cfg.eps_contain * (1.0 + scale);
    let covers = |c: &Circle| points.iter().all(|&p| c.contains_eps(p, slack));
    let mut best: Option<Circle> = None;
    let mut candidates = 0usize;
    let mut consider = |c: Circle| {
        candidates += 1;
        if best.is_none_or(|b| c.radius() < b.radius()) && covers(&c) {
            best = Some(c);
        }
    };

    let n = points.len();
    for i in 0..n - 1 {
        for j in i + 1..n {
            let c = circle_by_diameter(&Segment::new(points[i], points[j]));
            consider(through(c.center(), &[points[i], points[j]]));
        }
    }

    let mut skipped = 0usize;
    for i in 0..n - 2 {
        for j in i + 1..n - 1 {
            for k in j + 1..n {
                let abc = [points[i], points[j], points[k]];
                match circle_by_three_points(abc[0], abc[1], abc[2]) {
                    Ok(c) => consider(through(c.center(), &abc)),
                    // Collinear or repeated points: the pair family covers them.
                    Err(_) => skipped += 1,
                }
            }
        }
    }

    tracing::debug!(
        points = n,
        candidates,
        skipped,
        radius = ?best.map(|c| c.radius()),
        "min_containing_circle"
    );
    best.ok_or(GeometryError::NoEnclosingCircle)
}

/// Circle at `center` reaching the farthest of `defining`.
fn through(center: Point, defining: &[Point]) -> Circle {
    let radius = defining
        .iter()
        .map(|&p| center.distance(p))
        .fold(0.0, f64::max);
    Circle::from_parts(center, radius)
}
