//! Subcommand bodies: library call plus JSON result document.

use anyhow::{Context, Result};
use planar::geometry::{diameter, find_nearest_circle_pair, min_containing_circle_cfg};
use planar::{Circle, GeomCfg, Point};
use serde_json::{json, Value};

use crate::input::{CircleRow, PointRow};

pub fn enclose(points: &[Point], cfg: GeomCfg) -> Result<Value> {
    let c = min_containing_circle_cfg(points, cfg).context("enclosing circle")?;
    tracing::info!(points = points.len(), radius = c.radius(), "enclose");
    Ok(json!({
        "center": PointRow::from(c.center()),
        "radius": c.radius(),
        "points": points.len(),
    }))
}

pub fn farthest_pair(points: &[Point]) -> Result<Value> {
    let s = diameter(points).context("diameter")?;
    tracing::info!(points = points.len(), length = s.length(), "diameter");
    Ok(json!({
        "begin": PointRow::from(s.begin),
        "end": PointRow::from(s.end),
        "length": s.length(),
    }))
}

pub fn nearest(circles: &[Circle]) -> Result<Value> {
    let (a, b) = find_nearest_circle_pair(circles).context("nearest circle pair")?;
    let gap = a.distance(&b);
    tracing::info!(circles = circles.len(), distance = gap, "nearest");
    Ok(json!({
        "first": CircleRow::from(a),
        "second": CircleRow::from(b),
        "distance": gap,
    }))
}
