//! Point and circle loaders (CSV/Parquet via Polars, JSON via serde).
//!
//! Tabular inputs need `x`, `y` columns (plus `r` for circles); any numeric
//! dtype is accepted and cast to `f64`. JSON inputs are arrays of
//! `{"x": .., "y": ..}` / `{"x": .., "y": .., "r": ..}` objects.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use planar::{Circle, Point};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointRow {
    pub x: f64,
    pub y: f64,
}

impl From<PointRow> for Point {
    fn from(r: PointRow) -> Self {
        Point::new(r.x, r.y)
    }
}

impl From<Point> for PointRow {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CircleRow {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl From<Circle> for CircleRow {
    fn from(c: Circle) -> Self {
        Self {
            x: c.center().x,
            y: c.center().y,
            r: c.radius(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Parquet,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Ok(Format::Csv),
        Some("parquet") => Ok(Format::Parquet),
        Some("json") => Ok(Format::Json),
        other => bail!(
            "unsupported input {} (extension {:?}; expected csv, parquet or json)",
            path.display(),
            other
        ),
    }
}

fn read_frame(path: &Path, format: Format) -> Result<DataFrame> {
    let lf = match format {
        Format::Csv => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Format::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        Format::Json => bail!("{} is not a tabular input", path.display()),
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_shape");
    Ok(df)
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("null `{name}` in row {row}")))
        .collect()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn load_points(path: &Path) -> Result<Vec<Point>> {
    let format = format_of(path)?;
    if format == Format::Json {
        let rows: Vec<PointRow> = read_json(path)?;
        return Ok(rows.into_iter().map(Point::from).collect());
    }
    let df = read_frame(path, format)?;
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    Ok(xs.into_iter().zip(ys).map(Point::from).collect())
}

pub fn load_circles(path: &Path) -> Result<Vec<Circle>> {
    let format = format_of(path)?;
    let rows: Vec<CircleRow> = if format == Format::Json {
        read_json(path)?
    } else {
        let df = read_frame(path, format)?;
        let xs = column_f64(&df, "x")?;
        let ys = column_f64(&df, "y")?;
        let rs = column_f64(&df, "r")?;
        xs.into_iter()
            .zip(ys)
            .zip(rs)
            .map(|((x, y), r)| CircleRow { x, y, r })
            .collect()
    };
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            Circle::new(Point::new(row.x, row.y), row.r).with_context(|| format!("circle row {i}"))
        })
        .collect()
}

/// Write points (and optional radii) as a CSV with `x,y[,r]` columns.
pub fn write_csv(path: &Path, points: &[Point], radii: Option<&[f64]>) -> Result<()> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = match radii {
        Some(rs) => df!("x" => xs, "y" => ys, "r" => rs.to_vec())?,
        None => df!("x" => xs, "y" => ys)?,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(())
}
