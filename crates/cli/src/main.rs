use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::sample::{random_circles, random_points, Bounds2, ReplayToken};
use planar::GeomCfg;
use serde_json::{json, Value};
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod input;
mod provenance;

use provenance::Provenance;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Planar geometry runner: enclosing circles, farthest pairs, nearest circles")]
struct Cmd {
    /// Relative coverage slack for `enclose`, scaled by the largest |coordinate|
    #[arg(long, global = true, default_value_t = GeomCfg::default().eps_contain)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Minimum enclosing circle of a point set (csv/parquet/json with x,y)
    Enclose {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Farthest pair of a point set
    Diameter {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Nearest pair of circles (csv/parquet/json with x,y,r)
    Nearest {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a seeded random point (or circle) cloud as CSV
    Sample {
        #[arg(long, default_value_t = 16)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Half side of the sampling square around the origin
        #[arg(long, default_value_t = 10.0)]
        half: f64,
        /// Emit circles (adds an `r` column)
        #[arg(long)]
        circles: bool,
        #[arg(long, default_value_t = 1.0)]
        max_radius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg {
        eps_contain: cmd.eps,
    };
    match cmd.action {
        Action::Enclose { input, out } => {
            let points = input::load_points(&input)?;
            let doc = commands::enclose(&points, cfg)?;
            let params = json!({ "input": input.display().to_string(), "eps": cfg.eps_contain });
            emit(&doc, out.as_deref(), Provenance::new("enclose", params))
        }
        Action::Diameter { input, out } => {
            let points = input::load_points(&input)?;
            let doc = commands::farthest_pair(&points)?;
            let params = json!({ "input": input.display().to_string() });
            emit(&doc, out.as_deref(), Provenance::new("diameter", params))
        }
        Action::Nearest { input, out } => {
            let circles = input::load_circles(&input)?;
            let doc = commands::nearest(&circles)?;
            let params = json!({ "input": input.display().to_string() });
            emit(&doc, out.as_deref(), Provenance::new("nearest", params))
        }
        Action::Sample {
            count,
            seed,
            index,
            half,
            circles,
            max_radius,
            out,
        } => {
            let radius = circles.then_some(max_radius);
            sample(count, ReplayToken { seed, index }, half, radius, &out)
        }
        Action::Report => {
            let doc = Provenance::new("report", json!({})).report();
            println!("{}", serde_json::to_string_pretty(&doc)?);
            Ok(())
        }
    }
}

fn emit(doc: &Value, out: Option<&Path>, prov: Provenance) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(doc)?);
    if let Some(out) = out {
        provenance::write_json_artifact(out, doc, &prov)?;
    }
    Ok(())
}

fn sample(
    count: usize,
    tok: ReplayToken,
    half: f64,
    max_radius: Option<f64>,
    out: &Path,
) -> Result<()> {
    tracing::info!(count, seed = tok.seed, index = tok.index, half, ?max_radius, "sample");
    let bounds = Bounds2::square(half);
    match max_radius {
        Some(r) => {
            let circles = random_circles(count, bounds, r, tok);
            let centers: Vec<_> = circles.iter().map(|c| c.center()).collect();
            let radii: Vec<f64> = circles.iter().map(|c| c.radius()).collect();
            input::write_csv(out, &centers, Some(&radii))?;
        }
        None => input::write_csv(out, &random_points(count, bounds, tok), None)?,
    }
    let params = json!({
        "count": count,
        "seed": tok.seed,
        "index": tok.index,
        "half": half,
        "max_radius": max_radius,
    });
    provenance::write_sidecar(out, &Provenance::new("sample", params))?;
    Ok(())
}
