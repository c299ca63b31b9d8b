//! Seeded random point and circle clouds.
//!
//! Purpose
//! - Reproducible inputs for benches, randomized tests and `planar sample`.
//!
//! Model
//! - Coordinates are uniform in an axis-aligned box (`Bounds2`).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the `index`-th cloud of a stream can be regenerated on its own.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::{Circle, Point};

/// Axis-aligned sampling box `[min_x, max_x] × [min_y, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds2 {
    /// Square `[-half, half]²` centered at the origin.
    pub fn square(half: f64) -> Self {
        let h = half.abs();
        Self {
            min_x: -h,
            max_x: h,
            min_y: -h,
            max_y: h,
        }
    }

    fn draw<R: Rng>(&self, rng: &mut R) -> Point {
        // Degenerate boxes collapse to their lower corner instead of panicking
        // inside `gen_range`.
        let x = if self.max_x > self.min_x {
            rng.gen_range(self.min_x..=self.max_x)
        } else {
            self.min_x
        };
        let y = if self.max_y > self.min_y {
            rng.gen_range(self.min_y..=self.max_y)
        } else {
            self.min_y
        };
        Point::new(x, y)
    }
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self::square(1.0)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }

    /// Token for the next cloud in the same stream.
    #[inline]
    pub fn next_index(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// `count` points uniform in `bounds`.
pub fn random_points(count: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..count).map(|_| bounds.draw(&mut rng)).collect()
}

/// `count` circles with centers uniform in `bounds` and radii in `[0, max_radius]`.
pub fn random_circles(
    count: usize,
    bounds: Bounds2,
    max_radius: f64,
    tok: ReplayToken,
) -> Vec<Circle> {
    let mut rng = tok.to_std_rng();
    let r_max = if max_radius.is_finite() {
        max_radius.max(0.0)
    } else {
        0.0
    };
    (0..count)
        .map(|_| {
            let center = bounds.draw(&mut rng);
            let radius = rng.gen::<f64>() * r_max;
            Circle::new(center, radius).unwrap_or_else(|_| Circle::point(center))
        })
        .collect()
}
