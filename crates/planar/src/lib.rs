//! Planar geometry primitives and a small generic grid container.
//!
//! Layout
//! - `geometry`: points, segments, circles, triangles, canonical lines and the
//!   free functions built on them (diameter, circumcircle, enclosing circle).
//! - `matrix`: fixed-size `Matrix<E>` with checked cell access.
//! - `sample`: seeded point/circle clouds for benches, tests and the CLI.
//!
//! API Policy
//! - Every fallible operation returns a module-level error enum; nothing in
//!   this crate panics on bad input except the `Index` impls on `Matrix`.

pub mod geometry;
pub mod matrix;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geometry::{Circle, GeomCfg, GeometryError, Line, Point, Segment, Triangle};
pub use matrix::{create_matrix, Cell, Matrix, MatrixError};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geometry::{
        bisector_by_points, circle_by_diameter, circle_by_three_points, diameter,
        find_nearest_circle_pair, line_by_points, line_by_segment, min_containing_circle,
        min_containing_circle_cfg, Circle, GeomCfg, GeometryError, Line, Point, Segment, Triangle,
    };
    pub use crate::matrix::{create_matrix, Cell, Matrix, MatrixError};
    pub use crate::sample::{random_circles, random_points, Bounds2, ReplayToken};
}
