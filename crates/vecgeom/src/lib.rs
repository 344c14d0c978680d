//! Teaching utilities for 2D vector geometry.
//!
//! - `vector`: the `Vector` / `PolarVector` value types and their arithmetic.
//! - `conversions`: angle units, Cartesian ↔ polar, rotation about the origin.
//! - `shapes`: vertex containers a plotting front end draws from.
//!
//! API Policy
//! - Everything is pure and `Copy`-based; there is no shared mutable state, so
//!   all items can be used from several threads without synchronization.

pub mod cfg;
pub mod conversions;
pub mod shapes;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use conversions::{
    cartesian_to_polar, degrees_to_radians, distance, polar_to_cartesian, radians_to_degrees,
    rotate,
};
pub use vector::{
    add, apply, multiply, subtract, OpKind, Operand, OperandError, ParseVectorError, PolarVector,
    Value, Vector, ORIGIN,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::conversions::*;
    pub use crate::shapes::{colors, collect_vertices, Arrow, Points, Polygon, Segment, Shape};
    pub use crate::vector::*;
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
