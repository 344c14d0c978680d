//! 2D vectors with a vestigial third coordinate.
//!
//! Purpose
//! - Provide the one logic-bearing value type of the crate: `Vector`, its
//!   arithmetic (sum, difference, dot product, scaling) and its polar form.
//! - Keep everything pure. Values are `Copy`, methods return new values, and
//!   nothing is mutated through a shared reference.
//!
//! Conventions
//! - Only `x` and `y` take part in length, dot product and polar conversion.
//!   `z` is accepted and carried for 3D consumers but arithmetic results are
//!   planar (`z == 0`).
//! - Normalizing the zero vector returns it unchanged; this is not an error.
//! - Scalars are broadcast on `+`/`-`; `Vector * Vector` is the dot product.
//!
//! Code cross-refs: `Vector`, `PolarVector`, `Operand`, `Value`, `crate::conversions`

mod ops;
mod types;

pub use ops::{add, apply, multiply, subtract, OpKind, Operand, OperandError, Value};
pub use types::{ParseVectorError, PolarVector, Vector, ORIGIN};
