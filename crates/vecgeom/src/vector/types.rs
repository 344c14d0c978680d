//! Value types: `Vector` (planar, vestigial z) and `PolarVector`.
//!
//! - `Vector`: Cartesian triple whose 2D operations read only `x` and `y`.
//! - `PolarVector`: `(length, angle)` with the angle in radians, not wrapped.
//! - `ORIGIN`: shared zero vector used as the default anchor of arrows and segments.
//!
//! Both types are `Copy`; every method takes `self` by value and returns a new
//! value, so shared constants such as `ORIGIN` can never be changed in place.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Vector2, Vector3};

/// The zero vector `(0, 0, 0)`.
pub const ORIGIN: Vector = Vector::ZERO;

/// Cartesian vector with a vestigial third coordinate.
///
/// Length, dot product and polar conversion ignore `z`. Arithmetic builds its
/// result from `x` and `y` only, so derived vectors are planar (`z == 0`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Planar vector (`z = 0`).
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    #[inline]
    pub const fn new3(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length of the `(x, y)` part, without intermediate overflow.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Alias of [`Vector::length`].
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.length()
    }

    /// Inner product over `(x, y)`.
    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn scale(self, s: f64) -> Vector {
        Vector::new(self.x * s, self.y * s)
    }

    /// Same as scaling by `-1`.
    #[inline]
    pub fn negate(self) -> Vector {
        self.scale(-1.0)
    }

    /// Unit vector in the same direction; the zero vector is returned unchanged.
    pub fn normalize(self) -> Vector {
        let length = self.length();
        if length > 0.0 {
            Vector::new(self.x / length, self.y / length)
        } else {
            self
        }
    }

    /// Polar form `(length, atan2(y, x))`. The zero vector gets angle 0.
    #[inline]
    pub fn to_polar(self) -> PolarVector {
        PolarVector::new(self.length(), self.y.atan2(self.x))
    }

    /// Component-wise comparison of `(x, y)` within `eps`.
    #[inline]
    pub fn approx_eq(self, other: Vector, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    #[inline]
    pub fn xy(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn xyz(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(x={:?}, y={:?})", self.x, self.y)
    }
}

/// Text that does not describe a vector (`"x,y"` or `"x,y,z"`).
#[derive(Clone, Debug, PartialEq)]
pub struct ParseVectorError {
    /// Short description of the input, e.g. `text "abc"`.
    pub found: String,
}

impl fmt::Display for ParseVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a vector \"x,y\" or \"x,y,z\", found {}", self.found)
    }
}

impl std::error::Error for ParseVectorError {}

/// Accepts `"x,y"`, `"x,y,z"`, optionally wrapped in parentheses.
impl FromStr for Vector {
    type Err = ParseVectorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = |found: String| ParseVectorError { found };
        let text = raw.trim();
        if text.is_empty() {
            return Err(invalid("empty text".to_string()));
        }
        let nums: Option<Vec<f64>> = text
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(',')
            .map(|p| p.trim().parse::<f64>().ok())
            .collect();
        match nums.as_deref() {
            Some(&[x, y]) => Ok(Vector::new(x, y)),
            Some(&[x, y, z]) => Ok(Vector::new3(x, y, z)),
            Some(&[s]) => Err(invalid(format!("scalar {:?}", s))),
            Some(other) => Err(invalid(format!("sequence of {} numbers", other.len()))),
            None => Err(invalid(format!("text {:?}", text))),
        }
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector::new3(x, y, z)
    }
}

impl From<Vector2<f64>> for Vector {
    fn from(v: Vector2<f64>) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Vector::new3(v.x, v.y, v.z)
    }
}

impl From<Vector> for Vector2<f64> {
    fn from(v: Vector) -> Self {
        v.xy()
    }
}

/// Polar coordinates: `length >= 0`, `angle` in radians (any finite value).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarVector {
    pub length: f64,
    pub angle: f64,
}

impl PolarVector {
    #[inline]
    pub const fn new(length: f64, angle: f64) -> Self {
        Self { length, angle }
    }

    /// Inverse of [`Vector::to_polar`].
    #[inline]
    pub fn to_vector(self) -> Vector {
        Vector::new(self.length * self.angle.cos(), self.length * self.angle.sin())
    }

    /// Same length, angle shifted by `delta`.
    #[inline]
    pub fn rotated(self, delta: f64) -> PolarVector {
        PolarVector::new(self.length, self.angle + delta)
    }
}

impl fmt::Display for PolarVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolarVector(length={:?}, angle={:?})",
            self.length, self.angle
        )
    }
}

impl From<(f64, f64)> for PolarVector {
    fn from((length, angle): (f64, f64)) -> Self {
        PolarVector::new(length, angle)
    }
}

impl From<PolarVector> for (f64, f64) {
    fn from(p: PolarVector) -> Self {
        (p.length, p.angle)
    }
}
