//! Named arithmetic over a tagged right-hand operand, plus `std::ops` impls.
//!
//! The right-hand side of `add`/`subtract`/`multiply` is either another vector
//! or a scalar broadcast to both components. Typed callers cannot pass
//! anything else; text coming from outside (CLI flags, files) goes through
//! [`Operand::parse`], which reports unsupported input as
//! [`OperandError::InvalidOperand`].

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::types::Vector;

/// Arithmetic operation, used to name the operator in errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Subtract,
    Multiply,
}

impl OpKind {
    fn verb(self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Subtract => "subtract",
            OpKind::Multiply => "multiply",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl std::str::FromStr for OpKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(OpKind::Add),
            "subtract" | "sub" | "-" => Ok(OpKind::Subtract),
            "multiply" | "mul" | "*" => Ok(OpKind::Multiply),
            other => Err(format!("unknown operation '{other}'")),
        }
    }
}

/// Errors raised by the dynamic arithmetic entry points.
#[derive(Clone, Debug, PartialEq)]
pub enum OperandError {
    /// Right-hand operand is neither a vector nor a numeric scalar.
    InvalidOperand { op: OpKind, found: String },
}

impl fmt::Display for OperandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandError::InvalidOperand { op, found } => {
                write!(f, "cannot {} '{}' and 'Vector' objects", op, found)
            }
        }
    }
}

impl std::error::Error for OperandError {}

/// Right-hand operand: another vector or a scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Vector(Vector),
    Scalar(f64),
}

impl Operand {
    /// Parse `"x,y"`, `"x,y,z"` (vector) or a single number (scalar).
    ///
    /// Anything else is reported as an invalid operand for `op`, with a short
    /// description of what was found.
    pub fn parse(op: OpKind, raw: &str) -> Result<Operand, OperandError> {
        let text = raw.trim();
        if let Ok(s) = text.parse::<f64>() {
            return Ok(Operand::Scalar(s));
        }
        text.parse::<Vector>()
            .map(Operand::Vector)
            .map_err(|e| OperandError::InvalidOperand { op, found: e.found })
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Operand::Vector(v)
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<i32> for Operand {
    fn from(s: i32) -> Self {
        Operand::Scalar(f64::from(s))
    }
}

/// Result of an arithmetic operation: multiplying two vectors yields a scalar
/// (dot product), every other combination yields a vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector(Vector),
}

impl Value {
    pub fn as_scalar(self) -> Option<f64> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::Vector(_) => None,
        }
    }

    pub fn as_vector(self) -> Option<Vector> {
        match self {
            Value::Vector(v) => Some(v),
            Value::Scalar(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{:?}", s),
            Value::Vector(v) => write!(f, "{}", v),
        }
    }
}

/// Component-wise sum; a scalar is broadcast to both components.
pub fn add(a: Vector, b: impl Into<Operand>) -> Vector {
    match b.into() {
        Operand::Vector(v) => Vector::new(a.x + v.x, a.y + v.y),
        Operand::Scalar(s) => Vector::new(a.x + s, a.y + s),
    }
}

/// Component-wise difference `a - b`; a scalar is broadcast to both components.
pub fn subtract(a: Vector, b: impl Into<Operand>) -> Vector {
    match b.into() {
        Operand::Vector(v) => Vector::new(a.x - v.x, a.y - v.y),
        Operand::Scalar(s) => Vector::new(a.x - s, a.y - s),
    }
}

/// Dot product for a vector operand, component-wise scaling for a scalar.
pub fn multiply(a: Vector, b: impl Into<Operand>) -> Value {
    match b.into() {
        Operand::Vector(v) => Value::Scalar(a.dot(v)),
        Operand::Scalar(s) => Value::Vector(a.scale(s)),
    }
}

/// Dynamic entry point: parse `rhs` and apply `op` to `lhs`.
pub fn apply(op: OpKind, lhs: Vector, rhs: &str) -> Result<Value, OperandError> {
    let operand = Operand::parse(op, rhs)?;
    Ok(match op {
        OpKind::Add => Value::Vector(add(lhs, operand)),
        OpKind::Subtract => Value::Vector(subtract(lhs, operand)),
        OpKind::Multiply => multiply(lhs, operand),
    })
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        add(self, rhs)
    }
}

impl Add<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: f64) -> Vector {
        add(self, rhs)
    }
}

impl Add<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        add(rhs, self)
    }
}

impl Add<Operand> for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Operand) -> Vector {
        add(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        subtract(self, rhs)
    }
}

impl Sub<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: f64) -> Vector {
        subtract(self, rhs)
    }
}

/// `s - v == (s - v.x, s - v.y)`.
impl Sub<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self - rhs.x, self - rhs.y)
    }
}

impl Sub<Operand> for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Operand) -> Vector {
        subtract(self, rhs)
    }
}

/// Dot product.
impl Mul for Vector {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: Vector) -> f64 {
        self.dot(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        self.negate()
    }
}
