//! Drawable shape values (points, arrows, segments, polygons).
//!
//! Purpose
//! - Hold the ordered vertices and the style a plotting front end needs. This
//!   crate does no rendering: a front end iterates [`Shape::vertices`] and
//!   forwards the coordinates (and `color`) to its own axes.
//! - Keep the few geometric operations shapes own: polygon translation and
//!   perimeter.
//!
//! Conventions
//! - Arrows and segments anchor at [`ORIGIN`] unless told otherwise.
//! - Shapes never mutate their vertices; `Polygon::translate` builds a new
//!   polygon through [`Polygon::with_vertices`], keeping the style.

use crate::conversions::distance;
use crate::vector::{add, Operand, Vector, ORIGIN};

/// Named colours understood by the usual plotting front ends.
pub mod colors {
    pub const BLUE: &str = "blue";
    pub const BLACK: &str = "black";
    pub const RED: &str = "red";
    pub const GREEN: &str = "green";
    pub const PURPLE: &str = "purple";
    pub const ORANGE: &str = "orange";
    pub const GRAY: &str = "gray";
}

/// Common accessors of every shape.
pub trait Shape {
    /// Vertices in drawing order.
    fn vertices(&self) -> Vec<Vector>;
    fn color(&self) -> &str;
}

/// All vertices of `shapes`, shape by shape, in drawing order.
pub fn collect_vertices(shapes: &[&dyn Shape]) -> Vec<Vector> {
    shapes.iter().flat_map(|s| s.vertices()).collect()
}

/// Scatter of loose points.
#[derive(Clone, Debug, PartialEq)]
pub struct Points {
    pub vertices: Vec<Vector>,
    pub color: String,
    /// Shade by depth when drawn on 3D axes.
    pub depthshade: bool,
}

impl Points {
    pub fn new(vertices: impl IntoIterator<Item = Vector>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            color: colors::BLUE.to_string(),
            depthshade: false,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_depthshade(mut self, depthshade: bool) -> Self {
        self.depthshade = depthshade;
        self
    }
}

impl Shape for Points {
    fn vertices(&self) -> Vec<Vector> {
        self.vertices.clone()
    }
    fn color(&self) -> &str {
        &self.color
    }
}

/// Arrow from `tail` to `tip`.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub tip: Vector,
    pub tail: Vector,
    pub color: String,
}

impl Arrow {
    /// Arrow from the origin to `tip`.
    pub fn new(tip: Vector) -> Self {
        Self::from_tail(tip, ORIGIN)
    }

    pub fn from_tail(tip: Vector, tail: Vector) -> Self {
        Self {
            tip,
            tail,
            color: colors::BLUE.to_string(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// `tip - tail`.
    pub fn displacement(&self) -> Vector {
        self.tip - self.tail
    }
}

impl Shape for Arrow {
    /// `[tip, tail]`.
    fn vertices(&self) -> Vec<Vector> {
        vec![self.tip, self.tail]
    }
    fn color(&self) -> &str {
        &self.color
    }
}

/// Straight segment from `start` to `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: Vector,
    pub end: Vector,
    pub color: String,
}

impl Segment {
    /// Segment from the origin to `end`.
    pub fn new(end: Vector) -> Self {
        Self::from_start(end, ORIGIN)
    }

    pub fn from_start(end: Vector, start: Vector) -> Self {
        Self {
            start,
            end,
            color: colors::BLUE.to_string(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }
}

impl Shape for Segment {
    /// `[start, end]`.
    fn vertices(&self) -> Vec<Vector> {
        vec![self.start, self.end]
    }
    fn color(&self) -> &str {
        &self.color
    }
}

/// Closed polygon; the last vertex connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vector>,
    pub color: String,
    /// Fill colour, `None` for an outline only.
    pub fill: Option<String>,
    pub alpha: f64,
}

impl Polygon {
    pub const DEFAULT_ALPHA: f64 = 0.4;

    pub fn new(vertices: impl IntoIterator<Item = Vector>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            color: colors::BLUE.to_string(),
            fill: None,
            alpha: Self::DEFAULT_ALPHA,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// New polygon with this polygon's style and the given vertices.
    pub fn with_vertices(&self, vertices: impl IntoIterator<Item = Vector>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            color: self.color.clone(),
            fill: self.fill.clone(),
            alpha: self.alpha,
        }
    }

    /// Shift every vertex by a vector, or by a scalar on both axes.
    pub fn translate(&self, by: impl Into<Operand>) -> Self {
        let by = by.into();
        self.with_vertices(self.vertices.iter().map(|&v| add(v, by)))
    }

    /// Consecutive vertex pairs, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (Vector, Vector)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Sum of edge lengths including the closing edge; 0 without vertices.
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| distance(a, b)).sum()
    }
}

impl Shape for Polygon {
    fn vertices(&self) -> Vec<Vector> {
        self.vertices.clone()
    }
    fn color(&self) -> &str {
        &self.color
    }
}

#[cfg(test)]
mod tests;
