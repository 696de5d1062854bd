//! Collision shapes.
//!
//! A shape has no position of its own: every query takes the position(s)
//! the caller sampled for the current time. Shapes whose geometry varies
//! over time must be brought to that time with `advance_time` first.
//!
//! Intersection is resolved by double dispatch over the closed `Shape`
//! enum. Each kind tests itself against a point and against its own kind;
//! the remaining pairs are answered by one reciprocal hop to the side that
//! has a direct test.
pub mod aabb;
pub mod ellipse;
pub mod extent;
pub mod factory;
pub mod point;

use std::fmt;

use log::trace;

use crate::math::Vector;
use crate::render::{GraphicsStyle, Surface};

pub use aabb::BoxShape;
pub use ellipse::Ellipse;
pub use extent::Extent;
pub use point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Ellipse,
    Box,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Point => "point",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Box => "box",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    Point(Point),
    Ellipse(Ellipse),
    Box(BoxShape),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Box(_) => ShapeKind::Box,
        }
    }

    /// Number of spatial axes the shape lives in.
    pub fn dimension(&self) -> usize {
        match self {
            Shape::Point(p) => p.dimension(),
            Shape::Ellipse(e) => e.dimension(),
            Shape::Box(b) => b.dimension(),
        }
    }

    pub fn style(&self) -> &GraphicsStyle {
        match self {
            Shape::Point(p) => p.style(),
            Shape::Ellipse(e) => e.style(),
            Shape::Box(b) => b.style(),
        }
    }

    /// Smallest axis-aligned box around the shape at the local origin, for
    /// the current time.
    pub fn bounding_box(&self) -> BoxShape {
        match self {
            Shape::Point(p) => {
                BoxShape::new(Vector::zeros(p.dimension())).with_style(p.style().clone())
            }
            Shape::Ellipse(e) => e.bounding_box(),
            Shape::Box(b) => b.bounding_box(),
        }
    }

    /// Draw at `position`. An explicit `style` overrides the shape's own.
    pub fn draw<S>(&self, position: &Vector, surface: &mut S, style: Option<&GraphicsStyle>)
    where
        S: Surface + ?Sized,
    {
        let style = style.unwrap_or_else(|| self.style());
        match self {
            Shape::Point(_) => surface.draw_point(position, style),
            Shape::Ellipse(e) => surface.draw_ellipse(position, e.radius().current(), style),
            Shape::Box(b) => surface.draw_box(position, b.half_extents().current(), style),
        }
    }

    /// Whether `query` lies inside the shape centred at `position`.
    ///
    /// Never fails: a query from a space of another dimension is simply not
    /// contained.
    pub fn contains_point(&self, position: &Vector, query: &Vector) -> bool {
        match self {
            Shape::Point(p) => p.contains_point(position, query),
            Shape::Ellipse(e) => e.contains_point(position, query),
            Shape::Box(b) => b.contains_point(position, query),
        }
    }

    /// Whether `self` at `position` overlaps `other` at `other_position`.
    pub fn meets(&self, position: &Vector, other: &Shape, other_position: &Vector) -> bool {
        match (self, other) {
            (_, Shape::Point(_)) => self.contains_point(position, other_position),
            (Shape::Ellipse(a), Shape::Ellipse(b)) => a.meets_ellipse(position, b, other_position),
            (Shape::Box(a), Shape::Box(b)) => a.meets_box(position, b, other_position),
            (Shape::Ellipse(e), Shape::Box(b)) => e.meets_box(position, b, other_position),
            // Every arm below hops to a pair matched directly above, so the
            // recursion is at most one level deep.
            (Shape::Point(_), _) | (Shape::Box(_), Shape::Ellipse(_)) => {
                trace!("{} meets {}: asking the {} side", self.kind(), other.kind(), other.kind());
                other.meets(other_position, self, position)
            }
        }
    }

    /// Bring time-varying geometry to `time`.
    pub fn advance_time(&mut self, time: f64) {
        match self {
            Shape::Point(_) => {}
            Shape::Ellipse(e) => e.advance_time(time),
            Shape::Box(b) => b.advance_time(time),
        }
    }
}

impl From<Point> for Shape {
    fn from(p: Point) -> Self {
        Shape::Point(p)
    }
}

impl From<Ellipse> for Shape {
    fn from(e: Ellipse) -> Self {
        Shape::Ellipse(e)
    }
}

impl From<BoxShape> for Shape {
    fn from(b: BoxShape) -> Self {
        Shape::Box(b)
    }
}
