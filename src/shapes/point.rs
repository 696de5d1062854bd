use crate::math::Vector;
use crate::render::GraphicsStyle;

/// A degenerate shape occupying exactly its position.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    dimension: usize,
    style: GraphicsStyle,
}

impl Point {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            style: GraphicsStyle::default(),
        }
    }

    pub fn with_style(mut self, style: GraphicsStyle) -> Self {
        self.style = style;
        self
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn style(&self) -> &GraphicsStyle {
        &self.style
    }

    /// A point contains only its own position.
    pub fn contains_point(&self, position: &Vector, query: &Vector) -> bool {
        position.dimension() == self.dimension
            && query.dimension() == self.dimension
            && position == query
    }
}
