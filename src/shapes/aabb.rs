use crate::math::Vector;
use crate::render::GraphicsStyle;
use crate::shapes::extent::Extent;

/// Axis-aligned box given by its half extents. The box is open: points on
/// a face are outside, like points on an ellipse's boundary.
#[derive(Clone, Debug)]
pub struct BoxShape {
    half_extents: Extent,
    style: GraphicsStyle,
}

impl BoxShape {
    pub fn new(half_extents: impl Into<Extent>) -> Self {
        Self {
            half_extents: half_extents.into(),
            style: GraphicsStyle::default(),
        }
    }

    pub fn with_style(mut self, style: GraphicsStyle) -> Self {
        self.style = style;
        self
    }

    pub fn half_extents(&self) -> &Extent {
        &self.half_extents
    }

    pub fn style(&self) -> &GraphicsStyle {
        &self.style
    }

    pub fn dimension(&self) -> usize {
        self.half_extents.dimension()
    }

    pub fn contains_point(&self, center: &Vector, point: &Vector) -> bool {
        box_contains(center, self.half_extents.current(), point)
    }

    pub fn meets_box(&self, position: &Vector, other: &BoxShape, other_position: &Vector) -> bool {
        let a = self.half_extents.current();
        let b = other.half_extents.current();
        match a.zip_map(|x, y| x.abs() + y.abs(), b) {
            Ok(combined) => box_contains(position, &combined, other_position),
            Err(_) => false,
        }
    }

    pub fn bounding_box(&self) -> BoxShape {
        BoxShape::new(self.half_extents.abs_snapshot()).with_style(self.style.clone())
    }

    pub fn advance_time(&mut self, time: f64) {
        self.half_extents.advance_time(time);
    }
}

pub(crate) fn box_contains(center: &Vector, half_extents: &Vector, point: &Vector) -> bool {
    let dim = half_extents.dimension();
    if point.dimension() != dim || center.dimension() != dim {
        return false;
    }
    (0..dim).all(|i| (point[i] - center[i]).abs() < half_extents[i].abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_are_outside() {
        let b = BoxShape::new(Vector::from([1.0, 1.0]));
        assert!(b.contains_point(&Vector::zeros(2), &Vector::from([0.99, -0.99])));
        assert!(!b.contains_point(&Vector::zeros(2), &Vector::from([1.0, 0.0])));
    }
}
