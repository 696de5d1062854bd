use crate::math::Vector;
use crate::render::GraphicsStyle;
use crate::shapes::aabb::BoxShape;
use crate::shapes::extent::Extent;

/// Axis-aligned ellipsoid given by its per-axis semi-axes.
///
/// The radius may follow a particle, which makes the ellipse pulse or
/// deform as time advances.
#[derive(Clone, Debug)]
pub struct Ellipse {
    radius: Extent,
    style: GraphicsStyle,
}

impl Ellipse {
    pub fn new(radius: impl Into<Extent>) -> Self {
        Self {
            radius: radius.into(),
            style: GraphicsStyle::default(),
        }
    }

    /// Circle, sphere, ... of `radius` in `dimension` axes.
    pub fn uniform(radius: f64, dimension: usize) -> Self {
        Self::new(Vector::filled(dimension, radius))
    }

    pub fn with_style(mut self, style: GraphicsStyle) -> Self {
        self.style = style;
        self
    }

    pub fn radius(&self) -> &Extent {
        &self.radius
    }

    pub fn style(&self) -> &GraphicsStyle {
        &self.style
    }

    pub fn dimension(&self) -> usize {
        self.radius.dimension()
    }

    pub fn contains_point(&self, center: &Vector, point: &Vector) -> bool {
        ellipsoid_contains(center, self.radius.current(), point)
    }

    /// Two ellipses overlap when the other centre lies inside the
    /// ellipse whose radii are the sums of both. Radii count by magnitude,
    /// as in containment.
    pub fn meets_ellipse(
        &self,
        position: &Vector,
        other: &Ellipse,
        other_position: &Vector,
    ) -> bool {
        let a = self.radius.current();
        let b = other.radius.current();
        match a.zip_map(|x, y| x.abs() + y.abs(), b) {
            Ok(combined) => ellipsoid_contains(position, &combined, other_position),
            Err(_) => false,
        }
    }

    pub fn meets_box(&self, position: &Vector, other: &BoxShape, other_position: &Vector) -> bool {
        ellipsoid_meets_box(
            position,
            self.radius.current(),
            other_position,
            other.half_extents().current(),
        )
    }

    pub fn bounding_box(&self) -> BoxShape {
        BoxShape::new(self.radius.abs_snapshot()).with_style(self.style.clone())
    }

    pub fn advance_time(&mut self, time: f64) {
        self.radius.advance_time(time);
    }
}

/// Strict ellipsoid membership. Mismatched dimensions are never contained.
pub(crate) fn ellipsoid_contains(center: &Vector, radius: &Vector, point: &Vector) -> bool {
    let dim = radius.dimension();
    if point.dimension() != dim || center.dimension() != dim {
        return false;
    }
    let mut sum = 0.0;
    for i in 0..dim {
        let offset = point[i] - center[i];
        if offset.abs() > radius[i].abs() {
            return false;
        }
        let t = offset / radius[i];
        sum += t * t;
    }
    sum < 1.0
}

/// Scale each axis by `1 / r_i`: the ellipsoid becomes the unit ball and
/// the box stays axis aligned, so the test reduces to the ball centre's
/// squared distance to the box.
pub(crate) fn ellipsoid_meets_box(
    center: &Vector,
    radius: &Vector,
    box_center: &Vector,
    half_extents: &Vector,
) -> bool {
    let dim = radius.dimension();
    if center.dimension() != dim
        || box_center.dimension() != dim
        || half_extents.dimension() != dim
    {
        return false;
    }
    let mut dist2 = 0.0;
    for i in 0..dim {
        let r = radius[i].abs();
        if r == 0.0 {
            return false;
        }
        let offset = (box_center[i] - center[i]).abs() / r;
        let gap = (offset - half_extents[i].abs() / r).max(0.0);
        dist2 += gap * gap;
    }
    dist2 < 1.0
}
