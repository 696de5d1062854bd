use anyhow::{bail, Result};
use log::{debug, warn};

use crate::config::{ShapeConfig, ShapeType};
use crate::math::Vector;
use crate::shapes::{BoxShape, Ellipse, Point, Shape};

/// Build a shape from a `ShapeConfig`, bound to the configured style.
pub fn build_shape(config: &ShapeConfig) -> Result<Shape> {
    let style = config.style.clone();
    let shape: Shape = match &config.shape_type {
        ShapeType::Point { dimension } => {
            if *dimension == 0 {
                bail!("point shape needs at least one dimension");
            }
            Point::new(*dimension).with_style(style).into()
        }
        ShapeType::Ellipse { radius } => {
            let radius = Vector::from(radius.to_vec());
            check_defining_vector("ellipse radius", &radius)?;
            Ellipse::new(radius).with_style(style).into()
        }
        ShapeType::Box { half_extents } => {
            let half_extents = Vector::from(half_extents.clone());
            check_defining_vector("box half extents", &half_extents)?;
            BoxShape::new(half_extents).with_style(style).into()
        }
    };
    debug!("built {} shape in {} dimensions", shape.kind(), shape.dimension());
    Ok(shape)
}

fn check_defining_vector(what: &str, v: &Vector) -> Result<()> {
    if v.dimension() == 0 {
        bail!("{} must have at least one component", what);
    }
    if let Some(bad) = v.iter().find(|x| !x.is_finite()) {
        bail!("{} has a non-finite component: {}", what, bad);
    }
    if v.iter().any(|&x| x == 0.0) {
        warn!("{} {} has a zero component; the shape is degenerate", what, v);
    }
    Ok(())
}
