//! Drawing seam.
//!
//! Shapes never rasterize anything themselves: `Shape::draw` hands the
//! centre, the defining vector and a style to a `Surface` provided by the
//! graphics layer. Styles are passed through untouched.

use serde::{Deserialize, Serialize};

use crate::math::Vector;

/// Pen and brush for a shape. Colours are opaque to this crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GraphicsStyle {
    pub stroke: Option<String>,
    pub fill: Option<String>,
    pub line_width: f32,
}

impl Default for GraphicsStyle {
    fn default() -> Self {
        Self {
            stroke: Some("red".to_string()),
            fill: None,
            line_width: 1.0,
        }
    }
}

impl GraphicsStyle {
    pub fn new(stroke: Option<&str>, fill: Option<&str>) -> Self {
        Self {
            stroke: stroke.map(str::to_string),
            fill: fill.map(str::to_string),
            ..Self::default()
        }
    }
}

/// Something shapes can be drawn onto.
pub trait Surface {
    fn draw_point(&mut self, center: &Vector, style: &GraphicsStyle);

    /// `radii` are the per-axis semi-axes.
    fn draw_ellipse(&mut self, center: &Vector, radii: &Vector, style: &GraphicsStyle);

    fn draw_box(&mut self, center: &Vector, half_extents: &Vector, style: &GraphicsStyle);
}
