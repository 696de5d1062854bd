use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::render::GraphicsStyle;

/// Description of a shape as it appears in scenario files.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ShapeConfig {
    #[serde(default)]
    pub style: GraphicsStyle,

    #[serde(flatten)]
    pub shape_type: ShapeType,
}

/// Supported shape kinds and their defining data.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ShapeType {
    Point { dimension: usize },
    Ellipse { radius: RadiusSpec },
    Box { half_extents: Vec<f64> },
}

/// Ellipse radii: one value broadcast over every axis, or one per axis.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RadiusSpec {
    Uniform { radius: f64, dimension: usize },
    PerAxis(Vec<f64>),
}

impl RadiusSpec {
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            RadiusSpec::Uniform { radius, dimension } => vec![*radius; *dimension],
            RadiusSpec::PerAxis(r) => r.clone(),
        }
    }
}

impl Default for ShapeType {
    fn default() -> Self {
        ShapeType::Ellipse {
            radius: RadiusSpec::Uniform {
                radius: 1.0,
                dimension: 2,
            },
        }
    }
}

impl FromStr for ShapeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "point" => Ok(ShapeType::Point { dimension: 2 }),
            "ellipse" | "circle" => Ok(ShapeType::default()),
            "box" => Ok(ShapeType::Box {
                half_extents: vec![1.0, 1.0],
            }),
            _ => Err(format!(
                "Unknown shape type: {}. Expected one of: point, ellipse, circle, box",
                s
            )),
        }
    }
}

impl ShapeConfig {
    pub fn new(shape_type: ShapeType, style: GraphicsStyle) -> Self {
        Self { style, shape_type }
    }
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            style: GraphicsStyle::default(),
            shape_type: ShapeType::default(),
        }
    }
}

/// Load a shape description from a JSON file.
pub fn load_shape_config<P: AsRef<Path>>(path: P) -> Result<ShapeConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read shape config: {}", path.as_ref().display()))?;
    let config: ShapeConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse shape config: {}", path.as_ref().display()))?;
    Ok(config)
}
