//! Integration tests for shape configs, JSON loading and the shape factory.

use std::io::Write;
use std::str::FromStr;

use ndcollide::config::{load_shape_config, RadiusSpec, ShapeConfig, ShapeType};
use ndcollide::render::GraphicsStyle;
use ndcollide::shapes::factory::build_shape;
use ndcollide::{Shape, ShapeKind, Vector};

// ---------------------------------------------------------------------------
// ShapeConfig defaults & serialization
// ---------------------------------------------------------------------------

#[test]
fn default_config_is_a_unit_circle() {
    let cfg = ShapeConfig::default();
    let shape = build_shape(&cfg).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Ellipse);
    assert_eq!(shape.dimension(), 2);
    assert_eq!(cfg.style.stroke.as_deref(), Some("red"));
}

#[test]
fn shape_type_from_str() {
    assert_eq!(ShapeType::from_str("Point").unwrap(), ShapeType::Point { dimension: 2 });
    assert_eq!(ShapeType::from_str("circle").unwrap(), ShapeType::default());
    assert!(matches!(ShapeType::from_str("BOX").unwrap(), ShapeType::Box { .. }));
    let err = ShapeType::from_str("triangle").unwrap_err();
    assert!(err.contains("triangle"));
}

#[test]
fn config_json_round_trip() {
    let cfg = ShapeConfig::new(
        ShapeType::Box {
            half_extents: vec![1.0, 2.0, 3.0],
        },
        GraphicsStyle::new(Some("white"), Some("grey")),
    );
    let json = serde_json::to_string(&cfg).unwrap();
    let back: ShapeConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn radius_accepts_uniform_or_per_axis() {
    let uniform: ShapeConfig = serde_json::from_str(
        r#"{"Ellipse": {"radius": {"radius": 2.0, "dimension": 3}}}"#,
    )
    .unwrap();
    assert_eq!(
        uniform.shape_type,
        ShapeType::Ellipse {
            radius: RadiusSpec::Uniform {
                radius: 2.0,
                dimension: 3
            }
        }
    );
    assert_eq!(uniform.style, GraphicsStyle::default());

    let per_axis: ShapeConfig = serde_json::from_str(
        r#"{"style": {"stroke": null, "fill": "blue"}, "Ellipse": {"radius": [2.0, 3.0]}}"#,
    )
    .unwrap();
    assert_eq!(per_axis.style.fill.as_deref(), Some("blue"));
    assert_eq!(per_axis.style.stroke, None);
    assert_eq!(per_axis.style.line_width, 1.0);

    match build_shape(&per_axis).unwrap() {
        Shape::Ellipse(e) => assert_eq!(e.radius().current(), &Vector::from([2.0, 3.0])),
        other => panic!("expected an ellipse, got {}", other.kind()),
    }
}

// ---------------------------------------------------------------------------
// Loading from disk
// ---------------------------------------------------------------------------

#[test]
fn load_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bullet.json");
    let mut f = std::fs::File::create(&path).unwrap();
    write!(f, r#"{{"Point": {{"dimension": 3}}}}"#).unwrap();
    drop(f);

    let cfg = load_shape_config(&path).unwrap();
    let shape = build_shape(&cfg).unwrap();
    assert_eq!(shape.kind(), ShapeKind::Point);
    assert_eq!(shape.dimension(), 3);
}

#[test]
fn load_missing_file_errors() {
    let err = load_shape_config("/nonexistent/path/shape.json").unwrap_err();
    assert!(err.to_string().contains("Failed to read shape config"));
}

#[test]
fn load_malformed_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_shape_config(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse shape config"));
}

// ---------------------------------------------------------------------------
// Factory output behaves like hand-built shapes
// ---------------------------------------------------------------------------

#[test]
fn factory_box_meets_factory_ellipse() {
    let b = build_shape(&ShapeConfig::new(
        ShapeType::Box {
            half_extents: vec![1.0, 1.0],
        },
        GraphicsStyle::default(),
    ))
    .unwrap();
    let e = build_shape(&ShapeConfig::default()).unwrap();
    let origin = Vector::zeros(2);
    assert!(b.meets(&origin, &e, &Vector::from([1.9, 0.0])));
    assert!(!b.meets(&origin, &e, &Vector::from([2.1, 0.0])));
}

#[test]
fn zero_radius_is_accepted_but_degenerate() {
    let cfg = ShapeConfig::new(
        ShapeType::Ellipse {
            radius: RadiusSpec::PerAxis(vec![0.0, 1.0]),
        },
        GraphicsStyle::default(),
    );
    let shape = build_shape(&cfg).unwrap();
    assert!(!shape.contains_point(&Vector::zeros(2), &Vector::from([0.0, 0.5])));
}
