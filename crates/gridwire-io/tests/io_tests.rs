//! Integration tests for gridwire-io.

use gridwire_io::contract::AnimationConfig;
use gridwire_io::validator::{validate_config, validate_parameters};
use gridwire_mesh::{CanvasParameters, MeshType};
use gridwire_types::GridwireError;

#[test]
fn default_config_is_valid() {
    assert!(validate_config(&AnimationConfig::default()).is_ok());
}

#[test]
fn toml_round_trip() {
    let config = AnimationConfig {
        grid: CanvasParameters::square(32, 48).with_mesh_type(MeshType::KleinSquareWireframe),
        surface: "monkey_saddle".into(),
        rotation_angle: 0.02,
        frames: 30,
    };
    let text = config.to_toml_string().unwrap();
    let recovered = AnimationConfig::from_toml_str(&text).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn partial_toml_uses_defaults() {
    let text = r#"
        surface = "hyperbolic_paraboloid"

        [grid]
        nx_pts = 3
        ny_pts = 3
        mesh_type = "toroidal_triangle_wireframe"
    "#;
    let config = AnimationConfig::from_toml_str(text).unwrap();
    assert_eq!(config.grid.nx_pts, 3);
    assert_eq!(config.grid.width, 2.0);
    assert_eq!(config.grid.mesh_type, MeshType::ToroidalTriangleWireframe);
    assert_eq!(config.frames, 120);
}

#[test]
fn json_config_parses() {
    let json = r#"{"grid": {"nx_pts": 10, "ny_pts": 12}, "rotation_angle": 0.005}"#;
    let config = AnimationConfig::from_json_str(json).unwrap();
    assert_eq!(config.grid.ny_pts, 12);
    assert_eq!(config.surface, "elliptic_paraboloid");
}

#[test]
fn unknown_topology_name_fails_to_parse() {
    let text = "[grid]\nmesh_type = \"hexagonal\"\n";
    assert!(matches!(
        AnimationConfig::from_toml_str(text),
        Err(GridwireError::Serialization(_))
    ));
}

#[test]
fn rejects_oversized_grid() {
    let params = CanvasParameters::square(1024, 8);
    assert!(matches!(
        validate_parameters(&params),
        Err(GridwireError::InvalidDimensions { nx: 1024, .. })
    ));
}

#[test]
fn rejects_degenerate_grid() {
    let params = CanvasParameters::square(1, 8);
    assert!(matches!(
        validate_parameters(&params),
        Err(GridwireError::InvalidGrid(_))
    ));
}

#[test]
fn rejects_non_finite_extent() {
    let params = CanvasParameters {
        width: f32::NAN,
        ..CanvasParameters::default()
    };
    assert!(validate_parameters(&params).is_err());
}

#[test]
fn rejects_large_rotation() {
    let config = AnimationConfig {
        rotation_angle: 0.5,
        ..AnimationConfig::default()
    };
    assert!(matches!(
        validate_config(&config),
        Err(GridwireError::InvalidConfig(_))
    ));
}

#[test]
fn rejects_zero_frames() {
    let config = AnimationConfig {
        frames: 0,
        ..AnimationConfig::default()
    };
    assert!(validate_config(&config).is_err());
}

#[test]
fn load_reports_missing_file() {
    let err = AnimationConfig::load("animation.yaml").unwrap_err();
    assert!(matches!(err, GridwireError::Io(_)));
}
