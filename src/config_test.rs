#![allow(clippy::float_cmp)]

use super::*;

fn approx_reduced(cfg: &DemoConfig, expected: f64) -> bool {
    (cfg.base_speed / cfg.slowdown - expected).abs() < 1e-12
}

// =============================================================
// Presets
// =============================================================

#[test]
fn default_is_logo_preset() {
    let cfg = DemoConfig::default();
    assert_eq!(cfg.shape, ShapeKind::Logo);
    assert_eq!(cfg.radius, 200.0);
    assert_eq!(cfg.base_speed, 0.0015);
    assert_eq!(cfg.slowdown, 10.0);
    assert!(cfg.pinch_resize);
    assert_eq!(cfg.border_margin, Some(3.0));
    assert_eq!(cfg.sample_points, 0);
}

#[test]
fn square_presets_are_single_finger() {
    for kind in [ShapeKind::Square, ShapeKind::Diamond] {
        let cfg = DemoConfig::for_shape(kind);
        assert_eq!(cfg.shape, kind);
        assert_eq!(cfg.radius, 100.0);
        assert_eq!(cfg.base_speed, 0.001);
        assert_eq!(cfg.slowdown, 5.0);
        assert!(!cfg.pinch_resize);
    }
}

#[test]
fn presets_validate() {
    for kind in [ShapeKind::Logo, ShapeKind::Square, ShapeKind::Diamond] {
        assert!(DemoConfig::for_shape(kind).validate().is_ok());
    }
}

// =============================================================
// JSON
// =============================================================

#[test]
fn json_empty_object_is_default() {
    let cfg = DemoConfig::from_json("{}").unwrap();
    assert_eq!(cfg, DemoConfig::default());
}

#[test]
fn json_partial_overrides() {
    let cfg = DemoConfig::from_json(r#"{ "shape": "diamond", "sample_points": 10000 }"#).unwrap();
    assert_eq!(cfg.shape, ShapeKind::Diamond);
    assert_eq!(cfg.sample_points, 10000);
    // Fields not given come from the diamond preset.
    assert_eq!(cfg.radius, 100.0);
    assert_eq!(cfg.slowdown, 5.0);
    assert!(cfg.quick_reject);
}

#[test]
fn json_shape_alone_is_that_preset() {
    for kind in [ShapeKind::Logo, ShapeKind::Square, ShapeKind::Diamond] {
        let json = format!(r#"{{ "shape": {} }}"#, serde_json::to_string(&kind).unwrap());
        assert_eq!(DemoConfig::from_json(&json).unwrap(), DemoConfig::for_shape(kind));
    }
}

#[test]
fn json_square_matches_query_square() {
    let from_json = DemoConfig::from_json(r#"{ "shape": "square" }"#).unwrap();
    let mut from_query = DemoConfig::default();
    from_query.apply_query("?shape=square").unwrap();
    assert_eq!(from_json, from_query);
    assert!(approx_reduced(&from_json, 0.0002));
}

#[test]
fn json_field_overrides_preset() {
    let cfg = DemoConfig::from_json(r#"{ "shape": "square", "radius": 60, "pinch_resize": true }"#).unwrap();
    assert_eq!(cfg.radius, 60.0);
    assert!(cfg.pinch_resize);
    assert_eq!(cfg.base_speed, 0.001);
}

#[test]
fn json_without_border_keeps_preset_border() {
    let cfg = DemoConfig::from_json(r#"{ "radius": 150 }"#).unwrap();
    assert_eq!(cfg.border_margin, Some(3.0));
}

#[test]
fn json_null_border_disables_it() {
    let cfg = DemoConfig::from_json(r#"{ "border_margin": null }"#).unwrap();
    assert_eq!(cfg.border_margin, None);
}

#[test]
fn json_malformed_is_error() {
    let err = DemoConfig::from_json("{ radius: ").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn json_unknown_shape_is_error() {
    assert!(DemoConfig::from_json(r#"{ "shape": "hexagon" }"#).is_err());
}

#[test]
fn json_serializes_shape_lowercase() {
    let json = serde_json::to_value(DemoConfig::for_shape(ShapeKind::Square)).unwrap();
    assert_eq!(json["shape"], "square");
}

// =============================================================
// Query
// =============================================================

#[test]
fn empty_query_changes_nothing() {
    let mut cfg = DemoConfig::default();
    cfg.apply_query("").unwrap();
    assert_eq!(cfg, DemoConfig::default());
    cfg.apply_query("?").unwrap();
    assert_eq!(cfg, DemoConfig::default());
}

#[test]
fn query_shape_switches_preset() {
    let mut cfg = DemoConfig::default();
    cfg.apply_query("?shape=square").unwrap();
    assert_eq!(cfg, DemoConfig::for_shape(ShapeKind::Square));
}

#[test]
fn query_shape_applies_before_other_keys() {
    let mut cfg = DemoConfig::default();
    cfg.apply_query("radius=150&shape=diamond&points=500").unwrap();
    assert_eq!(cfg.shape, ShapeKind::Diamond);
    assert_eq!(cfg.radius, 150.0);
    assert_eq!(cfg.sample_points, 500);
    assert_eq!(cfg.slowdown, 5.0);
}

#[test]
fn query_numeric_overrides() {
    let mut cfg = DemoConfig::default();
    cfg.apply_query("speed=0.003&slowdown=4&max_dt=50&seed=9").unwrap();
    assert_eq!(cfg.base_speed, 0.003);
    assert_eq!(cfg.slowdown, 4.0);
    assert_eq!(cfg.max_frame_dt_ms, 50.0);
    assert_eq!(cfg.seed, 9);
}

#[test]
fn query_flags() {
    let mut cfg = DemoConfig::default();
    cfg.apply_query("pinch=0&quick_reject").unwrap();
    assert!(!cfg.pinch_resize);
    assert!(cfg.quick_reject);
}

#[test]
fn query_border_none() {
    let mut cfg = DemoConfig::default();
    cfg.apply_query("border=none").unwrap();
    assert_eq!(cfg.border_margin, None);
    cfg.apply_query("border=8").unwrap();
    assert_eq!(cfg.border_margin, Some(8.0));
}

#[test]
fn query_unknown_keys_are_skipped() {
    let mut cfg = DemoConfig::default();
    cfg.apply_query("utm_source=mail&radius=120").unwrap();
    assert_eq!(cfg.radius, 120.0);
}

#[test]
fn query_bad_number_is_error() {
    let mut cfg = DemoConfig::default();
    let err = cfg.apply_query("radius=big").unwrap_err();
    match err {
        ConfigError::Query { key, value } => {
            assert_eq!(key, "radius");
            assert_eq!(value, "big");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn query_bad_shape_is_error() {
    let mut cfg = DemoConfig::default();
    assert!(matches!(cfg.apply_query("shape=circle"), Err(ConfigError::Query { .. })));
}

#[test]
fn query_bad_flag_is_error() {
    let mut cfg = DemoConfig::default();
    assert!(cfg.apply_query("pinch=maybe").is_err());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn zero_radius_is_invalid() {
    let cfg = DemoConfig { radius: 0.0, ..DemoConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid { field: "radius", .. })));
}

#[test]
fn zero_slowdown_is_invalid() {
    let cfg = DemoConfig { slowdown: 0.0, ..DemoConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid { field: "slowdown", .. })));
}

#[test]
fn nan_speed_is_invalid() {
    let cfg = DemoConfig { base_speed: f64::NAN, ..DemoConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid { field: "base_speed", .. })));
}

#[test]
fn negative_speed_is_allowed() {
    let cfg = DemoConfig { base_speed: -0.001, ..DemoConfig::default() };
    assert!(cfg.validate().is_ok());
}

#[test]
fn negative_border_is_invalid() {
    let cfg = DemoConfig { border_margin: Some(-1.0), ..DemoConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn sample_points_are_capped() {
    let at_cap = DemoConfig { sample_points: MAX_SAMPLE_POINTS, ..DemoConfig::default() };
    assert!(at_cap.validate().is_ok());
    let mut cfg = DemoConfig::default();
    cfg.apply_query("points=1000000000000").unwrap();
    assert!(matches!(cfg.validate(), Err(ConfigError::Invalid { field: "sample_points", .. })));
}

#[test]
fn invalid_error_message_names_field() {
    let cfg = DemoConfig { max_frame_dt_ms: 0.0, ..DemoConfig::default() };
    let msg = cfg.validate().unwrap_err().to_string();
    assert!(msg.contains("max_frame_dt_ms"));
}
