#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_constants() {
    let config = StarfieldConfig::default();
    assert_eq!(config.narrow_count, 60);
    assert_eq!(config.wide_count, 120);
    assert_eq!(config.resize_debounce_ms, 250);
    assert_eq!(config.surface.canvas_id, "starry-canvas");
    assert!(config.validate().is_ok());
}

#[test]
fn star_count_depends_on_width_class() {
    let config = StarfieldConfig::default();
    assert_eq!(config.star_count(375.0), 60);
    assert_eq!(config.star_count(767.9), 60);
    assert_eq!(config.star_count(768.0), 120);
    assert_eq!(config.star_count(1920.0), 120);
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = StarfieldConfig::from_json(r#"{ "wide_count": 200, "surface": { "canvas_id": "sky" } }"#)
        .expect("config should parse");
    assert_eq!(config.wide_count, 200);
    assert_eq!(config.narrow_count, 60);
    assert_eq!(config.surface.canvas_id, "sky");
    assert_eq!(config.surface.backdrop_id, "starry-bg");
    assert_eq!(config.max_speed, 0.04);
}

#[test]
fn empty_object_is_default() {
    let config = StarfieldConfig::from_json("{}").expect("config should parse");
    assert_eq!(config, StarfieldConfig::default());
}

#[test]
fn malformed_json_is_parse_error() {
    let err = StarfieldConfig::from_json("{ wide_count: ").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn negative_speed_is_rejected() {
    let err = StarfieldConfig::from_json(r#"{ "max_speed": -1.0 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "max_speed", .. }));
}

#[test]
fn opacity_above_one_is_rejected() {
    let config = StarfieldConfig { alpha_min: 0.5, alpha_span: 0.6, ..StarfieldConfig::default() };
    let err = config.validate().expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "alpha_span", .. }));
}

#[test]
fn blank_color_is_rejected() {
    let config = StarfieldConfig { color: "  ".to_owned(), ..StarfieldConfig::default() };
    assert!(config.validate().is_err());
}

#[test]
fn non_finite_breakpoint_is_rejected() {
    let config = StarfieldConfig { narrow_breakpoint: f64::NAN, ..StarfieldConfig::default() };
    let err = config.validate().expect_err("should fail");
    assert_eq!(err.to_string(), "invalid `narrow_breakpoint`: must be finite");
}
