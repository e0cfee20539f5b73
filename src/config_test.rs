use super::*;

#[test]
fn defaults_describe_the_panel_markup() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.toggle_id, "theme-toggle-btn");
    assert_eq!(config.fallback_theme, Theme::Light);
    assert_eq!(config.starfield.surface.backdrop_id, "starry-bg");
    assert_eq!(config.starfield.surface.theme_attribute, "data-bs-theme");
    assert!(config.validate().is_ok());
}

#[test]
fn json_overrides_nested_fields() {
    let config = PageConfig::from_json(
        r#"{
            "storage_key": "panel-theme",
            "fallback_theme": "dark",
            "starfield": { "narrow_count": 10, "surface": { "dark_class": "night" } }
        }"#,
    )
    .expect("config should parse");
    assert_eq!(config.storage_key, "panel-theme");
    assert_eq!(config.fallback_theme, Theme::Dark);
    assert_eq!(config.starfield.narrow_count, 10);
    assert_eq!(config.starfield.wide_count, 120);
    assert_eq!(config.starfield.surface.dark_class, "night");
    assert_eq!(config.toggle_id, "theme-toggle-btn");
}

#[test]
fn unknown_theme_name_is_rejected() {
    let err = PageConfig::from_json(r#"{ "fallback_theme": "sepia" }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn blank_storage_key_is_rejected() {
    let err = PageConfig::from_json(r#"{ "storage_key": " " }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "storage_key", .. }));
}

#[test]
fn invalid_starfield_section_is_rejected() {
    let err = PageConfig::from_json(r#"{ "starfield": { "alpha_min": 2.0 } }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Starfield(_)));
}
