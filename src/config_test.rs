use super::*;

#[test]
fn defaults_match_landing_page_contract() {
    let config = PageConfig::default();
    assert_eq!(config.contact_endpoint, "/api/contact");
    assert_eq!(config.theme_storage_key, "theme");
    assert!((config.scroll_lookahead - 200.0).abs() < f64::EPSILON);
    assert_eq!(config.success_hide_ms, 5_000);
    assert_eq!(config.toggle_spin_ms, 300);
    assert_eq!(config.ids.modal, "ai-modal");
    assert_eq!(config.ids.modal_open, vec!["open-ai-link", "open-ai-2", "open-ai"]);
    assert_eq!(config.selectors.sections, ".content-section, .hero-section");
}

#[test]
fn defaults_pass_validation() {
    assert!(PageConfig::default().validate().is_ok());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = PageConfig::from_json(r#"{"contact_endpoint":"/contact","ids":{"modal":"dialog"}}"#)
        .expect("partial override parses");
    assert_eq!(config.contact_endpoint, "/contact");
    assert_eq!(config.ids.modal, "dialog");
    assert_eq!(config.ids.modal_close, "close-ai");
    assert_eq!(config.theme_storage_key, "theme");
}

#[test]
fn from_json_empty_object_is_default() {
    let config = PageConfig::from_json("{}").expect("empty object parses");
    assert_eq!(config, PageConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = PageConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_empty_endpoint() {
    let err = PageConfig::from_json(r#"{"contact_endpoint":"  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "contact_endpoint", .. }));
}

#[test]
fn validate_rejects_negative_lookahead() {
    let config = PageConfig { scroll_lookahead: -1.0, ..PageConfig::default() };
    let err = config.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid page config: scroll_lookahead must be a finite non-negative number"
    );
}

#[test]
fn validate_rejects_empty_storage_key() {
    let config = PageConfig { theme_storage_key: String::new(), ..PageConfig::default() };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid { field: "theme_storage_key", .. })
    ));
}
