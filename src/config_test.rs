use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.header.scrolled_threshold, 50.0);
    assert_eq!(cfg.messages.ttl_ms, 5000);
    assert_eq!(cfg.theme.storage_key, "theme");
    assert_eq!(cfg.transport, TransportConfig::Simulated);
}

#[test]
fn default_reveal_set_matches_markup() {
    let cfg = RevealConfig::default();
    assert_eq!(cfg.selectors.len(), 6);
    assert!(cfg.selectors.iter().any(|s| s == ".feature-card"));
    assert_eq!(cfg.threshold, 0.1);
    assert_eq!(cfg.root_margin, "0px 0px -50px 0px");
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = SiteConfig::from_json(r#"{ "header": { "scrolled_threshold": 80 } }"#).unwrap();
    assert_eq!(cfg.header.scrolled_threshold, 80.0);
    assert_eq!(cfg.header.selector, ".header");
    assert_eq!(cfg.newsletter, NewsletterConfig::default());
}

#[test]
fn http_transport_parses_endpoint() {
    let cfg = SiteConfig::from_json(r#"{ "transport": { "mode": "http", "endpoint": "/api/forms" } }"#).unwrap();
    assert_eq!(cfg.transport, TransportConfig::Http { endpoint: "/api/forms".to_owned() });
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unknown_transport_mode_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "transport": { "mode": "carrier-pigeon" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn out_of_range_threshold_is_invalid() {
    let err = SiteConfig::from_json(r#"{ "reveal": { "threshold": 1.5 } }"#).unwrap_err();
    assert!(err.to_string().contains("reveal.threshold"));
}

#[test]
fn blank_http_endpoint_is_invalid() {
    let err = SiteConfig::from_json(r#"{ "transport": { "mode": "http", "endpoint": " " } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
