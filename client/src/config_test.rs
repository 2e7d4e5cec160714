use super::*;

#[test]
fn defaults_match_stock_site_behavior() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_storage_key, "cbe-theme");
    assert_eq!(config.default_page, "index.html");
    assert_eq!(
        config.fragments,
        vec![
            FragmentSpec::new("header-placeholder", "components/header.html"),
            FragmentSpec::new("footer-placeholder", "components/footer.html"),
        ]
    );
    assert_eq!(config.min_message_len, 10);
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = SiteConfig::from_json(r#"{ "counterDurationMs": 2000, "logLevel": "debug" }"#).unwrap();
    assert!((config.counter_duration_ms - 2000.0).abs() < f64::EPSILON);
    assert_eq!(config.log_level(), log::Level::Debug);
    assert_eq!(config.theme_storage_key, "cbe-theme");
    assert_eq!(config.fragments.len(), 2);
}

#[test]
fn fragments_can_be_overridden() {
    let config = SiteConfig::from_json(
        r#"{ "fragments": [{ "containerId": "top", "url": "partials/top.html" }] }"#,
    )
    .unwrap();
    assert_eq!(config.fragments, vec![FragmentSpec::new("top", "partials/top.html")]);
}

#[test]
fn malformed_or_missing_json_falls_back_to_defaults() {
    assert_eq!(SiteConfig::from_json_or_default(None), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(Some("   ")), SiteConfig::default());
    assert_eq!(SiteConfig::from_json_or_default(Some("{ not json")), SiteConfig::default());
}

#[test]
fn unknown_log_level_means_info() {
    let config = SiteConfig { log_level: "chatty".to_owned(), ..SiteConfig::default() };
    assert_eq!(config.log_level(), log::Level::Info);
}

#[test]
fn page_theme_bootstrap_reads_the_default_storage_key() {
    let key = SiteConfig::default().theme_storage_key;
    let lookup = format!("localStorage.getItem(\"{key}\")");
    for page in [
        include_str!("../../site/index.html"),
        include_str!("../../site/explore.html"),
        include_str!("../../site/contact.html"),
    ] {
        assert!(page.contains(&lookup), "bootstrap must read `{key}`");
    }
}
