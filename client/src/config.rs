//! Page-level configuration.
//!
//! Pages may embed overrides as JSON in
//! `<script type="application/json" id="site-config">`. Every field has a
//! default, so a page without the element (or with a partial object) gets
//! the stock behavior. Malformed JSON is logged and ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the optional inline JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// One header/footer style fragment: fetched from `url`, spliced into `#container_id`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FragmentSpec {
    pub container_id: String,
    pub url: String,
}

impl FragmentSpec {
    pub fn new(container_id: &str, url: &str) -> Self {
        Self { container_id: container_id.to_owned(), url: url.to_owned() }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub default_page: String,
    pub fragments: Vec<FragmentSpec>,
    pub reveal_threshold: f64,
    pub counter_threshold: f64,
    pub counter_duration_ms: f64,
    pub counter_emphasis_ms: u32,
    pub header_scroll_offset: f64,
    pub scroll_top_offset: f64,
    pub theme_flash_ms: u32,
    pub filter_hide_ms: u32,
    pub submit_delay_ms: u32,
    pub toast_ms: u32,
    pub min_message_len: usize,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "cbe-theme".to_owned(),
            default_page: "index.html".to_owned(),
            fragments: vec![
                FragmentSpec::new("header-placeholder", "components/header.html"),
                FragmentSpec::new("footer-placeholder", "components/footer.html"),
            ],
            reveal_threshold: 0.1,
            counter_threshold: 0.5,
            counter_duration_ms: 1500.0,
            counter_emphasis_ms: 600,
            header_scroll_offset: 50.0,
            scroll_top_offset: 500.0,
            theme_flash_ms: 300,
            filter_hide_ms: 350,
            submit_delay_ms: 1500,
            toast_ms: 5000,
            min_message_len: 10,
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parse `raw` when present; fall back to defaults on absence or error.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }

    /// Configured console log level; unknown names mean `info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Read the inline config element from `document`, if any.
    #[cfg(feature = "browser")]
    pub fn load(document: &web_sys::Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::from_json_or_default(raw.as_deref())
    }
}
