//! Site behavior configuration.
//!
//! Every field has a default matching the stock page markup, so an absent or
//! partial config block is fine. In the browser the config is read from an
//! optional `<script type="application/json" id="site-config">` element.
//!
//! ```json
//! {
//!   "header": { "scrolled_threshold": 80 },
//!   "transport": { "mode": "http", "endpoint": "/api/forms" }
//! }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the element the browser config is read from.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
    pub header: HeaderConfig,
    pub messages: MessageConfig,
    pub newsletter: NewsletterConfig,
    pub reservation: ReservationConfig,
    pub reveal: RevealConfig,
    pub transport: TransportConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: "theme".to_owned() }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle_selector: String,
    pub panel_selector: String,
    pub link_selector: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".mobile-menu-toggle".to_owned(),
            panel_selector: ".mobile-nav".to_owned(),
            link_selector: ".mobile-nav a".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct HeaderConfig {
    pub selector: String,
    /// Offsets strictly above this mark the header as scrolled.
    pub scrolled_threshold: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { selector: ".header".to_owned(), scrolled_threshold: 50.0 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessageConfig {
    /// How long an inline form message stays up.
    pub ttl_ms: u32,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { ttl_ms: 5000 }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewsletterConfig {
    pub form_selector: String,
    pub input_selector: String,
    pub button_selector: String,
    pub pending_label: String,
    pub simulated_delay_ms: u32,
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            form_selector: ".newsletter-form".to_owned(),
            input_selector: "input[type=\"email\"]".to_owned(),
            button_selector: "button[type=\"submit\"]".to_owned(),
            pending_label: "Subscribing...".to_owned(),
            simulated_delay_ms: 1000,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReservationConfig {
    pub form_id: String,
    pub success_id: String,
    pub button_selector: String,
    pub pending_label: String,
    pub simulated_delay_ms: u32,
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            form_id: "reservation-form".to_owned(),
            success_id: "reservation-success".to_owned(),
            button_selector: "button[type=\"submit\"]".to_owned(),
            pending_label: "Sending...".to_owned(),
            simulated_delay_ms: 1500,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                ".feature-card",
                ".menu-card",
                ".testimonial-card",
                ".about-content",
                ".reservation-content",
                ".section-header",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TransportConfig {
    #[default]
    Simulated,
    Http {
        endpoint: String,
    },
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid(format!(
                "reveal.threshold must be within 0..=1, got {}",
                self.reveal.threshold
            )));
        }
        if let TransportConfig::Http { endpoint } = &self.transport {
            if endpoint.trim().is_empty() {
                return Err(ConfigError::Invalid("transport.endpoint must not be empty".to_owned()));
            }
        }
        if self.theme.storage_key.is_empty() {
            return Err(ConfigError::Invalid("theme.storage_key must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Load from the page's config element, falling back to defaults when it
    /// is absent or invalid.
    #[cfg(feature = "hydrate")]
    pub fn load() -> Self {
        use crate::dom::Element;

        let Some(el) = crate::dom::web::element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        match Self::from_json(&el.text()) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default site config");
                Self::default()
            }
        }
    }
}
