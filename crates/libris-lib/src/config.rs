use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Element id of the optional JSON block a page can use to override defaults.
pub const CONFIG_ELEMENT_ID: &str = "libris-config";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PageConfig {
    #[serde(default = "default_csrf_cookie")]
    pub csrf_cookie: String,
    #[serde(default = "default_csrf_header")]
    pub csrf_header: String,
    #[serde(default = "default_alert_timeout_ms")]
    pub alert_timeout_ms: u32,
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u32,
    #[serde(default = "default_payment_success_path")]
    pub payment_success_path: String,
    #[serde(default = "default_payment_intent_path")]
    pub payment_intent_path: String,
    pub stripe_publishable_key: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            csrf_cookie: default_csrf_cookie(),
            csrf_header: default_csrf_header(),
            alert_timeout_ms: default_alert_timeout_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
            payment_success_path: default_payment_success_path(),
            payment_intent_path: default_payment_intent_path(),
            stripe_publishable_key: None,
        }
    }
}

fn default_csrf_cookie() -> String {
    "csrftoken".to_string()
}

fn default_csrf_header() -> String {
    "X-CSRFToken".to_string()
}

fn default_alert_timeout_ms() -> u32 {
    5000
}

fn default_redirect_delay_ms() -> u32 {
    2000
}

fn default_payment_success_path() -> String {
    "/payments/success/".to_string()
}

fn default_payment_intent_path() -> String {
    "/payments/create-intent/".to_string()
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Parses `json`, falling back to defaults when it is missing or malformed.
    pub fn load(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config =
            PageConfig::from_json(r#"{"stripe_publishable_key": "pk_test_123"}"#).unwrap();
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.alert_timeout_ms, 5000);
        assert_eq!(config.redirect_delay_ms, 2000);
        assert_eq!(config.payment_success_path, "/payments/success/");
        assert_eq!(config.stripe_publishable_key.as_deref(), Some("pk_test_123"));
    }

    #[test]
    fn test_override() {
        let config = PageConfig::from_json(r#"{"alert_timeout_ms": 8000}"#).unwrap();
        assert_eq!(config.alert_timeout_ms, 8000);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        assert!(PageConfig::from_json("{not json").is_err());
        assert_eq!(PageConfig::load(Some("{not json")), PageConfig::default());
        assert_eq!(PageConfig::load(Some("  ")), PageConfig::default());
        assert_eq!(PageConfig::load(None), PageConfig::default());
    }
}
