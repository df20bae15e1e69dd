use std::env;
use std::time::Duration;

use crate::domain::{DEFAULT_API_URL, DEFAULT_CMS_URL};

pub const API_URL_VAR: &str = "PORTFOLIO_API_URL";
pub const CMS_URL_VAR: &str = "PORTFOLIO_CMS_URL";
pub const TIMEOUT_VAR: &str = "PORTFOLIO_TIMEOUT_SECS";

/// Settings resolved once at startup and handed to the HTTP adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub cms_url: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            cms_url: DEFAULT_CMS_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves every setting through `lookup`, falling back to defaults for
    /// unset or blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = read(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let cms_url = read(CMS_URL_VAR).unwrap_or_else(|| DEFAULT_CMS_URL.to_string());

        let timeout = read(TIMEOUT_VAR).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => {
                tracing::warn!("Ignoring invalid {}={:?}", TIMEOUT_VAR, raw);
                None
            }
        });

        Self {
            base_url: normalize_base(&base_url),
            cms_url,
            timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base(base_url);
        self
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

fn normalize_base(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.url_for("/hero"), "http://localhost:5000/api/hero");
    }

    #[test]
    fn env_overrides_base_url() {
        let config = ClientConfig::from_lookup(lookup(&[(API_URL_VAR, "https://example.com/api/")]));
        assert_eq!(config.url_for("/health"), "https://example.com/api/health");
    }

    #[test]
    fn blank_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[(API_URL_VAR, "  "), (CMS_URL_VAR, "")]));
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.cms_url, DEFAULT_CMS_URL);
    }

    #[test]
    fn timeout_parses_positive_seconds_only() {
        let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "15")]));
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));

        let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")]));
        assert_eq!(config.timeout, None);

        let config = ClientConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")]));
        assert_eq!(config.timeout, None);
    }
}
