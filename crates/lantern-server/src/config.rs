//! Server configuration
//!
//! Read from Shuttle secrets; every key is optional.

use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Gemini credential; `None` disables the values analysis
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_timeout: Duration,
    /// Bearer token for `/api/*`; `None` disables authentication
    pub api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_timeout: Duration::from_secs(DEFAULT_GEMINI_TIMEOUT_SECS),
            api_key: None,
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let gemini_timeout = match get("GEMINI_TIMEOUT_SECS").map(|v| v.parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
            Some(_) => {
                tracing::warn!(
                    "⚠️  Invalid GEMINI_TIMEOUT_SECS - using {}s",
                    DEFAULT_GEMINI_TIMEOUT_SECS
                );
                defaults.gemini_timeout
            }
            None => defaults.gemini_timeout,
        };

        Self {
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_timeout,
            api_key: get("LANTERN_API_KEY"),
        }
    }
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
    fn test_defaults_when_empty() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.gemini_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_reads_all_keys() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "g-key"),
            ("GEMINI_MODEL", "gemini-2.0-flash-exp"),
            ("GEMINI_TIMEOUT_SECS", "12"),
            ("LANTERN_API_KEY", "secret"),
        ]));
        assert_eq!(config.gemini_api_key.as_deref(), Some("g-key"));
        assert_eq!(config.gemini_model, "gemini-2.0-flash-exp");
        assert_eq!(config.gemini_timeout, Duration::from_secs(12));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_and_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "  "),
            ("GEMINI_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.gemini_api_key, None);
        assert_eq!(config.gemini_timeout, Duration::from_secs(30));
    }
}
