use std::env;
use std::time::Duration;

/// Default model name sent to the explanation service
pub const DEFAULT_EXPLAINER_MODEL: &str = "llama2";

/// Default request timeout for the explanation service
pub const DEFAULT_EXPLAINER_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of an OpenAI-compatible chat API (e.g. `http://localhost:11434/v1`).
    /// When unset, descriptions always use the fallback text.
    pub explainer_url: Option<String>,
    pub explainer_model: String,
    /// Bearer token for the explanation service
    pub explainer_api_key: Option<String>,
    pub explainer_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            explainer_url: None,
            explainer_model: DEFAULT_EXPLAINER_MODEL.to_string(),
            explainer_api_key: None,
            explainer_timeout: Duration::from_secs(DEFAULT_EXPLAINER_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by `from_env` and tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            explainer_url: non_empty("EXPLAINER_URL"),
            explainer_model: non_empty("EXPLAINER_MODEL")
                .unwrap_or_else(|| DEFAULT_EXPLAINER_MODEL.to_string()),
            explainer_api_key: non_empty("EXPLAINER_API_KEY"),
            explainer_timeout: Duration::from_secs(
                non_empty("EXPLAINER_TIMEOUT_SECS")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(DEFAULT_EXPLAINER_TIMEOUT_SECS),
            ),
        }
    }

    /// Check if a remote explanation service is configured
    pub fn explainer_enabled(&self) -> bool {
        self.explainer_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert!(!config.explainer_enabled());
    }

    #[test]
    fn reads_explainer_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("EXPLAINER_URL", "http://localhost:11434/v1"),
            ("EXPLAINER_MODEL", "llama3"),
            ("EXPLAINER_API_KEY", "sk-test"),
            ("EXPLAINER_TIMEOUT_SECS", "5"),
        ]));

        assert!(config.explainer_enabled());
        assert_eq!(
            config.explainer_url.as_deref(),
            Some("http://localhost:11434/v1")
        );
        assert_eq!(config.explainer_model, "llama3");
        assert_eq!(config.explainer_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.explainer_timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_lookup(lookup_from(&[
            ("EXPLAINER_URL", "  "),
            ("EXPLAINER_TIMEOUT_SECS", "soon"),
        ]));

        assert!(!config.explainer_enabled());
        assert_eq!(
            config.explainer_timeout,
            Duration::from_secs(DEFAULT_EXPLAINER_TIMEOUT_SECS)
        );
    }
}
