//! Application configuration
//!
//! Desktop reads `.env` and the process environment at startup. The browser
//! build has no environment, so its values are baked in at compile time.

use std::time::Duration;

use crate::application::DEFAULT_REQUEST_TIMEOUT_MS;
use crate::ui::ShellKind;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5678/webhook";
pub const DEFAULT_AUTH_URL: &str = "http://localhost:54321";

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the automation webhooks (`/trips/generate`, `/packages`, ...)
    pub api_base_url: String,
    /// Base URL of the auth provider and table API
    pub auth_url: String,
    /// Public anonymous key sent as `apikey`
    pub auth_anon_key: String,
    /// Optional webhook told about every new account
    pub signup_webhook_url: Option<String>,
    pub request_timeout_ms: u64,
    /// Forced layout; detected from the window when unset
    pub shell: Option<ShellKind>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            auth_anon_key: String::new(),
            signup_webhook_url: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            shell: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `.env` and environment variables
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {:?}", path),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env: {}", e),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration captured at compile time
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "TRIPMATE_API_BASE_URL" => option_env!("TRIPMATE_API_BASE_URL"),
                "TRIPMATE_AUTH_URL" => option_env!("TRIPMATE_AUTH_URL"),
                "TRIPMATE_AUTH_ANON_KEY" => option_env!("TRIPMATE_AUTH_ANON_KEY"),
                "TRIPMATE_SIGNUP_WEBHOOK_URL" => option_env!("TRIPMATE_SIGNUP_WEBHOOK_URL"),
                "TRIPMATE_REQUEST_TIMEOUT_MS" => option_env!("TRIPMATE_REQUEST_TIMEOUT_MS"),
                "TRIPMATE_SHELL" => option_env!("TRIPMATE_SHELL"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Build from any key lookup. Missing or invalid values fall back to
    /// defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &str, default: String| {
            get(key).unwrap_or_else(|| {
                tracing::warn!("{} not set, using {:?}", key, default);
                default
            })
        };

        let request_timeout_ms = match get("TRIPMATE_REQUEST_TIMEOUT_MS") {
            None => defaults.request_timeout_ms,
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    tracing::warn!(
                        "TRIPMATE_REQUEST_TIMEOUT_MS must be a positive number of milliseconds, got {:?}",
                        raw
                    );
                    defaults.request_timeout_ms
                }
            },
        };

        Self {
            api_base_url: required("TRIPMATE_API_BASE_URL", defaults.api_base_url),
            auth_url: required("TRIPMATE_AUTH_URL", defaults.auth_url),
            auth_anon_key: required("TRIPMATE_AUTH_ANON_KEY", defaults.auth_anon_key),
            signup_webhook_url: get("TRIPMATE_SIGNUP_WEBHOOK_URL"),
            request_timeout_ms,
            shell: get("TRIPMATE_SHELL").and_then(|s| ShellKind::parse(&s)),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        assert_eq!(config(&[]), AppConfig::default());
        assert_eq!(AppConfig::default().request_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_values_are_read_and_trimmed() {
        let cfg = config(&[
            ("TRIPMATE_API_BASE_URL", " https://n8n.example.com/webhook "),
            ("TRIPMATE_AUTH_URL", "https://abc.supabase.co"),
            ("TRIPMATE_AUTH_ANON_KEY", "anon"),
            ("TRIPMATE_SIGNUP_WEBHOOK_URL", "https://n8n.example.com/webhook/signup"),
            ("TRIPMATE_REQUEST_TIMEOUT_MS", "15000"),
            ("TRIPMATE_SHELL", "Mobile"),
        ]);
        assert_eq!(cfg.api_base_url, "https://n8n.example.com/webhook");
        assert_eq!(cfg.auth_anon_key, "anon");
        assert_eq!(
            cfg.signup_webhook_url.as_deref(),
            Some("https://n8n.example.com/webhook/signup")
        );
        assert_eq!(cfg.request_timeout(), Duration::from_secs(15));
        assert_eq!(cfg.shell, Some(ShellKind::Mobile));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = config(&[
            ("TRIPMATE_REQUEST_TIMEOUT_MS", "soon"),
            ("TRIPMATE_SIGNUP_WEBHOOK_URL", "   "),
            ("TRIPMATE_SHELL", "tablet"),
        ]);
        assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(cfg.signup_webhook_url, None);
        assert_eq!(cfg.shell, None);

        assert_eq!(
            config(&[("TRIPMATE_REQUEST_TIMEOUT_MS", "0")]).request_timeout_ms,
            DEFAULT_REQUEST_TIMEOUT_MS
        );
    }
}
