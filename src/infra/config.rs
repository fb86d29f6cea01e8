// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::infra::paths;

/// Environment variables consulted for the Gemini credential, in order.
pub const API_KEY_ENV_VARS: [&str; 3] = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"];

pub const DEFAULT_FALLBACK: &str =
    "I seem to be having trouble connecting to my neural core right now. Please try again later.";
pub const DEFAULT_PLACEHOLDER: &str =
    "I'm processing that thought, but didn't generate a text response.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Resume file (TOML or JSON). The built-in profile is used when unset.
    #[serde(default)]
    pub profile_path: Option<PathBuf>,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub model: String,
    pub temperature: f32,
    /// Only used when none of the API key environment variables are set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// No local timeout when unset; the transport decides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            temperature: 0.7,
            api_key: None,
            request_timeout_secs: None,
        }
    }
}

impl ProviderConfig {
    /// Resolve the API key: environment first, then config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .chain(self.api_key.clone())
            .map(|k| k.trim().to_string())
            .find(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Shown in place of a reply whenever the service call fails.
    pub fallback: String,
    /// Shown when the service answers with no text.
    pub placeholder: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK.into(),
            placeholder: DEFAULT_PLACEHOLDER.into(),
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert!(c.profile_path.is_none());
        assert_eq!(c.provider.model, "gemini-2.5-flash");
        assert!((c.provider.temperature - 0.7).abs() < 0.001);
        assert!(c.provider.request_timeout_secs.is_none());
        assert_eq!(c.chat.fallback, DEFAULT_FALLBACK);
        assert_eq!(c.chat.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.provider.model, "gemini-2.5-flash");
        assert_eq!(config.chat.fallback, DEFAULT_FALLBACK);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
profile_path = "/tmp/me.toml"

[provider]
model = "gemini-2.0-flash"
temperature = 0.2
api_key = "abc"
request_timeout_secs = 30

[chat]
fallback = "Offline."
placeholder = "Hmm."
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.profile_path, Some(PathBuf::from("/tmp/me.toml")));
        assert_eq!(config.provider.model, "gemini-2.0-flash");
        assert!((config.provider.temperature - 0.2).abs() < 0.001);
        assert_eq!(config.provider.api_key.as_deref(), Some("abc"));
        assert_eq!(config.provider.request_timeout_secs, Some(30));
        assert_eq!(config.chat.fallback, "Offline.");
        assert_eq!(config.chat.placeholder, "Hmm.");
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.provider.model, config.provider.model);
        assert_eq!(deserialized.chat.fallback, config.chat.fallback);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[provider]\nmodel = \"m\"\ntemperature = 1.0\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.provider.model, "m");
    }
}
