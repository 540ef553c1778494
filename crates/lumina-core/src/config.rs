use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{LuminaError, Result};
use crate::types::Language;

/// Environment variables checked, in order, for the model API key.
pub const API_KEY_ENV_VARS: [&str; 2] = ["LUMINA_API_KEY", "API_KEY"];

/// Environment variable overriding the model identifier.
pub const MODEL_ENV_VAR: &str = "LUMINA_MODEL";

/// Top-level configuration for the Lumina site.
///
/// Loaded from `~/.lumina/config.toml` by default. Every section falls back to
/// its defaults when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LuminaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

impl LuminaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LuminaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| LuminaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Overlay credentials and model choice from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(*name))
            .find(|value| !value.trim().is_empty())
        {
            self.model.api_key = Some(key);
        }
        if let Some(model) = lookup(MODEL_ENV_VAR).filter(|m| !m.trim().is_empty()) {
            self.model.model = model;
        }
    }

    /// Whether an external model credential is configured.
    pub fn has_credential(&self) -> bool {
        self.model.has_credential()
    }
}

/// General site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Language the site starts in.
    pub default_language: Language,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            default_language: Language::Es,
        }
    }
}

/// How overlapping chat submits are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// One responder call in flight per session; replies land in submit order.
    #[default]
    Serialized,
    /// Calls overlap freely; replies land in completion order.
    Concurrent,
}

/// Chat widget behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Artificial "thinking" delay of the local responder, in milliseconds.
    pub fallback_delay_ms: u64,
    /// Pick a random candidate reply instead of the canonical one.
    pub randomize_replies: bool,
    pub submit_policy: SubmitPolicy,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            fallback_delay_ms: 1500,
            randomize_replies: false,
            submit_policy: SubmitPolicy::Serialized,
        }
    }
}

/// External generative model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// API key; external calls are attempted only when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ModelConfig {
    pub fn has_credential(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = LuminaConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.default_language, Language::Es);
        assert_eq!(config.chat.fallback_delay_ms, 1500);
        assert!(!config.chat.randomize_replies);
        assert_eq!(config.chat.submit_policy, SubmitPolicy::Serialized);
        assert!(config.model.api_key.is_none());
        assert_eq!(config.model.model, "gemini-2.5-flash");
        assert_eq!(config.model.timeout_secs, 30);
        assert!(!config.has_credential());
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"
default_language = "en"

[chat]
fallback_delay_ms = 0
randomize_replies = true
submit_policy = "concurrent"

[model]
api_key = "secret"
model = "gemini-2.0-flash"
base_url = "http://localhost:9999/v1beta"
timeout_secs = 5
"#;
        let file = create_temp_config(content);
        let config = LuminaConfig::load(file.path()).unwrap();

        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.default_language, Language::En);
        assert_eq!(config.chat.fallback_delay_ms, 0);
        assert!(config.chat.randomize_replies);
        assert_eq!(config.chat.submit_policy, SubmitPolicy::Concurrent);
        assert_eq!(config.model.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model.model, "gemini-2.0-flash");
        assert_eq!(config.model.base_url, "http://localhost:9999/v1beta");
        assert_eq!(config.model.timeout_secs, 5);
        assert!(config.has_credential());
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let file = create_temp_config("[chat]\nfallback_delay_ms = 10\n");
        let config = LuminaConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.fallback_delay_ms, 10);
        assert_eq!(config.chat.submit_policy, SubmitPolicy::Serialized);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.model.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = LuminaConfig::load(file.path()).unwrap();
        assert_eq!(config.general.default_language, Language::Es);
        assert!(!config.has_credential());
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is [[[ not toml");
        let err = LuminaConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, LuminaError::Config(_)));
    }

    #[test]
    fn test_load_unknown_language_fails() {
        let file = create_temp_config("[general]\ndefault_language = \"fr\"\n");
        assert!(LuminaConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = LuminaConfig::load_or_default(Path::new("/does/not/exist/config.toml"));
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.fallback_delay_ms, 1500);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = LuminaConfig::default();
        config.general.default_language = Language::En;
        config.chat.submit_policy = SubmitPolicy::Concurrent;
        config.save(&path).unwrap();

        let reloaded = LuminaConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.default_language, Language::En);
        assert_eq!(reloaded.chat.submit_policy, SubmitPolicy::Concurrent);
    }

    #[test]
    fn test_save_omits_absent_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        LuminaConfig::default().save(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("api_key"));
    }

    #[test]
    fn test_blank_api_key_is_not_a_credential() {
        let mut config = LuminaConfig::default();
        config.model.api_key = Some("   ".to_string());
        assert!(!config.has_credential());

        config.model.api_key = Some("k".to_string());
        assert!(config.has_credential());
    }

    #[test]
    fn test_overrides_prefer_lumina_api_key() {
        let vars = env(&[("LUMINA_API_KEY", "primary"), ("API_KEY", "secondary")]);
        let mut config = LuminaConfig::default();
        config.apply_overrides(|name| vars.get(name).cloned());
        assert_eq!(config.model.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_overrides_fall_back_to_api_key() {
        let vars = env(&[("LUMINA_API_KEY", " "), ("API_KEY", "secondary")]);
        let mut config = LuminaConfig::default();
        config.apply_overrides(|name| vars.get(name).cloned());
        assert_eq!(config.model.api_key.as_deref(), Some("secondary"));
    }

    #[test]
    fn test_overrides_keep_file_key_when_env_empty() {
        let vars = env(&[]);
        let mut config = LuminaConfig::default();
        config.model.api_key = Some("from-file".to_string());
        config.apply_overrides(|name| vars.get(name).cloned());
        assert_eq!(config.model.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_overrides_model() {
        let vars = env(&[("LUMINA_MODEL", "gemini-exp")]);
        let mut config = LuminaConfig::default();
        config.apply_overrides(|name| vars.get(name).cloned());
        assert_eq!(config.model.model, "gemini-exp");
        assert!(config.model.api_key.is_none());
    }

    #[test]
    fn test_submit_policy_serde() {
        let json = serde_json::to_string(&SubmitPolicy::Concurrent).unwrap();
        assert_eq!(json, "\"concurrent\"");
    }
}
