//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/signdex/config.toml` by default. CLI flags override the
//! file; the file overrides built-in defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use signdex_core::FormatOptions;

/// Configuration for the signdex client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service connection settings.
    #[serde(default)]
    pub api: ApiSettings,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the dictionary service.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: signdex_api::DEFAULT_BASE_URL.to_string(),
            timeout: 10,
        }
    }
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Maximum description length (truncated with an ellipsis).
    pub max_description_length: Option<usize>,

    /// Text shown when a listing is empty.
    pub no_results_text: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_description_length: None,
            no_results_text: "No results".to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config: {}", e))?;
            toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("signdex")
    }

    /// Converts the display settings into formatter options.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            max_description_length: self.display.max_description_length,
            no_results_text: self.display.no_results_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, signdex_api::DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout, 10);
        assert!(config.display.max_description_length.is_none());
        assert_eq!(config.display.no_results_text, "No results");
    }

    #[test]
    fn parses_full_config() {
        let toml_content = r#"
[api]
base_url = "https://dictionary.example.test/api"
timeout = 3

[display]
max_description_length = 60
no_results_text = "Nothing matched"
"#;
        let config: ClientConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://dictionary.example.test/api");
        assert_eq!(config.api.timeout, 3);
        assert_eq!(config.display.max_description_length, Some(60));
        assert_eq!(config.display.no_results_text, "Nothing matched");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: ClientConfig = toml::from_str("[display]\nno_results_text = \"Nope\"\n").unwrap();
        assert_eq!(config.api.base_url, signdex_api::DEFAULT_BASE_URL);
        assert_eq!(config.display.no_results_text, "Nope");
    }

    #[test]
    fn empty_config_is_valid() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.api.timeout, 10);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ntimeout = 2\n").unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(config.api.timeout, 2);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let result = ClientConfig::load_from(&PathBuf::from("/definitely/not/here.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn format_options_mirror_display_settings() {
        let config: ClientConfig = toml::from_str(
            "[display]\nmax_description_length = 12\nno_results_text = \"None\"\n",
        )
        .unwrap();
        let options = config.format_options();
        assert_eq!(options.max_description_length, Some(12));
        assert_eq!(options.no_results_text, "None");
    }

    #[test]
    fn serializes_back_to_toml() {
        let config = ClientConfig::default();
        let dumped = toml::to_string_pretty(&config).unwrap();
        let parsed: ClientConfig = toml::from_str(&dumped).unwrap();
        assert_eq!(parsed.api.base_url, config.api.base_url);
    }
}
