use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for veil
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub redaction: RedactionConfig,

    #[serde(default)]
    pub entities: EntitiesConfig,

    #[serde(default)]
    pub tracing: TracingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Default redaction mode for new sessions
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitiesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Gazetteer model file; the bundled model is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_project")]
    pub project: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for EntitiesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: None,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            project: default_project(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api.smith.langchain.com".to_string()
}

fn default_project() -> String {
    "compliance-demo".to_string()
}

fn default_api_key_env() -> String {
    "LANGSMITH_API_KEY".to_string()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, writing the defaults there if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            Ok(config)
        }
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "veil", "veil") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.veil/config.toml")
        }
    }

    /// API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.tracing.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.redaction.enabled);
        assert!(config.entities.enabled);
        assert!(config.entities.model.is_none());
        assert_eq!(config.tracing.project, "compliance-demo");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.tracing.api_url, config.tracing.api_url);
        assert_eq!(parsed.redaction.enabled, config.redaction.enabled);
    }

    #[test]
    fn test_partial_config() {
        let parsed: Config = toml::from_str(
            r#"
            [entities]
            enabled = false
            model = "/opt/veil/model.json"
            "#,
        )
        .unwrap();

        assert!(parsed.redaction.enabled);
        assert!(!parsed.entities.enabled);
        assert_eq!(
            parsed.entities.model,
            Some(PathBuf::from("/opt/veil/model.json"))
        );
        assert_eq!(parsed.tracing.api_key_env, "LANGSMITH_API_KEY");
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert!(config.redaction.enabled);

        std::fs::write(&path, "[redaction]\nenabled = false\n").unwrap();
        let reloaded = Config::load_from(&path).unwrap();
        assert!(!reloaded.redaction.enabled);
    }
}
