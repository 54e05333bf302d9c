// ABOUTME: Configuration file loading, validation, and hierarchical merging for GitLab CLI
// ABOUTME: Supports TOML config files in XDG locations plus environment overrides

use anyhow::{Context, Result, anyhow};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{config as files, env};

#[derive(Clone, Deserialize, Default)]
pub struct Config {
    /// Instance host name, e.g. `gitlab.example.com`
    #[serde(default)]
    pub host: Option<String>,
    /// Full instance URL; takes precedence over `host`
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub token: Option<SecretString>,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub display_hyperlinks: Option<bool>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("api_url", &self.api_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("display_hyperlinks", &self.display_hyperlinks)
            .finish()
    }
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths.iter().map(|p| p.as_str()).collect::<Vec<_>>())
    }

    /// Load configuration from file paths given highest precedence first.
    /// Missing files are skipped; unreadable or invalid ones are errors.
    pub fn load_from_paths(paths: &[&str]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths.iter().rev() {
            if !Path::new(path).exists() {
                continue;
            }
            log::debug!("Loading config from {}", path);
            config = config.merge(Self::load_from_file(path)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get standard config file paths in order of precedence (highest first)
    pub fn get_config_paths() -> Vec<String> {
        let mut paths = Vec::new();

        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(
                current_dir
                    .join(files::LOCAL_FILE)
                    .to_string_lossy()
                    .to_string(),
            );
        }

        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            let path = PathBuf::from(config_home)
                .join(files::APP_DIR)
                .join(files::FILE_NAME);
            paths.push(path.to_string_lossy().to_string());
        }

        if let Some(home_dir) = dirs::home_dir() {
            let path = home_dir
                .join(".config")
                .join(files::APP_DIR)
                .join(files::FILE_NAME);
            paths.push(path.to_string_lossy().to_string());
        }

        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            host: other.host.or(self.host),
            api_url: other.api_url.or(self.api_url),
            token: other.token.or(self.token),
            display_hyperlinks: other.display_hyperlinks.or(self.display_hyperlinks),
        }
    }

    /// `GITLAB_TOKEN` and `GITLAB_HOST` override file values.
    pub fn with_env_overrides(self) -> Config {
        let from_env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        Config {
            token: from_env(env::GITLAB_TOKEN)
                .map(SecretString::from)
                .or(self.token),
            host: from_env(env::GITLAB_HOST).or(self.host),
            ..self
        }
    }

    /// Instance URL for the client, or `None` for gitlab.com.
    pub fn base_url(&self) -> Option<String> {
        if let Some(url) = &self.api_url {
            return Some(url.clone());
        }
        self.host.as_ref().map(|host| {
            if host.contains("://") {
                host.clone()
            } else {
                format!("https://{}", host)
            }
        })
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(host) = &self.host {
            if host.trim().is_empty() {
                return Err(anyhow!("Invalid host: must not be empty"));
            }
        }
        if let Some(url) = &self.api_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!(
                    "Invalid api_url '{}'. Must start with http:// or https://",
                    url
                ));
            }
        }

        Ok(())
    }
}

// Accepts `true`/`false` as booleans or strings
fn bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(value)) => Ok(Some(value)),
        Some(Flag::Text(text)) => match text.as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(D::Error::custom(format!(
                "Invalid value '{}'. Must be one of: true, false",
                other
            ))),
        },
    }
}
