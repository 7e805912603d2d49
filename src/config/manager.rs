use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Default settings in the `[ivc]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IvcConfig {
    /// Interview backend endpoint URL.
    pub endpoint: Option<String>,
    /// Candidate display name.
    pub candidate: Option<String>,
}

/// Credentials in the `[auth]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl AuthConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/ivc/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub ivc: IvcConfig,
    /// API credentials.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The API key (if configured).
    pub api_key: Option<String>,
    /// Candidate display name (if configured).
    pub candidate: Option<String>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Endpoint URL override.
    pub endpoint: Option<String>,
    /// Candidate display name override.
    pub candidate: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values.
///
/// # Errors
///
/// Returns an error if the endpoint is missing from both sources.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.ivc.endpoint.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'endpoint'\n\n\
                 Please provide it via:\n  \
                 - CLI option: ivc --endpoint <url>\n  \
                 - Config file: Run 'ivc configure' to set up configuration"
            )
        })?;

    let candidate = options
        .candidate
        .as_ref()
        .or(config_file.ivc.candidate.as_ref())
        .cloned();

    Ok(ResolvedConfig {
        endpoint,
        api_key: config_file.auth.get_api_key(),
        candidate,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/ivc/config.toml`
    /// or `~/.config/ivc/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            ivc: IvcConfig {
                endpoint: Some("http://localhost:3000".to_string()),
                candidate: Some("Ada".to_string()),
            },
            auth: AuthConfig {
                api_key: None,
                api_key_env: Some("IVC_API_KEY".to_string()),
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(
            loaded.ivc.endpoint,
            Some("http://localhost:3000".to_string())
        );
        assert_eq!(loaded.ivc.candidate, Some("Ada".to_string()));
        assert_eq!(loaded.auth.api_key_env, Some("IVC_API_KEY".to_string()));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let result = manager.load();
        assert!(result.is_err());
    }

    #[test]
    fn test_auth_get_api_key_from_env() {
        // SAFETY: This test runs in isolation and only modifies a test-specific env var
        unsafe {
            std::env::set_var("IVC_TEST_API_KEY", "test-key-value");
        }

        let auth = AuthConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("IVC_TEST_API_KEY".to_string()),
        };

        // Environment variable takes priority
        assert_eq!(auth.get_api_key(), Some("test-key-value".to_string()));

        // SAFETY: Cleanup test env var
        unsafe {
            std::env::remove_var("IVC_TEST_API_KEY");
        }
    }

    #[test]
    fn test_auth_get_api_key_fallback() {
        // SAFETY: This test runs in isolation and only modifies a test-specific env var
        unsafe {
            std::env::remove_var("IVC_TEST_NONEXISTENT_KEY");
        }

        let auth = AuthConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("IVC_TEST_NONEXISTENT_KEY".to_string()),
        };

        // Falls back to api_key when env var not set
        assert_eq!(auth.get_api_key(), Some("fallback-key".to_string()));
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let config = ConfigFile {
            ivc: IvcConfig {
                endpoint: Some("http://file.local".to_string()),
                candidate: Some("File Name".to_string()),
            },
            auth: AuthConfig::default(),
        };
        let options = ResolveOptions {
            endpoint: Some("http://cli.local".to_string()),
            candidate: Some("CLI Name".to_string()),
        };

        let resolved = resolve_config(&options, &config).unwrap();

        assert_eq!(resolved.endpoint, "http://cli.local");
        assert_eq!(resolved.candidate, Some("CLI Name".to_string()));
    }

    #[test]
    fn test_resolve_config_falls_back_to_file() {
        let config = ConfigFile {
            ivc: IvcConfig {
                endpoint: Some("http://file.local".to_string()),
                candidate: None,
            },
            auth: AuthConfig::default(),
        };

        let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

        assert_eq!(resolved.endpoint, "http://file.local");
        assert!(resolved.candidate.is_none());
    }

    #[test]
    fn test_resolve_config_missing_endpoint() {
        let result = resolve_config(&ResolveOptions::default(), &ConfigFile::default());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("endpoint"));
    }
}
