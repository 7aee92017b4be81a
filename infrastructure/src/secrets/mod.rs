//! API credential resolution
//!
//! The Gemini key is looked up in order: the process environment, the
//! `api_key` value from the loaded config, then a `secrets.toml` in the user
//! config directory. Absence from all three is startup-fatal; the binary
//! surfaces the message and stops before any remote call is possible.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default environment variable holding the API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

const SECRETS_FILE: &str = "secrets.toml";

/// Errors raised while resolving the API credential
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error(
        "No Gemini API key found. Set the {env_var} environment variable, add \
         `api_key` under [gemini] in your config file, or create {secrets_hint} \
         with `api_key = \"...\"`."
    )]
    Missing {
        env_var: String,
        secrets_hint: String,
    },

    #[error("Failed to read secrets file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse secrets file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Raw structure of `secrets.toml`
#[derive(Debug, Deserialize)]
struct SecretsFile {
    api_key: Option<String>,
}

/// Resolves the Gemini API key from environment, config, or secrets file.
pub struct ApiKeyProvider {
    env_var: String,
    config_key: Option<String>,
    secrets_path: Option<PathBuf>,
}

impl ApiKeyProvider {
    pub fn new() -> Self {
        Self {
            env_var: GEMINI_API_KEY_ENV.to_string(),
            config_key: None,
            secrets_path: default_secrets_path(),
        }
    }

    /// Override the environment variable name (from config `api_key_env`).
    pub fn with_env_var(mut self, var: impl Into<String>) -> Self {
        self.env_var = var.into();
        self
    }

    /// Provide the direct key from the loaded config, if any.
    pub fn with_config_key(mut self, key: Option<String>) -> Self {
        self.config_key = key;
        self
    }

    /// Override the secrets file location.
    pub fn with_secrets_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.secrets_path = Some(path.into());
        self
    }

    /// Resolve the API key, reading the process environment.
    pub fn resolve(&self) -> Result<String, CredentialError> {
        self.resolve_with_env(std::env::var(&self.env_var).ok())
    }

    fn resolve_with_env(&self, env_value: Option<String>) -> Result<String, CredentialError> {
        if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
            debug!("API key resolved from ${}", self.env_var);
            return Ok(key);
        }

        if let Some(key) = self
            .config_key
            .as_ref()
            .filter(|k| !k.trim().is_empty())
        {
            debug!("API key resolved from config file");
            return Ok(key.clone());
        }

        if let Some(path) = self.secrets_path.as_ref().filter(|p| p.exists())
            && let Some(key) = Self::read_secrets_file(path)?
        {
            debug!("API key resolved from {}", path.display());
            return Ok(key);
        }

        Err(CredentialError::Missing {
            env_var: self.env_var.clone(),
            secrets_hint: self
                .secrets_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| SECRETS_FILE.to_string()),
        })
    }

    fn read_secrets_file(path: &Path) -> Result<Option<String>, CredentialError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CredentialError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let secrets: SecretsFile =
            toml::from_str(&raw).map_err(|source| CredentialError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(secrets.api_key.filter(|k| !k.trim().is_empty()))
    }
}

impl Default for ApiKeyProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Default secrets file location: `<config dir>/pharma-chat/secrets.toml`.
pub fn default_secrets_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pharma-chat").join(SECRETS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn provider() -> ApiKeyProvider {
        // Point the secrets lookup at a path that never exists so the
        // developer's real secrets file cannot leak into tests.
        ApiKeyProvider::new().with_secrets_path("/nonexistent/pharma-chat/secrets.toml")
    }

    #[test]
    fn test_env_wins() {
        let key = provider()
            .with_config_key(Some("from-config".to_string()))
            .resolve_with_env(Some("from-env".to_string()))
            .unwrap();
        assert_eq!(key, "from-env");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let key = provider()
            .with_config_key(Some("from-config".to_string()))
            .resolve_with_env(Some("   ".to_string()))
            .unwrap();
        assert_eq!(key, "from-config");
    }

    #[test]
    fn test_secrets_file_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "api_key = \"from-secrets\"").unwrap();

        let key = ApiKeyProvider::new()
            .with_secrets_path(&path)
            .resolve_with_env(None)
            .unwrap();
        assert_eq!(key, "from-secrets");
    }

    #[test]
    fn test_missing_everywhere() {
        let err = provider().resolve_with_env(None).unwrap_err();
        assert!(matches!(err, CredentialError::Missing { .. }));
        assert!(err.to_string().contains(GEMINI_API_KEY_ENV));
    }

    #[test]
    fn test_unparseable_secrets_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "api_key = [not toml").unwrap();

        let err = ApiKeyProvider::new()
            .with_secrets_path(&path)
            .resolve_with_env(None)
            .unwrap_err();
        assert!(matches!(err, CredentialError::Parse { .. }));
    }
}
