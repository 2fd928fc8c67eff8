//! Bearer credential loading.
//!
//! The API key never lives in the main config file. It is read from the
//! `PODSCRIBE_API_KEY` environment variable, falling back to a small JSON
//! secrets file (`{"api_key": "..."}`) at a configurable path. The key is
//! never logged and never returned by any endpoint.

use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Environment variable consulted before the secrets file.
pub const API_KEY_ENV: &str = "PODSCRIBE_API_KEY";

#[derive(Debug, Deserialize)]
struct SecretsFile {
    api_key: String,
}

/// Holds the bearer API key for the remote endpoints.
pub struct Secrets {
    api_key: String,
}

impl Secrets {
    /// Load the API key from the environment, falling back to `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(Self {
                    api_key: key.trim().to_string(),
                });
            }
        }

        let path = path.as_ref();
        let contents = fs::read_to_string(path).with_context(|| {
            format!(
                "No API key in ${} and failed to read secrets file {}",
                API_KEY_ENV,
                path.display()
            )
        })?;

        let parsed: SecretsFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse secrets file {}", path.display()))?;

        ensure!(
            !parsed.api_key.trim().is_empty(),
            "Secrets file {} contains an empty api_key",
            path.display()
        );

        Ok(Self {
            api_key: parsed.api_key.trim().to_string(),
        })
    }

    /// Build directly from a key string (used by tests).
    pub fn from_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Keep the key out of debug output and logs.
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
