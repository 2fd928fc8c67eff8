use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub remote: RemoteConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Settings for the remote OpenAI-compatible API (e.g. Groq).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL, without a trailing slash.
    pub base_url: String,

    /// Model id for POST {base_url}/audio/transcriptions.
    pub transcription_model: String,

    /// Model id for POST {base_url}/chat/completions.
    pub summarization_model: String,

    /// Single request timeout applied to both remote calls.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for per-session temporary audio files.
    pub upload_dir: String,

    /// JSON secrets file holding the API key (env var takes precedence).
    pub secrets_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "podscribe".to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            transcription_model: "whisper-large-v3-turbo".to_string(),
            summarization_model: "mixtral-8x7b-32768".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: std::env::temp_dir()
                .join("podscribe-uploads")
                .display()
                .to_string(),
            secrets_path: "config/secrets.json".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
