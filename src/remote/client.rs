use super::error::RemoteError;
use super::messages::{ChatMessage, ChatRequest, ChatResponse};
use crate::config::RemoteConfig;
use anyhow::{Context, Result};
use reqwest::multipart;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Fixed system instruction for the summarization call.
const SUMMARY_SYSTEM_PROMPT: &str = "Summarize the given text concisely.";

const SUMMARY_TEMPERATURE: f32 = 0.7;
const SUMMARY_MAX_TOKENS: u32 = 150;

/// Client for the remote transcription and summarization endpoints.
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    transcription_model: String,
    summarization_model: String,
}

impl RemoteClient {
    pub fn new(config: &RemoteConfig, api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            transcription_model: config.transcription_model.clone(),
            summarization_model: config.summarization_model.clone(),
        })
    }

    /// Transcribe the audio file at `audio_path`.
    ///
    /// Sends the file as multipart form data (`file` + `model` fields).
    /// Returns the `text` field of the response body; any other shape is
    /// surfaced as a `Service` error carrying the raw body.
    pub async fn transcribe(&self, audio_path: &Path) -> Result<String, RemoteError> {
        let bytes = tokio::fs::read(audio_path).await?;
        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        debug!(
            "Sending {} bytes to {}/audio/transcriptions (model {})",
            bytes.len(),
            self.base_url,
            self.transcription_model
        );

        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new()
            .part("file", part)
            .text("model", self.transcription_model.clone());

        let response = self
            .http
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RemoteError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|_| RemoteError::Service {
                status: status.as_u16(),
                body: body.clone(),
            })?;

        match json.get("text").and_then(|t| t.as_str()) {
            Some(text) => {
                info!("Transcription response received ({} chars)", text.len());
                Ok(text.to_string())
            }
            None => Err(RemoteError::Service {
                status: status.as_u16(),
                body,
            }),
        }
    }

    /// Summarize `transcript` via the chat-completion endpoint.
    ///
    /// The transcript is sent as-is as the user message, even when empty.
    /// Returns the first choice's message content.
    pub async fn summarize(&self, transcript: &str) -> Result<String, RemoteError> {
        let request = ChatRequest {
            model: self.summarization_model.clone(),
            messages: vec![
                ChatMessage::system(SUMMARY_SYSTEM_PROMPT),
                ChatMessage::user(transcript),
            ],
            temperature: SUMMARY_TEMPERATURE,
            max_tokens: SUMMARY_MAX_TOKENS,
        };

        debug!(
            "Requesting summary from {}/chat/completions (model {})",
            self.base_url, self.summarization_model
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RemoteError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|_| RemoteError::Service {
                status: status.as_u16(),
                body: body.clone(),
            })?;

        match parsed.choices.into_iter().next() {
            Some(choice) => {
                info!(
                    "Summary response received ({} chars)",
                    choice.message.content.len()
                );
                Ok(choice.message.content)
            }
            None => Err(RemoteError::Service {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
